pub mod api;
pub mod diagnostic;
pub mod error;
pub mod fretboard;
pub mod lexer;
pub mod preset;
pub mod session;
pub mod theory;
pub mod token;
pub mod tuning;

use crate::api::FretboardRequest;
use crate::tuning::Tuning;
use wasm_bindgen::prelude::*;

pub use crate::theory::{invert, note_at_fret, notes_in_key};

/// The crate version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// WASM-exposed: return the fretboard-core version string.
#[wasm_bindgen]
pub fn core_version() -> String {
    VERSION.to_string()
}

/// WASM-exposed: scale notes for the key/scale selectors.
/// Always resolves; failures come back as `{ success: false, message }`.
#[wasm_bindgen]
pub fn get_scale_notes(key: &str, scale_type: &str) -> Result<JsValue, JsValue> {
    let response = api::scale_notes_response(key, scale_type);
    serde_wasm_bindgen::to_value(&response).map_err(|e| JsValue::from_str(&format!("{e}")))
}

/// WASM-exposed: the note `fret` semitones above `open_note`.
#[wasm_bindgen(js_name = note_at_fret)]
pub fn fret_note(open_note: &str, fret: u32) -> Result<String, JsValue> {
    theory::note_at_fret(open_note, fret)
        .map(str::to_string)
        .map_err(|e| JsValue::from_str(&format!("{e}")))
}

/// WASM-exposed: reverse a list of open-string notes.
#[wasm_bindgen]
pub fn invert_tuning(tuning: JsValue) -> Result<JsValue, JsValue> {
    let tuning: Vec<String> =
        serde_wasm_bindgen::from_value(tuning).map_err(|e| JsValue::from_str(&format!("{e}")))?;
    serde_wasm_bindgen::to_value(&theory::invert(&tuning))
        .map_err(|e| JsValue::from_str(&format!("{e}")))
}

/// WASM-exposed: all built-in instruments.
#[wasm_bindgen]
pub fn instrument_presets() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(preset::presets()).map_err(|e| JsValue::from_str(&format!("{e}")))
}

/// WASM-exposed: default tuning for an instrument (empty when unknown).
#[wasm_bindgen]
pub fn tuning_options(instrument: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&preset::tuning_options(instrument))
        .map_err(|e| JsValue::from_str(&format!("{e}")))
}

/// WASM-exposed: lay out a fretboard from the page's form values.
#[wasm_bindgen]
pub fn render_fretboard(request: JsValue) -> Result<JsValue, JsValue> {
    let request: Option<FretboardRequest> =
        serde_wasm_bindgen::from_value(request).map_err(|e| JsValue::from_str(&format!("{e}")))?;
    let page = api::render_optional_request(request)
        .map_err(|e| JsValue::from_str(&format!("{e}")))?;
    serde_wasm_bindgen::to_value(&page).map_err(|e| JsValue::from_str(&format!("{e}")))
}

/// WASM-exposed: parse tuning text such as `"E A D G B E"` into a list of notes.
#[wasm_bindgen]
pub fn parse_tuning(text: &str) -> Result<JsValue, JsValue> {
    let tuning = Tuning::parse(text).map_err(|e| JsValue::from_str(&format!("{e}")))?;
    serde_wasm_bindgen::to_value(&tuning).map_err(|e| JsValue::from_str(&format!("{e}")))
}

/// WASM-exposed: a rendered error report for bad tuning text, or an empty
/// string when the text parses.
#[wasm_bindgen]
pub fn explain_tuning_error(text: &str) -> String {
    match Tuning::parse(text) {
        Ok(_) => String::new(),
        Err(e) => diagnostic::render_tuning_error(text, &e),
    }
}
