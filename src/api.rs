//! Request and response shapes exchanged with the fretboard page.
//!
//! The functions here are plain Rust; `lib.rs` only converts them to and
//! from `JsValue`.

use serde::{Deserialize, Serialize};

use crate::error::FretboardError;
use crate::fretboard::{self, Fretboard, FretboardConfig};
use crate::preset::{self, DEFAULT_INSTRUMENT};
use crate::theory::{self, ScaleType};
use crate::tuning::Tuning;

// ── Scale Notes ─────────────────────────────────────────────

/// `{ "success": true, "notes": [...] }` or `{ "success": false, "message": "..." }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaleNotesResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<&'static str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

pub fn scale_notes_response(key: &str, scale_type: &str) -> ScaleNotesResponse {
    match theory::notes_in_key(key, scale_type) {
        Ok(notes) => ScaleNotesResponse {
            success: true,
            notes: Some(notes),
            message: None,
        },
        Err(e) => ScaleNotesResponse {
            success: false,
            notes: None,
            message: Some(e.to_string()),
        },
    }
}

// ── Fretboard ───────────────────────────────────────────────

/// Form values submitted by the page. Missing fields fall back to
/// guitar, C, major.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FretboardRequest {
    /// Open-string notes as chosen on the page; empty means "use the preset".
    pub tuning: Vec<String>,
    pub instrument: String,
    pub key: String,
    pub scale_type: String,
    pub config: FretboardConfig,
}

impl Default for FretboardRequest {
    fn default() -> Self {
        FretboardRequest {
            tuning: Vec::new(),
            instrument: DEFAULT_INSTRUMENT.to_string(),
            key: "C".to_string(),
            scale_type: "major".to_string(),
            config: FretboardConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FretboardPage {
    /// Display name, e.g. "Guitar".
    pub instrument: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<&'static str>,
    #[serde(flatten)]
    pub fretboard: Fretboard,
}

pub fn render_fretboard_page(request: &FretboardRequest) -> Result<FretboardPage, FretboardError> {
    let scale_type = request.scale_type.parse::<ScaleType>()?;
    let preset = preset::find_preset(&request.instrument);

    let tuning = if request.tuning.is_empty() {
        preset
            .map(|p| p.default_tuning())
            .ok_or_else(|| FretboardError::UnknownInstrument(request.instrument.clone()))?
    } else {
        Tuning::from_notes(&request.tuning)?
    };

    let fretboard = fretboard::build_fretboard(&tuning, &request.key, scale_type, &request.config)?;
    Ok(FretboardPage {
        instrument: preset.map_or_else(|| capitalize(&request.instrument), |p| p.name.to_string()),
        image: preset.map(|p| p.image),
        fretboard,
    })
}

/// Render a request that may be missing entirely (`undefined`/`null` from
/// JS), using the form defaults in that case.
pub fn render_optional_request(
    request: Option<FretboardRequest>,
) -> Result<FretboardPage, FretboardError> {
    render_fretboard_page(&request.unwrap_or_default())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TheoryError;
    use serde_json::json;

    #[test]
    fn scale_notes_success_shape() {
        let json = serde_json::to_value(scale_notes_response("G", "major")).unwrap();
        assert_eq!(
            json,
            json!({ "success": true, "notes": ["G", "A", "B", "C", "D", "E", "F#", "G"] })
        );
    }

    #[test]
    fn scale_notes_failure_shape() {
        let json = serde_json::to_value(scale_notes_response("C", "pentatonic")).unwrap();
        assert_eq!(json["success"], false);
        assert!(json.get("notes").is_none());
        assert!(json["message"].as_str().unwrap().contains("pentatonic"));

        let bad_key = scale_notes_response("Db", "major");
        assert!(!bad_key.success);
        assert_eq!(bad_key.message.as_deref(), Some("Invalid note 'Db'"));
    }

    #[test]
    fn request_defaults() {
        let request: FretboardRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.instrument, "guitar");
        assert_eq!(request.key, "C");
        assert_eq!(request.scale_type, "major");
        assert!(request.tuning.is_empty());
    }

    #[test]
    fn page_from_preset() {
        let page = render_fretboard_page(&FretboardRequest::default()).unwrap();
        assert_eq!(page.instrument, "Guitar");
        assert_eq!(page.image, Some("images/guitar.png"));
        assert_eq!(page.fretboard.strings.len(), 6);
        assert_eq!(page.fretboard.key, "C");
    }

    #[test]
    fn page_with_submitted_tuning() {
        let request: FretboardRequest = serde_json::from_value(json!({
            "tuning": ["D", "A", "D", "G", "A", "D"],
            "instrument": "guitar",
            "key": "D",
            "scaleType": "minor",
            "config": { "fretCount": 12 }
        }))
        .unwrap();
        let page = render_fretboard_page(&request).unwrap();
        assert_eq!(page.fretboard.strings[0].open_note, "D");
        assert_eq!(page.fretboard.strings[0].cells.len(), 13);
        assert!(page.fretboard.strings[0].cells[0].is_root);

        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["instrument"], "Guitar");
        assert_eq!(json["scaleType"], "minor");
        assert!(json["strings"].is_array());
    }

    #[test]
    fn missing_request_uses_defaults() {
        let request: Option<FretboardRequest> = serde_json::from_str("null").unwrap();
        assert!(request.is_none());
        let page = render_optional_request(request).unwrap();
        assert_eq!(page, render_fretboard_page(&FretboardRequest::default()).unwrap());
        assert_eq!(page.instrument, "Guitar");
        assert_eq!(page.fretboard.key, "C");
        assert_eq!(page.fretboard.strings[0].cells.len(), 15);

        let request: Option<FretboardRequest> =
            serde_json::from_str(r#"{ "instrument": "bass" }"#).unwrap();
        let page = render_optional_request(request).unwrap();
        assert_eq!(page.instrument, "Bass");
        assert_eq!(page.fretboard.strings.len(), 4);
    }

    #[test]
    fn oversized_fret_count_is_rejected() {
        let request: FretboardRequest =
            serde_json::from_value(json!({ "config": { "fretCount": 4000000000u32 } })).unwrap();
        assert!(matches!(
            render_fretboard_page(&request),
            Err(FretboardError::FretCount { .. })
        ));
    }

    #[test]
    fn unknown_instrument_name_is_capitalized() {
        let request = FretboardRequest {
            tuning: vec!["G".into(), "C".into(), "E".into(), "A".into()],
            instrument: "UKULELE".into(),
            ..Default::default()
        };
        let page = render_fretboard_page(&request).unwrap();
        assert_eq!(page.instrument, "Ukulele");
        assert_eq!(page.image, None);
    }

    #[test]
    fn unknown_instrument_without_tuning() {
        let request = FretboardRequest {
            instrument: "lute".into(),
            ..Default::default()
        };
        assert_eq!(
            render_fretboard_page(&request),
            Err(FretboardError::UnknownInstrument("lute".into()))
        );
    }

    #[test]
    fn invalid_inputs_are_reported() {
        let request = FretboardRequest {
            scale_type: "phrygian".into(),
            ..Default::default()
        };
        assert_eq!(
            render_fretboard_page(&request),
            Err(FretboardError::Theory(TheoryError::InvalidScaleType("phrygian".into())))
        );

        let request = FretboardRequest {
            tuning: vec!["E".into(), "".into()],
            ..Default::default()
        };
        assert_eq!(
            render_fretboard_page(&request),
            Err(FretboardError::Theory(TheoryError::InvalidNote("".into())))
        );
    }
}
