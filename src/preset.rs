//! Instrument presets: the default tuning and picture for each
//! supported instrument.
//!
//! Tunings are listed string 1 first, the way they appear on the
//! fretboard page (guitar: high E down to low E).

use serde::Serialize;

use crate::tuning::Tuning;

/// A built-in instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InstrumentPreset {
    /// Lookup key (e.g., "guitar").
    pub id: &'static str,
    /// Display name (e.g., "Guitar").
    pub name: &'static str,
    /// Path of the picture shown next to the fretboard.
    pub image: &'static str,
    /// Default open-string notes.
    pub tuning: &'static [&'static str],
}

impl InstrumentPreset {
    pub fn string_count(&self) -> usize {
        self.tuning.len()
    }

    /// Owned copy of the default tuning, ready to edit in a session.
    pub fn default_tuning(&self) -> Tuning {
        match Tuning::from_notes(self.tuning) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::warn!("preset '{}' has a bad tuning: {e}", self.id);
                debug_assert!(false, "preset '{}' has a bad tuning: {e}", self.id);
                Tuning::default()
            }
        }
    }
}

pub const DEFAULT_INSTRUMENT: &str = "guitar";

static PRESETS: [InstrumentPreset; 4] = [
    InstrumentPreset {
        id: "guitar",
        name: "Guitar",
        image: "images/guitar.png",
        tuning: &["E", "B", "G", "D", "A", "E"],
    },
    InstrumentPreset {
        id: "bass",
        name: "Bass",
        image: "images/bass.png",
        tuning: &["G", "D", "A", "E"],
    },
    InstrumentPreset {
        id: "mandolin",
        name: "Mandolin",
        image: "images/mandolin.png",
        tuning: &["E", "A", "D", "G"],
    },
    // 5-string banjo, open G
    InstrumentPreset {
        id: "banjo",
        name: "Banjo",
        image: "images/banjo.png",
        tuning: &["D", "B", "G", "D", "G"],
    },
];

pub fn presets() -> &'static [InstrumentPreset] {
    &PRESETS
}

/// Exact, lowercase id lookup.
pub fn find_preset(id: &str) -> Option<&'static InstrumentPreset> {
    PRESETS.iter().find(|p| p.id == id)
}

/// Tuning offered for `id`; unknown instruments get no strings.
pub fn tuning_options(id: &str) -> Vec<&'static str> {
    match find_preset(id) {
        Some(preset) => preset.tuning.to_vec(),
        None => {
            log::warn!("no preset for instrument '{id}'");
            Vec::new()
        }
    }
}
