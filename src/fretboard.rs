use serde::{Deserialize, Serialize};

use crate::error::{FretboardError, TheoryError};
use crate::theory::{self, PitchClass, ScaleType};
use crate::tuning::Tuning;

// ── Configuration ───────────────────────────────────────────

/// Upper bound on `fret_count` accepted by the grid builder.
pub const MAX_FRET_COUNT: u32 = 36;

/// Layout options for a rendered fretboard.
///
/// Every field has a default, so `{}` (or a partial object from JS) is a
/// valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FretboardConfig {
    /// Highest fret drawn; each string gets `fret_count + 1` cells
    /// (open string included). At most [`MAX_FRET_COUNT`].
    pub fret_count: u32,
    /// Note given to a newly added string.
    pub default_string_note: String,
    /// Render strings in reverse order.
    pub high_to_low: bool,
}

impl Default for FretboardConfig {
    fn default() -> Self {
        FretboardConfig {
            fret_count: 14,
            default_string_note: "E".to_string(),
            high_to_low: false,
        }
    }
}

impl FretboardConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn default_string_pitch(&self) -> Result<PitchClass, TheoryError> {
        PitchClass::from_name(&self.default_string_note)
    }
}

// ── Fretboard (builder output) ──────────────────────────────

/// A fully laid-out fretboard: one row per string, one cell per fret.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Fretboard {
    pub key: String,
    pub scale_type: ScaleType,
    /// Scale notes, tonic first and last.
    pub scale_notes: Vec<&'static str>,
    pub strings: Vec<StringRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StringRow {
    /// 1-based position in the tuning, kept when rows are reversed.
    pub string_number: usize,
    pub open_note: &'static str,
    pub cells: Vec<FretCell>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FretCell {
    pub fret: u32,
    pub note: &'static str,
    pub in_key: bool,
    pub is_root: bool,
}

impl Fretboard {
    /// Cells that should be drawn as note circles.
    pub fn highlighted(&self) -> impl Iterator<Item = (&StringRow, &FretCell)> {
        self.strings
            .iter()
            .flat_map(|row| row.cells.iter().map(move |cell| (row, cell)))
            .filter(|(_, cell)| cell.in_key)
    }
}

/// Lay out `tuning` for frets `0..=config.fret_count`, marking the notes of
/// `key`/`scale_type`.
pub fn build_fretboard(
    tuning: &Tuning,
    key: &str,
    scale_type: ScaleType,
    config: &FretboardConfig,
) -> Result<Fretboard, FretboardError> {
    if config.fret_count > MAX_FRET_COUNT {
        return Err(FretboardError::FretCount {
            requested: config.fret_count,
            max: MAX_FRET_COUNT,
        });
    }
    let scale_notes = theory::scale_notes(key, scale_type)?;

    let mut strings = Vec::with_capacity(tuning.len());
    for (i, open) in tuning.strings().iter().enumerate() {
        let open_note = theory::note_at_fret(open, 0)?;
        let cells = (0..=config.fret_count)
            .map(|fret| -> Result<FretCell, TheoryError> {
                let note = theory::note_at_fret(open_note, fret)?;
                Ok(FretCell {
                    fret,
                    note,
                    in_key: scale_notes.contains(&note),
                    is_root: note == scale_notes[0],
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        strings.push(StringRow {
            string_number: i + 1,
            open_note,
            cells,
        });
    }
    if config.high_to_low {
        strings = theory::invert(&strings);
    }

    log::debug!(
        "built fretboard: {} strings x {} frets in {key} {scale_type}",
        strings.len(),
        config.fret_count + 1
    );

    Ok(Fretboard {
        key: scale_notes[0].to_string(),
        scale_type,
        scale_notes,
        strings,
    })
}
