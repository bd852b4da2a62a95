//! Note theory: the chromatic alphabet, scale step patterns and fret
//! arithmetic.
//!
//! Everything here is a pure function over `const` tables, so it is safe to
//! call from any number of threads (or JS callbacks) at once.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;

/// The 12 pitch classes, sharp-spelled, starting at C.
pub const CHROMATIC: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Semitone steps of the major scale.
pub const MAJOR_STEPS: [u8; 7] = [2, 2, 1, 2, 2, 2, 1];
/// Semitone steps of the natural minor scale.
pub const MINOR_STEPS: [u8; 7] = [2, 1, 2, 2, 1, 2, 2];

// ── Pitch Class ─────────────────────────────────────────────

/// Index into [`CHROMATIC`], always in `0..12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PitchClass(u8);

impl PitchClass {
    /// Exact, case-sensitive lookup. Flat spellings such as `"Db"` are not
    /// part of the alphabet and fail.
    pub fn from_name(name: &str) -> Result<Self, TheoryError> {
        CHROMATIC
            .iter()
            .position(|&n| n == name)
            .map(|i| PitchClass(i as u8))
            .ok_or_else(|| TheoryError::InvalidNote(name.to_string()))
    }

    pub fn index(self) -> u8 {
        self.0
    }

    pub fn name(self) -> &'static str {
        CHROMATIC[self.0 as usize]
    }

    /// Move up by `semitones`, wrapping at the octave.
    pub fn transpose(self, semitones: u32) -> Self {
        PitchClass(((self.0 as u32 + semitones % 12) % 12) as u8)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── Scale Type ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleType {
    #[default]
    Major,
    Minor,
}

impl ScaleType {
    pub fn steps(self) -> &'static [u8; 7] {
        match self {
            ScaleType::Major => &MAJOR_STEPS,
            ScaleType::Minor => &MINOR_STEPS,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScaleType::Major => "major",
            ScaleType::Minor => "minor",
        }
    }

    /// Tonic followed by each scale degree, ending on the tonic an octave up.
    pub fn notes_from(self, tonic: PitchClass) -> Vec<PitchClass> {
        let mut current = tonic;
        let mut notes = Vec::with_capacity(8);
        notes.push(current);
        for &step in self.steps() {
            current = current.transpose(step as u32);
            notes.push(current);
        }
        notes
    }
}

impl FromStr for ScaleType {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "major" => Ok(ScaleType::Major),
            "minor" => Ok(ScaleType::Minor),
            other => Err(TheoryError::InvalidScaleType(other.to_string())),
        }
    }
}

impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Queries ─────────────────────────────────────────────────

/// The 8 note names of `scale_type` built on `tonic`.
///
/// ```
/// let notes = fretboard_core::theory::notes_in_key("C", "major").unwrap();
/// assert_eq!(notes, ["C", "D", "E", "F", "G", "A", "B", "C"]);
/// ```
pub fn notes_in_key(tonic: &str, scale_type: &str) -> Result<Vec<&'static str>, TheoryError> {
    let scale_type: ScaleType = scale_type.parse()?;
    scale_notes(tonic, scale_type)
}

/// Typed variant of [`notes_in_key`] for callers that already hold a [`ScaleType`].
pub fn scale_notes(tonic: &str, scale_type: ScaleType) -> Result<Vec<&'static str>, TheoryError> {
    let tonic = PitchClass::from_name(tonic)?;
    Ok(scale_type
        .notes_from(tonic)
        .into_iter()
        .map(PitchClass::name)
        .collect())
}

/// The note sounded `fret` semitones above an open string.
pub fn note_at_fret(open_string_note: &str, fret: u32) -> Result<&'static str, TheoryError> {
    Ok(PitchClass::from_name(open_string_note)?.transpose(fret).name())
}

/// Reverse string order for display (low-to-high vs. high-to-low).
/// Note names are not validated.
pub fn invert<T: Clone>(tuning: &[T]) -> Vec<T> {
    tuning.iter().rev().cloned().collect()
}
