//! Per-user fretboard state.
//!
//! A [`FretboardSession`] is an ordinary value owned by the caller. The
//! crate holds no shared session state.

use serde::{Deserialize, Serialize};

use crate::error::FretboardError;
use crate::fretboard::{self, Fretboard, FretboardConfig};
use crate::preset::{self, DEFAULT_INSTRUMENT};
use crate::theory::{self, PitchClass, ScaleType};
use crate::tuning::Tuning;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FretboardSession {
    pub instrument: String,
    pub tuning: Tuning,
    pub key: String,
    pub scale_type: ScaleType,
}

impl Default for FretboardSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FretboardSession {
    /// Guitar in standard tuning, C major.
    pub fn new() -> Self {
        let tuning = preset::find_preset(DEFAULT_INSTRUMENT)
            .map(|p| p.default_tuning())
            .unwrap_or_default();
        FretboardSession {
            instrument: DEFAULT_INSTRUMENT.to_string(),
            tuning,
            key: "C".to_string(),
            scale_type: ScaleType::Major,
        }
    }

    /// Switch instrument and reset the tuning to its preset.
    pub fn select_instrument(&mut self, id: &str) -> Result<(), FretboardError> {
        let preset = preset::find_preset(id)
            .ok_or_else(|| FretboardError::UnknownInstrument(id.to_string()))?;
        self.instrument = preset.id.to_string();
        self.tuning = preset.default_tuning();
        log::debug!("session instrument -> {id} ({} strings)", self.tuning.len());
        Ok(())
    }

    /// Replace the whole tuning, e.g. with one parsed from user text.
    pub fn set_tuning(&mut self, tuning: Tuning) {
        log::debug!("session tuning -> {tuning}");
        self.tuning = tuning;
    }

    /// Append a string tuned to `config.default_string_note`.
    pub fn add_string(&mut self, config: &FretboardConfig) -> Result<usize, FretboardError> {
        let note = config.default_string_pitch()?;
        self.tuning.push(note);
        log::debug!("session added string {} ({note})", self.tuning.len());
        Ok(self.tuning.len())
    }

    /// Retune one string; `index` is 0-based.
    pub fn set_string_note(&mut self, index: usize, note: &str) -> Result<(), FretboardError> {
        let pitch = PitchClass::from_name(note)?;
        let len = self.tuning.len();
        if !self.tuning.set(index, pitch) {
            return Err(FretboardError::StringIndex { index, len });
        }
        log::debug!("session string {} -> {pitch}", index + 1);
        Ok(())
    }

    pub fn remove_string(&mut self, index: usize) -> Result<String, FretboardError> {
        let len = self.tuning.len();
        self.tuning
            .remove(index)
            .ok_or(FretboardError::StringIndex { index, len })
    }

    pub fn set_key(&mut self, key: &str) -> Result<(), FretboardError> {
        self.key = PitchClass::from_name(key)?.name().to_string();
        Ok(())
    }

    pub fn set_scale_type(&mut self, scale_type: &str) -> Result<(), FretboardError> {
        self.scale_type = scale_type.parse::<ScaleType>()?;
        Ok(())
    }

    pub fn scale_notes(&self) -> Result<Vec<&'static str>, FretboardError> {
        Ok(theory::scale_notes(&self.key, self.scale_type)?)
    }

    pub fn render(&self, config: &FretboardConfig) -> Result<Fretboard, FretboardError> {
        fretboard::build_fretboard(&self.tuning, &self.key, self.scale_type, config)
    }
}
