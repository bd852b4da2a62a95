//! Tunings: the open-string note of every string on an instrument.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{TheoryError, TuningError};
use crate::lexer::Lexer;
use crate::theory::{self, PitchClass};
use crate::token::Token;

/// Open-string notes in preset order (index 0 is string 1).
///
/// Serialises as a plain list of note names.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tuning(Vec<String>);

impl Tuning {
    /// Build from note names, rejecting anything outside the chromatic alphabet.
    pub fn from_notes<S: AsRef<str>>(notes: &[S]) -> Result<Self, TheoryError> {
        notes
            .iter()
            .map(|n| PitchClass::from_name(n.as_ref()).map(|pc| pc.name().to_string()))
            .collect::<Result<Vec<_>, _>>()
            .map(Tuning)
    }

    /// Parse whitespace- or comma-separated note names, e.g. `"E A D G B E"`.
    pub fn parse(input: &str) -> Result<Self, TuningError> {
        let tokens = Lexer::new(input).tokenize()?;
        let mut strings = Vec::new();
        for spanned in tokens {
            match spanned.token {
                Token::Word(name) => match PitchClass::from_name(&name) {
                    Ok(pc) => strings.push(pc.name().to_string()),
                    Err(_) => {
                        return Err(TuningError::InvalidNote {
                            name,
                            span: spanned.span,
                        });
                    }
                },
                Token::Comma => {}
                Token::EOF => break,
            }
        }
        if strings.is_empty() {
            return Err(TuningError::Empty);
        }
        Ok(Tuning(strings))
    }

    pub fn strings(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Same strings in reverse order.
    pub fn inverted(&self) -> Tuning {
        Tuning(theory::invert(&self.0))
    }

    pub(crate) fn push(&mut self, note: PitchClass) {
        self.0.push(note.name().to_string());
    }

    pub(crate) fn set(&mut self, index: usize, note: PitchClass) -> bool {
        match self.0.get_mut(index) {
            Some(slot) => {
                *slot = note.name().to_string();
                true
            }
            None => false,
        }
    }

    pub(crate) fn remove(&mut self, index: usize) -> Option<String> {
        (index < self.0.len()).then(|| self.0.remove(index))
    }
}

impl FromStr for Tuning {
    type Err = TuningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tuning::parse(s)
    }
}

impl fmt::Display for Tuning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Span;

    #[test]
    fn parse_space_and_comma_separated() {
        let a = Tuning::parse("E A D G B E").unwrap();
        let b: Tuning = "E,A, D ,G,B,E".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 6);
        assert_eq!(a.to_string(), "E A D G B E");
    }

    #[test]
    fn parse_rejects_flats_with_span() {
        let err = Tuning::parse("E Bb D").unwrap_err();
        assert_eq!(
            err,
            TuningError::InvalidNote {
                name: "Bb".into(),
                span: Span { start: 2, end: 4 },
            }
        );
    }

    #[test]
    fn parse_empty() {
        assert_eq!(Tuning::parse(""), Err(TuningError::Empty));
        assert_eq!(Tuning::parse(" , ,"), Err(TuningError::Empty));
    }

    #[test]
    fn from_notes_validates() {
        assert!(Tuning::from_notes(&["G", "D", "A", "E"]).is_ok());
        assert_eq!(
            Tuning::from_notes(&["G", "X"]),
            Err(TheoryError::InvalidNote("X".into()))
        );
    }

    #[test]
    fn inverted_twice_is_identity() {
        let t = Tuning::parse("D B G D G").unwrap();
        assert_eq!(t.inverted().strings(), ["G", "D", "G", "B", "D"]);
        assert_eq!(t.inverted().inverted(), t);
    }

    #[test]
    fn edits() {
        let mut t = Tuning::parse("E A").unwrap();
        t.push(PitchClass::from_name("D").unwrap());
        assert!(t.set(0, PitchClass::from_name("D").unwrap()));
        assert!(!t.set(9, PitchClass::from_name("D").unwrap()));
        assert_eq!(t.remove(1).as_deref(), Some("A"));
        assert_eq!(t.remove(5), None);
        assert_eq!(t.strings(), ["D", "D"]);
    }

    #[test]
    fn serializes_as_list() {
        let t = Tuning::parse("G D A E").unwrap();
        assert_eq!(serde_json::to_string(&t).unwrap(), r#"["G","D","A","E"]"#);
        let back: Tuning = serde_json::from_str(r#"["E","A"]"#).unwrap();
        assert_eq!(back.strings(), ["E", "A"]);
    }
}
