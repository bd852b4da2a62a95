use crate::token::Span;
use std::fmt;

/// Failures of the note-theory engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TheoryError {
    /// Not one of the 12 sharp-spelled chromatic names.
    InvalidNote(String),
    /// Neither `major` nor `minor`.
    InvalidScaleType(String),
}

/// Failures while reading a tuning written as text (e.g. `"E A D G B E"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuningError {
    UnexpectedChar { ch: char, span: Span },
    InvalidNote { name: String, span: Span },
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FretboardError {
    Theory(TheoryError),
    Tuning(TuningError),
    UnknownInstrument(String),
    StringIndex { index: usize, len: usize },
    FretCount { requested: u32, max: u32 },
}

impl fmt::Display for TheoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TheoryError::InvalidNote(name) => write!(f, "Invalid note '{name}'"),
            TheoryError::InvalidScaleType(tag) => {
                write!(f, "Invalid scale type '{tag}'. Choose 'major' or 'minor'.")
            }
        }
    }
}

impl std::error::Error for TheoryError {}

impl TuningError {
    /// Byte range in the source text, if the error points at one.
    pub fn span(&self) -> Option<Span> {
        match self {
            TuningError::UnexpectedChar { span, .. } | TuningError::InvalidNote { span, .. } => {
                Some(*span)
            }
            TuningError::Empty => None,
        }
    }
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::UnexpectedChar { ch, span } => {
                write!(f, "Unexpected char '{ch}' at pos {}", span.start)
            }
            TuningError::InvalidNote { name, span } => {
                write!(f, "Invalid note '{name}' at pos {}", span.start)
            }
            TuningError::Empty => write!(f, "Tuning has no strings"),
        }
    }
}

impl std::error::Error for TuningError {}

impl fmt::Display for FretboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FretboardError::Theory(e) => write!(f, "{e}"),
            FretboardError::Tuning(e) => write!(f, "Tuning error: {e}"),
            FretboardError::UnknownInstrument(id) => write!(f, "Unknown instrument '{id}'"),
            FretboardError::StringIndex { index, len } => {
                write!(f, "String {index} out of range (instrument has {len} strings)")
            }
            FretboardError::FretCount { requested, max } => {
                write!(f, "Fret count {requested} exceeds the maximum of {max}")
            }
        }
    }
}

impl std::error::Error for FretboardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FretboardError::Theory(e) => Some(e),
            FretboardError::Tuning(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TheoryError> for FretboardError {
    fn from(e: TheoryError) -> Self {
        FretboardError::Theory(e)
    }
}

impl From<TuningError> for FretboardError {
    fn from(e: TuningError) -> Self {
        FretboardError::Tuning(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_type_message_lists_choices() {
        let msg = TheoryError::InvalidScaleType("pentatonic".into()).to_string();
        assert!(msg.contains("pentatonic"));
        assert!(msg.contains("'major' or 'minor'"));
    }

    #[test]
    fn fretboard_error_wraps_source() {
        use std::error::Error;
        let err: FretboardError = TheoryError::InvalidNote("Db".into()).into();
        assert_eq!(err.to_string(), "Invalid note 'Db'");
        assert!(err.source().is_some());
        assert!(FretboardError::UnknownInstrument("harp".into()).source().is_none());
        assert_eq!(
            FretboardError::FretCount { requested: 99, max: 36 }.to_string(),
            "Fret count 99 exceeds the maximum of 36"
        );
    }

    #[test]
    fn tuning_error_span() {
        let err = TuningError::InvalidNote {
            name: "H".into(),
            span: Span { start: 4, end: 5 },
        };
        assert_eq!(err.span(), Some(Span { start: 4, end: 5 }));
        assert_eq!(TuningError::Empty.span(), None);
    }
}
