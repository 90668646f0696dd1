use core::{fmt, num::ParseFloatError};

use thiserror::Error;

/// The text fields of an UltraStar document that hold decimal numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextField {
    /// The gap before the first beat, in milliseconds
    Gap,
    /// The tempo, in the file's quarter scale
    Bpm,
}

impl fmt::Display for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gap => write!(f, "gap"),
            Self::Bpm => write!(f, "bpm"),
        }
    }
}

#[doc = r#"
An error produced while reading a locale-formatted decimal out of a text field.

Only the comma decimal separator is normalized before parsing. Surrounding
whitespace is not trimmed.
"#]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The text is not a decimal number
    #[error("{field} value {text:?} is not a decimal number")]
    InvalidNumber {
        /// The field that was being parsed
        field: TextField,
        /// The text as it was supplied
        text: String,
        /// The underlying float parse failure
        #[source]
        source: ParseFloatError,
    },
}

impl ParseError {
    /// Returns the field that failed to parse.
    pub fn field(&self) -> TextField {
        match self {
            Self::InvalidNumber { field, .. } => *field,
        }
    }
}

/// A set of errors that can occur while converting UltraStar timing and pitch
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    /// Parsing errors
    #[error("Parsing {0}")]
    Parse(#[from] ParseError),
    /// The real tempo cannot be used to convert between beats and seconds
    #[error("Tempo of {0} bpm is not a positive finite number")]
    Tempo(f64),
    /// A beat position or length that cannot be truncated to a whole beat
    #[error("Beat value {0} is not finite")]
    Beat(f64),
    /// A note line was requested past the end of the document
    #[error("No note line at position {position}, the document has {len}")]
    OutOfBounds {
        /// The requested position
        position: usize,
        /// The number of note lines in the document
        len: usize,
    },
}

impl ConvertError {
    /// True if the error came from a malformed gap or bpm text
    pub const fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

/// The Convert Result type (see [`ConvertError`])
pub type ConvertResult<T> = Result<T, ConvertError>;
