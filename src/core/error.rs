//! Validation failures raised before any search work begins
//!
//! "No path exists" is never an error. It is an ordinary, successfully
//! computed empty result. The variants here cover bad input only, and all of
//! them are raised at the orchestration boundary; the search strategies
//! themselves never fail.

use std::fmt;

/// Error type for invalid solve inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// Source or destination word is empty or whitespace-only
    InvalidWord,
    /// Source and destination words have different lengths
    WordLengthMismatch {
        source: String,
        destination: String,
    },
    /// Dictionary is empty or lacks the source/destination words
    InvalidDictionary,
    /// A file collaborator received a blank or extension-less path
    InvalidPath(String),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWord => {
                write!(f, "source word and/or destination word is empty or blank")
            }
            Self::WordLengthMismatch {
                source,
                destination,
            } => write!(
                f,
                "source word {source} and destination word {destination} have different lengths"
            ),
            Self::InvalidDictionary => write!(
                f,
                "dictionary is either empty or does not contain the source and destination words"
            ),
            Self::InvalidPath(path) => write!(f, "invalid path: {path}"),
        }
    }
}

impl std::error::Error for SolveError {}
