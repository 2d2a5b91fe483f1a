//! Query word representation
//!
//! A Word is a validated, case-normalized source or destination word.
//! Dictionary entries stay plain strings; only the two query words carry
//! validation, because a bad dictionary line is filtered while a bad query
//! word aborts the solve.

use super::error::SolveError;
use std::fmt;

/// A validated query word, normalized to lowercase at construction
///
/// Equality and adjacency are defined over the normalized form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

impl Word {
    /// Create a new Word from raw input
    ///
    /// Surrounding whitespace is trimmed and the remainder lowercased.
    ///
    /// # Errors
    /// Returns `SolveError::InvalidWord` if the input is empty or
    /// whitespace-only.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    ///
    /// let word = Word::new("Same").unwrap();
    /// assert_eq!(word.as_str(), "same");
    ///
    /// assert!(Word::new("   ").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, SolveError> {
        let trimmed = text.as_ref().trim();

        if trimmed.is_empty() {
            return Err(SolveError::InvalidWord);
        }

        Ok(Self {
            text: trimmed.to_lowercase(),
        })
    }

    /// Get the normalized word as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in code units
    ///
    /// Comparison throughout the solver is exact code-unit equality, so the
    /// byte length is the length that matters for adjacency.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// True if the word holds no characters
    ///
    /// Cannot occur for a successfully constructed Word; provided for the
    /// conventional `len`/`is_empty` pairing.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
