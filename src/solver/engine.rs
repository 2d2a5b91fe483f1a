//! Solve orchestration
//!
//! Validates the query words, prepares the dictionary, and times the
//! selected strategy. Timing is diagnostic only and never affects the
//! result.

use super::strategy::Strategy;
use crate::core::{Dictionary, SolveError, Word};
use std::time::{Duration, Instant};

/// Outcome of a solve invocation
///
/// An empty ladder means no path exists, which is a successfully computed
/// answer, not an error.
#[derive(Debug, Clone)]
pub struct Solution {
    /// Source-to-destination word sequence; empty when no ladder exists
    pub ladder: Vec<String>,
    /// Wall-clock time spent inside the strategy
    pub elapsed: Duration,
}

impl Solution {
    /// True if a ladder was found
    #[must_use]
    pub fn found(&self) -> bool {
        !self.ladder.is_empty()
    }
}

/// Main word ladder solver
///
/// Coordinates validation, dictionary preparation, and the search itself
/// using a given strategy.
pub struct Solver<S: Strategy> {
    strategy: S,
}

impl<S: Strategy> Solver<S> {
    /// Create a new solver with the given strategy
    pub const fn new(strategy: S) -> Self {
        Self { strategy }
    }

    /// Solve a word ladder from raw inputs
    ///
    /// Both query words are normalized to the dictionary's case convention
    /// before the search. A fresh dictionary is prepared per call, so
    /// repeated solves never observe each other's state.
    ///
    /// # Errors
    /// - `SolveError::InvalidWord` if either word is empty or blank
    /// - `SolveError::WordLengthMismatch` if the word lengths differ
    /// - `SolveError::InvalidDictionary` if the raw lines are empty or lack
    ///   either query word
    pub fn solve(
        &self,
        source: &str,
        destination: &str,
        raw_lines: &[String],
    ) -> Result<Solution, SolveError> {
        let source = Word::new(source)?;
        let destination = Word::new(destination)?;

        if source.len() != destination.len() {
            return Err(SolveError::WordLengthMismatch {
                source: source.as_str().to_string(),
                destination: destination.as_str().to_string(),
            });
        }

        let dictionary = Dictionary::prepare(raw_lines, &source, &destination)?;

        let start = Instant::now();
        let ladder = self.strategy.search(&source, &destination, &dictionary);
        let elapsed = start.elapsed();

        Ok(Solution { ladder, elapsed })
    }
}
