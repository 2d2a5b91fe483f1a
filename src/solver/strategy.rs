//! Ladder search strategies
//!
//! Defines the Strategy trait and runtime selection over the concrete
//! implementations.

use super::bidirectional::BidirectionalStrategy;
use super::frontier::FrontierStrategy;
use crate::core::{Dictionary, Word};

/// A search strategy over the implicit word-adjacency graph
pub trait Strategy {
    /// Find a shortest ladder from source to destination
    ///
    /// Returns the full ladder including both endpoints, or an empty vector
    /// when no ladder exists. Never fails: all input validation happens
    /// before a strategy runs.
    fn search(&self, source: &Word, destination: &Word, dictionary: &Dictionary) -> Vec<String>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Single-ended level-order expansion
    Frontier(FrontierStrategy),
    /// Meet-in-the-middle expansion from both endpoints (default)
    Bidirectional(BidirectionalStrategy),
}

impl Strategy for StrategyType {
    fn search(&self, source: &Word, destination: &Word, dictionary: &Dictionary) -> Vec<String> {
        match self {
            Self::Frontier(s) => s.search(source, destination, dictionary),
            Self::Bidirectional(s) => s.search(source, destination, dictionary),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "frontier", "bfs", "bidirectional", "bds".
    /// Defaults to bidirectional if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "frontier" | "bfs" => Self::Frontier(FrontierStrategy),
            _ => Self::Bidirectional(BidirectionalStrategy),
        }
    }
}
