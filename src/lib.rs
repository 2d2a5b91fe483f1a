//! Word Ladder Solver
//!
//! Finds the shortest sequence of dictionary words connecting a source word
//! to a destination word of the same length, where each consecutive pair
//! differs by exactly one character.
//!
//! # Quick Start
//!
//! ```rust
//! use word_ladder::solver::{Solver, StrategyType};
//!
//! let dictionary: Vec<String> = ["same", "came", "case", "cast", "cost"]
//!     .iter()
//!     .map(ToString::to_string)
//!     .collect();
//!
//! let solver = Solver::new(StrategyType::from_name("bidirectional"));
//! let solution = solver.solve("same", "cost", &dictionary).unwrap();
//! assert_eq!(solution.ladder.len(), 5);
//! ```

// Core domain types
pub mod core;

// Search algorithms
pub mod solver;

// File collaborators
pub mod files;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
