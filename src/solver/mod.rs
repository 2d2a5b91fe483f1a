//! Word ladder search algorithms
//!
//! This module contains the search strategies and the orchestrating solver.

pub mod bidirectional;
mod engine;
pub mod frontier;
pub mod strategy;

pub use bidirectional::BidirectionalStrategy;
pub use engine::{Solution, Solver};
pub use frontier::FrontierStrategy;
pub use strategy::{Strategy, StrategyType};
