//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{print_bench_result, print_solve_report};
