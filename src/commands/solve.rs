//! Ladder solving command
//!
//! Wires the file collaborators to the solver: dictionary in, solution out.

use crate::core::Word;
use crate::files;
use crate::solver::{Solution, Solver, Strategy};
use anyhow::Result;
use std::path::PathBuf;

/// Configuration for a solve run
pub struct SolveConfig {
    pub source: String,
    pub destination: String,
    pub dictionary_path: PathBuf,
    pub solution_path: PathBuf,
}

/// Result of a solve run, ready for rendering
pub struct SolveReport {
    pub solution: Solution,
    pub source: String,
    pub destination: String,
    pub dictionary_size: usize,
}

/// Solve a ladder and persist the result
///
/// The solution file is written only when a ladder was found; a "no path"
/// outcome leaves the filesystem untouched.
///
/// # Errors
/// Propagates validation failures from the solver and I/O failures from the
/// file collaborators.
pub fn run_solve<S: Strategy>(config: &SolveConfig, solver: &Solver<S>) -> Result<SolveReport> {
    let raw_lines = files::read_word_lines(&config.dictionary_path)?;

    let solution = solver.solve(&config.source, &config.destination, &raw_lines)?;

    if solution.found() {
        files::write_solution(&config.solution_path, &solution.ladder)?;
    }

    // Normalization cannot fail here: the solver already validated both words
    let source = Word::new(&config.source)?;
    let destination = Word::new(&config.destination)?;

    Ok(SolveReport {
        solution,
        source: source.as_str().to_string(),
        destination: destination.as_str().to_string(),
        dictionary_size: raw_lines.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::StrategyType;
    use std::fs;

    fn write_dictionary(dir: &tempfile::TempDir, words: &[&str]) -> PathBuf {
        let path = dir.path().join("dictionary.txt");
        fs::write(&path, words.join("\n")).unwrap();
        path
    }

    fn config(dir: &tempfile::TempDir, source: &str, destination: &str, words: &[&str]) -> SolveConfig {
        SolveConfig {
            source: source.to_string(),
            destination: destination.to_string(),
            dictionary_path: write_dictionary(dir, words),
            solution_path: dir.path().join("solution.txt"),
        }
    }

    #[test]
    fn solve_writes_solution_file_on_success() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(&dir, "same", "cost", &["same", "came", "case", "cast", "cost"]);
        let solver = Solver::new(StrategyType::from_name("bidirectional"));

        let report = run_solve(&config, &solver).unwrap();

        assert!(report.solution.found());
        assert_eq!(report.solution.ladder.len(), 5);

        let written = fs::read_to_string(&config.solution_path).unwrap();
        assert_eq!(written.lines().count(), 5);
        assert!(written.starts_with("same"));
    }

    #[test]
    fn solve_writes_nothing_when_no_path_exists() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(&dir, "same", "cost", &["same", "case", "cast", "cost"]);
        let solver = Solver::new(StrategyType::from_name("bidirectional"));

        let report = run_solve(&config, &solver).unwrap();

        assert!(!report.solution.found());
        assert!(!config.solution_path.exists());
    }

    #[test]
    fn solve_propagates_validation_failures() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(&dir, "abc", "abcd", &["abc", "abcd"]);
        let solver = Solver::new(StrategyType::from_name("frontier"));

        let result = run_solve(&config, &solver);

        assert!(result.is_err());
        assert!(!config.solution_path.exists());
    }

    #[test]
    fn solve_reports_normalized_words() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(&dir, "SAME", "COST", &["same", "came", "case", "cast", "cost"]);
        let solver = Solver::new(StrategyType::from_name("bidirectional"));

        let report = run_solve(&config, &solver).unwrap();

        assert_eq!(report.source, "same");
        assert_eq!(report.destination, "cost");
    }
}
