//! Benchmark command
//!
//! Times the selected strategy over random word pairs drawn from a
//! dictionary file.

use crate::files;
use crate::solver::{Solver, Strategy};
use anyhow::{Result, ensure};
use indicatif::{ProgressBar, ProgressStyle};
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
pub struct BenchConfig {
    pub dictionary_path: PathBuf,
    pub pair_count: usize,
    pub word_len: usize,
}

/// Aggregate result of a benchmark run
pub struct BenchResult {
    pub pairs_tested: usize,
    pub solved: usize,
    pub no_path: usize,
    pub average_ladder_len: f64,
    pub total_duration: Duration,
    pub pairs_per_second: f64,
}

/// Run the selected strategy over random same-length word pairs
///
/// Draws source/destination pairs (always distinct words) from the
/// dictionary entries of the requested length and solves each one. "No
/// path" outcomes count as completed pairs, not failures.
///
/// # Errors
/// Returns an error if the dictionary file cannot be read or holds fewer
/// than two words of the requested length.
///
/// # Panics
/// Will not panic - the pool is checked to be non-empty before drawing.
pub fn run_bench<S: Strategy>(config: &BenchConfig, solver: &Solver<S>) -> Result<BenchResult> {
    let raw_lines = files::read_word_lines(&config.dictionary_path)?;

    let mut seen = FxHashSet::default();
    let pool: Vec<String> = raw_lines
        .iter()
        .map(|line| line.to_lowercase())
        .filter(|word| word.len() == config.word_len)
        .filter(|word| seen.insert(word.clone()))
        .collect();

    ensure!(
        pool.len() >= 2,
        "dictionary holds fewer than two words of length {}",
        config.word_len
    );

    let pb = ProgressBar::new(config.pair_count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut rng = rand::rng();
    let mut solved = 0;
    let mut total_ladder_words = 0;

    for _ in 0..config.pair_count {
        let source = pool.choose(&mut rng).expect("pool holds at least two words");
        let destination = loop {
            let candidate = pool.choose(&mut rng).expect("pool holds at least two words");
            if candidate != source {
                break candidate;
            }
        };

        let solution = solver.solve(source, destination, &raw_lines)?;
        if solution.found() {
            solved += 1;
            total_ladder_words += solution.ladder.len();
        }

        pb.inc(1);
    }

    pb.finish_and_clear();
    let total_duration = start.elapsed();

    Ok(BenchResult {
        pairs_tested: config.pair_count,
        solved,
        no_path: config.pair_count - solved,
        average_ladder_len: if solved > 0 {
            total_ladder_words as f64 / solved as f64
        } else {
            0.0
        },
        total_duration,
        pairs_per_second: config.pair_count as f64 / total_duration.as_secs_f64(),
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

    #[test]
    fn bench_counts_every_pair() {
        let dir = tempfile::tempdir().unwrap();
        let config = BenchConfig {
            dictionary_path: write_dictionary(
                &dir,
                &["same", "came", "case", "cast", "cost", "zinc"],
            ),
            pair_count: 5,
            word_len: 4,
        };
        let solver = Solver::new(StrategyType::from_name("bidirectional"));

        let result = run_bench(&config, &solver).unwrap();

        assert_eq!(result.pairs_tested, 5);
        assert_eq!(result.solved + result.no_path, 5);
    }

    #[test]
    fn bench_average_covers_solved_pairs_only() {
        let dir = tempfile::tempdir().unwrap();
        // Fully connected pair pool: every draw solves with a 2-word ladder
        let config = BenchConfig {
            dictionary_path: write_dictionary(&dir, &["cast", "cost"]),
            pair_count: 3,
            word_len: 4,
        };
        let solver = Solver::new(StrategyType::from_name("frontier"));

        let result = run_bench(&config, &solver).unwrap();

        assert_eq!(result.solved, 3);
        assert!((result.average_ladder_len - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn bench_rejects_undersized_pool() {
        let dir = tempfile::tempdir().unwrap();
        let config = BenchConfig {
            dictionary_path: write_dictionary(&dir, &["same", "came"]),
            pair_count: 2,
            word_len: 7,
        };
        let solver = Solver::new(StrategyType::from_name("bidirectional"));

        let result = run_bench(&config, &solver);

        assert!(result.is_err());
    }
}
