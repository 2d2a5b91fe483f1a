//! Word Ladder Solver - CLI
//!
//! Finds shortest word ladders between two words using a dictionary file.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use word_ladder::{
    commands::{BenchConfig, SolveConfig, run_bench, run_solve},
    output::{print_bench_result, print_solve_report},
    solver::{Solver, StrategyType},
};

#[derive(Parser)]
#[command(
    name = "word_ladder",
    about = "Word ladder solver with single-ended and bidirectional BFS strategies",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Strategy: bidirectional (default) or frontier
    #[arg(short, long, global = true, default_value = "bidirectional")]
    strategy: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the shortest ladder between two words
    Solve {
        /// Starting word
        source: String,

        /// Word to reach
        destination: String,

        /// Path to the dictionary file, one word per line
        dictionary: PathBuf,

        /// Path the solution is written to when a ladder is found
        solution: PathBuf,

        /// Show dictionary size and search time
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark the selected strategy over random word pairs
    Bench {
        /// Path to the dictionary file, one word per line
        dictionary: PathBuf,

        /// Number of random pairs to solve
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Word length the pairs are drawn from
        #[arg(short = 'l', long, default_value = "4")]
        length: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let strategy = StrategyType::from_name(&cli.strategy);
    let solver = Solver::new(strategy);

    match cli.command {
        Commands::Solve {
            source,
            destination,
            dictionary,
            solution,
            verbose,
        } => {
            let config = SolveConfig {
                source,
                destination,
                dictionary_path: dictionary,
                solution_path: solution,
            };

            let report = run_solve(&config, &solver)?;
            print_solve_report(&report, verbose);
        }
        Commands::Bench {
            dictionary,
            count,
            length,
        } => {
            let config = BenchConfig {
                dictionary_path: dictionary,
                pair_count: count,
                word_len: length,
            };

            let result = run_bench(&config, &solver)?;
            print_bench_result(&result);
        }
    }

    Ok(())
}
