//! Display functions for command results

use super::formatters::{format_elapsed, ladder_arrow};
use crate::commands::{BenchResult, SolveReport};
use colored::Colorize;

/// Print the result of a solve run
pub fn print_solve_report(report: &SolveReport, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Ladder: {} → {}",
        report.source.to_uppercase().bright_yellow().bold(),
        report.destination.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    if verbose {
        println!("\nDictionary lines: {}", report.dictionary_size);
        println!(
            "Search time:      {}",
            format_elapsed(report.solution.elapsed)
        );
    }

    if report.solution.found() {
        println!("\n{}", ladder_arrow(&report.solution.ladder));
        println!(
            "\n{}",
            format!("Solved in {} steps", report.solution.ladder.len() - 1)
                .green()
                .bold()
        );
    } else {
        println!("\n{}", "No solution found".red().bold());
    }
}

/// Print the result of a benchmark
pub fn print_bench_result(result: &BenchResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Outcomes:".bright_cyan().bold());
    println!("   Pairs tested:     {}", result.pairs_tested);
    println!(
        "   Ladders found:    {}",
        format!("{}", result.solved).green()
    );
    println!(
        "   No path:          {}",
        format!("{}", result.no_path).yellow()
    );

    println!("\n⏱  {}", "Performance:".bright_cyan().bold());
    println!(
        "   Average ladder:   {} words",
        format!("{:.2}", result.average_ladder_len)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Time taken:       {:.2}s",
        result.total_duration.as_secs_f64()
    );
    println!("   Pairs/second:     {:.1}", result.pairs_per_second);
}
