//! Display functions for command results

use super::formatters::{
    create_progress_bar, format_match, format_millis, iterations_per_second,
};
use crate::commands::{BenchmarkResult, CandidatesResult, FindResult, MatchSink};
use colored::Colorize;

/// Prints each match to stdout as it is reported
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl MatchSink for ConsoleSink {
    fn report(&mut self, target: &str, first: &str, second: &str) {
        println!("{}", format_match(target, first, second));
    }
}

/// Print the summary of a find run
pub fn print_find_result(result: &FindResult, verbose: bool) {
    println!(
        "Read {} candidates in {}",
        result.candidates.to_string().bright_yellow(),
        format_millis(result.filter_duration)
    );
    if verbose {
        println!("  Lines read:      {}", result.lines_read);
        if result.malformed_lines > 0 {
            println!(
                "  Skipped lines:   {}",
                result.malformed_lines.to_string().red()
            );
        }
    }

    println!(
        "Found {} anagrams in {} ({} iterations)",
        result.summary.reported().to_string().green().bold(),
        format_millis(result.summary.duration),
        result.summary.iterations
    );
    if verbose {
        println!("  Distinct pairs:  {}", result.summary.pairs);
        println!(
            "  Comparisons/s:   {:.0}",
            iterations_per_second(result.summary.iterations, result.summary.duration)
        );
    }

    println!("Total time {}", format_millis(result.total_duration));
}

/// Print the words that survived filtering
pub fn print_candidates(result: &CandidatesResult) {
    for word in &result.report.candidates {
        println!("{word}");
    }

    eprintln!(
        "{} {} of {} lines are candidates for {}",
        "→".cyan(),
        result.report.candidates.len().to_string().bright_yellow(),
        result.report.lines_read,
        result.target.bright_yellow().bold()
    );
    if result.report.malformed_lines > 0 {
        eprintln!(
            "{} {} lines were not valid UTF-8 and were skipped",
            "!".red(),
            result.report.malformed_lines
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Input:".bright_cyan().bold());
    println!("   Target:           {}", result.target.bright_yellow().bold());
    println!("   Candidates:       {}", result.candidates);
    println!("   Filter time:      {}", format_millis(result.filter_duration));
    println!("   Rounds:           {}", result.rounds);

    let slowest = result
        .runs
        .iter()
        .map(|run| run.average.as_secs_f64())
        .fold(0.0, f64::max);

    println!("\n📈 {}", "Matching:".bright_cyan().bold());
    for run in &result.runs {
        let mode = if run.parallel { "parallel" } else { "sequential" };
        let bar = create_progress_bar(run.average.as_secs_f64(), slowest, 30);
        println!(
            "   {:<7} {:<10} {} avg {:>8} best {:>8}  ({} pairs, {} iterations)",
            run.method,
            mode,
            bar.green(),
            format_millis(run.average),
            format_millis(run.best),
            run.pairs,
            run.iterations
        );
    }
}
