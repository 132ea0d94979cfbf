//! Benchmark command
//!
//! Times the matcher over one candidate set with every comparison method,
//! sequentially and in parallel.

use crate::core::{CandidateSet, Target};
use crate::dictionary::load_candidates;
use crate::matcher::{ComparisonType, Matcher};
use anyhow::{Context, Result, ensure};
use std::path::Path;
use std::time::Duration;

/// Timing of one matcher configuration
#[derive(Debug)]
pub struct BenchmarkRun {
    pub method: &'static str,
    pub parallel: bool,
    pub pairs: u64,
    pub iterations: u64,
    pub best: Duration,
    pub average: Duration,
}

/// Result of a benchmark
#[derive(Debug)]
pub struct BenchmarkResult {
    pub target: String,
    pub candidates: usize,
    pub filter_duration: Duration,
    pub rounds: usize,
    pub runs: Vec<BenchmarkRun>,
}

/// Run the matcher `rounds` times per configuration
///
/// Every run must find the same pairs; a disagreement is reported as an error.
///
/// # Errors
///
/// Returns an error if:
/// - `rounds` is zero or does not fit in a `u32`
/// - The target is empty
/// - The dictionary cannot be read
/// - Two configurations disagree on the matches found
pub fn run_benchmark(target: &str, dictionary: &Path, rounds: usize) -> Result<BenchmarkResult> {
    ensure!(rounds > 0, "Benchmark needs at least one round");
    let divisor = u32::try_from(rounds)
        .with_context(|| format!("Benchmark rounds must fit in u32, got {rounds}"))?;

    let target = Target::new(target).context("Invalid target word")?;
    let report = load_candidates(dictionary, &target)
        .with_context(|| format!("Cannot load candidates for '{target}'"))?;
    let filter_duration = report.duration;
    let candidates: CandidateSet = report.candidates.into();

    let mut runs = Vec::new();
    let mut reference = None;

    for comparison in ComparisonType::all() {
        let matcher = Matcher::new(comparison, &target);

        for parallel in [false, true] {
            let mut total = Duration::ZERO;
            let mut best = Duration::MAX;
            let mut last = None;

            for _ in 0..rounds {
                let (matches, summary) = if parallel {
                    matcher.find_pairs_parallel(&candidates)
                } else {
                    let mut matches = Vec::new();
                    let summary = matcher.find_pairs(&candidates, |pair| matches.push(pair));
                    (matches, summary)
                };

                total += summary.duration;
                best = best.min(summary.duration);

                if let Some(expected) = reference.as_ref() {
                    ensure!(
                        *expected == matches,
                        "Method '{}' ({}) disagrees with the first run",
                        comparison.name(),
                        if parallel { "parallel" } else { "sequential" }
                    );
                } else {
                    reference = Some(matches);
                }
                last = Some(summary);
            }

            if let Some(summary) = last {
                runs.push(BenchmarkRun {
                    method: comparison.name(),
                    parallel,
                    pairs: summary.pairs,
                    iterations: summary.iterations,
                    best,
                    average: total / divisor,
                });
            }
        }
    }

    Ok(BenchmarkResult {
        target: target.text().to_string(),
        candidates: candidates.len(),
        filter_duration,
        rounds,
        runs,
    })
}
