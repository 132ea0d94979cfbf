//! Find command
//!
//! Loads the dictionary, filters candidates, and reports every two-word
//! anagram of the target.

use crate::core::{CandidateSet, Target};
use crate::dictionary::load_candidates;
use crate::matcher::{Comparison, ComparisonType, MatchSummary, Matcher, PairMatch};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Receives each reported match
///
/// Called twice per matching pair, once for each word order.
pub trait MatchSink {
    fn report(&mut self, target: &str, first: &str, second: &str);
}

/// Collects formatted result lines
impl MatchSink for Vec<String> {
    fn report(&mut self, target: &str, first: &str, second: &str) {
        self.push(crate::output::format_match(target, first, second));
    }
}

/// Configuration for a find run
#[derive(Debug, Clone)]
pub struct FindConfig {
    pub target: String,
    pub dictionary: PathBuf,
    pub comparison: ComparisonType,
    pub parallel: bool,
    pub show_progress: bool,
}

impl FindConfig {
    #[must_use]
    pub fn new(target: impl Into<String>, dictionary: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
            dictionary: dictionary.into(),
            comparison: ComparisonType::default(),
            parallel: false,
            show_progress: false,
        }
    }
}

/// Result of a find run
#[derive(Debug, Clone)]
pub struct FindResult {
    pub target: String,
    pub lines_read: usize,
    pub malformed_lines: usize,
    pub candidates: usize,
    pub filter_duration: Duration,
    pub summary: MatchSummary,
    pub total_duration: Duration,
}

/// Progress bar measured in pair comparisons
fn progress_bar(comparisons: u64, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(comparisons);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}

/// Run the matcher and hand every match to `on_match`
///
/// The bar advances by each finished row's comparison count. It is always
/// finished and cleared before the call returns; in parallel mode that
/// happens before the first match is handed out, so output never lands on
/// the bar line.
fn match_with_progress<'s, C, F>(
    matcher: &Matcher<'_, C>,
    candidates: &'s CandidateSet,
    parallel: bool,
    pb: &ProgressBar,
    mut on_match: F,
) -> MatchSummary
where
    C: Comparison,
    F: FnMut(PairMatch<'s>),
{
    if parallel {
        let (matches, summary) =
            matcher.find_pairs_parallel_with(candidates, |_, scan| pb.inc(scan.iterations));
        pb.finish_and_clear();
        matches.into_iter().for_each(on_match);
        summary
    } else {
        let summary = matcher.find_pairs_with(
            candidates,
            |_, scan| pb.inc(scan.iterations),
            |pair| pb.suspend(|| on_match(pair)),
        );
        pb.finish_and_clear();
        summary
    }
}

/// Run a full find: filter, match, report
///
/// Matches are handed to `sink` in index order, each in both word orders,
/// regardless of whether matching ran in parallel.
///
/// # Errors
///
/// Returns an error if:
/// - The target word is empty
/// - The dictionary cannot be opened or read
pub fn run_find<S: MatchSink>(config: &FindConfig, sink: &mut S) -> Result<FindResult> {
    let target = Target::new(config.target.as_str()).context("Invalid target word")?;
    let start = Instant::now();

    let report = load_candidates(&config.dictionary, &target)
        .with_context(|| format!("Cannot load candidates for '{target}'"))?;
    info!(
        "Read {} candidates in {} ms",
        report.candidates.len(),
        report.duration.as_millis()
    );

    let candidates: CandidateSet = report.candidates.into();
    let matcher = Matcher::new(config.comparison, &target);
    let pb = progress_bar(candidates.pair_count(), config.show_progress);

    let summary = match_with_progress(&matcher, &candidates, config.parallel, &pb, |pair| {
        for (first, second) in pair.orderings() {
            sink.report(target.text(), first, second);
        }
    });

    info!(
        "Found {} anagrams in {} ms ({} iterations)",
        summary.reported(),
        summary.duration.as_millis(),
        summary.iterations
    );

    Ok(FindResult {
        target: target.text().to_string(),
        lines_read: report.lines_read,
        malformed_lines: report.malformed_lines,
        candidates: candidates.len(),
        filter_duration: report.duration,
        summary,
        total_duration: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::SourceError;
    use crate::matcher::SortedComparison;
    use indicatif::ProgressDrawTarget;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn hidden_bar(len: u64) -> ProgressBar {
        ProgressBar::with_draw_target(Some(len), ProgressDrawTarget::hidden())
    }

    fn dog_candidates() -> CandidateSet {
        vec!["do".to_string(), "g".to_string(), "o".to_string(), "dg".to_string()].into()
    }

    fn dictionary(words: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for word in words {
            writeln!(file, "{word}").unwrap();
        }
        file.flush().unwrap();
        file
    }

    #[test]
    fn reports_both_orders() {
        let file = dictionary(&["a", "ct", "dog"]);
        let config = FindConfig::new("cat", file.path());

        let mut lines: Vec<String> = Vec::new();
        let result = run_find(&config, &mut lines).unwrap();

        assert_eq!(lines, vec!["cat = a + ct", "cat = ct + a"]);
        assert_eq!(result.candidates, 2);
        assert_eq!(result.lines_read, 3);
        assert_eq!(result.summary.pairs, 1);
        assert_eq!(result.summary.reported(), 2);
        assert_eq!(result.summary.iterations, 1);
    }

    #[test]
    fn full_length_anagram_is_not_reported() {
        let file = dictionary(&["enlist", "silent", "inlets"]);
        let config = FindConfig::new("listen", file.path());

        let mut lines: Vec<String> = Vec::new();
        let result = run_find(&config, &mut lines).unwrap();

        assert!(lines.is_empty());
        assert_eq!(result.candidates, 0);
        assert_eq!(result.summary.iterations, 0);
    }

    #[test]
    fn word_as_long_as_target_is_filtered() {
        let file = dictionary(&["cat", "do", "g"]);
        let config = FindConfig::new("dog", file.path());

        let mut lines: Vec<String> = Vec::new();
        let result = run_find(&config, &mut lines).unwrap();

        assert_eq!(result.candidates, 2);
        assert_eq!(lines, vec!["dog = do + g", "dog = g + do"]);
    }

    #[test]
    fn duplicates_are_not_deduplicated() {
        let file = dictionary(&["ab", "ab"]);
        let config = FindConfig::new("aabb", file.path());

        let mut lines: Vec<String> = Vec::new();
        let result = run_find(&config, &mut lines).unwrap();

        assert_eq!(lines, vec!["aabb = ab + ab", "aabb = ab + ab"]);
        assert_eq!(result.summary.pairs, 1);
    }

    #[test]
    fn line_count_is_twice_pair_count() {
        let file = dictionary(&["doc", "umenting", "document", "ing", "gin", "men", "ting", "cute"]);
        let config = FindConfig::new("documenting", file.path());

        let mut lines: Vec<String> = Vec::new();
        let result = run_find(&config, &mut lines).unwrap();

        assert_eq!(result.summary.pairs, 3);
        assert_eq!(lines.len() as u64, result.summary.reported());
    }

    #[test]
    fn parallel_reports_same_lines() {
        let file = dictionary(&["doc", "umenting", "document", "ing", "gin", "men", "ting", "cute"]);
        let mut config = FindConfig::new("documenting", file.path());

        let mut sequential: Vec<String> = Vec::new();
        run_find(&config, &mut sequential).unwrap();

        config.parallel = true;
        config.comparison = ComparisonType::from_name("counts");
        let mut parallel: Vec<String> = Vec::new();
        let result = run_find(&config, &mut parallel).unwrap();

        assert_eq!(parallel, sequential);
        assert_eq!(result.summary.reported(), parallel.len() as u64);
    }

    #[test]
    fn parallel_bar_is_cleared_before_reporting() {
        let target = Target::new("dog").unwrap();
        let candidates = dog_candidates();
        let matcher = Matcher::new(SortedComparison, &target);
        let pb = hidden_bar(candidates.pair_count());

        let mut finished_at_report = Vec::new();
        let summary = match_with_progress(&matcher, &candidates, true, &pb, |_| {
            finished_at_report.push(pb.is_finished());
        });

        assert_eq!(summary.pairs, 2);
        assert_eq!(finished_at_report, vec![true, true]);
    }

    #[test]
    fn sequential_bar_is_finished_afterwards() {
        let target = Target::new("dog").unwrap();
        let candidates = dog_candidates();
        let matcher = Matcher::new(SortedComparison, &target);
        let pb = hidden_bar(candidates.pair_count());

        let summary = match_with_progress(&matcher, &candidates, false, &pb, |_| {});

        assert_eq!(summary.pairs, 2);
        assert!(pb.is_finished());
    }

    #[test]
    fn bar_advances_by_comparisons() {
        // rows do 3, 2, 1, 0 comparisons; matches sit in rows 0 and 2
        let target = Target::new("dog").unwrap();
        let candidates = dog_candidates();
        let matcher = Matcher::new(SortedComparison, &target);
        let pb = hidden_bar(candidates.pair_count());

        let mut positions = Vec::new();
        match_with_progress(&matcher, &candidates, false, &pb, |pair| {
            positions.push((pair.first_index, pb.position()));
        });

        assert_eq!(positions, vec![(0, 0), (2, 5)]);
    }

    #[test]
    fn missing_dictionary_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let config = FindConfig::new("cat", dir.path().join("missing.txt"));

        let mut lines: Vec<String> = Vec::new();
        let err = run_find(&config, &mut lines).unwrap_err();

        assert!(lines.is_empty());
        assert!(matches!(
            err.downcast_ref::<SourceError>(),
            Some(SourceError::Unavailable { .. })
        ));
    }

    #[test]
    fn empty_target_is_rejected() {
        let file = dictionary(&["a"]);
        let config = FindConfig::new("  ", file.path());

        let mut lines: Vec<String> = Vec::new();
        assert!(run_find(&config, &mut lines).is_err());
    }
}
