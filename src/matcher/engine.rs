//! Exhaustive pair matcher
//!
//! Every unordered pair `{i, j}` with `i < j` is tested exactly once.
//! Matches are handed to the caller; the matcher itself never prints.

use super::comparison::Comparison;
use crate::core::{CandidateSet, Target};
use log::debug;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Result of testing one pair of words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairVerdict {
    /// Combined length differs from the target; no full comparison was done
    LengthMismatch,
    /// Right length, wrong characters
    SignatureMismatch,
    Match,
}

impl PairVerdict {
    #[inline]
    #[must_use]
    pub const fn is_match(self) -> bool {
        matches!(self, Self::Match)
    }
}

/// A matching pair of candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairMatch<'a> {
    pub first: &'a str,
    pub second: &'a str,
    pub first_index: usize,
    pub second_index: usize,
}

impl<'a> PairMatch<'a> {
    /// Both word orders, as they are reported to the user
    ///
    /// # Examples
    /// ```
    /// use two_word_anagram::matcher::PairMatch;
    ///
    /// let pair = PairMatch { first: "a", second: "ct", first_index: 0, second_index: 1 };
    /// assert_eq!(pair.orderings(), [("a", "ct"), ("ct", "a")]);
    /// ```
    #[must_use]
    pub const fn orderings(&self) -> [(&'a str, &'a str); 2] {
        [(self.first, self.second), (self.second, self.first)]
    }
}

/// Counts from scanning a single row of the pair triangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowScan {
    pub iterations: u64,
    pub pairs: u64,
}

/// Totals from a full matching pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSummary {
    /// Underlying unordered matching pairs
    pub pairs: u64,
    /// Pair comparisons performed
    pub iterations: u64,
    pub duration: Duration,
}

impl MatchSummary {
    /// Number of reported results; each pair is reported in both orders
    #[inline]
    #[must_use]
    pub const fn reported(&self) -> u64 {
        self.pairs * 2
    }
}

/// Pair matcher for a fixed target
pub struct Matcher<'t, C: Comparison> {
    comparison: C,
    target: &'t Target,
}

impl<'t, C: Comparison> Matcher<'t, C> {
    pub const fn new(comparison: C, target: &'t Target) -> Self {
        Self { comparison, target }
    }

    /// Test a single pair of words
    ///
    /// # Examples
    /// ```
    /// use two_word_anagram::core::Target;
    /// use two_word_anagram::matcher::{Matcher, PairVerdict, SortedComparison};
    ///
    /// let target = Target::new("dog").unwrap();
    /// let matcher = Matcher::new(SortedComparison, &target);
    ///
    /// assert_eq!(matcher.test_pair("do", "g"), PairVerdict::Match);
    /// assert_eq!(matcher.test_pair("do", "o"), PairVerdict::SignatureMismatch);
    /// assert_eq!(matcher.test_pair("do", "go"), PairVerdict::LengthMismatch);
    /// ```
    pub fn test_pair(&self, first: &str, second: &str) -> PairVerdict {
        self.verdict(
            first,
            first.chars().count(),
            second,
            second.chars().count(),
        )
    }

    #[inline]
    fn verdict(&self, first: &str, first_len: usize, second: &str, second_len: usize) -> PairVerdict {
        if first_len + second_len != self.target.len() {
            PairVerdict::LengthMismatch
        } else if self.comparison.is_anagram(self.target, first, second) {
            PairVerdict::Match
        } else {
            PairVerdict::SignatureMismatch
        }
    }

    /// Test candidate `row` against every later candidate
    ///
    /// # Panics
    /// Panics if `row` is out of bounds
    pub fn scan_row<'s, F>(&self, candidates: &'s CandidateSet, row: usize, on_match: &mut F) -> RowScan
    where
        F: FnMut(PairMatch<'s>),
    {
        let first = &candidates[row];
        let first_len = candidates.char_len(row);
        let mut scan = RowScan::default();

        for col in row + 1..candidates.len() {
            scan.iterations += 1;
            let second = &candidates[col];
            if self
                .verdict(first, first_len, second, candidates.char_len(col))
                .is_match()
            {
                scan.pairs += 1;
                on_match(PairMatch {
                    first,
                    second,
                    first_index: row,
                    second_index: col,
                });
            }
        }

        scan
    }

    /// Find every matching pair, sequentially, in index order
    ///
    /// # Examples
    /// ```
    /// use two_word_anagram::core::{CandidateSet, Target};
    /// use two_word_anagram::matcher::{Matcher, SortedComparison};
    ///
    /// let target = Target::new("cat").unwrap();
    /// let candidates = CandidateSet::new(vec!["a".into(), "ct".into()]);
    /// let matcher = Matcher::new(SortedComparison, &target);
    ///
    /// let mut lines = Vec::new();
    /// let summary = matcher.find_pairs(&candidates, |pair| {
    ///     for (a, b) in pair.orderings() {
    ///         lines.push(format!("cat = {a} + {b}"));
    ///     }
    /// });
    ///
    /// assert_eq!(lines, vec!["cat = a + ct", "cat = ct + a"]);
    /// assert_eq!(summary.pairs, 1);
    /// assert_eq!(summary.reported(), 2);
    /// ```
    pub fn find_pairs<'s, F>(&self, candidates: &'s CandidateSet, on_match: F) -> MatchSummary
    where
        F: FnMut(PairMatch<'s>),
    {
        self.find_pairs_with(candidates, |_, _| {}, on_match)
    }

    /// Sequential matching with a callback after each completed row
    ///
    /// `on_row` receives the row index and that row's counts.
    pub fn find_pairs_with<'s, R, F>(
        &self,
        candidates: &'s CandidateSet,
        mut on_row: R,
        mut on_match: F,
    ) -> MatchSummary
    where
        R: FnMut(usize, RowScan),
        F: FnMut(PairMatch<'s>),
    {
        let start = Instant::now();
        let mut pairs = 0;
        let mut iterations = 0;

        for row in 0..candidates.len() {
            let scan = self.scan_row(candidates, row, &mut on_match);
            pairs += scan.pairs;
            iterations += scan.iterations;
            on_row(row, scan);
        }

        let summary = MatchSummary {
            pairs,
            iterations,
            duration: start.elapsed(),
        };
        debug!(
            "Sequential scan of {} candidates: {} pairs in {} iterations ({:?})",
            candidates.len(),
            summary.pairs,
            summary.iterations,
            summary.duration
        );
        summary
    }

    /// Find every matching pair, splitting rows across threads
    ///
    /// Matches are returned in the same order as [`Matcher::find_pairs`].
    pub fn find_pairs_parallel<'s>(&self, candidates: &'s CandidateSet) -> (Vec<PairMatch<'s>>, MatchSummary) {
        self.find_pairs_parallel_with(candidates, |_, _| {})
    }

    /// Parallel matching with a callback after each completed row
    ///
    /// `on_row` may be called from any worker thread and in any order.
    pub fn find_pairs_parallel_with<'s, R>(
        &self,
        candidates: &'s CandidateSet,
        on_row: R,
    ) -> (Vec<PairMatch<'s>>, MatchSummary)
    where
        R: Fn(usize, RowScan) + Sync + Send,
    {
        let start = Instant::now();

        let rows: Vec<(RowScan, Vec<PairMatch<'s>>)> = (0..candidates.len())
            .into_par_iter()
            .map(|row| {
                let mut found = Vec::new();
                let scan = self.scan_row(candidates, row, &mut |pair| found.push(pair));
                on_row(row, scan);
                (scan, found)
            })
            .collect();

        let mut pairs = 0;
        let mut iterations = 0;
        let mut matches = Vec::new();
        for (scan, found) in rows {
            pairs += scan.pairs;
            iterations += scan.iterations;
            matches.extend(found);
        }

        let summary = MatchSummary {
            pairs,
            iterations,
            duration: start.elapsed(),
        };
        debug!(
            "Parallel scan of {} candidates: {} pairs in {} iterations ({:?})",
            candidates.len(),
            summary.pairs,
            summary.iterations,
            summary.duration
        );
        (matches, summary)
    }
}
