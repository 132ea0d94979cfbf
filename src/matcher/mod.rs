//! Pair matching
//!
//! Exhaustively tests every unordered pair of candidates for an exact
//! anagram of the target.

pub mod comparison;
mod engine;

pub use comparison::{Comparison, ComparisonType, CountingComparison, SortedComparison};
pub use engine::{MatchSummary, Matcher, PairMatch, PairVerdict, RowScan};
