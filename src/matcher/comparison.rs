//! Multiset comparison methods
//!
//! Defines the Comparison trait and concrete implementations. Both methods
//! decide the same question: do two words together use exactly the target's
//! characters?

use crate::core::{LetterCounts, Signature, Target};

/// A way of testing whether two words jointly form an anagram of the target
///
/// Implementations only decide multiset equality; the length pre-check is
/// done by the matcher.
pub trait Comparison: Sync {
    fn is_anagram(&self, target: &Target, first: &str, second: &str) -> bool;
}

/// Enum wrapper for all comparison methods
///
/// Allows runtime selection while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonType {
    /// Sort the joined characters and compare with the target signature (default)
    Sorted(SortedComparison),
    /// Count characters and compare frequency tables
    Counting(CountingComparison),
}

impl Comparison for ComparisonType {
    fn is_anagram(&self, target: &Target, first: &str, second: &str) -> bool {
        match self {
            Self::Sorted(c) => c.is_anagram(target, first, second),
            Self::Counting(c) => c.is_anagram(target, first, second),
        }
    }
}

impl ComparisonType {
    /// Create a comparison method from its name
    ///
    /// Supported names: "sorted", "counts" (or "counting").
    /// Defaults to sorted if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "counts" | "counting" => Self::Counting(CountingComparison),
            _ => Self::Sorted(SortedComparison),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sorted(_) => "sorted",
            Self::Counting(_) => "counts",
        }
    }

    /// Every available method, default first
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [
            Self::Sorted(SortedComparison),
            Self::Counting(CountingComparison),
        ]
    }
}

impl Default for ComparisonType {
    fn default() -> Self {
        Self::Sorted(SortedComparison)
    }
}

/// Sort-and-compare method
///
/// O(L log L) per pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortedComparison;

impl Comparison for SortedComparison {
    fn is_anagram(&self, target: &Target, first: &str, second: &str) -> bool {
        Signature::of_pair(first, second) == *target.signature()
    }
}

/// Frequency-count method
///
/// O(L) per pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CountingComparison;

impl Comparison for CountingComparison {
    fn is_anagram(&self, target: &Target, first: &str, second: &str) -> bool {
        LetterCounts::of_pair(first, second) == *target.counts()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_selects_method() {
        assert_eq!(ComparisonType::from_name("sorted").name(), "sorted");
        assert_eq!(ComparisonType::from_name("counts").name(), "counts");
        assert_eq!(ComparisonType::from_name("counting").name(), "counts");
    }

    #[test]
    fn from_name_defaults_to_sorted() {
        assert_eq!(ComparisonType::from_name("bogus"), ComparisonType::default());
        assert_eq!(ComparisonType::default().name(), "sorted");
    }

    #[test]
    fn methods_agree() {
        let target = Target::new("aabb").unwrap();
        let pairs = [("ab", "ab"), ("aa", "bb"), ("ab", "b"), ("ab", "bb"), ("a", "abb")];
        for (first, second) in pairs {
            let sorted = SortedComparison.is_anagram(&target, first, second);
            let counted = CountingComparison.is_anagram(&target, first, second);
            assert_eq!(sorted, counted, "{first} + {second}");
        }
    }

    #[test]
    fn requires_full_multiset() {
        let target = Target::new("cat").unwrap();
        for method in ComparisonType::all() {
            assert!(method.is_anagram(&target, "a", "ct"));
            assert!(method.is_anagram(&target, "ct", "a"));
            // same length, wrong multiset
            assert!(!method.is_anagram(&target, "a", "tt"));
        }
    }
}
