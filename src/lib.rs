//! Two-Word Anagram Finder
//!
//! Finds every pair of dictionary words whose letters, taken together, are
//! exactly a permutation of a target word.
//!
//! # Quick Start
//!
//! ```rust
//! use two_word_anagram::core::{CandidateSet, Target};
//! use two_word_anagram::dictionary::candidates_from_str;
//! use two_word_anagram::matcher::{Matcher, SortedComparison};
//!
//! let target = Target::new("dog").unwrap();
//! let candidates = CandidateSet::new(candidates_from_str("do\ncat\ng\n", &target));
//!
//! let matcher = Matcher::new(SortedComparison, &target);
//! let summary = matcher.find_pairs(&candidates, |pair| {
//!     println!("{} + {}", pair.first, pair.second);
//! });
//! assert_eq!(summary.pairs, 1);
//! ```

// Core domain types
pub mod core;

// Word source reading and candidate filtering
pub mod dictionary;

// Pairwise anagram matching
pub mod matcher;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
