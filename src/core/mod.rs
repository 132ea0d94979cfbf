//! Core domain types for two-word anagrams
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure, testable, and immutable once constructed.

mod candidates;
mod letters;
mod signature;
mod target;

pub use candidates::CandidateSet;
pub use letters::LetterSet;
pub use signature::{LetterCounts, Signature};
pub use target::{Target, TargetError};
