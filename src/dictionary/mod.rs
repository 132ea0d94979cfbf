//! Dictionary reading and candidate filtering
//!
//! Turns a line-oriented word source into the list of candidates that could
//! take part in a two-word anagram of the target.

pub mod filter;
pub mod loader;

pub use filter::{candidates_from_str, filter_candidates, is_candidate};
pub use loader::{FilterReport, SourceError, load_candidates, read_candidates};
