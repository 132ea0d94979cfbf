//! Command implementations

pub mod benchmark;
pub mod candidates;
pub mod find;

pub use benchmark::{BenchmarkResult, BenchmarkRun, run_benchmark};
pub use candidates::{CandidatesResult, list_candidates};
pub use find::{FindConfig, FindResult, MatchSink, run_find};
