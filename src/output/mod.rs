//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{ConsoleSink, print_benchmark_result, print_candidates, print_find_result};
pub use formatters::format_match;
