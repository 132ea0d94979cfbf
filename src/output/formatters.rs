//! Formatting utilities for terminal output

use std::time::Duration;

/// Format one reported match
///
/// # Examples
/// ```
/// use two_word_anagram::output::format_match;
///
/// assert_eq!(format_match("cat", "a", "ct"), "cat = a + ct");
/// ```
#[must_use]
pub fn format_match(target: &str, first: &str, second: &str) -> String {
    format!("{target} = {first} + {second}")
}

/// Format a duration as whole milliseconds
#[must_use]
pub fn format_millis(duration: Duration) -> String {
    format!("{} ms", duration.as_millis())
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Comparisons per second, for throughput lines
#[must_use]
pub fn iterations_per_second(iterations: u64, duration: Duration) -> f64 {
    let secs = duration.as_secs_f64();
    if secs > 0.0 { iterations as f64 / secs } else { 0.0 }
}
