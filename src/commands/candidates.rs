//! Candidates command
//!
//! Runs only the filter and lists the words that survive it.

use crate::core::Target;
use crate::dictionary::{FilterReport, load_candidates};
use anyhow::{Context, Result};
use std::path::Path;

/// Result of filtering a dictionary against a target
pub struct CandidatesResult {
    pub target: String,
    pub report: FilterReport,
}

/// Filter `dictionary` against `target` without matching
///
/// # Errors
///
/// Returns an error if the target is empty or the dictionary cannot be read.
pub fn list_candidates(target: &str, dictionary: &Path) -> Result<CandidatesResult> {
    let target = Target::new(target).context("Invalid target word")?;
    let report = load_candidates(dictionary, &target)
        .with_context(|| format!("Cannot load candidates for '{target}'"))?;

    Ok(CandidatesResult {
        target: target.text().to_string(),
        report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn lists_filtered_words() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "do\ncat\n\ng\ngo\nbird\n").unwrap();
        file.flush().unwrap();

        let result = list_candidates("dog", file.path()).unwrap();
        assert_eq!(result.target, "dog");
        assert_eq!(result.report.candidates, vec!["do", "g", "go"]);
        assert_eq!(result.report.lines_read, 6);
    }

    #[test]
    fn missing_dictionary_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(list_candidates("dog", &dir.path().join("nope.txt")).is_err());
    }
}
