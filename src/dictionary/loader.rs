//! Word source loading
//!
//! Reads a dictionary one line at a time and keeps only the candidates.

use super::filter::is_candidate;
use crate::core::Target;
use log::{debug, warn};
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Outcome of filtering a word source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterReport {
    /// Surviving words, in source order
    pub candidates: Vec<String>,
    /// Number of lines read from the source
    pub lines_read: usize,
    /// Lines skipped because they were not valid UTF-8
    pub malformed_lines: usize,
    /// Time spent reading; from [`load_candidates`] this includes opening the file
    pub duration: Duration,
}

/// Error type for word sources that cannot be read
#[derive(Debug)]
pub enum SourceError {
    /// The source could not be opened
    Unavailable { path: PathBuf, source: io::Error },
    /// Reading failed part-way through
    Read {
        path: Option<PathBuf>,
        line: usize,
        source: io::Error,
    },
}

impl SourceError {
    fn at(self, origin: &Path) -> Self {
        match self {
            Self::Read { line, source, .. } => Self::Read {
                path: Some(origin.to_path_buf()),
                line,
                source,
            },
            other @ Self::Unavailable { .. } => other,
        }
    }
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable { path, .. } => {
                write!(f, "Word source '{}' is unavailable", path.display())
            }
            Self::Read {
                path: Some(path),
                line,
                ..
            } => write!(f, "Failed reading '{}' at line {line}", path.display()),
            Self::Read { path: None, line, .. } => {
                write!(f, "Failed reading word source at line {line}")
            }
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unavailable { source, .. } | Self::Read { source, .. } => Some(source),
        }
    }
}

/// Filter candidates from any buffered reader
///
/// Lines that are not valid UTF-8 are skipped with a warning. Any other
/// read error aborts the whole read; no partial candidate list is returned.
///
/// # Errors
///
/// Returns `SourceError::Read` if the underlying reader fails.
///
/// # Examples
/// ```
/// use std::io::Cursor;
/// use two_word_anagram::core::Target;
/// use two_word_anagram::dictionary::read_candidates;
///
/// let target = Target::new("cat").unwrap();
/// let report = read_candidates(Cursor::new("a\nct\ncat\n"), &target).unwrap();
/// assert_eq!(report.candidates, vec!["a", "ct"]);
/// assert_eq!(report.lines_read, 3);
/// ```
pub fn read_candidates<R: BufRead>(mut reader: R, target: &Target) -> Result<FilterReport, SourceError> {
    let start = Instant::now();
    let mut candidates = Vec::new();
    let mut lines_read = 0;
    let mut malformed_lines = 0;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| SourceError::Read {
                path: None,
                line: lines_read + 1,
                source,
            })?;
        if read == 0 {
            break;
        }
        lines_read += 1;

        match std::str::from_utf8(&buf) {
            Ok(line) => {
                let word = line.trim();
                if is_candidate(word, target) {
                    candidates.push(word.to_string());
                }
            }
            Err(e) => {
                malformed_lines += 1;
                warn!("Skipping line {lines_read}: not valid UTF-8 ({e})");
            }
        }
    }

    let duration = start.elapsed();
    debug!(
        "Filtered {lines_read} lines down to {} candidates in {duration:?}",
        candidates.len()
    );

    Ok(FilterReport {
        candidates,
        lines_read,
        malformed_lines,
        duration,
    })
}

/// Open a dictionary file and filter its candidates
///
/// The reported duration covers opening and reading the file.
///
/// # Errors
///
/// Returns `SourceError::Unavailable` if the file cannot be opened and
/// `SourceError::Read` if reading fails part-way through.
///
/// # Examples
/// ```no_run
/// use two_word_anagram::core::Target;
/// use two_word_anagram::dictionary::load_candidates;
///
/// let target = Target::new("documenting").unwrap();
/// let report = load_candidates("wordlist.txt", &target).unwrap();
/// println!("Read {} candidates", report.candidates.len());
/// ```
pub fn load_candidates<P: AsRef<Path>>(path: P, target: &Target) -> Result<FilterReport, SourceError> {
    let path = path.as_ref();
    let start = Instant::now();

    let file = File::open(path).map_err(|source| SourceError::Unavailable {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Opened word source {}", path.display());

    let mut report = read_candidates(BufReader::new(file), target).map_err(|e| e.at(path))?;
    report.duration = start.elapsed();
    Ok(report)
}
