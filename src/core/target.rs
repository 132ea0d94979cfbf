//! The word being anagrammed

use super::{LetterCounts, LetterSet, Signature};
use std::fmt;

/// A validated target word together with its derived match keys
///
/// Computed once at startup and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    text: String,
    len: usize,
    signature: Signature,
    counts: LetterCounts,
    letters: LetterSet,
}

/// Error type for invalid target words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetError {
    Empty,
}

impl fmt::Display for TargetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Target word must not be empty"),
        }
    }
}

impl std::error::Error for TargetError {}

impl Target {
    /// Create a target from a string
    ///
    /// Surrounding whitespace is trimmed. Case is preserved.
    ///
    /// # Errors
    /// Returns `TargetError::Empty` if nothing remains after trimming.
    ///
    /// # Examples
    /// ```
    /// use two_word_anagram::core::Target;
    ///
    /// let target = Target::new("cat").unwrap();
    /// assert_eq!(target.len(), 3);
    /// assert_eq!(target.signature().to_string(), "act");
    ///
    /// assert!(Target::new("   ").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, TargetError> {
        let text: String = text.into();
        let text = text.trim().to_string();

        if text.is_empty() {
            return Err(TargetError::Empty);
        }

        Ok(Self {
            len: text.chars().count(),
            signature: Signature::of(&text),
            counts: LetterCounts::of(&text),
            letters: LetterSet::of(&text),
            text,
        })
    }

    /// The target as typed
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in characters
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always false; an empty target is rejected by [`Target::new`]
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Sorted characters of the target
    #[inline]
    #[must_use]
    pub const fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Character frequencies of the target
    #[inline]
    #[must_use]
    pub const fn counts(&self) -> &LetterCounts {
        &self.counts
    }

    /// Distinct characters of the target
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &LetterSet {
        &self.letters
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_derives_keys() {
        let target = Target::new("documenting").unwrap();
        assert_eq!(target.text(), "documenting");
        assert_eq!(target.len(), 11);
        assert_eq!(target.signature().len(), target.len());
        assert_eq!(target.counts().total(), target.len());
        assert_eq!(target.letters().len(), 10);
    }

    #[test]
    fn target_is_trimmed() {
        let target = Target::new("  dog\n").unwrap();
        assert_eq!(target.text(), "dog");
        assert_eq!(target.len(), 3);
    }

    #[test]
    fn target_rejects_empty() {
        assert_eq!(Target::new(""), Err(TargetError::Empty));
        assert_eq!(Target::new(" \t "), Err(TargetError::Empty));
    }

    #[test]
    fn target_preserves_case() {
        let target = Target::new("Dog").unwrap();
        assert_eq!(target.text(), "Dog");
        assert!(target.letters().contains('D'));
        assert!(!target.letters().contains('d'));
    }

    #[test]
    fn target_length_counts_chars_not_bytes() {
        let target = Target::new("éa").unwrap();
        assert_eq!(target.len(), 2);
        assert_eq!(target.signature().len(), 2);
    }

    #[test]
    fn target_display() {
        let target = Target::new("cat").unwrap();
        assert_eq!(format!("{target}"), "cat");
    }
}
