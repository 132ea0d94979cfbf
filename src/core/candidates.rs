//! The filtered candidate collection

use std::ops::Index;

/// Ordered, immutable set of candidate words
///
/// Each word's length in characters is computed once up front so the
/// matcher can reject pairs by length without rescanning the words.
/// Duplicates are kept; each occurrence is a distinct candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    words: Vec<String>,
    lengths: Vec<usize>,
}

impl CandidateSet {
    /// Build a candidate set, preserving order
    ///
    /// # Examples
    /// ```
    /// use two_word_anagram::core::CandidateSet;
    ///
    /// let set = CandidateSet::new(vec!["do".to_string(), "g".to_string()]);
    /// assert_eq!(set.len(), 2);
    /// assert_eq!(&set[0], "do");
    /// assert_eq!(set.char_len(0), 2);
    /// ```
    #[must_use]
    pub fn new(words: Vec<String>) -> Self {
        let lengths = words.iter().map(|w| w.chars().count()).collect();
        Self { words, lengths }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Length in characters of the word at `index`
    ///
    /// # Panics
    /// Panics if `index` is out of bounds
    #[inline]
    #[must_use]
    pub fn char_len(&self, index: usize) -> usize {
        self.lengths[index]
    }

    /// Number of distinct unordered index pairs, `n * (n - 1) / 2`
    #[must_use]
    pub fn pair_count(&self) -> u64 {
        let n = self.len() as u64;
        n * n.saturating_sub(1) / 2
    }
}

impl From<Vec<String>> for CandidateSet {
    fn from(words: Vec<String>) -> Self {
        Self::new(words)
    }
}

impl Index<usize> for CandidateSet {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.words[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> CandidateSet {
        CandidateSet::new(words.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn lengths_are_in_chars() {
        let s = set(&["ab", "é", ""]);
        assert_eq!(s.char_len(0), 2);
        assert_eq!(s.char_len(1), 1);
        assert_eq!(s.char_len(2), 0);
    }

    #[test]
    fn pair_count_formula() {
        assert_eq!(set(&[]).pair_count(), 0);
        assert_eq!(set(&["a"]).pair_count(), 0);
        assert_eq!(set(&["a", "b"]).pair_count(), 1);
        assert_eq!(set(&["a", "b", "c", "d"]).pair_count(), 6);
    }

    #[test]
    fn keeps_order_and_duplicates() {
        let s = set(&["ab", "ab", "ba"]);
        assert_eq!(s.len(), 3);
        assert_eq!(&s[0], "ab");
        assert_eq!(&s[1], "ab");
        assert_eq!(&s[2], "ba");
    }
}
