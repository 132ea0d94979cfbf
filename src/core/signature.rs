//! Canonical character signatures
//!
//! Two words are anagrams of each other exactly when their signatures are equal.
//! Two representations are provided:
//! - [`Signature`]: the characters sorted into a canonical sequence
//! - [`LetterCounts`]: a character frequency table

use rustc_hash::FxHashMap;
use std::fmt;

/// Sorted character sequence of a word (or of two words joined)
///
/// Characters are compared by exact `char` equality, so case is significant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature(Box<[char]>);

impl Signature {
    /// Build the signature of a single word
    ///
    /// # Examples
    /// ```
    /// use two_word_anagram::core::Signature;
    ///
    /// assert_eq!(Signature::of("listen"), Signature::of("silent"));
    /// assert_ne!(Signature::of("listen"), Signature::of("listed"));
    /// ```
    #[must_use]
    pub fn of(word: &str) -> Self {
        let mut chars: Vec<char> = word.chars().collect();
        chars.sort_unstable();
        Self(chars.into_boxed_slice())
    }

    /// Build the signature of two words joined together
    ///
    /// The order of the two words does not matter.
    ///
    /// # Examples
    /// ```
    /// use two_word_anagram::core::Signature;
    ///
    /// assert_eq!(Signature::of_pair("a", "ct"), Signature::of("cat"));
    /// assert_eq!(Signature::of_pair("ct", "a"), Signature::of("cat"));
    /// ```
    #[must_use]
    pub fn of_pair(first: &str, second: &str) -> Self {
        let mut chars: Vec<char> = Vec::with_capacity(first.len() + second.len());
        chars.extend(first.chars());
        chars.extend(second.chars());
        chars.sort_unstable();
        Self(chars.into_boxed_slice())
    }

    /// Number of characters in the signature
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the signature has no characters
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The sorted characters
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.0
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

/// Character frequency table of a word (or of two words joined)
///
/// Equivalent to [`Signature`] for equality, but built in linear time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LetterCounts {
    counts: FxHashMap<char, u32>,
    total: usize,
}

impl LetterCounts {
    /// Count the characters of a single word
    ///
    /// # Examples
    /// ```
    /// use two_word_anagram::core::LetterCounts;
    ///
    /// let counts = LetterCounts::of("aabb");
    /// assert_eq!(counts.count('a'), 2);
    /// assert_eq!(counts.count('z'), 0);
    /// ```
    #[must_use]
    pub fn of(word: &str) -> Self {
        let mut counts = Self::default();
        counts.add(word);
        counts
    }

    /// Count the characters of two words joined together
    #[must_use]
    pub fn of_pair(first: &str, second: &str) -> Self {
        let mut counts = Self::default();
        counts.add(first);
        counts.add(second);
        counts
    }

    fn add(&mut self, word: &str) {
        for ch in word.chars() {
            *self.counts.entry(ch).or_insert(0) += 1;
            self.total += 1;
        }
    }

    /// How many times `ch` occurs
    #[inline]
    #[must_use]
    pub fn count(&self, ch: char) -> u32 {
        self.counts.get(&ch).copied().unwrap_or(0)
    }

    /// Total number of characters counted
    #[inline]
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }
}
