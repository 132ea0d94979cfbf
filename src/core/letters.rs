//! Distinct letters of a target word

use rustc_hash::FxHashSet;

/// The set of distinct characters in a word
///
/// Used to reject dictionary words that contain a character the target lacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterSet {
    members: FxHashSet<char>,
}

impl LetterSet {
    /// Collect the distinct characters of `word`
    ///
    /// # Examples
    /// ```
    /// use two_word_anagram::core::LetterSet;
    ///
    /// let letters = LetterSet::of("aabb");
    /// assert_eq!(letters.len(), 2);
    /// assert!(letters.admits("abba"));
    /// assert!(!letters.admits("abc"));
    /// ```
    #[must_use]
    pub fn of(word: &str) -> Self {
        Self {
            members: word.chars().collect(),
        }
    }

    /// Check if `ch` is one of the letters
    #[inline]
    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        self.members.contains(&ch)
    }

    /// Check if every character of `word` is one of the letters
    ///
    /// An empty word is trivially admitted.
    #[must_use]
    pub fn admits(&self, word: &str) -> bool {
        word.chars().all(|ch| self.contains(ch))
    }

    /// Number of distinct letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_each_letter_once() {
        let letters = LetterSet::of("documenting");
        assert_eq!(letters.len(), 10);
        assert!(letters.contains('n'));
    }

    #[test]
    fn contains_only_word_letters() {
        let letters = LetterSet::of("cat");
        assert!(letters.contains('c'));
        assert!(letters.contains('a'));
        assert!(letters.contains('t'));
        assert!(!letters.contains('d'));
        assert!(!letters.contains('C'));
    }

    #[test]
    fn admits_checks_membership_not_multiplicity() {
        let letters = LetterSet::of("cat");
        assert!(letters.admits("tact"));
        assert!(letters.admits(""));
        assert!(!letters.admits("cart"));
    }

    #[test]
    fn empty_word_has_no_letters() {
        let letters = LetterSet::of("");
        assert!(letters.is_empty());
        assert!(!letters.admits("a"));
    }
}
