//! Candidate filter
//!
//! A word is a candidate when it is non-empty, strictly shorter than the
//! target, and uses only letters that appear in the target.

use crate::core::Target;

/// Check whether `word` could be one half of a two-word anagram of `target`
///
/// Lengths are measured in characters. Case is significant.
///
/// # Examples
/// ```
/// use two_word_anagram::core::Target;
/// use two_word_anagram::dictionary::is_candidate;
///
/// let target = Target::new("cat").unwrap();
/// assert!(is_candidate("ct", &target));
/// assert!(!is_candidate("cat", &target)); // not shorter than the target
/// assert!(!is_candidate("cd", &target)); // 'd' is not in the target
/// assert!(!is_candidate("", &target));
/// ```
#[must_use]
pub fn is_candidate(word: &str, target: &Target) -> bool {
    let len = word.chars().count();
    len > 0 && len < target.len() && target.letters().admits(word)
}

/// Filter raw lines down to candidates
///
/// Each line is trimmed before testing. Order is preserved and repeated
/// entries are kept.
pub fn filter_candidates<I, S>(lines: I, target: &Target) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| {
            let word = line.as_ref().trim();
            is_candidate(word, target).then(|| word.to_string())
        })
        .collect()
}

/// Filter an in-memory word list, one word per line
///
/// # Examples
/// ```
/// use two_word_anagram::core::Target;
/// use two_word_anagram::dictionary::candidates_from_str;
///
/// let target = Target::new("dog").unwrap();
/// let candidates = candidates_from_str("do\ncat\n g \nbird\n", &target);
/// assert_eq!(candidates, vec!["do", "g"]);
/// ```
#[must_use]
pub fn candidates_from_str(contents: &str, target: &Target) -> Vec<String> {
    filter_candidates(contents.lines(), target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(text: &str) -> Target {
        Target::new(text).unwrap()
    }

    #[test]
    fn rejects_word_as_long_as_target() {
        // "enlist" is an anagram of "listen" but leaves no room for a second word
        assert!(!is_candidate("enlist", &target("listen")));
    }

    #[test]
    fn rejects_word_longer_than_target() {
        assert!(!is_candidate("doggy", &target("dog")));
    }

    #[test]
    fn rejects_foreign_letters() {
        assert!(!is_candidate("ca", &target("dog")));
        assert!(!is_candidate("d-", &target("dog")));
    }

    #[test]
    fn rejects_empty_word() {
        assert!(!is_candidate("", &target("dog")));
    }

    #[test]
    fn accepts_short_words_from_target_letters() {
        let t = target("cat");
        assert!(is_candidate("a", &t));
        assert!(is_candidate("ct", &t));
        // membership only; multiplicity is checked by the matcher
        assert!(is_candidate("tt", &t));
    }

    #[test]
    fn case_is_significant() {
        assert!(!is_candidate("D", &target("dog")));
        assert!(is_candidate("D", &target("Dog")));
    }

    #[test]
    fn single_letter_target_admits_nothing() {
        let t = target("a");
        assert!(!is_candidate("a", &t));
        assert!(filter_candidates(["a", "", "aa"], &t).is_empty());
    }

    #[test]
    fn filter_trims_and_preserves_order() {
        let t = target("cat");
        let candidates = filter_candidates(["  ct ", "dog", "a\t", "cat", "", "   "], &t);
        assert_eq!(candidates, vec!["ct", "a"]);
    }

    #[test]
    fn filter_keeps_duplicates() {
        let t = target("aabb");
        let candidates = filter_candidates(["ab", "ab", "ba"], &t);
        assert_eq!(candidates, vec!["ab", "ab", "ba"]);
    }

    #[test]
    fn filter_matches_predicate_for_every_word() {
        let t = target("documenting");
        let words = [
            "document", "men", "ting", "documenting", "cute", "zebra", "tin", "gum", "", "Doc",
        ];
        let candidates = filter_candidates(words, &t);
        for word in words {
            let expected = word.chars().count() < t.len()
                && !word.is_empty()
                && word.chars().all(|c| "documenting".contains(c));
            assert_eq!(
                candidates.iter().any(|c| c == word),
                expected,
                "unexpected verdict for '{word}'"
            );
        }
    }

    #[test]
    fn from_str_handles_crlf() {
        let t = target("dog");
        assert_eq!(candidates_from_str("do\r\ng\r\n", &t), vec!["do", "g"]);
    }
}
