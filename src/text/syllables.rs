//! Heuristic syllable counting.
//!
//! This is the classic suffix-stripping approximation, not a dictionary
//! lookup. The readability formulas downstream are calibrated against this
//! exact heuristic, so it must not be "improved": strip a trailing "es" or
//! "e" preceded by a consonant (other than "l"), strip a trailing "ed",
//! strip a leading "y", then count vowel groups of one or two letters.

use regex::Regex;
use std::sync::OnceLock;

fn suffix_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?:[^laeiouy]es|ed|[^laeiouy]e)$").expect("valid regex"))
}

fn vowel_groups() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[aeiouy]{1,2}").expect("valid regex"))
}

/// Counts syllables in a single word using the suffix-stripping heuristic.
///
/// Words of three characters or fewer always count as one syllable. Empty
/// input counts as zero.
#[must_use]
pub fn count(word: &str) -> usize {
    if word.is_empty() {
        return 0;
    }

    let word = word.to_lowercase();
    if word.chars().count() <= 3 {
        return 1;
    }

    let stripped = suffix_pattern().replace(&word, "");
    let stripped = stripped.strip_prefix('y').unwrap_or(&stripped);

    vowel_groups().find_iter(stripped).count().max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_words_are_one_syllable() {
        assert_eq!(count("a"), 1);
        assert_eq!(count("the"), 1);
        assert_eq!(count("cat"), 1);
        assert_eq!(count("sky"), 1);
    }

    #[test]
    fn test_empty_word() {
        assert_eq!(count(""), 0);
    }

    #[test]
    fn test_short_word_rule_counts_characters_not_bytes() {
        // Three characters, five bytes.
        assert_eq!(count("\u{e9}t\u{e9}"), 1);
    }

    #[test]
    fn test_common_words() {
        assert_eq!(count("hello"), 2);
        assert_eq!(count("syllable"), 3);
        assert_eq!(count("understanding"), 4);
        assert_eq!(count("window"), 2);
    }

    #[test]
    fn test_silent_e_suffixes() {
        // Trailing "e" after a consonant is stripped before counting.
        assert_eq!(count("make"), 1);
        assert_eq!(count("created"), 1); // heuristic, not dictionary-exact
        assert_eq!(count("horses"), 1); // heuristic strips the whole "ses"
    }

    #[test]
    fn test_leading_y_is_not_a_vowel() {
        assert_eq!(count("yellow"), 2);
        assert_eq!(count("yesterday"), 3);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(count("HELLO"), count("hello"));
        assert_eq!(count("Syllable"), count("syllable"));
    }
}
