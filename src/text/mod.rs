//! Text metrics and readability scoring.
//!
//! [`analyze`] is a pure function from an input string to a [`TextStats`]
//! value: token counts, syllable counts and five readability indices. Empty
//! input yields the all-zero stats, so no formula ever divides by zero.

pub mod syllables;

use crate::constants::{DEFAULT_READING_WPM, DEFAULT_SPEAKING_WPM};
use serde::Serialize;

/// Derived statistics for a piece of text.
///
/// Recomputed from scratch on every call; there is no persisted identity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Default)]
pub struct TextStats {
    /// Letters and digits across all words (whitespace and punctuation excluded).
    pub characters: usize,
    /// Word count.
    pub words: usize,
    /// Sentence count (runs of `.`, `!`, `?` terminate a sentence).
    pub sentences: usize,
    /// Total syllables across all words (heuristic count).
    pub syllables: usize,
    /// Words with three or more syllables.
    pub complex_words: usize,
    /// Flesch-Kincaid grade level.
    pub flesch_kincaid_grade: f64,
    /// Gunning Fog index.
    pub gunning_fog_index: f64,
    /// Coleman-Liau index.
    pub coleman_liau_index: f64,
    /// SMOG grade (0 when the text has no complex words).
    pub smog_index: f64,
    /// Automated Readability Index.
    pub automated_readability_index: f64,
    /// Estimated silent-reading time in seconds.
    pub reading_time_secs: u64,
    /// Estimated speaking time in seconds.
    pub speaking_time_secs: u64,
}

/// Computes text statistics using the default reading and speaking rates.
#[must_use]
pub fn analyze(text: &str) -> TextStats {
    analyze_with_rates(text, DEFAULT_READING_WPM, DEFAULT_SPEAKING_WPM)
}

/// Computes text statistics with explicit words-per-minute rates.
#[must_use]
#[allow(clippy::cast_precision_loss)] // counts are far below 2^52
pub fn analyze_with_rates(text: &str, reading_wpm: u32, speaking_wpm: u32) -> TextStats {
    let cleaned = clean(text);
    let tokens = word_tokens(&cleaned);

    if tokens.is_empty() {
        return TextStats::default();
    }

    let words = tokens.len();
    let characters: usize = tokens.iter().map(|w| w.chars().count()).sum();
    let sentences = sentence_count(&cleaned).max(1);

    let mut syllables = 0;
    let mut complex_words = 0;
    for token in &tokens {
        let count = syllables::count(token);
        syllables += count;
        if count >= 3 {
            complex_words += 1;
        }
    }

    let w = words as f64;
    let s = sentences as f64;
    let syl = syllables as f64;
    let complex = complex_words as f64;
    let chars = characters as f64;

    // Letters per 100 words and sentences per 100 words for Coleman-Liau.
    let l = chars / w * 100.0;
    let sc = s / w * 100.0;

    let smog_index = if complex_words == 0 {
        0.0
    } else {
        1.043 * (complex * 30.0 / s).sqrt() + 3.1291
    };

    TextStats {
        characters,
        words,
        sentences,
        syllables,
        complex_words,
        flesch_kincaid_grade: 0.39 * (w / s) + 11.8 * (syl / w) - 15.59,
        gunning_fog_index: 0.4 * ((w / s) + 100.0 * (complex / w)),
        coleman_liau_index: 0.0588 * l - 0.296 * sc - 15.8,
        smog_index,
        automated_readability_index: 4.71 * (chars / w) + 0.5 * (w / s) - 21.43,
        reading_time_secs: time_secs(words, reading_wpm),
        speaking_time_secs: time_secs(words, speaking_wpm),
    }
}

/// Strips everything except letters, digits, whitespace and the sentence
/// terminators `.`, `!`, `?`.
fn clean(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || matches!(c, '.' | '!' | '?'))
        .collect()
}

/// Splits cleaned text into word tokens with sentence terminators trimmed.
fn word_tokens(cleaned: &str) -> Vec<&str> {
    cleaned
        .split_whitespace()
        .map(|w| w.trim_matches(|c| matches!(c, '.' | '!' | '?')))
        .filter(|w| !w.is_empty())
        .collect()
}

/// Counts sentences: segments between terminator runs that contain at least
/// one letter or digit.
fn sentence_count(cleaned: &str) -> usize {
    cleaned
        .split(['.', '!', '?'])
        .filter(|segment| segment.chars().any(char::is_alphanumeric))
        .count()
}

/// Rounds up to whole seconds at the given words-per-minute rate.
fn time_secs(words: usize, wpm: u32) -> u64 {
    if wpm == 0 {
        return 0;
    }
    let words = words as u64;
    let wpm = u64::from(wpm);
    (words * 60).div_ceil(wpm)
}
