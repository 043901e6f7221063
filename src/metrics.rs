//! Readability and sentiment metrics over article body text.
//!
//! Tokens are whitespace-separated and keep their punctuation. Sentences are
//! approximated by splitting on `.`, `!` and `?`. Stop words are removed before
//! every count except the personal pronoun scan, which runs on the raw text.

use crate::error::{AnalyzerError, Result};
use crate::lexicon::Lexicons;
use crate::models::MetricsRecord;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::collections::HashSet;
use tracing::{debug, instrument};

static PERSONAL_PRONOUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(I|we|my|ours|us)\b").expect("valid pronoun regex"));

const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];
const VOWELS: &str = "aeiou";

/// How tokens are compared against the stop-word and sentiment lexicons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum MatchMode {
    /// Lowercase the token and look it up as-is, punctuation included.
    #[default]
    Exact,
    /// Lowercase the token and strip leading/trailing ASCII punctuation first.
    TrimPunctuation,
}

impl MatchMode {
    fn key(self, token: &str) -> String {
        let lowered = token.to_lowercase();
        match self {
            MatchMode::Exact => lowered,
            MatchMode::TrimPunctuation => lowered
                .trim_matches(|c: char| c.is_ascii_punctuation())
                .to_string(),
        }
    }
}

/// Count syllables in `word` by counting vowel groups.
///
/// A leading vowel starts a group, as does every later vowel that follows a
/// non-vowel. A trailing `e` removes one group, and the result is never below 1.
///
/// # Errors
///
/// [`AnalyzerError::EmptyWord`] if `word` is empty.
pub fn count_syllables(word: &str) -> Result<usize> {
    if word.is_empty() {
        return Err(AnalyzerError::EmptyWord);
    }
    Ok(vowel_group_syllables(word))
}

/// Syllable count of a token known to be non-empty.
fn vowel_group_syllables(token: &str) -> usize {
    let token = token.to_lowercase();
    let mut count = 0usize;
    let mut prev_vowel = false;
    for c in token.chars() {
        let vowel = VOWELS.contains(c);
        if vowel && !prev_vowel {
            count += 1;
        }
        prev_vowel = vowel;
    }

    if token.ends_with('e') {
        count = count.saturating_sub(1);
    }
    count.max(1)
}

/// Count case-insensitive whole-word occurrences of `I`, `we`, `my`, `ours`, `us`.
pub fn count_personal_pronouns(text: &str) -> usize {
    PERSONAL_PRONOUNS.find_iter(text).count()
}

/// Compute the metrics record for `text` using exact lexicon matching.
pub fn analyze_sentiment(
    text: &str,
    stop_words: &HashSet<String>,
    positive_words: &HashSet<String>,
    negative_words: &HashSet<String>,
) -> MetricsRecord {
    analyze_with_mode(text, stop_words, positive_words, negative_words, MatchMode::Exact)
}

/// Compute the metrics record for `text` against a loaded [`Lexicons`].
#[instrument(level = "debug", skip_all, fields(bytes = text.len(), ?mode))]
pub fn analyze(text: &str, lexicons: &Lexicons, mode: MatchMode) -> MetricsRecord {
    let Lexicons {
        stop_words,
        positive_words,
        negative_words,
    } = lexicons;
    match mode {
        MatchMode::Exact => analyze_sentiment(text, stop_words, positive_words, negative_words),
        MatchMode::TrimPunctuation => {
            analyze_with_mode(text, stop_words, positive_words, negative_words, mode)
        }
    }
}

fn analyze_with_mode(
    text: &str,
    stop_words: &HashSet<String>,
    positive_words: &HashSet<String>,
    negative_words: &HashSet<String>,
    mode: MatchMode,
) -> MetricsRecord {
    let words: Vec<(&str, String)> = text
        .split_whitespace()
        .map(|w| (w, mode.key(w)))
        .filter(|(_, key)| !stop_words.contains(key))
        .collect();

    let word_count = words.len();
    let sentence_count = text.split(SENTENCE_TERMINATORS).count().max(1);
    let avg_sentence_length = ratio(word_count, sentence_count);

    // split_whitespace never yields an empty token
    let syllables: Vec<usize> = words
        .iter()
        .map(|(w, _)| vowel_group_syllables(w))
        .collect();

    let complex_word_count = syllables.iter().filter(|&&s| s > 2).count();
    let percentage_complex_words = ratio(complex_word_count, word_count) * 100.0;
    let fog_index = 0.4 * (avg_sentence_length + percentage_complex_words);

    let total_chars: usize = words.iter().map(|(w, _)| w.chars().count()).sum();
    let avg_word_length = ratio(total_chars, word_count);
    let syllables_per_word = ratio(syllables.iter().sum(), word_count);

    let positive_score = words
        .iter()
        .filter(|(_, key)| positive_words.contains(key))
        .count();
    let negative_score = words
        .iter()
        .filter(|(_, key)| negative_words.contains(key))
        .count();

    let polarity_score = (positive_score as f64 - negative_score as f64)
        / (positive_score + negative_score + 1) as f64;
    let subjectivity_score = (positive_score + negative_score) as f64 / (word_count + 1) as f64;

    let personal_pronouns = count_personal_pronouns(text);

    debug!(
        word_count,
        sentence_count, complex_word_count, positive_score, negative_score, "Computed metrics"
    );

    MetricsRecord {
        positive_score,
        negative_score,
        polarity_score,
        subjectivity_score,
        avg_sentence_length,
        percentage_complex_words,
        fog_index,
        avg_words_per_sentence: avg_sentence_length,
        complex_word_count,
        word_count,
        syllables_per_word,
        personal_pronouns,
        avg_word_length,
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_count_syllables() {
        assert_eq!(count_syllables("the").unwrap(), 1);
        assert_eq!(count_syllables("beautiful").unwrap(), 3);
        assert_eq!(count_syllables("Beautiful").unwrap(), 3);
        // a + e groups, then the trailing e is dropped
        assert_eq!(count_syllables("apple").unwrap(), 1);
        assert_eq!(count_syllables("banana").unwrap(), 3);
        assert_eq!(count_syllables("rhythm").unwrap(), 1);
        assert_eq!(count_syllables("e").unwrap(), 1);
        assert_eq!(count_syllables("organization").unwrap(), 5);
    }

    #[test]
    fn test_count_syllables_punctuation_is_not_a_vowel() {
        assert_eq!(count_syllables("idea.").unwrap(), 2);
        assert_eq!(count_syllables("\"area\"").unwrap(), 2);
    }

    #[test]
    fn test_engine_syllables_agree_with_count_syllables() {
        for token in ["Organizations", "analyze", "idea.", "rhythm", "e", "queue"] {
            assert_eq!(vowel_group_syllables(token), count_syllables(token).unwrap(), "{token}");
        }
    }

    #[test]
    fn test_count_syllables_rejects_empty_word() {
        assert!(matches!(count_syllables(""), Err(AnalyzerError::EmptyWord)));
    }

    #[test]
    fn test_personal_pronouns_whole_words_only() {
        assert_eq!(count_personal_pronouns("I think we should, my friend."), 3);
        assert_eq!(count_personal_pronouns("US policy and ours; us."), 3);
        assert_eq!(count_personal_pronouns("Weather is mine, using myths"), 0);
    }

    #[test]
    fn test_love_hate_example() {
        let record = analyze_sentiment(
            "I love this. We hate that!",
            &set(&[]),
            &set(&["love"]),
            &set(&["hate"]),
        );
        assert_eq!(record.positive_score, 1);
        assert_eq!(record.negative_score, 1);
        assert_eq!(record.personal_pronouns, 2);
        assert_eq!(record.polarity_score, 0.0);
        assert_eq!(record.word_count, 6);
        // "I love this", " We hate that", ""
        assert!(approx(record.avg_sentence_length, 2.0));
        assert!(approx(record.subjectivity_score, 2.0 / 7.0));
    }

    #[test]
    fn test_empty_after_stop_words_is_all_zero_ratios() {
        let record = analyze_sentiment("The the THE", &set(&["the"]), &set(&[]), &set(&[]));
        assert_eq!(record.word_count, 0);
        assert_eq!(record.avg_word_length, 0.0);
        assert_eq!(record.syllables_per_word, 0.0);
        assert_eq!(record.percentage_complex_words, 0.0);
        assert_eq!(record.avg_sentence_length, 0.0);
        assert_eq!(record.fog_index, 0.0);
        assert_eq!(record.subjectivity_score, 0.0);
        assert_eq!(record.polarity_score, 0.0);
    }

    #[test]
    fn test_empty_text() {
        let record = analyze_sentiment("", &set(&[]), &set(&[]), &set(&[]));
        assert_eq!(record.word_count, 0);
        assert_eq!(record.personal_pronouns, 0);
        assert!(record.fog_index.is_finite());
    }

    #[test]
    fn test_readability_fields() {
        // tokens: Organizations, analyze, beautiful, data. / sentences: 2 pieces
        let record = analyze_sentiment(
            "Organizations analyze beautiful data.",
            &set(&[]),
            &set(&[]),
            &set(&[]),
        );
        assert_eq!(record.word_count, 4);
        assert!(approx(record.avg_sentence_length, 2.0));
        assert_eq!(record.avg_words_per_sentence, record.avg_sentence_length);
        // organizations=5, analyze=2, beautiful=3, data.=2
        assert_eq!(record.complex_word_count, 2);
        assert!(approx(record.percentage_complex_words, 50.0));
        assert!(approx(record.fog_index, 0.4 * 52.0));
        assert!(approx(record.syllables_per_word, 12.0 / 4.0));
        assert!(approx(record.avg_word_length, (13 + 7 + 9 + 5) as f64 / 4.0));
    }

    #[test]
    fn test_stop_words_match_lowercased_tokens() {
        let record = analyze_sentiment(
            "The Market AND the economy",
            &set(&["the", "and"]),
            &set(&[]),
            &set(&[]),
        );
        assert_eq!(record.word_count, 2);
    }

    #[test]
    fn test_pronouns_counted_before_stop_word_removal() {
        let record = analyze_sentiment("We and I agree", &set(&["we", "i"]), &set(&[]), &set(&[]));
        assert_eq!(record.word_count, 2);
        assert_eq!(record.personal_pronouns, 2);
    }

    #[test]
    fn test_exact_mode_keeps_punctuation_in_lookups() {
        let record = analyze_sentiment(
            "The good news is good. The bad news is bad too.",
            &set(&["the"]),
            &set(&["good"]),
            &set(&["bad"]),
        );
        assert_eq!(record.positive_score, 1);
        assert_eq!(record.negative_score, 2);
    }

    #[test]
    fn test_trim_punctuation_mode() {
        let lexicons = Lexicons {
            stop_words: set(&["the"]),
            positive_words: set(&["good"]),
            negative_words: set(&["bad"]),
        };
        let record = analyze(
            "The good news is good. The bad news is bad too.",
            &lexicons,
            MatchMode::TrimPunctuation,
        );
        assert_eq!(record.positive_score, 2);
        assert_eq!(record.negative_score, 2);
        assert_eq!(record.word_count, 9);
        // lengths still include the punctuation
        assert!(approx(
            record.avg_word_length,
            (4 + 4 + 2 + 5 + 3 + 4 + 2 + 3 + 4) as f64 / 9.0
        ));
    }

    #[test]
    fn test_scores_stay_in_range() {
        let positive = set(&["up", "gain"]);
        let negative = set(&["down", "loss"]);
        let texts = [
            "up up up gain gain",
            "down loss down loss",
            "up down",
            "nothing here at all",
            "gain",
        ];
        for text in texts {
            let r = analyze_sentiment(text, &set(&[]), &positive, &negative);
            assert!((-1.0..=1.0).contains(&r.polarity_score), "{text}");
            assert!((0.0..=1.0).contains(&r.subjectivity_score), "{text}");
        }
    }
}
