// Readability Index
// Flesch reading ease: 206.835 - 1.015 * (words/sentences) - 84.6 * (syllables/words)

use thiserror::Error;

use crate::services::text_processor::split_sentences;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReadabilityError {
    #[error("text has no countable words")]
    NoWords,
    #[error("readability index is not a finite number")]
    NonFinite,
}

/// Pluggable readability index over a single sentence.
pub type ReadabilityFn = fn(&str) -> Result<f64, ReadabilityError>;

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Estimate the syllable count of one word. Non-alphabetic characters are ignored;
/// a word with no letters has zero syllables.
pub fn count_syllables(word: &str) -> usize {
    let letters: Vec<char> = word
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphabetic())
        .collect();
    if letters.is_empty() {
        return 0;
    }

    let mut count = 0usize;
    let mut prev_vowel = false;
    for (idx, &c) in letters.iter().enumerate() {
        // Leading "y" is a consonant ("yes", "young").
        let vowel = is_vowel(c) && !(c == 'y' && idx == 0);
        if vowel && !prev_vowel {
            count += 1;
        }
        prev_vowel = vowel;
    }

    let n = letters.len();
    if n > 2 && letters[n - 1] == 'e' && !is_vowel(letters[n - 2]) {
        let syllabic_le = letters[n - 2] == 'l' && n > 3 && !is_vowel(letters[n - 3]);
        if !syllabic_le {
            count = count.saturating_sub(1);
        }
    }

    count.max(1)
}

/// Compute the Flesch reading-ease index of `text`.
pub fn flesch_reading_ease(text: &str) -> Result<f64, ReadabilityError> {
    let words: Vec<&str> = text
        .split_whitespace()
        .filter(|w| w.chars().any(char::is_alphanumeric))
        .collect();
    if words.is_empty() {
        return Err(ReadabilityError::NoWords);
    }

    let sentences = split_sentences(text).len().max(1);
    let syllables: usize = words.iter().map(|w| count_syllables(w).max(1)).sum();

    let words_per_sentence = words.len() as f64 / sentences as f64;
    let syllables_per_word = syllables as f64 / words.len() as f64;
    let score = 206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word;

    if score.is_finite() {
        Ok(score)
    } else {
        Err(ReadabilityError::NonFinite)
    }
}
