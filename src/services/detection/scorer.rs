// Sentence Scorer
// Four bounded stylometric sub-features averaged into an AI-likeness score

use std::collections::HashSet;

use crate::models::{DependencyRole, FeatureScores, Token};
use crate::services::config::DetectionConfig;
use crate::services::readability::ReadabilityFn;
use crate::services::sentence_segmenter::LanguageModel;
use tracing::debug;

/// Longer sentences score higher, saturating at `cap_chars` characters.
pub fn length_feature(sentence: &str, cap_chars: usize) -> f64 {
    if cap_chars == 0 {
        return 1.0;
    }
    (sentence.chars().count() as f64 / cap_chars as f64).min(1.0)
}

/// Share of tokens tagged as coordinating conjunctions; 0 for an empty token list.
pub fn conjunction_feature(tokens: &[Token]) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }
    let cc = tokens
        .iter()
        .filter(|t| t.role == DependencyRole::CoordinatingConjunction)
        .count();
    cc as f64 / tokens.len() as f64
}

/// Lexical diversity of alphabetic tokens: distinct forms over occurrences.
pub fn lexical_diversity(tokens: &[Token], epsilon: f64) -> f64 {
    let words: Vec<&str> = tokens
        .iter()
        .filter(|t| t.is_alpha)
        .map(|t| t.text.as_str())
        .collect();
    let unique: HashSet<&str> = words.iter().copied().collect();
    unique.len() as f64 / (words.len() as f64 + epsilon)
}

/// Repetitive wording (low diversity) maps to a high sub-score.
pub fn diversity_feature(tokens: &[Token], epsilon: f64) -> f64 {
    1.0 - lexical_diversity(tokens, epsilon).min(1.0)
}

/// Harder-to-read sentences map to a high sub-score; falls back when the index fails.
pub fn readability_feature(sentence: &str, readability: ReadabilityFn, fallback: f64) -> f64 {
    match readability(sentence) {
        Ok(ease) => (1.0 - (ease / 100.0).min(1.0)).clamp(0.0, 1.0),
        Err(e) => {
            debug!(error = %e, "readability.fallback");
            fallback
        }
    }
}

/// Score one sentence. The result's [`FeatureScores::score`] is the AI-likeness score.
pub fn ai_likeness_score<M: LanguageModel + ?Sized>(
    sentence: &str,
    model: &M,
    readability: ReadabilityFn,
    config: &DetectionConfig,
) -> FeatureScores {
    let tokens = model.tokenize(sentence);
    FeatureScores {
        length: length_feature(sentence, config.length_cap_chars),
        conjunction: conjunction_feature(&tokens),
        diversity: diversity_feature(&tokens, config.diversity_epsilon),
        readability: readability_feature(sentence, readability, config.readability_fallback),
    }
}
