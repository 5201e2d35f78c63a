// Sentence/Token Provider
// Narrow language-model interface used by the scorer and aggregator

use crate::models::{SentenceSpan, Token};
use crate::services::text_processor::{split_sentences, tokenize};

/// Segments documents into sentences and sentences into tagged tokens.
///
/// Detection code only depends on this trait, so a heavier NLP backend can be
/// swapped in without touching the scoring logic.
pub trait LanguageModel {
    /// Ordered, trimmed, non-empty sentences of `text`.
    fn sentences(&self, text: &str) -> Vec<SentenceSpan>;

    /// Ordered tokens of one sentence.
    fn tokenize(&self, sentence: &str) -> Vec<Token>;
}

/// Rule-based English model: punctuation-driven segmentation and a regex tokenizer
/// with a coordinating-conjunction lexicon.
#[derive(Debug, Default, Clone, Copy)]
pub struct RuleBasedModel;

impl RuleBasedModel {
    pub fn new() -> Self {
        Self
    }
}

impl LanguageModel for RuleBasedModel {
    fn sentences(&self, text: &str) -> Vec<SentenceSpan> {
        split_sentences(text)
    }

    fn tokenize(&self, sentence: &str) -> Vec<Token> {
        tokenize(sentence)
    }
}

impl<M: LanguageModel + ?Sized> LanguageModel for &M {
    fn sentences(&self, text: &str) -> Vec<SentenceSpan> {
        (**self).sentences(text)
    }

    fn tokenize(&self, sentence: &str) -> Vec<Token> {
        (**self).tokenize(sentence)
    }
}
