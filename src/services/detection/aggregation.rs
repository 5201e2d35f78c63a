// Aggregation Logic
// Runs scorer and classifier over every sentence and builds the document report

use std::io::Write;

use crate::models::{LabelCounts, Report, SentenceResult};
use crate::services::config::DetectionConfig;
use crate::services::readability::{flesch_reading_ease, ReadabilityFn};
use crate::services::sentence_segmenter::LanguageModel;
use crate::services::text_processor::normalize_text;
use tracing::info;

use super::classifier::{classify_score, derive_verdict};
use super::report::write_report;
use super::scorer::ai_likeness_score;

/// Document analyzer. Holds the language model it was given for its whole lifetime.
pub struct Detector<M: LanguageModel> {
    model: M,
    readability: ReadabilityFn,
    config: DetectionConfig,
}

impl<M: LanguageModel> Detector<M> {
    pub fn new(model: M) -> Self {
        Self::with_config(model, DetectionConfig::default())
    }

    pub fn with_config(model: M, config: DetectionConfig) -> Self {
        Self {
            model,
            readability: flesch_reading_ease,
            config,
        }
    }

    /// Replace the readability index (Flesch reading-ease by default).
    pub fn with_readability(mut self, readability: ReadabilityFn) -> Self {
        self.readability = readability;
        self
    }

    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Score a single sentence.
    pub fn score_sentence(&self, sentence: &str) -> SentenceResult {
        let features = ai_likeness_score(sentence, &self.model, self.readability, &self.config);
        let score = features.score();
        SentenceResult {
            text: sentence.to_string(),
            score,
            label: classify_score(score, &self.config),
            features,
        }
    }

    /// Analyze a document without producing output.
    pub fn analyze(&self, text: &str) -> Report {
        let normalized = normalize_text(text);
        let sentences: Vec<SentenceResult> = self
            .model
            .sentences(&normalized)
            .iter()
            .map(|span| span.text.trim())
            .filter(|s| !s.is_empty())
            .map(|s| self.score_sentence(s))
            .collect();

        let mut counts = LabelCounts::default();
        for result in &sentences {
            counts.record(result.label);
        }

        let total_sentences = sentences.len();
        let mean_score = if total_sentences == 0 {
            0.0
        } else {
            sentences.iter().map(|s| s.score).sum::<f64>() / total_sentences as f64
        };
        let verdict = derive_verdict(&counts, &self.config);

        info!(
            sentences = total_sentences,
            ai_likely = counts.ai_likely,
            possibly_ai = counts.possibly_ai,
            human_like = counts.human_like,
            mean_score,
            verdict = %verdict,
            "analyze.done"
        );

        Report {
            sentences,
            total_sentences,
            counts,
            mean_score,
            ai_percent: round2(mean_score * 100.0),
            verdict,
        }
    }

    /// Analyze a document and write the human-readable report to `out`.
    pub fn analyze_text<W: Write>(&self, text: &str, out: &mut W) -> std::io::Result<Report> {
        let report = self.analyze(text);
        write_report(&report, out)?;
        Ok(report)
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round_ties_even() / 100.0
}
