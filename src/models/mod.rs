// aichecker Data Models
// Labels, verdicts, tokens and the per-document report

use serde::{Deserialize, Serialize};
use std::fmt;

// ============ Tokens ============

/// Coarse dependency role attached to each token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DependencyRole {
    CoordinatingConjunction,
    Punctuation,
    Other,
}

impl DependencyRole {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::CoordinatingConjunction => "cc",
            Self::Punctuation => "punct",
            Self::Other => "dep",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    /// Lowercased surface form.
    pub text: String,
    pub is_alpha: bool,
    pub role: DependencyRole,
}

/// A trimmed sentence with byte offsets into the analyzed document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceSpan {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

// ============ Labels & Verdicts ============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    #[serde(rename = "AI-likely")]
    AiLikely,
    #[serde(rename = "Possibly-AI")]
    PossiblyAi,
    #[serde(rename = "Human-like")]
    HumanLike,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AiLikely => "AI-likely",
            Self::PossiblyAi => "Possibly-AI",
            Self::HumanLike => "Human-like",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::AiLikely => "⚠️",
            Self::PossiblyAi => "🟡",
            Self::HumanLike => "✅",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "AI-generated")]
    AiGenerated,
    #[serde(rename = "AI-assisted")]
    AiAssisted,
    #[serde(rename = "Human-written")]
    HumanWritten,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AiGenerated => "AI-generated",
            Self::AiAssisted => "AI-assisted",
            Self::HumanWritten => "Human-written",
        }
    }

    pub fn sentence(&self) -> &'static str {
        match self {
            Self::AiGenerated => "This text is likely AI-generated.",
            Self::AiAssisted => "This text is possibly AI-assisted.",
            Self::HumanWritten => "This text is likely written by a human.",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============ Scores ============

/// The four sub-features behind one sentence score, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FeatureScores {
    pub length: f64,
    pub conjunction: f64,
    pub diversity: f64,
    pub readability: f64,
}

impl FeatureScores {
    /// Unweighted mean of the sub-features.
    pub fn score(&self) -> f64 {
        (self.length + self.conjunction + self.diversity + self.readability) / 4.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentenceResult {
    pub text: String,
    pub score: f64,
    pub label: Label,
    pub features: FeatureScores,
}

impl SentenceResult {
    /// Score as a whole percentage, as shown on each report line.
    pub fn percent(&self) -> i64 {
        (self.score * 100.0).round_ties_even() as i64
    }
}

// ============ Report ============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LabelCounts {
    pub ai_likely: usize,
    pub possibly_ai: usize,
    pub human_like: usize,
}

impl LabelCounts {
    pub fn record(&mut self, label: Label) {
        match label {
            Label::AiLikely => self.ai_likely += 1,
            Label::PossiblyAi => self.possibly_ai += 1,
            Label::HumanLike => self.human_like += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.ai_likely + self.possibly_ai + self.human_like
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub sentences: Vec<SentenceResult>,
    pub total_sentences: usize,
    pub counts: LabelCounts,
    pub mean_score: f64,
    /// Mean score scaled to 0-100, rounded to two decimals.
    pub ai_percent: f64,
    pub verdict: Verdict,
}
