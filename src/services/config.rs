// Detection Configuration
// Thresholds and constants for sentence scoring and the document verdict

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionConfig {
    /// Sentences at or beyond this many characters get the full length feature.
    #[serde(default = "default_length_cap")]
    pub length_cap_chars: usize,
    #[serde(default = "default_ai_likely")]
    pub ai_likely_threshold: f64,
    #[serde(default = "default_possibly_ai")]
    pub possibly_ai_threshold: f64,
    /// Readability sub-feature used when the index cannot be computed.
    #[serde(default = "default_readability_fallback")]
    pub readability_fallback: f64,
    #[serde(default = "default_diversity_epsilon")]
    pub diversity_epsilon: f64,
    /// Share of sentences a label group must exceed to decide the verdict.
    #[serde(default = "default_majority_share")]
    pub majority_share: f64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            length_cap_chars: 200,
            ai_likely_threshold: 0.65,
            possibly_ai_threshold: 0.45,
            readability_fallback: 0.5,
            diversity_epsilon: 1e-5,
            majority_share: 0.5,
        }
    }
}

fn default_length_cap() -> usize { 200 }
fn default_ai_likely() -> f64 { 0.65 }
fn default_possibly_ai() -> f64 { 0.45 }
fn default_readability_fallback() -> f64 { 0.5 }
fn default_diversity_epsilon() -> f64 { 1e-5 }
fn default_majority_share() -> f64 { 0.5 }
