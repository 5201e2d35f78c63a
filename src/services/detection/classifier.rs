// Classification
// Fixed thresholds map sentence scores to labels and label shares to a verdict

use crate::models::{Label, LabelCounts, Verdict};
use crate::services::config::DetectionConfig;

/// Map a sentence score to a label. Thresholds are exclusive, so a score sitting
/// exactly on a threshold takes the lower-severity label. NaN falls through to
/// `Human-like`.
pub fn classify_score(score: f64, config: &DetectionConfig) -> Label {
    if score > config.ai_likely_threshold {
        Label::AiLikely
    } else if score > config.possibly_ai_threshold {
        Label::PossiblyAi
    } else {
        Label::HumanLike
    }
}

/// Document verdict from per-label counts. An empty document is `Human-written`.
pub fn derive_verdict(counts: &LabelCounts, config: &DetectionConfig) -> Verdict {
    let total = counts.total();
    if total == 0 {
        return Verdict::HumanWritten;
    }

    let total = total as f64;
    let ai_share = counts.ai_likely as f64 / total;
    let flagged_share = (counts.ai_likely + counts.possibly_ai) as f64 / total;

    if ai_share > config.majority_share {
        Verdict::AiGenerated
    } else if flagged_share > config.majority_share {
        Verdict::AiAssisted
    } else {
        Verdict::HumanWritten
    }
}
