// Detection Module
// AI-likeness scoring core organized into specialized submodules:
// - scorer: per-sentence sub-features and score
// - classifier: score -> label and label counts -> verdict
// - aggregation: runs the pipeline over a document (Detector)
// - report: human-readable rendering of a Report

pub mod scorer;
pub mod classifier;
pub mod aggregation;
pub mod report;

pub use scorer::{
    ai_likeness_score,
    conjunction_feature,
    diversity_feature,
    length_feature,
    lexical_diversity,
    readability_feature,
};
pub use classifier::{classify_score, derive_verdict};
pub use aggregation::Detector;
pub use report::write_report;
