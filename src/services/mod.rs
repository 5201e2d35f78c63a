// aichecker Core Services

pub mod config;
pub mod detection;
pub mod extractor;
pub mod readability;
pub mod sentence_segmenter;
pub mod text_processor;

pub use config::DetectionConfig;
pub use extractor::{extract_text, DocumentFormat};
pub use readability::{flesch_reading_ease, ReadabilityError, ReadabilityFn};
pub use sentence_segmenter::{LanguageModel, RuleBasedModel};

pub use detection::{
    ai_likeness_score,
    classify_score,
    derive_verdict,
    write_report,
    Detector,
};
