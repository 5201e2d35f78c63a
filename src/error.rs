// Error types
// Extraction and reporting failures surfaced to the caller

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::services::extractor::DocumentFormat;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Unsupported file type: {extension}")]
    UnsupportedFormat { extension: String },
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to extract text from {format} document: {message}")]
    Extraction {
        format: DocumentFormat,
        message: String,
    },
    #[error("Failed to write report: {0}")]
    Report(#[from] io::Error),
}

impl AnalysisError {
    pub(crate) fn extraction(format: DocumentFormat, err: impl std::fmt::Display) -> Self {
        Self::Extraction {
            format,
            message: err.to_string(),
        }
    }
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;
