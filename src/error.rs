//! Error handling for the resume screener

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScreenerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The document produced no usable text.
    #[error("Text extraction failed: {0}")]
    ExtractionFailed(String),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

impl ScreenerError {
    /// Errors that only affect the current document; a batch keeps going.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ScreenerError::ExtractionFailed(_)
                | ScreenerError::PdfExtraction(_)
                | ScreenerError::UnsupportedFormat(_)
                | ScreenerError::InvalidInput(_)
                | ScreenerError::Io(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ScreenerError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for ScreenerError {
    fn from(err: anyhow::Error) -> Self {
        ScreenerError::Configuration(format!("{:#}", err))
    }
}
