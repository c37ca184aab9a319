use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubglossError {
    #[error("Invalid language option: {0}")]
    Validation(String),

    #[error("No input folder or no SRT files in folder: {0}")]
    Discovery(String),

    #[error("Cannot read subtitle file: {0}")]
    Format(String),

    #[error("Failed to move processed files: {0}")]
    Move(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Transliteration failed: {0}")]
    Transliteration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SubglossError>;

/// Failure of a single remote translation call.
///
/// Only the retry loop in [`crate::translate::TranslationClient`] ever sees
/// this; it is turned into a sentinel string before reaching the pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct TransientError(pub String);

impl TransientError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl From<reqwest::Error> for TransientError {
    fn from(e: reqwest::Error) -> Self {
        Self(format!("request failed: {}", e))
    }
}

impl From<serde_json::Error> for TransientError {
    fn from(e: serde_json::Error) -> Self {
        Self(format!("malformed response: {}", e))
    }
}
