//! Error types for study-log

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for study-log
#[derive(Debug, Error)]
pub enum StudyLogError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Storage error with the file it concerns
    #[error("Storage error at {path}: {message}")]
    Storage { path: PathBuf, message: String },

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<StudyLogError>,
    },
}

impl StudyLogError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        StudyLogError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

/// Result type alias for study-log
pub type Result<T> = std::result::Result<T, StudyLogError>;
