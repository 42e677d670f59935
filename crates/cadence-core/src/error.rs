//! Error types for the campaign pipeline library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all pipeline operations.
#[derive(Error, Debug)]
pub enum CampaignError {
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Timezone identifier that does not resolve to an IANA zone
    #[error("Unknown timezone '{name}'")]
    Timezone {
        name: String,
        #[source]
        source: jiff::Error,
    },
    /// Date string that does not parse as a calendar date
    #[error("Invalid date '{value}'")]
    InvalidDate {
        value: String,
        #[source]
        source: jiff::Error,
    },
    /// Calendar arithmetic that left the representable date range
    #[error("Date arithmetic failed: {message}")]
    DateArithmetic {
        message: String,
        #[source]
        source: jiff::Error,
    },
    /// Asset provider failures (recovered with a placeholder at the call
    /// site; surfaced only by the provider itself)
    #[error("Asset provider error: {message}")]
    Asset { message: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// CSV encoding errors
    #[error("CSV error: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },
}

impl CampaignError {
    /// Creates an input validation error for a named field.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        CampaignError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a timezone resolution error.
    pub fn timezone(name: impl Into<String>, source: jiff::Error) -> Self {
        CampaignError::Timezone {
            name: name.into(),
            source,
        }
    }

    /// Creates a file system error with path context.
    pub fn file_system(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CampaignError::FileSystem {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, CampaignError>;
