//! Scan errors.

use super::error_code::{self, SniffErrorCode};

/// Errors that can occur during file discovery and ingestion.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// No file matched the discovery pattern. The whole run aborts; the
    /// caller must adjust the input.
    #[error("No file found. Please, check the glob pattern for this project: {pattern}")]
    NoFilesMatched { pattern: String },

    #[error("Invalid glob pattern {pattern}: {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Failed to read {path}: {message}")]
    ReadFailed { path: String, message: String },
}

impl SniffErrorCode for ScanError {
    fn error_code(&self) -> &'static str {
        error_code::SCAN_ERROR
    }
}
