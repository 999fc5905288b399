//! Detection errors.

use super::error_code::{self, SniffErrorCode};

/// Errors that can occur while assembling or running the rule catalog.
#[derive(Debug, thiserror::Error)]
pub enum DetectionError {
    /// Two registry entries claim the same package identifier. Fatal at
    /// registry construction, before any file is analyzed.
    #[error("Duplicate rule identifier: {id}")]
    DuplicateRule { id: String },

    /// A rule named in the configuration does not exist in the catalog.
    #[error("Unknown rule identifier: {id}")]
    UnknownRule { id: String },

    #[error("Rule {id} panicked: {message}")]
    RulePanic { id: String, message: String },
}

impl SniffErrorCode for DetectionError {
    fn error_code(&self) -> &'static str {
        error_code::DETECTION_ERROR
    }
}
