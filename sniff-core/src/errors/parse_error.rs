//! Parse errors.

use super::error_code::{self, SniffErrorCode};

/// Errors that can occur while turning source text into a syntax tree.
///
/// Malformed input is not an error: the supplier is error-recovering and
/// yields a partial tree instead. These variants cover the cases where no
/// tree can be produced at all.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Failed to read {path}: {message}")]
    ReadFailed { path: String, message: String },

    #[error("Grammar load failed for {language}: {message}")]
    GrammarLoadFailed { language: String, message: String },

    #[error("Parser produced no tree for {path}")]
    NoTree { path: String },
}

impl SniffErrorCode for ParseError {
    fn error_code(&self) -> &'static str {
        error_code::PARSE_ERROR
    }
}
