//! Request validation errors raised before fusion starts.

use super::error_code::{self, LavsErrorCode};

/// Errors for requests the pipeline refuses to run.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("No input provided. Supply a file or a URL.")]
    NoInput,

    #[error("Unsupported content type: {content_type}")]
    UnsupportedContentType { content_type: String },

    #[error("Invalid evidence document {source_name}: {message}")]
    InvalidEvidence { source_name: String, message: String },

    #[error("Cannot read input {path}: {message}")]
    Unreadable { path: String, message: String },
}

impl LavsErrorCode for InputError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NoInput => error_code::NO_INPUT,
            Self::UnsupportedContentType { .. } => error_code::UNSUPPORTED_CONTENT_TYPE,
            Self::InvalidEvidence { .. } => error_code::INVALID_EVIDENCE,
            Self::Unreadable { .. } => error_code::UNREADABLE_INPUT,
        }
    }
}
