//! Evidence producer errors.
//!
//! These never reach the fusion core: the producer runner converts each
//! one into a degraded layer result.

use super::error_code::{self, LavsErrorCode};

/// Errors an evidence producer can hit while running its check.
#[derive(Debug, thiserror::Error)]
pub enum ProducerError {
    #[error("I/O error reading {path}: {message}")]
    Io { path: String, message: String },

    #[error("failed to decode {what}: {message}")]
    Decode { what: String, message: String },

    #[error("resource unreachable: {resource}: {message}")]
    Unreachable { resource: String, message: String },

    #[error("timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("{0}")]
    Other(String),
}

impl LavsErrorCode for ProducerError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Timeout { .. } => error_code::PRODUCER_TIMEOUT,
            _ => error_code::PRODUCER_ERROR,
        }
    }
}
