//! LavsErrorCode trait for surfacing structured error codes.

/// Every error enum implements this to provide a stable code string for
/// outer surfaces (CLI exit messages, JSON error bodies).
pub trait LavsErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted surface string: `[ERROR_CODE] message`.
    fn surface_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants.
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const NO_INPUT: &str = "NO_INPUT";
pub const UNSUPPORTED_CONTENT_TYPE: &str = "UNSUPPORTED_CONTENT_TYPE";
pub const INVALID_EVIDENCE: &str = "INVALID_EVIDENCE";
pub const UNREADABLE_INPUT: &str = "UNREADABLE_INPUT";
pub const PRODUCER_ERROR: &str = "PRODUCER_ERROR";
pub const PRODUCER_TIMEOUT: &str = "PRODUCER_TIMEOUT";
