//! Error handling for LAVS.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.
//!
//! The fusion core itself never fails; these errors belong to the edges
//! around it (configuration, request validation, evidence producers).

pub mod config_error;
pub mod error_code;
pub mod input_error;
pub mod producer_error;

pub use config_error::ConfigError;
pub use error_code::LavsErrorCode;
pub use input_error::InputError;
pub use producer_error::ProducerError;
