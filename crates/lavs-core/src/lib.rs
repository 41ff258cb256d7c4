//! lavs-core: shared foundation for the Layered Authenticity Verification System.
//!
//! - Types: layer results, content types, bucket weights, verdicts
//! - Traits: evidence producers and weight providers
//! - Errors: one `thiserror` enum per subsystem
//! - Config: TOML-based, CLI > env > project > user > defaults
//! - Tracing: `LAVS_LOG` filtered structured logging

pub mod config;
pub mod constants;
pub mod errors;
pub mod traits;
pub mod tracing;
pub mod types;

pub use config::LavsConfig;
pub use errors::{ConfigError, InputError, LavsErrorCode, ProducerError};
pub use types::{
    Bucket, Classification, ComponentScores, ComponentWeights, ContentType, LayerLabel,
    LayerResult, RiskLevel, Verdict, VerdictLabel,
};
