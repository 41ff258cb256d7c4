//! Configuration system for LAVS.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod behavioral_config;
pub mod fusion_config;
pub mod lavs_config;
pub mod producer_config;

pub use behavioral_config::BehavioralConfig;
pub use fusion_config::FusionConfig;
pub use lavs_config::{CliOverrides, LavsConfig};
pub use producer_config::ProducerConfig;
