//! WeightProvider trait: source of the per-content-type bucket weights.
//!
//! Standalone the built-in table is used. A configured provider layers
//! `[fusion.weights.*]` overrides on top of it.

use crate::config::FusionConfig;
use crate::types::{ComponentWeights, ContentType};

/// Provider of bucket weights for fusion.
pub trait WeightProvider: Send + Sync {
    /// Weights for `content_type` (`None` = unrecognized).
    /// Returns the built-in profile unless overridden.
    fn weights_for(&self, content_type: Option<ContentType>) -> ComponentWeights {
        ComponentWeights::for_content_type(content_type)
    }
}

/// Built-in weight table only.
pub struct StaticWeightProvider;

impl WeightProvider for StaticWeightProvider {}

/// Built-in table with config overrides.
///
/// Negative override weights clamp to 0.0; non-finite ones fall back to
/// the built-in weight for that bucket.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredWeightProvider {
    fusion: FusionConfig,
}

impl ConfiguredWeightProvider {
    pub fn new(fusion: FusionConfig) -> Self {
        Self { fusion }
    }
}

impl WeightProvider for ConfiguredWeightProvider {
    fn weights_for(&self, content_type: Option<ContentType>) -> ComponentWeights {
        let builtin = ComponentWeights::for_content_type(content_type);
        match self.fusion.weight_override(content_type) {
            Some(weights) => weights.sanitized(&builtin),
            None => builtin,
        }
    }
}
