//! Evidence producer configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PRODUCER_FAILURE_PENALTY;

/// Configuration for running evidence producers.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ProducerConfig {
    /// Points deducted from a layer whose producer failed. Default: 10.0.
    pub failure_penalty: Option<f64>,
    /// Run independent producers in parallel. Default: true.
    pub parallel: Option<bool>,
}

impl ProducerConfig {
    /// Returns the effective failure penalty, defaulting to 10.0.
    pub fn effective_failure_penalty(&self) -> f64 {
        self.failure_penalty
            .unwrap_or(DEFAULT_PRODUCER_FAILURE_PENALTY)
    }

    /// Returns whether producers run in parallel, defaulting to true.
    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(true)
    }
}
