//! Behavioral analyzer configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    BEHAVIORAL_BASE_SCORE, DEFAULT_BEHAVIORAL_PENALTY, DEFAULT_MIN_REGULARITY_MENTIONS, DEFAULT_VARIANCE_THRESHOLD,
};

/// Tuning knobs for the cross-layer behavioral check.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct BehavioralConfig {
    /// Score variance below which layers look too uniform. Default: 50.0.
    pub variance_threshold: Option<f64>,
    /// Points deducted per finding. Default: 10.
    pub penalty: Option<i64>,
    /// Homogeneity/entropy mentions that trigger a deduction. Default: 2.
    pub min_regularity_mentions: Option<usize>,
}

impl BehavioralConfig {
    /// Returns the effective variance threshold, defaulting to 50.0.
    pub fn effective_variance_threshold(&self) -> f64 {
        self.variance_threshold.unwrap_or(DEFAULT_VARIANCE_THRESHOLD)
    }

    /// Returns the effective per-finding penalty, defaulting to 10 and
    /// clamped to `0..=100`.
    pub fn effective_penalty(&self) -> i64 {
        self.penalty
            .unwrap_or(DEFAULT_BEHAVIORAL_PENALTY)
            .clamp(0, BEHAVIORAL_BASE_SCORE)
    }

    /// Returns the effective homogeneity/entropy mention minimum, defaulting to 2.
    pub fn effective_min_regularity_mentions(&self) -> usize {
        self.min_regularity_mentions
            .unwrap_or(DEFAULT_MIN_REGULARITY_MENTIONS)
    }
}
