//! Aggregation engine configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_MAX_TOP_SIGNALS, DEFAULT_NEUTRAL_PRIOR, DEFAULT_REAL_MAX_RISK,
    DEFAULT_SUSPICIOUS_MAX_RISK,
};
use crate::types::{ComponentWeights, ContentType};

/// Profile key used for unrecognized content (and for images and videos
/// unless they carry their own override).
pub const DEFAULT_PROFILE: &str = "default";

/// Configuration for evidence fusion.
///
/// ```toml
/// [fusion]
/// neutral_prior = 50.0
///
/// [fusion.weights.url]
/// metadata = 0.3
/// ai = 0.5
/// behavioral = 0.2
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct FusionConfig {
    /// Weight profile overrides keyed by `default`, `image`, `video`, `audio` or `url`.
    pub weights: BTreeMap<String, ComponentWeights>,
    /// Risk substituted for a bucket without evidence. Default: 50.0.
    pub neutral_prior: Option<f64>,
    /// Highest final risk banded `Real`. Default: 30.0.
    pub real_max_risk: Option<f64>,
    /// Highest final risk banded `Suspicious`. Default: 60.0.
    pub suspicious_max_risk: Option<f64>,
    /// Maximum number of top signals. Default: 3.
    pub max_top_signals: Option<usize>,
}

impl FusionConfig {
    /// Returns the effective neutral prior, defaulting to 50.0.
    pub fn effective_neutral_prior(&self) -> f64 {
        self.neutral_prior.unwrap_or(DEFAULT_NEUTRAL_PRIOR)
    }

    /// Returns the effective `Real` band ceiling, defaulting to 30.0.
    pub fn effective_real_max_risk(&self) -> f64 {
        self.real_max_risk.unwrap_or(DEFAULT_REAL_MAX_RISK)
    }

    /// Returns the effective `Suspicious` band ceiling, defaulting to 60.0.
    pub fn effective_suspicious_max_risk(&self) -> f64 {
        self.suspicious_max_risk
            .unwrap_or(DEFAULT_SUSPICIOUS_MAX_RISK)
    }

    /// Returns the effective top-signal cap, defaulting to 3.
    pub fn effective_max_top_signals(&self) -> usize {
        self.max_top_signals.unwrap_or(DEFAULT_MAX_TOP_SIGNALS)
    }

    /// Weight override for `content_type`, if one is configured.
    ///
    /// Images, videos and unrecognized content share the `default` profile
    /// unless they have their own key.
    pub fn weight_override(&self, content_type: Option<ContentType>) -> Option<ComponentWeights> {
        if let Some(ct) = content_type {
            if let Some(w) = self.weights.get(ct.name()) {
                return Some(*w);
            }
        }
        match content_type {
            None | Some(ContentType::Image) | Some(ContentType::Video) => {
                self.weights.get(DEFAULT_PROFILE).copied()
            }
            Some(ContentType::Audio) | Some(ContentType::Url) => None,
        }
    }
}
