//! The final authenticity verdict.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::layer::LayerResult;
use super::weights::Bucket;

/// Discrete verdict label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerdictLabel {
    Real,
    Suspicious,
    #[serde(rename = "Likely Fake")]
    LikelyFake,
}

impl VerdictLabel {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Real => "Real",
            Self::Suspicious => "Suspicious",
            Self::LikelyFake => "Likely Fake",
        }
    }

    /// Risk level that moves in lock-step with this label.
    pub fn risk_level(&self) -> RiskLevel {
        match self {
            Self::Real => RiskLevel::Low,
            Self::Suspicious => RiskLevel::Medium,
            Self::LikelyFake => RiskLevel::High,
        }
    }
}

impl fmt::Display for VerdictLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Coarse risk level paired with a [`VerdictLabel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Bucket-level mean risks actually used by fusion.
/// `None` means the bucket had no evidence and the neutral prior stood in.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ComponentScores {
    pub metadata_risk: Option<f64>,
    pub ai_risk: Option<f64>,
    pub behavioral_risk: Option<f64>,
}

impl ComponentScores {
    pub fn get(&self, bucket: Bucket) -> Option<f64> {
        match bucket {
            Bucket::Metadata => self.metadata_risk,
            Bucket::Ai => self.ai_risk,
            Bucket::Behavioral => self.behavioral_risk,
        }
    }

    pub fn set(&mut self, bucket: Bucket, risk: Option<f64>) {
        match bucket {
            Bucket::Metadata => self.metadata_risk = risk,
            Bucket::Ai => self.ai_risk = risk,
            Bucket::Behavioral => self.behavioral_risk = risk,
        }
    }

    /// Buckets that had no evidence.
    pub fn missing(&self) -> Vec<Bucket> {
        Bucket::ALL
            .into_iter()
            .filter(|b| self.get(*b).is_none())
            .collect()
    }
}

/// The engine's sole output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// Final risk in [0, 100], rounded to 2 decimals. Higher = more suspicious.
    pub final_score: f64,
    pub verdict: VerdictLabel,
    pub risk_level: RiskLevel,
    /// Every input layer, verbatim and in input order.
    pub layer_breakdown: Vec<LayerResult>,
    pub component_scores: ComponentScores,
    /// At most three `"{layer}: {first detail}"` strings, highest risk first.
    pub top_signals: Vec<String>,
}
