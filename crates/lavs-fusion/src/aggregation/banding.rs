//! Mapping a final risk onto a verdict band.

use lavs_core::config::FusionConfig;
use lavs_core::constants::{DEFAULT_REAL_MAX_RISK, DEFAULT_SUSPICIOUS_MAX_RISK};
use lavs_core::types::VerdictLabel;

/// Contiguous, gap-free risk bands:
/// `risk <= real_max` is Real, `risk <= suspicious_max` is Suspicious,
/// anything higher is Likely Fake.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerdictBands {
    pub real_max: f64,
    pub suspicious_max: f64,
}

impl VerdictBands {
    pub fn new(real_max: f64, suspicious_max: f64) -> Self {
        Self {
            real_max,
            suspicious_max,
        }
    }

    pub fn from_config(config: &FusionConfig) -> Self {
        Self::new(
            config.effective_real_max_risk(),
            config.effective_suspicious_max_risk(),
        )
    }

    /// Band for `risk`. Monotonic in `risk`.
    pub fn classify(&self, risk: f64) -> VerdictLabel {
        if risk <= self.real_max {
            VerdictLabel::Real
        } else if risk <= self.suspicious_max {
            VerdictLabel::Suspicious
        } else {
            VerdictLabel::LikelyFake
        }
    }
}

impl Default for VerdictBands {
    fn default() -> Self {
        Self::new(DEFAULT_REAL_MAX_RISK, DEFAULT_SUSPICIOUS_MAX_RISK)
    }
}
