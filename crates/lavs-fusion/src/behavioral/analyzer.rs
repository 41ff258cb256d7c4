//! The behavioral analyzer itself.

use lavs_core::config::BehavioralConfig;
use lavs_core::constants::{BEHAVIORAL_BASE_SCORE, NO_BEHAVIORAL_DEVIATION};
use lavs_core::tracing::events;
use lavs_core::types::{LayerLabel, LayerResult};

use super::cues::{RegularityMarker, UniformityCue};
use super::variance::population_variance;

const UNIFORM_SCORES_DETAIL: &str =
    "Evidence layers are unusually consistent (behavioral uniformity).";
const OVER_REGULARIZED_DETAIL: &str =
    "Multiple layers report homogeneity/low entropy (over-regularized content).";

/// Emits the "Behavioral Deviation Analysis" layer from the layers
/// produced before it. Pure: no I/O, never fails.
#[derive(Debug, Clone, Default)]
pub struct BehavioralAnalyzer {
    config: BehavioralConfig,
}

impl BehavioralAnalyzer {
    pub fn new(config: BehavioralConfig) -> Self {
        Self { config }
    }

    /// Analyze `layers`. The input must not contain this analyzer's own output.
    pub fn analyze(&self, layers: &[LayerResult]) -> LayerResult {
        let penalty = self.config.effective_penalty();
        let mut score = BEHAVIORAL_BASE_SCORE;
        let mut details = Vec::new();
        let mut flagged = false;

        // Check 1: uniformity cues, one deduction per matching finding.
        for detail in layers.iter().flat_map(|l| l.details.iter()) {
            if let Some(cue) = UniformityCue::find_in(detail) {
                score = score.saturating_sub(penalty);
                flagged = true;
                details.push(format!("Behavioral flag: {detail}"));
                events::behavioral_flag_raised(cue.phrase(), penalty);
            }
        }

        // Check 2: low spread of numeric scores.
        let scores: Vec<f64> = layers.iter().filter_map(LayerResult::numeric_score).collect();
        if let Some(variance) = population_variance(&scores) {
            details.push(format!("Inter-layer score variance: {variance:.2}"));
            if variance < self.config.effective_variance_threshold() {
                score = score.saturating_sub(penalty);
                flagged = true;
                details.push(UNIFORM_SCORES_DETAIL.to_string());
                events::behavioral_flag_raised("score_variance", penalty);
            }
        }

        // Check 3: repeated homogeneity/entropy findings, deducted once.
        let mentions = layers
            .iter()
            .flat_map(|l| l.details.iter())
            .filter(|d| RegularityMarker::mentioned_in(d))
            .count();
        if mentions >= self.config.effective_min_regularity_mentions() {
            score = score.saturating_sub(penalty);
            flagged = true;
            details.push(OVER_REGULARIZED_DETAIL.to_string());
            events::behavioral_flag_raised("regularity_mentions", penalty);
        }

        if !flagged {
            details.push(NO_BEHAVIORAL_DEVIATION.to_string());
        }

        let score = score.clamp(0, BEHAVIORAL_BASE_SCORE) as f64;
        LayerResult::new(LayerLabel::BehavioralDeviation, score, details)
    }
}

/// Analyze with the default thresholds.
pub fn analyze_behavior(layers: &[LayerResult]) -> LayerResult {
    BehavioralAnalyzer::default().analyze(layers)
}
