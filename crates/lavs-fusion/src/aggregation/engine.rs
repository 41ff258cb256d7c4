//! The aggregation engine.

use lavs_core::config::FusionConfig;
use lavs_core::constants::RISK_DECIMALS;
use lavs_core::tracing::events;
use lavs_core::traits::{ConfiguredWeightProvider, WeightProvider};
use lavs_core::types::layer::clamp_score;
use lavs_core::types::{Bucket, ComponentScores, ContentType, LayerResult, Verdict};

use super::banding::VerdictBands;
use super::buckets::bucket_risks;
use super::signals::top_signals;

/// Fuses layer results into a [`Verdict`].
///
/// Stateless across calls: the same layers and content type always yield
/// the same verdict.
pub struct AggregationEngine {
    weights: Box<dyn WeightProvider>,
    config: FusionConfig,
}

impl AggregationEngine {
    /// Engine using the built-in weight table plus any overrides in `config`.
    pub fn new(config: FusionConfig) -> Self {
        Self {
            weights: Box::new(ConfiguredWeightProvider::new(config.clone())),
            config,
        }
    }

    /// Engine with a custom weight source.
    pub fn with_weight_provider(config: FusionConfig, weights: Box<dyn WeightProvider>) -> Self {
        Self { weights, config }
    }

    pub fn with_defaults() -> Self {
        Self::new(FusionConfig::default())
    }

    pub fn config(&self) -> &FusionConfig {
        &self.config
    }

    /// Aggregate with a free-form declared content type. Unrecognized or
    /// absent values use the default weighting profile and an empty `ai` bucket.
    pub fn aggregate_declared(&self, layers: &[LayerResult], declared: Option<&str>) -> Verdict {
        self.aggregate(layers, ContentType::from_declared(declared))
    }

    pub fn aggregate(&self, layers: &[LayerResult], content_type: Option<ContentType>) -> Verdict {
        // Steps 1-3: per-layer risk, bucket membership, bucket means.
        let buckets = bucket_risks(layers, content_type);

        // Step 4: adaptive weights.
        let weights = self.weights.weights_for(content_type);

        // Steps 5-6: neutral fallback, then weighted mean over all three buckets.
        let prior = self.config.effective_neutral_prior();
        let mut weighted_sum = 0.0;
        let mut total_weight = 0.0;
        for bucket in Bucket::ALL {
            let risk = match buckets.get(bucket) {
                Some(risk) => risk,
                None => {
                    events::bucket_fell_back(bucket.name(), prior);
                    prior
                }
            };
            let weight = weights.weight(bucket);
            weighted_sum += risk * weight;
            total_weight += weight;
        }
        let final_risk = if total_weight > 0.0 && total_weight.is_finite() {
            clamp_score(weighted_sum / total_weight)
        } else {
            0.0
        };
        let final_score = round_risk(final_risk);

        // Step 7: banding on the reported score.
        let verdict = VerdictBands::from_config(&self.config).classify(final_score);

        // Step 8: top signals over every layer.
        let top_signals = top_signals(layers, self.config.effective_max_top_signals());

        events::verdict_emitted(final_score, verdict.name(), layers.len());

        Verdict {
            final_score,
            verdict,
            risk_level: verdict.risk_level(),
            layer_breakdown: layers.to_vec(),
            component_scores: round_components(buckets),
            top_signals,
        }
    }
}

impl Default for AggregationEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Aggregate with the built-in weights and thresholds.
///
/// `content_type` is the declared type as received (`"image"`, `"url"`, ...);
/// anything unrecognized falls back to the default profile.
pub fn aggregate(layers: &[LayerResult], content_type: Option<&str>) -> Verdict {
    AggregationEngine::with_defaults().aggregate_declared(layers, content_type)
}

fn round_risk(value: f64) -> f64 {
    let factor = 10f64.powi(RISK_DECIMALS);
    (value * factor).round() / factor
}

fn round_components(scores: ComponentScores) -> ComponentScores {
    ComponentScores {
        metadata_risk: scores.metadata_risk.map(round_risk),
        ai_risk: scores.ai_risk.map(round_risk),
        behavioral_risk: scores.behavioral_risk.map(round_risk),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lavs_core::types::ComponentWeights;

    struct ZeroWeights;

    impl WeightProvider for ZeroWeights {
        fn weights_for(&self, _content_type: Option<ContentType>) -> ComponentWeights {
            ComponentWeights::new(0.0, 0.0, 0.0)
        }
    }

    #[test]
    fn test_all_zero_weights_yield_zero_risk() {
        let engine =
            AggregationEngine::with_weight_provider(FusionConfig::default(), Box::new(ZeroWeights));
        let verdict = engine.aggregate(&[], Some(ContentType::Image));
        assert_eq!(verdict.final_score, 0.0);
        assert_eq!(verdict.verdict, lavs_core::types::VerdictLabel::Real);
    }

    #[test]
    fn test_round_risk_two_decimals() {
        assert_eq!(round_risk(44.444), 44.44);
        assert_eq!(round_risk(33.335_1), 33.34);
        assert_eq!(round_risk(50.0), 50.0);
    }
}
