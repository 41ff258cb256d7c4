//! Producer set execution and failure degradation.

use rayon::prelude::*;

use lavs_core::config::ProducerConfig;
use lavs_core::constants::MAX_SCORE;
use lavs_core::errors::{LavsErrorCode, ProducerError};
use lavs_core::tracing::events;
use lavs_core::traits::{EvidenceProducer, EvidenceSubject};
use lavs_core::types::layer::clamp_score;
use lavs_core::types::{LayerLabel, LayerResult};

/// Convert a producer failure into a layer result.
///
/// The layer keeps the producer's label, scores `100 - penalty` and
/// carries a single `"Error in <layer>: <error>"` detail. Downstream it is
/// indistinguishable from a genuinely low-scoring layer.
pub fn degrade(label: LayerLabel, error: &ProducerError, penalty: f64) -> LayerResult {
    let layer = label.text();
    events::producer_degraded(&layer, error.error_code(), &error.to_string());
    LayerResult::new(
        label,
        MAX_SCORE - penalty,
        vec![format!("Error in {layer}: {error}")],
    )
}

/// Ordered collection of evidence producers.
pub struct ProducerSet {
    producers: Vec<Box<dyn EvidenceProducer>>,
    config: ProducerConfig,
}

impl ProducerSet {
    pub fn new(config: ProducerConfig) -> Self {
        Self {
            producers: Vec::new(),
            config,
        }
    }

    /// Append a producer. Output order follows registration order.
    pub fn register(&mut self, producer: Box<dyn EvidenceProducer>) {
        self.producers.push(producer);
    }

    pub fn with(mut self, producer: Box<dyn EvidenceProducer>) -> Self {
        self.register(producer);
        self
    }

    pub fn len(&self) -> usize {
        self.producers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.producers.is_empty()
    }

    /// Run every producer applicable to `subject`.
    ///
    /// The origin/metadata producer always runs; others only when they
    /// support the subject's producer type (a URL subject always selects the
    /// URL producers). Results come back in registration order whether or
    /// not they ran in parallel.
    pub fn run(&self, subject: &EvidenceSubject) -> Vec<LayerResult> {
        let content_type = subject.producer_type();
        let selected: Vec<&dyn EvidenceProducer> = self
            .producers
            .iter()
            .map(|p| p.as_ref())
            .filter(|p| p.label() == LayerLabel::OriginMetadata || p.supports(content_type))
            .collect();

        tracing::debug!(
            selected = selected.len(),
            registered = self.producers.len(),
            content_type = ?content_type,
            "running producers"
        );

        if self.config.effective_parallel() {
            selected
                .par_iter()
                .map(|p| self.run_one(*p, subject))
                .collect()
        } else {
            selected
                .iter()
                .map(|p| self.run_one(*p, subject))
                .collect()
        }
    }

    fn run_one(&self, producer: &dyn EvidenceProducer, subject: &EvidenceSubject) -> LayerResult {
        match producer.produce(subject) {
            Ok(mut result) => {
                if let Some(score) = result.score {
                    let clamped = clamp_score(score);
                    if clamped != score {
                        result.set_score(clamped);
                    }
                }
                result
            }
            Err(e) => degrade(
                producer.label(),
                &e,
                self.config.effective_failure_penalty(),
            ),
        }
    }
}

impl Default for ProducerSet {
    fn default() -> Self {
        Self::new(ProducerConfig::default())
    }
}
