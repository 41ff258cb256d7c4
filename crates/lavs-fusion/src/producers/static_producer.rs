//! Replays a precomputed layer result as a producer.

use lavs_core::errors::ProducerError;
use lavs_core::traits::{EvidenceProducer, EvidenceSubject};
use lavs_core::types::{ContentType, LayerLabel, LayerResult};

/// Producer whose output was computed elsewhere, e.g. read from a JSON
/// evidence document.
///
/// A content-specific layer only applies to its own content type; every
/// other layer applies to all content.
#[derive(Debug, Clone)]
pub struct StaticProducer {
    result: LayerResult,
}

impl StaticProducer {
    pub fn new(result: LayerResult) -> Self {
        Self { result }
    }

    /// One boxed producer per layer, in order.
    pub fn from_layers(layers: Vec<LayerResult>) -> Vec<Box<dyn EvidenceProducer>> {
        layers
            .into_iter()
            .map(|l| Box::new(Self::new(l)) as Box<dyn EvidenceProducer>)
            .collect()
    }
}

impl EvidenceProducer for StaticProducer {
    fn label(&self) -> LayerLabel {
        self.result
            .layer
            .clone()
            .unwrap_or_else(|| LayerLabel::Other(String::new()))
    }

    fn supports(&self, content_type: Option<ContentType>) -> bool {
        match &self.result.layer {
            Some(LayerLabel::ContentPattern(ct)) => content_type == Some(*ct),
            _ => true,
        }
    }

    fn produce(&self, _subject: &EvidenceSubject) -> Result<LayerResult, ProducerError> {
        Ok(self.result.clone())
    }
}
