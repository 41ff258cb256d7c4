//! The per-request fusion pipeline.
//!
//! Producers → behavioral analyzer → aggregation engine, as a straight-line
//! composition with no state carried between requests.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use lavs_core::config::LavsConfig;
use lavs_core::constants::DEFAULT_EXPLANATION;
use lavs_core::errors::InputError;
use lavs_core::traits::{EvidenceSubject, SubjectSource};
use lavs_core::types::{Classification, ContentType, LayerResult, Verdict, VerdictLabel};

use crate::aggregation::AggregationEngine;
use crate::behavioral::BehavioralAnalyzer;
use crate::classifier::ContentClassifier;
use crate::producers::ProducerSet;

/// What to verify. A non-empty URL wins over a file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifyRequest {
    pub url: Option<String>,
    pub file: Option<PathBuf>,
}

impl VerifyRequest {
    pub fn for_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            file: None,
        }
    }

    pub fn for_file(path: impl Into<PathBuf>) -> Self {
        Self {
            url: None,
            file: Some(path.into()),
        }
    }
}

/// Outcome of a verification request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationReport {
    pub verdict: VerdictLabel,
    /// Equal to `breakdown.final_score`.
    pub confidence: f64,
    pub explanation: String,
    pub breakdown: Verdict,
    pub classification: Classification,
}

impl VerificationReport {
    pub fn from_verdict(verdict: Verdict, classification: Classification) -> Self {
        Self {
            verdict: verdict.verdict,
            confidence: verdict.final_score,
            explanation: explain(&verdict),
            breakdown: verdict,
            classification,
        }
    }
}

/// Up to two top signals joined by `"; "`, else the first finding of the
/// last layer, else a fixed sentence.
pub fn explain(verdict: &Verdict) -> String {
    if !verdict.top_signals.is_empty() {
        return verdict
            .top_signals
            .iter()
            .take(2)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("; ");
    }
    verdict
        .layer_breakdown
        .last()
        .and_then(|l| l.details.first())
        .filter(|d| !d.is_empty())
        .cloned()
        .unwrap_or_else(|| DEFAULT_EXPLANATION.to_string())
}

/// Behavioral analyzer, aggregation engine and classifier, configured once
/// and shared by every request.
pub struct FusionPipeline {
    behavioral: BehavioralAnalyzer,
    engine: AggregationEngine,
    classifier: ContentClassifier,
}

impl FusionPipeline {
    pub fn new(config: &LavsConfig) -> Self {
        Self {
            behavioral: BehavioralAnalyzer::new(config.behavioral.clone()),
            engine: AggregationEngine::new(config.fusion.clone()),
            classifier: ContentClassifier::new(),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(&LavsConfig::default())
    }

    pub fn behavioral(&self) -> &BehavioralAnalyzer {
        &self.behavioral
    }

    pub fn engine(&self) -> &AggregationEngine {
        &self.engine
    }

    pub fn classifier(&self) -> &ContentClassifier {
        &self.classifier
    }

    /// Append the behavioral layer to `producer_outputs` and aggregate.
    pub fn fuse(&self, producer_outputs: &[LayerResult], content_type: Option<ContentType>) -> Verdict {
        let mut layers = Vec::with_capacity(producer_outputs.len() + 1);
        layers.extend_from_slice(producer_outputs);
        layers.push(self.behavioral.analyze(producer_outputs));
        self.engine.aggregate(&layers, content_type)
    }

    /// Classify the request's subject, run `producers` on it and fuse.
    ///
    /// Fails only on input validation: no input at all, an unreadable file,
    /// or a file that is not image, video or audio. A URL is always
    /// accepted; one without a scheme and host is fused under the default
    /// profile.
    pub fn verify(
        &self,
        request: &VerifyRequest,
        producers: &ProducerSet,
    ) -> Result<VerificationReport, InputError> {
        let subject = self.resolve_subject(request)?;
        let content_type = subject.content_type();

        let outputs = producers.run(&subject);
        let verdict = self.fuse(&outputs, content_type);

        Ok(VerificationReport::from_verdict(verdict, subject.classification))
    }

    fn resolve_subject(&self, request: &VerifyRequest) -> Result<EvidenceSubject, InputError> {
        if let Some(url) = request.url.as_deref().filter(|u| !u.is_empty()) {
            let classification = self.classifier.classify_url(url);
            return Ok(EvidenceSubject::new(
                SubjectSource::Url(url.to_string()),
                classification,
            ));
        }

        if let Some(path) = request.file.as_ref().filter(|p| !p.as_os_str().is_empty()) {
            let classification = self.classifier.classify_file(path)?;
            return match classification.recognized_type() {
                Some(ContentType::Image | ContentType::Video | ContentType::Audio) => Ok(
                    EvidenceSubject::new(SubjectSource::File(path.clone()), classification),
                ),
                _ => Err(InputError::UnsupportedContentType {
                    content_type: classification.content_type,
                }),
            };
        }

        Err(InputError::NoInput)
    }
}

impl Default for FusionPipeline {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Fuse producer outputs with default configuration.
///
/// `content_type` is the declared type as received; unrecognized values
/// use the default weighting profile.
pub fn fuse(producer_outputs: &[LayerResult], content_type: Option<&str>) -> Verdict {
    FusionPipeline::with_defaults().fuse(producer_outputs, ContentType::from_declared(content_type))
}
