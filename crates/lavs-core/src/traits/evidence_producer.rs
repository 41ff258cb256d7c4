//! EvidenceProducer trait: the contract every modality analyzer fulfils.
//!
//! Producers live outside the fusion core. They may fail; the runner in
//! `lavs-fusion` turns any `ProducerError` into a degraded layer, so the
//! core only ever sees `LayerResult`s.

use std::fmt;
use std::path::PathBuf;

use crate::errors::ProducerError;
use crate::types::{Classification, ContentType, LayerLabel, LayerResult};

/// Where the analyzed content lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubjectSource {
    File(PathBuf),
    Url(String),
}

impl fmt::Display for SubjectSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}

/// The content under analysis plus its classification.
#[derive(Debug, Clone, PartialEq)]
pub struct EvidenceSubject {
    pub source: SubjectSource,
    pub classification: Classification,
}

impl EvidenceSubject {
    pub fn new(source: SubjectSource, classification: Classification) -> Self {
        Self {
            source,
            classification,
        }
    }

    /// Recognized content type of the subject, if any.
    pub fn content_type(&self) -> Option<ContentType> {
        self.classification.recognized_type()
    }

    /// Content type used to pick producers. A URL subject is always
    /// analyzed as a URL, even when its classification is unknown.
    pub fn producer_type(&self) -> Option<ContentType> {
        match self.source {
            SubjectSource::Url(_) => Some(ContentType::Url),
            SubjectSource::File(_) => self.content_type(),
        }
    }
}

/// One independent evidence-producing check.
pub trait EvidenceProducer: Send + Sync {
    /// Label of the layer this producer emits.
    fn label(&self) -> LayerLabel;

    /// Whether this producer applies to `content_type`. Defaults to all.
    fn supports(&self, content_type: Option<ContentType>) -> bool {
        let _ = content_type;
        true
    }

    /// Run the check. Implementations must clamp their score into [0, 100].
    fn produce(&self, subject: &EvidenceSubject) -> Result<LayerResult, ProducerError>;
}
