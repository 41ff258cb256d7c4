//! Trait seams between the fusion core and its collaborators.

pub mod evidence_producer;
pub mod weight_provider;

pub use evidence_producer::{EvidenceProducer, EvidenceSubject, SubjectSource};
pub use weight_provider::{ConfiguredWeightProvider, StaticWeightProvider, WeightProvider};
