//! Core data model shared by producers, the behavioral analyzer and the
//! aggregation engine.

pub mod classification;
pub mod content_type;
pub mod layer;
pub mod verdict;
pub mod weights;

pub use classification::Classification;
pub use content_type::ContentType;
pub use layer::{LayerLabel, LayerResult};
pub use verdict::{ComponentScores, RiskLevel, Verdict, VerdictLabel};
pub use weights::{Bucket, ComponentWeights};
