//! lavs-fusion: turns a variable, sometimes partial set of per-layer
//! evidence into one explainable authenticity verdict.
//!
//! - `behavioral`: cross-layer "too consistent to be real" meta-analysis
//! - `aggregation`: risk buckets, adaptive weights, neutral fallback, banding
//! - `producers`: running evidence producers and degrading their failures
//! - `classifier`: content classification ahead of any producer
//! - `evidence`: reading producer output documents
//! - `pipeline`: `fuse` and `verify`, the straight-line request composition

pub mod aggregation;
pub mod behavioral;
pub mod classifier;
pub mod evidence;
pub mod pipeline;
pub mod producers;

pub use aggregation::{aggregate, AggregationEngine, VerdictBands};
pub use behavioral::{analyze_behavior, BehavioralAnalyzer};
pub use classifier::ContentClassifier;
pub use evidence::{parse_evidence, EvidenceDocument};
pub use pipeline::{fuse, FusionPipeline, VerificationReport, VerifyRequest};
pub use producers::{degrade, ProducerSet, StaticProducer};
