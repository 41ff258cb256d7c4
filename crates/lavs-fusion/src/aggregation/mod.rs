//! Risk aggregation: the single source of truth for the final verdict.
//!
//! Layers become risks, risks are pooled into three buckets, empty buckets
//! take the neutral prior, and the weighted bucket risks are banded into
//! a verdict with its top contributing signals.

pub mod banding;
pub mod buckets;
pub mod engine;
pub mod signals;

pub use banding::VerdictBands;
pub use buckets::bucket_risks;
pub use engine::{aggregate, AggregationEngine};
pub use signals::top_signals;
