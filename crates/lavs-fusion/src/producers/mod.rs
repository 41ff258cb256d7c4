//! Running evidence producers ahead of fusion.
//!
//! Producer failures never reach the fusion core: each one becomes a
//! degraded layer with a penalized score and an explanatory detail.

pub mod runner;
pub mod static_producer;

pub use runner::{degrade, ProducerSet};
pub use static_producer::StaticProducer;
