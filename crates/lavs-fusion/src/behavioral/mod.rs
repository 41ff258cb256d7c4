//! Behavioral Deviation Analysis: a meta-layer over every other layer's
//! findings and scores.
//!
//! Three independent checks, each deducting from a starting score of 100:
//! uniformity cues in finding text, low spread of scores across layers,
//! and repeated homogeneity/entropy findings.

pub mod analyzer;
pub mod cues;
pub mod variance;

pub use analyzer::{analyze_behavior, BehavioralAnalyzer};
pub use cues::{RegularityMarker, UniformityCue};
pub use variance::population_variance;
