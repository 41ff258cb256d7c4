//! Fusion buckets and content-type-adaptive bucket weights.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::content_type::ContentType;

/// Semantic grouping of layers used for weighted fusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    /// Origin and metadata consistency.
    Metadata,
    /// Content-specific AI pattern integrity.
    Ai,
    /// Cross-layer behavioral deviation.
    Behavioral,
}

impl Bucket {
    /// All buckets in fusion order.
    pub const ALL: [Bucket; 3] = [Self::Metadata, Self::Ai, Self::Behavioral];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Metadata => "metadata",
            Self::Ai => "ai",
            Self::Behavioral => "behavioral",
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Non-negative weight per bucket. Weights need not sum to 1; the engine
/// divides by their total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentWeights {
    pub metadata: f64,
    pub ai: f64,
    pub behavioral: f64,
}

impl ComponentWeights {
    /// Profile for images, videos and unrecognized content.
    pub const DEFAULT: Self = Self::new(0.20, 0.60, 0.20);
    /// Profile for URLs: origin evidence matters more.
    pub const URL: Self = Self::new(0.30, 0.50, 0.20);
    /// Profile for audio: behavioral pacing matters more.
    pub const AUDIO: Self = Self::new(0.20, 0.55, 0.25);

    pub const fn new(metadata: f64, ai: f64, behavioral: f64) -> Self {
        Self {
            metadata,
            ai,
            behavioral,
        }
    }

    /// Built-in profile for `content_type`.
    pub fn for_content_type(content_type: Option<ContentType>) -> Self {
        match content_type {
            Some(ContentType::Url) => Self::URL,
            Some(ContentType::Audio) => Self::AUDIO,
            Some(ContentType::Image) | Some(ContentType::Video) | None => Self::DEFAULT,
        }
    }

    pub fn weight(&self, bucket: Bucket) -> f64 {
        match bucket {
            Bucket::Metadata => self.metadata,
            Bucket::Ai => self.ai,
            Bucket::Behavioral => self.behavioral,
        }
    }

    pub fn total(&self) -> f64 {
        self.metadata + self.ai + self.behavioral
    }

    /// All weights finite and non-negative.
    pub fn is_valid(&self) -> bool {
        Bucket::ALL
            .iter()
            .map(|b| self.weight(*b))
            .all(|w| w.is_finite() && w >= 0.0)
    }

    /// Replace invalid weights: negatives become 0.0, non-finite values
    /// fall back to the weight of `fallback`.
    pub fn sanitized(&self, fallback: &ComponentWeights) -> Self {
        let fix = |w: f64, default: f64| {
            if !w.is_finite() {
                default
            } else if w < 0.0 {
                0.0
            } else {
                w
            }
        };
        Self {
            metadata: fix(self.metadata, fallback.metadata),
            ai: fix(self.ai, fallback.ai),
            behavioral: fix(self.behavioral, fallback.behavioral),
        }
    }
}

impl Default for ComponentWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_match_content_types() {
        assert_eq!(
            ComponentWeights::for_content_type(Some(ContentType::Image)),
            ComponentWeights::DEFAULT
        );
        assert_eq!(
            ComponentWeights::for_content_type(Some(ContentType::Video)),
            ComponentWeights::DEFAULT
        );
        assert_eq!(ComponentWeights::for_content_type(None), ComponentWeights::DEFAULT);
        assert_eq!(
            ComponentWeights::for_content_type(Some(ContentType::Url)),
            ComponentWeights::new(0.30, 0.50, 0.20)
        );
        assert_eq!(
            ComponentWeights::for_content_type(Some(ContentType::Audio)),
            ComponentWeights::new(0.20, 0.55, 0.25)
        );
    }

    #[test]
    fn test_negative_weight_sanitized_to_zero() {
        let weights = ComponentWeights::new(-1.0, 0.6, 0.2);
        assert!(!weights.is_valid());
        let fixed = weights.sanitized(&ComponentWeights::DEFAULT);
        assert_eq!(fixed.metadata, 0.0);
        assert!(fixed.is_valid());
    }

    #[test]
    fn test_nan_weight_falls_back() {
        let weights = ComponentWeights::new(0.2, f64::NAN, 0.2);
        let fixed = weights.sanitized(&ComponentWeights::URL);
        assert_eq!(fixed.ai, 0.50);
    }
}
