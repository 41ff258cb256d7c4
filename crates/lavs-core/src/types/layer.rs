//! Layer labels and the per-layer evidence record.

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use super::content_type::ContentType;
use super::weights::Bucket;
use crate::constants::{MAX_SCORE, MIN_SCORE};

/// Label of the origin/metadata layer.
pub const ORIGIN_METADATA_LABEL: &str = "Origin & Metadata Consistency";

/// Label of the behavioral meta-layer.
pub const BEHAVIORAL_LABEL: &str = "Behavioral Deviation Analysis";

/// Prefix shared by all content-specific layer labels.
pub const CONTENT_PATTERN_PREFIX: &str = "Content-Specific AI Pattern Integrity";

/// Identifying label of an evidence layer.
///
/// The known vocabulary is closed; anything else is kept verbatim in
/// `Other` so it survives into the verdict breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LayerLabel {
    /// "Origin & Metadata Consistency"
    OriginMetadata,
    /// "Content-Specific AI Pattern Integrity (Image|Video|Audio|URL)"
    ContentPattern(ContentType),
    /// "Behavioral Deviation Analysis"
    BehavioralDeviation,
    /// Unrecognized label, kept as-is.
    Other(String),
}

impl LayerLabel {
    /// Parse an exact label string. Matching is case-sensitive.
    pub fn parse(raw: &str) -> Self {
        if raw == ORIGIN_METADATA_LABEL {
            return Self::OriginMetadata;
        }
        if raw == BEHAVIORAL_LABEL {
            return Self::BehavioralDeviation;
        }
        ContentType::ALL
            .into_iter()
            .find(|ct| raw == content_pattern_label(*ct))
            .map(Self::ContentPattern)
            .unwrap_or_else(|| Self::Other(raw.to_string()))
    }

    /// The label text as it appears on the wire.
    pub fn text(&self) -> String {
        match self {
            Self::OriginMetadata => ORIGIN_METADATA_LABEL.to_string(),
            Self::ContentPattern(ct) => content_pattern_label(*ct),
            Self::BehavioralDeviation => BEHAVIORAL_LABEL.to_string(),
            Self::Other(raw) => raw.clone(),
        }
    }

    /// Whether this label is empty and therefore unusable as a signal name.
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Other(raw) if raw.is_empty())
    }

    /// Fusion bucket this layer contributes to under `content_type`.
    ///
    /// A content-specific layer only counts when it matches the declared
    /// content type; with no recognized content type the `ai` bucket is empty.
    pub fn bucket(&self, content_type: Option<ContentType>) -> Option<Bucket> {
        match self {
            Self::OriginMetadata => Some(Bucket::Metadata),
            Self::BehavioralDeviation => Some(Bucket::Behavioral),
            Self::ContentPattern(ct) if Some(*ct) == content_type => Some(Bucket::Ai),
            Self::ContentPattern(_) | Self::Other(_) => None,
        }
    }
}

/// Full label text for the content-specific layer of `content_type`.
pub fn content_pattern_label(content_type: ContentType) -> String {
    format!("{} ({})", CONTENT_PATTERN_PREFIX, content_type.label_suffix())
}

impl fmt::Display for LayerLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OriginMetadata => f.write_str(ORIGIN_METADATA_LABEL),
            Self::ContentPattern(ct) => {
                write!(f, "{} ({})", CONTENT_PATTERN_PREFIX, ct.label_suffix())
            }
            Self::BehavioralDeviation => f.write_str(BEHAVIORAL_LABEL),
            Self::Other(raw) => f.write_str(raw),
        }
    }
}

impl From<String> for LayerLabel {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<&str> for LayerLabel {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<LayerLabel> for String {
    fn from(label: LayerLabel) -> Self {
        label.text()
    }
}

/// Evidence produced by one analyzer.
///
/// Every field is optional on the wire: a missing or non-numeric `score`,
/// a missing or non-string `layer`, and non-string `details` entries all
/// read as "absent" instead of failing. A decoded record keeps its source
/// object in `raw` and serializes back to it unchanged, so audit output
/// shows exactly what the producer sent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayerResult {
    pub layer: Option<LayerLabel>,
    /// Authenticity confidence in [0, 100]; 100 = consistent with genuine content.
    pub score: Option<f64>,
    /// Findings in insertion order; the first one is the representative.
    pub details: Vec<String>,
    /// Source JSON object, present when the record was decoded from JSON.
    pub raw: Option<Map<String, Value>>,
}

impl LayerResult {
    /// Create a layer result, clamping `score` into [0, 100].
    pub fn new(layer: LayerLabel, score: f64, details: Vec<String>) -> Self {
        Self {
            layer: Some(layer),
            score: Some(clamp_score(score)),
            details,
            raw: None,
        }
    }

    /// Read the typed fields out of a JSON object and keep the object as `raw`.
    pub fn from_json_object(raw: Map<String, Value>) -> Self {
        let layer = match raw.get("layer") {
            Some(Value::String(label)) => Some(LayerLabel::parse(label)),
            _ => None,
        };
        let score = raw
            .get("score")
            .and_then(Value::as_f64)
            .filter(|s| s.is_finite());
        let details = match raw.get("details") {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        };
        Self {
            layer,
            score,
            details,
            raw: Some(raw),
        }
    }

    /// Replace the score, keeping `raw` in step when present.
    pub fn set_score(&mut self, score: f64) {
        self.score = Some(score);
        if let Some(raw) = self.raw.as_mut() {
            raw.insert("score".to_string(), Value::from(score));
        }
    }

    /// Score if present and finite.
    pub fn numeric_score(&self) -> Option<f64> {
        self.score.filter(|s| s.is_finite())
    }

    /// Risk of this layer: `clamp(100 - score, 0, 100)`.
    /// A missing score counts as fully authentic (risk 0).
    pub fn risk(&self) -> f64 {
        let score = self.numeric_score().unwrap_or(MAX_SCORE);
        (MAX_SCORE - score).clamp(MIN_SCORE, MAX_SCORE)
    }

    /// Usable label: present and non-empty.
    pub fn named_layer(&self) -> Option<&LayerLabel> {
        self.layer.as_ref().filter(|l| !l.is_blank())
    }

    /// First detail, or the empty string.
    pub fn first_detail(&self) -> &str {
        self.details.first().map(String::as_str).unwrap_or("")
    }
}

impl Serialize for LayerResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if let Some(raw) = &self.raw {
            return raw.serialize(serializer);
        }
        let len = 1 + usize::from(self.layer.is_some()) + usize::from(self.score.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        if let Some(layer) = &self.layer {
            map.serialize_entry("layer", &layer.text())?;
        }
        if let Some(score) = self.score {
            map.serialize_entry("score", &score)?;
        }
        map.serialize_entry("details", &self.details)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for LayerResult {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Map::<String, Value>::deserialize(deserializer)?;
        Ok(Self::from_json_object(raw))
    }
}

/// Clamp a score into [0, 100]. Non-finite scores collapse to 0.
pub fn clamp_score(score: f64) -> f64 {
    if score.is_finite() {
        score.clamp(MIN_SCORE, MAX_SCORE)
    } else {
        MIN_SCORE
    }
}
