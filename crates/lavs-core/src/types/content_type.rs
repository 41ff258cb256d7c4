//! Declared content type of the analyzed subject.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::InputError;

/// The kind of content being verified.
///
/// Anything outside these four is "unrecognized" and is carried as
/// `Option<ContentType>::None` through the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Image,
    Video,
    Audio,
    Url,
}

impl ContentType {
    /// All recognized content types.
    pub const ALL: [ContentType; 4] = [Self::Image, Self::Video, Self::Audio, Self::Url];

    /// Lowercase wire name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Url => "url",
        }
    }

    /// Suffix used inside the content-specific layer label,
    /// e.g. `(Image)` or `(URL)`.
    pub fn label_suffix(&self) -> &'static str {
        match self {
            Self::Image => "Image",
            Self::Video => "Video",
            Self::Audio => "Audio",
            Self::Url => "URL",
        }
    }

    /// Lenient parse: trims and ignores ASCII case. Returns `None` for
    /// anything unrecognized, including the empty string.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|ct| ct.name() == normalized)
    }

    /// Parse an optional declared content type, collapsing unknown values
    /// to `None` (default weighting profile).
    pub fn from_declared(raw: Option<&str>) -> Option<Self> {
        raw.and_then(Self::parse)
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ContentType {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| InputError::UnsupportedContentType {
            content_type: s.to_string(),
        })
    }
}
