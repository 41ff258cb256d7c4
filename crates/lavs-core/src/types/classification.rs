//! Result of classifying an input before any producer runs.

use serde::{Deserialize, Serialize};

use super::content_type::ContentType;

/// Top-level content type given to unclassifiable input.
pub const UNKNOWN_CONTENT_TYPE: &str = "unknown";

/// How an input was classified.
///
/// `content_type` is the top-level MIME type (`image`, `video`, `audio`,
/// `application`, ...) or `url`; only four of those are recognized by
/// fusion, see [`Classification::recognized_type`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub content_type: String,
    pub format: Option<String>,
    pub raw_mime: Option<String>,
}

impl Classification {
    pub fn new(
        content_type: impl Into<String>,
        format: Option<String>,
        raw_mime: Option<String>,
    ) -> Self {
        Self {
            content_type: content_type.into(),
            format,
            raw_mime,
        }
    }

    /// Classification for input nothing could be said about.
    pub fn unknown() -> Self {
        Self::new(UNKNOWN_CONTENT_TYPE, None, None)
    }

    /// The content type fusion understands, or `None`.
    pub fn recognized_type(&self) -> Option<ContentType> {
        ContentType::parse(&self.content_type)
    }
}
