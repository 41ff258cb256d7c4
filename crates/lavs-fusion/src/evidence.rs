//! Evidence documents: producer output handed to the fusion pipeline as JSON.
//!
//! Two shapes are accepted:
//!
//! ```json
//! [{"layer": "...", "score": 90, "details": ["..."]}]
//! ```
//!
//! ```json
//! {"content_type": "image", "layers": [{"layer": "...", "score": 90, "details": []}]}
//! ```

use serde_json::Value;

use lavs_core::errors::InputError;
use lavs_core::types::LayerResult;

/// Parsed evidence document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EvidenceDocument {
    /// Declared content type, if the document carried one.
    pub content_type: Option<String>,
    pub layers: Vec<LayerResult>,
}

/// Parse an evidence document read from `source_name`.
///
/// Individual layers are read leniently (missing or malformed fields become
/// absent), but the document itself must be one of the accepted shapes and
/// every layer must be a JSON object.
pub fn parse_evidence(source_name: &str, text: &str) -> Result<EvidenceDocument, InputError> {
    let invalid = |message: String| InputError::InvalidEvidence {
        source_name: source_name.to_string(),
        message,
    };

    let value: Value = serde_json::from_str(text).map_err(|e| invalid(e.to_string()))?;
    let (items, content_type) = match value {
        Value::Array(items) => (items, None),
        Value::Object(mut map) => {
            let content_type = match map.remove("content_type") {
                Some(Value::String(ct)) => Some(ct),
                Some(Value::Null) | None => None,
                Some(_) => return Err(invalid("content_type must be a string".to_string())),
            };
            match map.remove("layers") {
                Some(Value::Array(items)) => (items, content_type),
                _ => return Err(invalid("expected a \"layers\" array".to_string())),
            }
        }
        _ => {
            return Err(invalid(
                "expected an array of layer results or an object with a \"layers\" array"
                    .to_string(),
            ))
        }
    };

    let layers = items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| {
            if !item.is_object() {
                return Err(invalid(format!("layer {idx} is not an object")));
            }
            serde_json::from_value::<LayerResult>(item)
                .map_err(|e| invalid(format!("layer {idx}: {e}")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(source = %source_name, layers = layers.len(), "evidence parsed");

    Ok(EvidenceDocument {
        content_type,
        layers,
    })
}
