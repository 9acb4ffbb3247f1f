//! Extraction of the JSON object from raw model output.

use serde_json::Value;
use thiserror::Error;

/// Raw model output that does not contain a JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    #[error("response contains no JSON object")]
    NoObject,

    #[error("response JSON is malformed: {0}")]
    Malformed(String),
}

/// Pulls the JSON object out of a model reply.
///
/// Models occasionally wrap the object in Markdown fences or add a
/// sentence around it; everything outside the outermost braces is ignored.
pub fn extract_json_object(raw: &str) -> Result<Value, PayloadError> {
    let start = raw.find('{').ok_or(PayloadError::NoObject)?;
    let end = raw.rfind('}').ok_or(PayloadError::NoObject)?;
    if end < start {
        return Err(PayloadError::NoObject);
    }

    let value: Value = serde_json::from_str(&raw[start..=end])
        .map_err(|e| PayloadError::Malformed(e.to_string()))?;
    if value.is_object() {
        Ok(value)
    } else {
        Err(PayloadError::NoObject)
    }
}
