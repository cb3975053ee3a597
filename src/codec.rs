//! Text encoding helpers built on `serde_json`.
//!
//! `to_text` / `from_text` are thin typed wrappers. `from_text_positional`
//! rebuilds a value from a shape by position instead of by key: the n-th
//! field of the shape takes the n-th value of the decoded object.

use log::debug;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0} is not a JSON object")]
    NotAnObject(&'static str),
}

pub fn to_text<T: Serialize + ?Sized>(value: &T) -> Result<String, CodecError> {
    Ok(serde_json::to_string(value)?)
}

pub fn from_text<T: DeserializeOwned>(text: &str) -> Result<T, CodecError> {
    Ok(serde_json::from_str(text)?)
}

/// Decodes `text` into a value shaped like `shape`, assigning fields by
/// position. Shape fields past the end of the decoded object keep the
/// shape's value; surplus decoded values are dropped.
pub fn from_text_positional<T>(shape: &T, text: &str) -> Result<T, CodecError>
where
    T: Serialize + DeserializeOwned,
{
    let Value::Object(template) = serde_json::to_value(shape)? else {
        return Err(CodecError::NotAnObject("shape"));
    };
    let Value::Object(decoded) = serde_json::from_str::<Value>(text)? else {
        return Err(CodecError::NotAnObject("decoded text"));
    };

    if decoded.len() != template.len() {
        debug!(
            target: "codec",
            "Positional decode with {} values for {} fields",
            decoded.len(),
            template.len()
        );
    }

    let mut values = decoded.into_iter().map(|(_, value)| value);
    let rebuilt: Map<String, Value> = template
        .into_iter()
        .map(|(key, fallback)| (key, values.next().unwrap_or(fallback)))
        .collect();

    Ok(serde_json::from_value(Value::Object(rebuilt))?)
}
