//! Lenient decoding of manifest property values.
//!
//! Manifests are hand-written, so scalars are frequently not typed
//! the way the agent expects (`team_id: 123`, `push_metrics: "true"`).
//! These helpers normalize them while snippets are being parsed.

use serde::de::{Deserialize, Deserializer, Error};
use serde_yaml::{Mapping, Value};

/// Decode an optional string property, stringifying scalars.
pub(crate) fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(D::Error::custom(format!(
            "expected a string, found {}",
            kind(&other)
        ))),
    }
}

/// Decode an optional boolean property, accepting `"true"`/`"false"` strings.
pub(crate) fn opt_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::Bool(b) => Ok(Some(b)),
        Value::String(ref s) if s.eq_ignore_ascii_case("true") => Ok(Some(true)),
        Value::String(ref s) if s.eq_ignore_ascii_case("false") => Ok(Some(false)),
        Value::String(s) => Err(D::Error::custom(format!(
            "expected a boolean, found string '{}'",
            s
        ))),
        other => Err(D::Error::custom(format!(
            "expected a boolean, found {}",
            kind(&other)
        ))),
    }
}

/// Decode optional tags: scalar values are kept as given, keys become strings.
pub(crate) fn opt_tags<'de, D>(deserializer: D) -> Result<Option<Mapping>, D::Error>
where
    D: Deserializer<'de>,
{
    let tags = match Value::deserialize(deserializer)? {
        Value::Null => return Ok(None),
        Value::Mapping(m) => m,
        other => {
            return Err(D::Error::custom(format!(
                "expected a mapping for tags, found {}",
                kind(&other)
            )))
        }
    };

    let mut normalized = Mapping::with_capacity(tags.len());
    for (key, value) in tags {
        if !is_scalar(&key) || !is_scalar(&value) {
            return Err(D::Error::custom(format!(
                "tags must map scalars to scalars, found {} -> {}",
                kind(&key),
                kind(&value)
            )));
        }
        normalized.insert(Value::String(scalar_text(key)), value);
    }

    Ok(Some(normalized))
}

fn scalar_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => kind(&other).to_string(),
    }
}

fn is_scalar(value: &Value) -> bool {
    match value {
        Value::Bool(_) | Value::Number(_) | Value::String(_) => true,
        _ => false,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
