// src/loader.rs
use crate::error::{Result, SeedError};
use bson::{Bson, Document};
use serde_json::{Map, Value};
use std::io;
use std::path::Path;

/// Parsed documents in file order.
pub type Dataset = Vec<Document>;

/// Reads the whole file and parses it as a JSON array of objects.
pub fn load_dataset<P: AsRef<Path>>(path: P, extended_json: bool) -> Result<Dataset> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => SeedError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => SeedError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "read dataset");
    parse_dataset(&text, extended_json)
}

pub fn parse_dataset(text: &str, extended_json: bool) -> Result<Dataset> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let value: Value = serde_json::from_str(text).map_err(|e| SeedError::parse(e.to_string()))?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(SeedError::parse(format!(
                "expected a top-level JSON array, found {}",
                json_type(&other)
            )))
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| match item {
            Value::Object(map) if extended_json => from_extended_json(map, idx),
            Value::Object(map) => Ok(object_to_document(map)),
            other => Err(SeedError::parse(format!(
                "element {} is not a JSON object (found {})",
                idx,
                json_type(&other)
            ))),
        })
        .collect()
}

fn from_extended_json(map: Map<String, Value>, idx: usize) -> Result<Document> {
    match Bson::try_from(Value::Object(map)) {
        Ok(Bson::Document(doc)) => Ok(doc),
        Ok(other) => Err(SeedError::parse(format!(
            "element {} is an Extended JSON scalar ({:?}), not a document",
            idx,
            other.element_type()
        ))),
        Err(e) => Err(SeedError::parse(format!(
            "element {}: invalid Extended JSON: {}",
            idx, e
        ))),
    }
}

// Verbatim mapping: keys such as `$oid` stay plain fields.
fn object_to_document(map: Map<String, Value>) -> Document {
    map.into_iter()
        .map(|(key, value)| (key, json_to_bson(value)))
        .collect()
}

/// Integers that fit i32 become `Int32`, other integers `Int64`, everything
/// else `Double`. A JavaScript loader would store every integer beyond i32 as
/// `Double`; `Int64` keeps values above 2^53 exact.
fn json_to_bson(value: Value) -> Bson {
    match value {
        Value::Null => Bson::Null,
        Value::Bool(b) => Bson::Boolean(b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => i32::try_from(i).map(Bson::Int32).unwrap_or(Bson::Int64(i)),
            // u64 beyond i64::MAX and all fractional values
            None => Bson::Double(n.as_f64().unwrap_or(f64::NAN)),
        },
        Value::String(s) => Bson::String(s),
        Value::Array(items) => Bson::Array(items.into_iter().map(json_to_bson).collect()),
        Value::Object(map) => Bson::Document(object_to_document(map)),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
