//! Reading and writing structured data.
//!
//! Neither format can be streamed, so every reader is drained into memory
//! before parsing.

use std::io::Read;

use serde::Deserialize;
use serde_json::Value;

use crate::commands::Result;

/// Parses a reader holding a single JSON document.
pub fn parse_json<R: Read>(mut reader: R) -> Result<Value> {
    let mut data = String::new();
    reader.read_to_string(&mut data)?;
    Ok(serde_json::from_str(&data)?)
}

/// Parses a reader holding zero or more YAML documents.
///
/// Blank input gives an empty array, a single document is returned as is,
/// and several documents are collected into an array in order.
pub fn parse_yaml<R: Read>(mut reader: R) -> Result<Value> {
    let mut data = String::new();
    reader.read_to_string(&mut data)?;

    if data.trim().is_empty() {
        return Ok(Value::Array(Vec::new()));
    }

    let mut docs = Vec::new();
    for document in serde_yaml::Deserializer::from_str(&data) {
        docs.push(Value::deserialize(document)?);
    }

    if docs.len() == 1 {
        Ok(docs.swap_remove(0))
    } else {
        Ok(Value::Array(docs))
    }
}

/// Renders a value as YAML.
pub fn to_yaml(value: &Value) -> Result<String> {
    Ok(serde_yaml::to_string(value)?)
}

/// Renders a value as compact single-line JSON.
pub fn to_json(value: &Value) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}
