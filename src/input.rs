//! Loading raw tracking records from JSON.
//!
//! A party's history is a JSON array of records. The individual records are
//! not validated here; extraction decides what is usable.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::info;
use serde_json::Value;

use crate::error::{Result, TraceStatsError};
use crate::RawRecord;

/// Read a JSON array of tracking records from a file.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<RawRecord>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| TraceStatsError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let value: Value = serde_json::from_reader(BufReader::new(file))?;
    let records = into_records(value)?;

    info!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Parse a JSON array of tracking records from a string.
pub fn parse_records(json: &str) -> Result<Vec<RawRecord>> {
    into_records(serde_json::from_str(json)?)
}

fn into_records(value: Value) -> Result<Vec<RawRecord>> {
    match value {
        Value::Array(records) => Ok(records),
        other => Err(TraceStatsError::InvalidTopLevel {
            found: json_kind(&other),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
