// SPDX-License-Identifier: MIT

//! CSV-backed example-query catalog
//!
//! The catalog file is a plain CSV whose header row names the columns; each
//! data row becomes one JSON object keyed by header. The frontend uses it to
//! populate the example-query picker, so no schema is imposed here.

use crate::error::BridgeError;
use serde_json::{Map, Value};
use std::path::Path;

/// Load all catalog rows from a CSV file.
pub fn load(path: &Path) -> Result<Vec<Value>, BridgeError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;
    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut row = Map::new();
        for (header, field) in headers.iter().zip(record.iter()) {
            row.insert(header.to_string(), Value::String(field.to_string()));
        }
        rows.push(Value::Object(row));
    }

    Ok(rows)
}
