//! CSV and JSON encoders for statement tables.

use std::fs;
use std::path::Path;

use polars::prelude::{AnyValue, CsvWriter, DataFrame, SerWriter};
use serde_json::{Map, Number, Value};
use tds_transform::{any_to_f64, any_to_string};
use tracing::{debug, instrument};

use crate::error::{ExportError, Result};

/// Decimal places written for amount columns.
pub const AMOUNT_PRECISION: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Encodes `df` in the requested format.
pub fn encode(df: &DataFrame, format: ExportFormat) -> Result<Vec<u8>> {
    match format {
        ExportFormat::Csv => encode_csv(df),
        ExportFormat::Json => encode_json(df),
    }
}

/// Writes the table as CSV with a header row. Nulls become empty cells.
///
/// Floats are written with [`AMOUNT_PRECISION`] decimals, matching the rupee
/// amounts of the export; JSON keeps the parsed value unrounded.
#[instrument(level = "debug", skip_all, fields(rows = df.height()))]
pub fn encode_csv(df: &DataFrame) -> Result<Vec<u8>> {
    let mut buffer: Vec<u8> = Vec::new();
    // CsvWriter::finish needs a mutable frame.
    let mut frame = df.clone();
    CsvWriter::new(&mut buffer)
        .include_header(true)
        .with_float_precision(Some(AMOUNT_PRECISION))
        .with_null_value(String::new())
        .finish(&mut frame)?;
    debug!(bytes = buffer.len(), "encoded csv");
    Ok(buffer)
}

/// Writes the table as a JSON array of objects in column order.
#[instrument(level = "debug", skip_all, fields(rows = df.height()))]
pub fn encode_json(df: &DataFrame) -> Result<Vec<u8>> {
    let columns = df.get_columns();
    let mut rows: Vec<Value> = Vec::with_capacity(df.height());
    for index in 0..df.height() {
        let mut row = Map::with_capacity(columns.len());
        for column in columns {
            let value = json_value(column.get(index)?);
            row.insert(column.name().to_string(), value);
        }
        rows.push(Value::Object(row));
    }
    let bytes = serde_json::to_vec_pretty(&Value::Array(rows))?;
    debug!(bytes = bytes.len(), "encoded json");
    Ok(bytes)
}

fn json_value(value: AnyValue<'_>) -> Value {
    match value {
        AnyValue::Null => Value::Null,
        AnyValue::Int32(v) => Value::from(v),
        AnyValue::Int64(v) => Value::from(v),
        AnyValue::UInt32(v) => Value::from(v),
        AnyValue::UInt64(v) => Value::from(v),
        AnyValue::Float32(_) | AnyValue::Float64(_) => any_to_f64(value)
            .and_then(Number::from_f64)
            .map_or(Value::Null, Value::Number),
        other => Value::String(any_to_string(other)),
    }
}

/// Writes encoded bytes to `path`, creating parent directories.
pub fn write_export(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ExportError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, bytes).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "wrote export");
    Ok(())
}
