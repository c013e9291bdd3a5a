//! DataFrame construction from extracted statement records.
//!
//! The assembled table has one row per transaction record:
//!
//! 1. identity column names are prepended to the detected header;
//! 2. amount columns are coerced to `Float64` (unparseable cells become null);
//! 3. transient columns (deductor number, source serial) are dropped,
//!    including any repeats of those names in the header;
//! 4. a fresh 1-based serial column is inserted first.

use polars::prelude::{Column, DataFrame, NamedFrom, Series};
use tds_model::{RecordSet, Result, StatementLayout};
use tracing::{debug, info, instrument, warn};

use crate::numeric::parse_amount;

/// Column names and coercion rules applied during assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembleOptions {
    pub identity_columns: Vec<String>,
    pub numeric_columns: Vec<String>,
    pub drop_columns: Vec<String>,
    /// Name of the regenerated serial column.
    pub serial_column: String,
}

impl AssembleOptions {
    pub fn from_layout(layout: &StatementLayout) -> Self {
        Self {
            identity_columns: layout.identity_columns.to_vec(),
            numeric_columns: layout.numeric_columns.clone(),
            drop_columns: layout.drop_columns.clone(),
            serial_column: layout.serial_column.clone(),
        }
    }
}

impl Default for AssembleOptions {
    fn default() -> Self {
        Self::from_layout(&StatementLayout::form_26as())
    }
}

/// Makes column names unique by suffixing repeats: `Remarks`, `Remarks (2)`.
pub fn unique_column_names(names: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(names.len());
    for name in names {
        if !out.contains(&name) {
            out.push(name);
            continue;
        }
        let mut suffix = 2usize;
        let mut candidate = format!("{name} ({suffix})");
        while out.contains(&candidate) {
            suffix += 1;
            candidate = format!("{name} ({suffix})");
        }
        warn!(column = %name, renamed = %candidate, "duplicate column name");
        out.push(candidate);
    }
    out
}

/// Builds the statement table from a record set.
#[instrument(level = "info", skip_all, fields(records = record_set.records.len()))]
pub fn assemble(record_set: &RecordSet, options: &AssembleOptions) -> Result<DataFrame> {
    // Drop by source name so every repeat of a dropped column goes too.
    let kept: Vec<(usize, &String)> = options
        .identity_columns
        .iter()
        .chain(record_set.header.iter())
        .enumerate()
        .filter(|(_, name)| {
            **name != options.serial_column && !options.drop_columns.contains(*name)
        })
        .collect();
    let dropped = options.identity_columns.len() + record_set.header.len() - kept.len();
    if dropped > 0 {
        debug!(dropped, "dropped transient columns");
    }
    let names = unique_column_names(kept.iter().map(|(_, name)| (*name).clone()).collect());

    let mut columns: Vec<Column> = Vec::with_capacity(names.len());
    for ((index, _), name) in kept.iter().zip(&names) {
        let cells = record_set
            .records
            .iter()
            .map(|record| record.values().get(*index).map(String::as_str).unwrap_or(""));
        if options.numeric_columns.contains(name) {
            let values: Vec<Option<f64>> = cells.map(parse_amount).collect();
            let nulls = values.iter().filter(|value| value.is_none()).count();
            if nulls > 0 {
                debug!(column = %name, nulls, "coerced unparseable amounts to null");
            }
            columns.push(Series::new(name.as_str().into(), values).into());
        } else {
            let values: Vec<String> = cells.map(str::to_string).collect();
            columns.push(Series::new(name.as_str().into(), values).into());
        }
    }
    let mut df = DataFrame::new(columns)?;

    let serial: Vec<i64> = (1_i64..).take(df.height()).collect();
    df.insert_column(0, Series::new(options.serial_column.as_str().into(), serial))?;

    info!(rows = df.height(), columns = df.width(), "assembled table");
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::DataType;
    use tds_model::{DeductorIdentity, ExtractStats, Record};

    fn identity(id: &str, name: &str) -> DeductorIdentity {
        DeductorIdentity {
            block_id: id.to_string(),
            deductor_name: name.to_string(),
            tan: format!("TAN{id}"),
        }
    }

    fn fields(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_string()).collect()
    }

    fn record_set() -> RecordSet {
        RecordSet {
            header: fields(&["Sr. No.", "Section", "Amount Paid / Credited(Rs.)", "Tax Deducted(Rs.)"]),
            records: vec![
                Record::new(&identity("1", "Acme"), fields(&["7", "192", "1,000.00", "100.00"])),
                Record::new(&identity("1", "Acme"), fields(&["7", "192", "-", "50"])),
                Record::new(&identity("2", "Beta"), fields(&["3", "194A", "250.50", "x"])),
            ],
            stats: ExtractStats::default(),
        }
    }

    #[test]
    fn test_columns_and_order() {
        let df = assemble(&record_set(), &AssembleOptions::default()).expect("assemble");
        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "Sr. No.",
                "Name of Deductor",
                "TAN of Deductor",
                "Section",
                "Amount Paid / Credited(Rs.)",
                "Tax Deducted(Rs.)"
            ]
        );
    }

    #[test]
    fn test_serial_is_regenerated() {
        let df = assemble(&record_set(), &AssembleOptions::default()).expect("assemble");
        let serial = df.column("Sr. No.").unwrap();
        assert_eq!(serial.dtype(), &DataType::Int64);
        let values: Vec<Option<i64>> = serial.i64().unwrap().into_iter().collect();
        assert_eq!(values, vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn test_numeric_coercion_nulls() {
        let df = assemble(&record_set(), &AssembleOptions::default()).expect("assemble");
        let amount = df.column("Amount Paid / Credited(Rs.)").unwrap();
        assert_eq!(amount.dtype(), &DataType::Float64);
        let values: Vec<Option<f64>> = amount.f64().unwrap().into_iter().collect();
        assert_eq!(values, vec![Some(1000.0), None, Some(250.5)]);
        let tax: Vec<Option<f64>> = df
            .column("Tax Deducted(Rs.)")
            .unwrap()
            .f64()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(tax, vec![Some(100.0), Some(50.0), None]);
    }

    #[test]
    fn test_empty_record_set() {
        let set = RecordSet {
            header: fields(&["Sr. No.", "Amount Paid / Credited(Rs.)"]),
            records: Vec::new(),
            stats: ExtractStats::default(),
        };
        let df = assemble(&set, &AssembleOptions::default()).expect("assemble");
        assert_eq!(df.height(), 0);
        assert_eq!(df.width(), 4);
    }

    #[test]
    fn test_absent_drop_columns_ignored() {
        let options = AssembleOptions {
            drop_columns: vec!["Not There".to_string()],
            ..AssembleOptions::default()
        };
        let df = assemble(&record_set(), &options).expect("assemble");
        assert!(df.column("Deductor Number").is_ok());
        assert_eq!(df.get_column_names()[0].as_str(), "Sr. No.");
    }

    #[test]
    fn test_repeated_serial_header_is_dropped() {
        let set = RecordSet {
            header: fields(&["Sr. No.", "Section", "Sr. No.", "Amount Paid / Credited(Rs.)"]),
            records: vec![Record::new(
                &identity("1", "Acme"),
                fields(&["1", "192", "1", "10.00"]),
            )],
            stats: ExtractStats::default(),
        };
        let df = assemble(&set, &AssembleOptions::default()).expect("assemble");
        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "Sr. No.",
                "Name of Deductor",
                "TAN of Deductor",
                "Section",
                "Amount Paid / Credited(Rs.)"
            ]
        );
        let amount: Vec<Option<f64>> = df
            .column("Amount Paid / Credited(Rs.)")
            .unwrap()
            .f64()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(amount, vec![Some(10.0)]);
    }

    #[test]
    fn test_unique_column_names() {
        let names = unique_column_names(fields(&["A", "B", "A", "A"]));
        assert_eq!(names, vec!["A", "B", "A (2)", "A (3)"]);
    }
}
