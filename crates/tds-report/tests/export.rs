//! Export tests over a converted statement.

use serde_json::Value;
use tds_model::StatementLayout;
use tds_report::{
    ExportCache, ExportError, ExportFormat, encode_csv, encode_json, table_fingerprint,
    write_export,
};
use tds_transform::convert;
use tempfile::tempdir;

const SAMPLE: &str = include_str!("../../tds-transform/tests/fixtures/form26as_sample.txt");

fn sample_table() -> polars::prelude::DataFrame {
    convert(SAMPLE, &StatementLayout::default())
        .expect("convert sample")
        .table
}

#[test]
fn sample_csv_export() {
    let csv = String::from_utf8(encode_csv(&sample_table()).unwrap()).unwrap();
    insta::assert_snapshot!(csv, @r"
    Sr. No.,Name of Deductor,TAN of Deductor,Section,Transaction Date,Status of Booking,Date of Booking,Remarks,Amount Paid / Credited(Rs.),Tax Deducted(Rs.),TDS Deposited(Rs.)
    1,ACME SOFTWARE PRIVATE LIMITED,BLRA12345B,192,30-Jun-2023,F,15-Jul-2023,-,60000.00,6000.00,6000.00
    2,ACME SOFTWARE PRIVATE LIMITED,BLRA12345B,192,30-Sep-2023,F,15-Oct-2023,-,60000.00,6000.00,6000.00
    3,STATE BANK OF INDIA,MUMS12345C,194A,31-Mar-2024,F,15-May-2024,-,5230.00,523.00,
    ");
}

#[test]
fn sample_json_export() {
    let json: Value = serde_json::from_slice(&encode_json(&sample_table()).unwrap()).unwrap();
    let rows = json.as_array().expect("array");
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["Sr. No."], Value::from(1));
    assert_eq!(rows[0]["Name of Deductor"], "ACME SOFTWARE PRIVATE LIMITED");
    assert_eq!(rows[0]["Amount Paid / Credited(Rs.)"], Value::from(60000.0));
    assert_eq!(rows[2]["Section"], "194A");
    assert_eq!(rows[2]["TDS Deposited(Rs.)"], Value::Null);
}

#[test]
fn cache_is_keyed_by_content() {
    let table = sample_table();
    let mut cache = ExportCache::new();
    let csv = cache.get_or_encode(&table, ExportFormat::Csv).unwrap().to_vec();
    assert_eq!(csv, encode_csv(&table).unwrap());

    let again = sample_table();
    assert_eq!(table_fingerprint(&table), table_fingerprint(&again));
    cache.get_or_encode(&again, ExportFormat::Csv).unwrap();
    assert_eq!(cache.len(), 1);

    let shorter = table.head(Some(2));
    cache.get_or_encode(&shorter, ExportFormat::Csv).unwrap();
    assert_eq!(cache.len(), 2);
}

#[test]
fn write_export_creates_parent_dirs() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out/nested/Individual_data.csv");
    let bytes = encode_csv(&sample_table()).unwrap();
    write_export(&path, &bytes).unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), bytes);
}

#[test]
fn write_export_reports_path() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"x").unwrap();
    let err = write_export(&blocker.join("out.csv"), b"data").unwrap_err();
    assert!(matches!(err, ExportError::Write { .. }));
}
