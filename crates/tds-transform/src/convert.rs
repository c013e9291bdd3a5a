//! End-to-end conversion facade over ingest and assembly.

use std::path::Path;
use std::time::Instant;

use polars::prelude::DataFrame;
use tds_ingest::{ingest_statement, read_statement};
use tds_model::{ExtractStats, Result, StatementLayout};
use tracing::{info, info_span};

use crate::assemble::{AssembleOptions, assemble};

/// Result of a successful statement conversion.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub table: DataFrame,
    pub header: Vec<String>,
    pub stats: ExtractStats,
    /// Distinct deductor identities (number, name, TAN) among the rows.
    pub deductors: usize,
}

/// Runs the full pipeline over decoded statement text.
pub fn convert(text: &str, layout: &StatementLayout) -> Result<Conversion> {
    let start = Instant::now();
    let record_set = info_span!("ingest").in_scope(|| ingest_statement(text, layout))?;
    let options = AssembleOptions::from_layout(layout);
    let table = info_span!("assemble").in_scope(|| assemble(&record_set, &options))?;
    let deductors = record_set.deductor_count();
    info!(
        rows = table.height(),
        deductors,
        duration_ms = start.elapsed().as_millis(),
        "conversion complete"
    );
    Ok(Conversion {
        table,
        header: record_set.header,
        stats: record_set.stats,
        deductors,
    })
}

/// Reads a statement file and converts it.
pub fn convert_file(path: &Path, layout: &StatementLayout) -> Result<Conversion> {
    let text = read_statement(path)?;
    convert(&text, layout)
}
