use std::path::PathBuf;

use polars::prelude::DataFrame;
use tds_model::ExtractStats;
use tds_report::ExportFormat;

#[derive(Debug)]
pub struct ConvertResult {
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: ExportFormat,
    pub table: DataFrame,
    pub stats: ExtractStats,
    pub deductors: usize,
    /// Bytes written, or `None` for a dry run.
    pub written: Option<usize>,
}

#[derive(Debug)]
pub struct InspectResult {
    pub input: PathBuf,
    pub header: Vec<String>,
    pub stats: ExtractStats,
    pub deductors: usize,
}
