//! Output path resolution.

use std::path::{Path, PathBuf};

use tds_report::ExportFormat;

/// Suffix appended to the input file stem for the default output name.
pub const OUTPUT_SUFFIX: &str = "_data";

/// Fallback stem when the input path has none.
const DEFAULT_STEM: &str = "statement";

/// `<dir>/<stem>_data.<ext>` next to `input`.
pub fn default_output_path(input: &Path, format: ExportFormat) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| DEFAULT_STEM.to_string());
    let name = format!("{stem}{OUTPUT_SUFFIX}.{}", format.extension());
    match input.parent() {
        Some(parent) => parent.join(name),
        None => PathBuf::from(name),
    }
}
