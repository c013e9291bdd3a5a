//! TDS statement ingestion.
//!
//! Turns the raw `^`-delimited Form 26AS text export into a header and a
//! list of identity-prefixed transaction records.
//!
//! # Stages
//!
//! 1. **Normalize**: insert the blank line the export sometimes omits after
//!    the per-deductor summary header ([`normalize`]).
//! 2. **Split**: locate the section marker and tag the first header line
//!    ([`split_sections`]).
//! 3. **Extract**: split the section into deductor blocks and keep the rows
//!    that match the header ([`extract_records`]).
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use tds_ingest::{ingest_statement, read_statement};
//! use tds_model::StatementLayout;
//!
//! let text = read_statement(Path::new("26AS.txt"))?;
//! let records = ingest_statement(&text, &StatementLayout::form_26as())?;
//! println!("{} records under {:?}", records.records.len(), records.header);
//! ```

mod extract;
mod intake;
mod normalize;
mod section;
mod tokenize;

use tds_model::{RecordSet, Result, StatementLayout};
use tracing::info_span;

// === Intake ===
pub use intake::{canonicalize_line_endings, decode_statement, read_statement};

// === Pipeline Stages ===
pub use extract::{extract_records, parse_identity, split_blocks};
pub use normalize::normalize;
pub use section::{HEADER_SEPARATOR_LINE, SectionSplit, section_body, split_sections};

// === Line Classification ===
pub use tokenize::{HeaderState, LineKind, RejectReason, classify_line, is_serial, tokenize_fields};

/// Runs normalize, split and extract over a decoded statement.
///
/// Line endings are canonicalized first, so in-memory `\r\n` text splits
/// into the same blocks as text read through [`read_statement`].
pub fn ingest_statement(text: &str, layout: &StatementLayout) -> Result<RecordSet> {
    let text = canonicalize_line_endings(text);
    let normalized =
        info_span!("normalize").in_scope(|| normalize(&text, &layout.summary_header_line));
    let split = info_span!("split").in_scope(|| {
        split_sections(&normalized, &layout.section_marker, &layout.header_marker)
    })?;
    extract_records(&split.recombine(), layout)
}
