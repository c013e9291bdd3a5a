//! Record extraction from a tagged statement section.

use tds_model::layout::{FIELD_SEPARATOR, IDENTITY_FIELD_COUNT};
use tds_model::{
    ConvertError, DeductorIdentity, ExtractStats, Record, RecordSet, Result, StatementLayout,
};
use tracing::{debug, info, instrument, trace};

use crate::section::section_body;
use crate::tokenize::{HeaderState, LineKind, classify_line};

/// Splits a section body into trimmed, non-empty blocks at blank lines.
pub fn split_blocks(body: &str) -> Vec<&str> {
    body.split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Reads the identity triple from a block's first line.
///
/// Returns `None` for lines with fewer than three `^` fields or an empty
/// first field; such blocks carry no deductor.
pub fn parse_identity(line: &str) -> Option<DeductorIdentity> {
    let mut fields = line.split(FIELD_SEPARATOR);
    let block_id = fields.next()?;
    let deductor_name = fields.next()?;
    let tan = fields.next()?;
    if block_id.is_empty() {
        return None;
    }
    Some(DeductorIdentity {
        block_id: block_id.to_string(),
        deductor_name: deductor_name.to_string(),
        tan: tan.to_string(),
    })
}

/// Extracts the header and identity-prefixed records from a section text
/// produced by [`crate::split_sections`].
#[instrument(level = "info", skip_all)]
pub fn extract_records(section_text: &str, layout: &StatementLayout) -> Result<RecordSet> {
    let body = section_body(section_text, &layout.section_marker).ok_or_else(|| {
        ConvertError::MissingSection {
            marker: layout.section_marker.clone(),
        }
    })?;

    let mut state = HeaderState::default();
    let mut records = Vec::new();
    let mut stats = ExtractStats::default();

    for (block_index, block) in split_blocks(body).into_iter().enumerate() {
        stats.blocks += 1;
        let mut lines = block.split('\n');
        let first = lines.next().unwrap_or_default();
        let Some(identity) = parse_identity(first) else {
            stats.skipped_blocks += 1;
            debug!(block_index, "skipped block without deductor identity");
            continue;
        };

        for (line_index, line) in lines.enumerate() {
            match classify_line(line, &state, &layout.header_marker) {
                LineKind::Blank => {}
                LineKind::Header(header) => {
                    debug!(block_index, columns = header.len(), "captured header row");
                    state.capture(header);
                }
                LineKind::Transaction(fields) => {
                    records.push(Record::new(&identity, fields));
                }
                LineKind::Rejected(reason) => {
                    trace!(block_index, line_index, reason = ?reason, "rejected line");
                    stats.reject(reason.kind());
                }
            }
        }
    }

    let header = state.into_header().ok_or(ConvertError::MissingHeader)?;
    stats.records = records.len();
    info!(
        blocks = stats.blocks,
        skipped_blocks = stats.skipped_blocks,
        records = stats.records,
        rejected = stats.rejected_total(),
        columns = header.len() + IDENTITY_FIELD_COUNT,
        "extracted records"
    );
    Ok(RecordSet {
        header,
        records,
        stats,
    })
}
