use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::layout::IDENTITY_FIELD_COUNT;

/// Identity of one deductor block, read from the block's first line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductorIdentity {
    pub block_id: String,
    pub deductor_name: String,
    pub tan: String,
}

impl DeductorIdentity {
    pub fn fields(&self) -> [&str; IDENTITY_FIELD_COUNT] {
        [&self.block_id, &self.deductor_name, &self.tan]
    }
}

/// One flattened, identity-prefixed transaction row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    values: Vec<String>,
}

impl Record {
    pub fn new(identity: &DeductorIdentity, fields: Vec<String>) -> Self {
        let mut values = Vec::with_capacity(IDENTITY_FIELD_COUNT + fields.len());
        values.extend(identity.fields().iter().map(|value| (*value).to_string()));
        values.extend(fields);
        Self { values }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn identity(&self) -> &[String] {
        &self.values[..IDENTITY_FIELD_COUNT.min(self.values.len())]
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Why a line inside a block did not become a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectKind {
    /// No header captured yet.
    HeaderPending,
    /// Only separators on the line.
    Empty,
    /// First field is not a run of decimal digits.
    NonNumericSerial,
    /// Field count differs from the header length.
    FieldCountMismatch,
}

impl RejectKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RejectKind::HeaderPending => "header pending",
            RejectKind::Empty => "empty",
            RejectKind::NonNumericSerial => "non-numeric serial",
            RejectKind::FieldCountMismatch => "field count mismatch",
        }
    }
}

/// Counters collected while extracting records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractStats {
    pub blocks: usize,
    pub skipped_blocks: usize,
    pub records: usize,
    pub rejected: BTreeMap<RejectKind, usize>,
}

impl ExtractStats {
    pub fn reject(&mut self, kind: RejectKind) {
        *self.rejected.entry(kind).or_insert(0) += 1;
    }

    pub fn rejected_total(&self) -> usize {
        self.rejected.values().sum()
    }
}

/// Header plus the records extracted under it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordSet {
    pub header: Vec<String>,
    pub records: Vec<Record>,
    pub stats: ExtractStats,
}

impl RecordSet {
    /// Number of distinct deductor identities, in order of first appearance.
    pub fn deductor_count(&self) -> usize {
        let mut seen: Vec<&[String]> = Vec::new();
        for record in &self.records {
            let identity = record.identity();
            if !seen.contains(&identity) {
                seen.push(identity);
            }
        }
        seen.len()
    }
}
