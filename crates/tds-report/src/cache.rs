//! Memoized table encodings.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use polars::prelude::DataFrame;
use tracing::debug;

use crate::encode::{ExportFormat, encode};
use crate::error::Result;
use crate::fingerprint::table_fingerprint;

/// Encoded exports keyed by table fingerprint and format.
///
/// Re-exporting an unchanged table in the same format returns the cached
/// bytes without re-encoding.
#[derive(Debug, Default)]
pub struct ExportCache {
    entries: HashMap<(String, ExportFormat), Vec<u8>>,
}

impl ExportCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_encode(&mut self, df: &DataFrame, format: ExportFormat) -> Result<&[u8]> {
        let bytes = match self.entries.entry((table_fingerprint(df), format)) {
            Entry::Occupied(entry) => {
                debug!(fingerprint = %entry.key().0, format = format.extension(), "export cache hit");
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(encode(df, format)?),
        };
        Ok(bytes.as_slice())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
