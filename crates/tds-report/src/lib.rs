//! Export of assembled TDS statement tables.
//!
//! - **CSV**: header row plus one line per transaction, amounts with two
//!   decimals, missing amounts as empty cells
//! - **JSON**: array of row objects keyed by column name
//!
//! Encoded bytes can be memoized per table content with [`ExportCache`].

mod cache;
mod encode;
mod error;
mod fingerprint;

pub use cache::ExportCache;
pub use encode::{ExportFormat, encode, encode_csv, encode_json, write_export};
pub use error::{ExportError, Result};
pub use fingerprint::table_fingerprint;
