//! Data model for TDS statement conversion.

pub mod error;
pub mod layout;
pub mod record;

pub use error::{ConvertError, Result};
pub use layout::StatementLayout;
pub use record::{DeductorIdentity, ExtractStats, Record, RecordSet, RejectKind};
