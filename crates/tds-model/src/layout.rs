//! Structural literals of the Form 26AS text export.
//!
//! These strings must match the source format exactly, including the
//! embedded `^` separators and spacing.

use serde::{Deserialize, Serialize};

/// Field separator used on every line of the export.
pub const FIELD_SEPARATOR: char = '^';

/// Marker that opens the TDS section of the statement.
pub const SECTION_MARKER: &str = "^PART-I - Details of Tax Deducted at Source^";

/// Substring identifying a column-header line.
pub const HEADER_MARKER: &str = "Sr. No.";

/// Per-deductor summary header; the export sometimes omits the blank line after it.
pub const SUMMARY_HEADER_LINE: &str = "Sr. No.^Name of Deductor^TAN of Deductor^^^^^Total Amount Paid / Credited(Rs.)^Total Tax Deducted(Rs.)^Total TDS Deposited(Rs.)";

pub const DEDUCTOR_NUMBER_COLUMN: &str = "Deductor Number";
pub const DEDUCTOR_NAME_COLUMN: &str = "Name of Deductor";
pub const DEDUCTOR_TAN_COLUMN: &str = "TAN of Deductor";

/// Serial column, both as extracted from the source and as regenerated.
pub const SERIAL_COLUMN: &str = "Sr. No.";

pub const AMOUNT_PAID_COLUMN: &str = "Amount Paid / Credited(Rs.)";
pub const TAX_DEDUCTED_COLUMN: &str = "Tax Deducted(Rs.)";
pub const TDS_DEPOSITED_COLUMN: &str = "TDS Deposited(Rs.)";

/// Number of identity fields read from a block's first line.
pub const IDENTITY_FIELD_COUNT: usize = 3;

/// Every literal the conversion pipeline depends on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementLayout {
    pub section_marker: String,
    pub header_marker: String,
    pub summary_header_line: String,
    /// Column names for the block identity triple, in field order.
    pub identity_columns: [String; IDENTITY_FIELD_COUNT],
    pub numeric_columns: Vec<String>,
    /// Dropped after assembly; absent names are ignored.
    pub drop_columns: Vec<String>,
    pub serial_column: String,
}

impl StatementLayout {
    /// Layout of the Form 26AS "Part I" text export.
    pub fn form_26as() -> Self {
        Self {
            section_marker: SECTION_MARKER.to_string(),
            header_marker: HEADER_MARKER.to_string(),
            summary_header_line: SUMMARY_HEADER_LINE.to_string(),
            identity_columns: [
                DEDUCTOR_NUMBER_COLUMN.to_string(),
                DEDUCTOR_NAME_COLUMN.to_string(),
                DEDUCTOR_TAN_COLUMN.to_string(),
            ],
            numeric_columns: vec![
                AMOUNT_PAID_COLUMN.to_string(),
                TAX_DEDUCTED_COLUMN.to_string(),
                TDS_DEPOSITED_COLUMN.to_string(),
            ],
            drop_columns: vec![
                DEDUCTOR_NUMBER_COLUMN.to_string(),
                SERIAL_COLUMN.to_string(),
            ],
            serial_column: SERIAL_COLUMN.to_string(),
        }
    }
}

impl Default for StatementLayout {
    fn default() -> Self {
        Self::form_26as()
    }
}
