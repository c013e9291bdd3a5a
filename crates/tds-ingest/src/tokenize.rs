//! Line tokenizer and classifier for block bodies.
//!
//! Each non-identity line of a block is classified on its own, given only
//! the header captured so far. Lines that are neither the header nor a
//! transaction row are rejected with a reason and dropped by the caller;
//! this is how subtotal lines and stray separators are filtered out.

use tds_model::RejectKind;
use tds_model::layout::FIELD_SEPARATOR;

/// Splits a line on `^`, trims every field and drops empty fields.
pub fn tokenize_fields(line: &str) -> Vec<String> {
    line.split(FIELD_SEPARATOR)
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(str::to_string)
        .collect()
}

/// True for a non-empty run of ASCII decimal digits.
///
/// Other Unicode digits are rejected; the export only writes ASCII serials.
pub fn is_serial(field: &str) -> bool {
    !field.is_empty() && field.bytes().all(|byte| byte.is_ascii_digit())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    HeaderPending,
    Empty,
    NonNumericSerial,
    FieldCountMismatch { expected: usize, found: usize },
}

impl RejectReason {
    pub fn kind(self) -> RejectKind {
        match self {
            RejectReason::HeaderPending => RejectKind::HeaderPending,
            RejectReason::Empty => RejectKind::Empty,
            RejectReason::NonNumericSerial => RejectKind::NonNumericSerial,
            RejectReason::FieldCountMismatch { .. } => RejectKind::FieldCountMismatch,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Whitespace only.
    Blank,
    /// Column-header line; becomes the document header.
    Header(Vec<String>),
    /// Transaction row with exactly as many fields as the header.
    Transaction(Vec<String>),
    Rejected(RejectReason),
}

/// Header discovery state, one per document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum HeaderState {
    #[default]
    SeekingHeader,
    HeaderFound(Vec<String>),
}

impl HeaderState {
    pub fn header(&self) -> Option<&[String]> {
        match self {
            HeaderState::SeekingHeader => None,
            HeaderState::HeaderFound(header) => Some(header),
        }
    }

    /// Captures `header`; a header already found is kept.
    pub fn capture(&mut self, header: Vec<String>) {
        if matches!(self, HeaderState::SeekingHeader) {
            *self = HeaderState::HeaderFound(header);
        }
    }

    pub fn into_header(self) -> Option<Vec<String>> {
        match self {
            HeaderState::SeekingHeader => None,
            HeaderState::HeaderFound(header) => Some(header),
        }
    }
}

/// Classifies one block line.
///
/// A header is recognised only while `state` is still seeking, and only when
/// one of the trimmed fields equals `header_marker` exactly.
pub fn classify_line(line: &str, state: &HeaderState, header_marker: &str) -> LineKind {
    if line.trim().is_empty() {
        return LineKind::Blank;
    }
    let fields = tokenize_fields(line);
    let Some(header) = state.header() else {
        if fields.iter().any(|field| field == header_marker) {
            return LineKind::Header(fields);
        }
        return LineKind::Rejected(RejectReason::HeaderPending);
    };
    let Some(first) = fields.first() else {
        return LineKind::Rejected(RejectReason::Empty);
    };
    if !is_serial(first) {
        return LineKind::Rejected(RejectReason::NonNumericSerial);
    }
    if fields.len() != header.len() {
        return LineKind::Rejected(RejectReason::FieldCountMismatch {
            expected: header.len(),
            found: fields.len(),
        });
    }
    LineKind::Transaction(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKER: &str = "Sr. No.";

    fn found(header: &[&str]) -> HeaderState {
        HeaderState::HeaderFound(header.iter().map(|s| (*s).to_string()).collect())
    }

    #[test]
    fn test_tokenize_drops_empty_and_trims() {
        assert_eq!(
            tokenize_fields("^ 1 ^194C^^^ 100.00 ^"),
            vec!["1", "194C", "100.00"]
        );
        assert!(tokenize_fields("^^^").is_empty());
    }

    #[test]
    fn test_is_serial() {
        assert!(is_serial("12"));
        assert!(is_serial("007"));
        assert!(!is_serial(""));
        assert!(!is_serial("1a"));
        assert!(!is_serial("१२"));
        assert!(!is_serial("-1"));
        assert!(!is_serial("1.0"));
    }

    #[test]
    fn test_blank_line() {
        let state = HeaderState::default();
        assert_eq!(classify_line("   ", &state, MARKER), LineKind::Blank);
    }

    #[test]
    fn test_header_requires_exact_field() {
        let state = HeaderState::default();
        assert_eq!(
            classify_line("^Sr. No.^Section^Amount", &state, MARKER),
            LineKind::Header(vec![
                "Sr. No.".to_string(),
                "Section".to_string(),
                "Amount".to_string()
            ])
        );
        assert_eq!(
            classify_line("Sr. No. and more^x", &state, MARKER),
            LineKind::Rejected(RejectReason::HeaderPending)
        );
    }

    #[test]
    fn test_rows_before_header_are_rejected() {
        let state = HeaderState::default();
        assert_eq!(
            classify_line("1^a^b", &state, MARKER),
            LineKind::Rejected(RejectReason::HeaderPending)
        );
    }

    #[test]
    fn test_header_not_recaptured() {
        let state = found(&["Sr. No.", "A"]);
        assert_eq!(
            classify_line("Sr. No.^A", &state, MARKER),
            LineKind::Rejected(RejectReason::NonNumericSerial)
        );
    }

    #[test]
    fn test_transaction_row() {
        let state = found(&["Sr. No.", "A", "B"]);
        assert_eq!(
            classify_line("^1^x^^y^", &state, MARKER),
            LineKind::Transaction(vec!["1".to_string(), "x".to_string(), "y".to_string()])
        );
    }

    #[test]
    fn test_field_count_mismatch() {
        let state = found(&["Sr. No.", "A", "B"]);
        assert_eq!(
            classify_line("1^x", &state, MARKER),
            LineKind::Rejected(RejectReason::FieldCountMismatch {
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_separator_only_line() {
        let state = found(&["Sr. No."]);
        assert_eq!(
            classify_line("^^^", &state, MARKER),
            LineKind::Rejected(RejectReason::Empty)
        );
    }

    #[test]
    fn test_subtotal_line_rejected() {
        let state = found(&["Sr. No.", "A", "B"]);
        assert_eq!(
            classify_line("^Total^^500.00^50.00", &state, MARKER),
            LineKind::Rejected(RejectReason::NonNumericSerial)
        );
    }

    #[test]
    fn test_capture_is_one_way() {
        let mut state = HeaderState::default();
        state.capture(vec!["Sr. No.".to_string()]);
        state.capture(vec!["Other".to_string()]);
        assert_eq!(state.header(), Some(&["Sr. No.".to_string()][..]));
    }
}
