//! Section discovery and header tagging.

use tds_model::{ConvertError, Result};
use tracing::debug;

/// Separator line placed after the header so it forms its own block.
pub const HEADER_SEPARATOR_LINE: &str = " ";

/// Statement text split around the section marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSplit {
    /// Text before the first marker.
    pub preamble: String,
    /// Trimmed section text with the header separator inserted.
    pub body: String,
    pub marker: String,
    /// Whether a header line was found and tagged.
    pub header_tagged: bool,
}

impl SectionSplit {
    /// Joins preamble, marker and body back into one document.
    pub fn recombine(&self) -> String {
        let mut out =
            String::with_capacity(self.preamble.len() + self.marker.len() + self.body.len());
        out.push_str(&self.preamble);
        out.push_str(&self.marker);
        out.push_str(&self.body);
        out
    }
}

/// Text after the first `marker`, stopping at a second occurrence if any.
pub fn section_body<'a>(text: &'a str, marker: &str) -> Option<&'a str> {
    let (_, rest) = text.split_once(marker)?;
    Some(match rest.find(marker) {
        Some(end) => &rest[..end],
        None => rest,
    })
}

/// Splits `text` at `section_marker` and tags the first line containing
/// `header_marker` by inserting [`HEADER_SEPARATOR_LINE`] after it.
pub fn split_sections(text: &str, section_marker: &str, header_marker: &str) -> Result<SectionSplit> {
    let Some((preamble, _)) = text.split_once(section_marker) else {
        return Err(ConvertError::MissingSection {
            marker: section_marker.to_string(),
        });
    };
    let raw_body = section_body(text, section_marker).unwrap_or_default();

    let mut lines: Vec<&str> = Vec::new();
    let mut header_tagged = false;
    for line in raw_body.trim().split('\n') {
        lines.push(line);
        if !header_tagged && line.contains(header_marker) {
            lines.push(HEADER_SEPARATOR_LINE);
            header_tagged = true;
        }
    }
    debug!(
        preamble_bytes = preamble.len(),
        lines = lines.len(),
        header_tagged,
        "split statement section"
    );

    Ok(SectionSplit {
        preamble: preamble.to_string(),
        body: lines.join("\n"),
        marker: section_marker.to_string(),
        header_tagged,
    })
}
