//! Statement file intake.

use std::fs;
use std::path::Path;

use tds_model::{ConvertError, Result};
use tracing::debug;

const UTF8_BOM: char = '\u{feff}';

/// Reads a statement file into text with canonical `\n` line endings.
pub fn read_statement(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| ConvertError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read statement");
    decode_bytes(bytes).ok_or_else(|| ConvertError::InvalidUtf8 {
        path: path.to_path_buf(),
    })
}

/// Decodes uploaded statement bytes; `None` if they are not UTF-8.
pub fn decode_statement(bytes: &[u8]) -> Option<String> {
    decode_bytes(bytes.to_vec())
}

fn decode_bytes(bytes: Vec<u8>) -> Option<String> {
    let text = String::from_utf8(bytes).ok()?;
    let text = text.strip_prefix(UTF8_BOM).unwrap_or(&text);
    Some(canonicalize_line_endings(text))
}

/// Rewrites `\r\n` and lone `\r` as `\n`.
pub fn canonicalize_line_endings(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            out.push('\n');
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonicalize_crlf() {
        assert_eq!(canonicalize_line_endings("a\r\nb\r\n\r\nc"), "a\nb\n\nc");
    }

    #[test]
    fn test_canonicalize_lone_cr() {
        assert_eq!(canonicalize_line_endings("a\rb"), "a\nb");
    }

    #[test]
    fn test_canonicalize_passthrough() {
        assert_eq!(canonicalize_line_endings("a\nb"), "a\nb");
    }

    #[test]
    fn test_decode_strips_bom() {
        let bytes = "\u{feff}header\r\nrow".as_bytes();
        assert_eq!(decode_statement(bytes).as_deref(), Some("header\nrow"));
    }

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        assert!(decode_statement(&[0xff, 0xfe, 0x00]).is_none());
    }
}
