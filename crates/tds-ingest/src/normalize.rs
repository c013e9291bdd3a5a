//! Structural repair of the raw export.

use tracing::debug;

/// Inserts an empty line after every line whose trimmed content equals the
/// trimmed `marker_line`.
///
/// Every input line is emitted followed by `\n`, so the output always ends
/// with a newline. The export sometimes drops the blank separator after the
/// per-deductor summary header; block splitting depends on it.
pub fn normalize(text: &str, marker_line: &str) -> String {
    let marker = marker_line.trim();
    let mut out = String::with_capacity(text.len() + 64);
    let mut inserted = 0usize;
    for line in text.split('\n') {
        out.push_str(line);
        out.push('\n');
        if line.trim() == marker {
            out.push('\n');
            inserted += 1;
        }
    }
    debug!(inserted, "normalized block separators");
    out
}
