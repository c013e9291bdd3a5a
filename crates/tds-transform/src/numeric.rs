//! Numeric coercion for amount columns.

/// Parses an amount cell, returning None for invalid or empty strings.
///
/// Thousands separators are ignored (`1,234.50` and the Indian grouping
/// `1,20,000.00` both parse). Non-finite results are treated as missing.
pub fn parse_amount(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parsed = if trimmed.contains(',') {
        trimmed.replace(',', "").parse::<f64>().ok()?
    } else {
        trimmed.parse::<f64>().ok()?
    };
    parsed.is_finite().then_some(parsed)
}

/// Formats a floating-point number as a string without trailing zeros.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Formats an amount with two decimal places, as printed in the statement.
pub fn format_amount(v: f64) -> String {
    format!("{v:.2}")
}
