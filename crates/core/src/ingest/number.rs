//! Locale-formatted number parsing.

use std::str::FromStr;

use rust_decimal::Decimal;

/// Parses numbers as they appear in the exports: comma or dot decimal
/// separator, optional trailing `%`, surrounding whitespace.
///
/// Returns `None` for empty cells and anything that is not a plain
/// decimal number. Thousands separators are not supported, so `1.234,5`
/// is rejected rather than misread.
///
/// ```
/// use rust_decimal_macros::dec;
/// use pmreport_core::ingest::parse_locale_number;
///
/// assert_eq!(parse_locale_number("45,5%"), Some(dec!(45.5)));
/// assert_eq!(parse_locale_number(""), None);
/// ```
#[must_use]
pub fn parse_locale_number(raw: &str) -> Option<Decimal> {
    let cleaned = raw.trim();
    let cleaned = cleaned.strip_suffix('%').unwrap_or(cleaned).trim();
    if cleaned.is_empty() {
        return None;
    }

    Decimal::from_str(&cleaned.replacen(',', ".", 1)).ok()
}
