//! Codec for inclusive integer ranges written as `"LOW-HIGH"`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};

static RANGE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]*-[0-9]*$").expect("range pattern is valid"));

/// Parse an inclusive `"LOW-HIGH"` range.
///
/// Surrounding whitespace is trimmed first. The trimmed value must be
/// two non-negative base-10 integers joined by a single hyphen, with
/// `low <= high`. `field` only labels the error diagnostics.
///
/// A value that does not match the pattern (or has an empty side, such
/// as a bare `"-"`) yields [`Error::InvalidFormat`]; a well-formed pair
/// with `low > high` yields [`Error::InvalidArgument`].
///
/// # Example
///
/// ```rust
/// use scriptkit::decode_range;
///
/// assert_eq!(decode_range(" 1-10 ", "range").unwrap(), (1, 10));
/// assert!(decode_range("5-3", "range").is_err());
/// ```
pub fn decode_range(text: &str, field: &str) -> Result<(u64, u64)> {
    let trimmed = text.trim();
    if !RANGE_PATTERN.is_match(trimmed) {
        return Err(Error::invalid_format(field, trimmed));
    }
    let Some((low, high)) = trimmed.split_once('-') else {
        return Err(Error::invalid_format(field, trimmed));
    };
    let low: u64 = low
        .parse()
        .map_err(|_| Error::invalid_format(field, trimmed))?;
    let high: u64 = high
        .parse()
        .map_err(|_| Error::invalid_format(field, trimmed))?;
    if low > high {
        return Err(Error::invalid_arg(field, format!("({}, {})", low, high)));
    }
    Ok((low, high))
}

/// Format a range as `"LOW-HIGH"`.
///
/// No ordering check is performed; encoding trusts its caller.
pub fn encode_range(low: u64, high: u64) -> String {
    format!("{}-{}", low, high)
}
