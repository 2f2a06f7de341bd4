//! Fixed-width table-row rendering with CJK double-width compensation.
//!
//! A CJK ideograph occupies two terminal columns but counts as one
//! element when padding by element count. [`table_row`] compensates by
//! inserting a filler marker after each CJK character before padding,
//! then stripping the markers from the finished row. The visible
//! `|...|` span therefore occupies exactly `width + 2` terminal columns
//! whenever the content fits.

/// Sentinel inserted during width compensation and stripped before the
/// row is returned. Must not appear in real content.
const FILLER: char = '$';

/// Returns true for code points in the CJK Unified Ideographs block
/// (`U+4E00..=U+9FFF`).
///
/// Deliberately narrower than a full East-Asian-width table: only this
/// block is compensated, so other wide scripts render as single-width.
///
/// # Example
///
/// ```rust
/// use scriptkit::is_cjk;
///
/// assert!(is_cjk('中'));
/// assert!(!is_cjk('A'));
/// ```
pub fn is_cjk(c: char) -> bool {
    ('\u{4e00}'..='\u{9fff}').contains(&c)
}

/// Append the filler marker after every CJK character.
fn compensate(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + s.len() / 3);
    for c in s.chars() {
        out.push(c);
        if is_cjk(c) {
            out.push(FILLER);
        }
    }
    out
}

/// Center `s` within `width` elements; when the total padding is odd
/// the extra column goes on the right. Strings at or beyond `width`
/// are returned unchanged.
fn center(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        return s.to_string();
    }
    let pad = width - len;
    let left = pad / 2;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(pad - left))
}

/// Left-justify `s` within `width` elements, padding with spaces.
/// Strings at or beyond `width` are returned unchanged.
fn ljust(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        return s.to_string();
    }
    format!("{}{}", s, " ".repeat(width - len))
}

/// Render one table cell bounded by `|` characters.
///
/// `width` is the interior element count. With `left` of `None` the
/// content is centered in `width`; with `Some(margin)` it is first
/// left-justified within the `width - 2 * margin` sub-field, then the
/// padded sub-field is centered in `width`.
///
/// Content longer than the target width is passed through unpadded,
/// never truncated. Pure function, no side effects.
///
/// # Example
///
/// ```rust
/// use scriptkit::table_row;
///
/// assert_eq!(table_row("ab", 10, None), "|    ab    |");
/// assert_eq!(table_row("中文", 10, None), "|   中文   |");
/// ```
pub fn table_row(content: &str, width: usize, left: Option<usize>) -> String {
    let compensated = compensate(content);
    let justified = match left {
        None => center(&compensated, width),
        Some(margin) => center(
            &ljust(&compensated, width.saturating_sub(2 * margin)),
            width,
        ),
    };
    let wrapped = format!("|{}|", justified);
    wrapped.chars().filter(|&c| c != FILLER).collect()
}

/// Render a horizontal rule: `+`, `width` dashes, `+`.
///
/// # Example
///
/// ```rust
/// use scriptkit::table_line;
///
/// assert_eq!(table_line(5), "+-----+");
/// ```
pub fn table_line(width: usize) -> String {
    format!("+{}+", "-".repeat(width))
}
