//! Character-offset helpers.
//!
//! Issue offsets count Unicode scalar values so that callers in any language
//! see the same positions for Japanese and English text alike. Rust string
//! slicing and `regex` matches work in bytes; these helpers translate.

use std::ops::Range;

/// Number of characters in `text`.
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Convert a byte index (on a char boundary) into a character offset.
///
/// Indices past the end clamp to the character length.
#[must_use]
pub fn char_offset(text: &str, byte_idx: usize) -> usize {
    let end = byte_idx.min(text.len());
    text.get(..end).map_or_else(|| char_len(text), char_len)
}

/// Convert a byte range (as reported by a regex match) into a character span.
#[must_use]
pub fn char_span(text: &str, bytes: Range<usize>) -> (usize, usize) {
    let start = char_offset(text, bytes.start);
    let width = text
        .get(bytes.start..bytes.end)
        .map_or(0, char_len);
    (start, start + width)
}

/// Translate a character span back into a byte range of `text`.
///
/// Returns `None` if `start > end` or `end` exceeds the character length.
#[must_use]
pub fn byte_range(text: &str, start: usize, end: usize) -> Option<Range<usize>> {
    if start > end {
        return None;
    }
    let mut boundaries = text
        .char_indices()
        .map(|(idx, _)| idx)
        .chain(std::iter::once(text.len()));
    let byte_start = boundaries.nth(start)?;
    let byte_end = if end == start {
        byte_start
    } else {
        boundaries.nth(end - start - 1)?
    };
    Some(byte_start..byte_end)
}

/// Slice `text` by character span.
#[must_use]
pub fn slice_chars(text: &str, start: usize, end: usize) -> Option<&str> {
    byte_range(text, start, end).and_then(|range| text.get(range))
}

/// Character offset of the first occurrence of `needle`, if any.
#[must_use]
pub fn find_chars(text: &str, needle: &str) -> Option<usize> {
    text.find(needle).map(|byte_idx| char_offset(text, byte_idx))
}
