//! Sliding-window splitting over character indices.

use super::error::PageError;

/// One window cut from a page's cleaned text.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Window {
    /// Character offset of the window within the page text.
    pub char_offset: usize,
    /// The window text.
    pub content: String,
}

/// Split `text` into windows of up to `size` characters, each starting
/// `stride` characters after the previous one.
///
/// Windows cover every character with no gaps; the final window may be
/// shorter than `size` and is never empty. Offsets and lengths count
/// characters, not bytes, so multi-byte input never splits mid-codepoint.
/// Caller guarantees `0 < stride <= size` (enforced by
/// `ChunkConfig::validate`); byte lookups are still bounds-checked so a
/// violated invariant surfaces as an error rather than a panic.
pub(crate) fn char_windows(
    text: &str,
    size: usize,
    stride: usize,
) -> Result<Vec<Window>, PageError> {
    let byte_index: Vec<usize> = text
        .char_indices()
        .map(|(byte, _)| byte)
        .chain(std::iter::once(text.len()))
        .collect();
    let total_chars = byte_index.len() - 1;

    let mut windows = Vec::new();
    let mut start = 0;
    while start < total_chars {
        let end = usize::min(start + size, total_chars);
        let (lo, hi) = match (byte_index.get(start), byte_index.get(end)) {
            (Some(&lo), Some(&hi)) => (lo, hi),
            _ => {
                return Err(PageError::WindowOutOfBounds {
                    offset: start,
                    len: total_chars,
                })
            }
        };
        windows.push(Window {
            char_offset: start,
            content: text[lo..hi].to_string(),
        });
        start += stride;
    }

    Ok(windows)
}
