use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Pad `s` with trailing spaces to `cells` wide. Wider strings are returned as-is.
pub fn pad_to_width(s: &str, cells: usize) -> String {
    let w = display_width(s);
    if w >= cells {
        return s.to_string();
    }
    format!("{}{}", s, " ".repeat(cells - w))
}

/// Next grapheme boundary after `byte_offset`. Returns None if at end.
pub fn next_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset >= s.len() {
        return None;
    }
    if let Some((i, _)) = s[byte_offset..].grapheme_indices(true).nth(1) {
        return Some(byte_offset + i);
    }
    Some(s.len())
}

/// Previous grapheme boundary before `byte_offset`. Returns None if at start.
pub fn prev_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset == 0 {
        return None;
    }
    s[..byte_offset]
        .grapheme_indices(true)
        .next_back()
        .map(|(i, _)| i)
}

/// Horizontal scroll for a one-line text field `cells` wide: returns the byte
/// offset to start drawing from and the cursor's column relative to it, so
/// that the cursor (at `cursor` bytes) always stays visible.
pub fn scroll_to_cursor(s: &str, cursor: usize, cells: usize) -> (usize, usize) {
    let mut start = 0;
    let mut col = display_width(&s[..cursor]);
    // Keep one cell free for the cursor itself
    while cells > 0 && col >= cells {
        let Some(next) = next_grapheme_boundary(s, start) else {
            break;
        };
        col -= display_width(&s[start..next]);
        start = next;
    }
    (start, col)
}
