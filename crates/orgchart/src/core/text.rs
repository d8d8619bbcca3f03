//! Shared text helpers for the renderers
//!
//! Label measuring and wrapping work in terminal display columns (via
//! `unicode-width`), so wide CJK names take the room they actually need.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of a label in columns
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Wrap a label to at most `max_width` columns, breaking between words.
///
/// Words wider than `max_width` are split across lines. A `max_width` of 0
/// disables wrapping.
///
/// ```
/// use orgchart::core::wrap_label;
///
/// assert_eq!(wrap_label("Vice President Engineering", 14), vec!["Vice President", "Engineering"]);
/// ```
pub fn wrap_label(label: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 || display_width(label) <= max_width {
        return vec![label.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in label.split_whitespace() {
        let word_width = display_width(word);

        if word_width > max_width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let mut pieces = split_word(word, max_width);
            // last piece may still share its line with the next word
            let tail = pieces.pop().unwrap_or_default();
            lines.extend(pieces);
            current_width = display_width(&tail);
            current = tail;
        } else if current.is_empty() {
            current = word.to_string();
            current_width = word_width;
        } else if current_width + 1 + word_width <= max_width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
            current_width = word_width;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    if lines.is_empty() {
        vec![String::new()]
    } else {
        lines
    }
}

fn split_word(word: &str, max_width: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut width = 0;
    for c in word.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width && !piece.is_empty() {
            pieces.push(std::mem::take(&mut piece));
            width = 0;
        }
        piece.push(c);
        width += w;
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}

/// Escape text for use in SVG/XML content and attribute values
pub fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Escape text for a double-quoted Graphviz DOT string
pub fn escape_dot(input: &str) -> String {
    input.replace('\\', "\\\\").replace('"', "\\\"")
}
