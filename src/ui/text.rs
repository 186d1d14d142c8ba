//! Width-aware text fitting for cards and article bodies.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate string to fit within max_width, adding ellipsis if needed
pub fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        s.to_string()
    } else {
        with_ellipsis(s, max_width)
    }
}

/// Cut `s` so that it plus a trailing ellipsis fits in `max_width`
fn with_ellipsis(s: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width + 1 > max_width {
            break;
        }
        result.push(c);
        current_width += char_width;
    }

    let mut result = result.trim_end().to_string();
    result.push('…');
    result
}

/// Greedy word wrap into at most `max_lines` lines of `width` columns.
///
/// Words wider than a line are truncated. When text is left over, the last
/// line ends with an ellipsis.
pub fn wrap(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let word = truncate(word, width);
        if current.is_empty() {
            current = word;
        } else if current.width() + 1 + word.width() <= width {
            current.push(' ');
            current.push_str(&word);
        } else {
            lines.push(std::mem::replace(&mut current, word));
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            *last = if last.width() < width {
                format!("{last}…")
            } else {
                with_ellipsis(last, width)
            };
        }
    }
    lines
}
