//! Width-aware helpers for laying text out in fixed-width terminal areas.
//!
//! All indices are byte offsets into UTF-8 strings and always land on valid
//! character boundaries.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Returns how many bytes from the start of `s` fit into `max_width` cells.
pub fn truncate_to_width(s: &str, max_width: usize) -> usize {
    if max_width == 0 || s.is_empty() {
        return 0;
    }

    let mut used = 0usize;
    let mut end = 0usize;
    for (idx, ch) in s.char_indices() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max_width {
            break;
        }
        used += w;
        end = idx + ch.len_utf8();
    }

    end
}

/// Greedy word wrap into lines of at most `max_width` cells.
///
/// Words wider than a whole line are hard-split. Explicit newlines start a new line.
pub fn wrap(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    if max_width == 0 {
        return lines;
    }

    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_w = 0usize;

        for word in paragraph.split_whitespace() {
            let mut word = word;
            let mut word_w = word.width();

            let sep = usize::from(!line.is_empty());
            if line_w + sep + word_w <= max_width {
                if sep == 1 {
                    line.push(' ');
                }
                line.push_str(word);
                line_w += sep + word_w;
                continue;
            }

            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
                line_w = 0;
            }

            while word_w > max_width {
                let mut end = truncate_to_width(word, max_width);
                if end == 0 {
                    // A single glyph wider than the line; emit it on its own.
                    end = word.chars().next().map(|ch| ch.len_utf8()).unwrap_or(word.len());
                }
                lines.push(word[..end].to_string());
                word = &word[end..];
                word_w = word.width();
            }

            line.push_str(word);
            line_w = word_w;
        }

        lines.push(line);
    }

    lines
}

#[cfg(test)]
#[path = "../../tests/unit/core/text_window.rs"]
mod tests;
