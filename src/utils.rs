use unicode_width::UnicodeWidthChar;

/// Fit a string into `max_len` display columns, ellipsis included. Cuts on
/// character boundaries so multi-byte and wide characters never split.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    let width: usize = s.chars().map(|c| c.width().unwrap_or(1)).sum();
    if width <= max_len {
        return s.to_string();
    }

    let budget = max_len.saturating_sub(3);
    let mut truncated = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(1);
        if used + w > budget {
            break;
        }
        truncated.push(c);
        used += w;
    }
    truncated.push_str("...");
    truncated
}

/// Display-width column of a byte cursor on a single-line input.
pub fn cursor_column(text: &str, cursor: usize) -> usize {
    text[..cursor.min(text.len())]
        .chars()
        .map(|c| c.width().unwrap_or(1))
        .sum()
}

/// Simulate how text wraps with trimming (matching ratatui Wrap { trim: true }
/// behavior). Handles both explicit newlines and automatic wrapping at
/// max_width. Returns (line_text, start_index, end_index) per visual line.
fn simulate_wrapped_lines(text: &str, max_width: usize) -> Vec<(String, usize, usize)> {
    let mut lines = Vec::new();
    let mut current_line = String::new();
    let mut current_width = 0;
    let mut line_start_idx = 0;

    for (char_idx, ch) in text.char_indices() {
        if ch == '\n' {
            let trimmed = current_line.trim_end().to_string();
            lines.push((trimmed, line_start_idx, char_idx));

            current_line = String::new();
            current_width = 0;
            line_start_idx = char_idx + 1;
        } else {
            let char_width = ch.width().unwrap_or(1);

            if current_width + char_width > max_width && current_width > 0 {
                let trimmed = current_line.trim_end().to_string();
                lines.push((trimmed, line_start_idx, char_idx));

                current_line = ch.to_string();
                current_width = char_width;
                line_start_idx = char_idx;
            } else {
                current_line.push(ch);
                current_width += char_width;
            }
        }
    }

    if !current_line.is_empty() || text.ends_with('\n') || text.is_empty() {
        let trimmed = current_line.trim_end().to_string();
        lines.push((trimmed, line_start_idx, text.len()));
    }

    lines
}

/// Line and column of a byte cursor within wrapped text, for placing the
/// terminal cursor inside the note editor.
pub fn calculate_wrapped_cursor_position(
    text: &str,
    cursor: usize,
    max_width: usize,
) -> (usize, usize) {
    if max_width == 0 {
        return (0, 0);
    }

    let lines = simulate_wrapped_lines(text, max_width);
    for (line_number, (line, start, end)) in lines.iter().enumerate() {
        if cursor >= *start && cursor <= *end {
            let column: usize = text[*start..cursor.min(*end)]
                .chars()
                .map(|c| c.width().unwrap_or(1))
                .sum();
            return (line_number, column.min(line.chars().map(|c| c.width().unwrap_or(1)).sum()));
        }
    }

    // Cursor past the last simulated line lands at its end.
    match lines.last() {
        Some((line, _, _)) => (
            lines.len() - 1,
            line.chars().map(|c| c.width().unwrap_or(1)).sum(),
        ),
        None => (0, 0),
    }
}
