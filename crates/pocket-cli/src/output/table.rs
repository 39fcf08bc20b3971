#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render an aligned table. Widths count characters, so Hangul product
/// names line up with ASCII ones only approximately.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| display_width(cell))
                .max()
                .unwrap_or(0)
                .max(display_width(header))
                .max(4)
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| pad(&truncate(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join("  ");
    let divider = "-".repeat(display_width(&header_line));

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line);
    lines.push(divider);
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let text = truncate(value, *width);
                let padded = pad(&text, *width, looks_numeric(&text));
                if options.color {
                    colorize_delta(&padded, &text)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(line);
    }
    lines.join("\n")
}

fn display_width(value: &str) -> usize {
    value.chars().count()
}

fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    let separators = widths.len().saturating_sub(1) * 2;

    while widths.iter().sum::<usize>() + separators > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > display_width(headers[*idx]).max(4))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);
        let Some(idx) = widest else {
            break;
        };
        widths[idx] -= 1;
    }
}

fn truncate(value: &str, width: usize) -> String {
    if display_width(value) <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }
    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | ',' | '%'))
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(display_width(value)));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

/// Green for rank gains and upward trends, red for losses.
fn colorize_delta(padded: &str, text: &str) -> String {
    let trimmed = text.trim();
    let code = if trimmed == "up" || (trimmed.starts_with('+') && trimmed.len() > 1) {
        Some("32")
    } else if trimmed == "down" || (trimmed.starts_with('-') && trimmed.len() > 1) {
        Some("31")
    } else {
        None
    };
    match code {
        Some(code) => format!("\u{1b}[{code}m{padded}\u{1b}[0m"),
        None => padded.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn aligns_mixed_widths() {
        let rows = vec![
            vec!["1".to_string(), "Lip Sleeping Mask".to_string()],
            vec!["12".to_string(), "Water Bank".to_string()],
        ];
        let table = render_table(&["rank", "name"], &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2], "   1  Lip Sleeping Mask");
        assert_eq!(lines[3], "  12  Water Bank       ");
    }

    #[test]
    fn hangul_counts_by_character() {
        let rows = vec![vec!["제품".to_string()]];
        let table = render_table(&["이름"], &rows, PLAIN);
        assert_eq!(table.lines().nth(2), Some("제품  "));
    }

    #[test]
    fn narrows_widest_column_to_fit() {
        let rows = vec![vec!["x".to_string(), "a".repeat(40)]];
        let options = TableOptions {
            max_width: Some(20),
            color: false,
        };
        let table = render_table(&["id", "title"], &rows, options);
        let row = table.lines().nth(2).unwrap();
        assert_eq!(display_width(row), 20);
        assert!(row.ends_with('…'));
    }

    #[test]
    fn colors_gains_and_losses() {
        assert!(colorize_delta("+3", "+3").starts_with("\u{1b}[32m"));
        assert!(colorize_delta("-2", "-2").starts_with("\u{1b}[31m"));
        assert_eq!(colorize_delta("-", "-"), "-");
    }
}
