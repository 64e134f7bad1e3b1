//! Plain-text table layout.
//!
//! Produces the "simple" layout: a header row, a row of dashes under each
//! column, then one line per data row. Columns are separated by two spaces;
//! numeric columns are right-aligned, everything else left-aligned.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const COLUMN_GAP: &str = "  ";
const ELLIPSIS: char = '…';

/// Lay out `rows` under `headers`.
///
/// Rows shorter than `headers` are padded with empty cells; extra cells are
/// ignored. Line breaks and other control characters inside cells are
/// replaced by spaces so every row stays on one line.
pub fn tabulate(headers: &[&str], rows: &[Vec<String>]) -> String {
    let columns = headers.len();
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            (0..columns)
                .map(|i| row.get(i).map(|c| sanitize(c)).unwrap_or_default())
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let numeric: Vec<bool> = (0..columns)
        .map(|i| is_numeric_column(cells.iter().map(|row| row[i].as_str())))
        .collect();

    let mut lines = Vec::with_capacity(cells.len() + 2);
    lines.push(join_row(headers.iter().copied(), &widths, &numeric));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP),
    );
    for row in &cells {
        lines.push(join_row(row.iter().map(String::as_str), &widths, &numeric));
    }

    lines.join("\n")
}

/// Shorten `text` to at most `max_width` display columns, ending in `…` when
/// anything was cut.
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push(ELLIPSIS);
    out
}

fn sanitize(cell: &str) -> String {
    cell.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

/// A column is numeric when it has at least one value and every non-empty
/// value parses as a number.
fn is_numeric_column<'a>(mut values: impl Iterator<Item = &'a str>) -> bool {
    let mut seen = false;
    let all_numeric = values.all(|v| {
        if v.is_empty() {
            return true;
        }
        seen = true;
        v.parse::<f64>().is_ok()
    });
    seen && all_numeric
}

fn join_row<'a>(
    cells: impl Iterator<Item = &'a str>,
    widths: &[usize],
    numeric: &[bool],
) -> String {
    let padded: Vec<String> = cells
        .zip(widths.iter().zip(numeric))
        .map(|(cell, (&width, &right))| pad(cell, width, right))
        .collect();
    padded.join(COLUMN_GAP).trim_end().to_string()
}

fn pad(cell: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(cell.width()));
    if right_align {
        format!("{fill}{cell}")
    } else {
        format!("{cell}{fill}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn tabulate_aligns_numeric_right_and_text_left() {
        let out = tabulate(&["ID", "Name"], &[row(&["1", "Dune"]), row(&["12", "It"])]);
        assert_eq!(out, "ID  Name\n--  ----\n 1  Dune\n12  It");
    }

    #[test]
    fn tabulate_without_rows_emits_two_lines() {
        let out = tabulate(&["#", "ID", "Name"], &[]);
        assert_eq!(out.lines().count(), 2);
        assert_eq!(out, "#  ID  Name\n-  --  ----");
    }

    #[test]
    fn tabulate_widens_columns_to_longest_cell() {
        let out = tabulate(&["N"], &[row(&["long"])]);
        assert_eq!(out, "N\n----\nlong");
    }

    #[test]
    fn tabulate_pads_short_rows() {
        let out = tabulate(&["A", "B"], &[row(&["x"])]);
        assert_eq!(out.lines().count(), 3);
        assert_eq!(out.lines().nth(2), Some("x"));
    }

    #[test]
    fn tabulate_keeps_newlines_out_of_rows() {
        let out = tabulate(&["Name"], &[row(&["two\nlines"])]);
        assert_eq!(out.lines().count(), 3);
        assert_eq!(out.lines().nth(2), Some("two lines"));
    }

    #[test]
    fn empty_cells_do_not_make_a_column_textual() {
        let out = tabulate(&["Rating"], &[row(&["8.5"]), row(&[""]), row(&["10"])]);
        assert_eq!(out, "Rating\n------\n   8.5\n\n    10");
    }

    #[test]
    fn truncate_leaves_short_text_alone() {
        assert_eq!(truncate("Dune", 50), "Dune");
        assert_eq!(truncate("Dune", 4), "Dune");
    }

    #[test]
    fn truncate_cuts_with_ellipsis() {
        assert_eq!(truncate("abcdef", 4), "abc…");
    }

    #[test]
    fn truncate_counts_display_width() {
        // Each CJK character is two columns wide.
        assert_eq!(truncate("日本語テキスト", 5), "日本…");
    }

    #[test]
    fn truncate_to_zero_is_empty() {
        assert_eq!(truncate("abc", 0), "");
    }
}
