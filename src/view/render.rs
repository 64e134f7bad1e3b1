//! Frame rendering.
//!
//! Screen layout, top to bottom:
//!
//! ```text
//! row 0      header line 1           (column 2, bold)
//! row 1      header line 2           (column 2, bold)
//! row 2..    visible body rows       (column 2; cursor row at column 0 as "> row <")
//! last row   key legend              (column 0)
//! ```

use super::styles::BrowserStyles;
use crate::format::{Table, HEADER_LINES};
use crate::model::Record;
use crate::state::BrowserState;
use crate::view_state::{available_rows, visible_window};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Column where header and body text start.
pub const TEXT_COLUMN: u16 = 2;

/// Draw one full frame.
///
/// Rows that fall outside `frame.area()` are skipped. When the terminal is
/// too small for any body rows only the header and legend are drawn.
pub fn render_browser<R: Record>(
    frame: &mut Frame,
    table: &Table,
    state: &BrowserState<R>,
    legend: &str,
    styles: &BrowserStyles,
) {
    let area = frame.area();

    for (row, line) in table.header().iter().enumerate() {
        draw_line(
            frame,
            area,
            TEXT_COLUMN,
            row as u16,
            Line::styled(line.as_str(), styles.header),
        );
    }

    let window = visible_window(state.cursor(), state.len(), available_rows(area.height));
    let first_body_row = HEADER_LINES as u16;
    for (offset, index) in window.indices().enumerate() {
        let (Some(record), Some(text)) = (state.records().get(index), table.body().get(index))
        else {
            continue;
        };
        let y = first_body_row.saturating_add(offset as u16);
        let style = styles.row_style(state.is_selected(record));

        if index == state.cursor() {
            draw_line(frame, area, 0, y, cursor_line(text, style, styles));
        } else {
            draw_line(frame, area, TEXT_COLUMN, y, Line::styled(text.as_str(), style));
        }
    }

    if let Some(last_row) = area.height.checked_sub(1) {
        draw_line(frame, area, 0, last_row, Line::styled(legend, styles.legend));
    }
}

/// `> text <`, with the selection style under the markers too.
fn cursor_line<'a>(text: &'a str, style: Style, styles: &BrowserStyles) -> Line<'a> {
    Line::from(vec![
        Span::styled("> ", styles.cursor_marker),
        Span::raw(text),
        Span::styled(" <", styles.cursor_marker),
    ])
    .style(style)
}

/// Render `line` on row `y` starting at column `x`, clipped to `area`.
fn draw_line(frame: &mut Frame, area: Rect, x: u16, y: u16, line: Line) {
    if x >= area.width || y >= area.height {
        return;
    }
    let rect = Rect::new(area.x + x, area.y + y, area.width - x, 1);
    frame.render_widget(Paragraph::new(line), rect);
}
