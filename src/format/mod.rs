//! Record table formatting (pure).
//!
//! A [`TableFormatter`] renders the whole record sequence as plain text: two
//! header lines followed by exactly one body line per record, in order. The
//! browser never inspects records itself beyond their identity; row `i` of
//! the body is the on-screen representation of record `i`.

pub mod tables;
pub mod tabulate;

pub use tables::{ConsumableTable, PersonnelTable, SeriesTable, DEFAULT_DATE_FORMAT};
pub use tabulate::{tabulate, truncate};

use crate::model::BrowserError;

/// Number of header lines every formatter must emit.
pub const HEADER_LINES: usize = 2;

/// Renders a record sequence as a fixed-layout text table.
///
/// Any `Fn(&[R]) -> String` closure is a formatter.
pub trait TableFormatter<R> {
    /// Render `records` as two header lines plus one body line per record.
    fn tabulate(&self, records: &[R]) -> String;
}

impl<R, F> TableFormatter<R> for F
where
    F: Fn(&[R]) -> String,
{
    fn tabulate(&self, records: &[R]) -> String {
        self(records)
    }
}

/// Formatter output split into header and body.
///
/// Construction validates the formatter contract, so `body.len()` always
/// equals the record count it was parsed against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    header: [String; HEADER_LINES],
    body: Vec<String>,
}

impl Table {
    /// Split `text` into header and body lines and check the body has one
    /// line per record.
    ///
    /// Lines are separated by `\n` (a trailing `\r` is dropped). A trailing
    /// newline starts one more, empty, line: `"H\n-\n"` is a table with one
    /// blank body row.
    ///
    /// # Errors
    ///
    /// Returns [`BrowserError::MalformedTable`] when there are fewer than two
    /// header lines or the body line count differs from `expected_rows`.
    pub fn parse(text: &str, expected_rows: usize) -> Result<Self, BrowserError> {
        let split = || {
            text.split('\n')
                .map(|line| line.strip_suffix('\r').unwrap_or(line))
        };
        let mut lines = split().map(str::to_string);

        let (Some(first), Some(second)) = (lines.next(), lines.next()) else {
            return Err(BrowserError::malformed(format!(
                "expected {HEADER_LINES} header lines, found {}",
                split().count()
            )));
        };

        let body: Vec<String> = lines.collect();
        if body.len() != expected_rows {
            return Err(BrowserError::malformed(format!(
                "expected {expected_rows} body lines (one per record), found {}",
                body.len()
            )));
        }

        Ok(Self {
            header: [first, second],
            body,
        })
    }

    /// The two header lines.
    pub fn header(&self) -> &[String; HEADER_LINES] {
        &self.header
    }

    /// Body lines, index-aligned with the records.
    pub fn body(&self) -> &[String] {
        &self.body
    }
}
