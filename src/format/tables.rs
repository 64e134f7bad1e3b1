//! Table layouts for the tracker's record types.

use super::tabulate::{tabulate, truncate};
use super::TableFormatter;
use crate::model::{Consumable, Personnel, Series};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};
use std::fmt::Write;

/// Date format used when none is configured.
pub const DEFAULT_DATE_FORMAT: &str = "%Y/%m/%d";

/// Default display width of the consumable name column.
pub const DEFAULT_NAME_WIDTH: usize = 50;

/// Check that `format` is a strftime string chrono can render.
pub fn is_valid_date_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

/// Table of consumables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsumableTable {
    date_format: String,
    name_width: usize,
}

impl ConsumableTable {
    /// Table rendering start/end dates with the strftime string `date_format`.
    pub fn new(date_format: impl Into<String>) -> Self {
        Self {
            date_format: date_format.into(),
            name_width: DEFAULT_NAME_WIDTH,
        }
    }

    /// Truncate names longer than `name_width` display columns.
    pub fn with_name_width(mut self, name_width: usize) -> Self {
        self.name_width = name_width;
        self
    }

    /// The configured strftime string.
    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    fn format_date(&self, timestamp: Option<i64>) -> String {
        let Some(datetime) = timestamp.and_then(|secs| DateTime::from_timestamp(secs, 0)) else {
            return String::new();
        };
        let local = datetime.with_timezone(&Local);

        // An invalid format makes chrono's Display fail; fall back to ISO.
        let mut out = String::new();
        if write!(out, "{}", local.format(&self.date_format)).is_err() {
            out = local.format("%Y-%m-%d").to_string();
        }
        out
    }
}

impl Default for ConsumableTable {
    fn default() -> Self {
        Self::new(DEFAULT_DATE_FORMAT)
    }
}

impl TableFormatter<Consumable> for ConsumableTable {
    fn tabulate(&self, records: &[Consumable]) -> String {
        let rows: Vec<Vec<String>> = records
            .iter()
            .enumerate()
            .map(|(row, c)| {
                vec![
                    (row + 1).to_string(),
                    c.id.to_string(),
                    c.kind.clone(),
                    truncate(&c.name, self.name_width),
                    format!(
                        "{}/{}",
                        c.parts,
                        c.max_parts.map_or_else(|| "?".to_string(), |m| m.to_string())
                    ),
                    c.rating.map(|r| r.to_string()).unwrap_or_default(),
                    c.completions.to_string(),
                    c.status.to_string(),
                    self.format_date(c.start_date),
                    self.format_date(c.end_date),
                ]
            })
            .collect();

        tabulate(
            &[
                "#",
                "ID",
                "Type",
                "Name",
                "Parts",
                "Rating",
                "Completions",
                "Status",
                "Started",
                "Completed",
            ],
            &rows,
        )
    }
}

/// Table of series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeriesTable;

impl TableFormatter<Series> for SeriesTable {
    fn tabulate(&self, records: &[Series]) -> String {
        let rows: Vec<Vec<String>> = records
            .iter()
            .enumerate()
            .map(|(row, s)| vec![(row + 1).to_string(), s.id.to_string(), s.name.clone()])
            .collect();
        tabulate(&["#", "ID", "Name"], &rows)
    }
}

/// Table of personnel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PersonnelTable;

impl TableFormatter<Personnel> for PersonnelTable {
    fn tabulate(&self, records: &[Personnel]) -> String {
        let rows: Vec<Vec<String>> = records
            .iter()
            .enumerate()
            .map(|(row, p)| {
                vec![
                    (row + 1).to_string(),
                    p.id.to_string(),
                    p.first_name.clone().unwrap_or_default(),
                    p.pseudonym.clone().unwrap_or_default(),
                    p.last_name.clone().unwrap_or_default(),
                ]
            })
            .collect();
        tabulate(&["#", "ID", "First Name", "Pseudonym", "Last Name"], &rows)
    }
}
