//! Record types shown by the browser.
//!
//! The browser itself only needs identity ([`Record::id`]); the attributes are
//! read by the table formatters in [`crate::format`].

use serde::Deserialize;
use std::fmt;

/// Stable integer identity of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(transparent)]
pub struct RecordId(i64);

impl RecordId {
    /// Wrap a raw id.
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// The raw id.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Anything the browser can list.
///
/// Two records are the same record when their ids are equal, regardless of
/// their other attributes.
pub trait Record {
    /// Stable identity of this record.
    fn id(&self) -> RecordId;
}

/// Progress of a consumable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// Not started yet.
    #[default]
    Planning,
    /// Currently being consumed.
    InProgress,
    /// Paused.
    OnHold,
    /// Abandoned.
    Dropped,
    /// Finished at least once.
    Completed,
}

impl Status {
    /// Upper-case name as shown in tables.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Planning => "PLANNING",
            Status::InProgress => "IN_PROGRESS",
            Status::OnHold => "ON_HOLD",
            Status::Dropped => "DROPPED",
            Status::Completed => "COMPLETED",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A piece of media being tracked (novel, anime, film, ...).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Consumable {
    /// Unique consumable id.
    pub id: RecordId,
    /// Media type, e.g. `NOVEL`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Title.
    pub name: String,
    /// Parts consumed so far.
    #[serde(default)]
    pub parts: u32,
    /// Total number of parts, when known.
    #[serde(default)]
    pub max_parts: Option<u32>,
    /// Rating, when given.
    #[serde(default)]
    pub rating: Option<f64>,
    /// Times completed.
    #[serde(default)]
    pub completions: u32,
    /// Progress status.
    #[serde(default)]
    pub status: Status,
    /// Start time as a Unix timestamp in seconds.
    #[serde(default)]
    pub start_date: Option<i64>,
    /// Completion time as a Unix timestamp in seconds.
    #[serde(default)]
    pub end_date: Option<i64>,
}

impl Record for Consumable {
    fn id(&self) -> RecordId {
        self.id
    }
}

/// A named group of consumables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Series {
    /// Unique series id.
    pub id: RecordId,
    /// Series name.
    pub name: String,
}

impl Record for Series {
    fn id(&self) -> RecordId {
        self.id
    }
}

/// A person credited on consumables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Personnel {
    /// Unique personnel id.
    pub id: RecordId,
    /// First name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Pseudonym or stage name.
    #[serde(default)]
    pub pseudonym: Option<String>,
    /// Last name.
    #[serde(default)]
    pub last_name: Option<String>,
}

impl Record for Personnel {
    fn id(&self) -> RecordId {
        self.id
    }
}
