//! Browser state snapshot.
//!
//! [`BrowserState`] is an immutable value. Transitions take the state by value
//! and return the next one, so actions compose by threading one state through
//! a chain of functions.

use crate::model::{Record, RecordId};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Snapshot of a browsing session.
///
/// # Invariants
/// - `records` never changes after construction
/// - `cursor < records.len()` whenever `records` is non-empty; `0` otherwise
/// - `active` only ever goes from `true` to `false`
#[derive(Debug, PartialEq)]
pub struct BrowserState<R> {
    records: Arc<[R]>,
    selected: BTreeSet<RecordId>,
    cursor: usize,
    active: bool,
}

// Manual impl: cloning shares `records`, so `R: Clone` is not required.
impl<R> Clone for BrowserState<R> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
            selected: self.selected.clone(),
            cursor: self.cursor,
            active: self.active,
        }
    }
}

impl<R: Record> BrowserState<R> {
    /// Fresh state: cursor on the first record, nothing selected, active.
    pub fn new(records: impl Into<Arc<[R]>>) -> Self {
        Self {
            records: records.into(),
            selected: BTreeSet::new(),
            cursor: 0,
            active: true,
        }
    }

    /// All records, in display order.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether there are no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Cursor index. Meaningless (always `0`) when there are no records.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Record under the cursor, if any.
    pub fn current(&self) -> Option<&R> {
        self.records.get(self.cursor)
    }

    /// Whether the dispatch loop should keep running.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether `record` is selected (by identity).
    pub fn is_selected(&self, record: &R) -> bool {
        self.selected.contains(&record.id())
    }

    /// Ids of the selected records.
    pub fn selected_ids(&self) -> &BTreeSet<RecordId> {
        &self.selected
    }

    /// Selected records in display order.
    pub fn selected_records(&self) -> impl Iterator<Item = &R> {
        self.records
            .iter()
            .filter(|record| self.selected.contains(&record.id()))
    }

    /// Move the cursor one row up, stopping at the first record.
    pub fn move_up(self) -> Self {
        Self {
            cursor: self.cursor.saturating_sub(1),
            ..self
        }
    }

    /// Move the cursor one row down, stopping at the last record.
    pub fn move_down(self) -> Self {
        let cursor = self.clamp(self.cursor.saturating_add(1));
        Self { cursor, ..self }
    }

    /// Move the cursor to `index`, clamped to the record range.
    pub fn jump_to(self, index: usize) -> Self {
        let cursor = self.clamp(index);
        Self { cursor, ..self }
    }

    /// Flip selection of the record under the cursor. No-op without records.
    pub fn toggle_selected(mut self) -> Self {
        let Some(id) = self.current().map(Record::id) else {
            return self;
        };
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
        self
    }

    /// Stop the dispatch loop.
    pub fn quit(self) -> Self {
        Self {
            active: false,
            ..self
        }
    }

    fn clamp(&self, index: usize) -> usize {
        index.min(self.records.len().saturating_sub(1))
    }
}
