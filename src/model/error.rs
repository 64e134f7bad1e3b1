//! Error types for the browser.
//!
//! Errors are defined with `thiserror` and compose via `?` and `From`.
//!
//! # Error Hierarchy
//!
//! - [`BrowserError`] - everything that can end a browsing session early
//!   - [`BrowserError::MalformedTable`] - formatter broke its output contract
//!   - [`BrowserError::Terminal`] - crossterm/ratatui I/O failures
//!   - [`BrowserError::Interrupted`] - Ctrl+C while in raw mode
//!
//! # Recovery Strategy
//!
//! None of these are retried. Every variant is returned only after the terminal
//! has been restored, so the caller can print it to a sane screen.

use thiserror::Error;

/// Failure of a browsing session.
///
/// Empty record sequences and degenerate terminal geometry are not errors;
/// they render as an empty body.
#[derive(Debug, Error)]
pub enum BrowserError {
    /// The table formatter returned text that does not line up with the records.
    ///
    /// Raised before anything is drawn, so a broken table is never partially
    /// rendered.
    #[error("Malformed table: {reason}")]
    MalformedTable {
        /// What was wrong with the formatter output.
        reason: String,
    },

    /// Terminal setup, drawing, reading or restore failed.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// The user pressed Ctrl+C.
    ///
    /// Raw mode swallows the interrupt signal, so it arrives as a key instead.
    #[error("Interrupted")]
    Interrupted,
}

impl BrowserError {
    /// Build a [`BrowserError::MalformedTable`] from any displayable reason.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedTable {
            reason: reason.into(),
        }
    }
}
