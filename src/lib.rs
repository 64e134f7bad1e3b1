//! conbrowse
//!
//! Keyboard-driven terminal browser for record lists: a formatted table with
//! a cursor, multi-selection and a key legend.
//!
//! Pure core ([`model`], [`format`], [`state`], [`view_state`]) with an
//! impure shell ([`view`]) that owns the terminal.

pub mod config;
pub mod format;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;
pub mod view_state;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
