//! View-state layer - viewport windowing over the record list.
//!
//! # Module Structure
//!
//! - `visible_range`: which body rows are on screen for a given cursor and geometry

pub mod visible_range;

pub use visible_range::{available_rows, visible_window, VisibleWindow, CHROME_ROWS};
