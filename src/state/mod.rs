//! Browser state machine (pure).
//!
//! All state transitions are pure functions testable without a terminal.

pub mod action;
pub mod browser_state;
pub mod dispatch;

// Re-export for convenience
pub use action::{builtin_actions, Action, Transform};
pub use browser_state::BrowserState;
pub use dispatch::ActionSet;
