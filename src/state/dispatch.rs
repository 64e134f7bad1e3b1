//! Key dispatch over the sorted action list.

use super::action::Action;
use super::browser_state::BrowserState;
use crate::model::KeyToken;
use std::cmp::Reverse;
use tracing::debug;

/// Separator between legend entries.
pub const LEGEND_SEPARATOR: &str = "   ";

/// Caller-supplied and built-in actions, sorted once by descending priority.
///
/// The same order drives key matching and the legend. Equal priorities keep
/// their declaration order (caller actions first, then built-ins).
#[derive(Debug, Clone)]
pub struct ActionSet<R> {
    actions: Vec<Action<R>>,
}

impl<R> ActionSet<R> {
    /// Append `builtins` to `actions` and sort.
    pub fn new(mut actions: Vec<Action<R>>, builtins: Vec<Action<R>>) -> Self {
        actions.extend(builtins);
        // Stable sort: ties stay in declaration order.
        actions.sort_by_key(|action| Reverse(action.priority()));
        Self { actions }
    }

    /// Actions in dispatch order.
    pub fn iter(&self) -> impl Iterator<Item = &Action<R>> {
        self.actions.iter()
    }

    /// Number of actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Apply every action bound to `key`, in order, threading the state.
    ///
    /// All matching actions fire, not just the first: a key bound to two
    /// actions composes them highest priority first.
    pub fn dispatch(&self, state: BrowserState<R>, key: &KeyToken) -> BrowserState<R> {
        self.actions
            .iter()
            .filter(|action| action.matches(key))
            .fold(state, |state, action| {
                debug!(key = %key, action = action.name(), "Dispatching action");
                action.apply(state)
            })
    }

    /// Legend line: every action as `[aliases] Name`, in order.
    pub fn legend(&self) -> String {
        self.actions
            .iter()
            .map(Action::legend_entry)
            .collect::<Vec<_>>()
            .join(LEGEND_SEPARATOR)
    }
}
