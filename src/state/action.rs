//! Key-bound actions and the four built-ins.
//!
//! An [`Action`] pairs a descriptor (trigger keys, legend aliases, priority,
//! name) with a pure state transformation. Built-in and caller-supplied
//! actions are the same type and live in the same sorted list.

use super::browser_state::BrowserState;
use crate::config::keybindings::BuiltinBindings;
use crate::model::{KeyToken, Record};
use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;

/// Priority of the built-in cursor-up action.
pub const PRIORITY_CURSOR_UP: i32 = 9999;
/// Priority of the built-in cursor-down action.
pub const PRIORITY_CURSOR_DOWN: i32 = 9998;
/// Priority of the built-in select action.
pub const PRIORITY_TOGGLE_SELECT: i32 = 9997;
/// Priority of the built-in quit action.
pub const PRIORITY_QUIT: i32 = -9999;

/// State transformation run when an action fires.
pub type Transform<R> = Rc<dyn Fn(BrowserState<R>) -> BrowserState<R>>;

/// A named, prioritized, key-bound state transformation.
pub struct Action<R> {
    name: String,
    priority: i32,
    keys: BTreeSet<KeyToken>,
    aliases: Vec<String>,
    transform: Transform<R>,
}

impl<R> Action<R> {
    /// Action with no keys or aliases yet.
    pub fn new(
        name: impl Into<String>,
        priority: i32,
        transform: impl Fn(BrowserState<R>) -> BrowserState<R> + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            priority,
            keys: BTreeSet::new(),
            aliases: Vec::new(),
            transform: Rc::new(transform),
        }
    }

    /// Trigger keys. Names are normalized like every other [`KeyToken`].
    pub fn with_keys<K: Into<KeyToken>>(mut self, keys: impl IntoIterator<Item = K>) -> Self {
        self.keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Labels shown for this action in the legend.
    pub fn with_aliases<S: Into<String>>(mut self, aliases: impl IntoIterator<Item = S>) -> Self {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    /// Legend label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Dispatch priority; higher runs (and is listed) first.
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Trigger keys.
    pub fn keys(&self) -> &BTreeSet<KeyToken> {
        &self.keys
    }

    /// Legend aliases.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Whether `key` triggers this action.
    pub fn matches(&self, key: &KeyToken) -> bool {
        self.keys.contains(key)
    }

    /// Run the transformation.
    pub fn apply(&self, state: BrowserState<R>) -> BrowserState<R> {
        (self.transform)(state)
    }

    /// `[alias1/alias2] Name`
    pub fn legend_entry(&self) -> String {
        format!("[{}] {}", self.aliases.join("/"), self.name)
    }
}

// Manual impls: the transform is shared, so `R` needs no bounds.
impl<R> Clone for Action<R> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            priority: self.priority,
            keys: self.keys.clone(),
            aliases: self.aliases.clone(),
            transform: Rc::clone(&self.transform),
        }
    }
}

impl<R> fmt::Debug for Action<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("name", &self.name)
            .field("priority", &self.priority)
            .field("keys", &self.keys)
            .field("aliases", &self.aliases)
            .finish_non_exhaustive()
    }
}

/// Move the cursor up one row.
pub fn cursor_up<R: Record + 'static>(bindings: &BuiltinBindings) -> Action<R> {
    Action::new("Up", PRIORITY_CURSOR_UP, BrowserState::move_up)
        .with_keys(bindings.up.keys.iter().cloned())
        .with_aliases(bindings.up.aliases.iter().cloned())
}

/// Move the cursor down one row.
pub fn cursor_down<R: Record + 'static>(bindings: &BuiltinBindings) -> Action<R> {
    Action::new("Down", PRIORITY_CURSOR_DOWN, BrowserState::move_down)
        .with_keys(bindings.down.keys.iter().cloned())
        .with_aliases(bindings.down.aliases.iter().cloned())
}

/// Toggle selection of the record under the cursor.
pub fn toggle_select<R: Record + 'static>(bindings: &BuiltinBindings) -> Action<R> {
    Action::new("Select", PRIORITY_TOGGLE_SELECT, BrowserState::toggle_selected)
        .with_keys(bindings.select.keys.iter().cloned())
        .with_aliases(bindings.select.aliases.iter().cloned())
}

/// End the session.
pub fn quit<R: Record + 'static>(bindings: &BuiltinBindings) -> Action<R> {
    Action::new("Quit", PRIORITY_QUIT, BrowserState::quit)
        .with_keys(bindings.quit.keys.iter().cloned())
        .with_aliases(bindings.quit.aliases.iter().cloned())
}

/// The four mandatory actions, in declaration order.
pub fn builtin_actions<R: Record + 'static>(bindings: &BuiltinBindings) -> Vec<Action<R>> {
    vec![
        cursor_up(bindings),
        cursor_down(bindings),
        toggle_select(bindings),
        quit(bindings),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RecordId, Series};

    fn state(n: usize) -> BrowserState<Series> {
        BrowserState::new(
            (0..n)
                .map(|i| Series {
                    id: RecordId::new(i as i64),
                    name: format!("s{i}"),
                })
                .collect::<Vec<_>>(),
        )
    }

    #[test]
    fn default_builtins_use_sentinel_priorities() {
        let actions = builtin_actions::<Series>(&BuiltinBindings::default());
        let priorities: Vec<i32> = actions.iter().map(Action::priority).collect();
        assert_eq!(priorities, vec![9999, 9998, 9997, -9999]);
    }

    #[test]
    fn default_builtin_keys() {
        let bindings = BuiltinBindings::default();
        let up = cursor_up::<Series>(&bindings);
        assert!(up.matches(&KeyToken::new("k")));
        assert!(up.matches(&KeyToken::new(KeyToken::UP)));

        let select = toggle_select::<Series>(&bindings);
        assert!(select.matches(&KeyToken::new(KeyToken::ENTER)));
        assert!(!select.matches(&KeyToken::new("q")));
    }

    #[test]
    fn legend_entry_joins_aliases() {
        let down = cursor_down::<Series>(&BuiltinBindings::default());
        assert_eq!(down.legend_entry(), "[J/↓] Down");
    }

    #[test]
    fn builtins_apply_their_transitions() {
        let bindings = BuiltinBindings::default();
        let s = cursor_down::<Series>(&bindings).apply(state(3));
        assert_eq!(s.cursor(), 1);
        let s = toggle_select::<Series>(&bindings).apply(s);
        assert!(s.selected_ids().contains(&RecordId::new(1)));
        let s = cursor_up::<Series>(&bindings).apply(s);
        assert_eq!(s.cursor(), 0);
        let s = quit::<Series>(&bindings).apply(s);
        assert!(!s.is_active());
    }

    #[test]
    fn custom_action_keys_are_normalized() {
        let action = Action::new("Top", 10, |s: BrowserState<Series>| s.jump_to(0))
            .with_keys(["g", "home"]);
        assert!(action.matches(&KeyToken::new("G")));
        assert!(action.matches(&KeyToken::new("HOME")));
    }

    #[test]
    fn debug_omits_transform() {
        let action = quit::<Series>(&BuiltinBindings::default());
        let debug = format!("{action:?}");
        assert!(debug.contains("Quit"));
        assert!(debug.contains("-9999"));
    }
}
