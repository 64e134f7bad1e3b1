//! Key bindings for the built-in actions.

use crate::model::KeyToken;
use serde::Deserialize;

/// Trigger keys plus legend aliases for one built-in action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// Keys that fire the action.
    pub keys: Vec<KeyToken>,
    /// Labels shown in the legend.
    pub aliases: Vec<String>,
}

impl Binding {
    fn new(keys: &[&str], aliases: &[&str]) -> Self {
        Self {
            keys: keys.iter().map(KeyToken::new).collect(),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Binding for user-configured key names; aliases are derived from the keys.
    pub fn from_key_names<S: AsRef<str>>(names: &[S]) -> Self {
        let keys: Vec<KeyToken> = names.iter().map(KeyToken::new).collect();
        let aliases = keys.iter().map(legend_alias).collect();
        Self { keys, aliases }
    }
}

/// Bindings for the four built-in actions.
///
/// Defaults are vim-style with arrow-key equivalents: `K`/`↑` up, `J`/`↓`
/// down, `Enter` select, `Q` quit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltinBindings {
    /// Cursor up.
    pub up: Binding,
    /// Cursor down.
    pub down: Binding,
    /// Toggle selection.
    pub select: Binding,
    /// Quit.
    pub quit: Binding,
}

impl Default for BuiltinBindings {
    fn default() -> Self {
        Self {
            up: Binding::new(&["K", KeyToken::UP], &["K", "↑"]),
            down: Binding::new(&["J", KeyToken::DOWN], &["J", "↓"]),
            select: Binding::new(&[KeyToken::ENTER], &["Enter"]),
            quit: Binding::new(&["Q"], &["Q"]),
        }
    }
}

/// `[keybindings]` table of the config file.
///
/// ```toml
/// [keybindings]
/// up = ["k", "up"]
/// quit = ["q", "esc"]
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct KeyBindingsSection {
    /// Keys for cursor up.
    #[serde(default)]
    pub up: Option<Vec<String>>,
    /// Keys for cursor down.
    #[serde(default)]
    pub down: Option<Vec<String>>,
    /// Keys for toggling selection.
    #[serde(default)]
    pub select: Option<Vec<String>>,
    /// Keys for quitting.
    #[serde(default)]
    pub quit: Option<Vec<String>>,
}

impl BuiltinBindings {
    /// Defaults with every binding present in `section` replaced.
    ///
    /// An empty key list is ignored rather than leaving an action unreachable.
    pub fn with_overrides(section: &KeyBindingsSection) -> Self {
        let mut bindings = Self::default();
        let overrides = [
            (&mut bindings.up, &section.up),
            (&mut bindings.down, &section.down),
            (&mut bindings.select, &section.select),
            (&mut bindings.quit, &section.quit),
        ];
        for (binding, names) in overrides {
            if let Some(names) = names.as_deref().filter(|n| !n.is_empty()) {
                *binding = Binding::from_key_names(names);
            }
        }
        bindings
    }
}

/// Legend label for a key token: arrows as glyphs, named keys title-cased.
fn legend_alias(key: &KeyToken) -> String {
    match key.as_str() {
        KeyToken::UP => "↑".to_string(),
        KeyToken::DOWN => "↓".to_string(),
        "LEFT" => "←".to_string(),
        "RIGHT" => "→".to_string(),
        " " => "Space".to_string(),
        name if name.chars().count() > 1 => {
            let mut chars = name.chars();
            chars
                .next()
                .map(|first| first.to_string() + &chars.as_str().to_lowercase())
                .unwrap_or_default()
        }
        name => name.to_string(),
    }
}
