//! Key vocabulary shared by actions and the input layer.
//!
//! Every key press is reduced to a [`KeyToken`]: an upper-cased string that
//! actions list in their trigger sets. Printable keys become the character
//! itself (`j` and `J` both become `"J"`), special keys get a fixed name.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::fmt;

/// Upper-case-normalized name of a key press.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KeyToken(String);

impl KeyToken {
    /// Arrow up.
    pub const UP: &'static str = "UP";
    /// Arrow down.
    pub const DOWN: &'static str = "DOWN";
    /// Enter / return.
    pub const ENTER: &'static str = "ENTER";
    /// Ctrl+C, reported as a key while in raw mode.
    pub const INTERRUPT: &'static str = "CTRL+C";

    /// Normalize a raw key name. Matching is case-insensitive.
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().to_uppercase())
    }

    /// Translate a crossterm key event.
    ///
    /// Returns `None` for key releases and keys outside the vocabulary
    /// (media keys, bare modifiers, ...).
    pub fn from_key_event(event: KeyEvent) -> Option<Self> {
        if event.kind == KeyEventKind::Release {
            return None;
        }

        let name = match event.code {
            KeyCode::Char(c) if event.modifiers.contains(KeyModifiers::CONTROL) => {
                format!("CTRL+{c}")
            }
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Enter => Self::ENTER.to_string(),
            KeyCode::Up => Self::UP.to_string(),
            KeyCode::Down => Self::DOWN.to_string(),
            KeyCode::Left => "LEFT".to_string(),
            KeyCode::Right => "RIGHT".to_string(),
            KeyCode::Esc => "ESC".to_string(),
            KeyCode::Tab => "TAB".to_string(),
            KeyCode::BackTab => "BACKTAB".to_string(),
            KeyCode::Backspace => "BACKSPACE".to_string(),
            KeyCode::Delete => "DELETE".to_string(),
            KeyCode::Insert => "INSERT".to_string(),
            KeyCode::Home => "HOME".to_string(),
            KeyCode::End => "END".to_string(),
            KeyCode::PageUp => "PAGEUP".to_string(),
            KeyCode::PageDown => "PAGEDOWN".to_string(),
            KeyCode::F(n) => format!("F{n}"),
            _ => return None,
        };

        Some(Self::new(name))
    }

    /// The normalized token text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the Ctrl+C token.
    pub fn is_interrupt(&self) -> bool {
        self.0 == Self::INTERRUPT
    }
}

impl From<&str> for KeyToken {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for KeyToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
