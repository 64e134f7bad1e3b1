//! Browser styling.
//!
//! Emphasis modifiers (bold header, reversed selection) are always applied,
//! since they carry meaning. Colour accents are optional.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Explicit setting, ignoring the environment.
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self::new(true)
    }
}

// ===== BrowserStyles =====

/// Styles for each region of the browser screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowserStyles {
    /// Column titles and rule.
    pub header: Style,
    /// Rows that are neither selected nor under the cursor.
    pub row: Style,
    /// Selected rows ("standout").
    pub selected: Style,
    /// The `>` `<` markers around the cursor row.
    pub cursor_marker: Style,
    /// Key legend on the last line.
    pub legend: Style,
}

impl BrowserStyles {
    /// Styles for the given color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        let header = Style::default().add_modifier(Modifier::BOLD);
        let selected = Style::default().add_modifier(Modifier::REVERSED);

        if config.colors_enabled() {
            Self {
                header: header.fg(Color::Cyan),
                row: Style::default(),
                selected,
                cursor_marker: Style::default().fg(Color::Yellow),
                legend: Style::default().fg(Color::DarkGray),
            }
        } else {
            Self {
                header,
                row: Style::default(),
                selected,
                cursor_marker: Style::default(),
                legend: Style::default(),
            }
        }
    }

    /// Style of a body row.
    pub fn row_style(&self, selected: bool) -> Style {
        if selected {
            self.selected
        } else {
            self.row
        }
    }
}

impl Default for BrowserStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::default())
    }
}

// ===== Tests =====
