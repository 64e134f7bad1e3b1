//! Test harness for driving the browser without a real terminal.
//!
//! [`ScriptedConsole`] implements [`Console`] over ratatui's `TestBackend`,
//! feeding a fixed list of events and recording every mode switch, so tests
//! can check both what was drawn and that the terminal was put back.

use crate::model::KeyToken;
use crate::view::{Console, TerminalEvent};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;
use std::collections::VecDeque;
use std::io;

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Captures the visual output character by character, preserving layout.
/// Empty lines are removed to keep snapshots clean.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Console that replays scripted events onto a `TestBackend`.
pub struct ScriptedConsole {
    terminal: Terminal<TestBackend>,
    events: VecDeque<TerminalEvent>,
    raw: bool,
    /// Number of `enter_raw_mode` calls.
    pub acquisitions: usize,
    /// Number of `restore_mode` calls.
    pub restorations: usize,
    sizes: VecDeque<(u16, u16)>,
    fail_enter: bool,
    fail_restore: bool,
}

impl ScriptedConsole {
    /// Console of `width` x `height` that will replay `keys` in order.
    pub fn new(width: u16, height: u16, keys: &[&str]) -> Self {
        let events = keys
            .iter()
            .map(|key| TerminalEvent::Key(KeyToken::new(key)))
            .collect();
        Self::with_events(width, height, events)
    }

    /// Console replaying arbitrary events.
    pub fn with_events(width: u16, height: u16, events: Vec<TerminalEvent>) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height))
            .expect("TestBackend terminal never fails to build");
        Self {
            terminal,
            events: events.into(),
            raw: false,
            acquisitions: 0,
            restorations: 0,
            sizes: VecDeque::new(),
            fail_enter: false,
            fail_restore: false,
        }
    }

    /// Make `enter_raw_mode` fail after switching raw mode on.
    pub fn failing_enter(mut self) -> Self {
        self.fail_enter = true;
        self
    }

    /// Make `restore_mode` report an error (it still leaves raw mode).
    pub fn failing_restore(mut self) -> Self {
        self.fail_restore = true;
        self
    }

    /// Whether the console is currently in raw mode.
    pub fn is_raw(&self) -> bool {
        self.raw
    }

    /// Rendered screen of the last frame.
    pub fn screen(&self) -> String {
        buffer_to_string(self.terminal.backend().buffer())
    }

    /// Append a window resize to `width` x `height` followed by `keys`.
    pub fn then_resize_to(mut self, width: u16, height: u16, keys: &[&str]) -> Self {
        self.events.push_back(TerminalEvent::Resize);
        self.sizes.push_back((width, height));
        self.events
            .extend(keys.iter().map(|key| TerminalEvent::Key(KeyToken::new(key))));
        self
    }
}

impl Console for ScriptedConsole {
    type Backend = TestBackend;

    fn enter_raw_mode(&mut self) -> io::Result<()> {
        self.acquisitions += 1;
        self.raw = true;
        if self.fail_enter {
            return Err(io::Error::other("scripted enter failure"));
        }
        Ok(())
    }

    fn restore_mode(&mut self) -> io::Result<()> {
        self.restorations += 1;
        self.raw = false;
        if self.fail_restore {
            return Err(io::Error::other("scripted restore failure"));
        }
        Ok(())
    }

    fn terminal(&mut self) -> &mut Terminal<TestBackend> {
        &mut self.terminal
    }

    fn next_event(&mut self) -> io::Result<TerminalEvent> {
        let event = self.events.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "scripted events exhausted")
        })?;
        if event == TerminalEvent::Resize {
            if let Some((width, height)) = self.sizes.pop_front() {
                self.terminal.backend_mut().resize(width, height);
            }
        }
        Ok(event)
    }
}
