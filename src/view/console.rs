//! Terminal control surface.
//!
//! The dispatch loop only talks to a [`Console`]: switch the terminal into
//! raw mode, draw through a ratatui [`Terminal`], read the next event, switch
//! back. [`CrosstermConsole`] is the real terminal; tests drive the loop with
//! a scripted console over `TestBackend`.

use crate::model::KeyToken;
use crossterm::{
    cursor::{Hide, Show},
    event::{
        self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
    ExecutableCommand,
};
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use std::io::{self, Stderr};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;

/// Set while a [`CrosstermConsole`] holds the terminal; read by the panic hook.
static TERMINAL_ACQUIRED: AtomicBool = AtomicBool::new(false);

/// Input the dispatch loop reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEvent {
    /// A key press, already normalised.
    Key(KeyToken),
    /// The terminal changed size; the screen must be redrawn.
    Resize,
}

/// A terminal the browser can take over.
pub trait Console {
    /// ratatui backend used for drawing.
    type Backend: Backend;

    /// Disable echo and line buffering and take over the screen.
    ///
    /// # Errors
    ///
    /// Any terminal I/O failure. The caller restores on failure, so
    /// implementations may leave the terminal half-configured.
    fn enter_raw_mode(&mut self) -> io::Result<()>;

    /// Undo everything [`Console::enter_raw_mode`] did.
    ///
    /// Must be safe to call after a partial or failed `enter_raw_mode`.
    ///
    /// # Errors
    ///
    /// Any terminal I/O failure; every restore step is still attempted.
    fn restore_mode(&mut self) -> io::Result<()>;

    /// Drawing surface; its size is the screen geometry.
    fn terminal(&mut self) -> &mut Terminal<Self::Backend>;

    /// Block until the next key press or resize.
    ///
    /// # Errors
    ///
    /// Any terminal I/O failure.
    fn next_event(&mut self) -> io::Result<TerminalEvent>;
}

/// The process's real terminal, driven through crossterm.
///
/// The screen is drawn on stderr. Stdout stays free for whatever the caller
/// prints after the browser exits, so it can be redirected or piped.
pub struct CrosstermConsole {
    terminal: Terminal<CrosstermBackend<Stderr>>,
    keyboard_enhanced: bool,
}

impl CrosstermConsole {
    /// Console over stderr. Does not touch terminal modes yet.
    ///
    /// # Errors
    ///
    /// Fails if the terminal size cannot be queried.
    pub fn new() -> io::Result<Self> {
        install_panic_hook();
        let terminal = Terminal::new(CrosstermBackend::new(io::stderr()))?;
        Ok(Self {
            terminal,
            keyboard_enhanced: false,
        })
    }
}

impl Console for CrosstermConsole {
    type Backend = CrosstermBackend<Stderr>;

    fn enter_raw_mode(&mut self) -> io::Result<()> {
        TERMINAL_ACQUIRED.store(true, Ordering::SeqCst);
        enable_raw_mode()?;
        let mut screen = io::stderr();
        screen.execute(EnterAlternateScreen)?;
        screen.execute(Hide)?;

        // Lets terminals that support it report Ctrl+<key> and Esc unambiguously.
        if matches!(supports_keyboard_enhancement(), Ok(true)) {
            screen.execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES,
            ))?;
            self.keyboard_enhanced = true;
        }

        self.terminal.clear()
    }

    fn restore_mode(&mut self) -> io::Result<()> {
        TERMINAL_ACQUIRED.store(false, Ordering::SeqCst);
        let mut screen = io::stderr();
        let keyboard = if self.keyboard_enhanced {
            self.keyboard_enhanced = false;
            screen.execute(PopKeyboardEnhancementFlags).map(|_| ())
        } else {
            Ok(())
        };
        let cursor = screen.execute(Show).map(|_| ());
        let alternate = screen.execute(LeaveAlternateScreen).map(|_| ());
        let raw = disable_raw_mode();

        keyboard.and(cursor).and(alternate).and(raw)
    }

    fn terminal(&mut self) -> &mut Terminal<Self::Backend> {
        &mut self.terminal
    }

    fn next_event(&mut self) -> io::Result<TerminalEvent> {
        loop {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(token) = KeyToken::from_key_event(key) {
                        return Ok(TerminalEvent::Key(token));
                    }
                }
                Event::Resize(_, _) => return Ok(TerminalEvent::Resize),
                _ => {}
            }
        }
    }
}

/// Restore the terminal before the default hook prints a panic message, so
/// the message lands on the normal screen. The guard's `Drop` still runs
/// during unwinding and finishes the restore.
fn install_panic_hook() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            if TERMINAL_ACQUIRED.load(Ordering::SeqCst) {
                let mut screen = io::stderr();
                let _ = screen.execute(Show);
                let _ = screen.execute(LeaveAlternateScreen);
                let _ = disable_raw_mode();
            }
            default_hook(info);
        }));
    });
}
