//! Terminal shell: the dispatch loop and everything that touches the screen.

pub mod console;
pub mod guard;
pub mod render;
mod styles;

pub use console::{Console, CrosstermConsole, TerminalEvent};
pub use guard::RawModeGuard;
pub use render::render_browser;
pub use styles::{BrowserStyles, ColorConfig};

use crate::config::keybindings::BuiltinBindings;
use crate::format::{Table, TableFormatter};
use crate::model::{BrowserError, Record};
use crate::state::{builtin_actions, Action, ActionSet, BrowserState};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// An interactive browser over a fixed record list.
///
/// Built from the records and a [`TableFormatter`]; extra actions, key
/// overrides for the built-ins and color settings are optional.
///
/// ```no_run
/// use conbrowse::format::SeriesTable;
/// use conbrowse::model::{RecordId, Series};
/// use conbrowse::view::Browser;
///
/// let records = vec![Series { id: RecordId::new(1), name: "Discworld".into() }];
/// let final_state = Browser::new(records, SeriesTable).run()?;
/// for series in final_state.selected_records() {
///     println!("{}", series.name);
/// }
/// # Ok::<(), conbrowse::model::BrowserError>(())
/// ```
pub struct Browser<R> {
    records: Arc<[R]>,
    formatter: Box<dyn TableFormatter<R>>,
    actions: Vec<Action<R>>,
    bindings: BuiltinBindings,
    styles: BrowserStyles,
}

impl<R: Record + 'static> Browser<R> {
    /// Browser over `records`, drawn with `formatter`.
    pub fn new(
        records: impl Into<Arc<[R]>>,
        formatter: impl TableFormatter<R> + 'static,
    ) -> Self {
        Self {
            records: records.into(),
            formatter: Box::new(formatter),
            actions: Vec::new(),
            bindings: BuiltinBindings::default(),
            styles: BrowserStyles::default(),
        }
    }

    /// Add caller-defined actions alongside the built-ins.
    pub fn with_actions(mut self, actions: impl IntoIterator<Item = Action<R>>) -> Self {
        self.actions.extend(actions);
        self
    }

    /// Replace the keys of the built-in actions.
    pub fn with_bindings(mut self, bindings: BuiltinBindings) -> Self {
        self.bindings = bindings;
        self
    }

    /// Color settings for the screen.
    pub fn with_color(mut self, config: ColorConfig) -> Self {
        self.styles = BrowserStyles::with_color_config(config);
        self
    }

    /// Run on the process's terminal until the state becomes inactive.
    ///
    /// # Errors
    ///
    /// See [`Browser::run_on`].
    pub fn run(self) -> Result<BrowserState<R>, BrowserError> {
        let mut console = CrosstermConsole::new()?;
        self.run_on(&mut console)
    }

    /// Run on `console` and return the final state.
    ///
    /// The console is in raw mode for exactly the duration of this call, and
    /// is restored on every exit path, including a panic inside a transform
    /// or the formatter.
    ///
    /// # Errors
    ///
    /// - [`BrowserError::MalformedTable`] if the formatter output does not
    ///   match the records; nothing is drawn for that frame.
    /// - [`BrowserError::Interrupted`] on Ctrl+C.
    /// - [`BrowserError::Terminal`] for terminal I/O failures, including a
    ///   failed restore.
    pub fn run_on<C: Console>(self, console: &mut C) -> Result<BrowserState<R>, BrowserError> {
        let Browser {
            records,
            formatter,
            actions,
            bindings,
            styles,
        } = self;

        let actions = ActionSet::new(actions, builtin_actions(&bindings));
        let state = BrowserState::new(records);
        info!(
            records = state.len(),
            actions = actions.len(),
            "Starting browser"
        );

        let mut guard = RawModeGuard::acquire(console)?;
        let outcome = event_loop(&mut *guard, state, formatter.as_ref(), &actions, &styles);
        let released = guard.release();

        let state = outcome?;
        released?;
        info!(selected = state.selected_ids().len(), "Browser exited");
        Ok(state)
    }
}

/// Render, wait for input, dispatch; until the state is inactive.
fn event_loop<R: Record, C: Console>(
    console: &mut C,
    mut state: BrowserState<R>,
    formatter: &dyn TableFormatter<R>,
    actions: &ActionSet<R>,
    styles: &BrowserStyles,
) -> Result<BrowserState<R>, BrowserError> {
    let legend = actions.legend();

    while state.is_active() {
        let text = formatter.tabulate(state.records());
        let table = Table::parse(&text, state.len())
            .inspect_err(|err| warn!(error = %err, "Formatter output rejected"))?;

        console
            .terminal()
            .draw(|frame| render_browser(frame, &table, &state, &legend, styles))?;

        match console.next_event()? {
            TerminalEvent::Resize => debug!("Terminal resized, redrawing"),
            TerminalEvent::Key(key) if key.is_interrupt() => {
                info!("Interrupted by Ctrl+C");
                return Err(BrowserError::Interrupted);
            }
            TerminalEvent::Key(key) => {
                debug!(key = %key, cursor = state.cursor(), "Key pressed");
                state = actions.dispatch(state, &key);
            }
        }
    }

    Ok(state)
}
