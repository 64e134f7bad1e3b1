//! Scoped terminal acquisition.

use super::console::Console;
use std::io;
use std::ops::{Deref, DerefMut};
use tracing::{debug, error, warn};

/// Holds a [`Console`] in raw mode and puts it back exactly once.
///
/// [`RawModeGuard::release`] is the normal exit and reports restore errors.
/// Every other exit (an early `?` return, a panic in a transform or a
/// formatter) restores from `Drop` and can only log failures.
pub struct RawModeGuard<'a, C: Console> {
    console: &'a mut C,
    released: bool,
}

impl<'a, C: Console> RawModeGuard<'a, C> {
    /// Put `console` into raw mode.
    ///
    /// If setup fails part way, whatever was already changed is restored
    /// before the error is returned.
    ///
    /// # Errors
    ///
    /// The setup error from [`Console::enter_raw_mode`].
    pub fn acquire(console: &'a mut C) -> io::Result<Self> {
        if let Err(err) = console.enter_raw_mode() {
            if let Err(restore_err) = console.restore_mode() {
                warn!(error = %restore_err, "Restore after failed raw mode setup also failed");
            }
            return Err(err);
        }
        debug!("Terminal acquired");
        Ok(Self {
            console,
            released: false,
        })
    }

    /// Restore the terminal and surface any failure.
    ///
    /// # Errors
    ///
    /// The error from [`Console::restore_mode`].
    pub fn release(mut self) -> io::Result<()> {
        self.released = true;
        let result = self.console.restore_mode();
        debug!("Terminal released");
        result
    }
}

impl<C: Console> Deref for RawModeGuard<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.console
    }
}

impl<C: Console> DerefMut for RawModeGuard<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        self.console
    }
}

impl<C: Console> Drop for RawModeGuard<'_, C> {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        if let Err(err) = self.console.restore_mode() {
            error!(error = %err, "Failed to restore terminal");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_harness::ScriptedConsole;

    #[test]
    fn release_restores_once() {
        let mut console = ScriptedConsole::new(20, 5, &[]);
        let guard = RawModeGuard::acquire(&mut console).expect("acquire");
        assert!(guard.is_raw());

        guard.release().expect("release");

        assert!(!console.is_raw());
        assert_eq!(console.acquisitions, 1);
        assert_eq!(console.restorations, 1);
    }

    #[test]
    fn drop_restores_when_not_released() {
        let mut console = ScriptedConsole::new(20, 5, &[]);
        {
            let _guard = RawModeGuard::acquire(&mut console).expect("acquire");
        }
        assert!(!console.is_raw());
        assert_eq!(console.restorations, 1);
    }

    #[test]
    fn drop_restores_during_unwind() {
        let mut console = ScriptedConsole::new(20, 5, &[]);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = RawModeGuard::acquire(&mut console).expect("acquire");
            panic!("boom");
        }));

        assert!(result.is_err());
        assert!(!console.is_raw());
        assert_eq!(console.restorations, 1);
    }

    #[test]
    fn release_error_is_returned_and_not_retried() {
        let mut console = ScriptedConsole::new(20, 5, &[]).failing_restore();
        let guard = RawModeGuard::acquire(&mut console).expect("acquire");

        assert!(guard.release().is_err());
        assert_eq!(console.restorations, 1);
    }

    #[test]
    fn failed_acquire_rolls_back() {
        let mut console = ScriptedConsole::new(20, 5, &[]).failing_enter();

        assert!(RawModeGuard::acquire(&mut console).is_err());
        assert!(!console.is_raw());
        assert_eq!(console.restorations, 1);
    }
}
