//! Terminal ownership for one picker session
//!
//! The UI is drawn on stderr so stdout stays free for the selected path
//! (`cd "$(qs)"` captures only stdout). The terminal is handed back on drop,
//! on panic, and when SIGTERM, SIGHUP or SIGINT arrives while the guard is
//! held.

use crate::ui::error::{Result, UiError};
use crate::ui::traits::KeySource;
use crate::ui::types::InputEvent;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use crossterm::{cursor, execute};
use std::io::{self, IsTerminal};
use std::sync::Once;
use std::sync::atomic::{AtomicBool, Ordering};

/// Whether a guard currently holds the terminal
static ACTIVE: AtomicBool = AtomicBool::new(false);
static PANIC_HOOK: Once = Once::new();

fn restore_terminal() {
    if ACTIVE.swap(false, Ordering::SeqCst) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen, cursor::Show);
    }
}

#[cfg(unix)]
fn exit_on_signal(signal: i32) {
    restore_terminal();
    tracing::warn!(signal, "terminated by signal");
    std::process::exit(i32::from(crate::EXIT_FATAL));
}

#[cfg(unix)]
mod signals {
    use signal_hook::iterator::{Handle, Signals};
    use std::io;
    use std::thread::{self, JoinHandle};

    pub(super) const TERMINATING: [i32; 3] = [
        signal_hook::consts::SIGTERM,
        signal_hook::consts::SIGHUP,
        signal_hook::consts::SIGINT,
    ];

    /// Background thread running `on_signal` for the first signal delivered
    pub(super) struct SignalWatch {
        handle: Handle,
        thread: Option<JoinHandle<()>>,
    }

    impl SignalWatch {
        pub(super) fn spawn(
            signals: &[i32],
            on_signal: impl FnOnce(i32) + Send + 'static,
        ) -> io::Result<Self> {
            let mut signals = Signals::new(signals)?;
            let handle = signals.handle();
            let thread = thread::Builder::new()
                .name("qs-signals".to_string())
                .spawn(move || {
                    if let Some(signal) = signals.forever().next() {
                        on_signal(signal);
                    }
                })?;
            Ok(Self {
                handle,
                thread: Some(thread),
            })
        }
    }

    impl Drop for SignalWatch {
        fn drop(&mut self) {
            self.handle.close();
            if let Some(thread) = self.thread.take() {
                let _ = thread.join();
            }
        }
    }

    impl std::fmt::Debug for SignalWatch {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("SignalWatch").finish_non_exhaustive()
        }
    }
}

fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore_terminal();
            original_hook(info);
        }));
    });
}

/// Raw mode + alternate screen, released on drop
///
/// Only one guard may be alive at a time.
#[derive(Debug)]
pub struct TerminalGuard {
    #[cfg(unix)]
    _signals: signals::SignalWatch,
}

impl TerminalGuard {
    /// Take over the terminal
    ///
    /// # Errors
    ///
    /// Returns `UiError::TerminalUnavailable` when stderr is not a terminal
    /// or raw mode cannot be enabled. Nothing is left half-initialized.
    pub fn acquire() -> Result<Self> {
        if !io::stderr().is_terminal() {
            return Err(UiError::TerminalUnavailable(
                "stderr is not a terminal".to_string(),
            ));
        }
        if ACTIVE.load(Ordering::SeqCst) {
            return Err(UiError::TerminalUnavailable(
                "terminal already in use by another picker".to_string(),
            ));
        }

        install_panic_hook();
        #[cfg(unix)]
        let watch = signals::SignalWatch::spawn(&signals::TERMINATING, exit_on_signal).map_err(
            |e| UiError::TerminalUnavailable(format!("cannot watch termination signals: {e}")),
        )?;

        enable_raw_mode()
            .map_err(|e| UiError::TerminalUnavailable(format!("cannot enable raw mode: {e}")))?;
        ACTIVE.store(true, Ordering::SeqCst);

        if let Err(e) = execute!(io::stderr(), EnterAlternateScreen, cursor::Hide) {
            restore_terminal();
            return Err(UiError::TerminalUnavailable(format!(
                "cannot enter alternate screen: {e}"
            )));
        }

        tracing::debug!("terminal acquired");
        Ok(Self {
            #[cfg(unix)]
            _signals: watch,
        })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
        tracing::debug!("terminal restored");
    }
}

/// Blocking key source backed by crossterm
#[derive(Debug, Default)]
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn next_event(&mut self) -> Result<Option<InputEvent>> {
        loop {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    return Ok(Some(InputEvent::Key(key)));
                }
                Event::Resize(_, _) => return Ok(Some(InputEvent::Resize)),
                _ => {}
            }
        }
    }
}
