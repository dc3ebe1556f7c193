//! Raw mode and the alternate screen for one viewer session.
//!
//! The screen is left exactly once: when the guard drops, when a panic unwinds, or when
//! SIGINT/SIGTERM arrives and the event loop does not exit in time.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;

/// How long the signal watcher waits for the event loop before restoring and exiting itself.
#[cfg(unix)]
const SIGNAL_GRACE: std::time::Duration = std::time::Duration::from_secs(2);

/// Entering and leaving full-screen mode.
pub trait Screen: Send + Sync + 'static {
    fn enter(&self) -> io::Result<()>;
    fn leave(&self) -> io::Result<()>;
}

#[derive(Debug, Default)]
pub struct CrosstermScreen;

impl Screen for CrosstermScreen {
    fn enter(&self) -> io::Result<()> {
        use crossterm::event::EnableMouseCapture;
        use crossterm::terminal::{enable_raw_mode, EnterAlternateScreen};

        enable_raw_mode()?;
        crossterm::execute!(
            io::stdout(),
            EnterAlternateScreen,
            EnableMouseCapture,
            crossterm::cursor::Hide
        )
    }

    fn leave(&self) -> io::Result<()> {
        use crossterm::event::DisableMouseCapture;
        use crossterm::terminal::{disable_raw_mode, LeaveAlternateScreen};

        let raw = disable_raw_mode();
        let screen = crossterm::execute!(
            io::stdout(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            crossterm::cursor::Show
        );
        raw.and(screen)
    }
}

/// Shared by the guard, the panic hook and the signal watcher.
#[derive(Clone)]
pub struct ScreenRestorer {
    left: Arc<AtomicBool>,
    screen: Arc<dyn Screen>,
}

impl ScreenRestorer {
    pub fn restore(&self) -> io::Result<()> {
        if self.left.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        self.screen.leave()
    }
}

pub struct TerminalGuard {
    restorer: ScreenRestorer,
}

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        Self::enter(Arc::new(CrosstermScreen))
    }

    pub fn enter(screen: Arc<dyn Screen>) -> io::Result<Self> {
        screen.enter()?;
        Ok(Self {
            restorer: ScreenRestorer {
                left: Arc::new(AtomicBool::new(false)),
                screen,
            },
        })
    }

    pub fn restorer(&self) -> ScreenRestorer {
        self.restorer.clone()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.restorer.restore();
    }
}

/// Leaves the alternate screen before the previous hook prints the panic message.
pub fn restore_on_panic(restorer: ScreenRestorer) {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restorer.restore();
        previous(info);
    }));
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationSignal {
    Interrupt,
    Terminate,
}

impl TerminationSignal {
    /// Shell convention: 128 plus the signal number.
    pub fn exit_code(self) -> u8 {
        match self {
            TerminationSignal::Interrupt => 130,
            TerminationSignal::Terminate => 143,
        }
    }
}

/// Forwards SIGINT/SIGTERM to the event loop, then force-exits if the loop is stuck.
#[cfg(unix)]
pub fn watch_termination(restorer: ScreenRestorer, tx: Sender<TerminationSignal>) -> io::Result<()> {
    use signal_hook::consts::signal::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;

    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    std::thread::spawn(move || {
        let Some(raw) = signals.forever().next() else {
            return;
        };
        let signal = if raw == SIGINT {
            TerminationSignal::Interrupt
        } else {
            TerminationSignal::Terminate
        };
        let _ = tx.send(signal);

        std::thread::sleep(SIGNAL_GRACE);
        let _ = restorer.restore();
        std::process::exit(i32::from(signal.exit_code()));
    });
    Ok(())
}

#[cfg(not(unix))]
pub fn watch_termination(_restorer: ScreenRestorer, _tx: Sender<TerminationSignal>) -> io::Result<()> {
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/tui/terminal_guard.rs"]
mod tests;
