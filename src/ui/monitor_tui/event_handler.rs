use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::Result;

/// Longest single poll, so an external SIGINT is noticed promptly
const POLL_SLICE: Duration = Duration::from_millis(100);

/// Events that can occur in the monitor TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorEvent {
    /// Quit the application ('q')
    Quit,
    /// Ctrl+C key or SIGINT
    Interrupt,
    /// No action
    None,
}

impl MonitorEvent {
    pub fn should_terminate(self) -> bool {
        matches!(self, MonitorEvent::Quit | MonitorEvent::Interrupt)
    }
}

/// Map a key press to a monitor event
pub fn map_key(key: KeyEvent) -> MonitorEvent {
    if key.kind != KeyEventKind::Press {
        return MonitorEvent::None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            MonitorEvent::Interrupt
        }
        KeyCode::Char('q') => MonitorEvent::Quit,
        _ => MonitorEvent::None,
    }
}

/// The input check at the end of each cycle
pub trait InputSource {
    /// Wait at most `timeout` for a terminating event.
    ///
    /// Returns `MonitorEvent::None` once the wait runs out.
    fn next_event(&mut self, timeout: Duration) -> Result<MonitorEvent>;
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn next_event(&mut self, timeout: Duration) -> Result<MonitorEvent> {
        (**self).next_event(timeout)
    }
}

/// Keyboard input from the terminal, plus a flag set by the SIGINT handler
pub struct CrosstermInput {
    interrupted: Arc<AtomicBool>,
}

impl CrosstermInput {
    pub fn new(interrupted: Arc<AtomicBool>) -> Self {
        Self { interrupted }
    }
}

impl InputSource for CrosstermInput {
    fn next_event(&mut self, timeout: Duration) -> Result<MonitorEvent> {
        let deadline = Instant::now() + timeout;

        loop {
            if self.interrupted.load(Ordering::Relaxed) {
                return Ok(MonitorEvent::Interrupt);
            }

            let remaining = deadline.saturating_duration_since(Instant::now());

            match event::poll(remaining.min(POLL_SLICE)) {
                Ok(true) => {
                    if let Event::Key(key) = event::read()? {
                        let monitor_event = map_key(key);
                        if monitor_event.should_terminate() {
                            return Ok(monitor_event);
                        }
                    }
                }
                Ok(false) => {}
                // A signal landed during the wait; the flag check above handles it
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }

            if Instant::now() >= deadline {
                return Ok(MonitorEvent::None);
            }
        }
    }
}
