use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use ratatui::{backend::Backend, Terminal};

use crate::core::config::DashboardConfig;
use crate::core::system_monitor::{MetricsCollector, MetricsSource, SysinfoSource};

use super::event_handler::{CrosstermInput, InputSource};
use super::layout::PanelLayout;
use super::render::render_dashboard;
use super::terminal::{CrosstermSession, TerminalSession};

/// Loop driver state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

/// Monitor application state
///
/// Each cycle collects a snapshot, draws all panels in one frame, then waits
/// for input for whatever is left of the cycle interval.
pub struct MonitorApp<S, I> {
    collector: MetricsCollector<S>,
    input: I,
    layout: PanelLayout,
    interval: Duration,
    state: LoopState,
    cycles: u64,
}

impl<S: MetricsSource, I: InputSource> MonitorApp<S, I> {
    pub fn new(
        collector: MetricsCollector<S>,
        input: I,
        layout: PanelLayout,
        interval: Duration,
    ) -> Self {
        Self {
            collector,
            input,
            layout,
            interval,
            state: LoopState::Running,
            cycles: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Completed render passes
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn collector(&self) -> &MetricsCollector<S> {
        &self.collector
    }

    /// Run one collect, draw, input-check pass
    pub fn run_cycle<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> crate::Result<LoopState> {
        if self.state == LoopState::Terminated {
            return Ok(self.state);
        }

        let started = Instant::now();
        let snapshot = self.collector.snapshot();

        let layout = &self.layout;
        terminal.draw(|frame| render_dashboard(frame, layout, &snapshot))?;
        self.cycles += 1;

        let timeout = self.interval.saturating_sub(started.elapsed());
        let event = self.input.next_event(timeout)?;

        if event.should_terminate() {
            log::info!("{:?} received after {} cycles", event, self.cycles);
            self.state = LoopState::Terminated;
        }

        Ok(self.state)
    }

    /// Cycle until terminated, then restore the terminal
    ///
    /// The terminal is restored on every exit path, including errors.
    pub fn run<T: TerminalSession>(&mut self, session: &mut T) -> crate::Result<u64> {
        let result = loop {
            match self.run_cycle(session.terminal()) {
                Ok(LoopState::Running) => continue,
                Ok(LoopState::Terminated) => break Ok(self.cycles),
                Err(e) => break Err(e),
            }
        };

        let restored = session.restore();
        let cycles = result?;
        restored?;
        Ok(cycles)
    }
}

/// Run the monitor TUI application
pub fn run_monitor_app(config: DashboardConfig) -> Result<()> {
    config.validate()?;

    // SIGINT from outside the terminal; in raw mode Ctrl+C arrives as a key
    let interrupted = Arc::new(AtomicBool::new(false));
    let interrupted_clone = interrupted.clone();
    ctrlc::set_handler(move || {
        interrupted_clone.store(true, Ordering::Relaxed);
    })
    .map_err(|e| anyhow::anyhow!("Failed to set Ctrl+C handler: {}", e))?;

    let mut source = SysinfoSource::new(&config);
    source.prime();

    let mut session = CrosstermSession::enter()?;
    let size = session.terminal().size().context("Failed to read terminal size")?;
    let layout = PanelLayout::quadrants(size);

    log::info!(
        "Dashboard started: {}x{} screen, {:?} interval, disk {}",
        size.width,
        size.height,
        config.interval,
        config.mount_point.display()
    );
    for panel in layout.panels() {
        log::debug!(
            "{} panel at ({}, {}), {}x{} text area",
            panel.title,
            panel.area.x,
            panel.area.y,
            panel.interior_width(),
            panel.interior_height()
        );
    }

    let mut app = MonitorApp::new(
        MetricsCollector::new(source),
        CrosstermInput::new(interrupted),
        layout,
        config.interval,
    );

    let cycles = app.run(&mut session).context("Dashboard loop failed")?;
    log::info!("Dashboard terminated after {} cycles", cycles);

    Ok(())
}
