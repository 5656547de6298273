use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use ratatui::backend::TestBackend;
use ratatui::layout::Size;
use ratatui::Terminal;
use treetop::core::system_monitor::{
    CpuMetrics, DiskMetrics, GpuOutput, MemoryMetrics, MetricsCollector, MetricsSource,
};
use treetop::ui::monitor_tui::{
    InputSource, LoopState, MonitorApp, MonitorEvent, PanelLayout, TerminalSession,
};
use treetop::{Result, TreetopError};

const GB: u64 = 1024 * 1024 * 1024;

/// Stable readings; counts how many snapshots were taken
#[derive(Default)]
struct StableSource {
    snapshots: u32,
}

impl MetricsSource for StableSource {
    fn cpu(&mut self) -> Result<CpuMetrics> {
        self.snapshots += 1;
        Ok(CpuMetrics {
            global_usage: 12.5,
            per_core_usage: vec![10.0, 15.0],
        })
    }

    fn memory(&mut self) -> Result<MemoryMetrics> {
        Ok(MemoryMetrics {
            total_bytes: 4 * GB,
            used_bytes: GB,
            available_bytes: 3 * GB,
            usage_percent: 25.0,
        })
    }

    fn disk(&mut self) -> Result<DiskMetrics> {
        Ok(DiskMetrics {
            mount_point: "/".to_string(),
            total_bytes: 100 * GB,
            used_bytes: 40 * GB,
            available_bytes: 60 * GB,
            usage_percent: 40.0,
        })
    }

    fn gpu_program(&self) -> &str {
        "rocm-smi"
    }

    fn gpu(&mut self) -> Result<GpuOutput> {
        Err(TreetopError::gpu_invocation(
            "rocm-smi",
            "No such file or directory (os error 2)",
        ))
    }
}

struct ScriptedInput {
    events: VecDeque<MonitorEvent>,
    waits: Vec<Duration>,
}

impl ScriptedInput {
    fn new(events: Vec<MonitorEvent>) -> Self {
        Self {
            events: events.into(),
            waits: Vec::new(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn next_event(&mut self, timeout: Duration) -> Result<MonitorEvent> {
        self.waits.push(timeout);
        Ok(self.events.pop_front().unwrap_or(MonitorEvent::None))
    }
}

/// In-memory terminal that records restoration
struct TestSession {
    terminal: Terminal<TestBackend>,
    draws_seen: usize,
    restored: bool,
}

impl TestSession {
    fn new(width: u16, height: u16) -> Self {
        Self {
            terminal: Terminal::new(TestBackend::new(width, height)).unwrap(),
            draws_seen: 0,
            restored: false,
        }
    }

    fn row(&self, y: u16) -> String {
        let buffer = self.terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }
}

impl TerminalSession for TestSession {
    type Backend = TestBackend;

    fn terminal(&mut self) -> &mut Terminal<TestBackend> {
        self.draws_seen += 1;
        &mut self.terminal
    }

    fn restore(&mut self) -> Result<()> {
        self.restored = true;
        Ok(())
    }
}

fn dashboard(events: Vec<MonitorEvent>) -> MonitorApp<StableSource, ScriptedInput> {
    MonitorApp::new(
        MetricsCollector::new(StableSource::default()),
        ScriptedInput::new(events),
        PanelLayout::quadrants(Size::new(80, 24)),
        Duration::from_millis(500),
    )
}

#[test]
fn test_three_cycles_then_quit() {
    let mut app = dashboard(vec![
        MonitorEvent::None,
        MonitorEvent::None,
        MonitorEvent::Quit,
    ]);
    let mut session = TestSession::new(80, 24);

    let cycles = app.run(&mut session).unwrap();

    assert_eq!(cycles, 3);
    assert_eq!(app.cycles(), 3);
    assert_eq!(app.collector().source().snapshots, 3);
    assert_eq!(session.draws_seen, 3);
    assert_eq!(app.state(), LoopState::Terminated);
    assert!(session.restored);
}

#[test]
fn test_interrupt_is_clean_termination() {
    let mut app = dashboard(vec![MonitorEvent::Interrupt]);
    let mut session = TestSession::new(80, 24);

    assert_eq!(app.run(&mut session).unwrap(), 1);
    assert!(session.restored);
}

#[test]
fn test_input_wait_bounded_by_interval() {
    let mut input = ScriptedInput::new(vec![MonitorEvent::None, MonitorEvent::Quit]);
    let mut session = TestSession::new(80, 24);

    let mut app = MonitorApp::new(
        MetricsCollector::new(StableSource::default()),
        &mut input,
        PanelLayout::quadrants(Size::new(80, 24)),
        Duration::from_millis(500),
    );
    app.run(&mut session).unwrap();
    drop(app);

    assert_eq!(input.waits.len(), 2);
    assert!(input.waits.iter().all(|w| *w <= Duration::from_millis(500)));
}

#[test]
fn test_rendered_frame_shows_all_panels_and_gpu_diagnostic() {
    let mut app = dashboard(vec![MonitorEvent::Quit]);
    let mut session = TestSession::new(80, 24);

    app.run(&mut session).unwrap();

    let header = session.row(0);
    assert!(header.contains(" CPU "));
    assert!(header.contains(" GPU "));

    let top = session.row(1);
    assert!(top.contains("Overall CPU: 12.5%"));
    assert!(top.contains("Exception when calling rocm-smi"));

    assert!(session.row(12).contains(" RAM "));
    assert!(session.row(12).contains(" Storage "));
    assert!(session.row(13).contains("RAM Total: 4096 MB"));
    assert!(session.row(13).contains("Total: 100 GB"));
    assert!(session.row(14).contains("Used: 1024 MB (25.0%)"));
    assert!(session.row(14).contains("Used: 40 GB (40.0%)"));
}

struct BrokenInput;

impl InputSource for BrokenInput {
    fn next_event(&mut self, _timeout: Duration) -> Result<MonitorEvent> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "input device lost").into())
    }
}

#[test]
fn test_terminal_restored_when_loop_fails() {
    let mut app = MonitorApp::new(
        MetricsCollector::new(StableSource::default()),
        BrokenInput,
        PanelLayout::quadrants(Size::new(80, 24)),
        Duration::from_millis(500),
    );
    let mut session = TestSession::new(80, 24);

    let err = app.run(&mut session).unwrap_err();
    assert!(matches!(err, TreetopError::Io(_)));
    assert!(err.to_string().contains("input device lost"));
    assert!(session.restored);
}
