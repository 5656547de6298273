//! Terminal User Interface for system monitoring.
//!
//! Four fixed panels, one per resource, redrawn together each cycle.

mod app;
mod event_handler;
mod layout;
mod render;
mod terminal;

pub use app::{run_monitor_app, LoopState, MonitorApp};
pub use event_handler::{map_key, CrosstermInput, InputSource, MonitorEvent};
pub use layout::{Panel, PanelLayout, Quadrant};
pub use render::{render_dashboard, render_panel};
pub use terminal::{restore_terminal, CrosstermSession, TerminalSession};
