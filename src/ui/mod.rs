// UI module

pub mod monitor_tui;

// Re-export commonly used items for cleaner imports
pub use monitor_tui::{run_monitor_app, MonitorApp, PanelLayout};
