// Core business logic module

pub mod config;
pub mod system_monitor;

// Re-export commonly used items
pub use config::{DashboardConfig, GpuCommandConfig};
pub use system_monitor::{MetricSnapshot, MetricsCollector, ResourceKind};
