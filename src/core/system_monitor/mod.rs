//! System monitoring core functionality.
//!
//! This module queries CPU, memory, disk and GPU state and turns each reading
//! into the text block shown in that resource's panel.

mod collector;
mod gpu;
mod metrics;
pub mod summary;

pub use collector::{MetricsCollector, MetricsSource, SysinfoSource};
pub use gpu::{describe_gpu_output, GpuProvider};
pub use metrics::{
    CpuMetrics, DiskMetrics, GpuOutput, MemoryMetrics, MetricSnapshot, PanelRecord, ResourceKind,
    SnapshotRecord,
};
