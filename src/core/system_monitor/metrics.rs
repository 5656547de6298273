use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Resource class a panel is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Cpu,
    Gpu,
    Memory,
    Disk,
}

impl ResourceKind {
    /// All resources in panel order (top-left, top-right, bottom-left, bottom-right)
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Cpu,
        ResourceKind::Gpu,
        ResourceKind::Memory,
        ResourceKind::Disk,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ResourceKind::Cpu => "CPU",
            ResourceKind::Gpu => "GPU",
            ResourceKind::Memory => "RAM",
            ResourceKind::Disk => "Storage",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CpuMetrics {
    pub global_usage: f32,
    pub per_core_usage: Vec<f32>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryMetrics {
    pub total_bytes: u64,
    pub used_bytes: u64,
    pub available_bytes: u64,
    pub usage_percent: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiskMetrics {
    pub mount_point: String,
    pub total_bytes: u64,
    pub used_bytes: u64,
    pub available_bytes: u64,
    pub usage_percent: f32,
}

/// Raw result of one GPU tool run. `code` is `None` when the process was
/// terminated by a signal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GpuOutput {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

/// One cycle's worth of formatted panel text
///
/// Each field is either the text to display or the error that replaced it.
#[derive(Debug)]
pub struct MetricSnapshot {
    pub timestamp: i64, // Unix timestamp
    pub cpu: Result<String>,
    pub gpu: Result<String>,
    pub memory: Result<String>,
    pub disk: Result<String>,
}

impl MetricSnapshot {
    pub fn outcome(&self, kind: ResourceKind) -> &Result<String> {
        match kind {
            ResourceKind::Cpu => &self.cpu,
            ResourceKind::Gpu => &self.gpu,
            ResourceKind::Memory => &self.memory,
            ResourceKind::Disk => &self.disk,
        }
    }

    /// Text shown in a panel: the data, or the one-line diagnostic
    pub fn text(&self, kind: ResourceKind) -> String {
        match self.outcome(kind) {
            Ok(text) => text.clone(),
            Err(e) => e.to_string(),
        }
    }

    pub fn to_record(&self) -> SnapshotRecord {
        SnapshotRecord {
            timestamp: self.timestamp,
            panels: ResourceKind::ALL
                .iter()
                .map(|&resource| PanelRecord {
                    resource,
                    title: resource.title().to_string(),
                    ok: self.outcome(resource).is_ok(),
                    text: self.text(resource),
                })
                .collect(),
        }
    }
}

/// Serializable form of a snapshot, used by `--once --json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotRecord {
    pub timestamp: i64,
    pub panels: Vec<PanelRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelRecord {
    pub resource: ResourceKind,
    pub title: String,
    pub ok: bool,
    pub text: String,
}
