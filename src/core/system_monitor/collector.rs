use std::path::PathBuf;

use sysinfo::{CpuRefreshKind, Disks, MemoryRefreshKind, RefreshKind, System};

use crate::core::config::DashboardConfig;
use crate::error::{Result, TreetopError};
use crate::platform::gpu::CommandGpuProvider;

use super::gpu::{describe_gpu_output, GpuProvider};
use super::metrics::*;
use super::summary::{cpu_summary, disk_summary, memory_summary};

/// Source of raw readings for the four panels
///
/// Every method is a one-shot query. Errors are turned into panel diagnostics
/// by [`MetricsCollector`], so implementations can fail freely.
pub trait MetricsSource {
    fn cpu(&mut self) -> Result<CpuMetrics>;
    fn memory(&mut self) -> Result<MemoryMetrics>;
    fn disk(&mut self) -> Result<DiskMetrics>;

    /// Name of the GPU tool, used when describing its failures
    fn gpu_program(&self) -> &str;
    fn gpu(&mut self) -> Result<GpuOutput>;
}

/// Readings from the live system via sysinfo, GPU via an external tool
pub struct SysinfoSource {
    system: System,
    disks: Disks,
    mount_point: PathBuf,
    gpu_provider: Box<dyn GpuProvider>,
}

impl SysinfoSource {
    pub fn new(config: &DashboardConfig) -> Self {
        Self::with_gpu_provider(
            config,
            Box::new(CommandGpuProvider::new(config.gpu.clone())),
        )
    }

    pub fn with_gpu_provider(config: &DashboardConfig, gpu_provider: Box<dyn GpuProvider>) -> Self {
        let refresh_kind = RefreshKind::nothing()
            .with_cpu(CpuRefreshKind::nothing().with_cpu_usage())
            .with_memory(MemoryRefreshKind::nothing().with_ram());

        let system = System::new_with_specifics(refresh_kind);
        let disks = Disks::new_with_refreshed_list();

        Self {
            system,
            disks,
            mount_point: config.mount_point.clone(),
            gpu_provider,
        }
    }

    /// Take a first CPU sample so the first panel shows real usage
    pub fn prime(&mut self) {
        self.system.refresh_cpu_usage();
        std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
    }
}

impl MetricsSource for SysinfoSource {
    fn cpu(&mut self) -> Result<CpuMetrics> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return Err(TreetopError::metric_collection(
                "CPU statistics are not supported on this platform",
            ));
        }

        // Usage is measured against the previous refresh
        self.system.refresh_cpu_usage();

        let cpus = self.system.cpus();
        if cpus.is_empty() {
            return Err(TreetopError::metric_collection("no CPU cores reported"));
        }

        Ok(CpuMetrics {
            global_usage: self.system.global_cpu_usage(),
            per_core_usage: cpus.iter().map(|cpu| cpu.cpu_usage()).collect(),
        })
    }

    fn memory(&mut self) -> Result<MemoryMetrics> {
        self.system.refresh_memory();

        let total = self.system.total_memory();
        if total == 0 {
            return Err(TreetopError::metric_collection("total memory reported as zero"));
        }
        let used = self.system.used_memory();

        Ok(MemoryMetrics {
            total_bytes: total,
            used_bytes: used,
            available_bytes: self.system.available_memory(),
            usage_percent: (used as f32 / total as f32) * 100.0,
        })
    }

    fn disk(&mut self) -> Result<DiskMetrics> {
        self.disks.refresh(true);

        let disk = self
            .disks
            .iter()
            .find(|disk| disk.mount_point() == self.mount_point.as_path())
            .ok_or_else(|| {
                TreetopError::metric_collection(format!(
                    "no disk mounted at {}",
                    self.mount_point.display()
                ))
            })?;

        let total = disk.total_space();
        let available = disk.available_space();
        let used = total.saturating_sub(available);

        Ok(DiskMetrics {
            mount_point: disk.mount_point().to_string_lossy().to_string(),
            total_bytes: total,
            used_bytes: used,
            available_bytes: available,
            usage_percent: if total > 0 {
                (used as f32 / total as f32) * 100.0
            } else {
                0.0
            },
        })
    }

    fn gpu_program(&self) -> &str {
        self.gpu_provider.program()
    }

    fn gpu(&mut self) -> Result<GpuOutput> {
        self.gpu_provider.query()
    }
}

/// Builds formatted snapshots from a [`MetricsSource`]
///
/// Holds no state of its own between calls; every query goes straight to the
/// source and failures become the panel's text.
pub struct MetricsCollector<S> {
    source: S,
}

impl<S: MetricsSource> MetricsCollector<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn cpu_text(&mut self) -> Result<String> {
        logged(ResourceKind::Cpu, self.source.cpu().map(|cpu| cpu_summary(&cpu)))
    }

    pub fn memory_text(&mut self) -> Result<String> {
        logged(
            ResourceKind::Memory,
            self.source.memory().map(|memory| memory_summary(&memory)),
        )
    }

    pub fn disk_text(&mut self) -> Result<String> {
        logged(ResourceKind::Disk, self.source.disk().map(|disk| disk_summary(&disk)))
    }

    pub fn gpu_text(&mut self) -> Result<String> {
        let outcome = self
            .source
            .gpu()
            .and_then(|output| describe_gpu_output(self.source.gpu_program(), output));
        logged(ResourceKind::Gpu, outcome)
    }

    /// Query all four resources once
    pub fn snapshot(&mut self) -> MetricSnapshot {
        MetricSnapshot {
            timestamp: chrono::Utc::now().timestamp(),
            cpu: self.cpu_text(),
            gpu: self.gpu_text(),
            memory: self.memory_text(),
            disk: self.disk_text(),
        }
    }
}

fn logged(kind: ResourceKind, outcome: Result<String>) -> Result<String> {
    if let Err(ref e) = outcome {
        log::debug!("{} query failed: {}", kind.title(), e);
    }
    outcome
}
