use std::path::PathBuf;

use treetop::core::config::{DashboardConfig, GpuCommandConfig};
use treetop::core::system_monitor::{
    GpuOutput, GpuProvider, MetricsCollector, ResourceKind, SysinfoSource,
};
use treetop::platform::CommandGpuProvider;
use treetop::Result;

struct CannedGpu {
    output: GpuOutput,
}

impl GpuProvider for CannedGpu {
    fn program(&self) -> &str {
        "rocm-smi"
    }

    fn query(&mut self) -> Result<GpuOutput> {
        Ok(self.output.clone())
    }
}

fn collector_with_gpu(output: GpuOutput) -> MetricsCollector<SysinfoSource> {
    let config = DashboardConfig::default();
    let source = SysinfoSource::with_gpu_provider(&config, Box::new(CannedGpu { output }));
    MetricsCollector::new(source)
}

#[test]
fn test_live_cpu_and_memory_panels() {
    let mut collector = collector_with_gpu(GpuOutput {
        code: Some(0),
        stdout: "GPU0: 45C, 60%\n".to_string(),
        stderr: String::new(),
    });

    let snapshot = collector.snapshot();

    let cpu = snapshot.text(ResourceKind::Cpu);
    assert!(cpu.starts_with("Overall CPU: "), "{}", cpu);
    assert!(cpu.contains("Core 0: "));

    let memory = snapshot.text(ResourceKind::Memory);
    assert!(memory.starts_with("RAM Total: "), "{}", memory);
    assert!(memory.contains(" MB"));

    assert_eq!(snapshot.text(ResourceKind::Gpu), "GPU0: 45C, 60%");
}

#[test]
fn test_gpu_failure_shown_in_panel() {
    let mut collector = collector_with_gpu(GpuOutput {
        code: Some(1),
        stdout: String::new(),
        stderr: "not found\n".to_string(),
    });

    let text = collector.snapshot().text(ResourceKind::Gpu);
    assert!(text.contains('1'));
    assert!(text.contains("not found"));
}

#[test]
fn test_unknown_mount_point_degrades_storage_panel_only() {
    let config = DashboardConfig {
        mount_point: PathBuf::from("/treetop/definitely/not/mounted"),
        ..Default::default()
    };
    let source = SysinfoSource::with_gpu_provider(
        &config,
        Box::new(CannedGpu {
            output: GpuOutput {
                code: Some(0),
                ..Default::default()
            },
        }),
    );
    let mut collector = MetricsCollector::new(source);

    let snapshot = collector.snapshot();
    assert!(snapshot.disk.is_err());
    assert!(snapshot
        .text(ResourceKind::Disk)
        .contains("no disk mounted at /treetop/definitely/not/mounted"));
    assert!(snapshot.cpu.is_ok());
}

#[test]
fn test_missing_gpu_tool_degrades_gpu_panel_only() {
    let config = DashboardConfig {
        gpu: GpuCommandConfig {
            program: "treetop-missing-rocm-smi".to_string(),
            ..Default::default()
        },
        ..Default::default()
    };
    let provider = CommandGpuProvider::new(config.gpu.clone());
    let source = SysinfoSource::with_gpu_provider(&config, Box::new(provider));
    let mut collector = MetricsCollector::new(source);

    let snapshot = collector.snapshot();
    assert!(snapshot
        .text(ResourceKind::Gpu)
        .starts_with("Exception when calling treetop-missing-rocm-smi:"));
    assert!(snapshot.memory.is_ok());
}

#[test]
fn test_snapshot_record_serializes() {
    let mut collector = collector_with_gpu(GpuOutput {
        code: Some(0),
        stdout: "ok".to_string(),
        stderr: String::new(),
    });

    let record = collector.snapshot().to_record();
    let json = serde_json::to_value(&record).unwrap();

    let panels = json["panels"].as_array().unwrap();
    assert_eq!(panels.len(), 4);
    assert_eq!(panels[1]["title"], "GPU");
    assert_eq!(panels[1]["text"], "ok");
    assert_eq!(panels[1]["ok"], true);
}
