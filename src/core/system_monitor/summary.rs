//! Text summaries for each panel.
//!
//! Byte counts are converted with truncating integer division, never rounded.

use std::fmt::Write;

use super::metrics::{CpuMetrics, DiskMetrics, MemoryMetrics};

const MB: u64 = 1024 * 1024;
const GB: u64 = MB * 1024;

/// Whole megabytes, truncated
pub fn bytes_to_mb(bytes: u64) -> u64 {
    bytes / MB
}

/// Whole gigabytes, truncated
pub fn bytes_to_gb(bytes: u64) -> u64 {
    bytes / GB
}

pub fn format_percent(value: f32) -> String {
    format!("{:.1}%", value)
}

pub fn cpu_summary(cpu: &CpuMetrics) -> String {
    let mut text = format!("Overall CPU: {}\n", format_percent(cpu.global_usage));
    for (i, usage) in cpu.per_core_usage.iter().enumerate() {
        let _ = writeln!(text, "Core {}: {}", i, format_percent(*usage));
    }
    text
}

pub fn memory_summary(memory: &MemoryMetrics) -> String {
    format!(
        "RAM Total: {} MB\nUsed: {} MB ({})\nFree: {} MB",
        bytes_to_mb(memory.total_bytes),
        bytes_to_mb(memory.used_bytes),
        format_percent(memory.usage_percent),
        bytes_to_mb(memory.available_bytes)
    )
}

pub fn disk_summary(disk: &DiskMetrics) -> String {
    format!(
        "Total: {} GB\nUsed: {} GB ({})\nFree: {} GB",
        bytes_to_gb(disk.total_bytes),
        bytes_to_gb(disk.used_bytes),
        format_percent(disk.usage_percent),
        bytes_to_gb(disk.available_bytes)
    )
}
