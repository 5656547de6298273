use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Result, TreetopError};

/// Default time between dashboard refreshes
pub const DEFAULT_INTERVAL_MS: u64 = 500;

/// Default bound on a single GPU tool invocation
pub const DEFAULT_GPU_TIMEOUT_SECS: u64 = 5;

pub const DEFAULT_GPU_PROGRAM: &str = "rocm-smi";

/// External GPU diagnostic command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GpuCommandConfig {
    pub program: String,
    pub args: Vec<String>,
    pub timeout: Duration,
}

impl Default for GpuCommandConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_GPU_PROGRAM.to_string(),
            args: vec!["--showtemp".to_string(), "--showuse".to_string()],
            timeout: Duration::from_secs(DEFAULT_GPU_TIMEOUT_SECS),
        }
    }
}

/// Runtime settings for the dashboard, built from command-line flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// One full cycle: collect, draw, wait for input
    pub interval: Duration,
    /// Mount point shown in the storage panel
    pub mount_point: PathBuf,
    pub gpu: GpuCommandConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
            mount_point: PathBuf::from("/"),
            gpu: GpuCommandConfig::default(),
        }
    }
}

impl DashboardConfig {
    pub fn validate(&self) -> Result<()> {
        if self.interval.is_zero() {
            return Err(TreetopError::config("refresh interval must be greater than zero"));
        }

        if self.gpu.timeout.is_zero() {
            return Err(TreetopError::config("GPU timeout must be greater than zero"));
        }

        if self.gpu.program.trim().is_empty() {
            return Err(TreetopError::config("GPU command must not be empty"));
        }

        if self.mount_point.as_os_str().is_empty() {
            return Err(TreetopError::config("mount point must not be empty"));
        }

        Ok(())
    }
}
