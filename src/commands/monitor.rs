//! System monitor command handler.
//!
//! Provides real-time system monitoring in a TUI dashboard, or a single
//! snapshot on stdout for scripting.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::ArgMatches;

use crate::core::config::{DashboardConfig, GpuCommandConfig};
use crate::core::system_monitor::{MetricsCollector, ResourceKind, SysinfoSource};
use crate::ui::monitor_tui::run_monitor_app;

/// Execute the monitor command
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let config = config_from_matches(matches)?;

    if matches.get_flag("once") {
        return run_once(&config, matches.get_flag("json"));
    }

    run_monitor_app(config).context("Failed to run system monitor")
}

/// Build the dashboard configuration from parsed flags
pub fn config_from_matches(matches: &ArgMatches) -> Result<DashboardConfig> {
    let defaults = DashboardConfig::default();

    let interval = matches
        .get_one::<u64>("interval")
        .map(|&ms| Duration::from_millis(ms))
        .unwrap_or(defaults.interval);

    let timeout = matches
        .get_one::<u64>("gpu-timeout")
        .map(|&secs| Duration::from_secs(secs))
        .unwrap_or(defaults.gpu.timeout);

    let program = matches
        .get_one::<String>("gpu-command")
        .cloned()
        .unwrap_or(defaults.gpu.program);

    let mount_point = matches
        .get_one::<PathBuf>("mount")
        .cloned()
        .unwrap_or(defaults.mount_point);

    let config = DashboardConfig {
        interval,
        mount_point,
        gpu: GpuCommandConfig {
            program,
            timeout,
            ..defaults.gpu
        },
    };

    config.validate()?;
    Ok(config)
}

/// Print one snapshot instead of starting the TUI
fn run_once(config: &DashboardConfig, json: bool) -> Result<()> {
    let mut source = SysinfoSource::new(config);
    source.prime();

    let mut collector = MetricsCollector::new(source);
    let snapshot = collector.snapshot();

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot.to_record())?);
        return Ok(());
    }

    for resource in ResourceKind::ALL {
        println!("== {} ==", resource.title());
        println!("{}", snapshot.text(resource).trim_end());
        println!();
    }

    Ok(())
}
