// Command handlers

pub mod monitor;

use std::path::PathBuf;

use clap::{Arg, Command};

use crate::core::config::DEFAULT_GPU_PROGRAM;

/// Command-line definition for the `treetop` binary
pub fn build_cli() -> Command {
    Command::new("treetop")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Four-panel terminal dashboard for CPU, GPU, RAM and storage (press 'q' to quit)")
        .arg(
            Arg::new("interval")
                .short('i')
                .long("interval")
                .value_name("MS")
                .help("Refresh interval in milliseconds [default: 500]")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("gpu-timeout")
                .long("gpu-timeout")
                .value_name("SECS")
                .help("Maximum time to wait for the GPU tool [default: 5]")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("gpu-command")
                .long("gpu-command")
                .value_name("CMD")
                .help("GPU diagnostic tool, called with --showtemp --showuse")
                .default_value(DEFAULT_GPU_PROGRAM),
        )
        .arg(
            Arg::new("mount")
                .long("mount")
                .value_name("PATH")
                .help("Mount point shown in the storage panel")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value("/"),
        )
        .arg(
            Arg::new("once")
                .long("once")
                .help("Print a single snapshot and exit")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("With --once, print the snapshot as JSON")
                .requires("once")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .value_name("PATH")
                .help("Append log records to this file")
                .value_parser(clap::value_parser!(PathBuf)),
        )
}
