// Treetop Library - Public API

// Re-export error types
pub mod error;
pub use error::{Result, TreetopError};

// Module declarations
pub mod commands;
pub mod core;
pub mod platform;
pub mod ui;

// Re-export commonly used types
pub use crate::core::config::DashboardConfig;

use std::fs::{File, OpenOptions};
use std::path::Path;

// Initialize logging
//
// The dashboard owns the terminal, so records only reach stderr when RUST_LOG
// asks for them. With a log file the default level is raised to info.
pub fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let mut builder = env_logger::Builder::new();

    if let Some(path) = log_file {
        let file = open_log_file(path)?;
        builder
            .filter_level(log::LevelFilter::Info)
            .target(env_logger::Target::Pipe(Box::new(file)));
    } else {
        builder.filter_level(log::LevelFilter::Off);
    }

    builder.parse_default_env();
    // A second init (tests, embedding) keeps the first logger.
    let _ = builder.try_init();
    Ok(())
}

/// Open a log file for appending, creating it when missing
pub fn open_log_file(path: &Path) -> Result<File> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(file)
}
