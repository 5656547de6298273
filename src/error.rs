use std::io;
use thiserror::Error;

/// Custom error type for treetop
#[derive(Error, Debug)]
pub enum TreetopError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Metric collection failed: {0}")]
    MetricCollection(String),

    /// The GPU tool ran but reported failure.
    #[error("{program} error (code {code}): {stderr}")]
    GpuCommand {
        program: String,
        code: i32,
        stderr: String,
    },

    /// The GPU tool could not be run to completion (missing, timed out, killed).
    #[error("Exception when calling {program}: {reason}")]
    GpuInvocation { program: String, reason: String },
}

/// Result type alias for treetop
pub type Result<T> = std::result::Result<T, TreetopError>;

impl TreetopError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        TreetopError::Config(msg.into())
    }

    pub fn metric_collection<S: Into<String>>(msg: S) -> Self {
        TreetopError::MetricCollection(msg.into())
    }

    pub fn gpu_command<P: Into<String>, S: Into<String>>(program: P, code: i32, stderr: S) -> Self {
        TreetopError::GpuCommand {
            program: program.into(),
            code,
            stderr: stderr.into(),
        }
    }

    pub fn gpu_invocation<P: Into<String>, S: ToString>(program: P, reason: S) -> Self {
        TreetopError::GpuInvocation {
            program: program.into(),
            reason: reason.to_string(),
        }
    }
}
