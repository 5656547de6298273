//! GPU-specific platform code.
//!
//! GPU statistics come from an external vendor tool (ROCm SMI by default)
//! whose output is passed through untouched.

mod command;

pub use command::{run_with_timeout, CommandGpuProvider};
