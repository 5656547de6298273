use super::metrics::GpuOutput;
use crate::error::{Result, TreetopError};

/// Trait for GPU statistics providers
///
/// A provider runs some vendor diagnostic tool and hands back its raw output.
/// The output format is opaque: the dashboard shows it as-is.
/// Implementations are provided in the platform layer.
pub trait GpuProvider {
    /// Name of the underlying tool, used in diagnostics
    fn program(&self) -> &str;

    /// Run the tool once. Errors mean the tool could not be run to completion.
    fn query(&mut self) -> Result<GpuOutput>;
}

/// Turn one tool run into panel text
///
/// Exit code 0 yields the trimmed stdout verbatim; any other exit code yields
/// an error carrying the code and the trimmed stderr.
pub fn describe_gpu_output(program: &str, output: GpuOutput) -> Result<String> {
    match output.code {
        Some(0) => Ok(output.stdout.trim().to_string()),
        Some(code) => Err(TreetopError::gpu_command(
            program,
            code,
            output.stderr.trim(),
        )),
        None => Err(TreetopError::gpu_invocation(
            program,
            "process terminated by signal",
        )),
    }
}
