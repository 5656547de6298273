use std::io::Read;
use std::process::{Child, Command, Stdio};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crate::core::config::GpuCommandConfig;
use crate::core::system_monitor::{GpuOutput, GpuProvider};
use crate::error::{Result, TreetopError};

const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// GPU provider that shells out to a vendor tool (`rocm-smi` by default)
pub struct CommandGpuProvider {
    config: GpuCommandConfig,
}

impl CommandGpuProvider {
    pub fn new(config: GpuCommandConfig) -> Self {
        Self { config }
    }
}

impl GpuProvider for CommandGpuProvider {
    fn program(&self) -> &str {
        &self.config.program
    }

    fn query(&mut self) -> Result<GpuOutput> {
        run_with_timeout(&self.config.program, &self.config.args, self.config.timeout)
    }
}

/// Run a command, capturing its output, and kill it if it outlives `timeout`
///
/// The deadline covers the whole call: waiting for the process and for its
/// pipes to close. Spawn failures and timeouts are reported as invocation
/// errors; a completed run is returned as-is whatever its exit code.
pub fn run_with_timeout(program: &str, args: &[String], timeout: Duration) -> Result<GpuOutput> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| TreetopError::gpu_invocation(program, e))?;
    let deadline = Instant::now() + timeout;

    // Drain both pipes while waiting so a chatty tool cannot block on a full pipe
    let (tx, rx) = mpsc::channel();
    let mut pending = 0;
    if let Some(pipe) = child.stdout.take() {
        drain(Stream::Stdout, pipe, tx.clone());
        pending += 1;
    }
    if let Some(pipe) = child.stderr.take() {
        drain(Stream::Stderr, pipe, tx.clone());
        pending += 1;
    }
    drop(tx);

    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) => {}
            Err(e) => {
                reap(&mut child);
                return Err(TreetopError::gpu_invocation(program, e));
            }
        }

        let now = Instant::now();
        if now >= deadline {
            reap(&mut child);
            return Err(timed_out(program, timeout));
        }

        thread::sleep(POLL_INTERVAL.min(deadline - now));
    };

    // A background process started by the tool can keep the pipes open
    // after the tool itself has exited
    let mut output = GpuOutput {
        code: status.code(),
        ..Default::default()
    };
    while pending > 0 {
        let remaining = deadline.saturating_duration_since(Instant::now());
        match rx.recv_timeout(remaining) {
            Ok((Stream::Stdout, bytes)) => output.stdout = lossy(bytes),
            Ok((Stream::Stderr, bytes)) => output.stderr = lossy(bytes),
            Err(RecvTimeoutError::Timeout) => return Err(timed_out(program, timeout)),
            Err(RecvTimeoutError::Disconnected) => break,
        }
        pending -= 1;
    }

    Ok(output)
}

#[derive(Debug, Clone, Copy)]
enum Stream {
    Stdout,
    Stderr,
}

fn drain<R: Read + Send + 'static>(stream: Stream, mut pipe: R, tx: Sender<(Stream, Vec<u8>)>) {
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = pipe.read_to_end(&mut buf);
        // The receiver is gone once the call has timed out
        let _ = tx.send((stream, buf));
    });
}

fn lossy(bytes: Vec<u8>) -> String {
    String::from_utf8_lossy(&bytes).into_owned()
}

fn timed_out(program: &str, timeout: Duration) -> TreetopError {
    log::warn!("{} did not finish within {:?}, abandoned", program, timeout);
    TreetopError::gpu_invocation(
        program,
        format!("timed out after {} seconds", timeout.as_secs_f32()),
    )
}

fn reap(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}
