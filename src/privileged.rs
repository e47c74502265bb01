//! Privileged filesystem operations.
//!
//! The theme lives in a system-owned directory, so every write goes through
//! a separately-authenticated `sudo` helper process. The [`PrivilegedFs`]
//! trait is the seam that lets tests substitute an unprivileged backend for
//! the sudo invocations.

use anyhow::{bail, Context, Result};
use std::io::{Read, Write};
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use crate::constants::{COPY_TIMEOUT, MKDIR_TIMEOUT, WRITE_TIMEOUT};

/// Filesystem operations that require elevated privileges.
pub trait PrivilegedFs {
    /// Writes `content` to `dest`, replacing the file in one operation.
    fn write_file(&self, dest: &Path, content: &str) -> Result<()>;

    /// Copies `src` onto `dest`, overwriting any existing file.
    fn copy_file(&self, src: &Path, dest: &Path) -> Result<()>;

    /// Creates `dest` and any missing parent directories.
    fn create_dir_all(&self, dest: &Path) -> Result<()>;
}

/// Production backend that shells out to `sudo`.
#[derive(Debug, Default)]
pub struct SudoFs;

impl PrivilegedFs for SudoFs {
    fn write_file(&self, dest: &Path, content: &str) -> Result<()> {
        let mut cmd = Command::new("sudo");
        cmd.arg("tee").arg(dest);
        run_checked(cmd, Some(content), WRITE_TIMEOUT)
    }

    fn copy_file(&self, src: &Path, dest: &Path) -> Result<()> {
        let mut cmd = Command::new("sudo");
        cmd.arg("cp").arg("-f").arg(src).arg(dest);
        run_checked(cmd, None, COPY_TIMEOUT)
    }

    fn create_dir_all(&self, dest: &Path) -> Result<()> {
        let mut cmd = Command::new("sudo");
        cmd.arg("mkdir").arg("-p").arg(dest);
        run_checked(cmd, None, MKDIR_TIMEOUT)
    }
}

/// Runs a command to completion within `timeout`.
///
/// Spawn failure, a timeout, and a non-zero exit are all reported as errors;
/// a timeout kills the child. The child's stderr is drained concurrently and
/// carried in the error message for the caller to log. Stdout is discarded.
pub(crate) fn run_checked(
    mut cmd: Command,
    stdin_data: Option<&str>,
    timeout: Duration,
) -> Result<()> {
    cmd.stdin(if stdin_data.is_some() {
        Stdio::piped()
    } else {
        Stdio::null()
    })
    .stdout(Stdio::null())
    .stderr(Stdio::piped());

    let program = cmd.get_program().to_string_lossy().into_owned();
    let mut child = cmd
        .spawn()
        .with_context(|| format!("Failed to execute {program}"))?;

    // Drain stderr on a separate thread so the child cannot block on a full
    // pipe before exiting.
    let stderr_reader = child.stderr.take().map(|mut stderr| {
        thread::spawn(move || {
            let mut buf = String::new();
            let _ = stderr.read_to_string(&mut buf);
            buf
        })
    });

    if let Some(data) = stdin_data {
        let mut stdin = child.stdin.take().context("Failed to open child stdin")?;
        stdin
            .write_all(data.as_bytes())
            .with_context(|| format!("Failed to write to {program} stdin"))?;
        // Dropping the handle closes the pipe so the child sees EOF.
    }

    let status = wait_with_deadline(&mut child, timeout)
        .with_context(|| format!("{program} did not finish within {}s", timeout.as_secs()))?;

    let stderr = stderr_reader
        .and_then(|reader| reader.join().ok())
        .unwrap_or_default();

    if !status.success() {
        bail!("{program} exited with {status}: {}", stderr.trim());
    }
    Ok(())
}

/// Polls the child until it exits or the deadline passes; kills it on
/// timeout.
fn wait_with_deadline(child: &mut Child, timeout: Duration) -> Result<ExitStatus> {
    let deadline = Instant::now() + timeout;
    loop {
        if let Some(status) = child.try_wait().context("Failed to poll child process")? {
            return Ok(status);
        }
        if Instant::now() >= deadline {
            let _ = child.kill();
            let _ = child.wait();
            bail!("timed out");
        }
        thread::sleep(Duration::from_millis(25));
    }
}
