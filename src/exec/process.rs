// src/exec/process.rs

//! Single child-process launch.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::errors::LaunchError;
use crate::types::LaunchOutcome;

/// How a launch should behave once the process exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchOptions {
    /// Block until the child exits.
    pub wait: bool,
    /// Kill the child if it is still running after this long. Only applies
    /// when `wait` is set.
    pub timeout: Option<Duration>,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            wait: true,
            timeout: None,
        }
    }
}

/// Start `path` with `argument_line`.
///
/// Exactly one creation attempt is made. On Windows the argument line is
/// passed through untouched; elsewhere it is split into words with shell
/// quoting rules first.
pub async fn launch(
    path: &Path,
    argument_line: &str,
    options: LaunchOptions,
) -> Result<LaunchOutcome, LaunchError> {
    info!(path = ?path, args = %argument_line, wait = options.wait, "launching process");

    let mut cmd = build_command(path, argument_line);
    let mut child = cmd.spawn().map_err(|e| spawn_error(path, &e))?;

    let pid = child.id();
    debug!(path = ?path, pid = ?pid, "process created");

    if !options.wait {
        return Ok(LaunchOutcome::Spawned { pid });
    }

    let status = match options.timeout {
        None => child.wait().await,
        Some(limit) => {
            tokio::select! {
                status = child.wait() => status,
                _ = tokio::time::sleep(limit) => {
                    warn!(path = ?path, pid = ?pid, timeout_ms = limit.as_millis() as u64, "process timed out; killing");
                    if let Err(e) = child.kill().await {
                        warn!(path = ?path, pid = ?pid, error = %e, "failed to kill timed-out process");
                    }
                    return Ok(LaunchOutcome::TimedOut);
                }
            }
        }
    }
    .map_err(|source| LaunchError::Wait {
        path: path.to_path_buf(),
        source,
    })?;

    let code = status.code();
    info!(path = ?path, pid = ?pid, exit_code = ?code, success = status.success(), "process exited");

    Ok(LaunchOutcome::Exited {
        code,
        success: status.success(),
    })
}

#[cfg(windows)]
fn build_command(path: &Path, argument_line: &str) -> Command {
    let mut cmd = Command::new(path);
    if !argument_line.is_empty() {
        cmd.raw_arg(argument_line);
    }
    cmd
}

#[cfg(not(windows))]
fn build_command(path: &Path, argument_line: &str) -> Command {
    let mut cmd = Command::new(path);
    cmd.args(split_arguments(argument_line));
    cmd
}

/// Split an argument line into words.
///
/// Uses POSIX shell quoting; a line with unbalanced quotes falls back to
/// plain whitespace splitting instead of failing the launch.
pub fn split_arguments(argument_line: &str) -> Vec<String> {
    shlex::split(argument_line).unwrap_or_else(|| {
        debug!(args = %argument_line, "unbalanced quoting; splitting on whitespace");
        argument_line
            .split_whitespace()
            .map(ToString::to_string)
            .collect()
    })
}

fn spawn_error(path: &Path, err: &std::io::Error) -> LaunchError {
    LaunchError::ProcessCreationFailed {
        path: PathBuf::from(path),
        code: err.raw_os_error(),
        message: err.to_string(),
    }
}
