// src/errors.rs

//! Crate-wide error types.
//!
//! Each layer has its own enum so callers can match on exactly what went
//! wrong; [`LauncherError`] wraps them for the binary and the selection
//! layer.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to turn a text block into a [`crate::config::CommandSpec`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed command block: expected at least 3 lines (name, executable, arguments), found {lines}")]
    MalformedCommandBlock { lines: usize },

    #[error("command '{name}' has a blank executable line")]
    BlankExecutable { name: String },
}

/// Failure to load a configuration document.
///
/// A load either yields a complete `Configuration` or one of these; nothing
/// in between.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid version: {0} (expected an integer)")]
    InvalidVersion(String),

    #[error("invalid command entry #{index} in `list`: {source}")]
    InvalidCommandEntry {
        index: usize,
        #[source]
        source: ParseError,
    },

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to read config file {path:?}: {cause:#}")]
    Read { path: PathBuf, cause: anyhow::Error },

    #[error("failed to write config file {path:?}: {cause:#}")]
    Write { path: PathBuf, cause: anyhow::Error },

    #[error("config file {0:?} already exists")]
    AlreadyExists(PathBuf),
}

/// Failure to start (or wait for) a child process.
#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("failed to create process {path:?} (os error {}): {message}", display_code(.code, "n/a"))]
    ProcessCreationFailed {
        path: PathBuf,
        code: Option<i32>,
        message: String,
    },

    #[error("failed waiting for process {path:?}: {source}")]
    Wait {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LaunchError {
    /// OS error code reported when process creation failed, if any.
    pub fn os_code(&self) -> Option<i32> {
        match self {
            LaunchError::ProcessCreationFailed { code, .. } => *code,
            LaunchError::Wait { source, .. } => source.raw_os_error(),
        }
    }
}

#[derive(Error, Debug)]
pub enum LauncherError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Launch(#[from] LaunchError),

    #[error("no command named '{0}' in the configuration")]
    UnknownCommand(String),

    #[error("executable '{executable}' for command '{name}' was not found in the current directory or PATH")]
    ExecutableNotFound { name: String, executable: String },

    #[error("command '{name}' exited with status {}", display_code(.code, "unknown"))]
    CommandFailed { name: String, code: Option<i32> },

    #[error("command '{name}' did not finish within {secs}s and was killed")]
    TimedOut { name: String, secs: u64 },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn display_code(code: &Option<i32>, missing: &str) -> String {
    match code {
        Some(c) => c.to_string(),
        None => missing.to_string(),
    }
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, LauncherError>;
