// src/launcher.rs

//! Ties the pieces together: pick a command from the configuration, expand
//! its alias, resolve the executable and hand it to a launch backend.

use tracing::{info, warn};

use crate::config::{CommandSpec, Configuration};
use crate::errors::{LauncherError, Result};
use crate::exec::{LaunchBackend, LaunchOptions, LaunchRequest};
use crate::fs::FileSystem;
use crate::resolve::{resolve_executable, SearchContext};
use crate::types::{LaunchOutcome, ResolvedExecutable};

/// Availability of one configured command, as reported by [`Launcher::check`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandStatus {
    pub name: String,
    /// Executable after alias expansion.
    pub executable: String,
    pub resolved: Option<ResolvedExecutable>,
}

pub struct Launcher<'a, B: LaunchBackend> {
    config: &'a Configuration,
    search: &'a SearchContext,
    fs: &'a dyn FileSystem,
    backend: B,
}

impl<'a, B: LaunchBackend> Launcher<'a, B> {
    pub fn new(
        config: &'a Configuration,
        search: &'a SearchContext,
        fs: &'a dyn FileSystem,
        backend: B,
    ) -> Self {
        Self {
            config,
            search,
            fs,
            backend,
        }
    }

    /// Resolve an executable name after alias expansion.
    pub fn which(&self, executable: &str) -> Option<ResolvedExecutable> {
        let executable = self.config.expand_alias(executable);
        resolve_executable(self.fs, executable, self.search)
    }

    /// Look up `name` and resolve its executable without launching it.
    pub fn prepare(&self, name: &str, options: LaunchOptions) -> Result<LaunchRequest> {
        let spec = self
            .config
            .command(name)
            .ok_or_else(|| LauncherError::UnknownCommand(name.to_string()))?;

        let resolved = self.resolve_spec(spec).ok_or_else(|| LauncherError::ExecutableNotFound {
            name: spec.name().to_string(),
            executable: self.config.expand_alias(spec.executable()).to_string(),
        })?;

        Ok(LaunchRequest {
            name: spec.name().to_string(),
            path: resolved.path,
            arguments: spec.arguments().to_string(),
            options,
        })
    }

    /// Prepare and launch `name`.
    ///
    /// A waited-for child that exits unsuccessfully or times out is reported
    /// as an error. There is no retry.
    pub async fn launch(&mut self, name: &str, options: LaunchOptions) -> Result<LaunchOutcome> {
        let request = self.prepare(name, options)?;
        let command = request.name.clone();

        let outcome = self.backend.launch(request).await?;

        match outcome {
            LaunchOutcome::Exited { code, success: false } => {
                warn!(command = %command, exit_code = ?code, "command failed");
                Err(LauncherError::CommandFailed { name: command, code })
            }
            LaunchOutcome::TimedOut => Err(LauncherError::TimedOut {
                name: command,
                secs: options.timeout.map(|t| t.as_secs()).unwrap_or_default(),
            }),
            other => {
                info!(command = %command, outcome = ?other, "command launched");
                Ok(other)
            }
        }
    }

    /// Resolve every configured command, in document order.
    pub fn check(&self) -> Vec<CommandStatus> {
        self.config
            .commands()
            .iter()
            .map(|spec| CommandStatus {
                name: spec.name().to_string(),
                executable: self.config.expand_alias(spec.executable()).to_string(),
                resolved: self.resolve_spec(spec),
            })
            .collect()
    }

    fn resolve_spec(&self, spec: &CommandSpec) -> Option<ResolvedExecutable> {
        self.which(spec.executable())
    }
}
