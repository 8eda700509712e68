// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod launcher;
pub mod logging;
pub mod resolve;
pub mod types;

use std::fmt::Write as _;
use std::path::PathBuf;
use std::time::Duration;

use tracing::{debug, info};

use crate::cli::{CliArgs, CliCommand};
use crate::config::{default_config_path, load_from_path, write_default_config, Configuration};
use crate::errors::{LauncherError, Result};
use crate::exec::{LaunchBackend, LaunchOptions, ProcessBackend};
use crate::fs::RealFileSystem;
use crate::launcher::{CommandStatus, Launcher};
use crate::resolve::SearchContext;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config path selection and loading
/// - search context (working directory, PATH, PATHEXT)
/// - the launcher and the real process backend
pub async fn run(args: CliArgs) -> Result<()> {
    let config_path = args
        .config
        .as_deref()
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path);
    let fs = RealFileSystem;

    match args.command {
        CliCommand::Init { force } => {
            write_default_config(&fs, &config_path, force)?;
            println!("wrote {}", config_path.display());
            Ok(())
        }
        command => {
            let cfg = load_from_path(&fs, &config_path)?;
            let search = SearchContext::from_env();
            let launcher = Launcher::new(&cfg, &search, &fs, ProcessBackend::new());
            dispatch(command, &cfg, launcher).await
        }
    }
}

async fn dispatch<B: LaunchBackend>(
    command: CliCommand,
    cfg: &Configuration,
    mut launcher: Launcher<'_, B>,
) -> Result<()> {
    match command {
        CliCommand::List => print!("{}", render_list(cfg)),

        CliCommand::Which { executable } => match launcher.which(&executable) {
            Some(found) => println!("{}", found.path.display()),
            None => {
                let resolved_name = cfg.expand_alias(&executable).to_string();
                return Err(LauncherError::ExecutableNotFound {
                    name: executable,
                    executable: resolved_name,
                });
            }
        },

        CliCommand::Check => {
            let statuses = launcher.check();
            print!("{}", render_check(&statuses));
            let missing = statuses.iter().filter(|s| s.resolved.is_none()).count();
            if missing > 0 {
                return Err(anyhow::anyhow!("{missing} command(s) cannot be resolved").into());
            }
        }

        CliCommand::Run {
            name,
            no_wait,
            timeout,
            dry_run,
        } => {
            let options = LaunchOptions {
                wait: !no_wait,
                timeout: timeout.map(Duration::from_secs),
            };

            if dry_run {
                let request = launcher.prepare(&name, options)?;
                println!("{} {}", request.path.display(), request.arguments);
                debug!("dry-run complete (no execution)");
                return Ok(());
            }

            let outcome = launcher.launch(&name, options).await?;
            info!(command = %name, ?outcome, "done");
        }

        // Needs no configuration; `run` handles it before loading one.
        CliCommand::Init { .. } => {}
    }

    Ok(())
}

/// Human-readable dump of a configuration, used by `cmdlauncher list`.
pub fn render_list(cfg: &Configuration) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "version: {}", cfg.version());
    let _ = writeln!(out);

    let _ = writeln!(out, "commands ({}):", cfg.commands().len());
    for spec in cfg.commands() {
        let _ = writeln!(out, "  - {}", spec.name());
        let _ = writeln!(out, "      exec: {}", spec.executable());
        if !spec.arguments().is_empty() {
            let _ = writeln!(out, "      args: {}", spec.arguments());
        }
    }

    if !cfg.aliases().is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "aliases:");
        for (from, to) in cfg.aliases() {
            let _ = writeln!(out, "  {from} -> {to}");
        }
    }

    if !cfg.bindings().is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "bindings: {}", cfg.bindings().join(", "));
    }

    out
}

fn render_check(statuses: &[CommandStatus]) -> String {
    let mut out = String::new();
    for status in statuses {
        match &status.resolved {
            Some(found) => {
                let _ = writeln!(out, "ok       {} ({})", status.name, found.path.display());
            }
            None => {
                let _ = writeln!(out, "missing  {} ({})", status.name, status.executable);
            }
        }
    }
    out
}
