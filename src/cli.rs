// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, Subcommand, ValueEnum};

/// Command-line arguments for `cmdlauncher`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "cmdlauncher",
    version,
    about = "Launch named commands defined in a YAML file.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (YAML).
    ///
    /// Default: `$CMDLAUNCHER_CONFIG`, or `launcher.yaml` in the current
    /// working directory.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `CMDLAUNCHER_LOG` or a default level will be used.
    #[arg(long, global = true, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Clone, Subcommand)]
pub enum CliCommand {
    /// Print the configured commands, aliases and bindings.
    List,

    /// Launch the command with the given display name.
    Run {
        /// Display name (first line of the command block).
        name: String,

        /// Return as soon as the process has been created.
        #[arg(long)]
        no_wait: bool,

        /// Kill the command if it runs longer than this many seconds.
        #[arg(long, value_name = "SECS", conflicts_with = "no_wait")]
        timeout: Option<u64>,

        /// Resolve and print what would run, without starting anything.
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the path an executable name resolves to.
    Which {
        executable: String,
    },

    /// Validate the config and report which commands can be found.
    Check,

    /// Write a starter config file.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
