// src/config/loader.rs

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::model::{Configuration, RawConfigFile};
use crate::errors::ConfigError;
use crate::fs::FileSystem;

/// Environment variable that overrides the default config location.
pub const CONFIG_ENV_VAR: &str = "CMDLAUNCHER_CONFIG";

/// Template written by `cmdlauncher init`.
pub const DEFAULT_CONFIG: &str = r#"# cmdlauncher configuration
#
# Each `list` entry is three lines: display name, executable, arguments.
# The executable is looked up in the current directory, then in PATH.
version: 1

list:
  - |-
    list files
    ls
    -la
  - |-
    git status
    git
    status --short

# Executables named on the left are replaced by the right-hand side.
alias: {}

bindings: []
"#;

/// Parse a YAML document into the raw, unvalidated model.
///
/// Empty, comment-only and `null` documents are treated as an empty mapping.
pub fn parse_raw(contents: &str) -> Result<RawConfigFile, ConfigError> {
    if is_blank_document(contents) {
        return Ok(RawConfigFile::default());
    }

    let value: serde_yaml::Value = serde_yaml::from_str(contents)?;
    if value.is_null() {
        return Ok(RawConfigFile::default());
    }

    Ok(serde_yaml::from_value(value)?)
}

/// True when the text holds no YAML content at all: only blank lines,
/// comments and document markers.
fn is_blank_document(contents: &str) -> bool {
    contents.lines().map(str::trim).all(|line| {
        line.is_empty() || line.starts_with('#') || line == "---" || line == "..."
    })
}

/// Load and validate a configuration from YAML text.
pub fn load_from_str(contents: &str) -> Result<Configuration, ConfigError> {
    let raw = parse_raw(contents)?;
    Configuration::try_from(raw)
}

/// Read a configuration file through `fs` and validate it.
///
/// This is the recommended entry point for the rest of the application.
pub fn load_from_path(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<Configuration, ConfigError> {
    let path = path.as_ref();
    debug!(path = ?path, "reading configuration");

    let contents = fs.read_to_string(path).map_err(|cause| ConfigError::Read {
        path: path.to_path_buf(),
        cause,
    })?;

    let cfg = load_from_str(&contents)?;
    info!(
        path = ?path,
        version = cfg.version(),
        commands = cfg.commands().len(),
        "configuration loaded"
    );
    Ok(cfg)
}

/// Write [`DEFAULT_CONFIG`] to `path`.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn write_default_config(fs: &dyn FileSystem, path: &Path, force: bool) -> Result<(), ConfigError> {
    if fs.exists(path) && !force {
        return Err(ConfigError::AlreadyExists(path.to_path_buf()));
    }

    fs.write(path, DEFAULT_CONFIG.as_bytes())
        .map_err(|cause| ConfigError::Write {
            path: path.to_path_buf(),
            cause,
        })?;

    info!(path = ?path, "wrote default configuration");
    Ok(())
}

/// Resolve the config path when `--config` was not given.
///
/// `$CMDLAUNCHER_CONFIG` wins when set and non-empty; otherwise
/// `launcher.yaml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    match std::env::var(CONFIG_ENV_VAR) {
        Ok(p) if !p.trim().is_empty() => PathBuf::from(p),
        _ => PathBuf::from("launcher.yaml"),
    }
}
