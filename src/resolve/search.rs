// src/resolve/search.rs

//! Explicit inputs of the executable lookup.
//!
//! The resolver never reads the environment itself; callers gather the
//! working directory, `PATH` and `PATHEXT` once into a [`SearchContext`] and
//! pass it down.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Separator used inside `PATHEXT`, on every platform.
const EXTENSION_SEPARATOR: char = ';';

/// Where and how to look for a bare executable name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchContext {
    /// Probed before any search-path directory.
    pub current_dir: PathBuf,
    /// Search-path directories in lookup order.
    pub search_path: Vec<PathBuf>,
    /// Suffixes tried after the bare name, in order.
    pub extensions: Vec<String>,
}

impl SearchContext {
    /// A relative `current_dir` is made absolute here, once, so every path
    /// the resolver hands back is absolute.
    pub fn new(current_dir: impl Into<PathBuf>, search_path: Vec<PathBuf>, extensions: Vec<String>) -> Self {
        Self {
            current_dir: make_absolute(current_dir.into()),
            search_path,
            extensions,
        }
    }

    /// Build a context from raw `PATH` / `PATHEXT` values.
    pub fn from_vars(current_dir: impl Into<PathBuf>, path: Option<&OsStr>, pathext: Option<&str>) -> Self {
        Self::new(
            current_dir,
            path.map(split_search_path).unwrap_or_default(),
            parse_extension_list(pathext),
        )
    }

    /// Snapshot the process environment.
    ///
    /// Falls back to `.` when the working directory cannot be determined.
    pub fn from_env() -> Self {
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let path = std::env::var_os("PATH");
        let pathext = std::env::var("PATHEXT").ok();

        let ctx = Self::from_vars(current_dir, path.as_deref(), pathext.as_deref());
        debug!(
            current_dir = ?ctx.current_dir,
            dirs = ctx.search_path.len(),
            extensions = ?ctx.extensions,
            "search context from environment"
        );
        ctx
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }
}

fn make_absolute(dir: PathBuf) -> PathBuf {
    if dir.is_absolute() {
        return dir;
    }
    std::path::absolute(&dir).unwrap_or_else(|e| {
        debug!(dir = ?dir, error = %e, "cannot make working directory absolute");
        dir
    })
}

/// Split a `PATH`-style value on the platform separator, dropping empty
/// entries.
pub fn split_search_path(value: &OsStr) -> Vec<PathBuf> {
    std::env::split_paths(value)
        .filter(|p| !p.as_os_str().is_empty())
        .collect()
}

/// Parse a `PATHEXT`-style list (`.COM;.EXE;.BAT`).
///
/// Segments are trimmed and empty ones dropped. An unset or effectively empty
/// value gives [`default_extensions`].
pub fn parse_extension_list(value: Option<&str>) -> Vec<String> {
    let parsed: Vec<String> = value
        .unwrap_or_default()
        .split(EXTENSION_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if parsed.is_empty() {
        default_extensions()
    } else {
        parsed
    }
}

/// Extensions tried when `PATHEXT` is not set.
///
/// Windows gets `.EXE`, `.BAT`, `.CMD`; elsewhere executables carry no
/// suffix, so only the bare name is probed.
pub fn default_extensions() -> Vec<String> {
    if cfg!(windows) {
        vec![".EXE".to_string(), ".BAT".to_string(), ".CMD".to_string()]
    } else {
        Vec::new()
    }
}
