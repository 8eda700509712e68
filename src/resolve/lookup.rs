// src/resolve/lookup.rs

use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::fs::FileSystem;
use crate::resolve::search::SearchContext;
use crate::types::ResolvedExecutable;

/// Find the file that launching `name` would run.
///
/// Lookup order, first hit wins:
/// 1. `name` itself when it is absolute (plus its extension variants; the
///    search path is never consulted for absolute names).
/// 2. `current_dir/name`, then `current_dir/name<ext>` for each extension.
/// 3. the same two steps for every search-path directory, in order. Relative
///    entries are taken relative to `current_dir`.
///
/// Only regular files match. Returns `None` when nothing matches; that is an
/// ordinary outcome, not an error.
pub fn resolve_executable(
    fs: &dyn FileSystem,
    name: &str,
    ctx: &SearchContext,
) -> Option<ResolvedExecutable> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    let as_path = Path::new(name);
    if as_path.is_absolute() {
        return resolve_absolute(fs, as_path, name, &ctx.extensions);
    }

    // Relative search-path entries hang off the context's directory, never
    // off the process working directory.
    let dirs = std::iter::once(ctx.current_dir.clone())
        .chain(ctx.search_path.iter().map(|dir| ctx.current_dir.join(dir)));

    for dir in dirs {
        if let Some(found) = probe_dir(fs, &dir, name, &ctx.extensions) {
            debug!(name, path = ?found.path, "resolved executable");
            return Some(found);
        }
    }

    debug!(name, "executable not found");
    None
}

fn resolve_absolute(
    fs: &dyn FileSystem,
    path: &Path,
    name: &str,
    extensions: &[String],
) -> Option<ResolvedExecutable> {
    if fs.is_file(path) {
        // Canonicalizing an existing file can still fail (permissions on a
        // parent); the path as given is absolute already.
        let path = fs.canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        return Some(ResolvedExecutable::new(path, None));
    }

    for ext in extensions {
        let candidate = PathBuf::from(format!("{name}{ext}"));
        trace!(candidate = ?candidate, "probing");
        if fs.is_file(&candidate) {
            return Some(ResolvedExecutable::new(candidate, Some(ext.clone())));
        }
    }

    debug!(name, "absolute executable not found");
    None
}

/// Check `dir/name`, then `dir/name<ext>` for each extension.
fn probe_dir(
    fs: &dyn FileSystem,
    dir: &Path,
    name: &str,
    extensions: &[String],
) -> Option<ResolvedExecutable> {
    let bare = dir.join(name);
    trace!(candidate = ?bare, "probing");
    if fs.is_file(&bare) {
        return Some(ResolvedExecutable::new(bare, None));
    }

    extensions.iter().find_map(|ext| {
        let candidate = dir.join(format!("{name}{ext}"));
        trace!(candidate = ?candidate, "probing");
        fs.is_file(&candidate)
            .then(|| ResolvedExecutable::new(candidate, Some(ext.clone())))
    })
}
