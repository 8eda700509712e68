// tests/resolver_order.rs

use std::path::PathBuf;

use cmdlauncher::fs::mock::MockFileSystem;
use cmdlauncher::resolve::{resolve_executable, SearchContext};

fn exts(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn ctx(extensions: &[&str]) -> SearchContext {
    SearchContext::new(
        "/work",
        vec![PathBuf::from("/opt/first"), PathBuf::from("/opt/second")],
        exts(extensions),
    )
}

#[test]
fn current_directory_wins_over_search_path() {
    let fs = MockFileSystem::new();
    fs.add_file("/work/tool", "");
    fs.add_file("/opt/first/tool", "");

    let found = resolve_executable(&fs, "tool", &ctx(&[])).unwrap();
    assert_eq!(found.path, PathBuf::from("/work/tool"));
    assert_eq!(found.extension, None);
}

#[test]
fn bare_name_wins_over_extension_in_same_directory() {
    let fs = MockFileSystem::new();
    fs.add_file("/opt/first/tool", "");
    fs.add_file("/opt/first/tool.EXE", "");

    let found = resolve_executable(&fs, "tool", &ctx(&[".EXE"])).unwrap();
    assert_eq!(found.path, PathBuf::from("/opt/first/tool"));
    assert_eq!(found.extension, None);
}

#[test]
fn extensions_are_tried_in_list_order() {
    let fs = MockFileSystem::new();
    fs.add_file("/opt/first/tool.CMD", "");
    fs.add_file("/opt/first/tool.BAT", "");

    let found = resolve_executable(&fs, "tool", &ctx(&[".EXE", ".BAT", ".CMD"])).unwrap();
    assert_eq!(found.path, PathBuf::from("/opt/first/tool.BAT"));
    assert_eq!(found.extension.as_deref(), Some(".BAT"));

    let found = resolve_executable(&fs, "tool", &ctx(&[".CMD", ".BAT"])).unwrap();
    assert_eq!(found.extension.as_deref(), Some(".CMD"));
}

#[test]
fn current_directory_extension_wins_over_search_path_bare_name() {
    let fs = MockFileSystem::new();
    fs.add_file("/work/tool.BAT", "");
    fs.add_file("/opt/first/tool", "");

    let found = resolve_executable(&fs, "tool", &ctx(&[".EXE", ".BAT"])).unwrap();
    assert_eq!(found.path, PathBuf::from("/work/tool.BAT"));
}

#[test]
fn earlier_search_path_directory_wins() {
    let fs = MockFileSystem::new();
    fs.add_file("/opt/second/tool", "");
    fs.add_file("/opt/first/tool.EXE", "");

    // Directory order dominates: first/tool.EXE beats second/tool.
    let found = resolve_executable(&fs, "tool", &ctx(&[".EXE"])).unwrap();
    assert_eq!(found.path, PathBuf::from("/opt/first/tool.EXE"));
}

#[test]
fn directories_do_not_match() {
    let fs = MockFileSystem::new();
    fs.add_dir("/work/tool");
    fs.add_file("/opt/second/tool", "");

    let found = resolve_executable(&fs, "tool", &ctx(&[])).unwrap();
    assert_eq!(found.path, PathBuf::from("/opt/second/tool"));
}

#[test]
fn not_found_is_none() {
    let fs = MockFileSystem::new();
    fs.add_file("/elsewhere/tool", "");

    assert!(resolve_executable(&fs, "tool", &ctx(&[".EXE"])).is_none());
    assert!(resolve_executable(&fs, "", &ctx(&[])).is_none());
    assert!(resolve_executable(&fs, "   ", &ctx(&[])).is_none());
}

#[test]
fn name_is_trimmed_before_lookup() {
    let fs = MockFileSystem::new();
    fs.add_file("/opt/first/tool", "");

    let found = resolve_executable(&fs, "  tool ", &ctx(&[])).unwrap();
    assert_eq!(found.path, PathBuf::from("/opt/first/tool"));
}

#[test]
fn relative_search_path_entries_are_made_absolute() {
    let fs = MockFileSystem::new();
    // Only the entry under the context directory may match.
    fs.add_file("bin/tool", "");
    fs.add_file("/work/bin/tool", "");

    let ctx = SearchContext::new("/work", vec![PathBuf::from("bin")], Vec::new());

    let found = resolve_executable(&fs, "tool", &ctx).unwrap();
    assert_eq!(found.path, PathBuf::from("/work/bin/tool"));
}

#[test]
fn relative_search_path_entry_is_not_probed_against_process_directory() {
    let fs = MockFileSystem::new();
    fs.add_file("bin/tool", "");

    let ctx = SearchContext::new("/work", vec![PathBuf::from("bin")], Vec::new());

    assert!(resolve_executable(&fs, "tool", &ctx).is_none());
}

#[test]
fn names_with_directories_are_probed_under_current_dir() {
    let fs = MockFileSystem::new();
    fs.add_file("/work/scripts/deploy.sh", "");

    let found = resolve_executable(&fs, "scripts/deploy.sh", &ctx(&[])).unwrap();
    assert_eq!(found.path, PathBuf::from("/work/scripts/deploy.sh"));
}

#[cfg(unix)]
mod absolute {
    use super::*;

    #[test]
    fn existing_absolute_path_is_returned_without_searching() {
        let fs = MockFileSystem::new();
        fs.add_file("/usr/local/bin/tool", "");
        fs.add_file("/work/tool", "");

        let found = resolve_executable(&fs, "/usr/local/bin/tool", &ctx(&[".EXE"])).unwrap();
        assert_eq!(found.path, PathBuf::from("/usr/local/bin/tool"));
        assert_eq!(found.extension, None);
    }

    #[test]
    fn absolute_path_only_probes_its_own_extensions() {
        let fs = MockFileSystem::new();
        fs.add_file("/usr/local/bin/tool.EXE", "");
        fs.add_file("/opt/first/tool", "");

        let found = resolve_executable(&fs, "/usr/local/bin/tool", &ctx(&[".EXE"])).unwrap();
        assert_eq!(found.path, PathBuf::from("/usr/local/bin/tool.EXE"));

        // Never falls back to the search path for an absolute name.
        assert!(resolve_executable(&fs, "/missing/tool", &ctx(&[".EXE"])).is_none());
    }
}
