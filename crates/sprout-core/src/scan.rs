//! Source tree scanning used to infer project conventions.

use std::ffi::OsStr;
use std::path::Path;

use walkdir::WalkDir;

/// Directory names never descended into.
pub const EXCLUDED_DIRS: &[&str] = &["node_modules", "build", "bin", "lib"];

/// Path fragments that mark a TypeScript project.
pub const TYPESCRIPT_TOKENS: &[&str] = &[".tsx", ".ts"];

/// Path fragments that mark a Sass project.
pub const SASS_TOKENS: &[&str] = &[".scss"];

/// Check whether any path under `root` contains one of `tokens`.
///
/// Excluded directories (see [`should_exclude`]) are not descended into, but
/// their own path is still tested like any other entry. Non-excluded
/// directories are only traversed. Symlinks are never followed. Returns
/// `false` when `root` does not exist.
pub fn contains_match(root: &Path, tokens: &[&str]) -> bool {
    if !root.exists() {
        return false;
    }

    let mut entries = WalkDir::new(root).min_depth(1).follow_links(false).into_iter();

    while let Some(entry) = entries.next() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!(error = %e, "Skipping unreadable entry");
                continue;
            }
        };

        if entry.file_type().is_dir() {
            if !should_exclude(entry.file_name()) {
                continue;
            }
            entries.skip_current_dir();
        }

        if path_matches(entry.path(), tokens) {
            tracing::debug!(path = ?entry.path(), "Found convention marker");
            return true;
        }
    }

    false
}

/// Excluded: dot-entries and the fixed build/dependency directory names.
pub fn should_exclude(name: &OsStr) -> bool {
    let name = name.to_string_lossy();
    name.starts_with('.') || EXCLUDED_DIRS.contains(&name.as_ref())
}

fn path_matches(path: &Path, tokens: &[&str]) -> bool {
    let path = path.to_string_lossy();
    tokens.iter().any(|token| path.contains(token))
}
