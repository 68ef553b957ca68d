//! Workspace root discovery.
//!
//! The nearest monorepo root (npm/yarn `workspaces`, pnpm or lerna) at or
//! above the starting directory wins. Without one, the root is the nearest
//! ancestor with a `package.json`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, ScaffoldError};

const PACKAGE_JSON: &str = "package.json";

/// Marker files that make a directory a monorepo root on their own.
const MONOREPO_MARKERS: &[&str] = &["pnpm-workspace.yaml", "lerna.json"];

/// Find the workspace root for `start`.
pub fn find_root(start: &Path) -> Result<PathBuf> {
    let root = start
        .ancestors()
        .find(|dir| is_monorepo_root(dir))
        .or_else(|| {
            start
                .ancestors()
                .find(|dir| dir.join(PACKAGE_JSON).is_file())
        })
        .ok_or_else(|| ScaffoldError::WorkspaceRootNotFound {
            start: start.to_path_buf(),
        })?;

    tracing::debug!(root = %root.display(), "Located workspace root");
    Ok(root.to_path_buf())
}

fn is_monorepo_root(dir: &Path) -> bool {
    if MONOREPO_MARKERS.iter().any(|marker| dir.join(marker).is_file()) {
        return true;
    }
    declares_workspaces(&dir.join(PACKAGE_JSON))
}

fn declares_workspaces(manifest: &Path) -> bool {
    let Ok(content) = fs::read_to_string(manifest) else {
        return false;
    };
    match serde_json::from_str::<serde_json::Value>(&content) {
        Ok(value) => value.get("workspaces").is_some(),
        Err(e) => {
            tracing::debug!(file = ?manifest, error = %e, "Failed to parse package.json");
            false
        }
    }
}
