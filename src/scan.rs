//! # Scan Module
//!
//! Resolves the resource arguments against the root directory and enumerates
//! the files they name. A file argument contributes itself; a directory
//! argument contributes its file children - immediate only, or the whole
//! subtree when recursive scanning is enabled.
//!
//! Paths are normalized lexically and collected into a `BTreeSet`, so
//! duplicate arguments (and the same file reached through `./` detours)
//! collapse, and downstream phases see a deterministic order. The root is an
//! explicit value threaded through every resolution; the process working
//! directory is never consulted or changed.

use crate::error::ValidationError;
use anyhow::Context;
use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Lexically normalize a path: drop `.` components and resolve `..` against
/// preceding components where possible.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out: Vec<Component> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    out.iter().collect()
}

/// Enumerate the files named by `resources`, as normalized paths relative to
/// `root`.
///
/// # Errors
///
/// Fails with a [`ValidationError`] when an argument does not exist under the
/// root or lies outside it; traversal errors surface with path context.
pub fn collect_files(
    root: &Path,
    resources: &[PathBuf],
    recursive: bool,
) -> anyhow::Result<BTreeSet<PathBuf>> {
    let mut files = BTreeSet::new();
    for resource in resources {
        let rel = relative_to_root(root, resource)?;
        let absolute = root.join(&rel);
        if !absolute.exists() {
            return Err(ValidationError::new(format!(
                "resource '{}' does not exist under root '{}'",
                resource.display(),
                root.display()
            ))
            .into());
        }
        if absolute.is_dir() {
            let walker = if recursive {
                WalkDir::new(&absolute)
            } else {
                WalkDir::new(&absolute).max_depth(1)
            };
            for entry in walker {
                let entry = entry
                    .with_context(|| format!("failed to scan directory {}", absolute.display()))?;
                if entry.file_type().is_file() {
                    let child = entry
                        .path()
                        .strip_prefix(root)
                        .unwrap_or(entry.path())
                        .to_path_buf();
                    files.insert(normalize(&child));
                }
            }
        } else {
            files.insert(rel);
        }
    }
    debug!(count = files.len(), "collected resource files");
    Ok(files)
}

/// Express `path` relative to `root`. Relative arguments are taken as already
/// root-relative; absolute arguments must lie under the root.
fn relative_to_root(root: &Path, path: &Path) -> anyhow::Result<PathBuf> {
    let normalized = normalize(path);
    if normalized.is_absolute() {
        let root = root
            .canonicalize()
            .with_context(|| format!("failed to resolve root {}", root.display()))?;
        match normalized.strip_prefix(&root) {
            Ok(rel) => Ok(rel.to_path_buf()),
            Err(_) => Err(ValidationError::new(format!(
                "resource '{}' is outside root '{}'",
                path.display(),
                root.display()
            ))
            .into()),
        }
    } else {
        Ok(normalized)
    }
}
