//! # Manifest Module
//!
//! Optional post-step that links generated artifacts into a project
//! manifest, so external build tooling can pick up new files without manual
//! registration.
//!
//! The manifest is a JSON document modeling nested groups: one group per
//! path segment of the output directory, with artifact files registered
//! under the leaf group and associated with zero or more named build
//! targets. The step is idempotent - files are registered only if absent,
//! and the manifest is persisted only if its serialized form changed, so
//! re-running with unchanged inputs never touches it.

use crate::generator::GeneratedArtifact;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Component, Path};
use tracing::debug;

/// A file registered in the manifest
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// Build targets this file belongs to
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub targets: BTreeSet<String>,
}

/// A group node: nested groups plus the files registered directly in it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub groups: BTreeMap<String, Group>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub files: BTreeMap<String, FileEntry>,
}

/// The manifest document root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectManifest {
    pub version: u32,
    #[serde(default)]
    pub root: Group,
}

impl Default for ProjectManifest {
    fn default() -> Self {
        ProjectManifest {
            version: 1,
            root: Group::default(),
        }
    }
}

/// What the linkage step did
#[derive(Debug, Clone, Default)]
pub struct LinkReport {
    /// Artifact names newly registered this run
    pub registered: Vec<String>,
    /// Whether the manifest file was rewritten
    pub changed: bool,
}

/// Register `artifacts` under the group chain for `output_dir` and persist
/// the manifest if it changed.
///
/// Missing groups are created, files already present are left untouched
/// (their target associations included), and new files are associated with
/// `targets`.
///
/// # Errors
///
/// Fails if an existing manifest cannot be parsed, or on I/O errors reading
/// or writing it.
pub fn link_artifacts(
    manifest_path: &Path,
    output_dir: &Path,
    artifacts: &[GeneratedArtifact],
    targets: &[String],
) -> anyhow::Result<LinkReport> {
    let original = match std::fs::read_to_string(manifest_path) {
        Ok(text) => Some(text),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => {
            return Err(e).with_context(|| {
                format!("failed to read manifest {}", manifest_path.display())
            });
        }
    };
    let mut manifest: ProjectManifest = match &original {
        Some(text) => serde_json::from_str(text)
            .with_context(|| format!("failed to parse manifest {}", manifest_path.display()))?,
        None => ProjectManifest::default(),
    };

    // Locate or create one nested group per path segment of the output
    // directory.
    let mut group = &mut manifest.root;
    for component in output_dir.components() {
        if let Component::Normal(segment) = component {
            let key = segment.to_string_lossy().into_owned();
            group = group.groups.entry(key).or_default();
        }
    }

    let mut registered = Vec::new();
    for artifact in artifacts {
        if !group.files.contains_key(&artifact.name) {
            group.files.insert(
                artifact.name.clone(),
                FileEntry {
                    targets: targets.iter().cloned().collect(),
                },
            );
            registered.push(artifact.name.clone());
        }
    }

    let serialized = serde_json::to_string_pretty(&manifest)?;
    let changed = original.as_deref() != Some(serialized.as_str());
    if changed {
        std::fs::write(manifest_path, &serialized)
            .with_context(|| format!("failed to write manifest {}", manifest_path.display()))?;
        println!(
            "✅ Updated manifest {:?} ({} new file(s))",
            manifest_path,
            registered.len()
        );
    } else {
        debug!(manifest = %manifest_path.display(), "manifest unchanged");
    }

    Ok(LinkReport {
        registered,
        changed,
    })
}
