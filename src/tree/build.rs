use crate::fence::FenceSpec;
use crate::identifier::{Identifier, IdentifierPath, SanitizePolicy};
use crate::resource::Resource;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A set of distinct source paths that sanitize to the same symbol
#[derive(Debug, Clone)]
pub struct CollisionGroup {
    /// The shared identifier path
    pub symbol: IdentifierPath,
    /// Every source path producing it, in deterministic order
    pub paths: Vec<PathBuf>,
}

/// Two or more distinct resources sanitize to the same identifier path
///
/// Carries every colliding group, not just the first found. Formatting lists
/// each symbol with all of its source paths so the user can resolve the
/// conflict by renaming or excluding a resource.
#[derive(Debug, Clone)]
pub struct CollisionError {
    pub groups: Vec<CollisionGroup>,
}

impl fmt::Display for CollisionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} identifier collision(s); distinct resources would share a symbol:",
            self.groups.len()
        )?;
        for group in &self.groups {
            writeln!(f, "  {}:", group.symbol)?;
            for path in &group.paths {
                writeln!(f, "    {}", path.display())?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for CollisionError {}

/// The complete symbol set of a run: root, directories, resources
///
/// Insertion imposes no order; rendering sorts by the canonical dotted form
/// so output is stable regardless of how the input set was enumerated.
#[derive(Debug)]
pub struct ResourceTree {
    /// The root namespace, declared through a distinct parentless form
    pub root: Identifier,
    /// One resource per unique input path
    pub resources: Vec<Resource>,
    /// Every proper, non-empty, non-root ancestor of a resource symbol
    pub directories: BTreeSet<IdentifierPath>,
}

impl ResourceTree {
    /// Build the symbol set for `paths` (normalized, root-relative).
    ///
    /// Reads every file, derives its root-prefixed identifier path, verifies
    /// pairwise symbol uniqueness, and reconstructs the minimal namespace
    /// skeleton hosting every leaf.
    ///
    /// # Errors
    ///
    /// Returns [`CollisionError`] (all colliding groups) when symbols are not
    /// unique, or an I/O error with path context if a resource cannot be
    /// read. All failures surface before any artifact is rendered.
    pub fn build(
        root_dir: &Path,
        paths: &BTreeSet<PathBuf>,
        root: Identifier,
        policy: SanitizePolicy,
        fence_spec: &FenceSpec,
    ) -> anyhow::Result<ResourceTree> {
        let prefix = IdentifierPath::from(root.clone());

        let mut resources = Vec::with_capacity(paths.len());
        // Symbol -> producing source paths. Collisions are exactly the keys
        // with more than one entry; linear, and complete by construction.
        let mut producers: BTreeMap<IdentifierPath, Vec<PathBuf>> = BTreeMap::new();
        for path in paths {
            let resource = Resource::load(root_dir, path, &prefix, policy, fence_spec)?;
            producers
                .entry(resource.identifier_path.clone())
                .or_default()
                .push(path.clone());
            resources.push(resource);
        }

        let groups: Vec<CollisionGroup> = producers
            .into_iter()
            .filter(|(_, paths)| paths.len() > 1)
            .map(|(symbol, paths)| CollisionGroup { symbol, paths })
            .collect();
        if !groups.is_empty() {
            return Err(CollisionError { groups }.into());
        }

        let mut directories = BTreeSet::new();
        for resource in &resources {
            // Proper prefixes minus the root-only path: the root is declared
            // separately, without a parent.
            for prefix in resource.identifier_path.proper_prefixes().skip(1) {
                directories.insert(prefix);
            }
        }

        debug!(
            resources = resources.len(),
            directories = directories.len(),
            "built resource tree"
        );
        Ok(ResourceTree {
            root,
            resources,
            directories,
        })
    }
}
