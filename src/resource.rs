//! # Resource Module
//!
//! A [`Resource`] wraps one input file: its normalized path relative to the
//! root directory, the identifier path it will be reachable under, its raw
//! contents, and the fence its contents need when embedded as a raw string.

use crate::error::InvariantViolation;
use crate::fence::FenceSpec;
use crate::identifier::{Identifier, IdentifierPath, SanitizePolicy};
use anyhow::Context;
use std::path::{Path, PathBuf};

/// One input file mapped to a leaf symbol with content
///
/// Immutable once constructed; created exactly once per unique normalized
/// path and consumed by the planner and renderer.
#[derive(Debug, Clone)]
pub struct Resource {
    /// Normalized path relative to the root directory
    pub path: PathBuf,
    /// Namespace-qualified symbol, prefixed with the root identifier
    pub identifier_path: IdentifierPath,
    /// Enclosing namespace (`identifier_path` minus the leaf)
    pub parent: IdentifierPath,
    /// Leaf constant name
    pub name: Identifier,
    /// Raw file contents, embedded verbatim
    pub contents: String,
    /// Required fence length for `contents`
    pub fence_len: usize,
    /// The fence as a repeated marker string, ready for the renderer
    pub fence: String,
}

impl Resource {
    /// Read the file at `root`/`path` and derive its symbol and fence.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read as UTF-8 text, or (defensively) if
    /// the derived identifier path is too short to name a parent and a leaf -
    /// impossible for a root-prefixed file path and treated as an internal
    /// fault, not a user error.
    pub fn load(
        root: &Path,
        path: &Path,
        prefix: &IdentifierPath,
        policy: SanitizePolicy,
        fence_spec: &FenceSpec,
    ) -> anyhow::Result<Resource> {
        let identifier_path = prefix.join(&IdentifierPath::from_rel_path(path, policy));
        let (parent, name) = match (identifier_path.parent(), identifier_path.last()) {
            (Some(parent), Some(name)) => (parent, name.clone()),
            _ => {
                return Err(InvariantViolation::new(format!(
                    "path {} has identifier path `{}` too short to refer to a file",
                    path.display(),
                    identifier_path
                ))
                .into());
            }
        };

        let absolute = root.join(path);
        let contents = std::fs::read_to_string(&absolute)
            .with_context(|| format!("failed to read resource {}", absolute.display()))?;
        let fence_len = fence_spec.fence_len(&contents);

        Ok(Resource {
            path: path.to_path_buf(),
            identifier_path,
            parent,
            name,
            contents,
            fence_len,
            fence: fence_spec.fence_marker(fence_len),
        })
    }
}
