use super::{Identifier, SanitizePolicy};
use std::fmt;
use std::path::Path;

/// An ordered sequence of identifiers naming a namespace-qualified symbol
///
/// Filesystem paths become identifier paths by sanitizing each component in
/// order, which lets a directory tree be addressed as enums nested in enums.
/// Equality, hashing and ordering are structural; the dotted string form is
/// used only for deterministic output ordering and artifact naming, never as
/// identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IdentifierPath {
    components: Vec<Identifier>,
}

impl IdentifierPath {
    pub fn new(components: Vec<Identifier>) -> Self {
        IdentifierPath { components }
    }

    /// Sanitize every component of a relative filesystem path, in order.
    pub fn from_rel_path(path: &Path, policy: SanitizePolicy) -> Self {
        let components = path
            .components()
            .map(|c| Identifier::sanitize(&c.as_os_str().to_string_lossy(), policy))
            .collect();
        IdentifierPath { components }
    }

    pub fn components(&self) -> &[Identifier] {
        &self.components
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// The path with its last component removed; `None` for the empty path.
    pub fn parent(&self) -> Option<IdentifierPath> {
        if self.components.is_empty() {
            return None;
        }
        Some(IdentifierPath {
            components: self.components[..self.components.len() - 1].to_vec(),
        })
    }

    /// The last component; `None` for the empty path.
    pub fn last(&self) -> Option<&Identifier> {
        self.components.last()
    }

    /// Concatenation. Associative and non-mutating.
    pub fn join(&self, other: &IdentifierPath) -> IdentifierPath {
        let mut components = self.components.clone();
        components.extend(other.components.iter().cloned());
        IdentifierPath { components }
    }

    /// Every proper, non-empty prefix, shortest first.
    pub fn proper_prefixes(&self) -> impl Iterator<Item = IdentifierPath> + '_ {
        (1..self.components.len()).map(move |n| IdentifierPath {
            components: self.components[..n].to_vec(),
        })
    }

    /// Dotted form with escape quotes stripped, safe for use in file names.
    ///
    /// Stripping cannot unify two distinct identifiers: sanitization never
    /// produces a bare reserved word, so the unquoted spelling is free.
    pub fn artifact_stem(&self) -> String {
        let dotted = self.to_string();
        dotted.chars().filter(|&c| c != '`').collect()
    }
}

impl fmt::Display for IdentifierPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, component) in self.components.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(component.as_str())?;
        }
        Ok(())
    }
}

impl From<Identifier> for IdentifierPath {
    fn from(identifier: Identifier) -> Self {
        IdentifierPath {
            components: vec![identifier],
        }
    }
}
