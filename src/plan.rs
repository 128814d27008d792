//! # Plan Module
//!
//! Decides which output artifacts a run produces and which slice of the
//! symbol set each one renders. The mode is a closed variant fixed during
//! configuration validation; nothing downstream re-derives it.

use crate::identifier::IdentifierPath;
use crate::resource::Resource;
use crate::tree::ResourceTree;

/// How many artifacts to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// One artifact with the full symbol set
    #[default]
    Single,
    /// One namespace-skeleton artifact plus one artifact per resource
    ///
    /// Changing one resource regenerates exactly one leaf artifact; the
    /// skeleton stays the only place namespace structure is declared.
    Multi,
}

/// One planned output artifact: a file name and the symbols it renders
#[derive(Debug)]
pub struct ArtifactPlan<'a> {
    /// Output file name, unique within the plan
    pub file_name: String,
    /// Whether this artifact carries the parentless root declaration
    pub declares_root: bool,
    /// Directory symbols rendered here, in canonical order
    pub directories: Vec<&'a IdentifierPath>,
    /// Resources rendered here, in canonical order
    pub resources: Vec<&'a Resource>,
}

const ARTIFACT_SUFFIX: &str = ".generated.swift";

/// Plan the artifacts for `tree` under `mode`.
///
/// Directories and resources are ordered by their canonical dotted form so
/// the plan is identical across runs whatever order the inputs arrived in.
/// No resource appears in more than one artifact, and output names cannot
/// collide: resource symbols are pairwise unique and every name is the
/// symbol's stem plus a fixed suffix.
pub fn plan_artifacts<'a>(tree: &'a ResourceTree, mode: OutputMode) -> Vec<ArtifactPlan<'a>> {
    let directories: Vec<&IdentifierPath> = tree.directories.iter().collect();
    let mut resources: Vec<&Resource> = tree.resources.iter().collect();
    resources.sort_by(|a, b| a.identifier_path.cmp(&b.identifier_path));

    // Escape quotes are stripped for file names, as in resource stems.
    let root_stem: String = tree.root.as_str().chars().filter(|&c| c != '`').collect();
    let skeleton_name = format!("{root_stem}{ARTIFACT_SUFFIX}");
    match mode {
        OutputMode::Single => vec![ArtifactPlan {
            file_name: skeleton_name,
            declares_root: true,
            directories,
            resources,
        }],
        OutputMode::Multi => {
            let mut plans = Vec::with_capacity(resources.len() + 1);
            plans.push(ArtifactPlan {
                file_name: skeleton_name,
                declares_root: true,
                directories,
                resources: Vec::new(),
            });
            for resource in resources {
                plans.push(ArtifactPlan {
                    file_name: format!(
                        "{}{}",
                        resource.identifier_path.artifact_stem(),
                        ARTIFACT_SUFFIX
                    ),
                    declares_root: false,
                    directories: Vec::new(),
                    resources: vec![resource],
                });
            }
            plans
        }
    }
}
