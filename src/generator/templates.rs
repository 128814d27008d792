use askama::Template;

use crate::error::InvariantViolation;
use crate::identifier::IdentifierPath;
use crate::plan::ArtifactPlan;
use crate::resource::Resource;

/// A directory symbol as the templates see it: enclosing namespace plus the
/// enum declared inside it
#[derive(Debug, Clone)]
pub struct DirectorySymbol {
    /// Rendered parent namespace (e.g. `Texts.docs`)
    pub parent: String,
    /// Last path component, the enum name
    pub name: String,
}

/// A resource symbol as the templates see it
#[derive(Debug, Clone)]
pub struct ResourceSymbol<'a> {
    /// Rendered parent namespace
    pub parent: String,
    /// Leaf constant name
    pub name: &'a str,
    /// Fence as a repeated marker string, empty for a plain literal
    pub fence: &'a str,
    /// Raw contents, embedded verbatim
    pub contents: &'a str,
}

/// Template for a full artifact: root + directories + resources
#[derive(Template)]
#[template(path = "texts.swift.txt", escape = "none")]
struct TextsTemplate<'a> {
    version: &'a str,
    root: &'a str,
    directories: Vec<DirectorySymbol>,
    resources: Vec<ResourceSymbol<'a>>,
}

/// Template for the namespace skeleton: root + directories, no resources
#[derive(Template)]
#[template(path = "skeleton.swift.txt", escape = "none")]
struct SkeletonTemplate<'a> {
    version: &'a str,
    root: &'a str,
    directories: Vec<DirectorySymbol>,
}

/// Template for a single-resource artifact
#[derive(Template)]
#[template(path = "resource.swift.txt", escape = "none")]
struct ResourceFileTemplate<'a> {
    version: &'a str,
    resource: ResourceSymbol<'a>,
}

fn directory_symbol(path: &IdentifierPath) -> anyhow::Result<DirectorySymbol> {
    match (path.parent(), path.last()) {
        (Some(parent), Some(name)) => Ok(DirectorySymbol {
            parent: parent.to_string(),
            name: name.as_str().to_string(),
        }),
        _ => Err(InvariantViolation::new(format!(
            "directory symbol `{path}` has no parent to extend"
        ))
        .into()),
    }
}

fn resource_symbol(resource: &Resource) -> ResourceSymbol<'_> {
    ResourceSymbol {
        parent: resource.parent.to_string(),
        name: resource.name.as_str(),
        fence: &resource.fence,
        contents: &resource.contents,
    }
}

/// Render one planned artifact to Swift source text.
///
/// # Errors
///
/// Fails on template rendering errors, or on an internally inconsistent plan
/// (a leaf artifact without exactly one resource, a directory symbol with no
/// parent).
pub fn render_artifact(plan: &ArtifactPlan<'_>, root: &str, version: &str) -> anyhow::Result<String> {
    if !plan.declares_root {
        let resource = match plan.resources.as_slice() {
            [resource] => resource,
            other => {
                return Err(InvariantViolation::new(format!(
                    "leaf artifact '{}' carries {} resources, expected exactly one",
                    plan.file_name,
                    other.len()
                ))
                .into());
            }
        };
        let rendered = ResourceFileTemplate {
            version,
            resource: resource_symbol(resource),
        }
        .render()?;
        return Ok(rendered);
    }

    let directories = plan
        .directories
        .iter()
        .map(|path| directory_symbol(path))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let rendered = if plan.resources.is_empty() {
        SkeletonTemplate {
            version,
            root,
            directories,
        }
        .render()?
    } else {
        TextsTemplate {
            version,
            root,
            directories,
            resources: plan.resources.iter().map(|r| resource_symbol(r)).collect(),
        }
        .render()?
    };
    Ok(rendered)
}
