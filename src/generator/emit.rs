use crate::plan::ArtifactPlan;
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One emitted artifact: output name and the path it was (or would be)
/// written to
#[derive(Debug, Clone)]
pub struct GeneratedArtifact {
    pub name: String,
    pub path: PathBuf,
}

/// Render every planned artifact, then write them to `output_dir`.
///
/// Rendering completes for the whole plan before the first write, so builder
/// or template failures never leave a partially-written output directory.
/// With `dry_run` nothing is written; the report lists what a real run would
/// produce.
///
/// # Errors
///
/// Returns rendering errors, or I/O errors with path context. Writes are not
/// retried.
pub fn write_artifacts(
    plans: &[ArtifactPlan<'_>],
    root: &str,
    version: &str,
    output_dir: &Path,
    dry_run: bool,
) -> anyhow::Result<Vec<GeneratedArtifact>> {
    let mut rendered = Vec::with_capacity(plans.len());
    for plan in plans {
        let text = super::render_artifact(plan, root, version)
            .with_context(|| format!("failed to render artifact '{}'", plan.file_name))?;
        rendered.push((plan.file_name.clone(), text));
    }

    if dry_run {
        for (name, text) in &rendered {
            println!(
                "📝 Would write {:?} ({} bytes)",
                output_dir.join(name),
                text.len()
            );
        }
        return Ok(rendered
            .into_iter()
            .map(|(name, _)| GeneratedArtifact {
                path: output_dir.join(&name),
                name,
            })
            .collect());
    }

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory {}", output_dir.display()))?;

    let mut artifacts = Vec::with_capacity(rendered.len());
    for (name, text) in rendered {
        let path = output_dir.join(&name);
        fs::write(&path, &text)
            .with_context(|| format!("failed to write artifact {}", path.display()))?;
        debug!(artifact = %name, bytes = text.len(), "wrote artifact");
        println!("✅ Generated {name} → {path:?}");
        artifacts.push(GeneratedArtifact { name, path });
    }
    Ok(artifacts)
}
