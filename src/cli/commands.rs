use crate::fence::FenceSpec;
use crate::error::ValidationError;
use crate::generator::write_artifacts;
use crate::identifier::{Identifier, SanitizePolicy};
use crate::manifest::link_artifacts;
use crate::plan::{plan_artifacts, OutputMode};
use crate::scan::collect_files;
use crate::tree::ResourceTree;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::info;

/// Command-line interface for textsmith
///
/// Compiles directories of text resources into Swift sources that embed each
/// file as a namespaced string constant.
#[derive(Parser)]
#[command(name = "textsmith-gen")]
#[command(about = "Generate Swift sources for text resources", version)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate Swift sources embedding the given resources
    Generate {
        /// Files and directories to convert to Swift sources
        #[arg(required = true)]
        resources: Vec<PathBuf>,

        /// Scan resource directories recursively instead of taking only
        /// their immediate file children
        #[arg(short, long, default_value_t = false)]
        recursive: bool,

        /// Directory that input and output paths are resolved against;
        /// keeping it close to the resources produces compact names
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Name of the Swift enum that will contain the converted resources
        #[arg(short, long, default_value = "Texts")]
        enum_name: String,

        /// How illegal identifier characters are handled
        #[arg(long, value_enum, default_value_t = PolicyArg::Replace)]
        policy: PolicyArg,

        /// Whether to emit one artifact or one per resource
        #[arg(long, value_enum, default_value_t = ModeArg::Single)]
        mode: ModeArg,

        /// Directory the generated Swift sources are written to
        #[arg(short, long)]
        output_directory: PathBuf,

        /// Project manifest to register generated files in
        #[arg(long)]
        manifest: Option<PathBuf>,

        /// Build target to associate newly registered files with
        /// (repeatable; requires --manifest)
        #[arg(long = "target")]
        targets: Vec<String>,

        /// Perform a dry run: report what would be written without writing
        #[arg(long, default_value_t = false)]
        dry_run: bool,
    },
    /// Check resources for identifier collisions and print the symbol table
    Check {
        /// Files and directories that would be converted
        #[arg(required = true)]
        resources: Vec<PathBuf>,

        /// Scan resource directories recursively
        #[arg(short, long, default_value_t = false)]
        recursive: bool,

        /// Directory that input paths are resolved against
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Name of the Swift enum that would contain the resources
        #[arg(short, long, default_value = "Texts")]
        enum_name: String,

        /// How illegal identifier characters are handled
        #[arg(long, value_enum, default_value_t = PolicyArg::Replace)]
        policy: PolicyArg,
    },
}

/// Sanitization policy as exposed on the command line
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Replace illegal characters with underscores
    Replace,
    /// Drop illegal characters entirely
    Drop,
}

impl From<PolicyArg> for SanitizePolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Replace => SanitizePolicy::Replace,
            PolicyArg::Drop => SanitizePolicy::Drop,
        }
    }
}

/// Output mode as exposed on the command line
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// One artifact containing the full symbol set
    Single,
    /// A namespace skeleton plus one artifact per resource
    Multi,
}

impl From<ModeArg> for OutputMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Single => OutputMode::Single,
            ModeArg::Multi => OutputMode::Multi,
        }
    }
}

/// Execute the CLI command provided by the user
///
/// # Errors
///
/// Returns an error if configuration validation fails, a resource cannot be
/// read, sanitized identifiers collide, rendering fails, or an artifact or
/// the manifest cannot be written. All validation and builder errors surface
/// before anything is written.
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Generate {
            resources,
            recursive,
            root,
            enum_name,
            policy,
            mode,
            output_directory,
            manifest,
            targets,
            dry_run,
        } => {
            validate_root(&root)?;
            if manifest.is_none() && !targets.is_empty() {
                return Err(ValidationError::new(
                    "--target requires --manifest; there is no manifest to associate targets in",
                )
                .into());
            }

            let policy = SanitizePolicy::from(policy);
            let files = collect_files(&root, &resources, recursive)?;
            let tree = ResourceTree::build(
                &root,
                &files,
                Identifier::sanitize(&enum_name, policy),
                policy,
                FenceSpec::swift(),
            )?;
            info!(
                resources = tree.resources.len(),
                directories = tree.directories.len(),
                "symbol set complete"
            );

            let plans = plan_artifacts(&tree, mode.into());
            let root_name = tree.root.as_str().to_string();
            let artifacts = write_artifacts(
                &plans,
                &root_name,
                env!("CARGO_PKG_VERSION"),
                &root.join(&output_directory),
                dry_run,
            )?;

            if let Some(manifest_path) = manifest {
                if dry_run {
                    println!("📝 Would update manifest {manifest_path:?}");
                } else {
                    link_artifacts(
                        &root.join(manifest_path),
                        &output_directory,
                        &artifacts,
                        &targets,
                    )?;
                }
            }
            Ok(())
        }
        Commands::Check {
            resources,
            recursive,
            root,
            enum_name,
            policy,
        } => {
            validate_root(&root)?;
            let policy = SanitizePolicy::from(policy);
            let files = collect_files(&root, &resources, recursive)?;
            let tree = ResourceTree::build(
                &root,
                &files,
                Identifier::sanitize(&enum_name, policy),
                policy,
                FenceSpec::swift(),
            )?;

            println!("enum {}", tree.root);
            for directory in &tree.directories {
                println!("namespace {directory}");
            }
            let mut resources: Vec<_> = tree.resources.iter().collect();
            resources.sort_by(|a, b| a.identifier_path.cmp(&b.identifier_path));
            for resource in resources {
                println!(
                    "constant  {} ← {} (fence {})",
                    resource.identifier_path,
                    resource.path.display(),
                    resource.fence_len
                );
            }
            Ok(())
        }
    }
}

fn validate_root(root: &Path) -> anyhow::Result<()> {
    if !root.is_dir() {
        return Err(ValidationError::new(format!(
            "'{}' is invalid for root: it must be an existing directory",
            root.display()
        ))
        .into());
    }
    Ok(())
}
