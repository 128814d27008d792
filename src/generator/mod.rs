//! # Generator Module
//!
//! Renders planned artifacts to Swift source text and writes them to the
//! output directory.
//!
//! The generator uses Askama templates to produce Swift code:
//!
//! ```text
//! resource paths → tree builder → symbol set → artifact plan → template rendering → .swift files
//! ```
//!
//! Three templates live in the `templates/` directory:
//!
//! - `texts.swift.txt` - a full artifact: root declaration, every namespace,
//!   every resource (single mode)
//! - `skeleton.swift.txt` - root declaration and namespaces only (the one
//!   place structure is declared in multi mode)
//! - `resource.swift.txt` - a single resource extension (one per file in
//!   multi mode)
//!
//! Every artifact is rendered before anything is written, so a failing run
//! leaves no partial output behind.

mod emit;
mod templates;

pub use emit::{write_artifacts, GeneratedArtifact};
pub use templates::render_artifact;
