//! # textsmith
//!
//! **textsmith** compiles directories of text resources into Swift sources
//! that embed each file as a namespaced string constant, so templates,
//! fixtures and configuration snippets can be referenced at compile time
//! with no runtime file I/O.
//!
//! ## Overview
//!
//! Given a resource tree like
//!
//! ```text
//! docs/
//! ├── readme.txt
//! └── notes/
//!     └── todo.txt
//! ```
//!
//! textsmith emits Swift source declaring one enum per directory and one
//! `String` constant per file:
//!
//! ```swift
//! enum Texts {}
//! extension Texts { enum docs {} }
//! extension Texts.docs { enum notes {} }
//! extension Texts.docs {
//!     static let readme_txt: String = """
//! hello
//! """
//! }
//! ```
//!
//! Every path segment is sanitized against the Swift identifier grammar
//! (reserved words are back-quoted, never renamed), contents are embedded as
//! raw string literals with the minimal `#` fence that keeps them
//! unambiguous, and two resources can never silently share a symbol - the
//! run fails listing every colliding pair instead.
//!
//! ## Architecture
//!
//! The library is organized into several key modules:
//!
//! - **[`identifier`]** - Swift identifier sanitization and namespace paths
//! - **[`fence`]** - minimal raw-string fence computation
//! - **[`scan`]** - resource enumeration against an explicit root directory
//! - **[`resource`]** - one input file with its symbol, contents and fence
//! - **[`tree`]** - symbol-set assembly and collision detection
//! - **[`plan`]** - artifact planning (single file vs. skeleton + per-resource)
//! - **[`generator`]** - Askama template rendering and artifact emission
//! - **[`manifest`]** - optional project-manifest registration of artifacts
//!
//! The pipeline is a deterministic batch run:
//!
//! ```text
//! paths → scan → tree (sanitize + fence + collision barrier) → plan → render → write
//! ```
//!
//! All validation and builder errors surface before the first artifact is
//! written; a failed run leaves no partial output.
//!
//! ## CLI
//!
//! The compiler ships as the `textsmith-gen` binary:
//!
//! ```bash
//! textsmith-gen generate Templates -r \
//!     --root ~/Projects/MyApp \
//!     --enum-name Texts \
//!     --output-directory Sources/Generated
//! ```
//!
//! See the [`cli`] module for the full flag surface.

pub mod cli;
pub mod error;
pub mod fence;
pub mod generator;
pub mod identifier;
pub mod manifest;
pub mod plan;
pub mod resource;
pub mod scan;
pub mod tree;

pub use error::{InvariantViolation, ValidationError};
pub use fence::FenceSpec;
pub use identifier::{Identifier, IdentifierPath, SanitizePolicy};
pub use plan::{plan_artifacts, ArtifactPlan, OutputMode};
pub use resource::Resource;
pub use tree::{CollisionError, CollisionGroup, ResourceTree};
