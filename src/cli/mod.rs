//! # CLI Module
//!
//! Command-line surface of the `textsmith-gen` binary.
//!
//! ## Commands
//!
//! ### `generate`
//!
//! Convert files and directories into Swift sources:
//!
//! ```bash
//! textsmith-gen generate Templates -r \
//!     --root ~/Projects/MyApp \
//!     --output-directory Sources/Generated
//! ```
//!
//! Options:
//! - `-r, --recursive` - scan resource directories recursively
//! - `--root <DIR>` - directory input/output paths are resolved against
//! - `-e, --enum-name <NAME>` - root enum name (default: `Texts`)
//! - `--policy <replace|drop>` - treatment of illegal identifier characters
//! - `--mode <single|multi>` - one artifact, or skeleton + one per resource
//! - `-o, --output-directory <DIR>` - where generated sources are written
//! - `--manifest <FILE>` / `--target <NAME>` - register artifacts in a
//!   project manifest and associate them with build targets
//! - `--dry-run` - report without writing
//!
//! ### `check`
//!
//! Validate the resource set and print the symbol table without generating:
//!
//! ```bash
//! textsmith-gen check Templates -r --enum-name Texts
//! ```
//!
//! Exits with an error listing every colliding pair when two resources
//! would share a symbol.

mod commands;

#[cfg(test)]
mod tests;

pub use commands::{run_cli, Cli, Commands, ModeArg, PolicyArg};
