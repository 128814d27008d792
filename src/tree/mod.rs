//! # Tree Module
//!
//! Builds the symbol set for a run: one identifier path per resource, the
//! namespace skeleton of every ancestor directory, and a guarantee that no
//! two resources share a symbol.
//!
//! Collision detection is a global barrier: nothing downstream of the builder
//! runs until every resource's identifier path is known and proven unique.
//! When sanitization folds two distinct paths onto one symbol, the error
//! reports every colliding group at once, so the user can fix the whole
//! conflict in one pass instead of replaying the run per pair.

mod build;


pub use build::{CollisionError, CollisionGroup, ResourceTree};
