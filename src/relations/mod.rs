// src/relations/mod.rs
//! Relationship resolution from a single person's point of view.

pub mod index;
pub mod resolver;

pub use index::RelationIndex;
pub use resolver::{resolve_relationships, Relative, Relatives};
