//! Domain layer - Document naming and tag rewriting rules

pub mod document;
pub mod tags;

pub use document::{DocumentKind, QualifiedName, DEFAULT_SEPARATOR_ESCAPE};
