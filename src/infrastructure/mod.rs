//! Infrastructure layer - External I/O and processes

pub mod config;
pub mod converter;
pub mod tree;

pub use config::Config;
pub use converter::{CommandConverter, HtmlConverter};
pub use tree::{DocumentEntry, DocumentTree};
