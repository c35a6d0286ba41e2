//! helptree - HTML documentation to namespaced help text
//!
//! Converts a tree of HTML documentation into plain-text help documents
//! and rewrites their `*tag*` markers so several converted trees can be
//! merged without tag collisions.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::HelptreeError;
