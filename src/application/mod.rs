//! Application layer - Use cases and orchestration

pub mod convert_tree;
pub mod qualify_tags;

pub use convert_tree::{ConvertOptions, ConvertReport, ConvertTreeService};
pub use qualify_tags::{QualifyOptions, QualifyReport, QualifyTagsService};
