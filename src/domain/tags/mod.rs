//! Tag marker system

pub mod qualifier;

// Re-export main types
pub use qualifier::{is_candidate_line, qualify_text, QualifyResult};
