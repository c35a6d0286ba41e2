//! Error types for helptree

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for helptree
#[derive(Debug, Error)]
pub enum HelptreeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read {}: {source}", .path.display())]
    ReadDocument {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Converter error: {0}")]
    Converter(String),

    #[error("Converter exited with {code} for {}", .path.display())]
    ConverterFailed { path: PathBuf, code: String },

    #[error("Converter produced no output for {}", .0.display())]
    EmptyOutput(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl HelptreeError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            HelptreeError::Config(_) | HelptreeError::TomlDeserialize(_) => 2,
            HelptreeError::Converter(_)
            | HelptreeError::ConverterFailed { .. }
            | HelptreeError::EmptyOutput(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            HelptreeError::Converter(_) | HelptreeError::ConverterFailed { .. } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that the converter is installed and in PATH\n\
                    • Set HELPTREE_CONVERTER (e.g., export HELPTREE_CONVERTER='html2vimdoc')\n\
                    • Set 'converter' in the file passed with --config",
                    self
                )
            }
            HelptreeError::EmptyOutput(_) => {
                format!(
                    "{}\n\n\
                    The converter must write the converted document to standard output.",
                    self
                )
            }
            HelptreeError::Config(msg) if msg.contains("Invalid prefix") => {
                format!(
                    "{}\n\n\
                    A prefix may not contain '*' or whitespace.\n\
                    Example: helptree qualify doc mylib-",
                    self
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using HelptreeError
pub type Result<T> = std::result::Result<T, HelptreeError>;
