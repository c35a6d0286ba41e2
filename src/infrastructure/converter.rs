//! External HTML to help text converter

use crate::error::{HelptreeError, Result};
use std::path::Path;
use std::process::Command;

/// Turns one HTML source document into help text with tag markers
pub trait HtmlConverter {
    fn convert(&self, source: &Path) -> Result<String>;
}

/// Converter backed by an external command writing to stdout
#[derive(Debug, Clone)]
pub struct CommandConverter {
    command: String,
}

impl CommandConverter {
    /// Create a converter from a command line such as `html2vimdoc --width 78`
    pub fn new(command: String) -> Self {
        CommandConverter { command }
    }

    /// Parse command into program and arguments
    fn parse_command(&self) -> Result<(String, Vec<String>)> {
        let parts: Vec<&str> = self.command.split_whitespace().collect();

        let Some((program, args)) = parts.split_first() else {
            return Err(HelptreeError::Converter(
                "Converter command is empty".to_string(),
            ));
        };

        Ok((
            program.to_string(),
            args.iter().map(|s| s.to_string()).collect(),
        ))
    }
}

impl HtmlConverter for CommandConverter {
    fn convert(&self, source: &Path) -> Result<String> {
        let (program, args) = self.parse_command()?;

        tracing::debug!(program = %program, source = %source.display(), "running converter");

        let output = Command::new(&program)
            .args(&args)
            .arg(source)
            .output()
            .map_err(|e| {
                HelptreeError::Converter(format!("Failed to launch converter '{}': {}", program, e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            if !stderr.trim().is_empty() {
                tracing::warn!(source = %source.display(), "converter stderr: {}", stderr.trim());
            }
            return Err(HelptreeError::ConverterFailed {
                path: source.to_path_buf(),
                code: output.status.to_string(),
            });
        }

        if output.stdout.is_empty() {
            return Err(HelptreeError::EmptyOutput(source.to_path_buf()));
        }

        String::from_utf8(output.stdout).map_err(|_| {
            HelptreeError::Converter(format!(
                "Converter output for {} is not valid UTF-8",
                source.display()
            ))
        })
    }
}
