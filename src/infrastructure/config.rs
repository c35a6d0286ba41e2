//! Configuration management

use crate::domain::DEFAULT_SEPARATOR_ESCAPE;
use crate::error::{HelptreeError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Environment variable overriding the configured converter command
pub const CONVERTER_ENV: &str = "HELPTREE_CONVERTER";

const DEFAULT_CONVERTER: &str = "html2vimdoc";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Command line of the HTML to help text converter; the source path is
    /// appended as its last argument
    pub converter: String,

    /// Token replacing path separators in qualified names
    pub separator_escape: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            converter: DEFAULT_CONVERTER.to_string(),
            separator_escape: DEFAULT_SEPARATOR_ESCAPE.to_string(),
        }
    }
}

impl Config {
    /// Load config from an explicit TOML file, or fall back to defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Ok(Config::default()),
        }
    }

    /// Load config from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                HelptreeError::Config(format!("Config file not found: {}", path.display()))
            } else {
                HelptreeError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.converter.trim().is_empty() {
            return Err(HelptreeError::Config(
                "converter command must not be empty".to_string(),
            ));
        }
        if matches!(self.separator_escape.as_str(), "" | "/" | "\\") {
            return Err(HelptreeError::Config(format!(
                "separator_escape must be a non-empty token other than a bare separator: {:?}",
                self.separator_escape
            )));
        }
        if self.separator_escape.contains('*')
            || self.separator_escape.chars().any(char::is_whitespace)
        {
            return Err(HelptreeError::Config(format!(
                "separator_escape may not contain '*' or whitespace: {:?}",
                self.separator_escape
            )));
        }
        Ok(())
    }

    /// Get the converter command, checking the environment first
    pub fn get_converter(&self) -> String {
        std::env::var(CONVERTER_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| self.converter.clone())
    }
}
