//! Documents and the names derived from their location in a tree

use std::fmt;
use std::path::{Component, Path};

/// Token substituted for every path separator inside a qualified name.
pub const DEFAULT_SEPARATOR_ESCAPE: &str = "\\/";

/// Which side of the conversion a file belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// HTML source consumed by the tree converter
    Source,
    /// Plain-text help document consumed by the tag qualifier
    Text,
}

impl DocumentKind {
    pub const SOURCE_EXTENSION: &'static str = "html";
    pub const TEXT_EXTENSION: &'static str = "txt";

    /// Classify a file by its extension
    ///
    /// Text documents are `.txt` files plus the `.??x` family used by
    /// translated help files (`.jax`, `.cnx`, ...).
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;

        if extension == Self::SOURCE_EXTENSION {
            Some(DocumentKind::Source)
        } else if extension == Self::TEXT_EXTENSION || is_short_help_extension(extension) {
            Some(DocumentKind::Text)
        } else {
            None
        }
    }
}

fn is_short_help_extension(extension: &str) -> bool {
    let chars: Vec<char> = extension.chars().collect();
    chars.len() == 3 && chars[2] == 'x'
}

/// Namespace appended to every tag of one document
///
/// Built from the document's path relative to the tree root with the
/// extension removed and each separator replaced by an escape token. Two
/// documents that differ only by extension map to the same name; nothing
/// here detects that.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName(String);

impl QualifiedName {
    pub fn from_relative_path(relative: &Path, separator_escape: &str) -> Self {
        let stem = relative.with_extension("");
        let parts: Vec<String> = stem
            .components()
            .filter_map(|component| match component {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();

        QualifiedName(parts.join(separator_escape))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
