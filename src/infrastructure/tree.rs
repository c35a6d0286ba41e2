//! Document trees on the file system

use crate::domain::DocumentKind;
use crate::error::{HelptreeError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A document file found under a tree root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentEntry {
    pub path: PathBuf,
    pub relative: PathBuf,
}

/// Directory holding a tree of documents
#[derive(Debug, Clone)]
pub struct DocumentTree {
    pub root: PathBuf,
}

impl DocumentTree {
    /// Create a tree rooted at the given directory
    pub fn new(root: PathBuf) -> Self {
        DocumentTree { root }
    }

    /// Open an existing directory as a tree
    pub fn open(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(HelptreeError::Config(format!(
                "Not a directory: {}",
                root.display()
            )));
        }
        Ok(DocumentTree::new(root.to_path_buf()))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List every document of `kind` below the root, ordered by path
    pub fn list_documents(&self, kind: DocumentKind) -> Result<Vec<DocumentEntry>> {
        let mut documents = Vec::new();

        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            if DocumentKind::from_path(entry.path()) != Some(kind) {
                continue;
            }
            let Ok(relative) = entry.path().strip_prefix(&self.root) else {
                continue;
            };

            documents.push(DocumentEntry {
                path: entry.path().to_path_buf(),
                relative: relative.to_path_buf(),
            });
        }

        tracing::debug!(
            root = %self.root.display(),
            count = documents.len(),
            "listed {:?} documents",
            kind
        );
        Ok(documents)
    }

    /// Read document content as raw bytes; help files need not be UTF-8
    pub fn read_document(&self, relative: &Path) -> Result<Vec<u8>> {
        let path = self.root.join(relative);
        fs::read(&path).map_err(|source| HelptreeError::ReadDocument { path, source })
    }

    /// Write document content, creating missing parent directories
    pub fn write_document(&self, relative: &Path, content: &str) -> Result<()> {
        let path = self.root.join(relative);

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                tracing::debug!(dir = %parent.display(), "creating directory");
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&path, content).map_err(HelptreeError::Io)
    }

    /// Replace document content using a best-effort atomic replace:
    /// write to a temp file in the same directory, then rename into place.
    /// The temp file takes over the permissions of the document it replaces
    /// and is removed again if any step fails.
    ///
    /// On Windows, `rename` does not overwrite existing files, so we remove the destination first.
    pub fn replace_document_atomic(&self, relative: &Path, content: &[u8]) -> Result<()> {
        let path = self.root.join(relative);

        let tmp_name = format!(
            "{}.helptree-tmp-{}",
            path.file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("document"),
            std::process::id()
        );
        let tmp_path = path.with_file_name(tmp_name);

        if let Err(e) = Self::swap_in(&tmp_path, &path, content) {
            if tmp_path.exists() {
                if let Err(cleanup) = fs::remove_file(&tmp_path) {
                    tracing::warn!(tmp = %tmp_path.display(), "could not remove temp file: {}", cleanup);
                }
            }
            return Err(e.into());
        }
        Ok(())
    }

    fn swap_in(tmp_path: &Path, path: &Path, content: &[u8]) -> std::io::Result<()> {
        fs::write(tmp_path, content)?;

        if let Ok(metadata) = fs::metadata(path) {
            fs::set_permissions(tmp_path, metadata.permissions())?;
        }

        #[cfg(windows)]
        {
            if path.exists() {
                fs::remove_file(path)?;
            }
        }

        fs::rename(tmp_path, path)
    }
}
