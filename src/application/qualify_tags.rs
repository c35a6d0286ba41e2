//! Tag qualification use case

use crate::domain::tags::qualify_text;
use crate::domain::{DocumentKind, QualifiedName};
use crate::error::{HelptreeError, Result};
use crate::infrastructure::DocumentTree;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct QualifyOptions {
    pub prefix: String,
    pub separator_escape: String,
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedFile {
    pub relative: PathBuf,
    pub qualified_name: QualifiedName,
    pub replacements: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifyReport {
    pub scanned_files: usize,
    pub changed_files: usize,
    pub total_replacements: usize,
    pub dry_run: bool,
    pub changes: Vec<QualifiedFile>,
}

/// Service for namespacing the tags of a converted tree in place
pub struct QualifyTagsService {
    tree: DocumentTree,
}

impl QualifyTagsService {
    pub fn new(tree: DocumentTree) -> Self {
        QualifyTagsService { tree }
    }

    /// Rewrite every candidate document under the tree
    ///
    /// Documents without candidate lines are never rewritten. Running this
    /// twice over the same tree qualifies the tags twice.
    pub fn execute(&self, options: QualifyOptions) -> Result<QualifyReport> {
        validate_prefix(&options.prefix)?;

        let documents = self.tree.list_documents(DocumentKind::Text)?;
        let mut changes = Vec::new();
        let mut total_replacements = 0usize;

        for document in &documents {
            println!("{}", document.path.display());

            let qualified_name =
                QualifiedName::from_relative_path(&document.relative, &options.separator_escape);
            let content = self.tree.read_document(&document.relative)?;

            let result = qualify_text(&content, &options.prefix, &qualified_name);
            if result.content == content {
                tracing::debug!(file = %document.relative.display(), "no candidate lines");
                continue;
            }

            if !options.dry_run {
                self.tree
                    .replace_document_atomic(&document.relative, &result.content)?;
            }

            tracing::debug!(
                file = %document.relative.display(),
                name = %qualified_name,
                replacements = result.replacements,
                "qualified tags"
            );

            total_replacements += result.replacements;
            changes.push(QualifiedFile {
                relative: document.relative.clone(),
                qualified_name,
                replacements: result.replacements,
            });
        }

        Ok(QualifyReport {
            scanned_files: documents.len(),
            changed_files: changes.len(),
            total_replacements,
            dry_run: options.dry_run,
            changes,
        })
    }
}

/// A prefix containing `*` or whitespace would yield markers no guard
/// recognises.
fn validate_prefix(prefix: &str) -> Result<()> {
    if prefix.contains('*') || prefix.chars().any(char::is_whitespace) {
        return Err(HelptreeError::Config(format!(
            "Invalid prefix: {:?}",
            prefix
        )));
    }
    Ok(())
}
