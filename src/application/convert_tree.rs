//! Tree conversion use case
//!
//! Mirrors a tree of HTML sources into a tree of help text documents, one
//! converter call per source file.

use crate::domain::DocumentKind;
use crate::error::Result;
use crate::infrastructure::{DocumentTree, HtmlConverter};
use std::path::PathBuf;

/// Options for a conversion run
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub source: PathBuf,
    pub target: PathBuf,
    pub dry_run: bool,
}

/// One source document and where its conversion lands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedFile {
    pub source: PathBuf,
    pub destination: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertReport {
    pub converted: Vec<ConvertedFile>,
    pub dry_run: bool,
}

/// Service for converting document trees
pub struct ConvertTreeService<C: HtmlConverter> {
    converter: C,
}

impl<C: HtmlConverter> ConvertTreeService<C> {
    pub fn new(converter: C) -> Self {
        ConvertTreeService { converter }
    }

    /// Execute the conversion
    ///
    /// Prints `<source> -> <destination>` for each document. The first
    /// converter failure aborts the run; documents converted before it
    /// keep their output and the failing one gets none.
    pub fn execute(&self, options: ConvertOptions) -> Result<ConvertReport> {
        let source_tree = DocumentTree::open(&options.source)?;
        let target_tree = DocumentTree::new(options.target.clone());

        let sources = source_tree.list_documents(DocumentKind::Source)?;
        let mut converted = Vec::with_capacity(sources.len());

        for entry in &sources {
            let relative = entry.relative.with_extension(DocumentKind::TEXT_EXTENSION);
            let destination = target_tree.root().join(&relative);

            println!("{} -> {}", entry.path.display(), destination.display());

            if !options.dry_run {
                let text = self.converter.convert(&entry.path)?;
                target_tree.write_document(&relative, &text)?;
            }

            converted.push(ConvertedFile {
                source: entry.path.clone(),
                destination,
            });
        }

        tracing::info!(
            count = converted.len(),
            dry_run = options.dry_run,
            "conversion finished"
        );

        Ok(ConvertReport {
            converted,
            dry_run: options.dry_run,
        })
    }
}
