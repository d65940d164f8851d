//! Storage traits for documents and reports.
//!
//! The host's storage is split into two focused traits:
//! - `DocumentSource`: enumerate and read markdown notes
//! - `ReportSink`: persist the rendered report
//! - `DocumentStore`: composite trait combining both

use async_trait::async_trait;

use crate::error::Result;
use crate::types::document::{Document, DocumentRef};

/// Read side of the host's storage.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// List markdown documents whose path starts with `root_prefix`.
    ///
    /// Fails with `CounterError::RootNotFound` when the root folder does
    /// not exist. An existing but empty root yields an empty list.
    async fn list_documents(&self, root_prefix: &str) -> Result<Vec<DocumentRef>>;

    /// Read a document's full text.
    async fn read_document(&self, path: &str) -> Result<String>;

    /// Read a listed document into a [`Document`].
    async fn load(&self, doc: &DocumentRef) -> Result<Document> {
        let content = self.read_document(&doc.path).await?;
        Ok(Document::new(doc.identifier.clone(), content))
    }
}

/// Write side of the host's storage.
#[async_trait]
pub trait ReportSink: Send + Sync {
    /// Write a report, creating the file or overwriting an existing one.
    async fn write_report(&self, file_name: &str, content: &str) -> Result<()>;
}

/// Composite storage trait used by a run.
pub trait DocumentStore: DocumentSource + ReportSink {}

// Blanket implementation: anything that can both read and write is a DocumentStore
impl<T: DocumentSource + ReportSink> DocumentStore for T {}

/// Directory prefix for a root, always ending in `/`.
///
/// `"Papers"` and `"Papers/"` give `Some("Papers/")`. A blank root or `"/"`
/// means the whole store and gives `None`.
pub fn root_dir_prefix(root_prefix: &str) -> Option<String> {
    let folder = root_prefix.trim().trim_matches('/');
    if folder.is_empty() {
        None
    } else {
        Some(format!("{}/", folder))
    }
}

/// Sort listed documents into processing order: by identifier, then path.
pub fn sort_for_processing(docs: &mut [DocumentRef]) {
    docs.sort_by(|a, b| {
        a.identifier
            .cmp(&b.identifier)
            .then_with(|| a.path.cmp(&b.path))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_dir_prefix() {
        assert_eq!(root_dir_prefix("Papers/").as_deref(), Some("Papers/"));
        assert_eq!(root_dir_prefix("Papers").as_deref(), Some("Papers/"));
        assert_eq!(root_dir_prefix("/Notes/Papers/").as_deref(), Some("Notes/Papers/"));
        assert_eq!(root_dir_prefix("/"), None);
        assert_eq!(root_dir_prefix(""), None);
    }

    #[test]
    fn test_sort_for_processing_orders_by_identifier_then_path() {
        let mut docs = vec![
            DocumentRef::from_path("Papers/z/b.md"),
            DocumentRef::from_path("Papers/a/b.md"),
            DocumentRef::from_path("Papers/a.md"),
        ];
        sort_for_processing(&mut docs);

        let paths: Vec<_> = docs.iter().map(|d| d.path.as_str()).collect();
        assert_eq!(paths, vec!["Papers/a.md", "Papers/a/b.md", "Papers/z/b.md"]);
    }
}
