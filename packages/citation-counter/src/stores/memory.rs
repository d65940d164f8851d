//! In-memory storage implementation for testing and development.

use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::io;
use std::sync::RwLock;

use crate::error::{CounterError, Result};
use crate::traits::store::{root_dir_prefix, DocumentSource, ReportSink};
use crate::types::document::{is_markdown, DocumentRef};

/// In-memory vault holding documents, folders and written reports.
///
/// Adding a document also registers every folder on its path, so a root
/// exists as soon as something lives under it. Use [`MemoryStore::with_folder`]
/// for an existing but empty root.
pub struct MemoryStore {
    documents: RwLock<BTreeMap<String, String>>,
    folders: RwLock<BTreeSet<String>>,
    reports: RwLock<HashMap<String, String>>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(BTreeMap::new()),
            folders: RwLock::new(BTreeSet::new()),
            reports: RwLock::new(HashMap::new()),
        }
    }

    /// Add a document at a `/`-separated path.
    pub fn add_document(&self, path: impl Into<String>, content: impl Into<String>) {
        let path = path.into();
        {
            let mut folders = self.folders.write().unwrap();
            let mut parts: Vec<&str> = path.split('/').collect();
            parts.pop();
            for depth in 1..=parts.len() {
                folders.insert(parts[..depth].join("/"));
            }
        }
        self.documents.write().unwrap().insert(path, content.into());
    }

    /// Register an (empty) folder.
    pub fn add_folder(&self, folder: impl Into<String>) {
        let folder = folder.into();
        self.folders
            .write()
            .unwrap()
            .insert(folder.trim_matches('/').to_string());
    }

    /// Builder form of [`add_document`](Self::add_document).
    pub fn with_document(self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.add_document(path, content);
        self
    }

    /// Builder form of [`add_folder`](Self::add_folder).
    pub fn with_folder(self, folder: impl Into<String>) -> Self {
        self.add_folder(folder);
        self
    }

    /// Content of a written report.
    pub fn report(&self, file_name: &str) -> Option<String> {
        self.reports.read().unwrap().get(file_name).cloned()
    }

    /// Get the number of written reports.
    pub fn report_count(&self) -> usize {
        self.reports.read().unwrap().len()
    }
}

#[async_trait]
impl DocumentSource for MemoryStore {
    async fn list_documents(&self, root_prefix: &str) -> Result<Vec<DocumentRef>> {
        let prefix = root_dir_prefix(root_prefix);

        if let Some(prefix) = &prefix {
            let folder = prefix.trim_end_matches('/');
            if !self.folders.read().unwrap().contains(folder) {
                return Err(CounterError::RootNotFound {
                    root: root_prefix.to_string(),
                });
            }
        }

        Ok(self
            .documents
            .read()
            .unwrap()
            .keys()
            .filter(|path| prefix.as_deref().map_or(true, |p| path.starts_with(p)))
            .filter(|path| is_markdown(path))
            .map(|path| DocumentRef::from_path(path.as_str()))
            .collect())
    }

    async fn read_document(&self, path: &str) -> Result<String> {
        self.documents
            .read()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| {
                let missing = io::Error::new(io::ErrorKind::NotFound, "no such document");
                CounterError::read(path, missing)
            })
    }
}

#[async_trait]
impl ReportSink for MemoryStore {
    async fn write_report(&self, file_name: &str, content: &str) -> Result<()> {
        self.reports
            .write()
            .unwrap()
            .insert(file_name.to_string(), content.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_filters_by_root_and_extension() {
        let store = MemoryStore::new()
            .with_document("Papers/a.md", "")
            .with_document("Papers/deep/b.md", "")
            .with_document("Papers/c.pdf", "")
            .with_document("Papers2/d.md", "")
            .with_document("Notes/e.md", "");

        let docs = store.list_documents("Papers/").await.unwrap();
        let paths: Vec<_> = docs.iter().map(|d| d.path.as_str()).collect();

        assert_eq!(paths, vec!["Papers/a.md", "Papers/deep/b.md"]);
        assert_eq!(docs[1].identifier, "b");
    }

    #[tokio::test]
    async fn test_list_missing_root() {
        let store = MemoryStore::new().with_document("Notes/a.md", "");
        let err = store.list_documents("Papers/").await.unwrap_err();
        assert!(matches!(err, CounterError::RootNotFound { root } if root == "Papers/"));
    }

    #[tokio::test]
    async fn test_list_empty_folder() {
        let store = MemoryStore::new().with_folder("Papers/");
        assert!(store.list_documents("Papers").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_nested_root_registered_by_document() {
        let store = MemoryStore::new().with_document("Vault/Papers/a.md", "- x");
        assert_eq!(store.list_documents("Vault/Papers/").await.unwrap().len(), 1);
        assert_eq!(store.list_documents("Vault").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_read_missing_document() {
        let store = MemoryStore::new();
        let err = store.read_document("Papers/none.md").await.unwrap_err();
        assert!(matches!(err, CounterError::DocumentRead { path, .. } if path == "Papers/none.md"));
    }

    #[tokio::test]
    async fn test_write_report_overwrites() {
        let store = MemoryStore::new();
        store.write_report("r.md", "first").await.unwrap();
        store.write_report("r.md", "second").await.unwrap();

        assert_eq!(store.report("r.md").as_deref(), Some("second"));
        assert_eq!(store.report_count(), 1);
    }
}
