//! Filesystem storage - a vault directory on disk.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::error::{CounterError, Result};
use crate::traits::store::{root_dir_prefix, DocumentSource, ReportSink};
use crate::types::document::{is_markdown, DocumentRef};

/// A vault rooted at a directory.
///
/// Document paths are relative to the vault and `/`-separated, e.g.
/// `Papers/attention.md`. Hidden entries (`.obsidian`, `.trash`, ...) are
/// not enumerated. Reports go to the vault root unless a report directory
/// is set.
#[derive(Debug, Clone)]
pub struct FsStore {
    vault: PathBuf,
    report_dir: Option<PathBuf>,
}

impl FsStore {
    /// Create a store for the vault at `vault`.
    pub fn new(vault: impl Into<PathBuf>) -> Self {
        Self {
            vault: vault.into(),
            report_dir: None,
        }
    }

    /// Write reports into `dir` (relative paths are taken from the vault).
    pub fn with_report_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.report_dir = Some(dir.into());
        self
    }

    /// Absolute path of a store-relative document path.
    pub fn resolve(&self, path: &str) -> PathBuf {
        path.split('/')
            .filter(|part| !part.is_empty())
            .fold(self.vault.clone(), |acc, part| acc.join(part))
    }

    fn report_path(&self, file_name: &str) -> PathBuf {
        match &self.report_dir {
            Some(dir) => self.vault.join(dir).join(file_name),
            None => self.vault.join(file_name),
        }
    }
}

#[async_trait]
impl DocumentSource for FsStore {
    async fn list_documents(&self, root_prefix: &str) -> Result<Vec<DocumentRef>> {
        let prefix = root_dir_prefix(root_prefix).unwrap_or_default();
        let root = self.resolve(&prefix);

        let is_dir = tokio::fs::metadata(&root)
            .await
            .map(|meta| meta.is_dir())
            .unwrap_or(false);
        if !is_dir {
            return Err(CounterError::RootNotFound {
                root: root_prefix.to_string(),
            });
        }

        let vault = self.vault.clone();
        let docs = tokio::task::spawn_blocking(move || walk_markdown(&vault, &root))
            .await
            .map_err(|e| CounterError::Storage(Box::new(e)))??;

        debug!(root = %root_prefix, count = docs.len(), "listed vault documents");
        Ok(docs)
    }

    async fn read_document(&self, path: &str) -> Result<String> {
        tokio::fs::read_to_string(self.resolve(path))
            .await
            .map_err(|e| CounterError::read(path, e))
    }
}

#[async_trait]
impl ReportSink for FsStore {
    async fn write_report(&self, file_name: &str, content: &str) -> Result<()> {
        let path = self.report_path(file_name);

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| CounterError::write(file_name, e))?;
        }

        // tokio::fs::write truncates an existing file
        tokio::fs::write(&path, content)
            .await
            .map_err(|e| CounterError::write(file_name, e))
    }
}

/// Markdown files under `root`, as vault-relative `/`-separated paths.
fn walk_markdown(vault: &Path, root: &Path) -> Result<Vec<DocumentRef>> {
    let mut docs = Vec::new();

    for entry in WalkDir::new(root).into_iter().filter_entry(|e| !is_hidden(e)) {
        let entry = entry.map_err(|e| CounterError::Storage(Box::new(e)))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let rel_path = vault_relative(vault, entry.path());
        if is_markdown(&rel_path) {
            docs.push(DocumentRef::from_path(rel_path));
        }
    }

    Ok(docs)
}

// The walk root itself is never skipped, even inside a dot-directory.
fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}

fn vault_relative(vault: &Path, path: &Path) -> String {
    path.strip_prefix(vault)
        .unwrap_or(path)
        .components()
        .map(|part| part.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_joins_segments() {
        let store = FsStore::new("/vault");
        assert_eq!(
            store.resolve("Papers/deep/a.md"),
            PathBuf::from("/vault").join("Papers").join("deep").join("a.md")
        );
        assert_eq!(store.resolve(""), PathBuf::from("/vault"));
    }

    #[test]
    fn test_vault_relative_uses_forward_slashes() {
        let vault = PathBuf::from("/vault");
        let path = vault.join("Papers").join("deep").join("a.md");
        assert_eq!(vault_relative(&vault, &path), "Papers/deep/a.md");
    }

    #[test]
    fn test_walk_skips_hidden_below_root_only() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join(".vault").join("Papers");
        std::fs::create_dir_all(root.join(".trash")).unwrap();
        std::fs::write(root.join("a.md"), "- x").unwrap();
        std::fs::write(root.join(".trash").join("b.md"), "- y").unwrap();

        let vault = dir.path().join(".vault");
        let docs = walk_markdown(&vault, &root).unwrap();

        assert_eq!(docs, vec![DocumentRef::from_path("Papers/a.md")]);
    }

    #[test]
    fn test_report_path_honours_report_dir() {
        let store = FsStore::new("/vault").with_report_dir("Reports");
        assert_eq!(
            store.report_path("r.md"),
            PathBuf::from("/vault").join("Reports").join("r.md")
        );
    }
}
