//! Document types - what the store hands to the pipeline.

use serde::{Deserialize, Serialize};

/// A markdown note loaded from the document root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Short display name (file name without extension)
    pub identifier: String,

    /// Full text content
    pub content: String,
}

impl Document {
    /// Create a new document.
    pub fn new(identifier: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            content: content.into(),
        }
    }
}

/// Reference to a document that has been listed but not read yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRef {
    /// Short display name (file name without extension)
    pub identifier: String,

    /// Store-relative path, `/`-separated
    pub path: String,
}

impl DocumentRef {
    /// Create a reference whose identifier is the path's basename without extension.
    pub fn from_path(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            identifier: basename(&path).to_string(),
            path,
        }
    }
}

/// Basename of a `/`-separated path with the last extension removed.
///
/// `Papers/2021/Smith.md` -> `Smith`. Dotfiles keep their name.
pub fn basename(path: &str) -> &str {
    let file = path.rsplit('/').next().unwrap_or(path);
    match file.rfind('.') {
        Some(0) | None => file,
        Some(idx) => &file[..idx],
    }
}

/// True for paths the store should enumerate as markdown notes.
pub fn is_markdown(path: &str) -> bool {
    path.rsplit('/')
        .next()
        .and_then(|file| file.rsplit_once('.'))
        .is_some_and(|(stem, ext)| !stem.is_empty() && ext.eq_ignore_ascii_case("md"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basename_strips_folders_and_extension() {
        assert_eq!(basename("Papers/2021/Smith.md"), "Smith");
        assert_eq!(basename("Smith.v2.md"), "Smith.v2");
        assert_eq!(basename("Papers/README"), "README");
        assert_eq!(basename(".hidden"), ".hidden");
    }

    #[test]
    fn test_from_path_derives_identifier() {
        let doc = DocumentRef::from_path("Papers/attention.md");
        assert_eq!(doc.identifier, "attention");
        assert_eq!(doc.path, "Papers/attention.md");
    }

    #[test]
    fn test_is_markdown() {
        assert!(is_markdown("Papers/a.md"));
        assert!(is_markdown("Papers/a.MD"));
        assert!(!is_markdown("Papers/a.pdf"));
        assert!(!is_markdown("Papers/.md"));
        assert!(!is_markdown("Papers/md"));
    }
}
