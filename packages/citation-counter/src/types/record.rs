//! Candidate records produced by extraction.

use serde::{Deserialize, Serialize};

/// One item pulled out of a document.
///
/// Bullet modes produce [`CandidateRecord::Bullet`]; the citation mode
/// produces [`CandidateRecord::Citation`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CandidateRecord {
    /// Raw trimmed bullet content
    Bullet { text: String },

    /// Parsed `authors, year, title` citation
    Citation {
        authors: String,
        year: String,
        title: String,
    },
}

impl CandidateRecord {
    /// Create a bullet record.
    pub fn bullet(text: impl Into<String>) -> Self {
        Self::Bullet { text: text.into() }
    }

    /// Create a citation record.
    pub fn citation(
        authors: impl Into<String>,
        year: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self::Citation {
            authors: authors.into(),
            year: year.into(),
            title: title.into(),
        }
    }

    /// Deduplication key.
    ///
    /// Bullets key on their trimmed text, citations on `"<authors>, <year>"`.
    /// No case or punctuation folding: `Smith` and `smith` are distinct.
    pub fn key(&self) -> String {
        match self {
            Self::Bullet { text } => text.trim().to_string(),
            Self::Citation { authors, year, .. } => format!("{}, {}", authors, year),
        }
    }

    /// Title of a citation, `None` for bullets.
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Bullet { .. } => None,
            Self::Citation { title, .. } => Some(title.as_str()),
        }
    }
}
