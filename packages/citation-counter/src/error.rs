//! Typed errors for the citation counter library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// Errors that can occur during a counting run.
#[derive(Debug, Error)]
pub enum CounterError {
    /// The configured document root does not exist
    #[error("{} folder not found!", folder_name(.root))]
    RootNotFound { root: String },

    /// A document could not be read
    #[error("failed to read {path}: {source}")]
    DocumentRead {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The report could not be written
    #[error("failed to write {file_name}: {source}")]
    ReportWrite {
        file_name: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Any other storage failure surfaced by the host
    #[error("storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Unrecognized extraction mode name
    #[error(
        "unknown extraction mode: {mode} (expected all-bullets, section-bullets or section-citations)"
    )]
    InvalidMode { mode: String },

    /// A section-scoped mode was requested without a heading
    #[error("mode {mode} requires a section heading")]
    MissingSectionHeading { mode: String },
}

impl CounterError {
    /// Wrap an I/O failure that happened while reading `path`.
    pub fn read(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::DocumentRead {
            path: path.into(),
            source: Box::new(source),
        }
    }

    /// Wrap an I/O failure that happened while writing `file_name`.
    pub fn write(
        file_name: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::ReportWrite {
            file_name: file_name.into(),
            source: Box::new(source),
        }
    }
}

/// Folder name for a root prefix ("Papers/" -> "Papers").
pub fn folder_name(root: &str) -> &str {
    let trimmed = root.trim_end_matches('/');
    if trimmed.is_empty() {
        root
    } else {
        trimmed
    }
}

/// Result type alias for counter operations.
pub type Result<T> = std::result::Result<T, CounterError>;
