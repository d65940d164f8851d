//! Citation Counter
//!
//! Tallies bullet items and citations across a folder of markdown notes and
//! writes a ranked markdown report.
//!
//! # How a run works
//!
//! 1. List the markdown documents under a root folder (default `Papers/`)
//! 2. Extract records from each one, in identifier order
//! 3. Merge them into a table keyed by bullet text or `"authors, year"`
//! 4. Render the table as a ranked report with statistics
//! 5. Write `"<title> <YYYY-MM-DD>.md"`, overwriting any earlier report
//!
//! # Usage
//!
//! ```rust,ignore
//! use citation_counter::{run_and_notify, ExtractionMode, FsStore, RunConfig, TracingNotifier};
//!
//! let store = FsStore::new("/path/to/vault");
//! let mode = ExtractionMode::from_parts("section-citations", Some("Related work"))?;
//! let outcome = run_and_notify(&store, &TracingNotifier, &RunConfig::new(mode)).await?;
//! println!("wrote {}", outcome.file_name);
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Host collaborator abstractions (DocumentStore, Notifier)
//! - [`types`] - Documents, records, aggregate table, configuration
//! - [`pipeline`] - Extraction, aggregation, reporting and run orchestration
//! - [`stores`] - Storage implementations (MemoryStore, FsStore)
//! - [`testing`] - Fake collaborators for tests

pub mod error;
pub mod pipeline;
pub mod stores;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{CounterError, Result};
pub use traits::{
    notifier::{Notifier, Severity, TracingNotifier},
    store::{DocumentSource, DocumentStore, ReportSink},
};
pub use types::{
    config::{
        ExtractionMode, ModeName, ReportConfig, RunConfig, DEFAULT_COUNT_SUFFIX,
        DEFAULT_MAX_LISTED, DEFAULT_ROOT_PREFIX,
    },
    document::{Document, DocumentRef},
    record::CandidateRecord,
    report::{ReportLabels, ReportMeta, ReportStats, ReportStyle},
    table::{AggregateEntry, AggregateTable},
};

// Re-export pipeline components
pub use pipeline::{
    aggregate, analyze, extract, extract_with_diagnostics, merge, render, report_file_name, run,
    run_and_notify, Analysis, ExtractOutcome, RunOutcome,
};

// Re-export stores
pub use stores::{FsStore, MemoryStore};

// Re-export testing utilities
pub use testing::{FailingStore, RecordingNotifier};
