//! Counting pipeline - the core of the library.
//!
//! The pipeline runs:
//! - Extraction (bullets or citations, optionally section-scoped)
//! - Aggregation into a deduplicated frequency table
//! - Report rendering (ranked list + statistics)
//! - Run orchestration (list → read → extract → merge → render → write)

pub mod aggregate;
pub mod extract;
pub mod report;
pub mod run;

pub use aggregate::{aggregate, merge, MergeStats};
pub use extract::{
    bullet_text, extract, extract_with_diagnostics, parse_citation, section_slice, ExtractOutcome,
};
pub use report::{compute_stats, display_text, rank, render};
pub use run::{
    analyze, failure_message, report_file_name, run, run_and_notify, Analysis, RunOutcome,
};
