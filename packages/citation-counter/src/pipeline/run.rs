//! Run orchestration - list, read, extract, merge, render, write.
//!
//! Documents are read and the report is written one await at a time;
//! nothing runs concurrently. The report is only written once it has been
//! fully rendered, so a failed run never leaves a partial file behind.

use chrono::{NaiveDate, Utc};
use serde::Serialize;
use tracing::{info, warn};

use crate::error::{CounterError, Result};
use crate::pipeline::{aggregate, extract, report};
use crate::traits::{
    notifier::{Notifier, Severity},
    store::{sort_for_processing, DocumentStore},
};
use crate::types::{
    config::{ExtractionMode, ReportConfig, RunConfig},
    document::Document,
    report::{ReportMeta, ReportStats, ReportStyle},
    table::AggregateTable,
};

/// Rendered report plus what went into it.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub title: String,
    pub report: String,
    pub stats: ReportStats,
    pub documents_processed: usize,
}

/// Result of a complete run.
#[derive(Debug, Clone, Serialize)]
pub struct RunOutcome {
    /// File the report was written to
    pub file_name: String,

    #[serde(flatten)]
    pub analysis: Analysis,
}

/// `"<title> <YYYY-MM-DD>.md"`.
pub fn report_file_name(title: &str, date: NaiveDate) -> String {
    format!("{} {}.md", title, date.format("%Y-%m-%d"))
}

/// Extract, merge and render already-loaded documents.
///
/// Documents are processed in the order given; [`run`] sorts them by
/// identifier first.
pub fn analyze(
    documents: &[Document],
    mode: &ExtractionMode,
    report_config: &ReportConfig,
    source_description: &str,
    date: NaiveDate,
) -> Analysis {
    let mut table = AggregateTable::new();
    let mut skipped_lines = 0;

    for document in documents {
        let outcome = extract::extract_with_diagnostics(document, mode);
        skipped_lines += outcome.skipped_lines;
        aggregate::merge(&mut table, &document.identifier, outcome.records);
    }

    if skipped_lines > 0 {
        warn!(skipped_lines, "citation lines did not parse and were skipped");
    }

    let title = report_config.title_for(mode);
    let meta = ReportMeta::new(&title, source_description, date.format("%Y-%m-%d").to_string())
        .with_skipped_lines(skipped_lines);
    let style = ReportStyle::for_mode(mode, report_config);

    let entries = table.into_entries();
    let report = report::render(&entries, &meta, &style);
    let stats = ReportStats {
        skipped_lines,
        ..report::compute_stats(&entries)
    };

    Analysis {
        title,
        report,
        stats,
        documents_processed: documents.len(),
    }
}

/// Execute one run against `store` and persist the report.
pub async fn run<S>(store: &S, config: &RunConfig) -> Result<RunOutcome>
where
    S: DocumentStore,
{
    let date = config.run_date.unwrap_or_else(|| Utc::now().date_naive());

    info!(root = %config.root_prefix, mode = %config.mode, "Counting records");

    let mut refs = store.list_documents(&config.root_prefix).await?;
    sort_for_processing(&mut refs);
    info!("Found {} markdown files in {}", refs.len(), config.root_prefix);

    let mut documents = Vec::with_capacity(refs.len());
    for doc in &refs {
        documents.push(store.load(doc).await?);
    }

    let source = config.report.source_for(&config.root_prefix);
    let analysis = analyze(&documents, &config.mode, &config.report, &source, date);
    let file_name = report_file_name(&analysis.title, date);

    store.write_report(&file_name, &analysis.report).await?;

    info!(
        "Run complete: {} documents, {} unique, {} instances -> {}",
        analysis.documents_processed,
        analysis.stats.total_unique,
        analysis.stats.total_instances,
        file_name
    );

    Ok(RunOutcome {
        file_name,
        analysis,
    })
}

/// [`run`], reporting the outcome to the user through `notifier`.
///
/// Every failure becomes exactly one notification and is then returned.
pub async fn run_and_notify<S, N>(
    store: &S,
    notifier: &N,
    config: &RunConfig,
) -> Result<RunOutcome>
where
    S: DocumentStore,
    N: Notifier + ?Sized,
{
    let subject = subject_for(&config.mode);

    match run(store, config).await {
        Ok(outcome) => {
            notifier.notify(Severity::Info, &format!("{} analysis complete!", subject));
            Ok(outcome)
        }
        Err(err) => {
            warn!("{} analysis failed: {}", subject, err);
            notifier.notify(Severity::Error, &failure_message(subject, &err));
            Err(err)
        }
    }
}

/// User-facing message for a failed run.
pub fn failure_message(subject: &str, err: &CounterError) -> String {
    match err {
        CounterError::RootNotFound { .. } => err.to_string(),
        _ => format!("Error analyzing {}: {}", subject.to_lowercase(), err),
    }
}

fn subject_for(mode: &ExtractionMode) -> &'static str {
    if mode.yields_citations() {
        "Citation"
    } else {
        "Bullet item"
    }
}
