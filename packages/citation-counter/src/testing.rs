//! Testing utilities including fake collaborators.
//!
//! These are useful for testing hosts that embed the counter without
//! touching a real vault or UI.

use async_trait::async_trait;
use std::collections::HashSet;
use std::io;
use std::sync::{Arc, RwLock};

use crate::error::{CounterError, Result};
use crate::traits::{
    notifier::{Notifier, Severity},
    store::{DocumentSource, ReportSink},
};
use crate::types::document::DocumentRef;

/// Notifier that records every message.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    notices: Arc<RwLock<Vec<(Severity, String)>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages received so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.notices
            .read()
            .unwrap()
            .iter()
            .map(|(_, message)| message.clone())
            .collect()
    }

    /// The most recent notice.
    pub fn last(&self) -> Option<(Severity, String)> {
        self.notices.read().unwrap().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        self.notices
            .write()
            .unwrap()
            .push((severity, message.to_string()));
    }
}

/// Store wrapper that injects I/O failures.
///
/// Reads of selected paths fail, and writes fail when enabled; everything
/// else is delegated to the wrapped store.
pub struct FailingStore<S> {
    inner: S,
    failing_reads: HashSet<String>,
    fail_writes: bool,
}

impl<S> FailingStore<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            failing_reads: HashSet::new(),
            fail_writes: false,
        }
    }

    /// Make reads of `path` fail.
    pub fn fail_read(mut self, path: impl Into<String>) -> Self {
        self.failing_reads.insert(path.into());
        self
    }

    /// Make every report write fail.
    pub fn fail_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

#[async_trait]
impl<S: DocumentSource> DocumentSource for FailingStore<S> {
    async fn list_documents(&self, root_prefix: &str) -> Result<Vec<DocumentRef>> {
        self.inner.list_documents(root_prefix).await
    }

    async fn read_document(&self, path: &str) -> Result<String> {
        if self.failing_reads.contains(path) {
            return Err(CounterError::read(
                path,
                io::Error::new(io::ErrorKind::PermissionDenied, "injected read failure"),
            ));
        }
        self.inner.read_document(path).await
    }
}

#[async_trait]
impl<S: ReportSink> ReportSink for FailingStore<S> {
    async fn write_report(&self, file_name: &str, content: &str) -> Result<()> {
        if self.fail_writes {
            return Err(CounterError::write(
                file_name,
                io::Error::new(io::ErrorKind::Other, "injected write failure"),
            ));
        }
        self.inner.write_report(file_name, content).await
    }
}

/// Markdown note with a `## <heading>` section holding `items` as bullets.
pub fn note_with_section(heading: &str, items: &[&str]) -> String {
    let mut note = String::from("# Notes\n\nSome prose.\n\n");
    note.push_str(&format!("## {}\n", heading));
    for item in items {
        note.push_str(&format!("- {}\n", item));
    }
    note.push_str("\n## Next steps\n- unrelated bullet\n");
    note
}
