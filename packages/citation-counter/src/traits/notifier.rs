//! User notification trait.

use serde::{Deserialize, Serialize};

/// Whether a notice reports success or failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Error,
}

/// Fire-and-forget channel for user-visible messages.
///
/// The pipeline never waits on or inspects delivery.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn notify(&self, severity: Severity, message: &str);
}

/// Notifier that only logs through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => tracing::info!(target: "citation_counter::notice", "{}", message),
            Severity::Error => tracing::error!(target: "citation_counter::notice", "{}", message),
        }
    }
}
