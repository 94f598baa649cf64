//! Observability hooks around the public resolver operations.
//!
//! The resolver reports completed operations to a [`ResolutionObserver`].
//! Store failures are returned to the caller and are not reported here.

use std::time::Duration;

use namaste_types::GroupedResult;

/// Receives a notification after each resolver operation completes.
///
/// All methods default to doing nothing.
pub trait ResolutionObserver: Send + Sync {
    /// A code lookup finished. `search_key` is the key actually searched,
    /// which differs from `input` when a local code redirected to its TM2 code.
    fn code_resolved(&self, _input: &str, _search_key: &str, _resolved: usize, _elapsed: Duration) {}

    /// A symptom search finished.
    fn symptoms_matched(&self, _query: &str, _matched: usize, _elapsed: Duration) {}

    /// A grouped symptom search finished.
    fn symptoms_grouped(&self, _symptoms: &str, _outcome: &GroupedResult, _elapsed: Duration) {}
}

/// Observer that discards every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ResolutionObserver for NoopObserver {}

/// Observer that emits `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ResolutionObserver for TracingObserver {
    fn code_resolved(&self, input: &str, search_key: &str, resolved: usize, elapsed: Duration) {
        tracing::debug!(
            input,
            search_key,
            resolved,
            elapsed_us = elapsed.as_micros() as u64,
            "code resolved"
        );
    }

    fn symptoms_matched(&self, query: &str, matched: usize, elapsed: Duration) {
        tracing::debug!(
            query,
            matched,
            elapsed_us = elapsed.as_micros() as u64,
            "symptoms matched"
        );
    }

    fn symptoms_grouped(&self, symptoms: &str, outcome: &GroupedResult, elapsed: Duration) {
        let elapsed_us = elapsed.as_micros() as u64;
        match outcome {
            GroupedResult::TooManyGroups(count) => tracing::info!(
                symptoms,
                groups = count,
                elapsed_us,
                "grouped search exceeded group limit"
            ),
            other => tracing::debug!(
                symptoms,
                outcome = other.kind(),
                groups = other.groups().map_or(0, <[_]>::len),
                elapsed_us,
                "symptoms grouped"
            ),
        }
    }
}
