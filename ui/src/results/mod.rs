pub mod chart;
pub mod confusion;
pub mod dispatch;
pub mod metrics;

mod charts;
pub use charts::ChartCanvas;

mod outcome;
pub use outcome::{Diagnostic, FallbackNote, RenderOutcome, TaskReport};

mod panel;
pub use panel::ResultsPanel;

pub use confusion::ConfusionMatrixTable;
pub use dispatch::dispatch;
pub use metrics::{metric_entries, MetricCard, MetricCards, MetricEntry, MetricsDisplay};

use serde_json::Value;

use crate::core::palette::DEFAULT_PALETTE;

/// The latest payload received from the backend and what it renders to.
///
/// Each new payload replaces the previous state entirely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultsState {
    pub payload: Option<Value>,
    pub outcome: RenderOutcome,
}

impl ResultsState {
    pub fn ingest(payload: Value) -> Self {
        let outcome = dispatch(Some(&payload), &DEFAULT_PALETTE);
        match &outcome {
            RenderOutcome::Waiting => tracing::info!("result payload has no task yet"),
            RenderOutcome::Ready { algorithm, report } => tracing::info!(
                task = report.task().as_str(),
                algorithm = algorithm.as_deref().unwrap_or("n/a"),
                charts = report.charts().len(),
                notes = report.notes().len(),
                "result payload charted"
            ),
            RenderOutcome::Diagnostic(diagnostic) => tracing::warn!(
                task = diagnostic.task.map(|t| t.as_str()).unwrap_or("unknown"),
                issue = %diagnostic.issue,
                "result payload could not be charted"
            ),
        }
        Self {
            payload: Some(payload),
            outcome,
        }
    }

    pub fn has_result(&self) -> bool {
        self.payload.is_some()
    }

    /// Generic metric grid entries for the current payload.
    pub fn metric_entries(&self) -> Vec<MetricEntry> {
        self.payload
            .as_ref()
            .and_then(|payload| payload.get("metrics"))
            .and_then(Value::as_object)
            .map(metric_entries)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_state_is_waiting() {
        let state = ResultsState::default();
        assert!(state.outcome.is_waiting());
        assert!(!state.has_result());
        assert!(state.metric_entries().is_empty());
    }

    #[test]
    fn ingest_replaces_outcome_and_keeps_payload() {
        let payload = json!({
            "task": "clustering",
            "metrics": {"silhouette_score": 0.5},
            "plot_data": {"pca": [[0, 0]], "labels": [0]}
        });
        let state = ResultsState::ingest(payload.clone());
        assert_eq!(state.payload.as_ref(), Some(&payload));
        assert!(state.outcome.report().is_some());
        assert_eq!(state.metric_entries().len(), 1);
    }
}
