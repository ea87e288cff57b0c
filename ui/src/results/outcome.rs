//! What the results panel shows for one payload.

use thiserror::Error;

use super::chart::ChartSpec;
use crate::core::{issue::PayloadIssue, payload::TaskKind};
use crate::tasks::{
    classification::ClassificationReport, clustering::ClusteringReport,
    regression::RegressionReport,
};

/// An optional input that was present but could not be used.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FallbackNote {
    #[error(
        "class_labels has {provided} entries but {expected} distinct classes were found; showing raw class values"
    )]
    ClassLabelsIgnored { provided: usize, expected: usize },
    #[error("residual plot omitted: {0}")]
    ResidualsOmitted(PayloadIssue),
}

#[derive(Debug, Clone, PartialEq)]
pub enum TaskReport {
    Classification(ClassificationReport),
    Regression(RegressionReport),
    Clustering(ClusteringReport),
}

impl TaskReport {
    pub fn task(&self) -> TaskKind {
        match self {
            Self::Classification(_) => TaskKind::Classification,
            Self::Regression(_) => TaskKind::Regression,
            Self::Clustering(_) => TaskKind::Clustering,
        }
    }

    pub fn notes(&self) -> &[FallbackNote] {
        match self {
            Self::Classification(report) => &report.notes,
            Self::Regression(report) => &report.notes,
            Self::Clustering(_) => &[],
        }
    }

    /// Every chart the report draws, in display order.
    pub fn charts(&self) -> Vec<&ChartSpec> {
        match self {
            Self::Classification(report) => vec![&report.distribution],
            Self::Regression(report) => {
                let mut charts = vec![&report.actual_vs_predicted];
                charts.extend(report.residuals.as_ref());
                charts
            }
            Self::Clustering(report) => vec![&report.scatter],
        }
    }
}

/// A payload that could not be charted.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub task: Option<TaskKind>,
    pub issue: PayloadIssue,
}

impl Diagnostic {
    pub fn headline(&self) -> String {
        match self.task {
            Some(task) => format!("{} results received, but they can't be charted.", task.label()),
            None => "Cannot display charts.".to_string(),
        }
    }

    pub fn message(&self) -> String {
        self.issue.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum RenderOutcome {
    #[default]
    Waiting,
    Ready {
        algorithm: Option<String>,
        report: TaskReport,
    },
    Diagnostic(Diagnostic),
}

impl RenderOutcome {
    pub fn is_waiting(&self) -> bool {
        matches!(self, Self::Waiting)
    }

    pub fn report(&self) -> Option<&TaskReport> {
        match self {
            Self::Ready { report, .. } => Some(report),
            _ => None,
        }
    }

    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            Self::Diagnostic(diagnostic) => Some(diagnostic),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headline_names_the_task_when_known() {
        let issue = PayloadIssue::MissingField { field: "pca" };
        let known = Diagnostic {
            task: Some(TaskKind::Clustering),
            issue: issue.clone(),
        };
        assert_eq!(known.headline(), "Clustering results received, but they can't be charted.");
        assert_eq!(known.message(), "Required field `pca` is missing.");

        let unknown = Diagnostic { task: None, issue };
        assert_eq!(unknown.headline(), "Cannot display charts.");
    }

    #[test]
    fn notes_render_their_reason() {
        let note = FallbackNote::ClassLabelsIgnored {
            provided: 3,
            expected: 2,
        };
        assert!(note.to_string().starts_with("class_labels has 3 entries"));
        let residuals = FallbackNote::ResidualsOmitted(PayloadIssue::MissingField { field: "x" });
        assert!(residuals.to_string().starts_with("residual plot omitted: "));
    }
}
