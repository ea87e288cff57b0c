//! Routes a result payload to the builder for its task.
//!
//! `dispatch` is pure: the same payload and palette always produce the same
//! [`RenderOutcome`].

use serde_json::Value;

use super::outcome::{Diagnostic, RenderOutcome, TaskReport};
use crate::core::{
    issue::PayloadIssue,
    palette::Palette,
    payload::{RawResult, TaskKind},
};
use crate::tasks::{classification, clustering, regression};

/// Fields reported as absent when the task is not recognized, in this order.
pub const EXPECTED_PLOT_FIELDS: [&str; 4] = ["y_test", "predictions", "pca", "labels"];

pub fn dispatch(payload: Option<&Value>, palette: &Palette) -> RenderOutcome {
    let Some(payload) = payload else {
        return RenderOutcome::Waiting;
    };
    let raw = RawResult::new(payload);
    let Some(declared) = raw.task() else {
        return RenderOutcome::Waiting;
    };

    let Some(task) = declared.as_str().and_then(TaskKind::parse) else {
        return RenderOutcome::Diagnostic(Diagnostic {
            task: None,
            issue: unrecognized(&raw, declared),
        });
    };

    let built = match task {
        TaskKind::Classification => {
            classification::run(&raw, palette).map(TaskReport::Classification)
        }
        TaskKind::Regression => regression::run(&raw, palette).map(TaskReport::Regression),
        TaskKind::Clustering => clustering::run(&raw, palette).map(TaskReport::Clustering),
    };

    match built {
        Ok(report) => RenderOutcome::Ready {
            algorithm: raw.algorithm().map(str::to_string),
            report,
        },
        Err(issue) => RenderOutcome::Diagnostic(Diagnostic {
            task: Some(task),
            issue,
        }),
    }
}

fn unrecognized(raw: &RawResult<'_>, declared: &Value) -> PayloadIssue {
    let task = match declared {
        Value::String(name) => name.clone(),
        other => other.to_string(),
    };
    let missing = EXPECTED_PLOT_FIELDS
        .iter()
        .copied()
        .filter(|field| !raw.has_plot_field(field))
        .collect();
    PayloadIssue::UnrecognizedTask { task, missing }
}
