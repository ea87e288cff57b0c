use dioxus::prelude::*;

use super::outcome::{Diagnostic, RenderOutcome, TaskReport};
use crate::tasks::{
    classification::ClassificationView, clustering::ClusteringView, regression::RegressionView,
};

#[component]
pub fn ResultsPanel(outcome: RenderOutcome) -> Element {
    let body = match &outcome {
        RenderOutcome::Waiting => rsx! {
            p { class: "results-card__placeholder", {crate::t!("results-waiting")} }
        },
        RenderOutcome::Diagnostic(diagnostic) => render_diagnostic(diagnostic),
        RenderOutcome::Ready { algorithm, report } => render_report(algorithm.as_deref(), report),
    };

    rsx! {
        section { class: "results-card results-detail", {body} }
    }
}

fn render_diagnostic(diagnostic: &Diagnostic) -> Element {
    rsx! {
        div { class: "results-detail__diagnostic", role: "alert",
            h3 { "{diagnostic.headline()}" }
            p { class: "results-card__meta results-card__meta--error", "{diagnostic.message()}" }
        }
    }
}

fn render_report(algorithm: Option<&str>, report: &TaskReport) -> Element {
    let heading = format!(
        "{} Results ({})",
        report.task().label(),
        algorithm.unwrap_or("N/A")
    );

    let view = match report {
        TaskReport::Classification(report) => rsx! {
            ClassificationView { report: report.clone() }
        },
        TaskReport::Regression(report) => rsx! {
            RegressionView { report: report.clone() }
        },
        TaskReport::Clustering(report) => rsx! {
            ClusteringView { report: report.clone() }
        },
    };

    rsx! {
        div { class: "results-card__header",
            h2 { "{heading}" }
        }
        {view}
        if !report.notes().is_empty() {
            ul { class: "results-detail__notes",
                for note in report.notes().iter() {
                    li { class: "results-card__meta", "{note}" }
                }
            }
        }
    }
}
