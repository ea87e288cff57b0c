use dioxus::prelude::*;

use super::builder::ClassificationReport;
use crate::results::{ChartCanvas, ConfusionMatrixTable, MetricCards};

#[component]
pub fn ClassificationView(report: ClassificationReport) -> Element {
    let confusion = match &report.confusion {
        Some(Ok(grid)) => rsx! { ConfusionMatrixTable { grid: grid.clone() } },
        Some(Err(issue)) => rsx! {
            p { class: "results-card__meta results-card__meta--error", "{issue}" }
        },
        None => rsx! {},
    };

    rsx! {
        MetricCards { cards: report.metrics.cards() }
        {confusion}
        ChartCanvas { id: "chart-class-distribution", spec: report.distribution.clone() }
    }
}
