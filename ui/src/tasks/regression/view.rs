use dioxus::prelude::*;

use super::builder::RegressionReport;
use crate::results::{ChartCanvas, MetricCards};

#[component]
pub fn RegressionView(report: RegressionReport) -> Element {
    rsx! {
        MetricCards { cards: report.metrics.cards() }
        div { class: "results-charts__grid",
            ChartCanvas { id: "chart-actual-vs-predicted", spec: report.actual_vs_predicted.clone() }
            if let Some(residuals) = report.residuals.clone() {
                ChartCanvas { id: "chart-residuals", spec: residuals }
            }
        }
    }
}
