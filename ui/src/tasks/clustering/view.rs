use dioxus::prelude::*;

use super::builder::ClusteringReport;
use crate::results::{ChartCanvas, MetricCards};
use crate::t;

#[component]
pub fn ClusteringView(report: ClusteringReport) -> Element {
    rsx! {
        MetricCards { cards: report.metrics.cards() }
        ChartCanvas { id: "chart-clusters", spec: report.scatter.clone(), tall: true }
        ul { class: "results-clusters",
            for cluster in report.clusters.iter() {
                li { class: "results-clusters__item",
                    span {
                        class: "results-clusters__swatch",
                        style: "background-color: {cluster.color}",
                    }
                    "{cluster.name} · "
                    {t!("cluster-size", count = cluster.size)}
                }
            }
        }
    }
}
