//! Metric presentation: headline cards for a task's known metrics and the raw
//! evaluation-metrics grid listing everything the backend sent.

use dioxus::prelude::*;
use serde_json::{Map, Value};

use crate::core::{format, payload::display_value};

/// One known scalar metric, shown with three decimals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricCard {
    pub label: &'static str,
    pub value: f64,
}

impl MetricCard {
    /// Cards for the metrics that are present, in the given order.
    pub fn collect(entries: &[(&'static str, Option<f64>)]) -> Vec<Self> {
        entries
            .iter()
            .filter_map(|&(label, value)| value.map(|value| Self { label, value }))
            .collect()
    }

    pub fn display_value(&self) -> String {
        format::format_metric(self.value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MetricValue {
    Scalar(f64),
    /// One comma-joined line per row.
    Matrix(Vec<String>),
    Unsupported,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricEntry {
    pub key: String,
    pub label: String,
    pub value: MetricValue,
}

impl MetricEntry {
    pub fn summary(&self) -> String {
        match &self.value {
            MetricValue::Scalar(value) => format::format_metric_precise(*value),
            MetricValue::Matrix(_) => crate::t!("metrics-matrix-below"),
            MetricValue::Unsupported => crate::t!("metrics-unsupported"),
        }
    }

    pub fn matrix_text(&self) -> Option<String> {
        match &self.value {
            MetricValue::Matrix(lines) => Some(lines.join("\n")),
            _ => None,
        }
    }
}

/// Every entry of the `metrics` section, in key order.
pub fn metric_entries(metrics: &Map<String, Value>) -> Vec<MetricEntry> {
    let mut entries: Vec<MetricEntry> = metrics
        .iter()
        .map(|(key, value)| MetricEntry {
            key: key.clone(),
            label: format::humanize_key(key),
            value: classify(value),
        })
        .collect();
    entries.sort_by(|a, b| a.key.cmp(&b.key));
    entries
}

fn classify(value: &Value) -> MetricValue {
    match value {
        Value::Number(n) => n
            .as_f64()
            .map(MetricValue::Scalar)
            .unwrap_or(MetricValue::Unsupported),
        Value::Array(rows) => MetricValue::Matrix(rows.iter().map(matrix_line).collect()),
        _ => MetricValue::Unsupported,
    }
}

fn matrix_line(row: &Value) -> String {
    match row {
        Value::Array(cells) => cells
            .iter()
            .map(display_value)
            .collect::<Vec<_>>()
            .join(", "),
        other => display_value(other),
    }
}

#[component]
pub fn MetricCards(cards: Vec<MetricCard>) -> Element {
    if cards.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "results-highlights",
            for card in cards.iter() {
                div { class: "results-highlight",
                    span { class: "results-highlight__label", "{card.label}" }
                    strong { class: "results-highlight__value", "{card.display_value()}" }
                }
            }
        }
    }
}

#[component]
pub fn MetricsDisplay(entries: Vec<MetricEntry>) -> Element {
    if entries.is_empty() {
        return rsx! {};
    }

    rsx! {
        section { class: "results-card results-metrics",
            div { class: "results-card__header",
                h2 { {crate::t!("metrics-heading")} }
            }
            ul { class: "results-detail__grid",
                for entry in entries.iter() {
                    li {
                        span { class: "results-detail__metric-label", "{entry.label}" }
                        span { class: "results-detail__metric-value", "{entry.summary()}" }
                        if let Some(text) = entry.matrix_text() {
                            pre { class: "results-metrics__matrix", "{text}" }
                        }
                    }
                }
            }
        }
    }
}
