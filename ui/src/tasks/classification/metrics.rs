//! Scalar metrics reported for classification runs.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::payload::scalar_metric;
use crate::results::MetricCard;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassificationMetrics {
    pub accuracy: Option<f64>,
    pub precision: Option<f64>,
    pub recall: Option<f64>,
    pub f1_score: Option<f64>,
}

impl ClassificationMetrics {
    /// Each metric is read on its own; a missing or malformed one leaves the
    /// others untouched.
    pub fn from_metrics(metrics: &Map<String, Value>) -> Self {
        Self {
            accuracy: scalar_metric(metrics, "accuracy"),
            precision: scalar_metric(metrics, "precision"),
            recall: scalar_metric(metrics, "recall"),
            f1_score: scalar_metric(metrics, "f1_score"),
        }
    }

    pub fn cards(&self) -> Vec<MetricCard> {
        MetricCard::collect(&[
            ("Accuracy", self.accuracy),
            ("Precision", self.precision),
            ("Recall", self.recall),
            ("F1-Score", self.f1_score),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_metric_does_not_hide_the_rest() {
        let metrics = json!({"accuracy": 0.9, "recall": "?", "f1_score": 0.85});
        let parsed = ClassificationMetrics::from_metrics(metrics.as_object().unwrap());
        assert_eq!(parsed.accuracy, Some(0.9));
        assert_eq!(parsed.precision, None);
        assert_eq!(parsed.recall, None);

        let labels: Vec<&str> = parsed.cards().iter().map(|c| c.label).collect();
        assert_eq!(labels, vec!["Accuracy", "F1-Score"]);
    }
}
