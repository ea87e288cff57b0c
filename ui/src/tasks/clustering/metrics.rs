use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::payload::scalar_metric;
use crate::results::MetricCard;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClusteringMetrics {
    pub silhouette_score: Option<f64>,
}

impl ClusteringMetrics {
    pub fn from_metrics(metrics: &Map<String, Value>) -> Self {
        Self {
            silhouette_score: scalar_metric(metrics, "silhouette_score"),
        }
    }

    pub fn cards(&self) -> Vec<MetricCard> {
        MetricCard::collect(&[("Average Silhouette Score", self.silhouette_score)])
    }
}
