//! Scalar metrics reported for regression runs.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::payload::scalar_metric;
use crate::results::MetricCard;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegressionMetrics {
    pub r2_score: Option<f64>,
    pub mae: Option<f64>,
    pub mse: Option<f64>,
}

impl RegressionMetrics {
    pub fn from_metrics(metrics: &Map<String, Value>) -> Self {
        Self {
            r2_score: scalar_metric(metrics, "r2_score"),
            mae: scalar_metric(metrics, "mae"),
            mse: scalar_metric(metrics, "mse"),
        }
    }

    pub fn cards(&self) -> Vec<MetricCard> {
        MetricCard::collect(&[
            ("R² Score", self.r2_score),
            ("MAE", self.mae),
            ("MSE", self.mse),
        ])
    }
}
