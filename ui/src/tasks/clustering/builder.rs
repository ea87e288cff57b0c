//! Clustering payload validation and PCA scatter building.
//!
//! Colors are assigned by position in the sorted list of distinct labels, so
//! the same set of labels always gets the same colors no matter how the
//! points are ordered.

use serde_json::Value;

use super::metrics::ClusteringMetrics;
use crate::core::{
    format::format_count,
    issue::PayloadIssue,
    palette::Palette,
    payload::{json_kind, numeric_series, RawResult},
};
use crate::results::chart::{ChartSpec, DataPoint, Dataset, SeriesStyle};

#[derive(Debug, Clone, PartialEq)]
pub struct ClusteringInput {
    /// PCA coordinates, one `(x, y)` per sample.
    pub points: Vec<(f64, f64)>,
    pub labels: Vec<f64>,
    pub metrics: ClusteringMetrics,
}

impl ClusteringInput {
    pub fn from_payload(raw: &RawResult<'_>) -> Result<Self, PayloadIssue> {
        let pca = raw.required_array("pca")?;
        let labels = raw.required_array("labels")?;
        if pca.len() != labels.len() {
            return Err(PayloadIssue::LengthMismatch {
                left: "pca",
                left_len: pca.len(),
                right: "labels",
                right_len: labels.len(),
            });
        }

        let points = pca
            .iter()
            .enumerate()
            .map(|(index, value)| read_pair(index, value))
            .collect::<Result<Vec<_>, _>>()?;
        let labels = numeric_series("labels", labels)?;

        Ok(Self {
            points,
            labels,
            metrics: ClusteringMetrics::from_metrics(raw.metrics()),
        })
    }
}

fn read_pair(index: usize, value: &Value) -> Result<(f64, f64), PayloadIssue> {
    let pair = value.as_array().ok_or(PayloadIssue::WrongElementType {
        field: "pca",
        index,
        expected: "a pair of numbers",
        found: json_kind(value),
    })?;
    if pair.len() != 2 {
        return Err(PayloadIssue::NotAPair {
            field: "pca",
            index,
            len: pair.len(),
        });
    }
    match (pair[0].as_f64(), pair[1].as_f64()) {
        (Some(x), Some(y)) => Ok((x, y)),
        _ => Err(PayloadIssue::WrongElementType {
            field: "pca",
            index,
            expected: "a pair of numbers",
            found: "a pair containing non-numbers",
        }),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClusterSummary {
    pub label: f64,
    pub name: String,
    pub size: usize,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClusteringReport {
    pub scatter: ChartSpec,
    pub clusters: Vec<ClusterSummary>,
    pub metrics: ClusteringMetrics,
}

pub fn run(raw: &RawResult<'_>, palette: &Palette) -> Result<ClusteringReport, PayloadIssue> {
    ClusteringInput::from_payload(raw).map(|input| build(&input, palette))
}

pub fn build(input: &ClusteringInput, palette: &Palette) -> ClusteringReport {
    let mut distinct = input.labels.clone();
    distinct.sort_by(f64::total_cmp);
    distinct.dedup();

    let mut clusters = Vec::with_capacity(distinct.len());
    let mut datasets = Vec::with_capacity(distinct.len());
    for (position, &label) in distinct.iter().enumerate() {
        let points: Vec<DataPoint> = input
            .points
            .iter()
            .zip(&input.labels)
            .filter(|(_, &assigned)| assigned == label)
            .map(|(&(x, y), _)| DataPoint::xy(x, y))
            .collect();

        let color = palette.color(position);
        let name = format!("Cluster {}", format_count(label));
        clusters.push(ClusterSummary {
            label,
            name: name.clone(),
            size: points.len(),
            color: color.to_string(),
        });
        datasets.push(Dataset::new(name, points, SeriesStyle::points(color, 5.0)));
    }

    let mut scatter = ChartSpec::scatter(
        datasets,
        "Cluster Visualization (PCA)",
        "Principal Component 1",
        "Principal Component 2",
    );
    scatter.options = scatter.options.without_grid();

    ClusteringReport {
        scatter,
        clusters,
        metrics: input.metrics.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::palette::DEFAULT_PALETTE;
    use serde_json::json;

    fn report(payload: Value) -> Result<ClusteringReport, PayloadIssue> {
        run(&RawResult::new(&payload), &DEFAULT_PALETTE)
    }

    #[test]
    fn one_series_per_label_with_distinct_colors() {
        let report = report(json!({
            "task": "clustering",
            "metrics": {"silhouette_score": 0.71},
            "plot_data": {"pca": [[0, 0], [1, 1], [5, 5]], "labels": [0, 0, 1]}
        }))
        .unwrap();

        assert_eq!(report.scatter.datasets.len(), 2);
        assert_eq!(report.clusters[0].name, "Cluster 0");
        assert_eq!(report.clusters[0].size, 2);
        assert_eq!(report.clusters[1].name, "Cluster 1");
        assert_eq!(report.clusters[1].size, 1);
        assert_ne!(report.clusters[0].color, report.clusters[1].color);
        assert_eq!(
            report.scatter.datasets[1].points,
            vec![DataPoint::xy(5.0, 5.0)]
        );
        assert!(!report.scatter.options.x_axis.grid);
        assert_eq!(report.metrics.silhouette_score, Some(0.71));
    }

    #[test]
    fn labels_sort_numerically_and_colors_ignore_point_order() {
        let forward = report(json!({
            "plot_data": {"pca": [[0, 0], [1, 0], [2, 0], [3, 0]], "labels": [10, 2, -1, 2]}
        }))
        .unwrap();
        let shuffled = report(json!({
            "plot_data": {"pca": [[3, 0], [2, 0], [0, 0], [1, 0]], "labels": [2, -1, 10, 2]}
        }))
        .unwrap();

        let names: Vec<&str> = forward.clusters.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Cluster -1", "Cluster 2", "Cluster 10"]);

        let colors = |r: &ClusteringReport| -> Vec<(String, String)> {
            r.clusters
                .iter()
                .map(|c| (c.name.clone(), c.color.clone()))
                .collect()
        };
        assert_eq!(colors(&forward), colors(&shuffled));
        assert_eq!(forward.clusters[0].color, DEFAULT_PALETTE.color(0));
    }

    #[test]
    fn every_point_lands_in_exactly_one_series() {
        let report = report(json!({
            "plot_data": {
                "pca": [[0.1, 0.2], [0.3, 0.4], [0.5, 0.6], [0.7, 0.8], [0.9, 1.0]],
                "labels": [2, 0, 1, 0, 2]
            }
        }))
        .unwrap();
        let total: usize = report.scatter.datasets.iter().map(|d| d.points.len()).sum();
        assert_eq!(total, 5);
        let sizes: Vec<usize> = report.clusters.iter().map(|c| c.size).collect();
        assert_eq!(sizes, vec![2, 1, 2]);
    }

    #[test]
    fn colors_wrap_around_the_palette() {
        let palette = Palette::new(["#000001", "#000002"]).unwrap();
        let payload = json!({
            "plot_data": {"pca": [[0, 0], [0, 1], [0, 2]], "labels": [0, 1, 2]}
        });
        let report = run(&RawResult::new(&payload), &palette).unwrap();
        let colors: Vec<&str> = report.clusters.iter().map(|c| c.color.as_str()).collect();
        assert_eq!(colors, vec!["#000001", "#000002", "#000001"]);
    }

    #[test]
    fn malformed_coordinates_are_diagnosed() {
        assert_eq!(
            report(json!({"plot_data": {"pca": [[0, 0]], "labels": [0, 1]}})).unwrap_err(),
            PayloadIssue::LengthMismatch {
                left: "pca",
                left_len: 1,
                right: "labels",
                right_len: 2
            }
        );
        assert_eq!(
            report(json!({"plot_data": {"pca": [[0, 0, 0]], "labels": [0]}})).unwrap_err(),
            PayloadIssue::NotAPair {
                field: "pca",
                index: 0,
                len: 3
            }
        );
        assert_eq!(
            report(json!({"plot_data": {"pca": [[0, "y"]], "labels": [0]}}))
                .unwrap_err()
                .fields(),
            vec!["pca"]
        );
        assert_eq!(
            report(json!({"plot_data": {"pca": [[0, 0]]}})).unwrap_err(),
            PayloadIssue::MissingField { field: "labels" }
        );
    }
}
