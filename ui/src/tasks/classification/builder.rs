//! Classification payload validation and chart building.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value;

use super::metrics::ClassificationMetrics;
use crate::core::{
    issue::PayloadIssue,
    palette::Palette,
    payload::{class_series, display_value, same_class_kind, RawResult},
};
use crate::results::{
    chart::{ChartSpec, DataPoint, Dataset, SeriesStyle},
    confusion::{self, ConfusionGrid, CONFUSION_MATRIX_LOCATIONS},
    FallbackNote,
};

/// Validated classification payload. Class values are already coerced to
/// their string keys.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationInput {
    pub y_test: Vec<String>,
    pub predictions: Vec<String>,
    pub class_labels: Option<Vec<String>>,
    /// `None` when no location holds a matrix; `Some(Err)` when one is there
    /// but unusable.
    pub confusion: Option<Result<Vec<Vec<f64>>, PayloadIssue>>,
    pub metrics: ClassificationMetrics,
}

impl ClassificationInput {
    pub fn from_payload(raw: &RawResult<'_>) -> Result<Self, PayloadIssue> {
        let predictions = raw.required_array("predictions")?;
        let y_test = raw.required_array("y_test")?;
        if predictions.len() != y_test.len() {
            return Err(PayloadIssue::LengthMismatch {
                left: "predictions",
                left_len: predictions.len(),
                right: "y_test",
                right_len: y_test.len(),
            });
        }

        let predicted_keys = class_series("predictions", predictions)?;
        let actual_keys = class_series("y_test", y_test)?;
        same_class_kind(&[("y_test", y_test), ("predictions", predictions)])?;

        let class_labels = raw
            .plot_field("class_labels")
            .and_then(Value::as_array)
            .map(|labels| labels.iter().map(display_value).collect());

        let confusion = confusion::locate(raw, &CONFUSION_MATRIX_LOCATIONS)
            .map(|(_, value)| confusion::parse_matrix(value));

        Ok(Self {
            y_test: actual_keys,
            predictions: predicted_keys,
            class_labels,
            confusion,
            metrics: ClassificationMetrics::from_metrics(raw.metrics()),
        })
    }
}

/// Per-class tallies behind one category of the distribution chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassCount {
    pub class: String,
    pub label: String,
    pub actual: usize,
    pub predicted: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationReport {
    pub classes: Vec<ClassCount>,
    pub distribution: ChartSpec,
    pub confusion: Option<Result<ConfusionGrid, PayloadIssue>>,
    pub metrics: ClassificationMetrics,
    pub notes: Vec<FallbackNote>,
}

pub fn run(raw: &RawResult<'_>, palette: &Palette) -> Result<ClassificationReport, PayloadIssue> {
    ClassificationInput::from_payload(raw).map(|input| build(&input, palette))
}

pub fn build(input: &ClassificationInput, palette: &Palette) -> ClassificationReport {
    let actual = tally(&input.y_test);
    let predicted = tally(&input.predictions);

    // Lexicographic order of the string keys, so "10" sorts before "2".
    let classes: BTreeSet<&str> = actual.keys().chain(predicted.keys()).copied().collect();

    let mut notes = Vec::new();
    let display: Vec<String> = match &input.class_labels {
        Some(labels) if labels.len() == classes.len() => labels.clone(),
        Some(labels) => {
            notes.push(FallbackNote::ClassLabelsIgnored {
                provided: labels.len(),
                expected: classes.len(),
            });
            classes.iter().map(|c| c.to_string()).collect()
        }
        None => classes.iter().map(|c| c.to_string()).collect(),
    };

    let counts: Vec<ClassCount> = classes
        .iter()
        .zip(&display)
        .map(|(class, label)| ClassCount {
            class: class.to_string(),
            label: label.clone(),
            actual: actual.get(class).copied().unwrap_or(0),
            predicted: predicted.get(class).copied().unwrap_or(0),
        })
        .collect();

    let series = |label: &str, pick: fn(&ClassCount) -> usize, color: &str| {
        Dataset::new(
            label,
            counts
                .iter()
                .map(|count| DataPoint::Value(pick(count) as f64))
                .collect(),
            SeriesStyle::bars(color),
        )
    };
    let datasets = vec![
        series("Actual Distribution", |c| c.actual, palette.color(0)),
        series("Predicted Distribution", |c| c.predicted, palette.color(1)),
    ];

    let distribution = ChartSpec::bar(
        display,
        datasets,
        "Class Distribution (Actual vs. Predicted)",
        "Class Label",
        "Count",
    );

    let confusion = input.confusion.as_ref().map(|parsed| match parsed {
        Ok(matrix) => Ok(confusion::present(matrix, input.class_labels.as_deref())),
        Err(issue) => Err(issue.clone()),
    });

    ClassificationReport {
        classes: counts,
        distribution,
        confusion,
        metrics: input.metrics.clone(),
        notes,
    }
}

fn tally(values: &[String]) -> BTreeMap<&str, usize> {
    let mut counts = BTreeMap::new();
    for value in values {
        *counts.entry(value.as_str()).or_insert(0) += 1;
    }
    counts
}
