//! Regression payload validation and chart building.

use super::metrics::RegressionMetrics;
use crate::core::{
    issue::PayloadIssue,
    palette::Palette,
    payload::{as_array, numeric_series, RawResult},
};
use crate::results::{
    chart::{ChartSpec, DataPoint, Dataset, SeriesStyle},
    FallbackNote,
};

pub const ACTUAL_VS_PREDICTED: &str = "Actual vs Predicted";
pub const IDEAL_LINE: &str = "Ideal (y=x)";
pub const RESIDUALS: &str = "Residuals";

/// State of the optional `residuals` field.
#[derive(Debug, Clone, PartialEq)]
pub enum Residuals {
    Absent,
    Usable(Vec<f64>),
    /// Present but not chartable; the residual plot is left out.
    Rejected(PayloadIssue),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegressionInput {
    pub y_test: Vec<f64>,
    pub predictions: Vec<f64>,
    pub residuals: Residuals,
    pub metrics: RegressionMetrics,
}

impl RegressionInput {
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
        let predictions = numeric_series("predictions", predictions)?;
        let y_test = numeric_series("y_test", y_test)?;

        let residuals = match raw.plot_field("residuals") {
            None => Residuals::Absent,
            Some(value) => match read_residuals(value, predictions.len()) {
                Ok(values) => Residuals::Usable(values),
                Err(issue) => Residuals::Rejected(issue),
            },
        };

        Ok(Self {
            y_test,
            predictions,
            residuals,
            metrics: RegressionMetrics::from_metrics(raw.metrics()),
        })
    }
}

fn read_residuals(value: &serde_json::Value, expected: usize) -> Result<Vec<f64>, PayloadIssue> {
    let values = numeric_series("residuals", as_array("residuals", value)?)?;
    if values.len() != expected {
        return Err(PayloadIssue::LengthMismatch {
            left: "residuals",
            left_len: values.len(),
            right: "predictions",
            right_len: expected,
        });
    }
    Ok(values)
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegressionReport {
    pub actual_vs_predicted: ChartSpec,
    pub residuals: Option<ChartSpec>,
    pub metrics: RegressionMetrics,
    pub notes: Vec<FallbackNote>,
}

pub fn run(raw: &RawResult<'_>, palette: &Palette) -> Result<RegressionReport, PayloadIssue> {
    RegressionInput::from_payload(raw).map(|input| build(&input, palette))
}

pub fn build(input: &RegressionInput, palette: &Palette) -> RegressionReport {
    let scatter: Vec<DataPoint> = input
        .y_test
        .iter()
        .zip(&input.predictions)
        .map(|(&actual, &predicted)| DataPoint::xy(actual, predicted))
        .collect();

    let mut datasets = vec![Dataset::new(
        ACTUAL_VS_PREDICTED,
        scatter,
        SeriesStyle::points(palette.color(1), 4.0),
    )];
    if let Some((low, high)) = value_range(input.y_test.iter().chain(&input.predictions)) {
        datasets.push(Dataset::new(
            IDEAL_LINE,
            vec![DataPoint::xy(low, low), DataPoint::xy(high, high)],
            SeriesStyle::dashed_line(palette.color(0)),
        ));
    }

    let actual_vs_predicted = ChartSpec::scatter(
        datasets,
        "Regression: Actual vs. Predicted",
        "Actual Values",
        "Predicted Values",
    );

    let mut notes = Vec::new();
    let residuals = match &input.residuals {
        Residuals::Usable(values) => Some(residual_chart(&input.predictions, values, palette)),
        Residuals::Rejected(issue) => {
            notes.push(FallbackNote::ResidualsOmitted(issue.clone()));
            None
        }
        Residuals::Absent => None,
    };

    RegressionReport {
        actual_vs_predicted,
        residuals,
        metrics: input.metrics.clone(),
        notes,
    }
}

fn residual_chart(predictions: &[f64], residuals: &[f64], palette: &Palette) -> ChartSpec {
    let points = predictions
        .iter()
        .zip(residuals)
        .map(|(&predicted, &residual)| DataPoint::xy(predicted, residual))
        .collect();
    ChartSpec::scatter(
        vec![Dataset::new(
            RESIDUALS,
            points,
            SeriesStyle::points(palette.color(5), 4.0),
        )],
        "Residual Plot",
        "Predicted Values",
        "Residuals (Actual - Predicted)",
    )
}

/// Smallest and largest value, or `None` for an empty sequence.
fn value_range<'a>(values: impl Iterator<Item = &'a f64>) -> Option<(f64, f64)> {
    values.fold(None, |range, &v| match range {
        None => Some((v, v)),
        Some((low, high)) => Some((low.min(v), high.max(v))),
    })
}
