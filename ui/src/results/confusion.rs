//! Confusion matrix lookup, validation and presentation.
//!
//! Rows are actual classes and columns predicted classes. Presenting a matrix
//! never changes its values; it only attaches headers and tags each cell as
//! correct (diagonal) or error (off-diagonal) for styling.

use dioxus::prelude::*;
use serde_json::Value;

use crate::core::{
    format,
    issue::{MatrixDefect, PayloadIssue},
    payload::{json_kind, RawResult},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixLocation {
    PlotData,
    Metrics,
}

impl MatrixLocation {
    pub fn path(self) -> &'static str {
        match self {
            Self::PlotData => "plot_data.confusion_matrix",
            Self::Metrics => "metrics.confusion_matrix",
        }
    }
}

/// Where the backend may put the matrix, in lookup order. The first
/// non-null entry wins.
pub const CONFUSION_MATRIX_LOCATIONS: [MatrixLocation; 2] =
    [MatrixLocation::PlotData, MatrixLocation::Metrics];

pub fn locate<'a>(
    raw: &RawResult<'a>,
    order: &[MatrixLocation],
) -> Option<(MatrixLocation, &'a Value)> {
    order.iter().find_map(|&location| {
        let value = match location {
            MatrixLocation::PlotData => raw.plot_field("confusion_matrix"),
            MatrixLocation::Metrics => raw.metric("confusion_matrix"),
        };
        value.map(|v| (location, v))
    })
}

/// Non-empty array of non-empty numeric rows, all of the same length.
pub fn parse_matrix(value: &Value) -> Result<Vec<Vec<f64>>, PayloadIssue> {
    let rows = value
        .as_array()
        .ok_or(MatrixDefect::NotAnArray(json_kind(value)))
        .map_err(PayloadIssue::InvalidMatrix)?;
    if rows.is_empty() {
        return Err(PayloadIssue::InvalidMatrix(MatrixDefect::Empty));
    }

    let mut matrix = Vec::with_capacity(rows.len());
    let mut width = None;
    for (row, cells) in rows.iter().enumerate() {
        let cells = cells
            .as_array()
            .ok_or(PayloadIssue::InvalidMatrix(MatrixDefect::RowNotArray { row }))?;
        if cells.is_empty() {
            return Err(PayloadIssue::InvalidMatrix(MatrixDefect::EmptyRow { row }));
        }
        let expected = *width.get_or_insert(cells.len());
        if cells.len() != expected {
            return Err(PayloadIssue::InvalidMatrix(MatrixDefect::Ragged {
                row,
                expected,
                found: cells.len(),
            }));
        }
        let parsed = cells
            .iter()
            .enumerate()
            .map(|(column, cell)| {
                cell.as_f64()
                    .ok_or(PayloadIssue::InvalidMatrix(MatrixDefect::NonNumeric { row, column }))
            })
            .collect::<Result<Vec<_>, _>>()?;
        matrix.push(parsed);
    }
    Ok(matrix)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Correct,
    Error,
}

impl CellKind {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Correct => "confusion__cell confusion__cell--correct",
            Self::Error => "confusion__cell confusion__cell--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfusionCell {
    pub value: f64,
    pub kind: CellKind,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfusionRow {
    pub header: String,
    pub cells: Vec<ConfusionCell>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfusionGrid {
    pub column_headers: Vec<String>,
    pub rows: Vec<ConfusionRow>,
}

impl ConfusionGrid {
    pub fn cell(&self, row: usize, column: usize) -> Option<&ConfusionCell> {
        self.rows.get(row)?.cells.get(column)
    }

    pub fn row_headers(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.header.as_str()).collect()
    }
}

/// Header used when no usable class labels were supplied.
pub fn synthesized_label(index: usize) -> String {
    format!("Class {index}")
}

fn headers(count: usize, labels: Option<&[String]>) -> Vec<String> {
    match labels {
        Some(labels) if labels.len() == count => labels.to_vec(),
        _ => (0..count).map(synthesized_label).collect(),
    }
}

/// Label each axis with `labels` when its length matches that axis,
/// otherwise with `Class 0`, `Class 1`, ….
pub fn present(matrix: &[Vec<f64>], labels: Option<&[String]>) -> ConfusionGrid {
    let columns = matrix.first().map(Vec::len).unwrap_or(0);
    let column_headers = headers(columns, labels);
    let row_headers = headers(matrix.len(), labels);

    let rows = matrix
        .iter()
        .zip(row_headers)
        .enumerate()
        .map(|(i, (values, header))| ConfusionRow {
            header,
            cells: values
                .iter()
                .enumerate()
                .map(|(j, &value)| ConfusionCell {
                    value,
                    kind: if i == j {
                        CellKind::Correct
                    } else {
                        CellKind::Error
                    },
                })
                .collect(),
        })
        .collect();

    ConfusionGrid {
        column_headers,
        rows,
    }
}

#[component]
pub fn ConfusionMatrixTable(grid: ConfusionGrid) -> Element {
    rsx! {
        div { class: "results-card confusion",
            h3 { {crate::t!("confusion-heading")} }
            table { class: "confusion__table",
                thead {
                    tr {
                        th { scope: "col", class: "confusion__corner",
                            span { {crate::t!("confusion-predicted-axis")} }
                            span { {crate::t!("confusion-actual-axis")} }
                        }
                        for header in grid.column_headers.iter() {
                            th { scope: "col", "{header}" }
                        }
                    }
                }
                tbody {
                    for row in grid.rows.iter() {
                        tr {
                            th { scope: "row", "{row.header}" }
                            for cell in row.cells.iter() {
                                td { class: cell.kind.css_class(), "{format::format_count(cell.value)}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
