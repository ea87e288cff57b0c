//! Validation failures found while reading a result payload.
//!
//! The `Display` text of each variant is what the results panel shows, so
//! messages name the offending field and what was found there.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PayloadIssue {
    #[error("The task type '{task}' is not recognized.{}", absent_suffix(.missing))]
    UnrecognizedTask {
        task: String,
        missing: Vec<&'static str>,
    },
    #[error("Required field `{field}` is missing.")]
    MissingField { field: &'static str },
    #[error("`{field}` should be an array but is {found}.")]
    NotAnArray {
        field: &'static str,
        found: &'static str,
    },
    #[error("`{field}[{index}]` should be {expected} but is {found}.")]
    WrongElementType {
        field: &'static str,
        index: usize,
        expected: &'static str,
        found: &'static str,
    },
    #[error("`{field}[{index}]` should be a pair of numbers but has {len} entries.")]
    NotAPair {
        field: &'static str,
        index: usize,
        len: usize,
    },
    #[error("`{field}[{index}]` is {found} but class values in `{reference}` are {expected}.")]
    MixedClassTypes {
        field: &'static str,
        index: usize,
        reference: &'static str,
        expected: &'static str,
        found: &'static str,
    },
    #[error("Length mismatch: `{left}` has {left_len} entries but `{right}` has {right_len}.")]
    LengthMismatch {
        left: &'static str,
        left_len: usize,
        right: &'static str,
        right_len: usize,
    },
    #[error("Invalid confusion matrix: {0}.")]
    InvalidMatrix(MatrixDefect),
}

impl PayloadIssue {
    /// Payload fields this issue is about, for highlighting and tests.
    pub fn fields(&self) -> Vec<&'static str> {
        match self {
            Self::UnrecognizedTask { missing, .. } => missing.clone(),
            Self::MissingField { field }
            | Self::NotAnArray { field, .. }
            | Self::WrongElementType { field, .. }
            | Self::NotAPair { field, .. } => vec![*field],
            Self::MixedClassTypes {
                field, reference, ..
            } if field != reference => vec![*field, *reference],
            Self::MixedClassTypes { field, .. } => vec![*field],
            Self::LengthMismatch { left, right, .. } => vec![*left, *right],
            Self::InvalidMatrix(_) => vec!["confusion_matrix"],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixDefect {
    #[error("expected an array of rows but found {0}")]
    NotAnArray(&'static str),
    #[error("it has no rows")]
    Empty,
    #[error("row {row} is not an array")]
    RowNotArray { row: usize },
    #[error("row {row} is empty")]
    EmptyRow { row: usize },
    #[error("row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("cell ({row}, {column}) is not a number")]
    NonNumeric { row: usize, column: usize },
}

fn absent_suffix(missing: &[&'static str]) -> String {
    if missing.is_empty() {
        String::new()
    } else {
        format!(" Absent fields: {}.", missing.join(", "))
    }
}
