//! Read-only view over the training backend's result payload.
//!
//! The payload is loosely typed JSON: sections may be missing, `null`, or of
//! the wrong shape. `RawResult` normalises the envelope (absent sections read
//! as empty maps) and the helpers below turn individual fields into typed
//! values or a [`PayloadIssue`].

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::issue::PayloadIssue;

static EMPTY_SECTION: Lazy<Map<String, Value>> = Lazy::new(Map::new);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    Classification,
    Regression,
    Clustering,
}

impl TaskKind {
    pub const ALL: [TaskKind; 3] = [
        TaskKind::Classification,
        TaskKind::Regression,
        TaskKind::Clustering,
    ];

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "classification" => Some(Self::Classification),
            "regression" => Some(Self::Regression),
            "clustering" => Some(Self::Clustering),
            _ => None,
        }
    }

    /// Wire name used by the backend (`/models` keys, `task` form field).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Classification => "classification",
            Self::Regression => "regression",
            Self::Clustering => "clustering",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Classification => "Classification",
            Self::Regression => "Regression",
            Self::Clustering => "Clustering",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RawResult<'a> {
    root: &'a Value,
}

impl<'a> RawResult<'a> {
    pub fn new(root: &'a Value) -> Self {
        Self { root }
    }

    /// The declared task, or `None` when no task is set. Falsy values (`null`,
    /// `false`, `0` and `""`) count as unset.
    pub fn task(&self) -> Option<&'a Value> {
        match self.root.get("task")? {
            Value::Null | Value::Bool(false) => None,
            Value::String(s) if s.is_empty() => None,
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            other => Some(other),
        }
    }

    pub fn algorithm(&self) -> Option<&'a str> {
        self.root
            .get("algorithm")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    pub fn metrics(&self) -> &'a Map<String, Value> {
        section(self.root, "metrics")
    }

    pub fn plot_data(&self) -> &'a Map<String, Value> {
        section(self.root, "plot_data")
    }

    /// A `plot_data` entry; `null` counts as absent.
    pub fn plot_field(&self, key: &str) -> Option<&'a Value> {
        present(self.plot_data().get(key))
    }

    /// A `metrics` entry; `null` counts as absent.
    pub fn metric(&self, key: &str) -> Option<&'a Value> {
        present(self.metrics().get(key))
    }

    pub fn has_plot_field(&self, key: &str) -> bool {
        self.plot_field(key).is_some()
    }

    /// A `plot_data` array that must be present.
    pub fn required_array(&self, field: &'static str) -> Result<&'a [Value], PayloadIssue> {
        let value = self
            .plot_field(field)
            .ok_or(PayloadIssue::MissingField { field })?;
        as_array(field, value)
    }
}

fn section<'a>(root: &'a Value, key: &str) -> &'a Map<String, Value> {
    root.get(key)
        .and_then(Value::as_object)
        .unwrap_or(&*EMPTY_SECTION)
}

fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

pub(crate) fn as_array<'a>(field: &'static str, value: &'a Value) -> Result<&'a [Value], PayloadIssue> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or(PayloadIssue::NotAnArray {
            field,
            found: json_kind(value),
        })
}

/// Every element must be a JSON number.
pub(crate) fn numeric_series(field: &'static str, values: &[Value]) -> Result<Vec<f64>, PayloadIssue> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            value.as_f64().ok_or(PayloadIssue::WrongElementType {
                field,
                index,
                expected: "a number",
                found: json_kind(value),
            })
        })
        .collect()
}

/// Every element must be a scalar class value; each is coerced to its
/// string key with [`class_key`].
pub(crate) fn class_series(field: &'static str, values: &[Value]) -> Result<Vec<String>, PayloadIssue> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            class_key(value).ok_or(PayloadIssue::WrongElementType {
                field,
                index,
                expected: "a class value (string, number or boolean)",
                found: json_kind(value),
            })
        })
        .collect()
}

/// Class series compared together must hold one JSON kind throughout. The
/// first element of the first series sets the expected kind.
pub(crate) fn same_class_kind(series: &[(&'static str, &[Value])]) -> Result<(), PayloadIssue> {
    let Some((reference, expected)) = series
        .iter()
        .find_map(|(field, values)| values.first().map(|v| (*field, json_kind(v))))
    else {
        return Ok(());
    };
    for (field, values) in series {
        if let Some((index, value)) = values
            .iter()
            .enumerate()
            .find(|(_, value)| json_kind(value) != expected)
        {
            return Err(PayloadIssue::MixedClassTypes {
                field,
                index,
                reference,
                expected,
                found: json_kind(value),
            });
        }
    }
    Ok(())
}

/// String key of a class value: strings verbatim, whole numbers without a
/// fractional part (`1.0` and `1` are the same class), booleans as
/// `true`/`false`. Non-scalars have no key.
pub fn class_key(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(i.to_string())
            } else if let Some(u) = n.as_u64() {
                Some(u.to_string())
            } else {
                n.as_f64().map(super::format::format_count)
            }
        }
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Display text for an arbitrary JSON value (used for labels we cannot coerce).
pub fn display_value(value: &Value) -> String {
    class_key(value).unwrap_or_else(|| value.to_string())
}

/// A scalar metric; anything that is not a number is treated as absent.
pub fn scalar_metric(metrics: &Map<String, Value>, key: &str) -> Option<f64> {
    metrics.get(key).and_then(Value::as_f64)
}

pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn task_is_absent_when_missing_or_falsy() {
        for payload in [
            json!({}),
            json!({"task": null}),
            json!({"task": ""}),
            json!({"task": false}),
            json!({"task": 0}),
            json!({"task": 0.0}),
            json!([1, 2]),
        ] {
            assert!(RawResult::new(&payload).task().is_none(), "{payload}");
        }
        let payload = json!({"task": "regression"});
        assert_eq!(RawResult::new(&payload).task(), Some(&json!("regression")));
        for truthy in [json!(true), json!(3), json!("0"), json!([])] {
            let payload = json!({"task": truthy});
            assert_eq!(RawResult::new(&payload).task(), Some(&truthy), "{payload}");
        }
    }

    #[test]
    fn missing_sections_read_as_empty() {
        let payload = json!({"task": "clustering", "plot_data": "oops"});
        let raw = RawResult::new(&payload);
        assert!(raw.metrics().is_empty());
        assert!(raw.plot_data().is_empty());
        assert!(raw.algorithm().is_none());
    }

    #[test]
    fn null_fields_count_as_absent() {
        let payload = json!({"plot_data": {"residuals": null, "y_test": [1]}});
        let raw = RawResult::new(&payload);
        assert!(!raw.has_plot_field("residuals"));
        assert!(raw.has_plot_field("y_test"));
        assert_eq!(
            raw.required_array("residuals"),
            Err(PayloadIssue::MissingField { field: "residuals" })
        );
    }

    #[test]
    fn required_array_reports_found_kind() {
        let payload = json!({"plot_data": {"pca": {"x": 1}}});
        assert_eq!(
            RawResult::new(&payload).required_array("pca"),
            Err(PayloadIssue::NotAnArray {
                field: "pca",
                found: "an object"
            })
        );
    }

    #[test]
    fn class_keys_match_across_number_forms() {
        assert_eq!(class_key(&json!(1)), Some("1".into()));
        assert_eq!(class_key(&json!(1.0)), Some("1".into()));
        assert_eq!(class_key(&json!(2.5)), Some("2.5".into()));
        assert_eq!(class_key(&json!("setosa")), Some("setosa".into()));
        assert_eq!(class_key(&json!(true)), Some("true".into()));
        assert_eq!(class_key(&json!([1])), None);
    }

    #[test]
    fn numeric_series_points_at_bad_element() {
        let values = vec![json!(1.5), json!("2")];
        assert_eq!(
            numeric_series("y_test", &values),
            Err(PayloadIssue::WrongElementType {
                field: "y_test",
                index: 1,
                expected: "a number",
                found: "a string"
            })
        );
    }

    #[test]
    fn class_series_must_share_one_kind() {
        let actual = vec![json!("A"), json!("B")];
        let predicted = vec![json!("A"), json!(1)];
        assert_eq!(
            same_class_kind(&[("y_test", actual.as_slice()), ("predictions", predicted.as_slice())]),
            Err(PayloadIssue::MixedClassTypes {
                field: "predictions",
                index: 1,
                reference: "y_test",
                expected: "a string",
                found: "a number"
            })
        );

        let ints = vec![json!(1), json!(2.0)];
        assert_eq!(
            same_class_kind(&[("y_test", ints.as_slice()), ("predictions", ints.as_slice())]),
            Ok(())
        );
        let empty: Vec<Value> = Vec::new();
        assert_eq!(
            same_class_kind(&[("y_test", empty.as_slice()), ("predictions", empty.as_slice())]),
            Ok(())
        );
    }

    #[test]
    fn non_numeric_metrics_are_absent() {
        let metrics = json!({"accuracy": 0.9, "precision": "n/a"});
        let map = metrics.as_object().unwrap();
        assert_eq!(scalar_metric(map, "accuracy"), Some(0.9));
        assert_eq!(scalar_metric(map, "precision"), None);
        assert_eq!(scalar_metric(map, "recall"), None);
    }

    #[test]
    fn task_kind_round_trips_wire_names() {
        for kind in TaskKind::ALL {
            assert_eq!(TaskKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(TaskKind::parse("Classification"), None);
    }
}
