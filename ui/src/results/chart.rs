//! Render-ready chart descriptions.
//!
//! A [`ChartSpec`] is pure data: series, colors and options. Drawing is left
//! to Chart.js, which receives the JSON produced by [`ChartSpec::to_chartjs`].

use serde::Serialize;
use serde_json::{json, Value};

use crate::core::palette::{with_alpha, BAR_ALPHA, FILL_ALPHA, LINE_ALPHA};

/// Decimal places used in tooltips.
pub const TOOLTIP_DECIMALS: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Scatter,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DataPoint {
    Value(f64),
    Xy { x: f64, y: f64 },
}

impl DataPoint {
    pub fn xy(x: f64, y: f64) -> Self {
        Self::Xy { x, y }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SeriesMark {
    Bars { border_width: f64 },
    Points { radius: f64, hover_radius: f64 },
    /// Drawn as a line through its points, without point markers.
    DashedLine { width: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesStyle {
    pub color: String,
    pub background: String,
    pub mark: SeriesMark,
}

impl SeriesStyle {
    pub fn bars(color: &str) -> Self {
        Self {
            color: color.to_string(),
            background: with_alpha(color, BAR_ALPHA),
            mark: SeriesMark::Bars { border_width: 1.0 },
        }
    }

    pub fn points(color: &str, radius: f64) -> Self {
        Self {
            color: color.to_string(),
            background: with_alpha(color, FILL_ALPHA),
            mark: SeriesMark::Points {
                radius,
                hover_radius: radius + 2.0,
            },
        }
    }

    pub fn dashed_line(color: &str) -> Self {
        Self {
            color: with_alpha(color, LINE_ALPHA),
            background: with_alpha(color, LINE_ALPHA),
            mark: SeriesMark::DashedLine { width: 2.0 },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub label: String,
    pub points: Vec<DataPoint>,
    pub style: SeriesStyle,
}

impl Dataset {
    pub fn new(label: impl Into<String>, points: Vec<DataPoint>, style: SeriesStyle) -> Self {
        Self {
            label: label.into(),
            points,
            style,
        }
    }

    fn to_chartjs(&self) -> Value {
        let mut dataset = json!({
            "label": self.label,
            "data": self.points,
            "backgroundColor": self.style.background,
            "borderColor": self.style.color,
        });
        let extra = match self.style.mark {
            SeriesMark::Bars { border_width } => json!({ "borderWidth": border_width }),
            SeriesMark::Points {
                radius,
                hover_radius,
            } => json!({ "pointRadius": radius, "pointHoverRadius": hover_radius }),
            SeriesMark::DashedLine { width } => json!({
                "type": "line",
                "borderWidth": width,
                "borderDash": [5, 5],
                "pointRadius": 0,
                "fill": false,
                "showLine": true,
            }),
        };
        if let (Some(target), Value::Object(extra)) = (dataset.as_object_mut(), extra) {
            target.extend(extra);
        }
        dataset
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub label: String,
    pub grid: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipMode {
    /// `Label: y`
    Value,
    /// `Label: (x, y)`
    Coordinates,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TooltipFormat {
    pub decimals: u8,
    pub mode: TooltipMode,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    pub title: String,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub legend_on_top: bool,
    pub tooltip: TooltipFormat,
}

impl ChartOptions {
    pub fn new(title: &str, x_label: &str, y_label: &str, tooltip_mode: TooltipMode) -> Self {
        Self {
            title: title.to_string(),
            x_axis: Axis {
                label: x_label.to_string(),
                grid: true,
            },
            y_axis: Axis {
                label: y_label.to_string(),
                grid: true,
            },
            legend_on_top: true,
            tooltip: TooltipFormat {
                decimals: TOOLTIP_DECIMALS,
                mode: tooltip_mode,
            },
        }
    }

    pub fn without_grid(mut self) -> Self {
        self.x_axis.grid = false;
        self.y_axis.grid = false;
        self
    }

    fn to_chartjs(&self) -> Value {
        json!({
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": {
                "legend": {
                    "display": true,
                    "position": if self.legend_on_top { "top" } else { "bottom" },
                },
                "title": { "display": true, "text": self.title },
                "tooltip": {
                    "enabled": true,
                    "valueFormat": {
                        "decimals": self.tooltip.decimals,
                        "coordinates": self.tooltip.mode == TooltipMode::Coordinates,
                    },
                },
            },
            "scales": {
                "x": axis_to_chartjs(&self.x_axis),
                "y": axis_to_chartjs(&self.y_axis),
            },
        })
    }
}

fn axis_to_chartjs(axis: &Axis) -> Value {
    json!({
        "title": { "display": true, "text": axis.label },
        "grid": { "display": axis.grid },
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    /// Category axis; only bar charts have one.
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub options: ChartOptions,
}

impl ChartSpec {
    pub fn bar(labels: Vec<String>, datasets: Vec<Dataset>, title: &str, x: &str, y: &str) -> Self {
        Self {
            kind: ChartKind::Bar,
            labels,
            datasets,
            options: ChartOptions::new(title, x, y, TooltipMode::Value),
        }
    }

    pub fn scatter(datasets: Vec<Dataset>, title: &str, x: &str, y: &str) -> Self {
        Self {
            kind: ChartKind::Scatter,
            labels: Vec::new(),
            datasets,
            options: ChartOptions::new(title, x, y, TooltipMode::Coordinates),
        }
    }

    pub fn dataset(&self, label: &str) -> Option<&Dataset> {
        self.datasets.iter().find(|d| d.label == label)
    }

    /// Chart.js configuration object (`{type, data, options}`).
    pub fn to_chartjs(&self) -> Value {
        let datasets: Vec<Value> = self.datasets.iter().map(Dataset::to_chartjs).collect();
        let mut data = json!({ "datasets": datasets });
        if self.kind == ChartKind::Bar {
            data["labels"] = json!(self.labels);
        }
        json!({
            "type": self.kind,
            "data": data,
            "options": self.options.to_chartjs(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_config_carries_category_axis() {
        let spec = ChartSpec::bar(
            vec!["a".into(), "b".into()],
            vec![Dataset::new(
                "Counts",
                vec![DataPoint::Value(3.0), DataPoint::Value(0.0)],
                SeriesStyle::bars("#FF6384"),
            )],
            "Counts",
            "Class",
            "Count",
        );
        let config = spec.to_chartjs();
        assert_eq!(config["type"], "bar");
        assert_eq!(config["data"]["labels"], json!(["a", "b"]));
        assert_eq!(config["data"]["datasets"][0]["data"], json!([3.0, 0.0]));
        assert_eq!(config["data"]["datasets"][0]["backgroundColor"], "#FF6384B3");
        assert_eq!(config["options"]["plugins"]["tooltip"]["valueFormat"]["coordinates"], false);
    }

    #[test]
    fn scatter_config_uses_xy_points_and_hidden_grid() {
        let spec = ChartSpec::scatter(
            vec![
                Dataset::new(
                    "Points",
                    vec![DataPoint::xy(1.0, 2.0)],
                    SeriesStyle::points("#36A2EB", 4.0),
                ),
                Dataset::new(
                    "Ideal (y=x)",
                    vec![DataPoint::xy(0.0, 0.0), DataPoint::xy(1.0, 1.0)],
                    SeriesStyle::dashed_line("#FF6384"),
                ),
            ],
            "Scatter",
            "X",
            "Y",
        );
        let spec = ChartSpec {
            options: spec.options.clone().without_grid(),
            ..spec
        };
        let config = spec.to_chartjs();
        assert_eq!(config["type"], "scatter");
        assert!(config["data"].get("labels").is_none());
        assert_eq!(config["data"]["datasets"][0]["data"][0], json!({"x": 1.0, "y": 2.0}));
        assert_eq!(config["data"]["datasets"][0]["pointHoverRadius"], 6.0);
        assert_eq!(config["data"]["datasets"][1]["type"], "line");
        assert_eq!(config["data"]["datasets"][1]["borderDash"], json!([5, 5]));
        assert_eq!(config["options"]["scales"]["x"]["grid"]["display"], false);
        assert_eq!(config["options"]["scales"]["y"]["title"]["text"], "Y");
        assert_eq!(config["options"]["plugins"]["title"]["text"], "Scatter");
    }
}
