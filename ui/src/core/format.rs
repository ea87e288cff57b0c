//! Formatting helpers for presenting metrics.

/// Three decimals, used for metric cards and tooltips.
pub fn format_metric(value: f64) -> String {
    format_number(value, 3)
}

/// Four decimals, used by the raw evaluation-metrics grid.
pub fn format_metric_precise(value: f64) -> String {
    format_number(value, 4)
}

pub fn format_number(value: f64, decimals: usize) -> String {
    if value.is_finite() {
        format!("{value:.decimals$}")
    } else {
        "—".to_string()
    }
}

/// Counts and class ids: whole numbers without a trailing `.0`, anything
/// else in its shortest float form.
pub fn format_count(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// `f1_score` → `F1 SCORE`
pub fn humanize_key(key: &str) -> String {
    key.replace('_', " ").to_uppercase()
}
