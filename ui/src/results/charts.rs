//! Canvas host for a [`ChartSpec`].
//!
//! The component owns a `<canvas>` and hands the Chart.js config to the page
//! through `document::eval`. Chart.js itself is loaded by the platform shell,
//! so the bridge waits briefly for it and reports back whether the chart was
//! drawn.

use dioxus::prelude::*;

use super::chart::ChartSpec;

/// Bridge status for a chart that rendered.
const DRAWN: &str = "drawn";
const MISSING_CANVAS: &str = "missing-canvas";
const MISSING_CHARTJS: &str = "missing-chartjs";
const ERROR_PREFIX: &str = "error: ";

const CHART_BRIDGE: &str = r#"
for (let attempt = 0; attempt < 30 && typeof Chart === "undefined"; attempt++) {
    await new Promise((resolve) => setTimeout(resolve, 100));
}
const canvas = document.getElementById("__CANVAS_ID__");
if (!canvas) { return "missing-canvas"; }
if (typeof Chart === "undefined") { return "missing-chartjs"; }
try {
    const existing = Chart.getChart(canvas);
    if (existing) { existing.destroy(); }
    const config = __CONFIG__;
    const fmt = (config.options.plugins.tooltip || {}).valueFormat;
    if (fmt) {
        const round = (v) => Number(v).toFixed(fmt.decimals);
        config.options.plugins.tooltip.callbacks = {
            label: (ctx) => {
                const name = ctx.dataset.label || "";
                if (fmt.coordinates) {
                    return `${name}: (${round(ctx.parsed.x)}, ${round(ctx.parsed.y)})`;
                }
                return `${name}: ${round(ctx.parsed.y)}`;
            },
        };
    }
    new Chart(canvas, config);
    return "drawn";
} catch (err) {
    return "error: " + (err && err.message ? err.message : String(err));
}
"#;

fn bridge_script(id: &str, spec: &ChartSpec) -> String {
    CHART_BRIDGE
        .replace("__CANVAS_ID__", id)
        .replace("__CONFIG__", &spec.to_chartjs().to_string())
}

/// Why a chart is missing, or `None` when the bridge drew it.
fn draw_failure(status: &str) -> Option<String> {
    match status {
        DRAWN => None,
        MISSING_CANVAS => Some("the chart canvas is not mounted".to_string()),
        MISSING_CHARTJS => Some("Chart.js is not loaded".to_string()),
        other => Some(other.strip_prefix(ERROR_PREFIX).unwrap_or(other).to_string()),
    }
}

#[component]
pub fn ChartCanvas(
    #[props(into)] id: String,
    spec: ChartSpec,
    #[props(default)] tall: bool,
) -> Element {
    let mut failure = use_signal(|| None::<String>);

    use_effect(use_reactive((&id, &spec), move |(id, spec)| {
        tracing::debug!(canvas = %id, datasets = spec.datasets.len(), "drawing chart");
        let script = bridge_script(&id, &spec);
        spawn(async move {
            let outcome = match document::eval(&script).join::<String>().await {
                Ok(status) => draw_failure(&status),
                Err(err) => Some(err.to_string()),
            };
            if let Some(reason) = &outcome {
                tracing::warn!(canvas = %id, %reason, "chart was not drawn");
            }
            failure.set(outcome);
        });
    }));

    let class = if tall {
        "results-chart results-chart--tall"
    } else {
        "results-chart"
    };

    rsx! {
        div { class: "{class}",
            canvas { id: "{id}" }
        }
        if let Some(reason) = failure() {
            p { class: "results-card__meta results-card__meta--error", role: "alert",
                {crate::t!("chart-draw-failed")}
                " ({reason})"
            }
        }
    }
}
