use dioxus::prelude::*;
use serde_json::Value;

use crate::components::UploadForm;
use crate::results::{MetricsDisplay, ResultsPanel, ResultsState};

#[component]
pub fn Home() -> Element {
    // Re-render on language change when the platform provides the signal.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_current = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let mut results = use_signal(ResultsState::default);

    let on_result = move |payload: Value| {
        results.set(ResultsState::ingest(payload));
    };

    let state = results.read();

    rsx! {
        section { class: "page page-home",
            h1 { {crate::t!("home-title")} }
            p { class: "page-home__tagline", {crate::t!("home-tagline")} }

            UploadForm { on_result }

            if state.has_result() {
                MetricsDisplay { entries: state.metric_entries() }
                ResultsPanel { outcome: state.outcome.clone() }
            }
        }
    }
}
