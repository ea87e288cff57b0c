use api::{BackendClient, ModelCatalog};
use dioxus::prelude::*;

use crate::core::payload::TaskKind;
use crate::t;

/// Algorithms the backend offers, grouped by task.
#[component]
pub fn Models() -> Element {
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_current = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let catalog = use_resource(|| async move {
        let client = BackendClient::from_env();
        tracing::debug!(base_url = %client.config().base_url, "loading model catalog");
        client.list_models().await.map_err(|err| {
            tracing::warn!(%err, "couldn't load model catalog");
            err.to_string()
        })
    });

    let body = match &*catalog.read() {
        None => rsx! {
            p { class: "results-card__placeholder", {t!("models-loading")} }
        },
        Some(Err(message)) => rsx! {
            p { class: "results-card__meta results-card__meta--error",
                {t!("models-error")}
                " ({message})"
            }
        },
        Some(Ok(catalog)) if catalog.is_empty() => rsx! {
            p { class: "results-card__placeholder", {t!("models-empty")} }
        },
        Some(Ok(catalog)) => render_catalog(catalog),
    };

    rsx! {
        section { class: "page page-models",
            h1 { {t!("models-title")} }
            p { {t!("models-intro")} }
            {body}
        }
    }
}

fn render_catalog(catalog: &ModelCatalog) -> Element {
    let extra: Vec<(&String, &Vec<String>)> = catalog
        .tasks
        .iter()
        .filter(|(task, _)| TaskKind::parse(task).is_none())
        .collect();

    rsx! {
        div { class: "models__grid",
            for kind in TaskKind::ALL {
                section { key: "{kind.as_str()}", class: "results-card models__task",
                    h2 { "{kind.label()}" }
                    {algorithm_list(catalog.algorithms_for(kind.as_str()))}
                }
            }
            for (task, algorithms) in extra {
                section { key: "{task}", class: "results-card models__task",
                    h2 { "{task}" }
                    {algorithm_list(algorithms)}
                }
            }
        }
    }
}

fn algorithm_list(algorithms: &[String]) -> Element {
    if algorithms.is_empty() {
        return rsx! {
            p { class: "results-card__placeholder", {t!("models-none-for-task")} }
        };
    }
    rsx! {
        ul { class: "models__list",
            for name in algorithms.iter() {
                li { key: "{name}", "{name}" }
            }
        }
    }
}
