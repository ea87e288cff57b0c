//! Dataset upload form: CSV file, task, optional algorithm, then `POST /train`.

use api::{BackendClient, TrainRequest};
use dioxus::prelude::*;
use serde_json::Value;

use crate::core::payload::TaskKind;
use crate::t;

#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Training,
    Error(String),
}

/// `None` until a file has been chosen. A blank algorithm means auto-select.
pub fn build_request(
    file: Option<&SelectedFile>,
    task: TaskKind,
    algorithm: &str,
) -> Option<TrainRequest> {
    let file = file?;
    let algorithm = algorithm.trim();
    Some(TrainRequest {
        file_name: file.name.clone(),
        bytes: file.bytes.clone(),
        task: task.as_str().to_string(),
        algorithm: (!algorithm.is_empty()).then(|| algorithm.to_string()),
    })
}

#[component]
pub fn UploadForm(on_result: EventHandler<Value>) -> Element {
    let mut file = use_signal(|| None::<SelectedFile>);
    let mut task = use_signal(|| TaskKind::Classification);
    let mut algorithm = use_signal(String::new);
    let mut status = use_signal(FormStatus::default);

    let algorithms = use_resource(move || async move {
        let task = task();
        match BackendClient::from_env().list_models().await {
            Ok(catalog) => catalog.algorithms_for(task.as_str()).to_vec(),
            Err(err) => {
                tracing::warn!(%err, task = task.as_str(), "couldn't load algorithm catalog");
                Vec::new()
            }
        }
    });

    let on_file = move |evt: FormEvent| async move {
        let Some(engine) = evt.files() else {
            return;
        };
        let Some(name) = engine.files().into_iter().next() else {
            file.set(None);
            return;
        };
        match engine.read_file(&name).await {
            Some(bytes) => {
                tracing::debug!(file = %name, size = bytes.len(), "dataset selected");
                file.set(Some(SelectedFile { name, bytes }));
            }
            None => {
                tracing::warn!(file = %name, "couldn't read selected file");
                file.set(None);
            }
        }
    };

    let on_task = move |evt: FormEvent| {
        if let Some(kind) = TaskKind::parse(&evt.value()) {
            task.set(kind);
            algorithm.set(String::new());
        }
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(request) = build_request(file.read().as_ref(), task(), &algorithm.read()) else {
            status.set(FormStatus::Error(t!("form-missing-file")));
            return;
        };

        status.set(FormStatus::Training);
        spawn(async move {
            tracing::info!(
                file = %request.file_name,
                task = %request.task,
                algorithm = request.chosen_algorithm().unwrap_or("auto"),
                "submitting dataset"
            );
            match BackendClient::from_env().train(request).await {
                Ok(payload) => {
                    status.set(FormStatus::Idle);
                    on_result.call(payload);
                }
                Err(err) => {
                    tracing::error!(%err, "backend error");
                    status.set(FormStatus::Error(t!("form-train-failed")));
                }
            }
        });
    };

    let file_label = file
        .read()
        .as_ref()
        .map(|f| f.name.clone())
        .unwrap_or_else(|| t!("form-no-file"));
    let choices = algorithms.read().clone().unwrap_or_default();
    let training = status() == FormStatus::Training;

    rsx! {
        form { class: "upload-form", onsubmit: on_submit,
            div { class: "upload-form__file",
                label { class: "upload-form__button", r#for: "dataset-input",
                    {t!("form-upload-file")}
                }
                input {
                    id: "dataset-input",
                    class: "visually-hidden",
                    r#type: "file",
                    accept: ".csv",
                    onchange: on_file,
                }
                span { class: "upload-form__file-name", "{file_label}" }
            }

            select {
                class: "upload-form__select",
                aria_label: t!("form-task-label"),
                value: task().as_str(),
                onchange: on_task,
                for kind in TaskKind::ALL {
                    option { key: "{kind.as_str()}", value: kind.as_str(), {task_label(kind)} }
                }
            }

            select {
                class: "upload-form__select",
                aria_label: t!("form-algorithm-label"),
                value: "{algorithm}",
                onchange: move |evt: FormEvent| algorithm.set(evt.value()),
                option { value: "", {t!("form-auto-select")} }
                for name in choices {
                    option { key: "{name}", value: "{name}", "{name}" }
                }
            }

            button {
                class: "upload-form__submit",
                r#type: "submit",
                disabled: training,
                title: t!("form-train-title"),
                if training {
                    {t!("form-training")}
                } else {
                    {t!("form-train")}
                }
            }

            if let FormStatus::Error(message) = status() {
                p { class: "upload-form__error", role: "alert", "{message}" }
            }
        }
    }
}

fn task_label(kind: TaskKind) -> String {
    match kind {
        TaskKind::Classification => t!("task-classification"),
        TaskKind::Regression => t!("task-regression"),
        TaskKind::Clustering => t!("task-clustering"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn csv() -> SelectedFile {
        SelectedFile {
            name: "iris.csv".into(),
            bytes: b"a,b\n1,2\n".to_vec(),
        }
    }

    #[test]
    fn no_file_means_no_request() {
        assert!(build_request(None, TaskKind::Regression, "").is_none());
    }

    #[test]
    fn blank_algorithm_is_auto_select() {
        let file = csv();
        let request = build_request(Some(&file), TaskKind::Clustering, "  ").unwrap();
        assert_eq!(request.task, "clustering");
        assert_eq!(request.algorithm, None);
        assert_eq!(request.file_name, "iris.csv");
    }

    #[test]
    fn chosen_algorithm_is_sent() {
        let file = csv();
        let request = build_request(Some(&file), TaskKind::Classification, "SVM").unwrap();
        assert_eq!(request.algorithm.as_deref(), Some("SVM"));
        assert_eq!(request.bytes, file.bytes);
    }
}
