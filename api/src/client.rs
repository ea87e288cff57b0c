use reqwest::multipart::{Form, Part};
use serde_json::Value;
use tracing::{debug, warn};

use crate::{config::ApiConfig, error::ApiError, models::ModelCatalog};

/// Everything `POST /train` needs for one training run.
#[derive(Debug, Clone)]
pub struct TrainRequest {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub task: String,
    /// `None` or blank lets the backend auto-select.
    pub algorithm: Option<String>,
}

impl TrainRequest {
    pub fn chosen_algorithm(&self) -> Option<&str> {
        self.algorithm
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    fn into_form(self) -> Result<Form, ApiError> {
        let algorithm = self.chosen_algorithm().map(str::to_string);
        let file = Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str("text/csv")?;

        let mut form = Form::new().part("file", file).text("task", self.task);
        if let Some(algorithm) = algorithm {
            form = form.text("algorithm", algorithm);
        }
        Ok(form)
    }
}

#[derive(Debug, Clone)]
pub struct BackendClient {
    config: ApiConfig,
    http: reqwest::Client,
}

impl BackendClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env())
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub async fn list_models(&self) -> Result<ModelCatalog, ApiError> {
        let url = self.config.endpoint("models");
        debug!(%url, "fetching model catalog");
        let response = self.http.get(&url).send().await?;
        let body = checked_body(response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Upload a dataset and return the raw result payload untouched.
    pub async fn train(&self, request: TrainRequest) -> Result<Value, ApiError> {
        let url = self.config.endpoint("train");
        debug!(
            %url,
            task = %request.task,
            algorithm = request.chosen_algorithm().unwrap_or("auto"),
            bytes = request.bytes.len(),
            "submitting training run"
        );
        let form = request.into_form()?;
        let response = self.http.post(&url).multipart(form).send().await?;
        let body = checked_body(response).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

async fn checked_body(response: reqwest::Response) -> Result<String, ApiError> {
    let status = response.status();
    let body = response.text().await?;
    if status.is_success() {
        Ok(body)
    } else {
        warn!(status = status.as_u16(), %body, "backend rejected request");
        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(algorithm: Option<&str>) -> TrainRequest {
        TrainRequest {
            file_name: "iris.csv".into(),
            bytes: b"a,b\n1,2\n".to_vec(),
            task: "classification".into(),
            algorithm: algorithm.map(str::to_string),
        }
    }

    #[test]
    fn blank_algorithm_means_auto_select() {
        assert_eq!(request(None).chosen_algorithm(), None);
        assert_eq!(request(Some("  ")).chosen_algorithm(), None);
        assert_eq!(
            request(Some(" KMeans ")).chosen_algorithm(),
            Some("KMeans")
        );
    }

    #[test]
    fn form_builds_for_csv_upload() {
        assert!(request(Some("SVC")).into_form().is_ok());
        assert!(request(None).into_form().is_ok());
    }

    #[test]
    fn client_keeps_configured_base() {
        let client = BackendClient::new(ApiConfig::new("http://backend:9000/"));
        assert_eq!(client.config().endpoint("models"), "http://backend:9000/models");
    }
}
