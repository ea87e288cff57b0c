//! Backend location settings.

/// Used when `AUTOML_API_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let raw = base_url.into();
        let trimmed = raw.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() {
            DEFAULT_BASE_URL.to_string()
        } else {
            trimmed.to_string()
        };
        Self { base_url }
    }

    /// Resolve the backend URL from `AUTOML_API_URL`.
    ///
    /// Browsers have no process environment, so wasm builds bake the value in
    /// at compile time instead.
    pub fn from_env() -> Self {
        Self::new(lookup_env().unwrap_or_else(|| DEFAULT_BASE_URL.to_string()))
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(target_arch = "wasm32")]
fn lookup_env() -> Option<String> {
    option_env!("AUTOML_API_URL").map(str::to_string)
}

#[cfg(not(target_arch = "wasm32"))]
fn lookup_env() -> Option<String> {
    std::env::var("AUTOML_API_URL").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed() {
        let config = ApiConfig::new("https://ml.example.org/api///");
        assert_eq!(config.base_url, "https://ml.example.org/api");
        assert_eq!(config.endpoint("/train"), "https://ml.example.org/api/train");
    }

    #[test]
    fn blank_url_falls_back_to_default() {
        assert_eq!(ApiConfig::new("   ").base_url, DEFAULT_BASE_URL);
        assert_eq!(ApiConfig::default().endpoint("models"), "http://localhost:8000/models");
    }
}
