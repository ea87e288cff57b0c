//! HTTP client for the AutoML training backend.
//!
//! The backend exposes two endpoints:
//! - `GET /models` – algorithm names available per task
//! - `POST /train` – multipart upload (`file`, `task`, optional `algorithm`)
//!   answering with the result payload rendered by the `ui` crate.

mod client;
mod config;
mod error;
mod models;

pub use client::{BackendClient, TrainRequest};
pub use config::{ApiConfig, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use models::ModelCatalog;
