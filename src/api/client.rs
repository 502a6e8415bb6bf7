// src/api/client.rs
//! Blocking HTTP client for the analysis backend.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde_json::json;
use thiserror::Error;

use super::types::{AnalysisOptions, AnalysisReport, BrowsePayload, Drive};

const TIMEOUT_SECS: u64 = 120;

/// Failures surfaced to the state machines. Both variants recover locally
/// into the owning component's error state; neither is fatal.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The service answered with an explicit error field (invalid path,
    /// permission problem, analysis failure).
    #[error("{0}")]
    Backend(String),
    /// The request itself failed, or the body could not be understood.
    #[error("Error: {0}")]
    Transport(String),
}

impl ApiError {
    pub(crate) fn transport(err: impl std::fmt::Display) -> Self {
        ApiError::Transport(err.to_string())
    }
}

/// Probe for the error field the service puts in failing bodies.
#[derive(serde::Deserialize)]
struct ErrorProbe {
    error: Option<String>,
}

pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    /// Build a client for the service at `base_url` (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .build()
            .map_err(ApiError::transport)?;
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Ok(Self { client, base_url })
    }

    /// List `path`. A backend error field becomes `ApiError::Backend`.
    pub fn browse(&self, path: &str) -> Result<BrowsePayload, ApiError> {
        let body = self.post("/browse", &json!({ "path": path }))?;
        decode(&body)
    }

    /// Enumerate top-level mount points.
    pub fn drives(&self) -> Result<Vec<Drive>, ApiError> {
        let url = format!("{}/get-drives", self.base_url);
        log::debug!("GET {url}");
        let response = self.client.get(&url).send().map_err(ApiError::transport)?;
        let body = response.text().map_err(ApiError::transport)?;
        decode(&body)
    }

    /// Run a token analysis of `directory` with the given exclusions.
    pub fn analyze(
        &self,
        directory: &str,
        options: AnalysisOptions,
    ) -> Result<AnalysisReport, ApiError> {
        let body = self.post(
            "/analyze",
            &json!({ "directory": directory, "options": options }),
        )?;
        decode(&body)
    }

    /// POST a JSON body and return the raw response text. The service
    /// reports domain errors in the body, so status codes are not checked
    /// here; `decode` folds the error field instead.
    fn post(&self, route: &str, body: &serde_json::Value) -> Result<String, ApiError> {
        let url = format!("{}{}", self.base_url, route);
        log::debug!("POST {url}");
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .map_err(ApiError::transport)?;
        response.text().map_err(ApiError::transport)
    }
}

/// Fold a response body into the expected payload or the error taxonomy:
/// an explicit error field wins, anything undecodable is a transport
/// failure.
fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    if let Ok(ErrorProbe { error: Some(error) }) = serde_json::from_str::<ErrorProbe>(body) {
        return Err(ApiError::Backend(error));
    }
    serde_json::from_str(body).map_err(|err| ApiError::transport(format!("bad response: {err}")))
}
