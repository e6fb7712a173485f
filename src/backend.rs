use anyhow::{Context, Result};
use axum::http::StatusCode;
use common::{PredictError, PredictionRequest, PredictionResult, PREDICT_PATH};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, instrument, warn};

#[derive(Error, Debug)]
pub enum BackendError {
    /// Connection refused, DNS failure, timeout...
    #[error("{0}")]
    Unreachable(#[source] reqwest::Error),

    /// The backend answered with something that is not JSON
    #[error("invalid response body ({status}): {source}")]
    InvalidBody {
        status: StatusCode,
        #[source]
        source: reqwest::Error,
    },
}

/// HTTP client for a service exposing `POST /predict`.
///
/// Used both to forward browser requests to the model server and by the
/// `predict` command to talk to a running StockCast host.
#[derive(Debug, Clone)]
pub struct PredictionBackend {
    http: reqwest::Client,
    base_url: String,
}

impl PredictionBackend {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build prediction backend http client")?;

        Ok(Self::from_client(http, base_url))
    }

    pub fn from_client(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn predict_url(&self) -> String {
        format!("{}{}", self.base_url, PREDICT_PATH)
    }

    /// Sends the request and returns the backend's status and JSON body
    /// untouched.
    #[instrument(skip(self), fields(url = %self.predict_url()))]
    pub async fn forward(&self, request: &PredictionRequest) -> Result<(StatusCode, Value), BackendError> {
        let response = self
            .http
            .post(self.predict_url())
            .json(request)
            .send()
            .await
            .map_err(BackendError::Unreachable)?;

        let status = response.status();
        debug!(%status, "Prediction backend responded");

        let body = response
            .json::<Value>()
            .await
            .map_err(|source| BackendError::InvalidBody { status, source })?;

        Ok((status, body))
    }

    /// Requests a prediction and splits the reply into the two error
    /// channels the browser uses.
    ///
    /// The status code is ignored: any well-formed body is decoded and its
    /// `success` flag decides.
    #[instrument(skip(self), fields(url = %self.predict_url()))]
    pub async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, PredictError> {
        let response = self
            .http
            .post(self.predict_url())
            .json(request)
            .send()
            .await
            .map_err(PredictError::network)?;

        if !response.status().is_success() {
            warn!(status = %response.status(), "Non-OK prediction response");
        }

        response
            .json::<PredictionResult>()
            .await
            .map_err(PredictError::network)?
            .into_outcome()
    }
}
