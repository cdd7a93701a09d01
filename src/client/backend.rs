use super::error::ClientError;
use super::messages::{StatusResponse, TranscriptionSet};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Client-side view of the recording backend.
///
/// The session controller talks to the backend only through this trait, so
/// tests can swap in an in-memory fake without a live service.
#[async_trait]
pub trait BackendClient: Send + Sync {
    /// POST /start - begin a recording session
    async fn start(&self) -> Result<StatusResponse, ClientError>;

    /// POST /stop - end the recording session
    async fn stop(&self) -> Result<StatusResponse, ClientError>;

    /// GET /transcribe - fetch the current transcription snapshot
    async fn transcriptions(&self) -> Result<TranscriptionSet, ClientError>;
}

/// HTTP implementation against the local backend service
pub struct HttpBackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpBackendClient {
    pub fn new(base_url: &str) -> Result<Self> {
        // Without an explicit timeout a wedged backend can hang a control
        // request indefinitely.
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Send a request and decode the JSON response, mapping each stage of
    /// the pipeline onto the client error taxonomy
    async fn fetch_json<T: serde::de::DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let resp = req
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| ClientError::Body(e.to_string()))
    }

    async fn post_control(&self, path: &str) -> Result<StatusResponse, ClientError> {
        let url = self.endpoint(path);
        debug!("POST {}", url);
        self.fetch_json(self.http.post(&url)).await
    }
}

#[async_trait]
impl BackendClient for HttpBackendClient {
    async fn start(&self) -> Result<StatusResponse, ClientError> {
        self.post_control("/start").await
    }

    async fn stop(&self) -> Result<StatusResponse, ClientError> {
        self.post_control("/stop").await
    }

    async fn transcriptions(&self) -> Result<TranscriptionSet, ClientError> {
        let url = self.endpoint("/transcribe");
        debug!("GET {}", url);
        self.fetch_json(self.http.get(&url)).await
    }
}
