use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};

/// Snapshot of the sync job as reported by `GET /sync/status`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SyncStatus {
    /// `None` when the server omits the flag (or sends `null`)
    #[serde(default)]
    pub is_running: Option<bool>,
    #[serde(default)]
    pub last_status: Option<String>,
    #[serde(default)]
    pub last_sync: Option<String>,
    #[serde(default)]
    pub current_operation: Option<String>,
    #[serde(default)]
    pub progress: f64,
}

impl SyncStatus {
    /// Running flag with the unknown state folded into "not running"
    pub fn running(&self) -> bool {
        self.is_running.unwrap_or(false)
    }
}

/// Acknowledgement body returned by the control endpoints
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CommandAck {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body of a rejected request (`{"detail": "..."}`)
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

/// A non-success HTTP response from the sync service
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{endpoint} returned {status}: {detail}")]
    Status {
        endpoint: &'static str,
        status: u16,
        detail: String,
    },
}

impl ApiError {
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::Status { status, .. } => *status,
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            ApiError::Status { detail, .. } => detail,
        }
    }
}

pub const STATUS_PATH: &str = "/sync/status";
pub const START_PATH: &str = "/sync";
pub const STOP_PATH: &str = "/sync/stop";

/// The three operations the panel needs from the sync service
#[async_trait]
pub trait SyncApi: Send + Sync {
    /// Fetch the current job status
    async fn get_status(&self) -> Result<SyncStatus>;

    /// Ask the service to start a sync run
    async fn start_sync(&self) -> Result<CommandAck>;

    /// Ask the service to stop the active run
    async fn stop_sync(&self) -> Result<CommandAck>;
}

#[derive(Clone)]
pub struct SyncClient {
    base_url: String,
    client: Client,
}

impl SyncClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turn a non-2xx response into an `ApiError`, keeping the server's detail text
    async fn check_status(endpoint: &'static str, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            endpoint,
            status: status.as_u16(),
            detail: extract_detail(&body)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string()),
        }
        .into())
    }

    async fn post_command(&self, endpoint: &'static str) -> Result<CommandAck> {
        let response = self
            .client
            .post(self.url(endpoint))
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", endpoint))?;

        let response = Self::check_status(endpoint, response).await?;

        // The body is informational only; an empty or foreign body still counts as success
        let body = response.text().await.unwrap_or_default();
        Ok(serde_json::from_str(&body).unwrap_or_default())
    }
}

#[async_trait]
impl SyncApi for SyncClient {
    async fn get_status(&self) -> Result<SyncStatus> {
        let response = self
            .client
            .get(self.url(STATUS_PATH))
            .send()
            .await
            .context("Failed to fetch sync status")?;

        let response = Self::check_status(STATUS_PATH, response).await?;

        let status = response
            .json::<SyncStatus>()
            .await
            .context("Failed to decode sync status")?;

        Ok(status)
    }

    async fn start_sync(&self) -> Result<CommandAck> {
        self.post_command(START_PATH).await
    }

    async fn stop_sync(&self) -> Result<CommandAck> {
        self.post_command(STOP_PATH).await
    }
}

/// Pull a readable message out of a `{"detail": ...}` error body
pub fn extract_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail {
        serde_json::Value::String(s) if !s.is_empty() => Some(s),
        serde_json::Value::Null => None,
        other => Some(other.to_string()),
    }
}
