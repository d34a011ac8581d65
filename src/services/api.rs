use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::api::{CommandAck, SyncApi, SyncStatus};
use crate::logic::sequence::TokenIssuer;

/// API request types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiRequest {
    /// `GET /sync/status`; the worker attaches a sequence token
    FetchStatus,

    /// `POST /sync`
    StartSync,

    /// `POST /sync/stop`
    StopSync,
}

/// API response types
#[derive(Debug)]
pub enum ApiResponse {
    StatusResult {
        token: u64,
        status: Result<SyncStatus, anyhow::Error>,
    },

    StartResult {
        result: Result<CommandAck, anyhow::Error>,
    },

    StopResult {
        result: Result<CommandAck, anyhow::Error>,
    },
}

/// API service worker that executes requests in the background
pub struct ApiService {
    api: Arc<dyn SyncApi>,
    tokens: TokenIssuer,
    response_tx: mpsc::UnboundedSender<ApiResponse>,
}

impl ApiService {
    pub fn new(api: Arc<dyn SyncApi>, response_tx: mpsc::UnboundedSender<ApiResponse>) -> Self {
        Self {
            api,
            tokens: TokenIssuer::new(),
            response_tx,
        }
    }

    /// Start one request. Each runs in its own task so a slow poll never holds up a command.
    fn dispatch(&mut self, request: ApiRequest) {
        // Tokens follow acceptance order, which is the order requests were issued
        let token = match request {
            ApiRequest::FetchStatus => self.tokens.issue(),
            _ => 0,
        };

        let api = Arc::clone(&self.api);
        let response_tx = self.response_tx.clone();

        tokio::spawn(async move {
            let response = Self::execute_request(api.as_ref(), request, token).await;
            if response_tx.send(response).is_err() {
                debug!(?request, "Response dropped, UI loop is gone");
            }
        });
    }

    /// Execute an API request and return the response
    async fn execute_request(api: &dyn SyncApi, request: ApiRequest, token: u64) -> ApiResponse {
        match request {
            ApiRequest::FetchStatus => {
                let status = api.get_status().await;
                if let Err(e) = &status {
                    debug!(token, "Status fetch failed: {:#}", e);
                }
                ApiResponse::StatusResult { token, status }
            }

            ApiRequest::StartSync => {
                let result = api.start_sync().await;
                if let Err(e) = &result {
                    warn!("Start request failed: {:#}", e);
                }
                ApiResponse::StartResult { result }
            }

            ApiRequest::StopSync => {
                let result = api.stop_sync().await;
                if let Err(e) = &result {
                    warn!("Stop request failed: {:#}", e);
                }
                ApiResponse::StopResult { result }
            }
        }
    }
}

/// Spawn the API service worker
///
/// The worker runs until every request sender is dropped.
pub fn spawn_api_service(
    api: Arc<dyn SyncApi>,
) -> (
    mpsc::UnboundedSender<ApiRequest>,
    mpsc::UnboundedReceiver<ApiResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<ApiRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<ApiResponse>();

    tokio::spawn(async move {
        let mut service = ApiService::new(api, response_tx);

        while let Some(request) = request_rx.recv().await {
            service.dispatch(request);
        }

        debug!("API service stopped");
    });

    (request_tx, response_rx)
}
