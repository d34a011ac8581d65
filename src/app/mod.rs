//! App Orchestration
//!
//! `App` ties the pure model to the background services. It owns the request
//! and response channels plus the `StatusPoller`, and is driven by the
//! terminal loop in `main.rs`.
//!
//! Methods are grouped by domain in submodules:
//! - commands: refresh/start/stop issued by the user or the poller

pub(crate) mod commands;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::debug;

use crate::api::SyncApi;
use crate::handlers;
use crate::model::Model;
use crate::services::{self, ApiRequest, ApiResponse, StatusPoller};

/// Upper bound of responses handled per frame so input stays responsive
pub const MAX_RESPONSES_PER_FRAME: usize = 50;

pub struct App {
    pub model: Model,

    api_tx: mpsc::UnboundedSender<ApiRequest>,
    api_rx: mpsc::UnboundedReceiver<ApiResponse>,
    poller: Option<StatusPoller>,
    base_url: String,
}

impl App {
    /// Build an app around existing channels; nothing is polled until `start_polling`
    pub fn new(
        base_url: impl Into<String>,
        api_tx: mpsc::UnboundedSender<ApiRequest>,
        api_rx: mpsc::UnboundedReceiver<ApiResponse>,
    ) -> Self {
        Self {
            model: Model::new(),
            api_tx,
            api_rx,
            poller: None,
            base_url: base_url.into(),
        }
    }

    /// Spawn the API worker for `api` and start polling it every `period`
    pub fn connect(api: Arc<dyn SyncApi>, base_url: impl Into<String>, period: Duration) -> Self {
        let (api_tx, api_rx) = services::spawn_api_service(api);
        let mut app = Self::new(base_url, api_tx, api_rx);
        app.start_polling(period);
        app
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Start (or restart) the repeating status poll
    pub fn start_polling(&mut self, period: Duration) {
        if let Some(mut old) = self.poller.take() {
            old.dispose();
        }
        self.poller = Some(StatusPoller::start(self.api_tx.clone(), period));
    }

    pub fn stop_polling(&mut self) {
        if let Some(mut poller) = self.poller.take() {
            poller.dispose();
        }
    }

    pub fn poll_interval(&self) -> Option<Duration> {
        self.poller.as_ref().map(StatusPoller::period)
    }

    /// Handle every response that has already arrived, without blocking
    pub fn process_responses(&mut self) -> usize {
        let mut handled = 0;
        while handled < MAX_RESPONSES_PER_FRAME {
            let Ok(response) = self.api_rx.try_recv() else {
                break;
            };
            handlers::handle_api_response(self, response);
            handled += 1;
        }
        handled
    }

    /// Wait for the next response and handle it. Returns false once the worker is gone.
    pub async fn process_next_response(&mut self) -> bool {
        match self.api_rx.recv().await {
            Some(response) => {
                handlers::handle_api_response(self, response);
                true
            }
            None => false,
        }
    }

    /// Per-frame housekeeping
    pub fn tick(&mut self) {
        self.model.expire_toast();
    }

    pub fn quit(&mut self) {
        debug!("Quit requested");
        self.stop_polling();
        self.model.ui.should_quit = true;
    }
}
