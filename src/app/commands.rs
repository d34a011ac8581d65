use tracing::{info, warn};

use crate::services::ApiRequest;
use crate::App;

impl App {
    fn send_request(&self, request: ApiRequest) {
        if self.api_tx.send(request).is_err() {
            warn!(?request, "API service is not running, request dropped");
        }
    }

    /// Ask for a fresh status outside the timer cadence
    pub fn refresh_status(&mut self) {
        self.send_request(ApiRequest::FetchStatus);
    }

    /// Request a sync run and refresh right away, without waiting for the acknowledgement
    pub fn start_sync(&mut self) {
        info!("Starting sync");
        self.model.sync.start_pending = true;
        self.send_request(ApiRequest::StartSync);
        self.refresh_status();
    }

    /// Request a stop; the refresh happens once the service confirms
    pub fn stop_sync(&mut self) {
        info!("Stopping sync");
        self.model.sync.stop_pending = true;
        self.send_request(ApiRequest::StopSync);
    }
}
