//! API Response Handler
//!
//! Applies responses from the background API worker to the model.

use tracing::{debug, error, info, warn};

use crate::logic::errors::{classify_error, format_error_message};
use crate::services::ApiResponse;
use crate::App;

/// Shown in the blocking alert when a stop request fails
pub const STOP_FAILED_ALERT: &str = "Failed to stop sync process";

/// Handle API response from background service
///
/// Response types:
/// - StatusResult: A snapshot (or failure) for a sequenced status request
/// - StartResult: Acknowledgement of `POST /sync`
/// - StopResult: Acknowledgement of `POST /sync/stop`
pub fn handle_api_response(app: &mut App, response: ApiResponse) {
    match response {
        ApiResponse::StatusResult { token, status } => match status {
            Ok(status) => {
                if !app.model.sync.apply_snapshot(token, status) {
                    debug!(
                        token,
                        last_applied = app.model.sync.gate.last_applied(),
                        "Discarding stale status response"
                    );
                }
            }
            Err(e) => {
                let applied = app.model.sync.record_failure(
                    token,
                    classify_error(&e),
                    format_error_message(&e),
                );
                if applied {
                    // Last-known values stay on screen until the next good poll
                    warn!("Error fetching status: {:#}", e);
                } else {
                    debug!(token, "Ignoring stale status failure: {:#}", e);
                }
            }
        },

        ApiResponse::StartResult { result } => {
            app.model.sync.start_pending = false;
            match result {
                Ok(ack) => {
                    info!(message = ?ack.message, "Sync start acknowledged");
                    app.model
                        .show_toast(ack.message.unwrap_or_else(|| "Sync started".to_string()));
                }
                Err(e) => {
                    app.model.show_toast(format!(
                        "{} Failed to start sync: {}",
                        crate::logic::ui::ERROR_PREFIX,
                        format_error_message(&e)
                    ));
                }
            }
        }

        ApiResponse::StopResult { result } => {
            app.model.sync.stop_pending = false;
            match result {
                Ok(ack) => {
                    info!(message = ?ack.message, "Sync stop acknowledged");
                    app.refresh_status();
                }
                Err(e) => {
                    error!("Error stopping sync: {:#}", e);
                    app.model.ui.show_alert(format!(
                        "{}\n\n{}",
                        STOP_FAILED_ALERT,
                        format_error_message(&e)
                    ));
                }
            }
        }
    }
}
