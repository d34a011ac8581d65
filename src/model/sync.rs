//! Sync Service Model
//!
//! This sub-model holds everything learned from the sync service:
//! the latest applied snapshot, its derived view, and connection health.

use chrono::{DateTime, Local};

use crate::api::SyncStatus;
use crate::logic::errors::ErrorType;
use crate::logic::sequence::ResponseGate;
use crate::logic::status::{Controls, StatusView};

/// Connection state for the sync service API
#[derive(Clone, Debug, PartialEq)]
pub enum ConnectionState {
    /// No response received yet
    Connecting,
    /// The last applied status request succeeded
    Connected,
    /// The last applied status request failed
    Disconnected {
        error_type: ErrorType,
        message: String,
    },
}

#[derive(Clone, Debug)]
pub struct SyncModel {
    /// Latest applied snapshot; replaced wholesale, never merged
    pub snapshot: Option<SyncStatus>,

    /// Presentation derived from `snapshot`
    pub view: Option<StatusView>,

    pub connection_state: ConnectionState,

    /// Local time the current snapshot was applied
    pub last_updated: Option<DateTime<Local>>,

    /// Newest status token that reached the model
    pub gate: ResponseGate,

    /// A stop request is in flight
    pub stop_pending: bool,

    /// A start request is in flight
    pub start_pending: bool,
}

impl SyncModel {
    pub fn new() -> Self {
        Self {
            snapshot: None,
            view: None,
            connection_state: ConnectionState::Connecting,
            last_updated: None,
            gate: ResponseGate::new(),
            stop_pending: false,
            start_pending: false,
        }
    }

    /// Replace the displayed state with a fresh snapshot.
    ///
    /// Returns false (and changes nothing) when a newer response was already applied.
    pub fn apply_snapshot(&mut self, token: u64, status: SyncStatus) -> bool {
        if !self.gate.admit(token) {
            return false;
        }
        self.view = Some(StatusView::from_snapshot(&status));
        self.snapshot = Some(status);
        self.connection_state = ConnectionState::Connected;
        self.last_updated = Some(Local::now());
        true
    }

    /// Record a failed status fetch. The view keeps its last-known values.
    pub fn record_failure(&mut self, token: u64, error_type: ErrorType, message: String) -> bool {
        if !self.gate.admit(token) {
            return false;
        }
        self.connection_state = ConnectionState::Disconnected {
            error_type,
            message,
        };
        true
    }

    pub fn controls(&self) -> Controls {
        self.view.as_ref().map(|v| v.controls).unwrap_or(Controls::DISABLED)
    }

    pub fn is_connected(&self) -> bool {
        self.connection_state == ConnectionState::Connected
    }
}

impl Default for SyncModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running(progress: f64) -> SyncStatus {
        SyncStatus {
            is_running: Some(true),
            last_status: None,
            last_sync: None,
            current_operation: Some("Syncing data...".to_string()),
            progress,
        }
    }

    #[test]
    fn test_sync_model_creation() {
        let model = SyncModel::new();
        assert!(model.snapshot.is_none());
        assert_eq!(model.connection_state, ConnectionState::Connecting);
        assert_eq!(model.controls(), Controls::DISABLED);
    }

    #[test]
    fn test_apply_snapshot_updates_view() {
        let mut model = SyncModel::new();
        assert!(model.apply_snapshot(1, running(10.0)));
        assert!(model.is_connected());
        assert!(model.last_updated.is_some());
        assert_eq!(model.view.as_ref().unwrap().progress_percent, 10);
        assert!(model.controls().stop_enabled);
    }

    #[test]
    fn test_stale_snapshot_ignored() {
        let mut model = SyncModel::new();
        assert!(model.apply_snapshot(2, running(80.0)));
        assert!(!model.apply_snapshot(1, running(20.0)));
        assert_eq!(model.view.as_ref().unwrap().progress_percent, 80);
    }

    #[test]
    fn test_failure_keeps_view() {
        let mut model = SyncModel::new();
        model.apply_snapshot(1, running(30.0));
        let before = model.view.clone();

        assert!(model.record_failure(2, ErrorType::Timeout, "timed out".to_string()));
        assert_eq!(model.view, before);
        assert!(matches!(
            model.connection_state,
            ConnectionState::Disconnected { error_type: ErrorType::Timeout, .. }
        ));
    }

    #[test]
    fn test_stale_failure_ignored() {
        let mut model = SyncModel::new();
        model.apply_snapshot(3, running(30.0));
        assert!(!model.record_failure(2, ErrorType::Other, "late".to_string()));
        assert!(model.is_connected());
    }
}
