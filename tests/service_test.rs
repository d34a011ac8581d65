//! End-to-end tests through the real API worker and poller
//!
//! A scripted `SyncApi` stands in for the sync service and counts calls.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use syncpanel::api::{ApiError, CommandAck, SyncApi, SyncStatus, START_PATH};
use syncpanel::App;

#[derive(Default)]
struct ScriptedApi {
    statuses: Mutex<VecDeque<anyhow::Result<SyncStatus>>>,
    fail_start: bool,
    status_calls: AtomicUsize,
    start_calls: AtomicUsize,
    stop_calls: AtomicUsize,
}

impl ScriptedApi {
    fn with_statuses(statuses: Vec<anyhow::Result<SyncStatus>>) -> Self {
        Self {
            statuses: Mutex::new(statuses.into()),
            ..Default::default()
        }
    }
}

#[async_trait]
impl SyncApi for ScriptedApi {
    async fn get_status(&self) -> anyhow::Result<SyncStatus> {
        self.status_calls.fetch_add(1, Ordering::SeqCst);
        self.statuses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(anyhow::anyhow!("script exhausted")))
    }

    async fn start_sync(&self) -> anyhow::Result<CommandAck> {
        self.start_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_start {
            return Err(ApiError::Status {
                endpoint: START_PATH,
                status: 400,
                detail: "Sync is already running".to_string(),
            }
            .into());
        }
        Ok(CommandAck {
            status: Some("success".to_string()),
            message: Some("Sync requested".to_string()),
        })
    }

    async fn stop_sync(&self) -> anyhow::Result<CommandAck> {
        self.stop_calls.fetch_add(1, Ordering::SeqCst);
        Ok(CommandAck::default())
    }
}

fn idle() -> SyncStatus {
    SyncStatus {
        is_running: Some(false),
        last_status: None,
        last_sync: None,
        current_operation: None,
        progress: 0.0,
    }
}

fn running() -> SyncStatus {
    SyncStatus {
        is_running: Some(true),
        last_status: None,
        last_sync: None,
        current_operation: Some("Starting sync process".to_string()),
        progress: 0.0,
    }
}

async fn next(app: &mut App) {
    let handled = tokio::time::timeout(Duration::from_secs(5), app.process_next_response())
        .await
        .expect("response in time");
    assert!(handled);
}

/// Test: The screen is populated by the startup poll, before any interval elapses
#[tokio::test]
async fn test_initial_poll_populates_view() {
    let api = Arc::new(ScriptedApi::with_statuses(vec![Ok(idle())]));
    let mut app = App::connect(api.clone(), "http://test", Duration::from_secs(3600));

    next(&mut app).await;

    let view = app.model.sync.view.as_ref().unwrap();
    assert_eq!(view.label, "Not Running");
    assert_eq!(view.last_sync, "Never");
    assert_eq!(api.status_calls.load(Ordering::SeqCst), 1);
    app.stop_polling();
}

/// Test: Start hits the service once and refreshes once, even when rejected
#[tokio::test]
async fn test_start_round_trip() {
    for fail_start in [false, true] {
        let api = Arc::new(ScriptedApi {
            statuses: Mutex::new(vec![Ok(idle()), Ok(running())].into()),
            fail_start,
            ..Default::default()
        });
        let mut app = App::connect(api.clone(), "http://test", Duration::from_secs(3600));
        next(&mut app).await;

        app.start_sync();
        // Start ack and the refreshed status, in whichever order they land
        next(&mut app).await;
        next(&mut app).await;

        assert_eq!(api.start_calls.load(Ordering::SeqCst), 1);
        assert_eq!(api.status_calls.load(Ordering::SeqCst), 2);
        assert_eq!(app.model.sync.view.as_ref().unwrap().label, "Running");

        let (toast, _) = app.model.ui.toast_message.clone().unwrap();
        if fail_start {
            assert!(toast.contains("Sync is already running"));
        } else {
            assert_eq!(toast, "Sync requested");
        }
        app.stop_polling();
    }
}

/// Test: A successful stop is followed by a fresh status fetch
#[tokio::test]
async fn test_stop_round_trip() {
    let stopped = SyncStatus {
        last_status: Some("cancelled".to_string()),
        ..idle()
    };
    let api = Arc::new(ScriptedApi::with_statuses(vec![Ok(running()), Ok(stopped)]));
    let mut app = App::connect(api.clone(), "http://test", Duration::from_secs(3600));
    next(&mut app).await;

    app.stop_sync();
    next(&mut app).await; // stop ack, which issues the refresh
    next(&mut app).await; // refreshed status

    assert_eq!(api.stop_calls.load(Ordering::SeqCst), 1);
    assert_eq!(api.status_calls.load(Ordering::SeqCst), 2);
    let view = app.model.sync.view.as_ref().unwrap();
    assert_eq!(view.label, "Cancelled");
    assert!(view.controls.start_enabled);
    app.stop_polling();
}

/// Test: Polling keeps going after a failed fetch
#[tokio::test(start_paused = true)]
async fn test_polling_continues_after_failure() {
    let api = Arc::new(ScriptedApi::with_statuses(vec![
        Err(anyhow::anyhow!("connection refused")),
        Ok(running()),
    ]));
    let mut app = App::connect(api.clone(), "http://test", Duration::from_millis(500));

    next(&mut app).await;
    assert!(app.model.sync.view.is_none());

    next(&mut app).await;
    assert_eq!(app.model.sync.view.as_ref().unwrap().label, "Running");
    assert!(api.status_calls.load(Ordering::SeqCst) >= 2);
    app.stop_polling();
}
