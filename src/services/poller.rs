//! Repeating status poll
//!
//! `StatusPoller` owns the timer task that asks the API worker for a fresh
//! status on a fixed interval. The first request goes out immediately so the
//! screen is populated before the first interval elapses.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info};

use super::api::ApiRequest;

pub struct StatusPoller {
    period: Duration,
    handle: Option<JoinHandle<()>>,
}

impl StatusPoller {
    /// Start polling. Must be called from within a tokio runtime.
    pub fn start(request_tx: mpsc::UnboundedSender<ApiRequest>, period: Duration) -> Self {
        info!(?period, "Starting status poller");

        let handle = tokio::spawn(async move {
            let mut ticker = interval(period);
            // A stalled loop should not fire a burst of catch-up polls
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                // The first tick completes immediately
                ticker.tick().await;
                if request_tx.send(ApiRequest::FetchStatus).is_err() {
                    debug!("API service gone, poller exiting");
                    break;
                }
            }
        });

        Self {
            period,
            handle: Some(handle),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Stop the timer. Safe to call more than once.
    pub fn dispose(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            info!("Status poller disposed");
        }
    }
}

impl Drop for StatusPoller {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_first_poll_is_immediate() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let _poller = StatusPoller::start(tx, Duration::from_secs(2));

        let first = tokio::time::timeout(Duration::from_millis(10), rx.recv()).await;
        assert_eq!(first.unwrap(), Some(ApiRequest::FetchStatus));
    }

    #[tokio::test(start_paused = true)]
    async fn test_polls_on_interval() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let _poller = StatusPoller::start(tx, Duration::from_millis(500));

        for _ in 0..3 {
            assert_eq!(rx.recv().await, Some(ApiRequest::FetchStatus));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_dispose_stops_polling() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut poller = StatusPoller::start(tx, Duration::from_millis(500));

        assert_eq!(rx.recv().await, Some(ApiRequest::FetchStatus));
        poller.dispose();
        poller.dispose();

        // The sender was owned by the aborted task, so the channel closes
        assert_eq!(rx.recv().await, None);
        assert!(!poller.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_poller_exits_when_receiver_dropped() {
        let (tx, rx) = mpsc::unbounded_channel();
        let poller = StatusPoller::start(tx, Duration::from_millis(100));
        drop(rx);

        tokio::time::sleep(Duration::from_millis(350)).await;
        assert!(!poller.is_running());
    }
}
