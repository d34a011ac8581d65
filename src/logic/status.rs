//! Status presentation logic
//!
//! Pure functions mapping a `SyncStatus` snapshot onto what the panel shows:
//! label text and color, the two info labels, control enablement and progress.

use crate::api::SyncStatus;

/// `last_status` value that counts as a successful run
pub const SUCCESS_MARKER: &str = "success";

/// Semantic color of the status label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelColor {
    Red,
    Green,
    /// Running flag unknown and last run not a success
    Neutral,
}

/// Which controls can be triggered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub start_enabled: bool,
    pub stop_enabled: bool,
}

impl Controls {
    /// Nothing is actionable before the first snapshot arrives
    pub const DISABLED: Controls = Controls {
        start_enabled: false,
        stop_enabled: false,
    };
}

/// Everything the status panel renders, derived from one snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct StatusView {
    pub label: String,
    pub color: LabelColor,
    pub last_sync: String,
    pub current_operation: String,
    pub controls: Controls,
    /// Rounded percentage as received
    pub progress_percent: i64,
    /// Gauge fill, clamped to 0.0..=1.0
    pub progress_ratio: f64,
}

impl StatusView {
    pub fn from_snapshot(status: &SyncStatus) -> Self {
        Self {
            label: status_label(status),
            color: status_color(status),
            last_sync: last_sync_label(status),
            current_operation: current_operation_label(status),
            controls: controls(status),
            progress_percent: round_progress(status.progress),
            progress_ratio: progress_ratio(status.progress),
        }
    }

    pub fn progress_text(&self) -> String {
        format!("{}%", self.progress_percent)
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Upper-case the first character, leave the rest untouched
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// "Running", else the capitalized last outcome, else "Not Running"
pub fn status_label(status: &SyncStatus) -> String {
    if status.running() {
        return "Running".to_string();
    }
    match status.last_status.as_deref() {
        Some(last) => capitalize_first(last),
        None => "Not Running".to_string(),
    }
}

/// Red for an explicit stop, then green for running or a successful last run.
///
/// Both rules are evaluated in order and the later one wins, so a stopped job
/// whose last run succeeded ends up green.
pub fn status_color(status: &SyncStatus) -> LabelColor {
    let mut color = LabelColor::Neutral;
    if status.is_running == Some(false) {
        color = LabelColor::Red;
    }
    if status.is_running == Some(true) || status.last_status.as_deref() == Some(SUCCESS_MARKER) {
        color = LabelColor::Green;
    }
    color
}

pub fn last_sync_label(status: &SyncStatus) -> String {
    present(&status.last_sync).unwrap_or("Never").to_string()
}

pub fn current_operation_label(status: &SyncStatus) -> String {
    present(&status.current_operation).unwrap_or("None").to_string()
}

pub fn controls(status: &SyncStatus) -> Controls {
    let running = status.running();
    Controls {
        start_enabled: !running,
        stop_enabled: running,
    }
}

/// Round half away from zero; non-finite input renders as 0
pub fn round_progress(progress: f64) -> i64 {
    if progress.is_finite() {
        progress.round() as i64
    } else {
        0
    }
}

pub fn progress_ratio(progress: f64) -> f64 {
    if progress.is_finite() {
        (progress / 100.0).clamp(0.0, 1.0)
    } else {
        0.0
    }
}
