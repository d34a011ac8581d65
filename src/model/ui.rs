//! UI Model
//!
//! This sub-model contains all state related to the user interface:
//! the blocking alert, toast notifications, and quit state.

use std::time::Instant;

#[derive(Clone, Debug)]
pub struct UiModel {
    /// Blocking alert; swallows input until dismissed
    pub alert: Option<String>,

    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new() -> Self {
        Self {
            alert: None,
            toast_message: None,
            should_quit: false,
        }
    }

    /// Check if any modal dialog is currently showing
    pub fn has_modal(&self) -> bool {
        self.alert.is_some()
    }

    pub fn show_alert(&mut self, message: String) {
        self.alert = Some(message);
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    /// Check if toast has been up long enough to go away
    pub fn should_dismiss_toast(&self) -> bool {
        if let Some((message, timestamp)) = &self.toast_message {
            crate::logic::ui::should_dismiss_toast(message, timestamp.elapsed().as_millis())
        } else {
            false
        }
    }

    /// Dismiss toast message
    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }
}

impl Default for UiModel {
    fn default() -> Self {
        Self::new()
    }
}
