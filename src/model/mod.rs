//! Pure Application Model
//!
//! This module defines the cloneable state for the panel:
//!
//! - **SyncModel**: What the sync service told us (snapshot, view, connection)
//! - **UiModel**: Alert, toast, quit flag
//!
//! No services live here; all I/O happens in `services` and `App`.

pub mod sync;
pub mod ui;

pub use sync::{ConnectionState, SyncModel};
pub use ui::UiModel;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug, Default)]
pub struct Model {
    /// Sync service data
    pub sync: SyncModel,

    /// UI state
    pub ui: UiModel,
}

impl Model {
    pub fn new() -> Self {
        Self {
            sync: SyncModel::new(),
            ui: UiModel::new(),
        }
    }

    /// Check if any modal dialog is showing
    pub fn has_modal(&self) -> bool {
        self.ui.has_modal()
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.ui.show_toast(message);
    }

    /// Dismiss the toast once its time is up
    pub fn expire_toast(&mut self) {
        if self.ui.should_dismiss_toast() {
            self.ui.dismiss_toast();
        }
    }
}
