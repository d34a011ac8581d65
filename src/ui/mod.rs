// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (bars, panels, overlays)
// - render: Main orchestration function that coordinates all rendering
// - system_bar: Top bar (server, connection state, last update, poll period)
// - status_panel: Status label, last sync, current operation, progress gauge
// - legend: Hotkey legend with disabled controls dimmed
// - dialogs: Blocking alert dialog
// - toast: Toast notifications (brief pop-up messages)

pub mod dialogs;
pub mod layout;
pub mod legend;
pub mod render;
pub mod status_panel;
pub mod system_bar;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
