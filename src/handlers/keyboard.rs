//! Keyboard Input Handler
//!
//! Maps key presses onto panel commands. A disabled control ignores its key
//! the same way a disabled button ignores clicks.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::App;

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Only react to presses (Windows also reports releases)
    if key.kind == KeyEventKind::Release {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    // A blocking alert swallows everything until dismissed
    if app.model.has_modal() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            app.model.ui.dismiss_alert();
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),

        KeyCode::Char('r') => app.refresh_status(),

        KeyCode::Char('s') => {
            if app.model.sync.controls().start_enabled && !app.model.sync.start_pending {
                app.start_sync();
            } else {
                let reason = unavailable_reason(app, "Start");
                app.model.show_toast(reason);
            }
        }

        KeyCode::Char('x') => {
            if app.model.sync.controls().stop_enabled && !app.model.sync.stop_pending {
                app.stop_sync();
            } else {
                let reason = unavailable_reason(app, "Stop");
                app.model.show_toast(reason);
            }
        }

        _ => {}
    }
}

fn unavailable_reason(app: &App, action: &str) -> String {
    let sync = &app.model.sync;
    if sync.snapshot.is_none() {
        format!("{} unavailable: status not loaded yet", action)
    } else if action == "Start" && sync.start_pending {
        "Start already requested".to_string()
    } else if action == "Stop" && sync.stop_pending {
        "Stop already requested".to_string()
    } else if sync.controls().stop_enabled {
        format!("{} unavailable: sync is running", action)
    } else {
        format!("{} unavailable: no sync is running", action)
    }
}
