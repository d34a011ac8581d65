use ratatui::Frame;

use super::{dialogs, layout, legend, status_panel, system_bar, toast};
use crate::App;

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &App) {
    let model = &app.model;
    let area = f.area();
    let layout_info = layout::calculate_layout(area);

    system_bar::render_system_bar(
        f,
        layout_info.system_area,
        app.base_url(),
        &model.sync.connection_state,
        model.sync.last_updated.as_ref(),
        app.poll_interval(),
    );

    let view = model.sync.view.as_ref();
    status_panel::render_status_panel(f, layout_info.status_area, view);
    status_panel::render_progress(f, layout_info.progress_area, view);

    legend::render_legend(
        f,
        layout_info.legend_area,
        model.sync.controls(),
        model.has_modal(),
    );

    if let Some((message, _)) = &model.ui.toast_message {
        toast::render_toast(f, area, message);
    }

    // Alert goes last so it sits above everything else
    if let Some(message) = &model.ui.alert {
        dialogs::render_alert(f, message);
    }
}
