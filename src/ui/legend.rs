use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::logic::status::Controls;

fn hotkey(key: &'static str, label: &'static str, enabled: bool) -> [Span<'static>; 2] {
    if enabled {
        [
            Span::styled(key, Style::default().fg(Color::Yellow)),
            Span::raw(label),
        ]
    } else {
        // Disabled controls stay visible but dimmed
        let dim = Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT);
        [Span::styled(key, dim), Span::styled(label, dim)]
    }
}

/// Build hotkey spans (extracted for testability)
pub fn build_hotkey_spans(controls: Controls, alert_open: bool) -> Vec<Span<'static>> {
    if alert_open {
        return hotkey("Enter", ":Dismiss", true).into();
    }

    let mut spans = vec![];
    spans.extend(hotkey("s", ":Start Sync  ", controls.start_enabled));
    spans.extend(hotkey("x", ":Stop Sync  ", controls.stop_enabled));
    spans.extend(hotkey("r", ":Refresh  ", true));
    spans.extend(hotkey("q", ":Quit", true));
    spans
}

/// Render the hotkey legend
pub fn render_legend(f: &mut Frame, area: Rect, controls: Controls, alert_open: bool) {
    let legend = Paragraph::new(Line::from(build_hotkey_spans(controls, alert_open)))
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .style(Style::default().fg(Color::Gray));
    f.render_widget(legend, area);
}
