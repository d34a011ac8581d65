use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::logic::status::{LabelColor, StatusView};

/// Terminal color for a status label color
pub fn label_color(color: LabelColor) -> Color {
    match color {
        LabelColor::Red => Color::Red,
        LabelColor::Green => Color::Green,
        LabelColor::Neutral => Color::Yellow,
    }
}

fn field<'a>(label: &'a str, value: Span<'a>) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:<20}", label), Style::default().fg(Color::Gray)),
        value,
    ])
}

/// Render status label, last sync and current operation
///
/// Before the first snapshot the fields show placeholders.
pub fn render_status_panel(f: &mut Frame, area: Rect, view: Option<&StatusView>) {
    let lines = match view {
        Some(view) => vec![
            Line::raw(""),
            field(
                "Status:",
                Span::styled(
                    view.label.as_str(),
                    Style::default()
                        .fg(label_color(view.color))
                        .add_modifier(Modifier::BOLD),
                ),
            ),
            field("Last sync:", Span::raw(view.last_sync.as_str())),
            field("Current operation:", Span::raw(view.current_operation.as_str())),
        ],
        None => vec![
            Line::raw(""),
            field(
                "Status:",
                Span::styled("Loading...", Style::default().fg(Color::DarkGray)),
            ),
            field("Last sync:", Span::raw("-")),
            field("Current operation:", Span::raw("-")),
        ],
    };

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Sync Status"),
    );

    f.render_widget(panel, area);
}

/// Render the progress bar; its label is the rounded percentage
pub fn render_progress(f: &mut Frame, area: Rect, view: Option<&StatusView>) {
    let (ratio, label) = match view {
        Some(view) => (view.progress_ratio, view.progress_text()),
        None => (0.0, "--%".to_string()),
    };

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Progress"))
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
        .ratio(ratio)
        .label(label);

    f.render_widget(gauge, area);
}
