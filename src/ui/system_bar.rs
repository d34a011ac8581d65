use chrono::{DateTime, Local};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::Duration;

use crate::model::ConnectionState;

/// Format the poll period compactly ("500ms", "2s", "1.5s")
pub fn format_interval(period: Duration) -> String {
    let ms = period.as_millis();
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms % 1000 == 0 {
        format!("{}s", ms / 1000)
    } else {
        format!("{:.1}s", ms as f64 / 1000.0)
    }
}

/// Render connection status span based on connection state
fn render_connection_status(state: &ConnectionState) -> Span<'_> {
    match state {
        ConnectionState::Connected => {
            Span::styled("🟢 Connected", Style::default().fg(Color::Green))
        }
        ConnectionState::Connecting => {
            Span::styled("🟡 Connecting...", Style::default().fg(Color::Yellow))
        }
        ConnectionState::Disconnected { message, .. } => {
            // Show raw error message for tech-savvy audience
            Span::styled(format!("🔴 {}", message), Style::default().fg(Color::Red))
        }
    }
}

/// Render the top bar: server, connection health, last update time, poll period
pub fn render_system_bar(
    f: &mut Frame,
    area: Rect,
    base_url: &str,
    connection_state: &ConnectionState,
    last_updated: Option<&DateTime<Local>>,
    poll_interval: Option<Duration>,
) {
    let mut spans = vec![
        render_connection_status(connection_state),
        Span::raw(" | "),
        Span::styled("Server:", Style::default().fg(Color::Yellow)),
        Span::raw(format!(" {}", base_url)),
    ];

    if let Some(updated) = last_updated {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled("Updated:", Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(format!(" {}", updated.format("%H:%M:%S"))));
    }

    match poll_interval {
        Some(period) => {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled("Every:", Style::default().fg(Color::Yellow)));
            spans.push(Span::raw(format!(" {}", format_interval(period))));
        }
        None => spans.push(Span::raw(" | Polling paused")),
    }

    let system_widget = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("syncpanel"))
        .style(Style::default().fg(Color::Gray));

    f.render_widget(system_widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_interval() {
        assert_eq!(format_interval(Duration::from_millis(500)), "500ms");
        assert_eq!(format_interval(Duration::from_millis(2000)), "2s");
        assert_eq!(format_interval(Duration::from_millis(1500)), "1.5s");
    }
}
