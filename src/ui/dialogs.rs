use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::layout::centered_rect;

/// Render the blocking alert dialog
pub fn render_alert(f: &mut Frame, message: &str) {
    let mut lines: Vec<Line> = vec![Line::raw("")];
    lines.extend(message.lines().map(|l| Line::raw(l.to_string())));
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "Press Enter to dismiss",
        Style::default().fg(Color::DarkGray),
    )));

    // Room for the message, the hint, borders and some slack for wrapping
    let prompt_height = lines.len() as u16 + 4;
    let prompt_area = centered_rect(f.area(), 60, prompt_height);

    let prompt = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Error")
                .border_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, prompt_area);
    f.render_widget(prompt, prompt_area);
}
