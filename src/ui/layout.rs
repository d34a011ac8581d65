use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for rendering
pub struct LayoutInfo {
    /// Top bar: server, connection, last update
    pub system_area: Rect,
    /// Status label, last sync, current operation
    pub status_area: Rect,
    /// Progress gauge
    pub progress_area: Rect,
    /// Hotkey legend (full width)
    pub legend_area: Rect,
}

/// Lines used by the status block: three fields plus borders and spacing
pub const STATUS_HEIGHT: u16 = 7;

/// Calculate the screen layout for all UI components
pub fn calculate_layout(terminal_size: Rect) -> LayoutInfo {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // System bar (top border, text, bottom border)
            Constraint::Length(STATUS_HEIGHT), // Status fields
            Constraint::Length(3),             // Progress gauge
            Constraint::Min(0),                // Spare room
            Constraint::Length(3),             // Legend
        ])
        .split(terminal_size);

    LayoutInfo {
        system_area: chunks[0],
        status_area: chunks[1],
        progress_area: chunks[2],
        legend_area: chunks[4],
    }
}

/// Rectangle of `width` x `height` centered in `area`, shrunk to fit
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_stacks_sections() {
        let info = calculate_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(info.system_area.y, 0);
        assert_eq!(info.status_area.y, 3);
        assert_eq!(info.status_area.height, STATUS_HEIGHT);
        assert_eq!(info.progress_area.y, 3 + STATUS_HEIGHT);
        assert_eq!(info.legend_area.y, 21);
    }

    #[test]
    fn test_centered_rect() {
        let r = centered_rect(Rect::new(0, 0, 80, 24), 40, 10);
        assert_eq!(r, Rect::new(20, 7, 40, 10));
    }

    #[test]
    fn test_centered_rect_shrinks() {
        let r = centered_rect(Rect::new(0, 0, 30, 5), 40, 10);
        assert_eq!(r, Rect::new(0, 0, 30, 5));
    }
}
