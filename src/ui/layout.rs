use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub header: Rect,
    pub categories: Rect,
    pub count: Rect,
    pub questions: Rect,
    pub score_panel: Option<Rect>,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect, show_score: bool) -> AppLayout {
    // Main vertical split: header | form | quiz body | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // Header
            Constraint::Length(10), // Selection form
            Constraint::Min(5),     // Questions / score
            Constraint::Length(1),  // Status bar
        ])
        .split(area);

    let header = main_chunks[0];
    let form = main_chunks[1];
    let body = main_chunks[2];
    let status_bar = main_chunks[3];

    // Form: category list | count selector
    let form_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([
            Constraint::Min(30),    // Category list
            Constraint::Length(30), // Count + start
        ])
        .split(form);

    let (questions, score_panel) = if show_score {
        let body_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .spacing(1)
            .constraints([Constraint::Min(30), Constraint::Percentage(40)])
            .split(body);
        (body_chunks[0], Some(body_chunks[1]))
    } else {
        (body, None)
    };

    AppLayout {
        header,
        categories: form_chunks[0],
        count: form_chunks[1],
        questions,
        score_panel,
        status_bar,
    }
}

/// Centered popup rectangle, clamped to the available area.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width.saturating_sub(2));
    let h = height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_panel_only_when_requested() {
        let area = Rect::new(0, 0, 120, 40);
        assert!(compute_layout(area, false).score_panel.is_none());
        let layout = compute_layout(area, true);
        assert!(layout.score_panel.is_some());
        assert_eq!(layout.status_bar.y, 39);
    }

    #[test]
    fn test_centered_clamps_to_area() {
        let area = Rect::new(0, 0, 40, 10);
        let popup = centered(area, 100, 100);
        assert_eq!(popup, Rect::new(1, 1, 38, 8));
        let popup = centered(Rect::new(0, 0, 80, 24), 40, 8);
        assert_eq!(popup, Rect::new(20, 8, 40, 8));
    }
}
