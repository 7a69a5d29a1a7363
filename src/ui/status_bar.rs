use crate::app::state::*;
use crate::quiz::Phase;
use crate::ui::theme::Theme;
use crate::ui::truncate;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    // Phase indicator
    let phase = match state.session.phase() {
        Phase::Idle => "IDLE",
        Phase::Configuring => "SETUP",
        Phase::Loaded => "QUIZ",
        Phase::Scored => "SCORED",
    };
    parts.push(Span::styled(
        format!(" [{}] ", phase),
        Style::default().fg(Color::Green).bg(Color::DarkGray),
    ));

    // Focus indicator
    let focus_name = match state.focus {
        FocusPanel::Categories => "CATEGORIES",
        FocusPanel::Count => "COUNT",
        FocusPanel::Questions => "QUESTIONS",
    };
    let used = phase.len() + 3 + focus_name.len() + 3;
    let available = (area.width as usize).saturating_sub(used + 2);

    // Status text
    let status = truncate(&state.status_line(), available);
    let status_len = unicode_width::UnicodeWidthStr::width(status.as_str()) + 2;
    parts.push(Span::styled(format!(" {} ", status), Theme::status_bar()));

    // Pad to fill remaining space
    let remaining = (area.width as usize).saturating_sub(used + status_len);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" [{}] ", focus_name),
        Style::default().fg(Color::Cyan).bg(Color::DarkGray),
    ));

    let line = Line::from(parts);
    let paragraph = Paragraph::new(line);
    frame.render_widget(paragraph, area);
}
