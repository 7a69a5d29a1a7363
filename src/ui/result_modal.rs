use crate::app::state::AppState;
use crate::ui::layout::centered;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

pub fn render(frame: &mut Frame, state: &AppState) {
    let session = &state.session;
    if !session.result_visible() {
        return;
    }

    let popup_area = centered(frame.area(), 44, 9);

    // Clear background
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Your Quiz Results ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type(true))
        .border_style(Style::default().fg(Theme::ACCENT))
        .style(Theme::modal());

    let score = session.score().unwrap_or(0);
    let lines = vec![
        Line::default(),
        Line::from(vec![
            Span::styled("  Correct Answers: ", Theme::option()),
            Span::styled(score.to_string(), Theme::selected()),
        ]),
        Line::from(vec![
            Span::styled("  Incorrect Answers: ", Theme::option()),
            Span::styled(
                session.incorrect_count().to_string(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::default(),
        Line::from(vec![
            Span::styled("  Esc", Theme::key_hint()),
            Span::styled(" Close  ", Theme::disabled()),
            Span::styled("R", Theme::key_hint()),
            Span::styled(" Restart  ", Theme::disabled()),
            Span::styled("q", Theme::key_hint()),
            Span::styled(" Quit", Theme::disabled()),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), popup_area);
}
