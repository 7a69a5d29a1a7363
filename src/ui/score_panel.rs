use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

/// Score and answer key. Lists every fetched question, including any beyond
/// the displayed count.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let session = &state.session;

    let block = Block::default()
        .title(" Results ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type(false))
        .border_style(Theme::border());

    let mut lines = vec![
        Line::from(Span::styled(
            format!("Your Score: {}", session.score().unwrap_or(0)),
            Theme::header(),
        )),
        Line::from(Span::styled("Correct Answers:", Theme::title())),
    ];
    for question in session.questions() {
        lines.push(Line::from(vec![
            Span::styled("• ", Theme::disabled()),
            Span::styled(format!("{} - ", question.text), Theme::option()),
            Span::styled(question.correct_answer.clone(), Theme::correct_answer()),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
