use crate::app::state::*;
use crate::quiz::session::{MAX_QUESTION_COUNT, MIN_QUESTION_COUNT};
use crate::ui::theme::Theme;
use crate::ui::spinner;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::Count;
    let session = &state.session;
    let enabled = session.selected_category().is_some();

    let block = Block::default()
        .title(" Number of Questions ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type(focused))
        .border_style(if focused {
            Theme::border_focused()
        } else {
            Theme::border()
        });

    // 1 2 3 4 with the current count highlighted
    let mut numbers: Vec<Span> = vec![Span::raw(" ")];
    for n in MIN_QUESTION_COUNT..=MAX_QUESTION_COUNT {
        let style = if !enabled {
            Theme::disabled()
        } else if n == session.question_count() {
            Theme::cursor()
        } else {
            Theme::option()
        };
        numbers.push(Span::styled(format!(" {} ", n), style));
        numbers.push(Span::raw(" "));
    }

    let start_line = if session.questions_loading() {
        Line::from(Span::styled(
            format!(" Loading questions {}", spinner(state.tick_count)),
            Theme::key_hint(),
        ))
    } else if session.can_start() {
        Line::from(vec![
            Span::styled(" [s] ", Theme::key_hint()),
            Span::styled("Start Quiz", Theme::option()),
        ])
    } else {
        Line::from(Span::styled(" [s] Start Quiz", Theme::disabled()))
    };

    let hint = if enabled {
        Line::from(Span::styled(" ←/→ or 1-4 to change", Theme::disabled()))
    } else {
        Line::from(Span::styled(" Select a category first", Theme::disabled()))
    };

    let lines = vec![
        Line::default(),
        Line::from(numbers),
        Line::default(),
        hint,
        Line::default(),
        start_line,
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
