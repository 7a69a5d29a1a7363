use crate::app::state::*;
use crate::quiz::Question;
use crate::ui::theme::Theme;
use crate::ui::{spinner, truncate};
use ratatui::prelude::*;
use ratatui::widgets::{
    Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
};
use unicode_width::UnicodeWidthStr;

/// Provider metadata line under a question, e.g. `Science & Nature · easy`.
fn question_meta(question: &Question) -> Option<String> {
    match (question.category.as_deref(), question.difficulty.as_deref()) {
        (Some(category), Some(difficulty)) => Some(format!("{} · {}", category, difficulty)),
        (Some(only), None) | (None, Some(only)) => Some(only.to_string()),
        (None, None) => None,
    }
}

/// Greedy word wrap by display width. Words wider than the line are cut.
fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![];
    }
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.width()
        } else {
            current.width() + 1 + word.width()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
        if current.width() > width {
            lines.push(truncate(&current, width));
            current.clear();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::Questions;
    let session = &state.session;
    let displayed = session.displayed_questions();

    let title = if displayed.is_empty() {
        " Questions ".to_string()
    } else {
        format!(
            " Questions ({}/{} answered) ",
            (0..displayed.len())
                .filter(|i| session.answers().get(*i).is_some())
                .count(),
            displayed.len()
        )
    };

    let block = Block::default()
        .title(title)
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type(focused))
        .border_style(if focused {
            Theme::border_focused()
        } else {
            Theme::border()
        });

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if displayed.is_empty() {
        let msg = if session.questions_loading() {
            format!(" Fetching questions {}", spinner(state.tick_count))
        } else {
            " Pick a category and press s to start.".to_string()
        };
        frame.render_widget(
            Paragraph::new(Span::styled(msg, Theme::disabled())),
            inner,
        );
        return;
    }

    let text_width = (inner.width as usize).saturating_sub(6);
    let mut lines: Vec<Line> = Vec::new();
    let mut cursor_line = 0usize;
    let mut slot = 0usize;

    for (qi, question) in displayed.iter().enumerate() {
        for (i, part) in wrap(&question.text, text_width).into_iter().enumerate() {
            let prefix = if i == 0 {
                format!(" {}. ", qi + 1)
            } else {
                "    ".to_string()
            };
            lines.push(Line::from(vec![
                Span::styled(prefix, Theme::key_hint()),
                Span::styled(part, Theme::question()),
            ]));
        }
        if let Some(meta) = question_meta(question) {
            lines.push(Line::from(Span::styled(
                format!("    {}", truncate(&meta, text_width)),
                Theme::disabled(),
            )));
        }

        let chosen = session.answers().get(qi);
        for option in question.options() {
            let is_chosen = chosen == Some(option);
            let marker = if is_chosen { "(•)" } else { "( )" };
            let style = if focused && slot == state.answer_cursor {
                cursor_line = lines.len();
                Theme::cursor()
            } else if is_chosen {
                Theme::selected()
            } else {
                Theme::option()
            };
            lines.push(Line::from(vec![
                Span::raw("    "),
                Span::styled(
                    format!("{} {}", marker, truncate(option, text_width.saturating_sub(4))),
                    style,
                ),
            ]));
            slot += 1;
        }
        lines.push(Line::default());
    }

    let submit_style = if focused && slot == state.answer_cursor {
        cursor_line = lines.len();
        Theme::cursor()
    } else {
        Theme::key_hint()
    };
    lines.push(Line::from(vec![
        Span::raw(" "),
        Span::styled("[ Submit Quiz ]", submit_style),
    ]));

    let visible = inner.height as usize;
    let scroll = cursor_line.saturating_sub(visible.saturating_sub(1));
    let total = lines.len();

    frame.render_widget(Paragraph::new(lines).scroll((scroll as u16, 0)), inner);

    if total > visible {
        let mut scrollbar_state =
            ScrollbarState::new(total.saturating_sub(visible)).position(scroll);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area,
            &mut scrollbar_state,
        );
    }
}
