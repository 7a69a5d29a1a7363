mod category_list;
mod count_selector;
mod layout;
mod question_panel;
mod result_modal;
mod score_panel;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use theme::Theme;
use unicode_width::UnicodeWidthChar;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area, state.session.score_panel_visible());

    let header = Paragraph::new(Line::from(vec![
        Span::styled(" Quiz App ", Theme::header()),
        Span::styled(
            " Tab focus  r reload  s start  u submit  R restart  q quit",
            Theme::disabled(),
        ),
    ]));
    frame.render_widget(header, app_layout.header);

    category_list::render(frame, app_layout.categories, state);
    count_selector::render(frame, app_layout.count, state);
    question_panel::render(frame, app_layout.questions, state);
    if let Some(area) = app_layout.score_panel {
        score_panel::render(frame, area, state);
    }
    status_bar::render(frame, app_layout.status_bar, state);

    // Drawn last so it sits on top
    result_modal::render(frame, state);
}

/// Spinner frame for in-flight fetches.
fn spinner(tick: u64) -> char {
    const FRAMES: [char; 4] = ['|', '/', '-', '\\'];
    FRAMES[(tick % FRAMES.len() as u64) as usize]
}

/// Cut `text` to at most `width` terminal columns, marking the cut with `…`.
fn truncate(text: &str, width: usize) -> String {
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            if width > 0 {
                while used + 1 > width {
                    match out.pop() {
                        Some(p) => used -= p.width().unwrap_or(0),
                        None => break,
                    }
                }
                out.push('…');
            }
            return out;
        }
        used += w;
        out.push(c);
    }
    out
}
