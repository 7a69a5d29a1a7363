//! The reducer: maps `(state, event)` to a mutated state plus the side
//! effects the runtime must carry out.

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::quiz::session::{MAX_QUESTION_COUNT, MIN_QUESTION_COUNT};
use crate::quiz::Phase;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::CategoriesLoaded { generation, result } => {
            if state.session.apply_categories(generation, result) {
                state.category_cursor = state.category_cursor.min(state.category_rows() - 1);
                state.dirty = true;
            }
            vec![]
        }
        AppEvent::QuestionsLoaded { generation, result } => {
            if state.session.apply_questions(generation, result) {
                state.answer_cursor = 0;
                state.focus = if state.questions_focusable() {
                    FocusPanel::Questions
                } else {
                    FocusPanel::Categories
                };
                state.dirty = true;
            }
            vec![]
        }
        AppEvent::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            // Spinner only
            if state.session.categories_loading() || state.session.questions_loading() {
                state.dirty = true;
            }
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => {
            state.dirty = true;
            handle_key(state, key)
        }
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    state.status_message = None;

    // Result modal captures all input when visible
    if state.session.result_visible() {
        return handle_modal_key(state, key);
    }

    match key.code {
        KeyCode::Char('q') => return vec![Action::Quit],
        KeyCode::Tab => {
            state.cycle_focus(true);
            return vec![];
        }
        KeyCode::BackTab => {
            state.cycle_focus(false);
            return vec![];
        }
        KeyCode::Char('r') => return reload_categories(state),
        KeyCode::Char('R') => return restart(state),
        KeyCode::Char('s') => return start_quiz(state),
        KeyCode::Char('u') | KeyCode::F(10) => return submit(state),
        KeyCode::Char(c @ '1'..='4') => {
            set_count(state, c as u8 - b'0');
            return vec![];
        }
        _ => {}
    }

    match state.focus {
        FocusPanel::Categories => handle_categories_key(state, key),
        FocusPanel::Count => handle_count_key(state, key),
        FocusPanel::Questions => handle_questions_key(state, key),
    }
}

fn handle_modal_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            state.session.close_modal();
            vec![]
        }
        KeyCode::Char('R') => restart(state),
        KeyCode::Char('q') => vec![Action::Quit],
        _ => vec![],
    }
}

fn handle_categories_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Up => state.move_category_cursor(false),
        KeyCode::Down => state.move_category_cursor(true),
        KeyCode::Home => state.category_cursor = 0,
        KeyCode::End => state.category_cursor = state.category_rows() - 1,
        KeyCode::Enter | KeyCode::Char(' ') => {
            let id = state.category_at_cursor();
            state.session.select_category(id);
            if id.is_some() {
                state.focus = FocusPanel::Count;
            }
        }
        _ => {}
    }
    vec![]
}

fn handle_count_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let current = state.session.question_count();
    match key.code {
        KeyCode::Left | KeyCode::Down => {
            set_count(state, current.saturating_sub(1).max(MIN_QUESTION_COUNT))
        }
        KeyCode::Right | KeyCode::Up => {
            set_count(state, (current + 1).min(MAX_QUESTION_COUNT))
        }
        KeyCode::Enter => return start_quiz(state),
        _ => {}
    }
    vec![]
}

fn handle_questions_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Up => state.move_answer_cursor(false),
        KeyCode::Down => state.move_answer_cursor(true),
        KeyCode::Enter | KeyCode::Char(' ') => {
            match state.answer_slots().get(state.answer_cursor).cloned() {
                Some(AnswerSlot::Option { question, option }) => {
                    state.session.select_answer(question, option);
                }
                Some(AnswerSlot::Submit) => return submit(state),
                None => {}
            }
        }
        _ => {}
    }
    vec![]
}

fn set_count(state: &mut AppState, count: u8) {
    if let Err(e) = state.session.set_question_count(count) {
        debug!(error = %e, count, "question count rejected");
        state.status_message = Some(format!("Cannot set question count: {}", e));
    } else {
        let rows = state.answer_slots().len();
        state.answer_cursor = state.answer_cursor.min(rows.saturating_sub(1));
    }
}

fn reload_categories(state: &mut AppState) -> Vec<Action> {
    if state.session.categories_loading() {
        return vec![];
    }
    vec![state.session.load_categories().into()]
}

fn start_quiz(state: &mut AppState) -> Vec<Action> {
    if !state.session.can_start() {
        return vec![];
    }
    match state.session.start_quiz() {
        Ok(request) => vec![request.into()],
        Err(e) => {
            debug!(error = %e, "start rejected");
            vec![]
        }
    }
}

fn submit(state: &mut AppState) -> Vec<Action> {
    if !matches!(state.session.phase(), Phase::Loaded | Phase::Scored) {
        return vec![];
    }
    state.session.submit_quiz();
    vec![]
}

fn restart(state: &mut AppState) -> Vec<Action> {
    state.session.restart_quiz();
    state.reset_cursors();
    state.status_message = Some("Session restarted. Press r to load categories.".to_string());
    vec![]
}
