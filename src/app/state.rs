use crate::config::AppConfig;
use crate::quiz::{Phase, QuizSession};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPanel {
    Categories,
    Count,
    Questions,
}

/// One selectable row in the question panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerSlot {
    Option { question: usize, option: String },
    Submit,
}

pub struct AppState {
    pub config: AppConfig,
    pub session: QuizSession,
    pub focus: FocusPanel,
    /// Row in the category list; row 0 is the "Select a Category" placeholder.
    pub category_cursor: usize,
    pub answer_cursor: usize,
    pub should_quit: bool,
    pub dirty: bool,
    pub status_message: Option<String>,
    pub tick_count: u64,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            session: QuizSession::new(),
            focus: FocusPanel::Categories,
            category_cursor: 0,
            answer_cursor: 0,
            should_quit: false,
            dirty: true,
            status_message: None,
            tick_count: 0,
        }
    }

    /// Number of rows in the category list, placeholder included.
    pub fn category_rows(&self) -> usize {
        self.session.categories().len() + 1
    }

    /// Category id under the cursor, `None` on the placeholder row.
    pub fn category_at_cursor(&self) -> Option<u32> {
        self.category_cursor
            .checked_sub(1)
            .and_then(|i| self.session.categories().get(i))
            .map(|c| c.id)
    }

    pub fn move_category_cursor(&mut self, down: bool) {
        let rows = self.category_rows();
        self.category_cursor = if down {
            (self.category_cursor + 1).min(rows - 1)
        } else {
            self.category_cursor.saturating_sub(1)
        };
        self.dirty = true;
    }

    /// Every option of every displayed question, in render order, followed
    /// by the submit row.
    pub fn answer_slots(&self) -> Vec<AnswerSlot> {
        let mut slots: Vec<AnswerSlot> = (0..self.session.displayed_questions().len())
            .flat_map(|qi| {
                self.session
                    .options_for(qi)
                    .into_iter()
                    .map(move |o| AnswerSlot::Option {
                        question: qi,
                        option: o.to_string(),
                    })
            })
            .collect();
        if !slots.is_empty() {
            slots.push(AnswerSlot::Submit);
        }
        slots
    }

    pub fn move_answer_cursor(&mut self, down: bool) {
        let rows = self.answer_slots().len();
        if rows == 0 {
            self.answer_cursor = 0;
            return;
        }
        self.answer_cursor = if down {
            (self.answer_cursor + 1).min(rows - 1)
        } else {
            self.answer_cursor.saturating_sub(1)
        };
        self.dirty = true;
    }

    pub fn questions_focusable(&self) -> bool {
        !self.session.displayed_questions().is_empty()
    }

    pub fn cycle_focus(&mut self, forward: bool) {
        let order: &[FocusPanel] = if self.questions_focusable() {
            &[FocusPanel::Categories, FocusPanel::Count, FocusPanel::Questions]
        } else {
            &[FocusPanel::Categories, FocusPanel::Count]
        };
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward {
            (current + 1) % order.len()
        } else {
            (current + order.len() - 1) % order.len()
        };
        self.focus = order[next];
        self.dirty = true;
    }

    /// Put cursors back where a fresh session expects them.
    pub fn reset_cursors(&mut self) {
        self.focus = FocusPanel::Categories;
        self.category_cursor = 0;
        self.answer_cursor = 0;
    }

    pub fn status_line(&self) -> String {
        if let Some(ref msg) = self.status_message {
            return msg.clone();
        }
        if self.config.ui.show_errors {
            if let Some(err) = self.session.last_error() {
                return format!("Error: {}", err);
            }
        }
        let mut s = match self.session.phase() {
            Phase::Idle => "Pick a category".to_string(),
            Phase::Configuring => format!(
                "Category: {} | Questions: {}",
                self.session.selected_category_name().unwrap_or("?"),
                self.session.question_count()
            ),
            Phase::Loaded => format!(
                "Answered {}/{}",
                self.session.answers().len(),
                self.session.displayed_questions().len()
            ),
            Phase::Scored => format!("Score: {}", self.session.score().unwrap_or(0)),
        };
        if self.session.categories_loading() {
            s.push_str(" | Loading categories...");
        }
        if self.session.questions_loading() {
            s.push_str(" | Loading questions...");
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::model::question;
    use crate::quiz::{Category, FetchRequest};

    fn state_with_questions(count: u8) -> AppState {
        let mut state = AppState::new(AppConfig::default());
        state.session.select_category(Some(9));
        state.session.set_question_count(count).unwrap();
        let FetchRequest::Questions { generation, .. } = state.session.start_quiz().unwrap() else {
            panic!("expected question request");
        };
        state.session.apply_questions(
            generation,
            Ok(vec![
                question("Capital of France?", "Paris", &["Rome"]),
                question("2 + 2?", "4", &["5", "3"]),
            ]),
        );
        state
    }

    #[test]
    fn test_category_cursor_placeholder_row() {
        let mut state = AppState::new(AppConfig::default());
        let FetchRequest::Categories { generation } = state.session.load_categories() else {
            panic!("expected category request");
        };
        state.session.apply_categories(
            generation,
            Ok(vec![
                Category { id: 9, name: "General".into() },
                Category { id: 21, name: "Sports".into() },
            ]),
        );
        assert_eq!(state.category_rows(), 3);
        assert_eq!(state.category_at_cursor(), None);
        state.move_category_cursor(true);
        assert_eq!(state.category_at_cursor(), Some(9));
        state.move_category_cursor(true);
        state.move_category_cursor(true);
        assert_eq!(state.category_at_cursor(), Some(21));
        state.move_category_cursor(false);
        state.move_category_cursor(false);
        state.move_category_cursor(false);
        assert_eq!(state.category_cursor, 0);
    }

    #[test]
    fn test_answer_slots_cover_displayed_questions_only() {
        let state = state_with_questions(1);
        let slots = state.answer_slots();
        assert_eq!(
            slots,
            vec![
                AnswerSlot::Option { question: 0, option: "Paris".into() },
                AnswerSlot::Option { question: 0, option: "Rome".into() },
                AnswerSlot::Submit,
            ]
        );
    }

    #[test]
    fn test_no_slots_without_questions() {
        let state = AppState::new(AppConfig::default());
        assert!(state.answer_slots().is_empty());
    }

    #[test]
    fn test_cycle_focus_skips_questions_until_loaded() {
        let mut state = AppState::new(AppConfig::default());
        state.cycle_focus(true);
        assert_eq!(state.focus, FocusPanel::Count);
        state.cycle_focus(true);
        assert_eq!(state.focus, FocusPanel::Categories);

        let mut state = state_with_questions(2);
        state.cycle_focus(false);
        assert_eq!(state.focus, FocusPanel::Questions);
    }

    #[test]
    fn test_status_line_hides_errors_by_default() {
        let mut state = AppState::new(AppConfig::default());
        let FetchRequest::Categories { generation } = state.session.load_categories() else {
            panic!("expected category request");
        };
        state.session.apply_categories(
            generation,
            Err(crate::trivia::FetchError::Network("down".into())),
        );
        assert_eq!(state.status_line(), "Pick a category");

        state.config.ui.show_errors = true;
        assert_eq!(state.status_line(), "Error: network error: down");
    }
}
