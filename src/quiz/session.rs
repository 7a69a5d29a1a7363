//! The quiz session controller.
//!
//! [`QuizSession`] owns every piece of session state and exposes a fixed set
//! of action methods. Fetches are requested, not performed: `load_categories`
//! and `start_quiz` hand back a [`FetchRequest`] stamped with the current
//! generation, and the caller feeds the outcome back through
//! [`QuizSession::apply_categories`] / [`QuizSession::apply_questions`].
//! `restart_quiz` bumps the generation so a response that lands after a
//! restart is dropped instead of repopulating a fresh session.

use crate::quiz::error::QuizError;
use crate::quiz::model::{AnswerRecord, Category, Question, QuestionSet};
use crate::trivia::FetchError;
use tracing::{debug, info, warn};

/// Questions requested per quiz, regardless of how many are displayed.
pub const QUESTION_BATCH: u8 = 4;
pub const MIN_QUESTION_COUNT: u8 = 1;
pub const MAX_QUESTION_COUNT: u8 = 4;

/// Work the runtime must perform on the session's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    Categories { generation: u64 },
    Questions { generation: u64, category: u32, amount: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Configuring,
    Loaded,
    Scored,
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    categories: Vec<Category>,
    selected_category: Option<u32>,
    question_count: u8,
    questions: QuestionSet,
    answers: AnswerRecord,
    score: Option<usize>,
    result_visible: bool,
    generation: u64,
    categories_loading: bool,
    questions_loading: bool,
    last_error: Option<FetchError>,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizSession {
    pub fn new() -> Self {
        Self {
            categories: Vec::new(),
            selected_category: None,
            question_count: MIN_QUESTION_COUNT,
            questions: Vec::new(),
            answers: AnswerRecord::new(),
            score: None,
            result_visible: false,
            generation: 0,
            categories_loading: false,
            questions_loading: false,
            last_error: None,
        }
    }

    // --- actions ---

    pub fn load_categories(&mut self) -> FetchRequest {
        self.categories_loading = true;
        FetchRequest::Categories {
            generation: self.generation,
        }
    }

    /// Store a category fetch outcome. Returns `false` if the response
    /// belongs to an earlier generation and was discarded.
    pub fn apply_categories(
        &mut self,
        generation: u64,
        result: Result<Vec<Category>, FetchError>,
    ) -> bool {
        if generation != self.generation {
            debug!(generation, current = self.generation, "discarding stale category response");
            return false;
        }
        self.categories_loading = false;
        match result {
            Ok(categories) => {
                info!(count = categories.len(), "categories loaded");
                self.categories = categories;
                self.last_error = None;
            }
            Err(e) => {
                warn!(error = %e, "category fetch failed");
                self.categories.clear();
                self.last_error = Some(e);
            }
        }
        true
    }

    /// Select a category, or clear the selection with `None`.
    pub fn select_category(&mut self, id: Option<u32>) {
        self.selected_category = id;
    }

    pub fn set_question_count(&mut self, count: u8) -> Result<(), QuizError> {
        if self.selected_category.is_none() {
            return Err(QuizError::NoCategorySelected);
        }
        if !(MIN_QUESTION_COUNT..=MAX_QUESTION_COUNT).contains(&count) {
            return Err(QuizError::QuestionCountOutOfRange(count));
        }
        self.question_count = count;
        Ok(())
    }

    pub fn start_quiz(&mut self) -> Result<FetchRequest, QuizError> {
        let category = self.selected_category.ok_or(QuizError::NoCategorySelected)?;
        self.questions_loading = true;
        info!(category, amount = QUESTION_BATCH, "starting quiz");
        Ok(FetchRequest::Questions {
            generation: self.generation,
            category,
            amount: QUESTION_BATCH,
        })
    }

    /// Store a question fetch outcome. A successful fetch begins a new
    /// attempt: answers, score, and the result modal from any previous
    /// attempt are cleared. Returns `false` for stale responses.
    pub fn apply_questions(
        &mut self,
        generation: u64,
        result: Result<Vec<Question>, FetchError>,
    ) -> bool {
        if generation != self.generation {
            debug!(generation, current = self.generation, "discarding stale question response");
            return false;
        }
        self.questions_loading = false;
        match result {
            Ok(questions) => {
                info!(count = questions.len(), "questions loaded");
                self.questions = questions;
                self.last_error = None;
            }
            Err(e) => {
                warn!(error = %e, "question fetch failed");
                self.questions.clear();
                self.last_error = Some(e);
            }
        }
        self.answers.clear();
        self.score = None;
        self.result_visible = false;
        true
    }

    pub fn select_answer(&mut self, index: usize, option: impl Into<String>) {
        self.answers.select(index, option);
    }

    /// Score against the full fetched set, not just the displayed prefix.
    pub fn submit_quiz(&mut self) -> usize {
        let score = self.answers.score(&self.questions);
        info!(score, total = self.questions.len(), "quiz submitted");
        self.score = Some(score);
        self.result_visible = true;
        score
    }

    pub fn close_modal(&mut self) {
        self.result_visible = false;
    }

    pub fn restart_quiz(&mut self) {
        let generation = self.generation.wrapping_add(1);
        *self = Self::new();
        self.generation = generation;
        info!(generation, "session restarted");
    }

    // --- projections ---

    pub fn phase(&self) -> Phase {
        if self.score.is_some() {
            Phase::Scored
        } else if !self.questions.is_empty() {
            Phase::Loaded
        } else if self.selected_category.is_some() {
            Phase::Configuring
        } else {
            Phase::Idle
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn selected_category(&self) -> Option<u32> {
        self.selected_category
    }

    pub fn selected_category_name(&self) -> Option<&str> {
        let id = self.selected_category?;
        self.categories
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.as_str())
    }

    pub fn question_count(&self) -> u8 {
        self.question_count
    }

    /// The full fetched set, including questions beyond the displayed count.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// The first `question_count` questions, in fetch order.
    pub fn displayed_questions(&self) -> &[Question] {
        let n = (self.question_count as usize).min(self.questions.len());
        &self.questions[..n]
    }

    pub fn options_for(&self, index: usize) -> Vec<&str> {
        self.displayed_questions()
            .get(index)
            .map(Question::options)
            .unwrap_or_default()
    }

    pub fn answers(&self) -> &AnswerRecord {
        &self.answers
    }

    pub fn score(&self) -> Option<usize> {
        self.score
    }

    /// Displayed questions not answered correctly, floored at zero since the
    /// score also counts undisplayed questions.
    pub fn incorrect_count(&self) -> usize {
        self.displayed_questions()
            .len()
            .saturating_sub(self.score.unwrap_or(0))
    }

    pub fn result_visible(&self) -> bool {
        self.result_visible
    }

    pub fn score_panel_visible(&self) -> bool {
        self.score.is_some_and(|s| s > 0)
    }

    pub fn can_start(&self) -> bool {
        self.selected_category.is_some() && !self.questions_loading
    }

    #[cfg(test)]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn categories_loading(&self) -> bool {
        self.categories_loading
    }

    pub fn questions_loading(&self) -> bool {
        self.questions_loading
    }

    pub fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref()
    }
}
