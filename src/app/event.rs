use crate::quiz::{Category, Question};
use crate::trivia::FetchError;
use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Category fetch finished, tagged with the generation it was issued for
    CategoriesLoaded {
        generation: u64,
        result: Result<Vec<Category>, FetchError>,
    },

    /// Question fetch finished
    QuestionsLoaded {
        generation: u64,
        result: Result<Vec<Question>, FetchError>,
    },

    /// Tick for UI refresh
    Tick,
}
