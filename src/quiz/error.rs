use thiserror::Error;

/// User input the view normally prevents (disabled controls), surfaced as
/// errors so the session never enters an inconsistent state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("no category selected")]
    NoCategorySelected,

    #[error("question count {0} is outside 1..=4")]
    QuestionCountOutOfRange(u8),
}
