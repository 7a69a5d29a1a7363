//! Quiz session core: data model, session controller, and scoring.
//!
//! Nothing in here performs I/O. Network work is requested through
//! [`session::FetchRequest`] values and results are fed back in through the
//! `apply_*` methods, so the whole lifecycle is testable without a terminal
//! or a provider.

pub mod error;
pub mod model;
pub mod session;

pub use model::{Category, Question};
pub use session::{FetchRequest, Phase, QuizSession};
