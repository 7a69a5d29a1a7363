//! Client for the trivia content provider (Open Trivia DB compatible).
//!
//! [`client::TriviaClient`] performs the two GET requests; [`wire`] turns
//! response bodies into model values and owns the provider's JSON shapes.

pub mod client;
pub mod entities;
pub mod error;
pub mod wire;

pub use client::TriviaClient;
pub use error::FetchError;
