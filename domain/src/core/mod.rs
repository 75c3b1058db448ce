//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`] — a trivia question shown to the player
//! - [`question::QuestionDetail`] — a question with its revealed answer
//! - [`error::DomainError`] — domain-level errors

pub mod error;
pub mod question;
