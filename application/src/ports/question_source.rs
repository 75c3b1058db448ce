//! Question source port
//!
//! Defines how the application obtains trivia questions.

use super::service_error::ServiceError;
use async_trait::async_trait;
use numline_domain::{Question, QuestionDetail, QuestionId};

/// Source of trivia questions
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// A random question, answer withheld
    async fn random_question(&self) -> Result<Question, ServiceError>;

    /// A question with its answer
    async fn question_detail(&self, id: QuestionId) -> Result<QuestionDetail, ServiceError>;
}
