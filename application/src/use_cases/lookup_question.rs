//! Question lookup use case
//!
//! One-shot access to the question service, outside of any round.

use crate::ports::question_source::QuestionSource;
use crate::ports::service_error::ServiceError;
use numline_domain::{Question, QuestionDetail, QuestionId};
use std::sync::Arc;
use tracing::info;

pub struct LookupQuestionUseCase<S: QuestionSource + 'static> {
    source: Arc<S>,
}

impl<S: QuestionSource + 'static> LookupQuestionUseCase<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// A random question without its answer
    pub async fn random(&self) -> Result<Question, ServiceError> {
        let question = self.source.random_question().await?;
        info!("Fetched random question {}", question.id);
        Ok(question)
    }

    /// A question with its answer revealed
    pub async fn by_id(&self, id: QuestionId) -> Result<QuestionDetail, ServiceError> {
        info!("Fetching question {}", id);
        self.source.question_detail(id).await
    }
}
