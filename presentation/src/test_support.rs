//! In-memory ports for presentation tests

use async_trait::async_trait;
use numline_application::{EffectRunner, PlacementOracle, QuestionSource, ServiceError};
use numline_domain::{
    Difficulty, PlacementRequest, PlacementVerdict, Question, QuestionDetail, QuestionId,
};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub fn question(id: u64) -> Question {
    Question::new(id, format!("Question {id}"), "Science", Difficulty::Easy)
}

/// Serves questions with increasing ids, starting at 1
#[derive(Default)]
pub struct CountingQuestions {
    next: Mutex<u64>,
}

#[async_trait]
impl QuestionSource for CountingQuestions {
    async fn random_question(&self) -> Result<Question, ServiceError> {
        let mut next = self.next.lock().unwrap();
        *next += 1;
        Ok(question(*next))
    }

    async fn question_detail(&self, id: QuestionId) -> Result<QuestionDetail, ServiceError> {
        Ok(QuestionDetail::new(question(id.value()), id.value()))
    }
}

/// Replies with queued verdicts, then with `correct`
#[derive(Default)]
pub struct QueuedOracle {
    verdicts: Mutex<VecDeque<Result<PlacementVerdict, ServiceError>>>,
}

impl QueuedOracle {
    pub fn new(verdicts: Vec<Result<PlacementVerdict, ServiceError>>) -> Self {
        Self {
            verdicts: Mutex::new(verdicts.into()),
        }
    }
}

#[async_trait]
impl PlacementOracle for QueuedOracle {
    async fn validate(&self, _request: &PlacementRequest) -> Result<PlacementVerdict, ServiceError> {
        self.verdicts
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(PlacementVerdict::correct()))
    }
}

pub fn runner(oracle: QueuedOracle) -> EffectRunner<CountingQuestions, QueuedOracle> {
    EffectRunner::new(Arc::new(CountingQuestions::default()), Arc::new(oracle))
}
