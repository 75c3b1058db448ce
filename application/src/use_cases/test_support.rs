//! Scripted port implementations shared by use case tests

use crate::ports::placement_oracle::PlacementOracle;
use crate::ports::question_source::QuestionSource;
use crate::ports::round_logger::{RoundLogEvent, RoundLogger};
use crate::ports::service_error::ServiceError;
use async_trait::async_trait;
use numline_domain::{
    Difficulty, PlacementRequest, PlacementVerdict, Question, QuestionDetail, QuestionId,
};
use std::collections::VecDeque;
use std::sync::Mutex;

pub fn question(id: u64) -> Question {
    Question::new(id, format!("Question {id}"), "Geography", Difficulty::Easy)
}

/// Serves a scripted sequence of random-question results
pub struct ScriptedQuestions {
    responses: Mutex<VecDeque<Result<Question, ServiceError>>>,
    pub calls: Mutex<usize>,
}

impl ScriptedQuestions {
    pub fn new(responses: Vec<Result<Question, ServiceError>>) -> Self {
        Self {
            responses: Mutex::new(VecDeque::from(responses)),
            calls: Mutex::new(0),
        }
    }

    pub fn ids(ids: &[u64]) -> Self {
        Self::new(ids.iter().map(|id| Ok(question(*id))).collect())
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl QuestionSource for ScriptedQuestions {
    async fn random_question(&self) -> Result<Question, ServiceError> {
        *self.calls.lock().unwrap() += 1;
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ServiceError::NotFound("No questions available".into())))
    }

    async fn question_detail(&self, id: QuestionId) -> Result<QuestionDetail, ServiceError> {
        if id.value() == 0 {
            return Err(ServiceError::NotFound("Question not found".into()));
        }
        Ok(QuestionDetail::new(question(id.value()), id.value() * 10))
    }
}

/// Records every request and answers from a script
pub struct ScriptedOracle {
    verdicts: Mutex<VecDeque<Result<PlacementVerdict, ServiceError>>>,
    pub requests: Mutex<Vec<PlacementRequest>>,
}

impl ScriptedOracle {
    pub fn new(verdicts: Vec<Result<PlacementVerdict, ServiceError>>) -> Self {
        Self {
            verdicts: Mutex::new(VecDeque::from(verdicts)),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<PlacementRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlacementOracle for ScriptedOracle {
    async fn validate(&self, request: &PlacementRequest) -> Result<PlacementVerdict, ServiceError> {
        self.requests.lock().unwrap().push(request.clone());
        self.verdicts
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ServiceError::Connection("script exhausted".into())))
    }
}

/// Keeps the event types it was given
#[derive(Default)]
pub struct MemoryLogger {
    pub types: Mutex<Vec<&'static str>>,
}

impl RoundLogger for MemoryLogger {
    fn log(&self, event: RoundLogEvent) {
        self.types.lock().unwrap().push(event.event_type);
    }
}
