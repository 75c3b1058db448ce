//! Wire types of the question and validation services
//!
//! Placement requests are sent as [`PlacementRequest`] directly; its serde
//! shape is the wire shape.
//!
//! [`PlacementRequest`]: numline_domain::PlacementRequest

use numline_domain::{Difficulty, PlacementVerdict, Question, QuestionDetail, QuestionId};
use serde::Deserialize;

pub const RANDOM_QUESTION_PATH: &str = "questions/random";
pub const VALIDATE_PLACEMENT_PATH: &str = "game/validate-placement";

pub fn question_path(id: QuestionId) -> String {
    format!("questions/{id}")
}

/// `GET /questions/random` (answer withheld)
#[derive(Debug, Deserialize)]
pub struct PublicQuestionDto {
    pub id: u64,
    pub question: String,
    pub category: String,
    pub difficulty: Difficulty,
}

impl From<PublicQuestionDto> for Question {
    fn from(dto: PublicQuestionDto) -> Self {
        Question::new(dto.id, dto.question, dto.category, dto.difficulty)
    }
}

/// `GET /questions/{id}`
#[derive(Debug, Deserialize)]
pub struct QuestionDto {
    pub id: u64,
    pub question: String,
    pub answer: u64,
    pub category: String,
    pub difficulty: Difficulty,
}

impl From<QuestionDto> for QuestionDetail {
    fn from(dto: QuestionDto) -> Self {
        QuestionDetail::new(
            Question::new(dto.id, dto.question, dto.category, dto.difficulty),
            dto.answer,
        )
    }
}

/// `POST /game/validate-placement` response
#[derive(Debug, Deserialize)]
pub struct ValidatePlacementDto {
    pub correct: bool,
    #[serde(default)]
    pub placed_answer: Option<u64>,
    #[serde(default)]
    pub left_answer: Option<u64>,
    #[serde(default)]
    pub right_answer: Option<u64>,
}

impl From<ValidatePlacementDto> for PlacementVerdict {
    fn from(dto: ValidatePlacementDto) -> Self {
        PlacementVerdict {
            correct: dto.correct,
            placed_answer: dto.placed_answer,
            left_answer: dto.left_answer,
            right_answer: dto.right_answer,
        }
    }
}

/// Error body (`{"detail": ...}`); `detail` is a string for most errors and
/// a list of field errors for request validation failures.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub detail: serde_json::Value,
}

impl ErrorBody {
    pub fn detail_text(&self) -> String {
        match &self.detail {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// Extract a human-readable detail from an error response body
pub fn error_detail(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => Some(parsed.detail_text()),
        Err(_) => Some(body.trim().to_string()),
    }
}
