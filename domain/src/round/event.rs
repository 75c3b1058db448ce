//! Inputs and outputs of the round state machine

use serde::{Deserialize, Serialize};

use crate::core::question::{Question, QuestionId};
use crate::line::Neighbors;

/// A drag-and-drop gesture ending
///
/// `active_id` names the dragged element, `over_id` the drop target under
/// the pointer when it was released (if any). Both use the
/// [`DragId`](crate::line::DragId) string forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropEvent {
    pub active_id: String,
    pub over_id: Option<String>,
}

impl DropEvent {
    pub fn new(active_id: impl Into<String>, over_id: Option<String>) -> Self {
        Self {
            active_id: active_id.into(),
            over_id,
        }
    }

    /// A drop with a target
    pub fn over(active_id: impl Into<String>, over_id: impl Into<String>) -> Self {
        Self::new(active_id, Some(over_id.into()))
    }
}

/// Body sent to the placement oracle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementRequest {
    pub placed_question_id: QuestionId,
    pub left_neighbor_id: Option<QuestionId>,
    pub right_neighbor_id: Option<QuestionId>,
}

impl PlacementRequest {
    pub fn new(placed: QuestionId, neighbors: Neighbors) -> Self {
        Self {
            placed_question_id: placed,
            left_neighbor_id: neighbors.left,
            right_neighbor_id: neighbors.right,
        }
    }
}

/// The oracle's judgement of a placement
///
/// Answers are revealed by the oracle after judging; they are display-only.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlacementVerdict {
    pub correct: bool,
    #[serde(default)]
    pub placed_answer: Option<u64>,
    #[serde(default)]
    pub left_answer: Option<u64>,
    #[serde(default)]
    pub right_answer: Option<u64>,
}

impl PlacementVerdict {
    pub fn correct() -> Self {
        Self {
            correct: true,
            ..Self::default()
        }
    }

    pub fn incorrect() -> Self {
        Self::default()
    }

    pub fn with_answers(
        mut self,
        placed: u64,
        left: Option<u64>,
        right: Option<u64>,
    ) -> Self {
        self.placed_answer = Some(placed);
        self.left_answer = left;
        self.right_answer = right;
        self
    }
}

/// Everything that can happen to a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundEvent {
    /// Board opened, or the player asked to retry a failed load
    Start,
    QuestionLoaded(Question),
    QuestionLoadFailed(String),
    Dropped(DropEvent),
    PlacementJudged(PlacementVerdict),
    /// Transport or server fault while validating
    PlacementFailed(String),
    /// "Start new game" on the game-over summary
    DismissGameOver,
}

/// Side effect requested by a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchQuestion,
    ValidatePlacement(PlacementRequest),
}

impl Effect {
    pub fn kind(&self) -> &'static str {
        match self {
            Effect::FetchQuestion => "fetch_question",
            Effect::ValidatePlacement(_) => "validate_placement",
        }
    }
}
