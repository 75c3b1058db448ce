//! Round state and its transition function
//!
//! [`RoundState::apply`] is the whole game: it takes one [`RoundEvent`],
//! updates the state, and returns the [`Effect`] (if any) the caller must
//! perform. Performing the effect yields the next event. No I/O happens here.

use serde::Serialize;

use super::event::{DropEvent, Effect, PlacementRequest, PlacementVerdict, RoundEvent};
use crate::core::question::Question;
use crate::line::{DragId, Line};

/// Shown when the question service cannot be reached
pub const LOAD_FAILED_MESSAGE: &str = "Could not load question from backend.";

/// Shown after a wrong placement resets the round
pub const WRONG_PLACEMENT_MESSAGE: &str = "Wrong placement. Game over.";

/// A placement sent to the oracle and not yet judged
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InFlightPlacement {
    pub slot: usize,
    pub request: PlacementRequest,
}

/// Summary of a finished game, kept until the player dismisses it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameOver {
    pub final_score: u32,
    pub placed_answer: Option<u64>,
    pub left_answer: Option<u64>,
    pub right_answer: Option<u64>,
}

/// State of the current round (Aggregate)
#[derive(Debug, Clone, Default, Serialize)]
pub struct RoundState {
    pending: Option<Question>,
    line: Line,
    score: u32,
    best_score: u32,
    message: Option<String>,
    in_flight: Option<InFlightPlacement>,
    loading: bool,
    game_over: Option<GameOver>,
}

impl RoundState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Option<&Question> {
        self.pending.as_ref()
    }

    pub fn line(&self) -> &Line {
        &self.line
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn in_flight(&self) -> Option<&InFlightPlacement> {
        self.in_flight.as_ref()
    }

    pub fn is_validating(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn game_over(&self) -> Option<&GameOver> {
        self.game_over.as_ref()
    }

    /// Drag id of the pending card, if there is one
    pub fn pending_drag_id(&self) -> Option<DragId> {
        self.pending.as_ref().map(|q| DragId::pending(q.id))
    }

    /// Whether the pending card may be picked up right now
    pub fn is_draggable(&self) -> bool {
        self.pending.is_some() && self.in_flight.is_none() && self.game_over.is_none()
    }

    /// Apply one event, returning the effect the caller must perform next
    pub fn apply(&mut self, event: RoundEvent) -> Option<Effect> {
        match event {
            RoundEvent::Start => self.request_question(),
            RoundEvent::QuestionLoaded(question) => {
                if self.in_flight.is_some() {
                    return None;
                }
                self.loading = false;
                self.pending = Some(question);
                // The verdict of the previous drop stays visible until the next drop
                if self.message.as_deref() == Some(LOAD_FAILED_MESSAGE) {
                    self.message = None;
                }
                None
            }
            RoundEvent::QuestionLoadFailed(_) => {
                self.loading = false;
                self.message = Some(LOAD_FAILED_MESSAGE.to_string());
                None
            }
            RoundEvent::Dropped(drop) => self.on_drop(&drop),
            RoundEvent::PlacementJudged(verdict) => self.on_verdict(verdict),
            RoundEvent::PlacementFailed(reason) => self.on_transport_failure(&reason),
            RoundEvent::DismissGameOver => {
                if self.game_over.take().is_some() {
                    self.message = None;
                }
                self.request_question()
            }
        }
    }

    fn request_question(&mut self) -> Option<Effect> {
        if self.pending.is_some() || self.loading {
            return None;
        }
        self.loading = true;
        Some(Effect::FetchQuestion)
    }

    fn on_drop(&mut self, drop: &DropEvent) -> Option<Effect> {
        if !self.is_draggable() {
            return None;
        }
        let pending = self.pending.as_ref()?;
        if drop.active_id != DragId::pending(pending.id).to_string() {
            return None;
        }
        let slot = DragId::parse_slot(drop.over_id.as_deref()?)?;
        let neighbors = self.line.neighbors(slot)?;

        let request = PlacementRequest::new(pending.id, neighbors);
        self.in_flight = Some(InFlightPlacement {
            slot,
            request: request.clone(),
        });
        self.message = None;
        Some(Effect::ValidatePlacement(request))
    }

    fn on_verdict(&mut self, verdict: PlacementVerdict) -> Option<Effect> {
        let in_flight = self.in_flight.take()?;

        if verdict.correct {
            let question = self.pending.take()?;
            // The line cannot change while a placement is in flight, so the
            // slot resolved at drop time is still valid.
            if let Err(e) = self.line.insert(in_flight.slot, question.clone()) {
                self.pending = Some(question);
                self.message = Some(e.to_string());
                return None;
            }
            self.score += 1;
            self.best_score = self.best_score.max(self.score);
            self.message = Some(match verdict.placed_answer {
                Some(answer) => format!("Correct! The answer was {answer}."),
                None => "Correct!".to_string(),
            });
        } else {
            self.game_over = Some(GameOver {
                final_score: self.score,
                placed_answer: verdict.placed_answer,
                left_answer: verdict.left_answer,
                right_answer: verdict.right_answer,
            });
            self.line.clear();
            self.score = 0;
            self.pending = None;
            self.message = Some(WRONG_PLACEMENT_MESSAGE.to_string());
        }

        self.request_question()
    }

    fn on_transport_failure(&mut self, reason: &str) -> Option<Effect> {
        self.in_flight.take()?;
        let reason = reason.trim();
        self.message = Some(if reason.is_empty() {
            "Could not validate placement. Please try again.".to_string()
        } else {
            format!("Could not validate placement: {reason}")
        });
        None
    }
}
