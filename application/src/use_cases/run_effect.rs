//! Effect runner
//!
//! Performs the [`Effect`]s requested by [`RoundState::apply`] through the
//! ports and turns each outcome back into a [`RoundEvent`].
//!
//! [`RoundState::apply`]: numline_domain::RoundState::apply

use crate::ports::placement_oracle::PlacementOracle;
use crate::ports::question_source::QuestionSource;
use numline_domain::{Effect, RoundEvent};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Executes round effects against the external services
pub struct EffectRunner<S: QuestionSource + 'static, O: PlacementOracle + 'static> {
    questions: Arc<S>,
    oracle: Arc<O>,
}

impl<S: QuestionSource + 'static, O: PlacementOracle + 'static> Clone for EffectRunner<S, O> {
    fn clone(&self) -> Self {
        Self {
            questions: Arc::clone(&self.questions),
            oracle: Arc::clone(&self.oracle),
        }
    }
}

impl<S: QuestionSource + 'static, O: PlacementOracle + 'static> EffectRunner<S, O> {
    pub fn new(questions: Arc<S>, oracle: Arc<O>) -> Self {
        Self { questions, oracle }
    }

    /// Perform one effect. Never fails: faults become `*Failed` events.
    pub async fn run(&self, effect: Effect) -> RoundEvent {
        match effect {
            Effect::FetchQuestion => match self.questions.random_question().await {
                Ok(question) => {
                    debug!("Loaded question {}: {}", question.id, question.text);
                    RoundEvent::QuestionLoaded(question)
                }
                Err(e) => {
                    warn!("Failed to load random question: {}", e);
                    RoundEvent::QuestionLoadFailed(e.to_string())
                }
            },
            Effect::ValidatePlacement(request) => {
                debug!(
                    "Validating question {} between {:?} and {:?}",
                    request.placed_question_id, request.left_neighbor_id, request.right_neighbor_id
                );
                match self.oracle.validate(&request).await {
                    Ok(verdict) => {
                        info!(
                            "Placement of question {} judged {}",
                            request.placed_question_id,
                            if verdict.correct { "correct" } else { "incorrect" }
                        );
                        RoundEvent::PlacementJudged(verdict)
                    }
                    Err(e) => {
                        warn!("Placement validation failed: {}", e);
                        RoundEvent::PlacementFailed(e.to_string())
                    }
                }
            }
        }
    }
}
