//! Game session use case
//!
//! Drives a [`RoundState`] to quiescence: each dispatched event is applied,
//! and every effect it produces is performed and fed back until none remain.

use super::round_log::records_for;
use super::run_effect::EffectRunner;
use crate::ports::placement_oracle::PlacementOracle;
use crate::ports::question_source::QuestionSource;
use crate::ports::round_logger::{NoRoundLogger, RoundLogger};
use numline_domain::{RoundEvent, RoundState};
use std::sync::Arc;
use tracing::debug;

/// A single player's game, run sequentially
pub struct GameSession<S: QuestionSource + 'static, O: PlacementOracle + 'static> {
    state: RoundState,
    runner: EffectRunner<S, O>,
    logger: Arc<dyn RoundLogger>,
}

impl<S: QuestionSource + 'static, O: PlacementOracle + 'static> GameSession<S, O> {
    pub fn new(runner: EffectRunner<S, O>) -> Self {
        Self {
            state: RoundState::new(),
            runner,
            logger: Arc::new(NoRoundLogger),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn RoundLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    /// Apply `event` and run every resulting effect to completion
    pub async fn dispatch(&mut self, event: RoundEvent) -> &RoundState {
        let mut next = Some(event);
        while let Some(event) = next.take() {
            let effect = self.state.apply(event.clone());
            for record in records_for(&event, &self.state) {
                self.logger.log(record);
            }
            if let Some(effect) = effect {
                debug!("Running effect {}", effect.kind());
                next = Some(self.runner.run(effect).await);
            }
        }
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::service_error::ServiceError;
    use crate::use_cases::test_support::{MemoryLogger, ScriptedOracle, ScriptedQuestions, question};
    use numline_domain::{DropEvent, PlacementRequest, PlacementVerdict, QuestionId};

    fn session(
        questions: ScriptedQuestions,
        oracle: ScriptedOracle,
    ) -> (GameSession<ScriptedQuestions, ScriptedOracle>, Arc<ScriptedQuestions>, Arc<ScriptedOracle>) {
        let questions = Arc::new(questions);
        let oracle = Arc::new(oracle);
        let runner = EffectRunner::new(Arc::clone(&questions), Arc::clone(&oracle));
        (GameSession::new(runner), questions, oracle)
    }

    fn drop_on(id: u64, slot: usize) -> RoundEvent {
        RoundEvent::Dropped(DropEvent::over(format!("question-{id}"), format!("slot-{slot}")))
    }

    #[tokio::test]
    async fn test_start_loads_first_question() {
        let (mut session, questions, _) = session(ScriptedQuestions::ids(&[1]), ScriptedOracle::new(vec![]));
        let state = session.dispatch(RoundEvent::Start).await;
        assert_eq!(state.pending(), Some(&question(1)));
        assert!(!state.is_loading());
        assert_eq!(questions.call_count(), 1);
    }

    #[tokio::test]
    async fn test_correct_drops_build_line_and_fetch_next() {
        let (mut session, questions, oracle) = session(
            ScriptedQuestions::ids(&[1, 2, 3, 4]),
            ScriptedOracle::new(vec![
                Ok(PlacementVerdict::correct()),
                Ok(PlacementVerdict::correct()),
                Ok(PlacementVerdict::correct()),
            ]),
        );
        session.dispatch(RoundEvent::Start).await;
        session.dispatch(drop_on(1, 0)).await;
        session.dispatch(drop_on(2, 1)).await;
        let state = session.dispatch(drop_on(3, 1)).await;

        let ids: Vec<u64> = state.line().cards().iter().map(|c| c.question.id.value()).collect();
        assert_eq!(ids, vec![1, 3, 2]);
        assert_eq!(state.score(), 3);
        assert_eq!(state.pending(), Some(&question(4)));
        assert_eq!(questions.call_count(), 4);

        let last = oracle.requests().pop().unwrap();
        assert_eq!(
            last,
            PlacementRequest {
                placed_question_id: QuestionId::new(3),
                left_neighbor_id: Some(QuestionId::new(1)),
                right_neighbor_id: Some(QuestionId::new(2)),
            }
        );
    }

    #[tokio::test]
    async fn test_correct_drop_message_survives_next_fetch() {
        let (mut session, _, _) = session(
            ScriptedQuestions::ids(&[1, 2]),
            ScriptedOracle::new(vec![Ok(PlacementVerdict::correct().with_answers(1989, None, None))]),
        );
        session.dispatch(RoundEvent::Start).await;
        let state = session.dispatch(drop_on(1, 0)).await;

        assert_eq!(state.pending(), Some(&question(2)));
        assert_eq!(state.message(), Some("Correct! The answer was 1989."));
    }

    #[tokio::test]
    async fn test_wrong_drop_resets_and_fetches_replacement() {
        let (mut session, _, _) = session(
            ScriptedQuestions::ids(&[1, 2, 3]),
            ScriptedOracle::new(vec![Ok(PlacementVerdict::correct()), Ok(PlacementVerdict::incorrect())]),
        );
        session.dispatch(RoundEvent::Start).await;
        session.dispatch(drop_on(1, 0)).await;
        let state = session.dispatch(drop_on(2, 0)).await;

        assert!(state.line().is_empty());
        assert_eq!(state.score(), 0);
        assert_eq!(state.game_over().map(|g| g.final_score), Some(1));
        assert_eq!(state.pending(), Some(&question(3)));
    }

    #[tokio::test]
    async fn test_transport_failure_keeps_round_and_allows_retry() {
        let (mut session, _, oracle) = session(
            ScriptedQuestions::ids(&[1, 2]),
            ScriptedOracle::new(vec![
                Err(ServiceError::Status { status: 500, detail: None }),
                Ok(PlacementVerdict::correct()),
            ]),
        );
        session.dispatch(RoundEvent::Start).await;
        let state = session.dispatch(drop_on(1, 0)).await;
        assert!(state.line().is_empty());
        assert_eq!(state.pending(), Some(&question(1)));
        assert!(!state.is_validating());
        assert!(state.message().unwrap().contains("500"));

        let state = session.dispatch(drop_on(1, 0)).await;
        assert_eq!(state.line().len(), 1);
        assert_eq!(oracle.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_invalid_drop_never_reaches_oracle() {
        let (mut session, _, oracle) = session(ScriptedQuestions::ids(&[1]), ScriptedOracle::new(vec![]));
        session.dispatch(RoundEvent::Start).await;
        session.dispatch(drop_on(1, 5)).await;
        session.dispatch(drop_on(9, 0)).await;
        assert!(oracle.requests().is_empty());
    }

    #[tokio::test]
    async fn test_events_are_logged() {
        let logger = Arc::new(MemoryLogger::default());
        let (session, _, _) = session(
            ScriptedQuestions::ids(&[1, 2]),
            ScriptedOracle::new(vec![Ok(PlacementVerdict::incorrect())]),
        );
        let mut session = session.with_logger(logger.clone());
        session.dispatch(RoundEvent::Start).await;
        session.dispatch(drop_on(1, 0)).await;

        let types = logger.types.lock().unwrap().clone();
        assert_eq!(
            types,
            vec!["question_loaded", "drop", "placement_judged", "game_over", "question_loaded"]
        );
    }
}
