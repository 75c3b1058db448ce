//! Structured log records for round transitions

use crate::ports::round_logger::RoundLogEvent;
use numline_domain::{DropEvent, RoundEvent, RoundState};
use serde_json::json;

/// Log records describing `event` after it was applied to `state`
///
/// Events that carry nothing worth keeping (`Start`, dismissals, loads of
/// nothing) produce no records.
pub fn records_for(event: &RoundEvent, state: &RoundState) -> Vec<RoundLogEvent> {
    let mut records = Vec::new();
    match event {
        RoundEvent::QuestionLoaded(question) => records.push(RoundLogEvent::new(
            "question_loaded",
            json!({
                "question_id": question.id,
                "category": question.category,
                "difficulty": question.difficulty,
            }),
        )),
        RoundEvent::QuestionLoadFailed(reason) => records.push(RoundLogEvent::new(
            "question_load_failed",
            json!({ "reason": reason }),
        )),
        RoundEvent::Dropped(DropEvent { active_id, over_id }) => {
            let accepted = state.in_flight();
            records.push(RoundLogEvent::new(
                "drop",
                json!({
                    "active_id": active_id,
                    "over_id": over_id,
                    "accepted": accepted.is_some(),
                    "request": accepted.map(|f| &f.request),
                }),
            ));
        }
        RoundEvent::PlacementJudged(verdict) => {
            records.push(RoundLogEvent::new(
                "placement_judged",
                json!({
                    "correct": verdict.correct,
                    "placed_answer": verdict.placed_answer,
                    "score": state.score(),
                    "line_length": state.line().len(),
                }),
            ));
            if !verdict.correct
                && let Some(over) = state.game_over()
            {
                records.push(RoundLogEvent::new(
                    "game_over",
                    json!({
                        "final_score": over.final_score,
                        "best_score": state.best_score(),
                    }),
                ));
            }
        }
        RoundEvent::PlacementFailed(reason) => records.push(RoundLogEvent::new(
            "placement_failed",
            json!({ "reason": reason }),
        )),
        RoundEvent::Start | RoundEvent::DismissGameOver => {}
    }
    records
}
