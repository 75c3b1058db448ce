//! Value objects for the number line: sentinels, neighbours and drag ids

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::entities::{PlacedCard, PlacedCardId};
use crate::core::question::QuestionId;

/// Fixed sentinels bounding the number line
///
/// Sentinels are rendered around the line and never stored in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Boundary {
    Zero,
    Infinity,
}

impl Boundary {
    pub fn label(&self) -> &'static str {
        match self {
            Boundary::Zero => "0",
            Boundary::Infinity => "∞",
        }
    }
}

impl std::fmt::Display for Boundary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The placed questions bounding a slot (`None` at a sentinel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Neighbors {
    pub left: Option<QuestionId>,
    pub right: Option<QuestionId>,
}

/// One element of the rendered line, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position<'a> {
    Boundary(Boundary),
    Slot(usize),
    Card(&'a PlacedCard),
}

const QUESTION_PREFIX: &str = "question-";
const CARD_PREFIX: &str = "card-";
const SLOT_PREFIX: &str = "slot-";

/// Identifier of a drag source or drop target on the board
///
/// | form          | meaning                  |
/// |---------------|--------------------------|
/// | `question-N`  | the pending card         |
/// | `card-N`      | an already placed card   |
/// | `slot-N`      | the drop target at slot N|
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragId {
    Pending(QuestionId),
    Card(PlacedCardId),
    Slot(usize),
}

impl DragId {
    /// Drag id of the pending card for a question
    pub fn pending(id: QuestionId) -> Self {
        DragId::Pending(id)
    }

    /// Slot index named by a drop-target id, if it is one
    pub fn parse_slot(id: &str) -> Option<usize> {
        match id.parse::<DragId>() {
            Ok(DragId::Slot(index)) => Some(index),
            _ => None,
        }
    }
}

impl std::fmt::Display for DragId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DragId::Pending(id) => write!(f, "{QUESTION_PREFIX}{id}"),
            DragId::Card(id) => write!(f, "{id}"),
            DragId::Slot(index) => write!(f, "{SLOT_PREFIX}{index}"),
        }
    }
}

/// Strict decimal parse: digits only, no sign, no whitespace.
fn parse_index(digits: &str) -> Option<u64> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

impl FromStr for DragId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(rest) = s.strip_prefix(SLOT_PREFIX) {
            let index = parse_index(rest).ok_or(())?;
            return usize::try_from(index).map(DragId::Slot).map_err(|_| ());
        }
        if let Some(rest) = s.strip_prefix(QUESTION_PREFIX) {
            return parse_index(rest)
                .map(|v| DragId::Pending(QuestionId::new(v)))
                .ok_or(());
        }
        if let Some(rest) = s.strip_prefix(CARD_PREFIX) {
            return parse_index(rest)
                .map(|v| DragId::Card(PlacedCardId::new(v)))
                .ok_or(());
        }
        Err(())
    }
}
