//! Number line entities

use serde::{Deserialize, Serialize};

use super::value_objects::{Boundary, Neighbors, Position};
use crate::core::error::DomainError;
use crate::core::question::Question;

/// Stable identifier of a card on the line, distinct from its question id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlacedCardId(u64);

impl PlacedCardId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for PlacedCardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "card-{}", self.0)
    }
}

/// A question that was validated into the line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedCard {
    pub id: PlacedCardId,
    pub question: Question,
}

/// The player's claimed ordering of questions (Entity)
///
/// Conceptually bounded by [`Boundary::Zero`] on the left and
/// [`Boundary::Infinity`] on the right. Slot `i` is the gap before card `i`,
/// so a line of `n` cards has slots `0..=n`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    cards: Vec<PlacedCard>,
    /// Card ids are never reused, even across `clear()`.
    next_card_id: u64,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[PlacedCard] {
        &self.cards
    }

    pub fn contains_slot(&self, slot: usize) -> bool {
        slot <= self.cards.len()
    }

    /// Questions on either side of `slot`, or `None` if the slot does not exist
    pub fn neighbors(&self, slot: usize) -> Option<Neighbors> {
        if !self.contains_slot(slot) {
            return None;
        }
        let left = slot
            .checked_sub(1)
            .and_then(|i| self.cards.get(i))
            .map(|c| c.question.id);
        let right = self.cards.get(slot).map(|c| c.question.id);
        Some(Neighbors { left, right })
    }

    /// Insert a question at `slot`, returning the new card's id
    pub fn insert(&mut self, slot: usize, question: Question) -> Result<PlacedCardId, DomainError> {
        if !self.contains_slot(slot) {
            return Err(DomainError::SlotOutOfRange {
                slot,
                len: self.cards.len(),
            });
        }
        let id = PlacedCardId::new(self.next_card_id);
        self.next_card_id += 1;
        self.cards.insert(slot, PlacedCard { id, question });
        Ok(id)
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Render order: `0`, slot 0, card 0, slot 1, …, slot n, `∞`
    pub fn positions(&self) -> Vec<Position<'_>> {
        let mut positions = Vec::with_capacity(self.cards.len() * 2 + 3);
        positions.push(Position::Boundary(Boundary::Zero));
        for (index, card) in self.cards.iter().enumerate() {
            positions.push(Position::Slot(index));
            positions.push(Position::Card(card));
        }
        positions.push(Position::Slot(self.cards.len()));
        positions.push(Position::Boundary(Boundary::Infinity));
        positions
    }
}
