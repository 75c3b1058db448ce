//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid question id: {0}")]
    InvalidQuestionId(String),

    #[error("Invalid difficulty: {0} (expected easy, medium or hard)")]
    InvalidDifficulty(String),

    #[error("Slot {slot} is outside the line (length {len})")]
    SlotOutOfRange { slot: usize, len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_out_of_range_display() {
        let error = DomainError::SlotOutOfRange { slot: 5, len: 2 };
        assert_eq!(error.to_string(), "Slot 5 is outside the line (length 2)");
    }

    #[test]
    fn test_invalid_difficulty_display() {
        let error = DomainError::InvalidDifficulty("impossible".to_string());
        assert!(error.to_string().contains("impossible"));
    }
}
