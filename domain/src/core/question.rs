//! Question value objects

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::DomainError;

/// Identifier assigned to a question by the question service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(u64);

impl QuestionId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for QuestionId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for QuestionId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| DomainError::InvalidQuestionId(s.to_string()))
    }
}

/// Question difficulty as labelled by the question service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(DomainError::InvalidDifficulty(other.to_string())),
        }
    }
}

/// A trivia question as seen by the player (Value Object)
///
/// The numeric answer is withheld; ordering between questions is only
/// known to the placement oracle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    pub category: String,
    pub difficulty: Difficulty,
}

impl Question {
    pub fn new(
        id: impl Into<QuestionId>,
        text: impl Into<String>,
        category: impl Into<String>,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            category: category.into(),
            difficulty,
        }
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A question together with its answer, as returned by the by-id lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDetail {
    pub question: Question,
    pub answer: u64,
}

impl QuestionDetail {
    pub fn new(question: Question, answer: u64) -> Self {
        Self { question, answer }
    }

    pub fn id(&self) -> QuestionId {
        self.question.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_id_from_str() {
        assert_eq!("42".parse::<QuestionId>().unwrap(), QuestionId::new(42));
        assert_eq!(" 7 ".parse::<QuestionId>().unwrap(), QuestionId::new(7));
        assert!("abc".parse::<QuestionId>().is_err());
        assert!("-1".parse::<QuestionId>().is_err());
    }

    #[test]
    fn test_difficulty_parse_case_insensitive() {
        assert_eq!("Easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!("HARD".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!("impossible".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_difficulty_serde_lowercase() {
        let json = serde_json::to_string(&Difficulty::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
        let parsed: Result<Difficulty, _> = serde_json::from_str("\"impossible\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_question_display_is_text() {
        let q = Question::new(1, "Year the Declaration was signed?", "History", Difficulty::Easy);
        assert_eq!(q.to_string(), "Year the Declaration was signed?");
    }
}
