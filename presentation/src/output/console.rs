//! Console output formatter for questions and the number line

use colored::Colorize;
use numline_domain::{GameOver, Position, Question, QuestionDetail, RoundState};
use serde_json::json;

/// Formats game data for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Force colored output off (or back to terminal detection)
    pub fn set_color(enabled: bool) {
        if enabled {
            colored::control::unset_override();
        } else {
            colored::control::set_override(false);
        }
    }

    /// Format a question without its answer
    pub fn format_question(question: &Question) -> String {
        format!(
            "{} {}\n{} {}  {} {}\n",
            format!("#{}", question.id).yellow().bold(),
            question.text,
            "Category:".cyan().bold(),
            question.category,
            "Difficulty:".cyan().bold(),
            question.difficulty
        )
    }

    /// Format a question together with its answer
    pub fn format_detail(detail: &QuestionDetail) -> String {
        format!(
            "{}{} {}\n",
            Self::format_question(&detail.question),
            "Answer:".green().bold(),
            detail.answer
        )
    }

    /// JSON for a question, using the service's field names
    pub fn question_json(question: &Question) -> String {
        Self::pretty(json!({
            "id": question.id,
            "question": question.text,
            "category": question.category,
            "difficulty": question.difficulty,
        }))
    }

    /// JSON for a question with its answer
    pub fn detail_json(detail: &QuestionDetail) -> String {
        let question = &detail.question;
        Self::pretty(json!({
            "id": question.id,
            "question": question.text,
            "answer": detail.answer,
            "category": question.category,
            "difficulty": question.difficulty,
        }))
    }

    fn pretty(value: serde_json::Value) -> String {
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
    }

    /// Format the board for the plain prompt
    ///
    /// Slots are shown as `[i]` so the player can type the index.
    pub fn format_round(state: &RoundState) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {}   {} {}\n",
            "Score:".cyan().bold(),
            state.score(),
            "Best:".cyan().bold(),
            state.best_score()
        ));

        for position in state.line().positions() {
            let row = match position {
                Position::Boundary(boundary) => format!("  {}", boundary.label().bold()),
                Position::Slot(index) => format!("    {}", format!("[{index}]").dimmed()),
                Position::Card(card) => format!(
                    "  {} {} {}",
                    "│".dimmed(),
                    card.question.text,
                    format!("({})", card.question.category).dimmed()
                ),
            };
            output.push_str(&row);
            output.push('\n');
        }

        output.push('\n');
        output.push_str(&Self::format_pending(state));

        if let Some(message) = state.message() {
            output.push_str(&Self::format_message(message));
        }

        output
    }

    fn format_pending(state: &RoundState) -> String {
        match state.pending() {
            Some(question) if state.is_validating() => {
                format!("{} {}\n", "Checking:".yellow().bold(), question.text)
            }
            Some(question) => format!(
                "{} {} {}\n",
                "Place:".green().bold(),
                question.text,
                format!("({}, {})", question.category, question.difficulty).dimmed()
            ),
            None if state.is_loading() => format!("{}\n", "Loading question...".dimmed()),
            None => format!("{}\n", "No question loaded. Type /new to retry.".dimmed()),
        }
    }

    /// Format a status message, colored by whether it reports success
    pub fn format_message(message: &str) -> String {
        if message.starts_with("Correct") {
            format!("{}\n", message.green().bold())
        } else {
            format!("{}\n", message.red().bold())
        }
    }

    /// Format the game-over summary
    pub fn format_game_over(game_over: &GameOver) -> String {
        let mut output = Self::header("Game Over");
        output.push_str(&format!(
            "\n{} {}\n",
            "Final score:".cyan().bold(),
            game_over.final_score
        ));

        let answers = [
            ("Your card:", game_over.placed_answer),
            ("Left neighbour:", game_over.left_answer),
            ("Right neighbour:", game_over.right_answer),
        ];
        for (label, answer) in answers {
            if let Some(answer) = answer {
                output.push_str(&format!("{} {}\n", label.cyan(), answer));
            }
        }

        output.push_str(&format!("\n{}\n", "Type /new to start a new game.".dimmed()));
        output
    }

    fn header(title: &str) -> String {
        let line = "═".repeat(40);
        format!(
            "{}\n{}\n{}\n",
            line.cyan(),
            format!("  {}", title).cyan().bold(),
            line.cyan()
        )
    }
}
