//! Line-oriented game prompt
//!
//! The number line is printed with numbered slots; typing a slot index
//! drops the pending question there.

use crate::config::ReplConfig;
use crate::output::console::ConsoleFormatter;
use crate::progress::spinner::ActivitySpinner;
use colored::Colorize;
use numline_application::{GameSession, PlacementOracle, QuestionSource};
use numline_domain::{DomainError, DragId, DropEvent, RoundEvent};
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use tracing::warn;

const HISTORY_CAPACITY: usize = 500;

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplInput {
    /// Drop the pending question on this slot
    Slot(usize),
    /// Start a new game (dismisses a finished one)
    New,
    /// Retry loading a question
    Retry,
    Help,
    Quit,
    Empty,
    Invalid(String),
}

impl ReplInput {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return ReplInput::Empty;
        }

        match line {
            "/new" | "/n" => return ReplInput::New,
            "/retry" | "/r" => return ReplInput::Retry,
            "/help" | "/h" | "/?" => return ReplInput::Help,
            "/quit" | "/exit" | "/q" => return ReplInput::Quit,
            _ => {}
        }

        if line.bytes().all(|b| b.is_ascii_digit())
            && let Ok(slot) = line.parse()
        {
            return ReplInput::Slot(slot);
        }

        ReplInput::Invalid(line.to_string())
    }
}

/// Whether the prompt keeps running after an input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Interactive game on a plain prompt
pub struct PlainRepl<S: QuestionSource + 'static, O: PlacementOracle + 'static> {
    session: GameSession<S, O>,
    config: ReplConfig,
}

impl<S: QuestionSource + 'static, O: PlacementOracle + 'static> PlainRepl<S, O> {
    pub fn new(session: GameSession<S, O>) -> Self {
        Self {
            session,
            config: ReplConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the prompt until `/quit` or end of input
    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut editor = self.editor();
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("slot".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();
        self.dispatch(RoundEvent::Start, "Loading question...").await;

        loop {
            let line = match editor.read_line(&prompt)? {
                Signal::Success(line) => line,
                Signal::CtrlD => {
                    println!("Bye!");
                    break;
                }
                _ => {
                    println!("^C");
                    continue;
                }
            };

            if self.handle(ReplInput::parse(&line)).await == Flow::Quit {
                println!("Bye!");
                break;
            }
        }

        Ok(())
    }

    fn editor(&self) -> Reedline {
        let editor = Reedline::create();
        let Some(path) = self.config.history_file.clone() else {
            return editor;
        };

        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
            Ok(history) => editor.with_history(Box::new(history)),
            Err(e) => {
                warn!("Could not open history file {}: {}", path.display(), e);
                editor
            }
        }
    }

    /// Act on one input line
    pub async fn handle(&mut self, input: ReplInput) -> Flow {
        match input {
            ReplInput::Empty => {}
            ReplInput::Quit => return Flow::Quit,
            ReplInput::Help => self.print_help(),
            ReplInput::New => {
                let event = if self.session.state().game_over().is_some() {
                    RoundEvent::DismissGameOver
                } else {
                    RoundEvent::Start
                };
                self.dispatch(event, "Loading question...").await;
            }
            ReplInput::Retry => self.dispatch(RoundEvent::Start, "Loading question...").await,
            ReplInput::Slot(slot) => match self.drop_on(slot) {
                Ok(event) => {
                    self.dispatch(RoundEvent::Dropped(event), "Checking placement...")
                        .await
                }
                Err(reason) => println!("{}", reason.yellow()),
            },
            ReplInput::Invalid(text) => {
                println!(
                    "{} {:?}. Type a slot number or /help.",
                    "Unknown input".yellow(),
                    text
                );
            }
        }
        Flow::Continue
    }

    /// Build the drop for `slot`, or explain why there is nothing to drop
    fn drop_on(&self, slot: usize) -> Result<DropEvent, String> {
        let state = self.session.state();
        if state.game_over().is_some() {
            return Err("The game is over. Type /new to start a new game.".to_string());
        }
        let Some(active) = state.pending_drag_id() else {
            return Err("No question to place yet. Type /retry to load one.".to_string());
        };
        if !state.line().contains_slot(slot) {
            let len = state.line().len();
            return Err(DomainError::SlotOutOfRange { slot, len }.to_string());
        }
        Ok(DropEvent::over(active.to_string(), DragId::Slot(slot).to_string()))
    }

    async fn dispatch(&mut self, event: RoundEvent, activity: &str) {
        let spinner = ActivitySpinner::start(activity, self.config.show_progress);
        let state = self.session.dispatch(event).await;
        spinner.finish();

        println!();
        if let Some(game_over) = state.game_over() {
            print!("{}", ConsoleFormatter::format_game_over(game_over));
        } else {
            print!("{}", ConsoleFormatter::format_round(state));
        }
    }

    pub fn session(&self) -> &GameSession<S, O> {
        &self.session
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│              numline - Plain Mode           │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Place each question between the cards whose answers bracket it.");
        self.print_help();
    }

    fn print_help(&self) {
        println!();
        println!("Commands:");
        println!("  <number>        - Drop the question on that slot");
        println!("  /new, /n        - Start a new game");
        println!("  /retry, /r      - Retry loading a question");
        println!("  /help, /h, /?   - Show this help");
        println!("  /quit, /q       - Exit");
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{CountingQuestions, QueuedOracle, runner};
    use numline_application::ServiceError;
    use numline_domain::{PlacementVerdict, QuestionId};

    fn repl(oracle: QueuedOracle) -> PlainRepl<CountingQuestions, QueuedOracle> {
        PlainRepl::new(GameSession::new(runner(oracle))).with_config(ReplConfig {
            show_progress: false,
            history_file: None,
        })
    }

    #[test]
    fn test_parse_input() {
        assert_eq!(ReplInput::parse(" 3 "), ReplInput::Slot(3));
        assert_eq!(ReplInput::parse("0"), ReplInput::Slot(0));
        assert_eq!(ReplInput::parse("/new"), ReplInput::New);
        assert_eq!(ReplInput::parse("/q"), ReplInput::Quit);
        assert_eq!(ReplInput::parse("/?"), ReplInput::Help);
        assert_eq!(ReplInput::parse("/r"), ReplInput::Retry);
        assert_eq!(ReplInput::parse(""), ReplInput::Empty);
        assert_eq!(ReplInput::parse("-1"), ReplInput::Invalid("-1".into()));
        assert_eq!(ReplInput::parse("+2"), ReplInput::Invalid("+2".into()));
        assert_eq!(ReplInput::parse("slot-2"), ReplInput::Invalid("slot-2".into()));
    }

    #[tokio::test]
    async fn test_slot_input_places_pending_question() {
        let mut repl = repl(QueuedOracle::default());
        repl.handle(ReplInput::Retry).await;
        assert_eq!(repl.session().state().pending().map(|q| q.id), Some(QuestionId::new(1)));

        assert_eq!(repl.handle(ReplInput::Slot(0)).await, Flow::Continue);

        let state = repl.session().state();
        assert_eq!(state.score(), 1);
        assert_eq!(state.line().len(), 1);
        assert_eq!(state.pending().map(|q| q.id), Some(QuestionId::new(2)));
        assert_eq!(state.message(), Some("Correct!"));
    }

    #[tokio::test]
    async fn test_out_of_range_slot_is_not_dropped() {
        let mut repl = repl(QueuedOracle::default());
        repl.handle(ReplInput::Retry).await;

        assert!(repl.drop_on(5).is_err());
        repl.handle(ReplInput::Slot(5)).await;

        let state = repl.session().state();
        assert_eq!(state.score(), 0);
        assert!(state.line().is_empty());
        assert_eq!(state.pending().map(|q| q.id), Some(QuestionId::new(1)));
    }

    #[tokio::test]
    async fn test_new_dismisses_game_over() {
        let mut repl = repl(QueuedOracle::new(vec![Ok(PlacementVerdict::incorrect())]));
        repl.handle(ReplInput::Retry).await;
        repl.handle(ReplInput::Slot(0)).await;
        assert!(repl.session().state().game_over().is_some());
        assert!(repl.drop_on(0).is_err());

        repl.handle(ReplInput::New).await;

        let state = repl.session().state();
        assert!(state.game_over().is_none());
        assert!(state.pending().is_some());
        assert!(repl.drop_on(0).is_ok());
    }

    #[tokio::test]
    async fn test_validation_failure_keeps_question() {
        let mut repl = repl(QueuedOracle::new(vec![Err(ServiceError::Timeout)]));
        repl.handle(ReplInput::Retry).await;
        repl.handle(ReplInput::Slot(0)).await;

        let state = repl.session().state();
        assert_eq!(state.pending().map(|q| q.id), Some(QuestionId::new(1)));
        assert!(state.message().unwrap().starts_with("Could not validate placement"));
        assert!(!state.is_validating());
    }

    #[tokio::test]
    async fn test_quit() {
        let mut repl = repl(QueuedOracle::default());
        assert_eq!(repl.handle(ReplInput::Quit).await, Flow::Quit);
    }
}
