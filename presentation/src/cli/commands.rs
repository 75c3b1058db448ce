//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for one-shot commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human readable, colored when the terminal allows it
    Text,
    /// JSON output
    Json,
}

/// CLI arguments for numline
#[derive(Parser, Debug)]
#[command(name = "numline")]
#[command(author, version, about = "Place trivia answers on a number line from 0 to ∞")]
#[command(long_about = r#"
numline is a trivia game played on a number line. Each question has a
numeric answer you never see; drop the question between the cards whose
answers bracket it. A wrong placement ends the run and clears the line.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./numline.toml      Project-level config
3. ~/.config/numline/config.toml   Global config

Example:
  numline
  numline play --plain
  numline --api-url http://localhost:8000/api question random
  numline -o json question show 12
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Base URL of the question and validation services
    #[arg(long, value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// The command to run, `play` when none was given
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Play { plain: false })
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play a round on the board (default)
    Play {
        /// Use the line-oriented prompt instead of the full-screen board
        #[arg(long)]
        plain: bool,
    },

    /// Look up questions without playing
    #[command(subcommand)]
    Question(QuestionCommand),
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum QuestionCommand {
    /// Fetch a random question (answer hidden)
    Random,
    /// Fetch a question by id, including its answer
    Show {
        /// Question id
        id: u64,
    },
}
