//! CLI entrypoint for numline
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use numline_application::{
    EffectRunner, GameSession, LookupQuestionUseCase, NoRoundLogger, RoundLogger,
};
use numline_domain::QuestionId;
use numline_infrastructure::{
    ConfigLoader, FileConfig, FileOutputFormat, HttpGameApi, JsonlRoundLogger,
};
use numline_presentation::{
    BoardApp, BoardConfig, Cli, Command, ConsoleFormatter, OutputFormat, PlainRepl,
    QuestionCommand, ReplConfig,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        print!("{}", ConfigLoader::describe_sources(cli.config.as_deref()));
        println!();
        let config = load_config(&cli)?;
        print!("{}", config.to_toml());
        return Ok(());
    }

    let config = load_config(&cli)?;
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {}", e))?;

    let command = cli.command();
    let board_owns_terminal = command == Command::Play { plain: false };
    let _log_guard = init_logging(cli.verbose, &config, board_owns_terminal)?;

    info!("Starting numline against {}", config.api.base_url);

    if !config.output.color {
        ConsoleFormatter::set_color(false);
    }

    // === Dependency Injection ===
    let api = Arc::new(
        HttpGameApi::new(&config.api.base_url, config.api.timeout())
            .context("Failed to create HTTP client")?,
    );

    match command {
        Command::Play { plain } => {
            let runner = EffectRunner::new(Arc::clone(&api), Arc::clone(&api));
            let logger = round_logger(&config);

            if plain {
                let session = GameSession::new(runner).with_logger(logger);
                let mut repl = PlainRepl::new(session).with_config(ReplConfig {
                    show_progress: true,
                    history_file: data_dir().map(|d| d.join("history.txt")),
                });
                repl.run().await?;
            } else {
                let mut app = BoardApp::new(runner)
                    .with_logger(logger)
                    .with_config(BoardConfig {
                        mouse: config.board.mouse,
                        tick: Duration::from_millis(config.board.tick_ms),
                    });
                app.run().await?;
            }
        }
        Command::Question(question_command) => {
            let format = cli.output.unwrap_or(match config.output.format {
                FileOutputFormat::Text => OutputFormat::Text,
                FileOutputFormat::Json => OutputFormat::Json,
            });
            let use_case = LookupQuestionUseCase::new(api);

            let output = match question_command {
                QuestionCommand::Random => {
                    let question = use_case
                        .random()
                        .await
                        .context("Could not fetch a random question")?;
                    match format {
                        OutputFormat::Text => ConsoleFormatter::format_question(&question),
                        OutputFormat::Json => ConsoleFormatter::question_json(&question),
                    }
                }
                QuestionCommand::Show { id } => {
                    let detail = use_case
                        .by_id(QuestionId::new(id))
                        .await
                        .with_context(|| format!("Could not fetch question {id}"))?;
                    match format {
                        OutputFormat::Text => ConsoleFormatter::format_detail(&detail),
                        OutputFormat::Json => ConsoleFormatter::detail_json(&detail),
                    }
                }
            };
            println!("{}", output.trim_end());
        }
    }

    Ok(())
}

/// Merge config sources, then apply CLI overrides
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        match ConfigLoader::load(cli.config.as_deref()) {
            Ok(config) => config,
            Err(e) => bail!("Failed to load configuration: {}", e),
        }
    };

    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }
    if let Some(format) = cli.output {
        config.output.format = match format {
            OutputFormat::Text => FileOutputFormat::Text,
            OutputFormat::Json => FileOutputFormat::Json,
        };
    }

    Ok(config)
}

/// Initialize tracing; while the board owns the terminal, logs go to a file
fn init_logging(
    verbose: u8,
    config: &FileConfig,
    to_file: bool,
) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if !to_file {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    }

    let path = match &config.log.file {
        Some(file) => PathBuf::from(file),
        None => match data_dir() {
            Some(dir) => dir.join("numline.log"),
            None => PathBuf::from("numline.log"),
        },
    };
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let file_name = path
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("numline.log"));

    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Could not create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(&dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

fn round_logger(config: &FileConfig) -> Arc<dyn RoundLogger> {
    let Some(path) = &config.log.round_log else {
        return Arc::new(NoRoundLogger);
    };
    match JsonlRoundLogger::open(path) {
        Some(logger) => {
            info!("Writing round log to {}", logger.path().display());
            Arc::new(logger)
        }
        None => {
            warn!("Round log disabled: could not open {}", path);
            Arc::new(NoRoundLogger)
        }
    }
}

/// `$XDG_DATA_HOME/numline` (or the platform equivalent)
fn data_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("numline"))
}
