//! Birthday Gate - CLI
//!
//! Welcome screen, word puzzle and birthday message, in a TUI or as plain
//! line-based prompts.

use anyhow::Result;
use birthday_gate::{
    commands::{check_guess, run_simple, verify_expected},
    core::Feedback,
    config::GameConfig,
    logging,
    output::print_check_result,
};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "birthday_gate",
    about = "A birthday greeting behind a seven-letter word puzzle",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Animation speed factor: 2 is twice as fast, 0 disables all delays
    #[arg(short, long, global = true, default_value = "1.0")]
    speed: f64,

    /// Append log records to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode (no TUI)
    Simple,

    /// Show the feedback a guess would get
    Check {
        /// The 7-letter guess
        guess: String,

        /// Fail unless the guess scores this pattern (e.g. "-GGGGG-" or emoji)
        #[arg(short, long)]
        expect: Option<Feedback>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        logging::init(path, cli.log_level)?;
    }

    let config = GameConfig::with_speed(cli.speed);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(config),
        Commands::Simple => run_simple(config).map_err(|e| anyhow::anyhow!(e)),
        Commands::Check { guess, expect } => run_check_command(&guess, expect.as_ref()),
    }
}

fn run_check_command(guess: &str, expect: Option<&Feedback>) -> Result<()> {
    let (word, feedback) = check_guess(guess).map_err(|e| anyhow::anyhow!(e))?;
    print_check_result(&word, &feedback);
    if let Some(expected) = expect {
        verify_expected(&feedback, expected).map_err(|e| anyhow::anyhow!(e))?;
    }
    Ok(())
}

fn run_play_command(config: GameConfig) -> Result<()> {
    use birthday_gate::interactive::{App, run_tui};

    let app = App::new(config);
    run_tui(app)
}
