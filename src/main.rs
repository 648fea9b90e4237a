//! Marty Pong entry point
//!
//! Parses the command line, loads settings and runs the fixed-tick loop in
//! the terminal.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use thiserror::Error;

use marty_pong::input;
use marty_pong::sim::{GameEvent, GameState};
use marty_pong::term::{KeyTracker, TerminalSession};
use marty_pong::{LanguageMode, Settings, SettingsError, StateMachine};

#[derive(Parser, Debug)]
#[command(version, about = "Two-paddle Pong in the terminal")]
struct Cli {
    /// JSON settings file
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Fixed RNG seed for a reproducible match
    #[arg(long)]
    seed: Option<u64>,
    /// Language at startup: both, english or native
    #[arg(long)]
    language: Option<LanguageMode>,
    /// Write the effective settings as JSON to PATH and exit
    #[arg(long, value_name = "PATH")]
    write_default_settings: Option<PathBuf>,
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}

/// Falling further behind than this drops the backlog instead of catching up
const MAX_LAG: Duration = Duration::from_millis(250);

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("marty-pong: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let mut settings = match &cli.settings {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(seed) = cli.seed {
        settings.seed = Some(seed);
    }
    if let Some(language) = cli.language {
        settings.language = language;
    }
    settings.validate()?;

    if let Some(path) = &cli.write_default_settings {
        settings.save(path)?;
        return Ok(());
    }

    let seed = settings.seed.unwrap_or_else(rand::random::<u64>);
    log::info!("Marty Pong starting with seed: {seed}");

    let game = GameState::new(seed)
        .with_goal_pause(settings.goal_pause_ticks)
        .with_vertical_cap(settings.max_vertical_speed);
    let mut machine = StateMachine::new(game, settings.language);

    let mut session = TerminalSession::enter()?;
    let mut keys = KeyTracker::new(settings.key_hold());
    session.draw(&machine.snapshot())?;

    let mut next_tick = Instant::now();
    while !machine.is_exiting() {
        next_tick += settings.tick_interval(machine.mode());
        session.pump_until(next_tick, &mut keys)?;

        let now = Instant::now();
        if now.saturating_duration_since(next_tick) > MAX_LAG {
            log::debug!("Tick loop fell behind, resyncing");
            next_tick = now;
        }

        let tick_input = input::sample(&keys.take(now));
        for event in machine.update(&tick_input) {
            match event {
                GameEvent::Goal { scorer } => {
                    let score = machine.game().score;
                    log::debug!("Goal for {scorer:?}: {} - {}", score.left, score.right);
                }
                other => log::trace!("{other:?}"),
            }
        }
        session.draw(&machine.snapshot())?;
    }

    let score = machine.game().score;
    log::info!("Exiting with final score {} - {}", score.left, score.right);
    Ok(())
}
