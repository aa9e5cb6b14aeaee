mod config;
mod game;
mod input;
mod render;
mod snake;
mod state;
mod term;

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use config::{GameConfig, BOARD_HEIGHT, BOARD_WIDTH, DEFAULT_TICK_MS};
use game::SnakeGame;
use state::{EndReason, GameState, Status};
use term::TermManager;

pub type Coords = (i32, i32);

#[derive(Parser)]
#[command(name = "console-snake")]
#[command(version, about = "Classic snake in the terminal")]
struct Cli {
    /// Milliseconds per game tick
    #[arg(long, default_value_t = DEFAULT_TICK_MS)]
    tick_ms: u64,

    /// Seed for fruit placement, for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs here instead of stderr (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_logging(cli.log_file.as_deref()) {
        eprintln!("Error: {:?}", err);
        return ExitCode::FAILURE;
    }

    match run(GameConfig::new(cli.tick_ms, cli.seed)) {
        Ok(state) => {
            report(&state);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{:#}", err);
            eprintln!("Error: {:?}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            subscriber.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => subscriber.with_writer(std::io::stderr).init(),
    }

    Ok(())
}

fn run(config: GameConfig) -> Result<GameState> {
    let mut term = TermManager::new();
    // Board plus borders, score and legend
    let min_size = ((BOARD_WIDTH + 2) as u16, (BOARD_HEIGHT + 4) as u16);
    let setup = term.setup(min_size);

    let mut game = SnakeGame::new(term, config);
    let result = setup.and_then(|()| game.play());

    // The terminal goes back to normal whatever happened during the game
    let restored = game.into_terminal().restore();
    let state = result?;
    restored?;
    Ok(state)
}

fn report(state: &GameState) {
    let headline = match state.status() {
        Status::Over(EndReason::Quit) => "--- QUIT ---",
        Status::Over(EndReason::BoardFull) => "--- YOU WON ---",
        _ => "--- GAME OVER ---",
    };

    println!();
    println!("{}", headline);
    println!("Final Score: {}", state.score());
}
