use std::thread::sleep;
use std::time::Instant;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::config::GameConfig;
use crate::input::{self, Command};
use crate::render;
use crate::state::{Board, GameState};
use crate::term::Terminal;

/// Drives render -> input -> update once per tick until the game ends.
pub struct SnakeGame<T: Terminal> {
    term: T,
    config: GameConfig,
    rng: StdRng,
}

impl<T: Terminal> SnakeGame<T> {
    pub fn new(term: T, config: GameConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        info!(seed, tick_ms = config.tick.as_millis() as u64, "new game");

        SnakeGame { term, config, rng: StdRng::seed_from_u64(seed) }
    }

    /// Plays one game on the standard board and returns its final state.
    pub fn play(&mut self) -> Result<GameState> {
        let mut state = GameState::new(Board::STANDARD, &mut self.rng);

        while !state.is_over() {
            self.term.draw(render::frame(&state))?;

            match self.read_command()? {
                Some(Command::Steer(dir)) => state.steer(dir),
                Some(Command::Quit) => state.quit(),
                None => {}
            }

            state.update(&mut self.rng);
        }

        // Leave the fatal position on screen
        self.term.draw(render::frame(&state))?;
        Ok(state)
    }

    pub fn into_terminal(self) -> T {
        self.term
    }

    /// Takes the first recognised command within this tick's budget, then
    /// waits out the rest of the tick. Later keys stay queued for the next one.
    fn read_command(&mut self) -> Result<Option<Command>> {
        let deadline = Instant::now() + self.config.tick;

        let command = loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            match self.term.poll_key(timeout)? {
                Some(key) => {
                    if let Some(command) = input::command_for(&key) {
                        break Some(command);
                    }
                }
                None => break None,
            }
        };

        let rest = deadline.saturating_duration_since(Instant::now());
        if !rest.is_zero() {
            sleep(rest);
        }

        Ok(command)
    }
}
