use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

use crate::config::{BOARD_HEIGHT, BOARD_WIDTH, FRUIT_SCORE};
use crate::snake::{Direction, Snake};
use crate::Coords;

/// Playing field bounds, `[0, width) x [0, height)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Board {
    pub width: i32,
    pub height: i32,
}

impl Board {
    pub const STANDARD: Board = Board { width: BOARD_WIDTH, height: BOARD_HEIGHT };

    pub fn center(&self) -> Coords {
        (self.width / 2, self.height / 2)
    }

    pub fn contains(&self, pos: Coords) -> bool {
        (0..self.width).contains(&pos.0) && (0..self.height).contains(&pos.1)
    }

    /// Every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Coords> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EndReason {
    Wall,
    SelfCollision,
    Quit,
    /// No free cell was left for the next fruit.
    BoardFull,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Status {
    Running,
    Over(EndReason),
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    snake: Snake,
    fruit: Coords,
    pending: Option<Direction>,
    quit_requested: bool,
    score: u32,
    status: Status,
}

impl GameState {
    /// Snake at the center with no tail and no direction, fruit on a random free cell.
    pub fn new<R: Rng + ?Sized>(board: Board, rng: &mut R) -> Self {
        let snake = Snake::new(board.center());
        let (fruit, status) = match spawn_fruit(board, &snake, rng) {
            Some(fruit) => (fruit, Status::Running),
            None => (snake.head(), Status::Over(EndReason::BoardFull)),
        };

        GameState { board, snake, fruit, pending: None, quit_requested: false, score: 0, status }
    }

    #[cfg(test)]
    pub fn from_parts(board: Board, snake: Snake, fruit: Coords) -> Self {
        GameState {
            board,
            snake,
            fruit,
            pending: None,
            quit_requested: false,
            score: 0,
            status: Status::Running,
        }
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn fruit(&self) -> Coords {
        self.fruit
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status != Status::Running
    }

    /// Queues a direction for the next update. A turn straight back into the
    /// current direction of travel is ignored.
    pub fn steer(&mut self, dir: Direction) {
        if self.snake.can_turn(dir) {
            self.pending = Some(dir);
        }
    }

    /// Ends the game after the current tick's update has run.
    pub fn quit(&mut self) {
        self.quit_requested = true;
    }

    /// Advances the game by one tick. Does nothing once the game is over.
    /// A quit requested during the tick takes effect only if the tick itself
    /// did not end the game.
    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.is_over() {
            return;
        }

        self.advance(rng);

        if self.quit_requested {
            self.finish(EndReason::Quit);
        }
    }

    fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if let Some(dir) = self.pending.take() {
            self.snake.set_direction(dir);
        }

        let moved = match self.snake.move_step() {
            Some(moved) => moved,
            None => return,
        };

        debug!(
            from = ?moved.old_head,
            head = ?moved.new_head,
            direction = ?self.snake.direction(),
            tail_len = self.snake.tail_len(),
            "tick"
        );

        if !self.board.contains(moved.new_head) {
            self.finish(EndReason::Wall);
            return;
        }

        if self.snake.tail_contains(moved.new_head) {
            self.finish(EndReason::SelfCollision);
            return;
        }

        if moved.new_head == self.fruit {
            self.score += FRUIT_SCORE;
            self.snake.grow(moved.vacated);
            info!(score = self.score, tail_len = self.snake.tail_len(), "fruit eaten");

            match spawn_fruit(self.board, &self.snake, rng) {
                Some(fruit) => self.fruit = fruit,
                None => self.finish(EndReason::BoardFull),
            }
        }
    }

    fn finish(&mut self, reason: EndReason) {
        if !self.is_over() {
            info!(?reason, score = self.score, "game over");
            self.status = Status::Over(reason);
        }
    }
}

/// Picks a cell uniformly among those the snake does not cover.
fn spawn_fruit<R: Rng + ?Sized>(board: Board, snake: &Snake, rng: &mut R) -> Option<Coords> {
    let choices: Vec<Coords> = board.cells().filter(|pos| !snake.occupies(*pos)).collect();
    choices.choose(rng).copied()
}
