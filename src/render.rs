use std::iter;

use crate::state::GameState;
use crate::Coords;

const BORDER_CHAR: char = '#';
const HEAD_CHAR: char = 'O';
const FRUIT_CHAR: char = 'F';
const TAIL_CHAR: char = 'o';
const EMPTY_CHAR: char = ' ';

pub const LEGEND: &str = "Controls: W (Up), A (Left), S (Down), D (Right), X (Exit)";

/// Lines of one full frame: the bordered board, then the score and the legend.
/// Nothing is built until the iterator is consumed.
pub fn frame(state: &GameState) -> impl Iterator<Item = String> + '_ {
    let width = state.board().width.max(0) as usize;
    let height = state.board().height;
    let border: String = iter::repeat(BORDER_CHAR).take(width + 2).collect();

    iter::once(border.clone())
        .chain((0..height).map(move |y| row(state, y)))
        .chain(iter::once(border))
        .chain(iter::once(format!("Score: {}", state.score())))
        .chain(iter::once(LEGEND.to_string()))
}

fn row(state: &GameState, y: i32) -> String {
    let mut line = String::new();
    line.push(BORDER_CHAR);
    line.extend((0..state.board().width).map(|x| cell_char(state, (x, y))));
    line.push(BORDER_CHAR);
    line
}

fn cell_char(state: &GameState, pos: Coords) -> char {
    let snake = state.snake();

    if pos == snake.head() {
        HEAD_CHAR
    } else if pos == state.fruit() {
        FRUIT_CHAR
    } else if snake.tail_contains(pos) {
        TAIL_CHAR
    } else {
        EMPTY_CHAR
    }
}
