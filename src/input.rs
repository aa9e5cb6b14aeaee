use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::snake::Direction;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Steer(Direction),
    Quit,
}

/// Maps a key press to a game command. Letters are case-sensitive; anything
/// unrecognised yields `None` and is ignored by the caller.
pub fn command_for(key: &KeyEvent) -> Option<Command> {
    if is_ctrl_c(key) {
        return Some(Command::Quit);
    }

    match key.code {
        KeyCode::Char('w') | KeyCode::Up => Some(Command::Steer(Direction::Up)),
        KeyCode::Char('a') | KeyCode::Left => Some(Command::Steer(Direction::Left)),
        KeyCode::Char('s') | KeyCode::Down => Some(Command::Steer(Direction::Down)),
        KeyCode::Char('d') | KeyCode::Right => Some(Command::Steer(Direction::Right)),
        KeyCode::Char('x') => Some(Command::Quit),
        _ => None,
    }
}

// Raw mode swallows SIGINT, so Ctrl+C arrives as an ordinary key
fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
