use std::collections::VecDeque;

use crate::Coords;
use Direction::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn is_opposite(self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Up, Down) | (Down, Up) | (Right, Left) | (Left, Right)
        )
    }

    pub fn step(self, pos: Coords) -> Coords {
        match self {
            Up => (pos.0, pos.1 - 1),
            Down => (pos.0, pos.1 + 1),
            Left => (pos.0 - 1, pos.1),
            Right => (pos.0 + 1, pos.1),
        }
    }
}

/// Result of one step: where the head went and which cell the tail end left.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Moved {
    pub old_head: Coords,
    pub new_head: Coords,
    pub vacated: Coords,
}

/// The head is tracked on its own; `tail[0]` is the segment right behind it.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    head: Coords,
    tail: VecDeque<Coords>,
    direction: Option<Direction>,
}

impl Snake {
    /// A stationary snake with no tail, waiting for its first direction.
    pub fn new(head: Coords) -> Self {
        Snake { head, tail: VecDeque::new(), direction: None }
    }

    #[cfg(test)]
    pub fn from_parts(head: Coords, tail: impl IntoIterator<Item = Coords>, direction: Option<Direction>) -> Self {
        Snake { head, tail: tail.into_iter().collect(), direction }
    }

    pub fn head(&self) -> Coords {
        self.head
    }

    #[cfg(test)]
    pub fn tail(&self) -> &VecDeque<Coords> {
        &self.tail
    }

    pub fn tail_len(&self) -> usize {
        self.tail.len()
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Whether turning to `dir` would not send the head back over itself.
    pub fn can_turn(&self, dir: Direction) -> bool {
        match self.direction {
            Some(current) => !current.is_opposite(dir),
            None => true,
        }
    }

    pub fn set_direction(&mut self, new_direction: Direction) {
        if self.can_turn(new_direction) {
            self.direction = Some(new_direction);
        }
    }

    pub fn tail_contains(&self, pos: Coords) -> bool {
        self.tail.contains(&pos)
    }

    pub fn occupies(&self, pos: Coords) -> bool {
        self.head == pos || self.tail_contains(pos)
    }

    /// Shifts every tail segment into the slot of the one ahead of it, then
    /// advances the head. Nothing moves until a direction has been chosen.
    pub fn move_step(&mut self) -> Option<Moved> {
        let dir = self.direction?;
        let old_head = self.head;

        self.tail.push_front(old_head);
        // Never empty: the old head was just pushed
        let vacated = self.tail.pop_back().unwrap_or(old_head);

        self.head = dir.step(old_head);
        Some(Moved { old_head, new_head: self.head, vacated })
    }

    /// Appends a segment at the end of the tail.
    pub fn grow(&mut self, at: Coords) {
        self.tail.push_back(at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions() {
        assert!(Up.is_opposite(Down));
        assert!(Down.is_opposite(Up));
        assert!(Left.is_opposite(Right));
        assert!(Right.is_opposite(Left));

        assert!(!Up.is_opposite(Left));
        assert!(!Right.is_opposite(Right));
    }

    #[test]
    fn test_direction_step() {
        assert_eq!(Up.step((5, 5)), (5, 4));
        assert_eq!(Down.step((5, 5)), (5, 6));
        assert_eq!(Left.step((5, 5)), (4, 5));
        assert_eq!(Right.step((5, 5)), (6, 5));
    }

    #[test]
    fn test_stationary_until_direction_set() {
        let mut snake = Snake::new((20, 10));
        assert_eq!(snake.move_step(), None);
        assert_eq!(snake.head(), (20, 10));
        assert_eq!(snake.tail_len(), 0);
    }

    #[test]
    fn test_reverse_turn_rejected() {
        let mut snake = Snake::new((20, 10));
        snake.set_direction(Right);
        snake.set_direction(Left);
        assert_eq!(snake.direction(), Some(Right));

        snake.set_direction(Up);
        assert_eq!(snake.direction(), Some(Up));
    }

    #[test]
    fn test_tail_follows_head() {
        let mut snake = Snake::from_parts((5, 5), vec![(4, 5), (3, 5), (2, 5)], Some(Right));
        snake.set_direction(Down);

        let moved = snake.move_step().unwrap();

        assert_eq!(moved, Moved { old_head: (5, 5), new_head: (5, 6), vacated: (2, 5) });
        assert_eq!(snake.tail().iter().copied().collect::<Vec<_>>(), vec![(5, 5), (4, 5), (3, 5)]);
    }

    #[test]
    fn test_empty_tail_vacates_old_head() {
        let mut snake = Snake::new((1, 1));
        snake.set_direction(Right);

        let moved = snake.move_step().unwrap();
        assert_eq!(moved.vacated, (1, 1));
        assert_eq!(snake.tail_len(), 0);

        snake.grow(moved.vacated);
        assert_eq!(snake.tail().front(), Some(&(1, 1)));
        assert!(snake.occupies((2, 1)));
        assert!(snake.occupies((1, 1)));
        assert!(!snake.tail_contains((2, 1)));
    }
}
