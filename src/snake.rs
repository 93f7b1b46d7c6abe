use std::collections::VecDeque;

use crate::geometry::{Coord, Direction::{*, self}};
use MoveResult::*;

pub const SNAKE_BODY_CHAR: char = '█';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveResult {
    Moved { new_head: Coord, old_head: Coord, old_tail: Option<Coord> },
    Stalled,
}

/// Segments are stored head first. The body is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Coord>,
}

impl Snake {
    pub fn new(head: Coord) -> Self {
        Snake { body: VecDeque::from(vec![head]) }
    }

    /// Builds a snake from head-first segments. Returns `None` for an empty list.
    pub fn from_segments<I: IntoIterator<Item = Coord>>(segments: I) -> Option<Self> {
        let body: VecDeque<Coord> = segments.into_iter().collect();
        if body.is_empty() {
            return None;
        }
        Some(Snake { body })
    }

    pub fn head(&self) -> Coord {
        self.body[0]
    }

    pub fn tail(&self) -> Coord {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, pos: Coord) -> bool {
        self.body.contains(&pos)
    }

    pub fn body(&self) -> impl Iterator<Item = Coord> + '_ {
        self.body.iter().copied()
    }

    pub fn next_head(&self, direction: Direction) -> Coord {
        self.head() + direction.unit()
    }

    /// Commits one step. Legality is the caller's business, see `collision::can_advance`.
    pub fn move_step(&mut self, direction: Direction, grow: bool) -> MoveResult {
        self.move_by(direction.unit(), grow)
    }

    pub fn move_by(&mut self, offset: Coord, grow: bool) -> MoveResult {
        let old_head = self.head();
        let new_head = old_head + offset;

        if new_head == old_head {
            return Stalled;
        }

        self.body.push_front(new_head);

        let old_tail = if grow { None } else { self.body.pop_back() };
        Moved { new_head, old_head, old_tail }
    }

    pub fn head_char(direction: Direction) -> char {
        match direction {
            Up => '^',
            Down => 'v',
            Left => '<',
            Right => '>',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snake(cells: &[(i32, i32)]) -> Snake {
        Snake::from_segments(cells.iter().map(|&(r, c)| Coord::new(r, c))).unwrap()
    }

    // Straight snake of `n` segments whose head points along `dir`.
    fn trailing(dir: Direction, n: i32) -> Snake {
        let step = dir.unit();
        Snake::from_segments((0..n).map(|i| Coord::new(20 - i * step.row, 20 - i * step.col))).unwrap()
    }

    #[test]
    fn test_new_snake_has_one_segment() {
        let s = Snake::new(Coord::new(4, 9));
        assert_eq!(s.len(), 1);
        assert_eq!(s.head(), Coord::new(4, 9));
        assert_eq!(s.tail(), s.head());
    }

    #[test]
    fn test_from_empty_segments() {
        assert!(Snake::from_segments(Vec::<Coord>::new()).is_none());
    }

    #[test]
    fn test_move_keeps_length() {
        for dir in Direction::ALL {
            for n in 1..6 {
                let mut s = trailing(dir, n);
                s.move_step(dir, false);
                assert_eq!(s.len(), n as usize);
            }
        }
    }

    #[test]
    fn test_grow_adds_one() {
        for dir in Direction::ALL {
            for n in 1..6 {
                let mut s = trailing(dir, n);
                s.move_step(dir, true);
                assert_eq!(s.len(), n as usize + 1);
            }
        }
    }

    #[test]
    fn test_move_result() {
        let mut s = snake(&[(3, 3), (3, 2), (3, 1)]);

        let res = s.move_step(Right, false);
        assert_eq!(
            res,
            Moved { new_head: Coord::new(3, 4), old_head: Coord::new(3, 3), old_tail: Some(Coord::new(3, 1)) }
        );
        assert_eq!(s.body().collect::<Vec<_>>(), vec![Coord::new(3, 4), Coord::new(3, 3), Coord::new(3, 2)]);

        let res = s.move_step(Down, true);
        assert_eq!(
            res,
            Moved { new_head: Coord::new(4, 4), old_head: Coord::new(3, 4), old_tail: None }
        );
        assert_eq!(s.tail(), Coord::new(3, 2));
    }

    #[test]
    fn test_zero_offset_is_noop() {
        let mut s = snake(&[(1, 1), (1, 0)]);
        let before = s.clone();
        assert_eq!(s.move_by(Coord::ZERO, true), Stalled);
        assert_eq!(s, before);
    }

    #[test]
    fn test_next_head_does_not_mutate() {
        let s = snake(&[(5, 5)]);
        assert_eq!(s.next_head(Up), Coord::new(4, 5));
        assert_eq!(s.head(), Coord::new(5, 5));
    }
}
