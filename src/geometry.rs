use std::fmt;
use std::ops::{Add, Sub};

use Direction::*;

/// A cell on the terminal grid, row first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const ZERO: Coord = Coord { row: 0, col: 0 };

    pub const fn new(row: i32, col: i32) -> Self {
        Coord { row, col }
    }
}

impl Add for Coord {
    type Output = Coord;

    fn add(self, other: Coord) -> Coord {
        Coord::new(self.row + other.row, self.col + other.col)
    }
}

impl Sub for Coord {
    type Output = Coord;

    fn sub(self, other: Coord) -> Coord {
        Coord::new(self.row - other.row, self.col - other.col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.row, self.col)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Up, Down, Left, Right];

    /// One step in this direction. Rows grow downwards.
    pub fn unit(self) -> Coord {
        match self {
            Up => Coord::new(-1, 0),
            Down => Coord::new(1, 0),
            Left => Coord::new(0, -1),
            Right => Coord::new(0, 1),
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Left | Right)
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Up | Down)
    }

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }
}
