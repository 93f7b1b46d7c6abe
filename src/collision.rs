use crate::food::Food;
use crate::geometry::{Coord, Direction};
use crate::snake::Snake;

/// Playable rectangle. Maxima are inclusive, `border` is kept clear on every side.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Arena {
    pub max_row: i32,
    pub max_col: i32,
    pub border: i32,
}

impl Arena {
    pub fn new(max_row: i32, max_col: i32) -> Self {
        Arena { max_row, max_col, border: 0 }
    }

    pub fn with_border(self, border: i32) -> Self {
        Arena { border, ..self }
    }

    pub fn contains(&self, pos: Coord) -> bool {
        pos.row >= self.border
            && pos.row <= self.max_row - self.border
            && pos.col >= self.border
            && pos.col <= self.max_col - self.border
    }

    pub fn center(&self) -> Coord {
        Coord::new(self.max_row / 2, self.max_col / 2)
    }
}

/// Whether the next step in `direction` stays inside the arena and off the body.
///
/// The current tail counts as occupied even though a plain move would vacate it,
/// so following your own tail one cell behind is a crash.
pub fn can_advance(arena: &Arena, snake: &Snake, direction: Direction) -> bool {
    let next = snake.next_head(direction);
    arena.contains(next) && !snake.contains(next)
}

pub fn can_eat(snake: &Snake, food: &Food) -> bool {
    snake.head() == food.coord
}
