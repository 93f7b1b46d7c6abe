//! Food placement.
//!
//! Food is sampled uniformly inside the arena, `margin` cells in from the
//! edges, and never on the snake. After `MAX_SAMPLES` misses the spawner falls
//! back to scanning every free cell, which also detects a full arena.

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::collision::Arena;
use crate::geometry::Coord;
use crate::snake::Snake;

pub const DEFAULT_MARGIN: i32 = 5;
pub const MAX_SAMPLES: usize = 256;

const FOOD_GLYPHS: [char; 5] = ['%', '$', '#', '№', '8'];
const FOOD_COLORS: [Color; 4] = [Color::Red, Color::Yellow, Color::Green, Color::White];

/// Color tag handed to the screen. What it looks like is up to the screen.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Food {
    pub coord: Coord,
    pub glyph: char,
    pub color: Color,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnError {
    /// Every cell of the spawn region is covered by the snake.
    #[error("no free cell left to place food")]
    Exhausted,
}

/// Places a new piece of food outside `snake`.
pub fn spawn<R: Rng>(
    arena: &Arena,
    snake: &Snake,
    margin: i32,
    rng: &mut R,
) -> Result<Food, SpawnError> {
    let (rows, cols) = spawn_region(arena, margin).ok_or(SpawnError::Exhausted)?;

    let mut coord = None;
    for _ in 0..MAX_SAMPLES {
        let sample = Coord::new(rng.gen_range(rows.0..=rows.1), rng.gen_range(cols.0..=cols.1));
        if !snake.contains(sample) {
            coord = Some(sample);
            break;
        }
    }

    let coord = match coord {
        Some(c) => c,
        None => {
            debug!("food sampling gave up after {} tries, scanning free cells", MAX_SAMPLES);
            let free: Vec<Coord> = (rows.0..=rows.1)
                .flat_map(|row| (cols.0..=cols.1).map(move |col| Coord::new(row, col)))
                .filter(|pos| !snake.contains(*pos))
                .collect();
            *free.choose(rng).ok_or(SpawnError::Exhausted)?
        }
    };

    let glyph = *FOOD_GLYPHS.choose(rng).unwrap_or(&FOOD_GLYPHS[0]);
    let color = *FOOD_COLORS.choose(rng).unwrap_or(&FOOD_COLORS[0]);

    debug!("food {} placed at {}", glyph, coord);
    Ok(Food { coord, glyph, color })
}

// Inclusive (min, max) row and column ranges food may land in. The margin is
// clamped to half of each axis and never reaches past the arena border.
fn spawn_region(arena: &Arena, margin: i32) -> Option<((i32, i32), (i32, i32))> {
    let axis = |max: i32| {
        let lo = margin.max(0).min(max / 2).max(arena.border);
        let hi = max - lo;
        if lo > hi { None } else { Some((lo, hi)) }
    };
    Some((axis(arena.max_row)?, axis(arena.max_col)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_never_on_snake() {
        let arena = Arena::new(9, 9);
        let snake = Snake::from_segments((0..=9).map(|c| Coord::new(4, c)).chain((0..=9).rev().map(|c| Coord::new(5, c))))
            .unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let food = spawn(&arena, &snake, 0, &mut rng).unwrap();
            assert!(!snake.contains(food.coord));
            assert!(arena.contains(food.coord));
        }
    }

    #[test]
    fn test_respects_margin() {
        let arena = Arena::new(30, 60);
        let snake = Snake::new(arena.center());
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..500 {
            let food = spawn(&arena, &snake, DEFAULT_MARGIN, &mut rng).unwrap();
            assert!(food.coord.row >= 5 && food.coord.row <= 25, "{}", food.coord);
            assert!(food.coord.col >= 5 && food.coord.col <= 55, "{}", food.coord);
        }
    }

    #[test]
    fn test_margin_clamped_on_small_arena() {
        // A 5 cell margin would leave nothing in a 10x10 arena.
        let arena = Arena::new(9, 9);
        let snake = Snake::new(Coord::new(0, 0));
        let mut rng = StdRng::seed_from_u64(3);

        let food = spawn(&arena, &snake, DEFAULT_MARGIN, &mut rng).unwrap();
        assert!((4..=5).contains(&food.coord.row));
        assert!((4..=5).contains(&food.coord.col));
    }

    #[test]
    fn test_last_free_cell_is_found() {
        let arena = Arena::new(2, 2);
        let cells: Vec<Coord> = (0..=2)
            .flat_map(|r| (0..=2).map(move |c| Coord::new(r, c)))
            .filter(|c| *c != Coord::new(2, 1))
            .collect();
        let snake = Snake::from_segments(cells).unwrap();
        let mut rng = StdRng::seed_from_u64(11);

        let food = spawn(&arena, &snake, 0, &mut rng).unwrap();
        assert_eq!(food.coord, Coord::new(2, 1));
    }

    #[test]
    fn test_full_arena_is_exhausted() {
        let arena = Arena::new(1, 1);
        let snake = Snake::from_segments(vec![
            Coord::new(0, 0),
            Coord::new(0, 1),
            Coord::new(1, 1),
            Coord::new(1, 0),
        ])
        .unwrap();
        let mut rng = StdRng::seed_from_u64(5);

        assert_eq!(spawn(&arena, &snake, 0, &mut rng), Err(SpawnError::Exhausted));
    }

    #[test]
    fn test_glyph_and_color_from_fixed_sets() {
        let arena = Arena::new(20, 20);
        let snake = Snake::new(Coord::new(0, 0));
        let mut rng = StdRng::seed_from_u64(99);

        for _ in 0..100 {
            let food = spawn(&arena, &snake, 0, &mut rng).unwrap();
            assert!(FOOD_GLYPHS.contains(&food.glyph));
            assert!(FOOD_COLORS.contains(&food.color));
            assert_ne!(food.color, Color::Blue);
        }
    }
}
