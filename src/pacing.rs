use std::time::Duration;

use crate::geometry::Direction;
use crate::snake::Snake;

/// Base step time, in seconds.
pub const TICK: f64 = 1.0 / 6.0;

/// How long to wait before the next tick.
///
/// Horizontal steps take half the base time since terminal cells are about twice
/// as tall as they are wide. On top of that comes `1 / (2 * len)` seconds, which
/// fades out as the snake grows.
pub fn frame_delay(snake: &Snake, direction: Direction) -> Duration {
    let axis = if direction.is_horizontal() { 0.5 } else { 1.0 };
    let length = 1.0 / (snake.len().max(1) as f64 * 2.0);
    Duration::from_secs_f64(TICK * axis + length)
}
