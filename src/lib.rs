//! Terminal snake.
//!
//! The simulation (`geometry`, `snake`, `food`, `collision`, `pacing`, `game`)
//! knows nothing about terminals. It draws through the `game::Screen` trait and
//! reads keys through `game::Keyboard`; `term` implements both on crossterm.

pub mod collision;
pub mod config;
pub mod food;
pub mod game;
pub mod geometry;
pub mod input;
pub mod pacing;
pub mod snake;
pub mod term;

pub use collision::Arena;
pub use food::{Color, Food, SpawnError};
pub use game::{Game, Keyboard, Outcome, Runner, Screen, Status};
pub use geometry::{Coord, Direction};
pub use snake::Snake;
