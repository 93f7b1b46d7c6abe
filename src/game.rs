use std::{thread::sleep, time::Duration};

use anyhow::Result;
use crossterm::event::KeyEvent;
use log::{debug, info, warn};
use rand::Rng;

use crate::collision::{can_advance, can_eat, Arena};
use crate::food::{self, Color, Food, SpawnError};
use crate::geometry::{Coord, Direction::{*, self}};
use crate::input::{direction_for_key, should_quit};
use crate::pacing::frame_delay;
use crate::snake::{Snake, SNAKE_BODY_CHAR};

pub const INITIAL_DIRECTION: Direction = Down;

const SNAKE_COLOR: Color = Color::Blue;
const DEAD_SNAKE_CHAR: char = 'X';

/// Where the game draws. Coordinates outside the surface are ignored, not errors.
pub trait Screen {
    fn clear(&mut self) -> Result<()>;
    fn draw(&mut self, at: Coord, text: &str, color: Color) -> Result<()>;
    fn refresh(&mut self) -> Result<()>;
    /// Largest visible (row, col), inclusive.
    fn dimensions(&self) -> (i32, i32);
}

pub trait Keyboard {
    /// Next pending key press, or `None` right away if there is none.
    fn poll_key(&mut self) -> Result<Option<KeyEvent>>;
    fn wait_key(&mut self) -> Result<KeyEvent>;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Running,
    GameOver,
    /// No room left for food.
    Won,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    GameOver { score: usize },
    Won { score: usize },
    Quit { score: usize },
}

pub struct Game<R> {
    arena: Arena,
    snake: Snake,
    food: Food,
    direction: Direction,
    pending: Option<Direction>,
    status: Status,
    food_margin: i32,
    rng: R,
}

impl<R: Rng> Game<R> {
    /// A one segment snake in the middle of `arena`, heading down.
    pub fn new(arena: Arena, food_margin: i32, mut rng: R) -> Result<Self, SpawnError> {
        let snake = Snake::new(arena.center());
        let food = food::spawn(&arena, &snake, food_margin, &mut rng)?;
        info!("new game: arena {}x{}, snake at {}", arena.max_row + 1, arena.max_col + 1, snake.head());
        Ok(Game {
            arena,
            snake,
            food,
            direction: INITIAL_DIRECTION,
            pending: None,
            status: Status::Running,
            food_margin,
            rng,
        })
    }

    pub fn from_parts(arena: Arena, snake: Snake, food: Food, direction: Direction, rng: R) -> Self {
        Game {
            arena,
            snake,
            food,
            direction,
            pending: None,
            status: Status::Running,
            food_margin: food::DEFAULT_MARGIN,
            rng,
        }
    }

    pub fn with_food_margin(self, food_margin: i32) -> Self {
        Game { food_margin, ..self }
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn score(&self) -> usize {
        self.snake.len() - 1
    }

    /// Queues a turn for the next tick. The last call before a tick wins.
    pub fn steer(&mut self, direction: Direction) {
        self.pending = Some(direction);
    }

    /// Follows a change of the screen size. Food left outside the new arena
    /// is placed again; if there is nowhere to put it the game is won.
    pub fn resize(&mut self, max_row: i32, max_col: i32) {
        if self.arena.max_row == max_row && self.arena.max_col == max_col {
            return;
        }
        info!("arena resized to {}x{}", max_row + 1, max_col + 1);
        self.arena = Arena { max_row, max_col, ..self.arena };

        if self.status == Status::Running && !self.arena.contains(self.food.coord) {
            match food::spawn(&self.arena, &self.snake, self.food_margin, &mut self.rng) {
                Ok(food) => self.food = food,
                Err(SpawnError::Exhausted) => {
                    warn!("no room left for food after resize");
                    self.status = Status::Won;
                }
            }
        }
    }

    /// Advances the game by one step and returns the resulting status.
    ///
    /// The step is checked before anything moves, so a crashing snake stays
    /// exactly where it was. Ticking a finished game does nothing.
    pub fn tick(&mut self) -> Status {
        if self.status != Status::Running {
            return self.status;
        }

        if let Some(dir) = self.pending.take() {
            if dir.is_opposite(self.direction) {
                debug!("ignoring reversal {:?} -> {:?}", self.direction, dir);
            } else if dir != self.direction {
                debug!("turning {:?} -> {:?}", self.direction, dir);
                self.direction = dir;
            }
        }

        if !can_advance(&self.arena, &self.snake, self.direction) {
            info!(
                "crashed heading {:?} from {}, score {}",
                self.direction,
                self.snake.head(),
                self.score()
            );
            self.status = Status::GameOver;
            return self.status;
        }

        let grow = self.snake.next_head(self.direction) == self.food.coord;
        self.snake.move_step(self.direction, grow);

        if can_eat(&self.snake, &self.food) {
            match food::spawn(&self.arena, &self.snake, self.food_margin, &mut self.rng) {
                Ok(food) => self.food = food,
                Err(SpawnError::Exhausted) => {
                    warn!("no room left for food, length {}", self.snake.len());
                    self.status = Status::Won;
                }
            }
        }

        self.status
    }

    /// Direction, food and body, for the debug overlay.
    pub fn debug_line(&self) -> String {
        let body: Vec<String> = self.snake.body().map(|c| c.to_string()).collect();
        format!("{:?} {} [{}]", self.direction, self.food.coord, body.join(", "))
    }

    pub fn draw<S: Screen>(&self, screen: &mut S, debug: bool) -> Result<()> {
        screen.clear()?;

        for pos in self.snake.body().skip(1) {
            screen.draw(pos, &SNAKE_BODY_CHAR.to_string(), SNAKE_COLOR)?;
        }
        let head = Snake::head_char(self.direction).to_string();
        screen.draw(self.snake.head(), &head, SNAKE_COLOR)?;

        screen.draw(self.food.coord, &self.food.glyph.to_string(), self.food.color)?;

        if debug {
            screen.draw(Coord::ZERO, &self.debug_line(), Color::Magenta)?;
        }

        screen.refresh()
    }
}

/// Drives a `Game` against a screen and a keyboard until it ends.
pub struct Runner<S, K> {
    screen: S,
    keys: K,
    debug: bool,
    sleep: fn(Duration),
}

impl<S: Screen, K: Keyboard> Runner<S, K> {
    pub fn new(screen: S, keys: K) -> Self {
        Runner { screen, keys, debug: false, sleep }
    }

    /// Draw the internal state on the top line every tick.
    pub fn debug(self, debug: bool) -> Self {
        Runner { debug, ..self }
    }

    /// Replaces the pause between ticks, `std::thread::sleep` by default.
    pub fn sleep_with(self, sleep: fn(Duration)) -> Self {
        Runner { sleep, ..self }
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut S {
        &mut self.screen
    }

    pub fn keys(&self) -> &K {
        &self.keys
    }

    pub fn into_parts(self) -> (S, K) {
        (self.screen, self.keys)
    }

    pub fn play<R: Rng>(&mut self, game: &mut Game<R>) -> Result<Outcome> {
        loop {
            let (max_row, max_col) = self.screen.dimensions();
            game.resize(max_row, max_col);

            // One turn per tick; later presses stay queued for the next ticks.
            while let Some(key) = self.keys.poll_key()? {
                if should_quit(&key) {
                    info!("quit by player, score {}", game.score());
                    return Ok(Outcome::Quit { score: game.score() });
                }
                if let Some(dir) = direction_for_key(key.code) {
                    game.steer(dir);
                    break;
                }
            }

            match game.tick() {
                Status::Running => {
                    game.draw(&mut self.screen, self.debug)?;
                    (self.sleep)(frame_delay(game.snake(), game.direction()));
                }
                status => {
                    self.show_end(game)?;
                    self.keys.wait_key()?;

                    let score = game.score();
                    return Ok(if status == Status::Won {
                        Outcome::Won { score }
                    } else {
                        Outcome::GameOver { score }
                    });
                }
            }
        }
    }

    ///////////////////////////////////////////////////////////////////////////

    fn show_end<R: Rng>(&mut self, game: &Game<R>) -> Result<()> {
        self.screen.clear()?;

        let title = if game.status() == Status::Won {
            "YOU WIN"
        } else {
            for pos in game.snake().body() {
                self.screen.draw(pos, &DEAD_SNAKE_CHAR.to_string(), Color::Red)?;
            }
            "GAME OVER"
        };

        let score = format!("score: {}", game.score());
        show_message(
            &mut self.screen,
            &[(title, Color::Red), (score.as_str(), Color::White), ("press any key to exit", Color::White)],
        )?;

        self.screen.refresh()
    }
}

/// Centers `lines` on the screen, one above the other.
pub fn show_message<S: Screen>(screen: &mut S, lines: &[(&str, Color)]) -> Result<()> {
    let (max_row, max_col) = screen.dimensions();
    let center = Coord::new(max_row / 2, max_col / 2);
    let top = center.row - lines.len() as i32 / 2;

    for (i, (line, color)) in lines.iter().enumerate() {
        let width = line.chars().count() as i32;
        let at = Coord::new(top + i as i32, center.col - width / 2);
        screen.draw(at, line, *color)?;
    }

    Ok(())
}
