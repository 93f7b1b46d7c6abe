use std::io::{stdout, Stdout, Write};
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{poll, read, Event, KeyEvent, KeyEventKind};
use crossterm::style::{self, ResetColor, SetForegroundColor};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, terminal};

use crate::food::Color;
use crate::game::{Keyboard, Runner, Screen};
use crate::geometry::Coord;

pub struct TermScreen {
    width: u16,
    height: u16,
    color: bool,
    stdout: Stdout,
}

/// Terminal modes the game needs while it runs.
pub trait Session {
    fn setup(&mut self) -> Result<()>;
    fn restore(&mut self) -> Result<()>;
}

impl TermScreen {
    pub fn new(color: bool) -> Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(TermScreen { width, height, color, stdout: stdout() })
    }
}

impl Session for TermScreen {
    fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking)?;
        Ok(())
    }

    fn restore(&mut self) -> Result<()> {
        terminal::disable_raw_mode()?;
        execute!(self.stdout, ResetColor, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)?;
        Ok(())
    }
}

/// Runs `body` with the screen set up, restoring it afterwards even when
/// setup or `body` fail. A failed restore is ignored.
pub fn in_session<S, K, T, F>(runner: &mut Runner<S, K>, body: F) -> Result<T>
where
    S: Screen + Session,
    K: Keyboard,
    F: FnOnce(&mut Runner<S, K>) -> Result<T>,
{
    let result = runner.screen_mut().setup().and_then(|()| body(runner));
    let _ = runner.screen_mut().restore();
    result
}

impl Screen for TermScreen {
    fn clear(&mut self) -> Result<()> {
        let (width, height) = terminal::size()?;
        self.width = width;
        self.height = height;
        queue!(self.stdout, terminal::Clear(ClearType::All))?;
        Ok(())
    }

    fn draw(&mut self, at: Coord, text: &str, color: Color) -> Result<()> {
        if at.row < 0 || at.col < 0 || at.row >= self.height as i32 || at.col >= self.width as i32 {
            return Ok(());
        }

        // Clip at the right edge instead of wrapping onto the next line.
        let room = (self.width as i32 - at.col) as usize;
        let text: String = text.chars().take(room).collect();

        queue!(self.stdout, cursor::MoveTo(at.col as u16, at.row as u16))?;
        if self.color {
            queue!(self.stdout, SetForegroundColor(term_color(color)), style::Print(text), ResetColor)?;
        } else {
            queue!(self.stdout, style::Print(text))?;
        }
        Ok(())
    }

    fn refresh(&mut self) -> Result<()> {
        self.stdout.flush()?;
        Ok(())
    }

    fn dimensions(&self) -> (i32, i32) {
        let (width, height) = terminal::size().unwrap_or((self.width, self.height));
        (height as i32 - 1, width as i32 - 1)
    }
}

/// Key presses from the controlling terminal.
pub struct TermKeys;

impl Keyboard for TermKeys {
    fn poll_key(&mut self) -> Result<Option<KeyEvent>> {
        while poll(Duration::ZERO)? {
            if let Event::Key(ev) = read()? {
                if ev.kind == KeyEventKind::Press {
                    return Ok(Some(ev));
                }
            }
        }
        Ok(None)
    }

    fn wait_key(&mut self) -> Result<KeyEvent> {
        loop {
            if let Event::Key(ev) = read()? {
                if ev.kind == KeyEventKind::Press {
                    return Ok(ev);
                }
            }
        }
    }
}

fn term_color(color: Color) -> style::Color {
    match color {
        Color::Red => style::Color::Red,
        Color::Green => style::Color::Green,
        Color::Yellow => style::Color::Yellow,
        Color::Blue => style::Color::Blue,
        Color::Magenta => style::Color::Magenta,
        Color::Cyan => style::Color::Cyan,
        Color::White => style::Color::White,
    }
}
