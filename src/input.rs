//! Key mapping from terminal events to snake directions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::geometry::Direction::{self, *};

/// Arrow keys and the vi set `h j k l`. Anything else is ignored.
pub fn direction_for_key(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('k') => Some(Up),
        KeyCode::Down | KeyCode::Char('j') => Some(Down),
        KeyCode::Left | KeyCode::Char('h') => Some(Left),
        KeyCode::Right | KeyCode::Char('l') => Some(Right),
        _ => None,
    }
}

pub fn is_ctrl_c(ev: &KeyEvent) -> bool {
    ev.code == KeyCode::Char('c') && ev.modifiers.contains(KeyModifiers::CONTROL)
}

/// Raw mode swallows SIGINT, so quitting is a key like any other.
pub fn should_quit(ev: &KeyEvent) -> bool {
    is_ctrl_c(ev) || matches!(ev.code, KeyCode::Char('q') | KeyCode::Esc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys() {
        assert_eq!(direction_for_key(KeyCode::Up), Some(Up));
        assert_eq!(direction_for_key(KeyCode::Down), Some(Down));
        assert_eq!(direction_for_key(KeyCode::Left), Some(Left));
        assert_eq!(direction_for_key(KeyCode::Right), Some(Right));
    }

    #[test]
    fn test_vi_keys() {
        assert_eq!(direction_for_key(KeyCode::Char('k')), Some(Up));
        assert_eq!(direction_for_key(KeyCode::Char('j')), Some(Down));
        assert_eq!(direction_for_key(KeyCode::Char('h')), Some(Left));
        assert_eq!(direction_for_key(KeyCode::Char('l')), Some(Right));
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(direction_for_key(KeyCode::Char('w')), None);
        assert_eq!(direction_for_key(KeyCode::Char('K')), None);
        assert_eq!(direction_for_key(KeyCode::Enter), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(should_quit(&KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(&KeyEvent::from(KeyCode::Esc)));
        assert!(!should_quit(&KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(&KeyEvent::from(KeyCode::Up)));
    }
}
