//! Terminal Event Mapping
//!
//! Converts crossterm key events into the editor keys understood by
//! [`InputLine`](marquee_core::InputLine). Only key presses count; release
//! and repeat events are dropped.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use marquee_core::InputKey;

/// Map a key event, or `None` when the key has no editing meaning
pub fn map_key(key: KeyEvent) -> Option<InputKey> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('z') => Some(InputKey::Cancel),
            _ => None,
        };
    }

    let mapped = match key.code {
        KeyCode::Char(c) => InputKey::Char(c),
        KeyCode::Backspace => InputKey::Backspace,
        KeyCode::Delete => InputKey::Delete,
        KeyCode::Left => InputKey::Left,
        KeyCode::Right => InputKey::Right,
        KeyCode::Up => InputKey::Up,
        KeyCode::Down => InputKey::Down,
        KeyCode::Home => InputKey::Home,
        KeyCode::End => InputKey::End,
        KeyCode::Tab => InputKey::Tab,
        KeyCode::Enter => InputKey::Enter,
        KeyCode::Esc => InputKey::Cancel,
        _ => return None,
    };
    Some(mapped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_plain_keys() {
        assert_eq!(
            map_key(press(KeyCode::Char('a'), KeyModifiers::NONE)),
            Some(InputKey::Char('a'))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(InputKey::Char('A'))
        );
        assert_eq!(map_key(press(KeyCode::Enter, KeyModifiers::NONE)), Some(InputKey::Enter));
        assert_eq!(map_key(press(KeyCode::Tab, KeyModifiers::NONE)), Some(InputKey::Tab));
        assert_eq!(map_key(press(KeyCode::F(1), KeyModifiers::NONE)), None);
    }

    #[test]
    fn test_cancel_keys() {
        assert_eq!(map_key(press(KeyCode::Esc, KeyModifiers::NONE)), Some(InputKey::Cancel));
        assert_eq!(
            map_key(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(InputKey::Cancel)
        );
        assert_eq!(
            map_key(press(KeyCode::Char('z'), KeyModifiers::CONTROL)),
            Some(InputKey::Cancel)
        );
        assert_eq!(map_key(press(KeyCode::Char('x'), KeyModifiers::CONTROL)), None);
    }

    #[test]
    fn test_release_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release), None);
    }
}
