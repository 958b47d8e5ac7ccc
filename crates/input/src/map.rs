//! Key mapping from terminal events to core input edges.

use crate::types::{InputEvent, Key};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a physical key to a logical key.
pub fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Key::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Key::Right),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Key::Down),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Key::Rotate),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Key::Pause),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Key::Start),
        _ => None,
    }
}

/// Translate a terminal key event into a core edge.
///
/// Host auto-repeat (`Repeat`) is dropped: repeats come from the DAS engine.
/// Releases are only forwarded for keys that track held state.
pub fn translate(event: KeyEvent) -> Option<InputEvent> {
    let key = map_key(event.code)?;
    match event.kind {
        KeyEventKind::Press => Some(InputEvent::KeyDown(key)),
        KeyEventKind::Release => key.direction().map(|_| InputEvent::KeyUp(key)),
        KeyEventKind::Repeat => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
