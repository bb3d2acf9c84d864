//! Keyboard mapping for the game loop.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::game::GameInput;

/// Map a terminal key event to a game input. Key releases are ignored so
/// every action is edge-triggered; whether an action applies in the current
/// phase is the simulation's call, not ours.
pub fn map_key(key: KeyEvent) -> GameInput {
    if key.kind == KeyEventKind::Release {
        return GameInput::Other;
    }

    match key.code {
        KeyCode::Char(' ') | KeyCode::Up => GameInput::Jump,
        KeyCode::Char('f') | KeyCode::Char('F') => GameInput::Restart,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => GameInput::Quit,
        _ => GameInput::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_jump_keys() {
        assert_eq!(map_key(press(KeyCode::Char(' '))), GameInput::Jump);
        assert_eq!(map_key(press(KeyCode::Up)), GameInput::Jump);
    }

    #[test]
    fn test_restart_keys() {
        assert_eq!(map_key(press(KeyCode::Char('f'))), GameInput::Restart);
        assert_eq!(map_key(press(KeyCode::Char('F'))), GameInput::Restart);
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_key(press(KeyCode::Char('q'))), GameInput::Quit);
        assert_eq!(map_key(press(KeyCode::Esc)), GameInput::Quit);
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(map_key(press(KeyCode::Char('x'))), GameInput::Other);
        assert_eq!(map_key(press(KeyCode::Enter)), GameInput::Other);
    }

    #[test]
    fn test_release_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char(' '),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release), GameInput::Other);
    }
}
