//! Key mapping from terminal events to game commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::bindings::KeyBindings;
use crate::types::{Command, Direction};

/// Map keyboard input to a command.
///
/// Arrow keys always move; characters go through `bindings`; Ctrl-C and
/// Esc always quit.
pub fn map_key_event(key: KeyEvent, bindings: &KeyBindings) -> Option<Command> {
    if should_quit(key, bindings) {
        return Some(Command::Quit);
    }
    match key.code {
        KeyCode::Up => Some(Command::Move(Direction::Up)),
        KeyCode::Down => Some(Command::Move(Direction::Down)),
        KeyCode::Left => Some(Command::Move(Direction::Left)),
        KeyCode::Right => Some(Command::Move(Direction::Right)),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            bindings.command_for_char(ch)
        }
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent, bindings: &KeyBindings) -> bool {
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => true,
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            ch.to_ascii_lowercase() == bindings.quit.to_ascii_lowercase()
        }
        _ => false,
    }
}
