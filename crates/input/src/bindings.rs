//! Configurable character key bindings.

use serde::{Deserialize, Serialize};

use crate::error::BindingError;
use crate::types::{Command, Direction};

/// Characters bound to each command.
///
/// Matching is case-insensitive. Arrow keys and Ctrl-C work regardless of
/// this table (see [`crate::map`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub up: char,
    pub down: char,
    pub left: char,
    pub right: char,
    pub help: char,
    pub quit: char,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            up: 'w',
            down: 's',
            left: 'a',
            right: 'd',
            help: 'h',
            quit: 'q',
        }
    }
}

impl KeyBindings {
    /// Look up the command bound to a typed character.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_input::KeyBindings;
    /// use tui_2048_types::{Command, Direction};
    ///
    /// let keys = KeyBindings::default();
    /// assert_eq!(keys.command_for_char('W'), Some(Command::Move(Direction::Up)));
    /// assert_eq!(keys.command_for_char('q'), Some(Command::Quit));
    /// assert_eq!(keys.command_for_char('x'), None);
    /// ```
    pub fn command_for_char(&self, ch: char) -> Option<Command> {
        let ch = ch.to_ascii_lowercase();
        self.entries()
            .into_iter()
            .find(|(key, _, _)| key.to_ascii_lowercase() == ch)
            .map(|(_, _, cmd)| cmd)
    }

    /// Character bound to a direction.
    pub fn key_for(&self, direction: Direction) -> char {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// Reject tables where one key maps to two commands.
    pub fn validate(&self) -> Result<(), BindingError> {
        let entries = self.entries();
        for (i, &(key, action, _)) in entries.iter().enumerate() {
            if key.is_control() || key.is_whitespace() {
                return Err(BindingError::Unprintable { key, action });
            }
            for &(other, other_action, _) in &entries[i + 1..] {
                if key.to_ascii_lowercase() == other.to_ascii_lowercase() {
                    return Err(BindingError::Duplicate {
                        key,
                        first: action,
                        second: other_action,
                    });
                }
            }
        }
        Ok(())
    }

    fn entries(&self) -> [(char, &'static str, Command); 6] {
        [
            (self.up, "up", Command::Move(Direction::Up)),
            (self.down, "down", Command::Move(Direction::Down)),
            (self.left, "left", Command::Move(Direction::Left)),
            (self.right, "right", Command::Move(Direction::Right)),
            (self.help, "help", Command::Help),
            (self.quit, "quit", Command::Quit),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings_are_valid() {
        assert_eq!(KeyBindings::default().validate(), Ok(()));
    }

    #[test]
    fn default_bindings_map_wasd() {
        let keys = KeyBindings::default();
        assert_eq!(keys.command_for_char('w'), Some(Command::Move(Direction::Up)));
        assert_eq!(keys.command_for_char('a'), Some(Command::Move(Direction::Left)));
        assert_eq!(keys.command_for_char('s'), Some(Command::Move(Direction::Down)));
        assert_eq!(keys.command_for_char('D'), Some(Command::Move(Direction::Right)));
        assert_eq!(keys.command_for_char('h'), Some(Command::Help));
    }

    #[test]
    fn duplicate_keys_are_rejected_case_insensitively() {
        let keys = KeyBindings {
            quit: 'W',
            ..KeyBindings::default()
        };
        assert_eq!(
            keys.validate(),
            Err(BindingError::Duplicate {
                key: 'w',
                first: "up",
                second: "quit",
            })
        );
    }

    #[test]
    fn whitespace_key_is_rejected() {
        let keys = KeyBindings {
            help: ' ',
            ..KeyBindings::default()
        };
        assert!(matches!(
            keys.validate(),
            Err(BindingError::Unprintable { action: "help", .. })
        ));
    }

    #[test]
    fn key_for_direction() {
        let keys = KeyBindings {
            up: 'k',
            ..KeyBindings::default()
        };
        assert_eq!(keys.key_for(Direction::Up), 'k');
        assert_eq!(keys.key_for(Direction::Right), 'd');
    }
}
