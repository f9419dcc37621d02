//! Help screen text.

use crate::input::KeyBindings;
use crate::types::Direction;

/// Lines of the help screen for the given key bindings.
pub fn help_lines(bindings: &KeyBindings) -> Vec<String> {
    let mut lines = vec![
        "HOW TO PLAY".to_string(),
        String::new(),
        "Slide every tile on the board in one direction.".to_string(),
        "Two equal tiles that collide merge into one tile of double value.".to_string(),
        "Each merge adds the value of the new tile to your score.".to_string(),
        "After every move that changes the board, a 2 or a 4 appears.".to_string(),
        "The game ends when the board is full and no neighbours match.".to_string(),
        String::new(),
        "CONTROLS".to_string(),
    ];
    for (dir, arrow) in [
        (Direction::Up, "Up"),
        (Direction::Left, "Left"),
        (Direction::Down, "Down"),
        (Direction::Right, "Right"),
    ] {
        lines.push(format!(
            "  {} / {:<5} arrow  move {}",
            bindings.key_for(dir),
            arrow,
            dir.as_str()
        ));
    }
    lines.push(format!("  {}               show this help", bindings.help));
    lines.push(format!("  {} / Esc         quit", bindings.quit));
    lines.push(String::new());
    lines.push("A move key returns to the board and makes that move.".to_string());
    lines
}

/// One-line summary of the controls, used in headers.
pub fn controls_line(bindings: &KeyBindings) -> String {
    format!(
        "{}/{}/{}/{} move  {} help  {} quit",
        bindings.up, bindings.left, bindings.down, bindings.right, bindings.help, bindings.quit
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_mentions_every_binding() {
        let keys = KeyBindings {
            up: 'k',
            down: 'j',
            left: 'y',
            right: 'l',
            help: '?',
            quit: 'x',
        };
        let text = help_lines(&keys).join("\n");
        for needle in ["k / Up", "y / Left", "j / Down", "l / Right", "? ", "x / Esc"] {
            assert!(text.contains(needle), "missing {needle:?} in\n{text}");
        }
    }

    #[test]
    fn help_says_the_return_key_also_moves() {
        let text = help_lines(&KeyBindings::default()).join("\n");
        assert!(text.contains("returns to the board and makes that move"));
        assert!(!text.contains("any move key to return"));
    }

    #[test]
    fn controls_line_lists_keys() {
        assert_eq!(
            controls_line(&KeyBindings::default()),
            "w/a/s/d move  h help  q quit"
        );
    }
}
