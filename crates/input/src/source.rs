//! Input sources: where the session loop gets its next command.

use std::io::{self, BufRead, StdinLock};
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::bindings::KeyBindings;
use crate::debounce::KeyDebouncer;
use crate::error::InputError;
use crate::map::map_key_event;
use crate::types::{Command, Direction};

/// Anything that can produce game commands.
///
/// `Ok(None)` means "nothing this poll"; callers just ask again.
pub trait InputSource {
    fn next_command(&mut self) -> Result<Option<Command>, InputError>;

    /// Text the player entered that matched no command during the last
    /// [`InputSource::next_command`] call.
    ///
    /// Only sources that read whole lines report anything here; a quiet
    /// keypress poll is not a rejected command.
    fn rejected_input(&self) -> Option<&str> {
        None
    }
}

/// Real-time keypress input through crossterm.
///
/// Requires the terminal to be in raw mode. Each call waits at most
/// `poll_timeout` for an event, which bounds CPU usage of the caller's loop.
#[derive(Debug, Clone)]
pub struct TerminalInput {
    bindings: KeyBindings,
    debouncer: KeyDebouncer,
    poll_timeout: Duration,
}

impl TerminalInput {
    pub fn new(bindings: KeyBindings, poll_timeout: Duration) -> Self {
        Self {
            bindings,
            debouncer: KeyDebouncer::new(),
            poll_timeout,
        }
    }

    pub fn with_debouncer(mut self, debouncer: KeyDebouncer) -> Self {
        self.debouncer = debouncer;
        self
    }

    /// Turn one key event into at most one command.
    ///
    /// Auto-repeat events are ignored; release events re-arm the key.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Command> {
        match key.kind {
            KeyEventKind::Press => {
                let command = map_key_event(key, &self.bindings)?;
                self.debouncer.press(key.code).then_some(command)
            }
            KeyEventKind::Repeat => None,
            KeyEventKind::Release => {
                self.debouncer.release(key.code);
                None
            }
        }
    }
}

impl InputSource for TerminalInput {
    fn next_command(&mut self) -> Result<Option<Command>, InputError> {
        if !event::poll(self.poll_timeout).map_err(InputError::Terminal)? {
            return Ok(None);
        }
        match event::read().map_err(InputError::Terminal)? {
            Event::Key(key) => Ok(self.handle_key(key)),
            _ => Ok(None),
        }
    }
}

/// Line-buffered input: one command per Enter-confirmed line.
///
/// A single character is looked up in the bindings; the words `up`,
/// `down`, `left`, `right`, `help` and `quit` are accepted as well.
/// End of input counts as quit.
#[derive(Debug)]
pub struct LineInput<R> {
    reader: R,
    bindings: KeyBindings,
    line: String,
    rejected: bool,
}

impl LineInput<StdinLock<'static>> {
    pub fn stdin(bindings: KeyBindings) -> Self {
        Self::new(io::stdin().lock(), bindings)
    }
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R, bindings: KeyBindings) -> Self {
        Self {
            reader,
            bindings,
            line: String::new(),
            rejected: false,
        }
    }

    /// Parse one typed line.
    pub fn parse_line(&self, line: &str) -> Option<Command> {
        let text = line.trim();
        let mut chars = text.chars();
        let first = chars.next()?;
        if chars.next().is_none() {
            return self.bindings.command_for_char(first);
        }
        match text.to_lowercase().as_str() {
            "help" => Some(Command::Help),
            "quit" | "exit" => Some(Command::Quit),
            word => Direction::from_str(word).map(Command::Move),
        }
    }
}

impl<R: BufRead> InputSource for LineInput<R> {
    fn next_command(&mut self) -> Result<Option<Command>, InputError> {
        self.line.clear();
        self.rejected = false;
        let read = self
            .reader
            .read_line(&mut self.line)
            .map_err(InputError::Line)?;
        if read == 0 {
            return Ok(Some(Command::Quit));
        }
        let command = self.parse_line(&self.line);
        self.rejected = command.is_none();
        Ok(command)
    }

    fn rejected_input(&self) -> Option<&str> {
        self.rejected.then(|| self.line.trim())
    }
}
