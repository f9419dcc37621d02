use std::io;

use thiserror::Error;

/// Failure to read the next command.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("terminal event read failed: {0}")]
    Terminal(#[source] io::Error),

    #[error("line read failed: {0}")]
    Line(#[source] io::Error),
}

/// Invalid key binding table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    #[error("key '{key}' is bound to both {first} and {second}")]
    Duplicate {
        key: char,
        first: &'static str,
        second: &'static str,
    },

    #[error("key for {action} must be a printable character, got {key:?}")]
    Unprintable { key: char, action: &'static str },
}
