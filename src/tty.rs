//! Terminal I/O utilities for CLI.
//!
//! Provides TTY detection for choosing between prompting and flags.

use std::io::{self, IsTerminal};

pub fn is_stdin_tty() -> bool {
    io::stdin().is_terminal()
}

/// Prompting needs a person on stdin; stderr carries the questions.
pub fn require_tty_for_interactive() -> bool {
    is_stdin_tty() && io::stderr().is_terminal()
}

// log_status! macro is defined in lib.rs (#[macro_export]) and available crate-wide.
