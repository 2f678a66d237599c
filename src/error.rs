//! Error types for the terminal UI.
//!
//! Everything fatal funnels into [`UiError`]. Unrecognized key input is not
//! an error at all; the decoder discards it and keeps reading.

use std::io;
use thiserror::Error;

/// Errors that can occur while driving the terminal UI.
#[derive(Debug, Error)]
pub enum UiError {
    /// Standard input is not connected to an interactive terminal, so raw
    /// keystroke capture is impossible. Detected once at startup.
    #[error("standard input is not an interactive terminal")]
    NotATerminal,

    /// The terminal refused to switch into raw mode.
    #[error("failed to switch the terminal into raw mode")]
    RawMode(#[source] io::Error),

    /// An empty option list was passed to the navigation loop. Navigating a
    /// zero-length menu has no resolvable selection, so this fails before
    /// any keystroke is read.
    #[error("menu requires at least one option")]
    EmptyMenu,

    /// Any other terminal I/O failure (closed stdin, write error). Fatal;
    /// nothing in the UI retries.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}
