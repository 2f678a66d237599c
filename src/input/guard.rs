//! Raw-mode scope for a single keystroke read.
//!
//! crossterm snapshots the terminal's prior settings inside
//! `enable_raw_mode`; this module's job is to guarantee the matching
//! `disable_raw_mode` runs on every exit path, panics included, so a
//! crash mid-read never leaves the user's shell uncooked.

use std::io;

use crossterm::terminal;
use scopeguard::defer;
use tracing::trace;

use crate::error::UiError;

/// Run `f` with the terminal in raw/no-echo mode, restoring the previous
/// mode before returning.
///
/// The scope is meant to wrap exactly one blocking keystroke read; holding
/// it across renders or multiple reads would leave the user's keys unechoed
/// while nothing is listening. Fails with [`UiError::RawMode`] when the
/// terminal cannot be switched (redirected input, no tty); callers propagate
/// that instead of retrying.
pub fn with_raw_mode<T>(f: impl FnOnce() -> io::Result<T>) -> Result<T, UiError> {
    terminal::enable_raw_mode().map_err(UiError::RawMode)?;
    defer! {
        let _ = terminal::disable_raw_mode();
    }
    trace!("raw mode scoped around keystroke read");
    Ok(f()?)
}
