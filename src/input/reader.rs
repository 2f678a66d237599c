//! Keystroke sources and the decoding reader.
//!
//! [`KeystrokeSource`] is the capability boundary: one implementation reads
//! the real terminal, the other replays a script, and everything above them
//! is identical. [`KeyReader`] buffers whatever a source returns and decodes
//! it one [`KeyAction`] at a time.

use std::collections::VecDeque;
use std::io::{self, BufRead, Read};

use crossterm::tty::IsTty;
use tracing::{debug, trace};

use crate::error::UiError;
use crate::input::guard::with_raw_mode;
use crate::input::keys::{match_front, KeyAction, SeqMatch};

/// Upper bound on one read burst; a single keystroke sequence is at most a
/// few bytes, and anything longer just spills into the next read.
const BURST_LEN: usize = 16;

/// Supplies raw input: keystroke byte bursts, plus whole lines for the
/// caller-level free-text prompt.
pub trait KeystrokeSource {
    /// Block until input is available and return the bytes of one read.
    ///
    /// A burst usually holds exactly one keystroke, but it may carry several
    /// (fast typing) or a fragment of one (a multi-byte sequence split over
    /// a slow link); the reader's queue absorbs both.
    fn read_keystroke(&mut self) -> Result<Vec<u8>, UiError>;

    /// Block until a whole line is available, without the trailing newline.
    ///
    /// Used only for free-text prompts outside the menu machine; the
    /// terminal stays in cooked mode so the user sees their own typing.
    fn read_line(&mut self) -> Result<String, UiError>;
}

/// The interactive terminal, selected once at startup.
///
/// Each `read_keystroke` scopes raw mode around exactly one blocking stdin
/// read, so the terminal is back in cooked mode the moment the key arrives.
pub struct TtyKeystrokes {
    stdin: io::Stdin,
}

impl TtyKeystrokes {
    /// Open standard input for keystroke capture.
    ///
    /// Fails with [`UiError::NotATerminal`] when stdin is redirected; raw
    /// keystroke navigation needs an interactive terminal, and callers are
    /// expected to give up rather than retry.
    pub fn open() -> Result<Self, UiError> {
        let stdin = io::stdin();
        if !stdin.is_tty() {
            return Err(UiError::NotATerminal);
        }
        Ok(Self { stdin })
    }
}

impl KeystrokeSource for TtyKeystrokes {
    fn read_keystroke(&mut self) -> Result<Vec<u8>, UiError> {
        with_raw_mode(|| {
            let mut buf = [0u8; BURST_LEN];
            let n = self.stdin.lock().read(&mut buf)?;
            if n == 0 {
                return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
            }
            Ok(buf[..n].to_vec())
        })
    }

    fn read_line(&mut self) -> Result<String, UiError> {
        let mut line = String::new();
        let n = self.stdin.lock().read_line(&mut line)?;
        if n == 0 {
            return Err(UiError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stdin closed",
            )));
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }
}

/// A pre-recorded input script: keystroke bursts plus prompt-line answers.
///
/// This is the second source implementation; tests and replays drive the
/// full navigation loop through it without a terminal.
#[derive(Debug, Clone, Default)]
pub struct ScriptedKeystrokes {
    bursts: VecDeque<Vec<u8>>,
    lines: VecDeque<String>,
}

impl ScriptedKeystrokes {
    /// Build a script from keystroke bursts, in the order they will be read.
    pub fn new<I, B>(bursts: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: Into<Vec<u8>>,
    {
        Self {
            bursts: bursts.into_iter().map(Into::into).collect(),
            lines: VecDeque::new(),
        }
    }

    /// Queue an answer for a future free-text prompt.
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push_back(line.into());
    }
}

impl KeystrokeSource for ScriptedKeystrokes {
    fn read_keystroke(&mut self) -> Result<Vec<u8>, UiError> {
        self.bursts.pop_front().ok_or_else(|| {
            UiError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "keystroke script exhausted",
            ))
        })
    }

    fn read_line(&mut self) -> Result<String, UiError> {
        self.lines.pop_front().ok_or_else(|| {
            UiError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "prompt-line script exhausted",
            ))
        })
    }
}

/// Decodes a source's byte stream into [`KeyAction`]s.
///
/// Bytes that complete no known sequence are discarded one at a time, so the
/// caller never observes an "unknown key"; a truncated sequence is either
/// finished by the next burst or consumed as junk once follow-up bytes rule
/// it out.
pub struct KeyReader<S> {
    source: S,
    pending: VecDeque<u8>,
}

impl<S: KeystrokeSource> KeyReader<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            pending: VecDeque::new(),
        }
    }

    /// Block until one recognized key arrives.
    pub fn next_action(&mut self) -> Result<KeyAction, UiError> {
        loop {
            if let Some(action) = self.decode_pending() {
                trace!(?action, "decoded keystroke");
                return Ok(action);
            }
            let burst = self.source.read_keystroke()?;
            self.pending.extend(burst);
        }
    }

    /// Forward a free-text line read to the source.
    ///
    /// Pending raw bytes never leak into line input; the two channels are
    /// separate surfaces.
    pub fn read_line(&mut self) -> Result<String, UiError> {
        self.source.read_line()
    }

    fn decode_pending(&mut self) -> Option<KeyAction> {
        loop {
            let matched = match_front(self.pending.make_contiguous());
            match matched {
                SeqMatch::Complete(action, len) => {
                    self.pending.drain(..len);
                    return Some(action);
                }
                SeqMatch::Incomplete => return None,
                SeqMatch::Unrecognized => {
                    if let Some(byte) = self.pending.pop_front() {
                        debug!(byte, "ignoring unrecognized input byte");
                    }
                }
            }
        }
    }
}
