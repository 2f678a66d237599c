//! The interactive console session.
//!
//! [`Console`] owns the three seams of the presentation: a keystroke
//! source, an output writer, and a pacing clock. Production code runs it
//! over the real terminal via [`Console::stdout`]; tests run the same
//! struct over scripted keys, a byte buffer, and a recording clock.

use std::io::{self, Write};
use std::time::Duration;

use tracing::debug;

use crate::error::UiError;
use crate::input::{KeyAction, KeyReader, KeystrokeSource, TtyKeystrokes};
use crate::menu;
use crate::render::screen;
use crate::render::style::{TextStyle, RESET};
use crate::render::typewriter::{self, Clock, Passage, SystemClock, LEAD_IN};

/// Banner shown above menus until the caller overrides it.
pub const DEFAULT_BANNER: &str = "WELCOME";

/// A console session over the process's real terminal.
pub type TtyConsole = Console<TtyKeystrokes, io::Stdout>;

/// Interactive menu and text presentation over a keystroke source and a
/// writer.
pub struct Console<S, W, C = SystemClock> {
    reader: KeyReader<S>,
    out: W,
    clock: C,
    banner: String,
}

impl Console<TtyKeystrokes, io::Stdout> {
    /// Open a session on the terminal attached to this process.
    ///
    /// Fails with [`UiError::NotATerminal`] when stdin is a pipe or file,
    /// before any raw-mode switching is attempted.
    pub fn stdout() -> Result<Self, UiError> {
        Ok(Self::new(TtyKeystrokes::open()?, io::stdout(), SystemClock))
    }
}

impl<S, W, C> Console<S, W, C>
where
    S: KeystrokeSource,
    W: Write,
    C: Clock,
{
    /// Build a session from explicit parts.
    pub fn new(source: S, out: W, clock: C) -> Self {
        Self {
            reader: KeyReader::new(source),
            out,
            clock,
            banner: DEFAULT_BANNER.to_string(),
        }
    }

    /// Replace the banner drawn above subsequent menus.
    pub fn set_banner(&mut self, banner: impl Into<String>) {
        self.banner = banner.into();
    }

    /// Run a menu over `options` and block until one is confirmed.
    ///
    /// The highlight starts on the first option, arrow keys move it with
    /// the ends clamped, and Enter returns the highlighted index. Every
    /// move repaints the whole frame.
    pub fn select<O: AsRef<str>>(&mut self, options: &[O]) -> Result<usize, UiError> {
        if options.is_empty() {
            return Err(UiError::EmptyMenu);
        }

        let mut index = 0;
        screen::draw_menu(&mut self.out, &self.banner, options, index)?;
        loop {
            let action = self.reader.next_action()?;
            let step = menu::step(action, options.len(), index);
            index = step.index;
            if step.done {
                debug!(index, "menu choice confirmed");
                return Ok(index);
            }
            screen::draw_menu(&mut self.out, &self.banner, options, index)?;
        }
    }

    /// Type a passage onto the screen one character at a time.
    ///
    /// A held passage then waits for Enter and wipes the screen before this
    /// returns; an unheld one returns as soon as its reset lands.
    pub fn reveal(&mut self, passage: &Passage) -> Result<(), UiError> {
        typewriter::reveal(&mut self.out, &mut self.clock, passage)?;
        if passage.hold {
            self.acknowledge()?;
        }
        Ok(())
    }

    /// Print a styled line immediately, without typewriter pacing.
    pub fn announce(&mut self, text: &str, style: TextStyle) -> Result<(), UiError> {
        writeln!(self.out, "{}{text}{RESET}", style.code())?;
        self.out.flush()?;
        Ok(())
    }

    /// Hold the screen until the reader presses Enter, then wipe it.
    ///
    /// Arrow keys are swallowed while waiting; only Confirm releases the
    /// hold.
    pub fn acknowledge(&mut self) -> Result<(), UiError> {
        self.clock.pause(LEAD_IN);
        writeln!(
            self.out,
            "{}Press Enter to Continue.{RESET}",
            TextStyle::Prompt.code()
        )?;
        self.out.flush()?;
        while self.reader.next_action()? != KeyAction::Confirm {}
        screen::clear(&mut self.out)?;
        Ok(())
    }

    /// Show `prompt` and read one line of echoed input.
    pub fn prompt_line(&mut self, prompt: &str) -> Result<String, UiError> {
        writeln!(self.out, "{prompt}")?;
        self.out.flush()?;
        self.reader.read_line()
    }

    /// Wipe the screen and scrollback.
    pub fn clear(&mut self) -> Result<(), UiError> {
        screen::clear(&mut self.out)?;
        Ok(())
    }

    /// Pause the presentation for `duration`.
    pub fn pause(&mut self, duration: Duration) {
        self.clock.pause(duration);
    }
}
