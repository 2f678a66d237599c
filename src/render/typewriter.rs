//! Character-paced text reveal.
//!
//! Text appears one character at a time so every line takes about the same
//! total time to land regardless of length. Sleeping goes through the
//! [`Clock`] trait, which lets tests swap in a recorder and assert on the
//! pacing without actually waiting.

use std::io::Write;
use std::thread;
use std::time::Duration;

use crate::render::style::{TextStyle, RESET};

/// Default pause before the first character of a passage.
pub const LEAD_IN: Duration = Duration::from_millis(500);

/// Default time a full passage takes to reveal, spread across its
/// characters.
pub const REVEAL_TOTAL: Duration = Duration::from_millis(2500);

/// One piece of narration: the text plus its style and timing.
#[derive(Debug, Clone)]
pub struct Passage {
    pub text: String,
    pub style: Option<TextStyle>,
    /// Wait for Enter after the reveal and wipe the screen. Honored by the
    /// console session, not by the renderer itself.
    pub hold: bool,
    /// Total time the text takes to appear, split evenly per character.
    pub duration: Duration,
    /// Pause before the first character.
    pub lead_in: Duration,
}

impl Passage {
    /// Unstyled passage with the default pacing.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: None,
            hold: false,
            duration: REVEAL_TOTAL,
            lead_in: LEAD_IN,
        }
    }

    /// Passage in `style` with the default pacing.
    pub fn styled(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            style: Some(style),
            ..Self::plain(text)
        }
    }

    /// Hold the screen for acknowledgment after the reveal.
    pub fn held(mut self) -> Self {
        self.hold = true;
        self
    }
}

/// Source of pauses for the reveal pacing.
pub trait Clock {
    fn pause(&mut self, duration: Duration);
}

impl<C: Clock + ?Sized> Clock for &mut C {
    fn pause(&mut self, duration: Duration) {
        (**self).pause(duration);
    }
}

/// Real pacing backed by [`thread::sleep`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn pause(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Reveal a passage one character at a time.
///
/// The per-character delay divides the passage duration evenly, so short
/// lines type slowly and long lines rattle along. A zero-length passage
/// renders nothing and returns immediately, with no pause and no divide by
/// zero. The style escape and the closing reset each land on their own
/// line, matching the scrolling layout of the presentation.
pub fn reveal<W, C>(out: &mut W, clock: &mut C, passage: &Passage) -> std::io::Result<()>
where
    W: Write,
    C: Clock,
{
    let chars = passage.text.chars().count();
    if chars == 0 {
        return Ok(());
    }

    clock.pause(passage.lead_in);
    if let Some(style) = passage.style {
        writeln!(out, "{}", style.code())?;
    }

    let delay = passage.duration / chars as u32;
    for ch in passage.text.chars() {
        write!(out, "{ch}")?;
        out.flush()?;
        clock.pause(delay);
    }

    writeln!(out, "{RESET}")?;
    out.flush()
}
