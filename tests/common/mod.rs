//! Shared helpers for driving console sessions from scripted keystrokes.

#![allow(dead_code, unused_imports)]

use std::time::Duration;

use storyterm::input::ScriptedKeystrokes;
use storyterm::render::typewriter::Clock;
use storyterm::session::Console;

/// ANSI escape burst for the up arrow.
pub const UP: &[u8] = b"\x1b[A";
/// ANSI escape burst for the down arrow.
pub const DOWN: &[u8] = b"\x1b[B";
/// Carriage return, the usual Enter byte.
pub const ENTER: &[u8] = b"\r";

/// Clock that records every requested pause instead of sleeping.
#[derive(Debug, Default)]
pub struct RecordingClock {
    pub pauses: Vec<Duration>,
}

impl Clock for RecordingClock {
    fn pause(&mut self, duration: Duration) {
        self.pauses.push(duration);
    }
}

/// Keystroke script from raw bursts plus any echoed input lines.
pub fn scripted_source(bursts: &[&[u8]], lines: &[&str]) -> ScriptedKeystrokes {
    let mut source = ScriptedKeystrokes::new(bursts.iter().copied());
    for line in lines {
        source.push_line(*line);
    }
    source
}

/// Console wired to scripted keys, a capture buffer, and a recording clock.
pub fn scripted_console<'a>(
    bursts: &[&[u8]],
    out: &'a mut Vec<u8>,
    clock: &'a mut RecordingClock,
) -> Console<ScriptedKeystrokes, &'a mut Vec<u8>, &'a mut RecordingClock> {
    Console::new(scripted_source(bursts, &[]), out, clock)
}

/// Assert that each needle appears in `output`, in the given order.
pub fn assert_in_order(output: &str, needles: &[&str]) {
    let mut from = 0;
    for needle in needles {
        match output[from..].find(needle) {
            Some(at) => from += at + needle.len(),
            None => panic!("expected {needle:?} after byte {from} of output"),
        }
    }
}

/// Number of full-screen wipes in the captured output.
pub fn frame_count(output: &str) -> usize {
    output.matches("\x1b[2J").count()
}
