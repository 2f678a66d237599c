//! Symbolic key actions and the byte-sequence table that produces them.
//!
//! Two keystroke dialects feed the same table: ANSI terminals send arrows as
//! escape sequences (`ESC [ A`), legacy console reads send a scan-code pair
//! (`0xE0`/`0x00` then 72 or 80). Both converge on one [`KeyAction`] here,
//! so nothing downstream knows which kind of terminal produced the bytes.

/// A classified keystroke.
///
/// Only the three keys the menu machine understands exist here; anything
/// else is discarded by the reader before reaching this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Arrow up: move the selection toward index 0.
    MoveUp,
    /// Arrow down: move the selection toward the last index.
    MoveDown,
    /// Enter: accept the current selection.
    Confirm,
}

/// Every byte sequence the decoder recognizes, from either dialect.
///
/// The `0x00` pairs also match a NUL byte followed by `H`/`P`; the decoder
/// assumes the two dialects never co-occur on one terminal.
const SEQUENCES: &[(&[u8], KeyAction)] = &[
    // Enter: CR is what raw mode delivers; LF covers scripted input.
    (b"\r", KeyAction::Confirm),
    (b"\n", KeyAction::Confirm),
    // ANSI CSI arrows.
    (b"\x1b[A", KeyAction::MoveUp),
    (b"\x1b[B", KeyAction::MoveDown),
    // ANSI SS3 arrows (application cursor mode).
    (b"\x1bOA", KeyAction::MoveUp),
    (b"\x1bOB", KeyAction::MoveDown),
    // Console scan-code pairs: prefix byte then code 72 (up) / 80 (down).
    (&[0xE0, 72], KeyAction::MoveUp),
    (&[0xE0, 80], KeyAction::MoveDown),
    (&[0x00, 72], KeyAction::MoveUp),
    (&[0x00, 80], KeyAction::MoveDown),
];

/// Outcome of matching the front of the pending byte queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeqMatch {
    /// The front bytes complete a known sequence spanning `.1` bytes.
    Complete(KeyAction, usize),
    /// The front bytes are a proper prefix of at least one known sequence;
    /// classification needs the next burst.
    Incomplete,
    /// The front byte begins no known sequence and can be discarded.
    Unrecognized,
}

/// Match the queue front against the sequence table.
///
/// An empty slice is `Incomplete` (there is nothing to discard yet). A front
/// that completes a sequence wins even when trailing bytes follow it, so a
/// burst carrying several keys decodes one action at a time.
pub fn match_front(bytes: &[u8]) -> SeqMatch {
    if bytes.is_empty() {
        return SeqMatch::Incomplete;
    }

    let mut prefix_of_longer = false;
    for (seq, action) in SEQUENCES {
        if bytes.len() >= seq.len() {
            if &bytes[..seq.len()] == *seq {
                return SeqMatch::Complete(*action, seq.len());
            }
        } else if seq.starts_with(bytes) {
            prefix_of_longer = true;
        }
    }

    if prefix_of_longer {
        SeqMatch::Incomplete
    } else {
        SeqMatch::Unrecognized
    }
}
