//! ANSI styling for menu frames and revealed text.
//!
//! Raw SGR escapes rather than a terminal abstraction: output is a plain
//! scrolling console stream, and tests assert on the exact bytes.

/// Clears all active attributes.
pub const RESET: &str = "\x1b[0m";

/// Highlight for the selected menu row (blink, black on green).
pub const SELECTED_ROW: &str = "\x1b[6;30;42m";

/// Banner line above every menu frame (bold on blue).
pub const BANNER: &str = "\x1b[1;130;44m";

/// Marker prefixed to the highlighted option.
pub const MARK_SELECTED: &str = "<\u{2022}>";

/// Marker prefixed to every other option.
pub const MARK_UNSELECTED: &str = "<\u{25cb}>";

/// Role a piece of revealed text plays in the presentation.
///
/// Roles carry the color, so call sites say what a line *is* and the
/// mapping to escapes stays in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    /// Section headings, bright magenta.
    Header,
    /// Input prompts, bright blue.
    Prompt,
    /// Spoken lines, bright cyan.
    Dialogue,
    /// Positive outcomes, bright green.
    Success,
    /// Cautions and location reveals, bright yellow.
    Warning,
    /// Failures and hazards, bright red.
    Danger,
    /// Bold text for otherworldly speakers.
    Emphasis,
    /// Underlined scene narration.
    Narration,
}

impl TextStyle {
    /// The SGR escape that switches the terminal into this style.
    pub fn code(self) -> &'static str {
        match self {
            TextStyle::Header => "\x1b[95m",
            TextStyle::Prompt => "\x1b[94m",
            TextStyle::Dialogue => "\x1b[96m",
            TextStyle::Success => "\x1b[92m",
            TextStyle::Warning => "\x1b[93m",
            TextStyle::Danger => "\x1b[91m",
            TextStyle::Emphasis => "\x1b[1m",
            TextStyle::Narration => "\x1b[4m",
        }
    }
}
