//! Full-frame menu drawing.
//!
//! Every redraw repaints from a blank screen: clear, banner, one row per
//! option. The writer is generic so tests capture frames in a `Vec<u8>`
//! instead of a terminal.

use std::io::Write;

use crossterm::cursor::MoveTo;
use crossterm::terminal::{Clear, ClearType};
use crossterm::ExecutableCommand;

use crate::render::style::{BANNER, MARK_SELECTED, MARK_UNSELECTED, RESET, SELECTED_ROW};

/// Wipe the visible screen and scrollback, parking the cursor at the origin.
///
/// `ClearType::All` leaves scrollback intact on most emulators, so the
/// explicit `ESC [3J` purge follows it; otherwise dismissed frames remain
/// one scroll away.
pub fn clear<W: Write>(out: &mut W) -> std::io::Result<()> {
    out.execute(Clear(ClearType::All))?;
    out.write_all(b"\x1b[3J")?;
    out.execute(MoveTo(0, 0))?;
    out.flush()
}

/// Paint one menu frame: banner line, then every option with the row at
/// `selected` highlighted and marked.
pub fn draw_menu<W, S>(out: &mut W, banner: &str, options: &[S], selected: usize) -> std::io::Result<()>
where
    W: Write,
    S: AsRef<str>,
{
    clear(out)?;
    writeln!(out, "{BANNER} {banner} {RESET}")?;
    for (row, option) in options.iter().enumerate() {
        let label = option.as_ref();
        if row == selected {
            writeln!(out, "{SELECTED_ROW}{MARK_SELECTED} {label} {RESET}")?;
        } else {
            writeln!(out, "{MARK_UNSELECTED} {label}")?;
        }
    }
    out.flush()
}
