//! Narrative flows built on the console session.
//!
//! Each flow drives a [`Console`] through one stretch of the game's
//! presentation. The menus own their sentinel rows here, so callers pass
//! plain lists and get typed choices back.

use std::ffi::OsStr;
use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::error::UiError;
use crate::input::KeystrokeSource;
use crate::render::style::TextStyle;
use crate::render::typewriter::{Clock, Passage, LEAD_IN};
use crate::session::Console;

const MAIN_OPTIONS: [&str; 3] = ["Import rooms from file", "Import sample rooms", "Quit"];
const RETURN_TO_MENU: &str = "Return to main menu";
const NEW_PLAYER: &str = "Continue as new player";
const NAME_PROMPT: &str = "What would you like to have your character's name to be?";

/// What the top-level menu resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    ImportFile,
    ImportSamples,
    Quit,
}

/// Which identity the player picked for this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerChoice {
    /// A fresh character with the name typed at the prompt.
    New(String),
    /// An existing name chosen from the roster.
    Existing(String),
}

impl PlayerChoice {
    /// The character name, whichever way it was chosen.
    pub fn name(&self) -> &str {
        match self {
            PlayerChoice::New(name) | PlayerChoice::Existing(name) => name,
        }
    }
}

/// Run the top-level menu until the reader confirms an entry.
pub fn main_menu<S, W, C>(console: &mut Console<S, W, C>) -> Result<MainChoice, UiError>
where
    S: KeystrokeSource,
    W: Write,
    C: Clock,
{
    let choice = match console.select(&MAIN_OPTIONS)? {
        0 => MainChoice::ImportFile,
        1 => MainChoice::ImportSamples,
        _ => MainChoice::Quit,
    };
    debug!(?choice, "main menu resolved");
    Ok(choice)
}

/// Offer `files` plus a way back, returning the picked file name.
///
/// `None` means the reader took the "Return to main menu" row instead of
/// a file.
pub fn pick_import_file<'a, S, W, C>(
    console: &mut Console<S, W, C>,
    files: &'a [String],
) -> Result<Option<&'a str>, UiError>
where
    S: KeystrokeSource,
    W: Write,
    C: Clock,
{
    let mut options: Vec<&str> = files.iter().map(String::as_str).collect();
    options.push(RETURN_TO_MENU);

    let picked = console.select(&options)?;
    if picked == files.len() {
        Ok(None)
    } else {
        Ok(Some(&files[picked]))
    }
}

/// Offer the known `players` plus a fresh start.
///
/// Taking the "Continue as new player" row asks for a character name on a
/// plain echoed input line.
pub fn pick_player<S, W, C>(
    console: &mut Console<S, W, C>,
    players: &[String],
) -> Result<PlayerChoice, UiError>
where
    S: KeystrokeSource,
    W: Write,
    C: Clock,
{
    let mut options: Vec<&str> = players.iter().map(String::as_str).collect();
    options.push(NEW_PLAYER);

    let picked = console.select(&options)?;
    if picked == players.len() {
        let name = console.prompt_line(NAME_PROMPT)?;
        Ok(PlayerChoice::New(name))
    } else {
        Ok(PlayerChoice::Existing(players[picked].clone()))
    }
}

/// Flash the loading screen, then play the opening scene for `player_name`.
pub fn start_game<S, W, C>(
    console: &mut Console<S, W, C>,
    player_name: &str,
) -> Result<(), UiError>
where
    S: KeystrokeSource,
    W: Write,
    C: Clock,
{
    loading_screen(console)?;
    opening_scene(console, player_name)
}

/// Show LOADING for a beat and wipe it.
pub fn loading_screen<S, W, C>(console: &mut Console<S, W, C>) -> Result<(), UiError>
where
    S: KeystrokeSource,
    W: Write,
    C: Clock,
{
    console.announce("LOADING", TextStyle::Header)?;
    console.pause(LEAD_IN);
    console.clear()
}

/// Type out the waking-up scene, pausing for Enter on the held lines.
pub fn opening_scene<S, W, C>(
    console: &mut Console<S, W, C>,
    player_name: &str,
) -> Result<(), UiError>
where
    S: KeystrokeSource,
    W: Write,
    C: Clock,
{
    let passages = [
        Passage::styled("You: *groan* ugh", TextStyle::Dialogue).held(),
        Passage::styled(
            format!("???: Welcome to your new life {player_name}."),
            TextStyle::Emphasis,
        )
        .held(),
        Passage::styled(
            "Your body jolts from the weird voice, eyes adjusting to the dark.",
            TextStyle::Narration,
        ),
        Passage::styled("You: W- Who's there!?", TextStyle::Dialogue).held(),
        Passage::styled(
            "You look around, the room's surprisingly empty",
            TextStyle::Narration,
        ),
        Passage::styled("You notice words on the wall...", TextStyle::Narration),
        Passage::styled("Lobby", TextStyle::Warning).held(),
    ];

    for passage in &passages {
        console.reveal(passage)?;
    }
    Ok(())
}

/// List the importable `*.rooms` files under `dir`, sorted by name.
pub fn room_files(dir: &Path) -> Result<Vec<String>, UiError> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_file() && path.extension() == Some(OsStr::new("rooms")) {
            files.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    files.sort();
    debug!(count = files.len(), dir = %dir.display(), "scanned room files");
    Ok(files)
}
