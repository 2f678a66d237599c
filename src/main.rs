use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use storyterm::logging;
use storyterm::render::TextStyle;
use storyterm::story::{self, MainChoice, PlayerChoice};
use storyterm::{Console, TtyConsole, UiError};

#[derive(Parser)]
#[command(name = "storyterm", about = "Menu-driven console narrative demo")]
struct Args {
    /// Directory scanned for importable room files
    #[arg(short, long, default_value = "rooms")]
    rooms_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init_tracing();

    let mut console = Console::stdout().context("opening the interactive console")?;
    let mut roster: Vec<String> = Vec::new();

    loop {
        match story::main_menu(&mut console)? {
            MainChoice::ImportFile => {
                let files = list_rooms(&args.rooms_dir)?;
                let Some(file) = story::pick_import_file(&mut console, &files)? else {
                    continue;
                };
                let imported = format!("Imported rooms from {file}");
                console.announce(&imported, TextStyle::Success)?;
                play(&mut console, &mut roster)?;
            }
            MainChoice::ImportSamples => {
                console.announce("Imported the sample rooms", TextStyle::Success)?;
                play(&mut console, &mut roster)?;
            }
            MainChoice::Quit => break,
        }
    }

    console.clear()?;
    Ok(())
}

/// Room files under `dir`; a missing directory is just an empty list, so
/// the picker still offers the way back.
fn list_rooms(dir: &Path) -> anyhow::Result<Vec<String>> {
    match story::room_files(dir) {
        Ok(files) => Ok(files),
        Err(UiError::Io(err)) if err.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(err) => Err(err).with_context(|| format!("scanning {}", dir.display())),
    }
}

/// One run from player pick to the end of the opening scene. Fresh names
/// join the roster so later runs can pick them from the menu.
fn play(console: &mut TtyConsole, roster: &mut Vec<String>) -> anyhow::Result<()> {
    let known = roster.clone();
    let choice = story::pick_player(console, &known)?;
    if let PlayerChoice::New(name) = &choice {
        if !name.is_empty() && !roster.iter().any(|known| known == name) {
            roster.push(name.clone());
        }
    }
    story::start_game(console, choice.name())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rooms_dir_defaults_to_rooms() {
        let args = Args::parse_from(["storyterm"]);
        assert_eq!(args.rooms_dir, PathBuf::from("rooms"));
    }

    #[test]
    fn rooms_dir_flag_overrides_the_default() {
        let args = Args::parse_from(["storyterm", "--rooms-dir", "/tmp/rooms"]);
        assert_eq!(args.rooms_dir, PathBuf::from("/tmp/rooms"));
    }

    #[test]
    fn short_flag_works_too() {
        let args = Args::parse_from(["storyterm", "-r", "data"]);
        assert_eq!(args.rooms_dir, PathBuf::from("data"));
    }
}
