//! The main menu and the replay picker.

use std::io;
use std::time::Duration;

use rand::Rng;

use crate::core::constants::*;
use crate::core::progression::run_session;
use crate::replay::replay_session;
use crate::save_manager::SaveManager;
use crate::ui::screens::{
    lobby_lines, no_replays_line, replay_list_header, replay_list_lines, LOBBY_PROMPT,
};
use crate::ui::{Console, Line, Tone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LobbyChoice {
    NewGame,
    Replay,
    Achievements,
    Exit,
}

impl LobbyChoice {
    /// Matches the raw line; `" 1"` is not a choice.
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(LobbyChoice::NewGame),
            "2" => Some(LobbyChoice::Replay),
            "3" => Some(LobbyChoice::Achievements),
            "4" => Some(LobbyChoice::Exit),
            _ => None,
        }
    }
}

/// Parses a replay pick. Surrounding whitespace is ignored; only an index
/// into the listing is accepted.
pub fn parse_replay_index(input: &str, count: usize) -> Option<usize> {
    input.trim().parse::<usize>().ok().filter(|i| *i < count)
}

/// Runs the menu until the player picks Exit.
///
/// New games are saved as soon as they end, then the menu comes back.
pub fn run_lobby<C, R>(console: &mut C, rng: &mut R, saves: &SaveManager) -> io::Result<()>
where
    C: Console + ?Sized,
    R: Rng,
{
    loop {
        console.clear()?;
        console.show_all(lobby_lines())?;

        loop {
            let input = console.prompt(LOBBY_PROMPT)?;
            match LobbyChoice::parse(&input) {
                Some(LobbyChoice::NewGame) => {
                    console.show(Line::toned("Starting the game.", Tone::Success))?;
                    let report = run_session(console, rng)?;
                    let filename = saves.save_session(&report.records)?;
                    console.show(Line::toned(
                        format!("Session saved as {}", filename),
                        Tone::Hint,
                    ))?;
                    console.pause(Duration::from_millis(SESSION_SAVED_PAUSE_MS));
                    break;
                }
                Some(LobbyChoice::Replay) => {
                    replay_menu(console, saves)?;
                    break;
                }
                Some(LobbyChoice::Achievements) => {
                    console.show(Line::toned(
                        "Achievements are not ready yet. Start a game instead!",
                        Tone::Warning,
                    ))?;
                }
                Some(LobbyChoice::Exit) => {
                    console.show(Line::toned("Exiting the game.", Tone::Failure))?;
                    return Ok(());
                }
                None => {
                    console.show(Line::toned("Please choose a valid option.", Tone::Failure))?;
                }
            }
        }
    }
}

/// Lists saved sessions, asks for one and replays it. Returns to the caller
/// straight away when there is nothing to replay.
pub fn replay_menu<C>(console: &mut C, saves: &SaveManager) -> io::Result<()>
where
    C: Console + ?Sized,
{
    console.clear()?;
    console.show_all(replay_list_header())?;

    let filenames = saves.list_replays()?;
    if filenames.is_empty() {
        console.show(no_replays_line())?;
        console.pause(Duration::from_millis(NO_REPLAYS_PAUSE_MS));
        return Ok(());
    }
    console.show_all(replay_list_lines(&filenames))?;

    let index = loop {
        let input = console.prompt(LOBBY_PROMPT)?;
        if let Some(index) = parse_replay_index(&input, filenames.len()) {
            break index;
        }
    };

    let records = saves.load_replay(&filenames[index])?;
    replay_session(console, &records)
}
