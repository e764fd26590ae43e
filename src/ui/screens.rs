//! The text the game shows: status block, menus, banners and notices.
//!
//! Battles and replays build their screens from the same pieces, so a replay
//! looks exactly like the fight it was recorded from.

use crate::combat::TurnLogEntry;
use crate::entity::{Combatant, Monster, Player};

use super::{Line, Tone};

pub const BATTLE_PROMPT: &str = "Your choice? ";
pub const LOBBY_PROMPT: &str = "Input: ";

const TITLE_ART: &[&str] = &[
    r" ____  _          _                         ",
    r"|  _ \| |        / \   _ __ ___ _ __   __ _ ",
    r"| |_) | |       / _ \ | '__/ _ \ '_ \ / _` |",
    r"|  _ <| |___   / ___ \| | |  __/ | | | (_| |",
    r"|_| \_\_____| /_/   \_\_|  \___|_| |_|\__,_|",
];

fn divider() -> Line {
    Line::toned("=".repeat(50), Tone::Border)
}

/// Stage header with both combatants. Hit points are clamped at zero here and
/// nowhere else.
pub fn status_lines(stage: u32, player: &Player, monster: &Monster) -> Vec<Line> {
    vec![
        Line::blank(),
        Line::toned("=== Current Status ===", Tone::Border),
        Line::toned(format!("| Stage: {} ", stage), Tone::Stage)
            .with(
                format!(
                    "| Player HP: {}, Attack: {} ~ {} Armor: {} ",
                    player.display_hp(),
                    player.attack_power,
                    player.attack_ceiling(),
                    player.armor
                ),
                Tone::PlayerInfo,
            )
            .with(
                format!(
                    "| Monster HP: {}, Attack: {} |",
                    monster.display_hp(),
                    monster.attack_power
                ),
                Tone::MonsterInfo,
            ),
        Line::toned("=====================", Tone::Border),
        Line::blank(),
    ]
}

pub fn action_menu_lines() -> Vec<Line> {
    vec![
        Line::blank(),
        Line::toned(
            "1. Attack 2. Defend (50%) 3. Escape (30%) 4. Power attack (50%) 0. Do nothing",
            Tone::Success,
        ),
    ]
}

/// A recorded turn as replays show it: player turns green, monster turns red.
pub fn replayed_entry_line(entry: &TurnLogEntry) -> Line {
    let tone = if entry.is_player_turn() {
        Tone::Success
    } else {
        Tone::Failure
    };
    Line::toned(entry.msg(), tone)
}

pub fn title_lines() -> Vec<Line> {
    TITLE_ART
        .iter()
        .map(|row| Line::toned(*row, Tone::Title))
        .collect()
}

pub fn lobby_lines() -> Vec<Line> {
    let mut lines = title_lines();
    lines.push(divider());
    lines.push(Line::toned("Welcome to RL Arena!", Tone::Welcome));
    lines.push(Line::toned("Choose an option.", Tone::Success));
    lines.push(Line::blank());
    for (key, label) in [
        ("1.", " New game"),
        ("2.", " Replay"),
        ("3.", " Achievements"),
        ("4.", " Exit"),
    ] {
        lines.push(Line::toned(key, Tone::MenuKey).with(label, Tone::Plain));
    }
    lines.push(divider());
    lines.push(Line::toned(
        "Enter a number from 1 to 4 and press Enter.",
        Tone::Hint,
    ));
    lines
}

pub fn replay_list_header() -> Vec<Line> {
    let mut lines = title_lines();
    lines.push(divider());
    lines.push(Line::toned("Replays", Tone::Success));
    lines.push(Line::blank());
    lines
}

pub fn replay_list_lines(filenames: &[String]) -> Vec<Line> {
    let mut lines: Vec<Line> = filenames
        .iter()
        .enumerate()
        .map(|(i, name)| {
            Line::toned(format!("[{}]", i), Tone::MenuKey).with(format!(": {}", name), Tone::Plain)
        })
        .collect();
    lines.push(divider());
    lines.push(Line::blank());
    lines.push(Line::toned(
        "Enter the number of the replay to watch.",
        Tone::Hint,
    ));
    lines
}

pub fn no_replays_line() -> Line {
    Line::toned("No replays found. Returning to the main menu.", Tone::Failure)
}

pub fn victory_line() -> Line {
    Line::toned("Victory!", Tone::Success)
}

pub fn defeat_line() -> Line {
    Line::toned("Defeated.", Tone::Failure)
}

pub fn heal_line(amount: i32) -> Line {
    Line::toned(format!("Recovered {} HP!", amount), Tone::Reward)
}

pub fn level_up_line() -> Line {
    Line::toned("Your stats increased!", Tone::Reward)
}

pub fn final_record_line(stage: u32) -> Line {
    Line::toned(format!("Final record: stage {}", stage), Tone::Failure)
}

pub fn all_cleared_line() -> Line {
    Line::toned("All stages cleared!", Tone::Success)
}
