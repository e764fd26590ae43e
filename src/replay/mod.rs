//! Watching a saved session again.
//!
//! A replay does not re-roll anything. It walks the recorded turn log against
//! the snapshots stored with each stage and redraws the battle screen after
//! every step, with pauses so a human can follow along.

pub mod logic;

pub use logic::{reconstruct, ReplayState};

use std::io;
use std::time::Duration;

use crate::combat::StageRecord;
use crate::core::constants::*;
use crate::core::progression::stage_heal;
use crate::ui::screens::{
    all_cleared_line, defeat_line, final_record_line, heal_line, level_up_line,
    replayed_entry_line, status_lines, victory_line,
};
use crate::ui::Console;

fn draw<C: Console + ?Sized>(console: &mut C, state: &ReplayState) -> io::Result<()> {
    console.clear()?;
    console.show_all(status_lines(state.stage, &state.player, &state.monster))?;
    for entry in &state.replayed {
        console.show(replayed_entry_line(entry))?;
    }
    Ok(())
}

/// Replays one stage. `stage` is 1-based.
pub fn replay_stage<C>(console: &mut C, stage: u32, record: &StageRecord) -> io::Result<ReplayState>
where
    C: Console + ?Sized,
{
    let mut state = ReplayState::new(stage, record);
    draw(console, &state)?;
    console.pause(Duration::from_millis(REPLAY_INTRO_PAUSE_MS));

    for entry in &record.logs {
        state.apply(entry);
        draw(console, &state)?;
        console.pause(Duration::from_millis(REPLAY_STEP_PAUSE_MS));
    }

    // A record saved without a result is shown as a loss.
    if record.win == Some(true) {
        console.show(victory_line())?;
        console.show(heal_line(stage_heal(stage)))?;
        console.show(level_up_line())?;
    } else {
        console.show(defeat_line())?;
    }
    console.pause(Duration::from_millis(REPLAY_OUTRO_PAUSE_MS));

    Ok(state)
}

/// Replays every stage of a saved session, then the session summary.
pub fn replay_session<C>(console: &mut C, records: &[StageRecord]) -> io::Result<()>
where
    C: Console + ?Sized,
{
    log::info!("replaying session with {} stages", records.len());
    for (index, record) in records.iter().enumerate() {
        replay_stage(console, index as u32 + 1, record)?;
    }

    let stages = records.len() as u32;
    if stages < FINAL_STAGE {
        console.show(final_record_line(stages))?;
    } else {
        console.show(all_cleared_line())?;
    }
    console.pause(Duration::from_millis(REPLAY_SUMMARY_PAUSE_MS));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::{MonsterTurn, PlayerTurn, TurnLogEntry};
    use crate::entity::{Monster, Player};
    use crate::ui::ScriptedConsole;

    fn sample_record(win: Option<bool>) -> StageRecord {
        StageRecord {
            player: Player::new(40, 10, 0.0, 5),
            monster: Monster::new(20, 12),
            logs: vec![
                TurnLogEntry::Player(PlayerTurn::Attack {
                    msg: "Dealt 10 damage to the monster!".to_string(),
                    damage: 10,
                }),
                TurnLogEntry::Monster(MonsterTurn::Attack {
                    msg: "The monster dealt 7 damage!".to_string(),
                    damage: 7,
                }),
                TurnLogEntry::Player(PlayerTurn::Attack {
                    msg: "Dealt 10 damage to the monster!".to_string(),
                    damage: 10,
                }),
            ],
            win,
        }
    }

    #[test]
    fn test_replay_stage_pacing() {
        let mut console = ScriptedConsole::default();
        replay_stage(&mut console, 1, &sample_record(Some(true))).unwrap();
        assert_eq!(
            console.pauses(),
            vec![
                Duration::from_millis(1500),
                Duration::from_millis(1000),
                Duration::from_millis(1000),
                Duration::from_millis(1000),
                Duration::from_millis(1500),
            ]
        );
    }

    #[test]
    fn test_replay_stage_final_frame() {
        let mut console = ScriptedConsole::default();
        let state = replay_stage(&mut console, 2, &sample_record(Some(true))).unwrap();
        assert_eq!(state.monster.hit_points, 0);
        assert_eq!(state.player.hit_points, 33);

        let frame = console.last_frame();
        assert_eq!(
            frame[2],
            "| Stage: 2 | Player HP: 33, Attack: 10 ~ 10 Armor: 5 | Monster HP: 0, Attack: 12 |"
        );
        assert_eq!(
            &frame[5..],
            &[
                "Dealt 10 damage to the monster!",
                "The monster dealt 7 damage!",
                "Dealt 10 damage to the monster!",
                "Victory!",
                "Recovered 20 HP!",
                "Your stats increased!",
            ]
        );
    }

    #[test]
    fn test_replay_stage_loss_and_missing_result() {
        for win in [Some(false), None] {
            let mut console = ScriptedConsole::default();
            replay_stage(&mut console, 1, &sample_record(win)).unwrap();
            assert_eq!(console.last_frame().last().map(String::as_str), Some("Defeated."));
        }
    }

    #[test]
    fn test_replay_session_summary() {
        let mut console = ScriptedConsole::default();
        let records = vec![sample_record(Some(true)), sample_record(Some(false))];
        replay_session(&mut console, &records).unwrap();
        let shown = console.shown_text();
        assert_eq!(shown.last().map(String::as_str), Some("Final record: stage 2"));
        assert!(shown.iter().any(|l| l.starts_with("| Stage: 2 ")));

        let mut console = ScriptedConsole::default();
        let records = vec![sample_record(Some(true)); 10];
        replay_session(&mut console, &records).unwrap();
        assert_eq!(
            console.shown_text().last().map(String::as_str),
            Some("All stages cleared!")
        );
    }
}
