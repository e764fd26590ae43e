//! A full session: stage after stage until the player falls or clears the
//! last stage.

use std::io;
use std::time::Duration;

use rand::Rng;

use crate::combat::{run_battle, StageRecord};
use crate::core::constants::*;
use crate::entity::{Monster, Player};
use crate::ui::screens::{
    all_cleared_line, defeat_line, final_record_line, heal_line, level_up_line, victory_line,
};
use crate::ui::Console;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The player fell on `stage`.
    Defeated { stage: u32 },
    /// Every stage up to `FINAL_STAGE` was won.
    Completed,
}

/// What a session leaves behind: the outcome and one record per stage
/// attempted. The records are what gets saved and replayed.
#[derive(Debug, Clone)]
pub struct SessionReport {
    pub outcome: SessionOutcome,
    pub records: Vec<StageRecord>,
    pub final_player: Player,
}

impl SessionReport {
    pub fn stages_attempted(&self) -> u32 {
        self.records.len() as u32
    }
}

/// Heal granted after clearing `stage`.
pub fn stage_heal(stage: u32) -> i32 {
    stage as i32 * HEAL_PER_STAGE
}

/// Plays a new session from stage 1 with a freshly rolled character.
pub fn run_session<C, R>(console: &mut C, rng: &mut R) -> io::Result<SessionReport>
where
    C: Console + ?Sized,
    R: Rng,
{
    let player = Player::spawn(rng);
    run_session_with(player, console, rng)
}

/// Plays a session with the given character. The character persists across
/// stages; each stage brings a new monster.
pub fn run_session_with<C, R>(
    mut player: Player,
    console: &mut C,
    rng: &mut R,
) -> io::Result<SessionReport>
where
    C: Console + ?Sized,
    R: Rng,
{
    console.clear()?;
    let mut records = Vec::new();
    let mut stage: u32 = 1;

    let outcome = loop {
        let mut monster = Monster::for_stage(stage, rng);
        log::info!(
            "stage {}: player hp={} atk={} armor={} vs monster hp={} atk={}",
            stage,
            player.hit_points,
            player.attack_power,
            player.armor,
            monster.hit_points,
            monster.attack_power
        );

        let (result, record) = run_battle(stage, &mut player, &mut monster, console, rng)?;
        records.push(record);

        if !result.is_win() {
            console.show(defeat_line())?;
            console.show(final_record_line(stage))?;
            break SessionOutcome::Defeated { stage };
        }
        console.show(victory_line())?;

        if stage == FINAL_STAGE {
            console.show(all_cleared_line())?;
            break SessionOutcome::Completed;
        }

        let heal = stage_heal(stage);
        player.heal(heal);
        console.show(heal_line(heal))?;
        player.level_up(rng);
        console.show(level_up_line())?;
        console.pause(Duration::from_millis(STAGE_CLEAR_PAUSE_MS));

        stage += 1;
    };

    log::info!("session over after {} stages: {:?}", records.len(), outcome);
    Ok(SessionReport {
        outcome,
        records,
        final_player: player,
    })
}
