//! The battle loop: render, check for an end state, prompt, resolve, repeat.

use std::io;

use rand::Rng;

use crate::entity::{Combatant, Monster, Player};
use crate::ui::screens::{action_menu_lines, status_lines, BATTLE_PROMPT};
use crate::ui::{Console, Line};

use super::logic::resolve_round;
use super::types::{BattleOutcome, PlayerAction, StageRecord};

/// Fights one stage to the end.
///
/// The returned record holds the combatants as they were before the first
/// round, every log entry in order, and whether the player won.
pub fn run_battle<C, R>(
    stage: u32,
    player: &mut Player,
    monster: &mut Monster,
    console: &mut C,
    rng: &mut R,
) -> io::Result<(BattleOutcome, StageRecord)>
where
    C: Console + ?Sized,
    R: Rng,
{
    let mut record = StageRecord::new(player.clone(), monster.clone());
    let mut history: Vec<Line> = Vec::new();
    let mut round: u32 = 0;

    let outcome = loop {
        console.clear()?;
        console.show_all(status_lines(stage, player, monster))?;
        console.show_all(history.clone())?;

        if player.is_defeated() {
            break BattleOutcome::PlayerDefeated;
        }
        if monster.is_defeated() {
            break BattleOutcome::MonsterDefeated;
        }

        console.show_all(action_menu_lines())?;
        let choice = console.prompt(BATTLE_PROMPT)?;
        let action = PlayerAction::from_choice(&choice);
        if action.is_none() {
            log::debug!("stage {} round {}: unrecognized choice {:?}", stage, round, choice);
        }

        let result = resolve_round(action, player, monster, rng);
        for (entry, tone) in result.entries() {
            history.push(Line::toned(entry.msg(), tone));
            record.logs.push(entry);
        }
        round += 1;

        if result.escaped {
            break BattleOutcome::PlayerEscaped;
        }
    };

    record.win = Some(outcome.is_win());
    log::info!(
        "stage {} ended after {} rounds: {:?}",
        stage,
        round,
        outcome
    );
    Ok((outcome, record))
}
