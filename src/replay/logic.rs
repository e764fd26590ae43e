//! Rebuilding a stage from its record, one logged turn at a time.

use crate::combat::{MonsterTurn, PlayerTurn, StageRecord, TurnLogEntry};
use crate::entity::{Monster, Player};

/// The combatants of a recorded stage as they stand part-way through a replay.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayState {
    pub stage: u32,
    pub player: Player,
    pub monster: Monster,
    /// Entries applied so far, in order.
    pub replayed: Vec<TurnLogEntry>,
}

impl ReplayState {
    /// Starts from the snapshots taken when the battle began.
    pub fn new(stage: u32, record: &StageRecord) -> Self {
        Self {
            stage,
            player: record.player.clone(),
            monster: record.monster.clone(),
            replayed: Vec::with_capacity(record.logs.len()),
        }
    }

    /// Applies one logged turn to the snapshots.
    ///
    /// Monster turns only land when the monster's attack beats the player's
    /// armor as the snapshots stand now; the logged damage is used only then.
    /// Player attack, defence and skill turns subtract their logged damage
    /// unconditionally. Escapes and skipped turns change nothing.
    pub fn apply(&mut self, entry: &TurnLogEntry) {
        match entry {
            TurnLogEntry::Monster(MonsterTurn::Attack { damage, .. }) => {
                if self.monster.attack_power > self.player.armor {
                    self.player.hit_points -= damage;
                }
            }
            TurnLogEntry::Player(PlayerTurn::Attack { damage, .. })
            | TurnLogEntry::Player(PlayerTurn::Defence { damage, .. })
            | TurnLogEntry::Player(PlayerTurn::Skill { damage, .. }) => {
                self.monster.hit_points -= damage;
            }
            TurnLogEntry::Player(PlayerTurn::Escape { .. })
            | TurnLogEntry::Player(PlayerTurn::Nothing { .. }) => {}
        }
        self.replayed.push(entry.clone());
    }

    pub fn messages(&self) -> Vec<&str> {
        self.replayed.iter().map(TurnLogEntry::msg).collect()
    }
}

/// Replays a whole record without any display and returns the final state.
pub fn reconstruct(stage: u32, record: &StageRecord) -> ReplayState {
    let mut state = ReplayState::new(stage, record);
    for entry in &record.logs {
        state.apply(entry);
    }
    state
}
