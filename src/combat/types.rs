use serde::{Deserialize, Deserializer, Serialize};

use crate::entity::{Monster, Player};

/// A player's choice for one round, as typed at the battle prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    Attack,
    Defend,
    Escape,
    PowerAttack,
    Nothing,
}

impl PlayerAction {
    /// Maps exactly `1`-`4` and `0` to actions. Anything else, padded input
    /// included, resolves no action.
    pub fn from_choice(input: &str) -> Option<Self> {
        match input {
            "1" => Some(PlayerAction::Attack),
            "2" => Some(PlayerAction::Defend),
            "3" => Some(PlayerAction::Escape),
            "4" => Some(PlayerAction::PowerAttack),
            "0" => Some(PlayerAction::Nothing),
            _ => None,
        }
    }
}

/// How a battle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    PlayerDefeated,
    MonsterDefeated,
    PlayerEscaped,
}

impl BattleOutcome {
    /// Escaping counts as a win for progression.
    pub fn is_win(self) -> bool {
        !matches!(self, BattleOutcome::PlayerDefeated)
    }
}

/// The player's half of a round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PlayerTurn {
    Attack {
        msg: String,
        #[serde(deserialize_with = "whole_number")]
        damage: i32,
    },
    Defence {
        msg: String,
        #[serde(deserialize_with = "whole_number")]
        damage: i32,
    },
    Escape {
        msg: String,
        succeed: bool,
    },
    Skill {
        msg: String,
        #[serde(deserialize_with = "whole_number")]
        damage: i32,
    },
    Nothing {
        msg: String,
    },
}

/// The monster's half of a round. Monsters only ever attack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MonsterTurn {
    Attack {
        msg: String,
        #[serde(deserialize_with = "whole_number")]
        damage: i32,
    },
}

/// One line of the turn log, serialized flat as
/// `{"turn": "player", "type": "attack", "msg": ..., "damage": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "turn", rename_all = "lowercase")]
pub enum TurnLogEntry {
    Player(PlayerTurn),
    Monster(MonsterTurn),
}

impl TurnLogEntry {
    pub fn msg(&self) -> &str {
        match self {
            TurnLogEntry::Player(turn) => match turn {
                PlayerTurn::Attack { msg, .. }
                | PlayerTurn::Defence { msg, .. }
                | PlayerTurn::Escape { msg, .. }
                | PlayerTurn::Skill { msg, .. }
                | PlayerTurn::Nothing { msg } => msg.as_str(),
            },
            TurnLogEntry::Monster(MonsterTurn::Attack { msg, .. }) => msg.as_str(),
        }
    }

    /// Logged damage; `None` for escapes and skipped turns.
    pub fn damage(&self) -> Option<i32> {
        match self {
            TurnLogEntry::Player(PlayerTurn::Attack { damage, .. })
            | TurnLogEntry::Player(PlayerTurn::Defence { damage, .. })
            | TurnLogEntry::Player(PlayerTurn::Skill { damage, .. })
            | TurnLogEntry::Monster(MonsterTurn::Attack { damage, .. }) => Some(*damage),
            TurnLogEntry::Player(PlayerTurn::Escape { .. })
            | TurnLogEntry::Player(PlayerTurn::Nothing { .. }) => None,
        }
    }

    pub fn is_player_turn(&self) -> bool {
        matches!(self, TurnLogEntry::Player(_))
    }
}

/// Everything needed to replay one stage: the combatants as they were when
/// the battle started, and what happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageRecord {
    pub player: Player,
    pub monster: Monster,
    #[serde(deserialize_with = "skip_null_entries")]
    pub logs: Vec<TurnLogEntry>,
    pub win: Option<bool>,
}

impl StageRecord {
    pub fn new(player: Player, monster: Monster) -> Self {
        Self {
            player,
            monster,
            logs: Vec::new(),
            win: None,
        }
    }
}

/// Older save files may carry fractional damage from power attacks.
fn whole_number<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    Ok(value.trunc() as i32)
}

/// Older save files left `null` holes where a round had no player entry.
fn skip_null_entries<'de, D>(deserializer: D) -> Result<Vec<TurnLogEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<Option<TurnLogEntry>> = Vec::deserialize(deserializer)?;
    let total = raw.len();
    let entries: Vec<TurnLogEntry> = raw.into_iter().flatten().collect();
    if entries.len() < total {
        log::warn!(
            "skipped {} empty turn log entries while loading",
            total - entries.len()
        );
    }
    Ok(entries)
}
