//! Combat: turn resolution, the battle loop, and the turn log it records.

pub mod battle;
pub mod logic;
pub mod types;

pub use battle::run_battle;
pub use logic::{resolve_player_action, resolve_round, ActionOutcome, RoundResult};
pub use types::*;
