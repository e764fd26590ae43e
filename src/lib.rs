//! RL Arena - Turn-Based Terminal Combat Library
//!
//! Game rules, the session log format and replay are exposed here so the
//! binary stays thin and everything can be driven from tests.

pub mod build_info;
pub mod combat;
pub mod config;
pub mod core;
pub mod entity;
pub mod lobby;
pub mod logging;
pub mod replay;
pub mod save_manager;
pub mod ui;

pub use combat::{BattleOutcome, PlayerAction, StageRecord, TurnLogEntry};
pub use entity::{Combatant, Monster, Player};
pub use save_manager::SaveManager;
