//! Combatants: the player's character and the monsters it fights.

pub mod types;

pub use types::*;
