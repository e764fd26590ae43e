//! Game rules shared by play and replay: constants, dice, stage progression.

pub mod constants;
pub mod progression;
pub mod rng;

pub use constants::*;
pub use progression::{run_session, run_session_with, SessionOutcome, SessionReport};
