// Stage progression
pub const FINAL_STAGE: u32 = 10;
pub const HEAL_PER_STAGE: i32 = 10;

// Base stat ranges, all `[min, max)`
pub const BASE_HP_RANGE: (i32, i32) = (20, 50);
pub const BASE_ATTACK_RANGE: (i32, i32) = (5, 20);
pub const BASE_ARMOR_RANGE: (i32, i32) = (3, 10);
pub const BASE_ESCAPE_BIAS_RANGE: (i32, i32) = (10, 30);

// Per-stage monster growth, multiplied by the stage number
pub const MONSTER_HP_GROWTH_RANGE: (i32, i32) = (5, 15);
pub const MONSTER_ATTACK_GROWTH_RANGE: (i32, i32) = (5, 8);

// Player level-up after a cleared stage
pub const LEVEL_UP_ATTACK_RANGE: (i32, i32) = (5, 20);
pub const LEVEL_UP_ARMOR_RANGE: (i32, i32) = (3, 10);
pub const LEVEL_UP_ESCAPE_BIAS_RANGE: (i32, i32) = (1, 3);

// Percent-roll thresholds: an action succeeds when `uniform_int(1, 100) < threshold`
pub const MAX_HIT_CHANCE: i32 = 20;
pub const DEFEND_FAIL_CHANCE: i32 = 50;
pub const COUNTER_CHANCE: i32 = 60;
pub const POWER_ATTACK_CHANCE: i32 = 50;
pub const ESCAPE_CHANCE: i32 = 30;

/// Only the bonus term of the ceiling is scaled on a power attack.
pub const POWER_ATTACK_BONUS_MULTIPLIER: f64 = 1.5;

// Pacing (milliseconds)
pub const STAGE_CLEAR_PAUSE_MS: u64 = 2000;
pub const REPLAY_INTRO_PAUSE_MS: u64 = 1500;
pub const REPLAY_STEP_PAUSE_MS: u64 = 1000;
pub const REPLAY_OUTRO_PAUSE_MS: u64 = 1500;
pub const REPLAY_SUMMARY_PAUSE_MS: u64 = 2000;
pub const NO_REPLAYS_PAUSE_MS: u64 = 1000;
pub const SESSION_SAVED_PAUSE_MS: u64 = 2000;

// Persistence
pub const DATA_DIR_NAME: &str = ".rl-arena";
pub const SAVES_DIR_NAME: &str = "saves";
pub const LOG_FILE_NAME: &str = "rl-arena.log";
pub const SAVE_TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%S";
