//! Random rolls shared by every randomized decision in the game.
//!
//! All ranges are half-open: `uniform_int(5, 20)` never returns 20. Stat
//! tables in `constants` are written against that contract.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Returns an integer in `[min, max)`. An empty range yields `min`.
pub fn uniform_int(rng: &mut impl Rng, min: i32, max: i32) -> i32 {
    if max <= min {
        return min;
    }
    rng.gen_range(min..max)
}

/// Rolls from a `(min, max)` constant pair.
pub fn uniform_in(rng: &mut impl Rng, range: (i32, i32)) -> i32 {
    uniform_int(rng, range.0, range.1)
}

/// Percent roll: true when `uniform_int(1, 100)` lands below `threshold`.
///
/// The roll never produces 100, so a threshold of 20 succeeds 19 times in 99.
pub fn roll_percent(rng: &mut impl Rng, threshold: i32) -> bool {
    uniform_int(rng, 1, 100) < threshold
}

/// A fraction in `[0, 1)` truncated to two decimals (0.00, 0.01, ... 0.99).
pub fn roll_fraction(rng: &mut impl Rng) -> f64 {
    (rng.gen::<f64>() * 100.0).floor() / 100.0
}

/// Builds the game's generator, reproducible when a seed is given.
pub fn game_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}
