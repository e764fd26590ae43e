use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::constants::*;
use crate::core::rng::{roll_fraction, roll_percent, uniform_in, uniform_int};

/// What the turn resolver needs from either side of a fight.
///
/// Hit points are allowed to go negative; only the display clamps them.
pub trait Combatant {
    fn hit_points(&self) -> i32;

    fn attack_power(&self) -> i32;

    /// Rolls the raw damage of one basic attack.
    fn compute_attack<R: Rng>(&self, rng: &mut R) -> i32;

    /// Applies incoming raw damage and returns the damage actually taken.
    fn take_hit(&mut self, damage: i32) -> i32;

    fn is_defeated(&self) -> bool {
        self.hit_points() <= 0
    }

    fn display_hp(&self) -> i32 {
        self.hit_points().max(0)
    }
}

/// The player's character. Lives for a whole session.
///
/// Field names on the wire match the save files written by earlier
/// versions of the game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    #[serde(rename = "hp")]
    pub hit_points: i32,
    #[serde(rename = "atk")]
    pub attack_power: i32,
    /// Fraction of `attack_power` added on top to form the attack ceiling.
    /// Grows with every cleared stage and is never capped.
    #[serde(rename = "maxAtkRate")]
    pub max_attack_rate: f64,
    /// Stored and grown but not used by any roll.
    #[serde(rename = "runAwayRate", default)]
    pub escape_bias: i32,
    pub armor: i32,
}

impl Player {
    pub fn new(hit_points: i32, attack_power: i32, max_attack_rate: f64, armor: i32) -> Self {
        Self {
            hit_points,
            attack_power,
            max_attack_rate,
            escape_bias: 0,
            armor,
        }
    }

    /// Rolls a fresh level-1 character.
    pub fn spawn(rng: &mut impl Rng) -> Self {
        Self {
            hit_points: uniform_in(rng, BASE_HP_RANGE),
            attack_power: uniform_in(rng, BASE_ATTACK_RANGE),
            max_attack_rate: roll_fraction(rng),
            escape_bias: uniform_in(rng, BASE_ESCAPE_BIAS_RANGE),
            armor: uniform_in(rng, BASE_ARMOR_RANGE),
        }
    }

    /// `floor(attack_power * max_attack_rate)`, the part a power attack scales.
    pub fn attack_bonus(&self) -> i32 {
        (self.attack_power as f64 * self.max_attack_rate).floor() as i32
    }

    /// Highest damage a basic attack can deal.
    pub fn attack_ceiling(&self) -> i32 {
        self.attack_power + self.attack_bonus()
    }

    /// Damage of a landed power attack: base plus the bonus term scaled by 1.5.
    pub fn power_attack_damage(&self) -> i32 {
        let scaled_bonus = (self.attack_bonus() as f64 * POWER_ATTACK_BONUS_MULTIPLIER).floor();
        self.attack_power + scaled_bonus as i32
    }

    pub fn heal(&mut self, amount: i32) {
        self.hit_points += amount;
    }

    /// Stat growth applied after each cleared stage.
    pub fn level_up(&mut self, rng: &mut impl Rng) {
        self.attack_power += uniform_in(rng, LEVEL_UP_ATTACK_RANGE);
        self.max_attack_rate += roll_fraction(rng);
        self.escape_bias += uniform_in(rng, LEVEL_UP_ESCAPE_BIAS_RANGE);
        self.armor += uniform_in(rng, LEVEL_UP_ARMOR_RANGE);
    }
}

impl Combatant for Player {
    fn hit_points(&self) -> i32 {
        self.hit_points
    }

    fn attack_power(&self) -> i32 {
        self.attack_power
    }

    fn compute_attack<R: Rng>(&self, rng: &mut R) -> i32 {
        let ceiling = self.attack_ceiling();
        if roll_percent(rng, MAX_HIT_CHANCE) {
            ceiling
        } else {
            uniform_int(rng, self.attack_power, ceiling)
        }
    }

    /// Armor soaks a flat amount; it never heals.
    fn take_hit(&mut self, damage: i32) -> i32 {
        let final_damage = (damage - self.armor).max(0);
        self.hit_points -= final_damage;
        final_damage
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    #[serde(rename = "hp")]
    pub hit_points: i32,
    #[serde(rename = "atk")]
    pub attack_power: i32,
}

impl Monster {
    pub fn new(hit_points: i32, attack_power: i32) -> Self {
        Self {
            hit_points,
            attack_power,
        }
    }

    /// Rolls base stats and applies the growth for `stage`.
    pub fn for_stage(stage: u32, rng: &mut impl Rng) -> Self {
        let mut monster = Self::new(
            uniform_in(rng, BASE_HP_RANGE),
            uniform_in(rng, BASE_ATTACK_RANGE),
        );
        monster.grow_for_stage(stage, rng);
        monster
    }

    pub fn grow_for_stage(&mut self, stage: u32, rng: &mut impl Rng) {
        let stage = stage as i32;
        self.hit_points += stage * uniform_in(rng, MONSTER_HP_GROWTH_RANGE);
        self.attack_power += stage * uniform_in(rng, MONSTER_ATTACK_GROWTH_RANGE);
    }
}

impl Combatant for Monster {
    fn hit_points(&self) -> i32 {
        self.hit_points
    }

    fn attack_power(&self) -> i32 {
        self.attack_power
    }

    fn compute_attack<R: Rng>(&self, _rng: &mut R) -> i32 {
        self.attack_power
    }

    fn take_hit(&mut self, damage: i32) -> i32 {
        self.hit_points -= damage;
        damage
    }
}
