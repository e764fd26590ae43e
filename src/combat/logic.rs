//! Turn resolution: what one player action or one monster attack does.
//!
//! Every function mutates the combatants in place and returns the log entry
//! describing what happened. Randomness always comes from the caller's `rng`.

use rand::Rng;

use crate::core::constants::*;
use crate::core::rng::roll_percent;
use crate::entity::{Combatant, Monster, Player};
use crate::ui::Tone;

use super::types::{MonsterTurn, PlayerAction, PlayerTurn, TurnLogEntry};

/// Result of the player's half of a round.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionOutcome {
    pub turn: PlayerTurn,
    /// Whether the action did what the player wanted. Drives the message color
    /// and, for defend and escape, whether the monster gets to act.
    pub succeeded: bool,
}

impl ActionOutcome {
    fn success(turn: PlayerTurn) -> Self {
        Self {
            turn,
            succeeded: true,
        }
    }

    fn failure(turn: PlayerTurn) -> Self {
        Self {
            turn,
            succeeded: false,
        }
    }

    pub fn tone(&self) -> Tone {
        if self.succeeded {
            Tone::Success
        } else {
            Tone::Failure
        }
    }
}

/// Everything one round produced, in log order.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundResult {
    /// `None` when the input matched no action.
    pub player: Option<ActionOutcome>,
    pub monster: Option<MonsterTurn>,
    pub escaped: bool,
}

impl RoundResult {
    /// The round's log entries with the tone each is shown in.
    pub fn entries(&self) -> Vec<(TurnLogEntry, Tone)> {
        let mut entries = Vec::with_capacity(2);
        if let Some(outcome) = &self.player {
            entries.push((TurnLogEntry::Player(outcome.turn.clone()), outcome.tone()));
        }
        if let Some(turn) = &self.monster {
            entries.push((TurnLogEntry::Monster(turn.clone()), Tone::Failure));
        }
        entries
    }
}

/// One basic attack from `attacker` landing on `defender`. Returns the damage
/// the defender actually took.
pub fn strike<A, D, R>(attacker: &A, defender: &mut D, rng: &mut R) -> i32
where
    A: Combatant,
    D: Combatant,
    R: Rng,
{
    let raw = attacker.compute_attack(rng);
    defender.take_hit(raw)
}

fn attack_message(damage: i32) -> String {
    format!("Dealt {} damage to the monster!", damage)
}

/// Always lands. 20% of the time it hits the ceiling exactly.
pub fn player_attack(player: &Player, monster: &mut Monster, rng: &mut impl Rng) -> ActionOutcome {
    let damage = strike(player, monster, rng);
    ActionOutcome::success(PlayerTurn::Attack {
        msg: attack_message(damage),
        damage,
    })
}

/// Half the time nothing happens. A successful defend turns into a counter
/// attack 60% of the time; either way the monster does not strike back.
pub fn defend(player: &Player, monster: &mut Monster, rng: &mut impl Rng) -> ActionOutcome {
    if roll_percent(rng, DEFEND_FAIL_CHANCE) {
        return ActionOutcome::failure(PlayerTurn::Defence {
            msg: "Defence failed.".to_string(),
            damage: 0,
        });
    }

    if roll_percent(rng, COUNTER_CHANCE) {
        let damage = strike(player, monster, rng);
        return ActionOutcome::success(PlayerTurn::Defence {
            msg: format!("Counter attack! {}", attack_message(damage)),
            damage,
        });
    }

    ActionOutcome::success(PlayerTurn::Defence {
        msg: "Defence succeeded!".to_string(),
        damage: 0,
    })
}

/// 50% to land for `attack + floor(bonus * 1.5)`. A miss spends the turn.
pub fn power_attack(player: &Player, monster: &mut Monster, rng: &mut impl Rng) -> ActionOutcome {
    if roll_percent(rng, POWER_ATTACK_CHANCE) {
        let damage = monster.take_hit(player.power_attack_damage());
        return ActionOutcome::success(PlayerTurn::Skill {
            msg: format!("Power attack succeeded! Dealt {} damage!", damage),
            damage,
        });
    }

    ActionOutcome::failure(PlayerTurn::Skill {
        msg: "Power attack failed!".to_string(),
        damage: 0,
    })
}

/// Flat 30%, independent of every stat.
pub fn escape(rng: &mut impl Rng) -> ActionOutcome {
    let succeed = roll_percent(rng, ESCAPE_CHANCE);
    let msg = if succeed {
        "Escaped successfully!"
    } else {
        "Escape failed!"
    };
    ActionOutcome {
        turn: PlayerTurn::Escape {
            msg: msg.to_string(),
            succeed,
        },
        succeeded: succeed,
    }
}

pub fn do_nothing() -> ActionOutcome {
    ActionOutcome::success(PlayerTurn::Nothing {
        msg: "You did nothing.".to_string(),
    })
}

/// The monster's only move, routed through the player's armor.
pub fn monster_attack(monster: &Monster, player: &mut Player, rng: &mut impl Rng) -> MonsterTurn {
    let damage = strike(monster, player, rng);
    let msg = if damage > 0 {
        format!("The monster dealt {} damage!", damage)
    } else {
        "Your armor held. You took no damage!".to_string()
    };
    MonsterTurn::Attack { msg, damage }
}

pub fn resolve_player_action(
    action: PlayerAction,
    player: &Player,
    monster: &mut Monster,
    rng: &mut impl Rng,
) -> ActionOutcome {
    match action {
        PlayerAction::Attack => player_attack(player, monster, rng),
        PlayerAction::Defend => defend(player, monster, rng),
        PlayerAction::Escape => escape(rng),
        PlayerAction::PowerAttack => power_attack(player, monster, rng),
        PlayerAction::Nothing => do_nothing(),
    }
}

/// Resolves a full round: the player's action, then the monster's reply.
///
/// The monster skips its turn after a successful defend or escape, and when
/// the player's action already brought it down.
pub fn resolve_round(
    action: Option<PlayerAction>,
    player: &mut Player,
    monster: &mut Monster,
    rng: &mut impl Rng,
) -> RoundResult {
    let outcome = action.map(|a| resolve_player_action(a, player, monster, rng));

    let escaped = matches!(
        &outcome,
        Some(ActionOutcome {
            turn: PlayerTurn::Escape { succeed: true, .. },
            ..
        })
    );
    let defended = matches!(
        &outcome,
        Some(ActionOutcome {
            turn: PlayerTurn::Defence { .. },
            succeeded: true,
        })
    );

    let monster_turn = if escaped || defended || monster.is_defeated() {
        None
    } else {
        Some(monster_attack(monster, player, rng))
    };

    if let Some(o) = &outcome {
        log::debug!("player: {}", TurnLogEntry::Player(o.turn.clone()).msg());
    }
    if let Some(m) = &monster_turn {
        log::debug!("monster: {}", TurnLogEntry::Monster(m.clone()).msg());
    }

    RoundResult {
        player: outcome,
        monster: monster_turn,
        escaped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    #[test]
    fn test_player_attack_damages_monster() {
        let mut rng = create_test_rng();
        let player = Player::new(30, 10, 0.5, 3);
        let mut monster = Monster::new(100, 5);
        let outcome = player_attack(&player, &mut monster, &mut rng);
        match outcome.turn {
            PlayerTurn::Attack { damage, ref msg } => {
                assert!((10..=15).contains(&damage));
                assert_eq!(monster.hit_points, 100 - damage);
                assert_eq!(*msg, format!("Dealt {} damage to the monster!", damage));
            }
            other => panic!("unexpected turn {:?}", other),
        }
        assert!(outcome.succeeded);
    }

    #[test]
    fn test_monster_attack_blocked_by_armor() {
        let mut rng = create_test_rng();
        let monster = Monster::new(30, 8);
        let mut player = Player::new(30, 10, 0.0, 8);
        let turn = monster_attack(&monster, &mut player, &mut rng);
        assert_eq!(
            turn,
            MonsterTurn::Attack {
                msg: "Your armor held. You took no damage!".to_string(),
                damage: 0
            }
        );
        assert_eq!(player.hit_points, 30);
    }

    #[test]
    fn test_monster_attack_through_armor() {
        let mut rng = create_test_rng();
        let monster = Monster::new(30, 15);
        let mut player = Player::new(30, 10, 0.0, 4);
        let turn = monster_attack(&monster, &mut player, &mut rng);
        assert_eq!(
            turn,
            MonsterTurn::Attack {
                msg: "The monster dealt 11 damage!".to_string(),
                damage: 11
            }
        );
        assert_eq!(player.hit_points, 19);
    }

    #[test]
    fn test_defend_messages() {
        let mut rng = create_test_rng();
        let player = Player::new(100, 10, 0.0, 0);
        let (mut countered, mut held, mut failed) = (0, 0, 0);

        for _ in 0..500 {
            let mut monster = Monster::new(10_000, 5);
            let outcome = defend(&player, &mut monster, &mut rng);
            let succeeded = outcome.succeeded;
            match outcome.turn {
                PlayerTurn::Defence { msg, damage } if damage > 0 => {
                    assert!(succeeded);
                    assert_eq!(damage, 10);
                    assert_eq!(msg, "Counter attack! Dealt 10 damage to the monster!");
                    assert_eq!(monster.hit_points, 9_990);
                    countered += 1;
                }
                PlayerTurn::Defence { msg, .. } if succeeded => {
                    assert_eq!(msg, "Defence succeeded!");
                    assert_eq!(monster.hit_points, 10_000);
                    held += 1;
                }
                PlayerTurn::Defence { msg, .. } => {
                    assert_eq!(msg, "Defence failed.");
                    assert_eq!(monster.hit_points, 10_000);
                    failed += 1;
                }
                other => panic!("unexpected turn {:?}", other),
            }
        }

        assert!(countered > 0 && held > 0 && failed > 0);
    }

    #[test]
    fn test_escape_messages() {
        let mut rng = create_test_rng();
        let (mut escaped, mut caught) = (0, 0);

        for _ in 0..200 {
            let outcome = escape(&mut rng);
            match outcome.turn {
                PlayerTurn::Escape { msg, succeed: true } => {
                    assert!(outcome.succeeded);
                    assert_eq!(msg, "Escaped successfully!");
                    escaped += 1;
                }
                PlayerTurn::Escape { msg, succeed: false } => {
                    assert!(!outcome.succeeded);
                    assert_eq!(msg, "Escape failed!");
                    caught += 1;
                }
                other => panic!("unexpected turn {:?}", other),
            }
        }

        assert!(escaped > 0 && caught > 0);
    }

    #[test]
    fn test_power_attack_messages() {
        let mut rng = create_test_rng();
        let player = Player::new(100, 10, 0.5, 0);
        let (mut landed, mut missed) = (0, 0);

        for _ in 0..200 {
            let mut monster = Monster::new(10_000, 5);
            let outcome = power_attack(&player, &mut monster, &mut rng);
            match outcome.turn {
                PlayerTurn::Skill { msg, damage: 17 } => {
                    assert_eq!(msg, "Power attack succeeded! Dealt 17 damage!");
                    landed += 1;
                }
                PlayerTurn::Skill { msg, damage: 0 } => {
                    assert_eq!(msg, "Power attack failed!");
                    missed += 1;
                }
                other => panic!("unexpected turn {:?}", other),
            }
        }

        assert!(landed > 0 && missed > 0);
    }

    #[test]
    fn test_nothing_lets_monster_attack() {
        let mut rng = create_test_rng();
        let mut player = Player::new(50, 10, 0.0, 2);
        let mut monster = Monster::new(40, 12);
        let round = resolve_round(Some(PlayerAction::Nothing), &mut player, &mut monster, &mut rng);
        assert!(round.monster.is_some());
        assert_eq!(player.hit_points, 40);
        assert_eq!(monster.hit_points, 40);
        assert_eq!(round.entries().len(), 2);
    }

    #[test]
    fn test_unknown_choice_still_gets_monster_turn() {
        let mut rng = create_test_rng();
        let mut player = Player::new(50, 10, 0.0, 2);
        let mut monster = Monster::new(40, 12);
        let round = resolve_round(None, &mut player, &mut monster, &mut rng);
        assert!(round.player.is_none());
        let entries = round.entries();
        assert_eq!(entries.len(), 1);
        assert!(!entries[0].0.is_player_turn());
    }

    #[test]
    fn test_killing_blow_skips_monster_turn() {
        let mut rng = create_test_rng();
        let mut player = Player::new(50, 30, 0.0, 0);
        let mut monster = Monster::new(5, 12);
        let round = resolve_round(Some(PlayerAction::Attack), &mut player, &mut monster, &mut rng);
        assert!(monster.is_defeated());
        assert!(round.monster.is_none());
        assert_eq!(player.hit_points, 50);
    }

    #[test]
    fn test_successful_defend_skips_monster_turn() {
        let mut rng = create_test_rng();
        for _ in 0..200 {
            let mut player = Player::new(500, 5, 0.0, 0);
            let mut monster = Monster::new(10_000, 3);
            let round = resolve_round(Some(PlayerAction::Defend), &mut player, &mut monster, &mut rng);
            let outcome = round.player.as_ref().unwrap();
            assert_eq!(round.monster.is_none(), outcome.succeeded);
            if !outcome.succeeded {
                assert_eq!(monster.hit_points, 10_000);
            }
        }
    }

    #[test]
    fn test_escape_success_ends_round() {
        let mut rng = create_test_rng();
        let mut saw_escape = false;
        for _ in 0..100 {
            let mut player = Player::new(500, 5, 0.0, 0);
            let mut monster = Monster::new(100, 3);
            let round = resolve_round(Some(PlayerAction::Escape), &mut player, &mut monster, &mut rng);
            if round.escaped {
                saw_escape = true;
                assert!(round.monster.is_none());
            } else {
                assert!(round.monster.is_some());
            }
        }
        assert!(saw_escape);
    }

    #[test]
    fn test_power_attack_damage_or_nothing() {
        let mut rng = create_test_rng();
        for _ in 0..100 {
            let player = Player::new(30, 10, 0.5, 3);
            let mut monster = Monster::new(100, 5);
            let outcome = power_attack(&player, &mut monster, &mut rng);
            if outcome.succeeded {
                assert_eq!(monster.hit_points, 83);
                assert_eq!(outcome.turn, PlayerTurn::Skill {
                    msg: "Power attack succeeded! Dealt 17 damage!".to_string(),
                    damage: 17,
                });
            } else {
                assert_eq!(monster.hit_points, 100);
                assert_eq!(outcome.tone(), Tone::Failure);
            }
        }
    }
}
