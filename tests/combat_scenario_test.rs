//! Integration test: combat resolution end to end
//!
//! Drives full encounters through the public API and checks the exact turn
//! arithmetic, terminal states and the health invariant.

use cyberdefense::character::Player;
use cyberdefense::combat::{
    resolve_turn, run_encounter, CombatAction, CombatStatus, ScriptedDriver,
};
use cyberdefense::economy::grant_victory_reward;
use cyberdefense::items::{ItemEffect, COMMON_ITEMS};
use cyberdefense::threats::{generate_threat, Threat, ThreatKind};
use cyberdefense::GameError;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn reference_threat() -> Threat {
    Threat::new("Phishing Email", 60, 12, 61, ThreatKind::Phishing)
}

// =============================================================================
// Reference Scenario
// =============================================================================

#[test]
fn test_four_attacks_exact_sequence() {
    let mut player = Player::new();
    let mut threat = reference_threat();

    let expected = [(50, 96), (40, 92), (30, 88), (20, 84)];
    for (threat_health, player_health) in expected {
        let outcome = resolve_turn(&mut player, &mut threat, CombatAction::Attack).unwrap();
        assert_eq!(outcome.damage_dealt, 10);
        assert_eq!(outcome.damage_taken, 4);
        assert_eq!(threat.health, threat_health);
        assert_eq!(player.health(), player_health);
        assert_eq!(outcome.status(), CombatStatus::InProgress);
    }
}

#[test]
fn test_reference_encounter_to_victory() {
    let mut player = Player::new();
    let mut threat = reference_threat();
    let mut driver = ScriptedDriver::default();

    let result = run_encounter(&mut player, &mut threat, &mut driver);

    assert_eq!(result.status, CombatStatus::PlayerVictory);
    assert_eq!(result.turns, 6);
    assert_eq!(result.damage_dealt, 60);
    // Five retaliations; the killing blow is not answered.
    assert_eq!(result.damage_taken, 20);
    assert_eq!(player.health(), 80);
    assert!(threat.is_defeated());
}

#[test]
fn test_reference_rewards_replay_under_seed() {
    let play = |seed: u64| {
        let mut player = Player::new();
        let mut threat = reference_threat();
        run_encounter(&mut player, &mut threat, &mut ScriptedDriver::default());
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let reward = grant_victory_reward(&mut player, &threat, &mut rng);
        (reward, player)
    };

    let (reward, player) = play(2024);
    assert!((10..=69).contains(&reward.credits));
    assert_eq!(player.money(), 100 + reward.credits);
    assert_eq!(reward.experience, 61);
    assert_eq!(player.experience(), 61);

    let (again, player_again) = play(2024);
    assert_eq!(reward, again);
    assert_eq!(player, player_again);
}

// =============================================================================
// Mixed Actions
// =============================================================================

#[test]
fn test_block_item_attack_sequence() {
    let mut player = Player::new();
    player.take_damage(30);
    player.add_item(COMMON_ITEMS[1].to_item());
    let mut threat = Threat::new("DoS Attack", 40, 30, 90, ThreatKind::Dos);

    // 30 / 2 - 8
    let block = resolve_turn(&mut player, &mut threat, CombatAction::Block).unwrap();
    assert_eq!(block.damage_taken, 7);
    assert_eq!(player.health(), 63);

    // Medium pack heals 50 but stops at max, then 30 - 8 retaliation.
    let item = resolve_turn(&mut player, &mut threat, CombatAction::UseItem { index: 0 }).unwrap();
    assert_eq!(item.item_effect, Some(ItemEffect::Restored(37)));
    assert_eq!(player.health(), 78);
    assert!(player.inventory().is_empty());

    let attack = resolve_turn(&mut player, &mut threat, CombatAction::Attack).unwrap();
    assert_eq!(attack.damage_taken, 22);
    assert_eq!(threat.health, 30);
    assert_eq!(player.health(), 56);
}

#[test]
fn test_rejected_actions_reprompt() {
    let mut player = Player::new();
    let mut threat = reference_threat();
    let mut driver = ScriptedDriver::new([
        CombatAction::UseAbility { index: 5 },
        CombatAction::Inspect,
    ]);

    let result = run_encounter(&mut player, &mut threat, &mut driver);

    assert_eq!(result.rejected_actions, 1);
    assert_eq!(
        driver.rejections,
        vec![GameError::InvalidSelection { index: 5, len: 2 }]
    );
    let inspection = driver.outcomes[0].inspection.as_ref().unwrap();
    assert_eq!(inspection.threat.name, "Phishing Email");
    assert_eq!(inspection.player.health, 100);
    assert_eq!(result.status, CombatStatus::PlayerVictory);
}

#[test]
fn test_overwhelming_threat_defeats_player() {
    let mut player = Player::new();
    let mut threat = Threat::new("Insider Threat", 500, 60, 100, ThreatKind::InsiderThreat);
    let result = run_encounter(&mut player, &mut threat, &mut ScriptedDriver::default());

    assert_eq!(result.status, CombatStatus::PlayerDefeated);
    assert_eq!(player.health(), 0);
    assert_eq!(result.turns, 2);
    assert!(!threat.is_defeated());
}

// =============================================================================
// Invariants
// =============================================================================

#[test]
fn test_health_stays_in_bounds_under_random_play() {
    let mut rng = ChaCha8Rng::seed_from_u64(314);

    for _ in 0..200 {
        let mut player = Player::new();
        for _ in 0..rng.gen_range(0..4) {
            player.add_item(COMMON_ITEMS[rng.gen_range(0..COMMON_ITEMS.len())].to_item());
        }
        let mut threat = generate_threat(rng.gen_range(1..6), &mut rng);

        for _ in 0..100 {
            let action = match rng.gen_range(0..5) {
                0 => CombatAction::Attack,
                1 => CombatAction::Block,
                2 => CombatAction::Inspect,
                3 => CombatAction::UseItem {
                    index: rng.gen_range(0..4),
                },
                _ => CombatAction::UseAbility {
                    index: rng.gen_range(0..3),
                },
            };
            let _ = resolve_turn(&mut player, &mut threat, action);

            assert!(player.health() <= player.max_health());
            assert!(threat.health <= threat.max_health);
            if player.is_defeated() || threat.is_defeated() {
                break;
            }
        }
    }
}
