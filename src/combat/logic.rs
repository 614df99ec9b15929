//! Turn resolution.
//!
//! Combat is fully deterministic: no roll is made anywhere in this module.
//! Health on both sides bottoms out at zero, and zero means defeated.

use super::types::*;
use crate::character::{Ability, AbilityEffect, Player};
use crate::error::{GameError, Result};
use crate::threats::Threat;

/// Damage a threat deals on retaliation: `max(0, damage - defense)`.
pub fn retaliation_damage(threat_damage: u32, defense: u32) -> u32 {
    threat_damage.saturating_sub(defense)
}

/// Damage taken while blocking: `max(0, damage / 2 - defense)`, halved before defense.
pub fn block_damage(threat_damage: u32, defense: u32) -> u32 {
    (threat_damage / 2).saturating_sub(defense)
}

/// Victory is checked before defeat.
pub fn encounter_status(player: &Player, threat: &Threat) -> CombatStatus {
    if threat.is_defeated() {
        CombatStatus::PlayerVictory
    } else if player.is_defeated() {
        CombatStatus::PlayerDefeated
    } else {
        CombatStatus::InProgress
    }
}

fn retaliate(player: &mut Player, threat: &Threat) -> u32 {
    if threat.is_defeated() {
        return 0;
    }
    let damage = retaliation_damage(threat.damage, player.base_defense());
    player.take_damage(damage);
    damage
}

/// Resolves one action atomically, retaliation included.
///
/// A rejected action (bad item or ability index) returns an error and
/// changes nothing. Once either side is down the call is a no-op that just
/// reports the terminal flags.
pub fn resolve_turn(
    player: &mut Player,
    threat: &mut Threat,
    action: CombatAction,
) -> Result<TurnOutcome> {
    let mut outcome = TurnOutcome::new(action);

    if encounter_status(player, threat).is_over() {
        outcome.threat_defeated = threat.is_defeated();
        outcome.player_defeated = player.is_defeated();
        return Ok(outcome);
    }

    let mut used_slot = None;
    match action {
        CombatAction::Attack => {
            let power = player.weapon().effective_power();
            threat.take_damage(power);
            outcome.damage_dealt = power;
            outcome.damage_taken = retaliate(player, threat);
        }
        CombatAction::UseItem { index } => {
            outcome.item_effect = Some(player.use_item(index)?);
            outcome.damage_taken = retaliate(player, threat);
        }
        CombatAction::Block => {
            let damage = block_damage(threat.damage, player.base_defense());
            player.take_damage(damage);
            outcome.damage_taken = damage;
        }
        CombatAction::Inspect => {
            outcome.inspection = Some(Inspection {
                player: player.report(),
                threat: threat.report(),
            });
            return Ok(outcome);
        }
        CombatAction::UseAbility { index } => {
            let slot = player.available_ability_slot(index).ok_or_else(|| {
                GameError::invalid_selection(index, player.available_abilities().len())
            })?;
            let ability = match player.ability_mut(slot) {
                Some(ability) => ability,
                None => return Err(GameError::invalid_selection(index, 0)),
            };
            ability.trigger();
            let (kind, power) = (ability.kind, ability.power);
            used_slot = Some(slot);
            outcome.ability_used = Some(kind);

            match kind.effect() {
                AbilityEffect::Strike => {
                    let damage = player.weapon().effective_power() + power;
                    threat.take_damage(damage);
                    outcome.damage_dealt = damage;
                    outcome.damage_taken = retaliate(player, threat);
                }
                AbilityEffect::Guard => {
                    let damage = block_damage(threat.damage, player.base_defense() + power);
                    player.take_damage(damage);
                    outcome.damage_taken = damage;
                }
                AbilityEffect::Shield => {}
            }
        }
    }

    player.tick_cooldowns(used_slot);
    outcome.threat_defeated = threat.is_defeated();
    outcome.player_defeated = player.is_defeated();

    tracing::debug!(
        ?action,
        dealt = outcome.damage_dealt,
        taken = outcome.damage_taken,
        threat_health = threat.health,
        player_health = player.health(),
        "turn resolved"
    );
    Ok(outcome)
}

/// Abilities usable this turn, in [`CombatAction::UseAbility`] index order.
pub fn list_available_abilities(player: &Player) -> Vec<&Ability> {
    player.available_abilities()
}

/// Drives an encounter until one side is down.
pub fn run_encounter(
    player: &mut Player,
    threat: &mut Threat,
    driver: &mut impl TurnDriver,
) -> EncounterResult {
    driver.pause(Pacing::EncounterStart);

    let mut result = EncounterResult {
        status: CombatStatus::InProgress,
        turns: 0,
        damage_dealt: 0,
        damage_taken: 0,
        rejected_actions: 0,
    };

    loop {
        result.status = encounter_status(player, threat);
        if result.status.is_over() {
            break;
        }

        let action = driver.choose_action(player, threat);
        match resolve_turn(player, threat, action) {
            Ok(outcome) => {
                result.turns += 1;
                result.damage_dealt += outcome.damage_dealt;
                result.damage_taken += outcome.damage_taken;
                driver.on_turn(&outcome);
                driver.pause(Pacing::TurnResolved);
            }
            Err(err) => {
                tracing::debug!(?action, %err, "action rejected");
                result.rejected_actions += 1;
                driver.on_rejected(action, &err);
            }
        }
    }

    driver.pause(Pacing::EncounterEnd);
    tracing::debug!(threat = %threat.name, status = ?result.status, turns = result.turns, "encounter finished");
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{Ability, AbilityKind};
    use crate::items::{ItemEffect, COMMON_ITEMS};
    use crate::threats::ThreatKind;

    fn phishing(health: u32, damage: u32) -> Threat {
        Threat::new("Phishing Email", health, damage, 61, ThreatKind::Phishing)
    }

    #[test]
    fn test_retaliation_formula_floors_at_zero() {
        assert_eq!(retaliation_damage(12, 8), 4);
        assert_eq!(retaliation_damage(8, 8), 0);
        assert_eq!(retaliation_damage(3, 8), 0);
    }

    #[test]
    fn test_block_never_exceeds_attack_retaliation() {
        for damage in 0..60 {
            for defense in 0..20 {
                assert!(block_damage(damage, defense) <= retaliation_damage(damage, defense));
            }
        }
        assert_eq!(block_damage(25, 8), 4);
        assert_eq!(block_damage(13, 8), 0);
    }

    #[test]
    fn test_attack_then_retaliate() {
        let mut player = Player::new();
        let mut threat = phishing(60, 12);
        let outcome = resolve_turn(&mut player, &mut threat, CombatAction::Attack).unwrap();
        assert_eq!(outcome.damage_dealt, 10);
        assert_eq!(outcome.damage_taken, 4);
        assert_eq!(threat.health, 50);
        assert_eq!(player.health(), 96);
        assert_eq!(outcome.status(), CombatStatus::InProgress);
    }

    #[test]
    fn test_killing_blow_skips_retaliation() {
        let mut player = Player::new();
        let mut threat = phishing(10, 50);
        let outcome = resolve_turn(&mut player, &mut threat, CombatAction::Attack).unwrap();
        assert!(outcome.threat_defeated);
        assert_eq!(outcome.damage_taken, 0);
        assert_eq!(player.health(), 100);
        assert_eq!(outcome.status(), CombatStatus::PlayerVictory);
    }

    #[test]
    fn test_block_does_not_hurt_threat() {
        let mut player = Player::new();
        let mut threat = phishing(60, 30);
        let outcome = resolve_turn(&mut player, &mut threat, CombatAction::Block).unwrap();
        assert_eq!(outcome.damage_dealt, 0);
        assert_eq!(outcome.damage_taken, 7);
        assert_eq!(threat.health, 60);
        assert_eq!(player.health(), 93);
    }

    #[test]
    fn test_use_item_still_retaliated() {
        let mut player = Player::new();
        player.take_damage(50);
        player.add_item(COMMON_ITEMS[0].to_item());
        let mut threat = phishing(60, 12);
        let outcome =
            resolve_turn(&mut player, &mut threat, CombatAction::UseItem { index: 0 }).unwrap();
        assert_eq!(outcome.item_effect, Some(ItemEffect::Restored(20)));
        assert_eq!(outcome.damage_taken, 4);
        assert_eq!(player.health(), 66);
        assert!(player.inventory().is_empty());
    }

    #[test]
    fn test_use_item_empty_inventory_still_retaliated() {
        let mut player = Player::new();
        let mut threat = phishing(60, 12);
        let outcome =
            resolve_turn(&mut player, &mut threat, CombatAction::UseItem { index: 0 }).unwrap();
        assert_eq!(outcome.item_effect, Some(ItemEffect::Nothing));
        assert_eq!(player.health(), 96);
    }

    #[test]
    fn test_bad_item_index_rejected_without_mutation() {
        let mut player = Player::new();
        player.add_item(COMMON_ITEMS[0].to_item());
        let mut threat = phishing(60, 12);
        let (player_before, threat_before) = (player.clone(), threat.clone());
        let err =
            resolve_turn(&mut player, &mut threat, CombatAction::UseItem { index: 4 }).unwrap_err();
        assert_eq!(err, GameError::invalid_selection(4, 1));
        assert_eq!(player, player_before);
        assert_eq!(threat, threat_before);
    }

    #[test]
    fn test_inspect_mutates_nothing() {
        let mut player = Player::new();
        player.ability_mut(0).unwrap().trigger();
        let mut threat = phishing(60, 12);
        let (player_before, threat_before) = (player.clone(), threat.clone());
        let outcome = resolve_turn(&mut player, &mut threat, CombatAction::Inspect).unwrap();
        let inspection = outcome.inspection.unwrap();
        assert_eq!(inspection.threat.health, 60);
        assert_eq!(inspection.player.weapon_power, 10);
        assert_eq!(player, player_before);
        assert_eq!(threat, threat_before);
    }

    #[test]
    fn test_strike_ability_adds_power_and_cools_down() {
        let mut player = Player::new();
        let mut threat = phishing(60, 12);
        let outcome =
            resolve_turn(&mut player, &mut threat, CombatAction::UseAbility { index: 0 }).unwrap();
        assert_eq!(outcome.ability_used, Some(AbilityKind::Scan));
        assert_eq!(outcome.damage_dealt, 15);
        assert_eq!(outcome.damage_taken, 4);
        assert_eq!(threat.health, 45);
        assert_eq!(player.abilities()[0].current_cooldown(), 2);

        // Scan is cooling down, so index 0 is now Patch.
        let listed = list_available_abilities(&player);
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].kind, AbilityKind::Patch);
        assert!(listed[0].is_ready());

        resolve_turn(&mut player, &mut threat, CombatAction::Attack).unwrap();
        assert_eq!(player.abilities()[0].current_cooldown(), 1);
        resolve_turn(&mut player, &mut threat, CombatAction::Attack).unwrap();
        assert!(player.abilities()[0].is_ready());
    }

    #[test]
    fn test_guard_ability_adds_power_to_defense() {
        let mut player = Player::new();
        let mut threat = phishing(60, 30);
        let outcome =
            resolve_turn(&mut player, &mut threat, CombatAction::UseAbility { index: 1 }).unwrap();
        assert_eq!(outcome.ability_used, Some(AbilityKind::Patch));
        // 30 / 2 - (8 + 3)
        assert_eq!(outcome.damage_taken, 4);
        assert_eq!(threat.health, 60);
    }

    #[test]
    fn test_shield_ability_takes_nothing() {
        let mut player = Player::new();
        player.learn_ability(Ability::new(AbilityKind::Encryption, 0, 6, 1));
        let mut threat = phishing(60, 90);
        let outcome =
            resolve_turn(&mut player, &mut threat, CombatAction::UseAbility { index: 2 }).unwrap();
        assert_eq!(outcome.ability_used, Some(AbilityKind::Encryption));
        assert_eq!(outcome.damage_taken, 0);
        assert_eq!(player.health(), 100);
    }

    #[test]
    fn test_locked_ability_index_rejected() {
        let mut player = Player::new();
        player.learn_ability(Ability::new(AbilityKind::Antivirus, 15, 5, 3));
        let mut threat = phishing(60, 12);
        let err = resolve_turn(&mut player, &mut threat, CombatAction::UseAbility { index: 2 })
            .unwrap_err();
        assert_eq!(err, GameError::invalid_selection(2, 2));
    }

    #[test]
    fn test_attack_never_consults_abilities() {
        let mut player = Player::new();
        let mut threat = phishing(200, 0);
        let outcome = resolve_turn(&mut player, &mut threat, CombatAction::Attack).unwrap();
        assert_eq!(outcome.damage_dealt, player.weapon().effective_power());
        assert!(outcome.ability_used.is_none());
    }

    #[test]
    fn test_resolve_after_victory_is_noop() {
        let mut player = Player::new();
        let mut threat = phishing(5, 12);
        resolve_turn(&mut player, &mut threat, CombatAction::Attack).unwrap();
        let before = player.clone();
        let outcome = resolve_turn(&mut player, &mut threat, CombatAction::Attack).unwrap();
        assert!(outcome.threat_defeated);
        assert_eq!(outcome.damage_dealt, 0);
        assert_eq!(player, before);
    }

    #[test]
    fn test_player_defeat_detected() {
        let mut player = Player::new();
        let mut threat = phishing(1000, 200);
        let outcome = resolve_turn(&mut player, &mut threat, CombatAction::Attack).unwrap();
        assert!(outcome.player_defeated);
        assert_eq!(player.health(), 0);
        assert_eq!(outcome.status(), CombatStatus::PlayerDefeated);
    }

    #[test]
    fn test_run_encounter_reprompts_after_rejection() {
        let mut player = Player::new();
        let mut threat = phishing(20, 12);
        let mut driver = ScriptedDriver::new([CombatAction::UseAbility { index: 9 }]);
        let result = run_encounter(&mut player, &mut threat, &mut driver);
        assert_eq!(result.status, CombatStatus::PlayerVictory);
        assert_eq!(result.rejected_actions, 1);
        assert_eq!(result.turns, 2);
        assert_eq!(driver.rejections.len(), 1);
        assert_eq!(player.health(), 96);
    }
}
