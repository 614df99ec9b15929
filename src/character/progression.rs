//! Experience accrual and level-ups.
//!
//! Accrual never levels the player by itself. Callers poll
//! [`should_level_up`] and apply one level per threshold crossed, which is
//! what [`poll_level_ups`] does in a loop.

use serde::{Deserialize, Serialize};

use super::abilities::{ability_unlocked_at, AbilityKind};
use super::player::Player;
use crate::core::constants::*;

/// Everything that changed during a single level-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelUpEvent {
    pub new_level: u32,
    pub damage_increase: u32,
    pub health_increase: u32,
    pub defense_increase: u32,
    pub old_weapon_power: u32,
    pub new_weapon_power: u32,
    pub old_max_health: u32,
    pub new_max_health: u32,
    pub experience_to_next_level: u32,
    pub unlocked_ability: Option<AbilityKind>,
}

pub fn damage_increase_for(new_level: u32) -> u32 {
    LEVEL_UP_DAMAGE_BASE + new_level / LEVEL_UP_DAMAGE_LEVEL_DIVISOR
}

pub fn health_increase_for(new_level: u32) -> u32 {
    LEVEL_UP_HEALTH_BASE + LEVEL_UP_HEALTH_PER_LEVEL * new_level
}

/// `floor(threshold * 1.2)`
pub fn next_threshold(threshold: u32) -> u32 {
    threshold * XP_THRESHOLD_GROWTH_NUM / XP_THRESHOLD_GROWTH_DEN
}

pub fn add_experience(player: &mut Player, amount: u32) {
    player.experience = player.experience.saturating_add(amount);
    tracing::debug!(
        amount,
        experience = player.experience,
        threshold = player.experience_to_next_level,
        "experience gained"
    );
}

pub fn should_level_up(player: &Player) -> bool {
    player.experience >= player.experience_to_next_level
}

/// Applies exactly one level-up. Callers check [`should_level_up`] first.
pub fn apply_level_up(player: &mut Player) -> LevelUpEvent {
    player.experience = player
        .experience
        .saturating_sub(player.experience_to_next_level);
    player.experience_to_next_level = next_threshold(player.experience_to_next_level);
    player.level += 1;

    let level = player.level;
    let damage_increase = damage_increase_for(level);
    let health_increase = health_increase_for(level);

    let old_weapon_power = player.current_weapon.effective_power();
    player.current_weapon = player.current_weapon.with_added_power(damage_increase);

    let old_max_health = player.max_health;
    player.max_health += health_increase;
    player.health = player.max_health;
    player.base_defense += LEVEL_UP_DEFENSE;

    let unlocked_ability = ability_unlocked_at(level).and_then(|ability| {
        let kind = ability.kind;
        player.learn_ability(ability).then_some(kind)
    });

    tracing::info!(
        level,
        damage_increase,
        health_increase,
        next = player.experience_to_next_level,
        "level up"
    );

    LevelUpEvent {
        new_level: level,
        damage_increase,
        health_increase,
        defense_increase: LEVEL_UP_DEFENSE,
        old_weapon_power,
        new_weapon_power: player.current_weapon.effective_power(),
        old_max_health,
        new_max_health: player.max_health,
        experience_to_next_level: player.experience_to_next_level,
        unlocked_ability,
    }
}

/// Applies one level-up if the threshold is met.
pub fn maybe_level_up(player: &mut Player) -> Option<LevelUpEvent> {
    should_level_up(player).then(|| apply_level_up(player))
}

/// Applies every pending level-up in order.
pub fn poll_level_ups(player: &mut Player) -> Vec<LevelUpEvent> {
    let mut events = Vec::new();
    while let Some(event) = maybe_level_up(player) {
        events.push(event);
    }
    events
}
