//! Post-encounter payouts: credits, loot, experience, relics and upgrades.
//!
//! Experience is credited here but never turned into levels; the caller
//! polls [`crate::character::poll_level_ups`] afterwards.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::character::{add_experience, Player};
use crate::core::constants::*;
use crate::error::{GameError, Result};
use crate::items::{generate_random_item, Item};
use crate::relics::{award_relic, Relic};
use crate::threats::Threat;
use crate::weapons::WeaponUpgrade;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VictoryReward {
    pub credits: u32,
    pub item: Option<Item>,
    pub experience: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BossReward {
    pub credits: u32,
    pub experience: u32,
    pub relic: Relic,
    /// Candidates for [`choose_upgrade`]. Duplicates are allowed.
    pub upgrade_choices: [WeaponUpgrade; BOSS_UPGRADE_CHOICES],
}

pub fn grant_victory_reward(player: &mut Player, threat: &Threat, rng: &mut impl Rng) -> VictoryReward {
    let credits = rng.gen_range(VICTORY_CREDITS_MIN..=VICTORY_CREDITS_MAX);
    player.add_money(credits);

    let item = if rng.gen_range(0..100) < VICTORY_ITEM_DROP_PERCENT {
        let item = generate_random_item(player.level(), rng);
        player.add_item(item.clone());
        Some(item)
    } else {
        None
    };

    add_experience(player, threat.experience_value);
    tracing::debug!(credits, dropped = item.is_some(), "victory reward");

    VictoryReward {
        credits,
        item,
        experience: threat.experience_value,
    }
}

/// Draws upgrade candidates uniformly, with replacement.
pub fn roll_upgrade_choices(rng: &mut impl Rng) -> [WeaponUpgrade; BOSS_UPGRADE_CHOICES] {
    std::array::from_fn(|_| WeaponUpgrade::ALL[rng.gen_range(0..WeaponUpgrade::ALL.len())])
}

pub fn grant_boss_reward(player: &mut Player, boss: &Threat, rng: &mut impl Rng) -> BossReward {
    let credits = rng.gen_range(BOSS_CREDITS_MIN..=BOSS_CREDITS_MAX);
    player.add_money(credits);
    let relic = award_relic(player, rng);
    let upgrade_choices = roll_upgrade_choices(rng);
    add_experience(player, boss.experience_value);

    tracing::info!(
        boss = %boss.name,
        credits,
        relic = relic.name(),
        "boss defeated"
    );

    BossReward {
        credits,
        experience: boss.experience_value,
        relic,
        upgrade_choices,
    }
}

/// Installs the chosen candidate on the current weapon.
pub fn choose_upgrade(player: &mut Player, choices: &[WeaponUpgrade], index: usize) -> Result<WeaponUpgrade> {
    let upgrade = *choices
        .get(index)
        .ok_or_else(|| GameError::invalid_selection(index, choices.len()))?;
    player.upgrade_weapon(upgrade)?;
    tracing::info!(upgrade = upgrade.name(), weapon = %player.weapon().name, "weapon upgraded");
    Ok(upgrade)
}

/// Passive recovery after any encounter the player survived. Returns the
/// health actually restored.
pub fn post_combat_heal(player: &mut Player, rng: &mut impl Rng) -> u32 {
    let amount = rng.gen_range(POST_COMBAT_HEAL_MIN..=POST_COMBAT_HEAL_MAX);
    player.heal(amount)
}
