//! Scripted player used by the simulator.

use rand::Rng;

use crate::character::{AbilityEffect, Player};
use crate::combat::{CombatAction, TurnDriver, TurnOutcome};
use crate::core::GameSession;
use crate::economy::Purchase;
use crate::items::ItemCategory;
use crate::threats::Threat;

/// Heal or guard once health drops below this share of max.
const LOW_HEALTH_PERCENT: u32 = 35;

/// Health items the autopilot tries to keep on hand.
const HEALTH_ITEM_RESERVE: usize = 3;

/// Plays turns with a fixed priority: heal or guard when low, use a ready
/// strike ability, otherwise attack.
#[derive(Debug, Default)]
pub struct AutoPilot {
    pub turns: u64,
    pub items_used: u64,
    pub abilities_used: u64,
    pub damage_dealt: u64,
    pub damage_taken: u64,
}

impl AutoPilot {
    pub fn new() -> Self {
        Self::default()
    }
}

fn ready_ability_index(player: &Player, wanted: impl Fn(AbilityEffect) -> bool) -> Option<usize> {
    player
        .available_abilities()
        .iter()
        .position(|ability| wanted(ability.kind.effect()))
}

impl TurnDriver for AutoPilot {
    fn choose_action(&mut self, player: &Player, _threat: &Threat) -> CombatAction {
        let low = player.health() * 100 < player.max_health() * LOW_HEALTH_PERCENT;
        if low {
            let heal = player
                .inventory()
                .iter()
                .position(|item| item.category == ItemCategory::Health && !item.is_spent());
            if let Some(index) = heal {
                return CombatAction::UseItem { index };
            }
            if let Some(index) = ready_ability_index(player, |effect| effect != AbilityEffect::Strike) {
                return CombatAction::UseAbility { index };
            }
        }

        match ready_ability_index(player, |effect| effect == AbilityEffect::Strike) {
            Some(index) => CombatAction::UseAbility { index },
            None => CombatAction::Attack,
        }
    }

    fn on_turn(&mut self, outcome: &TurnOutcome) {
        self.turns += 1;
        self.damage_dealt += outcome.damage_dealt as u64;
        self.damage_taken += outcome.damage_taken as u64;
        if outcome.item_effect.is_some() {
            self.items_used += 1;
        }
        if outcome.ability_used.is_some() {
            self.abilities_used += 1;
        }
    }
}

/// Picks the strongest boss upgrade on offer.
pub fn choose_best_upgrade<R: Rng>(session: &mut GameSession<R>) -> bool {
    let best = session
        .upgrade_choices()
        .iter()
        .enumerate()
        .max_by_key(|(_, upgrade)| upgrade.bonus_damage())
        .map(|(index, _)| index);
    match best {
        Some(index) => session.choose_upgrade(index).is_ok(),
        None => false,
    }
}

/// Spends credits at an open shop: the strongest affordable weapon upgrade
/// first, then health items up to the reserve. Returns what was bought.
pub fn go_shopping<R: Rng>(session: &mut GameSession<R>) -> Vec<Purchase> {
    let mut bought = Vec::new();

    let weapon_index = match session.shop() {
        Some(stock) => {
            let player = session.player();
            let current = player.weapon().effective_power();
            stock
                .weapons
                .iter()
                .enumerate()
                .filter(|(_, weapon)| {
                    weapon.tier <= player.level()
                        && weapon.price() <= player.money()
                        && weapon.effective_power() > current
                })
                .max_by_key(|(_, weapon)| weapon.effective_power())
                .map(|(i, _)| stock.items.len() + i)
        }
        None => return bought,
    };
    if let Some(index) = weapon_index {
        if let Ok(purchase) = session.purchase(index) {
            bought.push(purchase);
        }
    }

    loop {
        let held = session
            .player()
            .inventory()
            .iter()
            .filter(|item| item.category == ItemCategory::Health)
            .count();
        if held >= HEALTH_ITEM_RESERVE {
            break;
        }
        let money = session.player().money();
        let cheapest = session.shop().and_then(|stock| {
            stock
                .items
                .iter()
                .enumerate()
                .filter(|(_, item)| item.category == ItemCategory::Health && item.price <= money)
                .min_by_key(|(_, item)| item.price)
                .map(|(i, _)| i)
        });
        match cheapest.map(|index| session.purchase(index)) {
            Some(Ok(purchase)) => bought.push(purchase),
            _ => break,
        }
    }

    bought
}
