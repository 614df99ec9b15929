use serde::{Deserialize, Serialize};

use super::abilities::{starting_abilities, Ability};
use crate::core::constants::*;
use crate::error::{GameError, Result};
use crate::items::{Item, ItemEffect};
use crate::relics::Relic;
use crate::weapons::{starting_weapon, Weapon, WeaponUpgrade};

/// The long-lived protagonist. Fields are only reachable through methods so
/// that `health <= max_health` holds after every mutation; the progression
/// manager in this module tree adjusts the level fields directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub(super) health: u32,
    pub(super) max_health: u32,
    pub(super) level: u32,
    pub(super) experience: u32,
    pub(super) experience_to_next_level: u32,
    pub(super) base_defense: u32,
    pub(super) current_weapon: Weapon,
    pub(super) abilities: Vec<Ability>,
    inventory: Vec<Item>,
    money: u32,
    relics: Vec<Relic>,
}

/// Read-only status snapshot for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerReport {
    pub health: u32,
    pub max_health: u32,
    pub level: u32,
    pub experience: u32,
    pub experience_to_next_level: u32,
    pub money: u32,
    pub weapon_name: String,
    pub weapon_power: u32,
    pub base_defense: u32,
    pub relics: usize,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub fn new() -> Self {
        Self {
            health: STARTING_HEALTH,
            max_health: STARTING_HEALTH,
            level: STARTING_LEVEL,
            experience: 0,
            experience_to_next_level: STARTING_EXPERIENCE_TO_NEXT_LEVEL,
            base_defense: STARTING_BASE_DEFENSE,
            current_weapon: starting_weapon(),
            abilities: starting_abilities(),
            inventory: Vec::new(),
            money: STARTING_MONEY,
            relics: Vec::new(),
        }
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    pub fn experience_to_next_level(&self) -> u32 {
        self.experience_to_next_level
    }

    pub fn base_defense(&self) -> u32 {
        self.base_defense
    }

    pub fn weapon(&self) -> &Weapon {
        &self.current_weapon
    }

    pub fn abilities(&self) -> &[Ability] {
        &self.abilities
    }

    pub fn inventory(&self) -> &[Item] {
        &self.inventory
    }

    pub fn money(&self) -> u32 {
        self.money
    }

    pub fn relics(&self) -> &[Relic] {
        &self.relics
    }

    pub fn is_defeated(&self) -> bool {
        self.health == 0
    }

    pub fn report(&self) -> PlayerReport {
        PlayerReport {
            health: self.health,
            max_health: self.max_health,
            level: self.level,
            experience: self.experience,
            experience_to_next_level: self.experience_to_next_level,
            money: self.money,
            weapon_name: self.current_weapon.name.clone(),
            weapon_power: self.current_weapon.effective_power(),
            base_defense: self.base_defense,
            relics: self.relics.len(),
        }
    }

    /// Restores up to `amount` health, never past max. Returns the amount applied.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let healed = amount.min(self.max_health - self.health);
        self.health += healed;
        healed
    }

    /// Removes up to `amount` health, bottoming out at zero. Returns the amount applied.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let taken = amount.min(self.health);
        self.health -= taken;
        taken
    }

    pub fn add_money(&mut self, amount: u32) {
        self.money = self.money.saturating_add(amount);
    }

    /// Debits `amount` or fails without touching the balance.
    pub fn spend_money(&mut self, amount: u32) -> Result<()> {
        if self.money < amount {
            return Err(GameError::InsufficientFunds {
                price: amount,
                available: self.money,
            });
        }
        self.money -= amount;
        Ok(())
    }

    pub fn add_item(&mut self, item: Item) {
        self.inventory.push(item);
    }

    /// Uses the inventory item at `index`. An empty inventory is a no-op;
    /// an out-of-range index on a non-empty inventory is rejected.
    /// Consumables leave the inventory once used.
    pub fn use_item(&mut self, index: usize) -> Result<ItemEffect> {
        if self.inventory.is_empty() {
            return Ok(ItemEffect::Nothing);
        }
        if index >= self.inventory.len() {
            return Err(GameError::invalid_selection(index, self.inventory.len()));
        }

        let mut item = self.inventory.remove(index);
        let effect = item.use_on(self);
        if !item.consumable {
            self.inventory.insert(index, item);
        }
        Ok(effect)
    }

    /// Swaps in a new weapon. The old one is discarded.
    pub fn equip_weapon(&mut self, weapon: Weapon) {
        self.current_weapon = weapon;
    }

    pub fn upgrade_weapon(&mut self, upgrade: WeaponUpgrade) -> Result<()> {
        self.current_weapon.apply_upgrade(upgrade)
    }

    pub fn add_relic(&mut self, relic: Relic) {
        self.relics.push(relic);
    }

    /// Appends an ability unless one of the same kind is already known.
    pub fn learn_ability(&mut self, ability: Ability) -> bool {
        if self.abilities.iter().any(|a| a.kind == ability.kind) {
            return false;
        }
        self.abilities.push(ability);
        true
    }

    /// Abilities usable right now: unlocked for the current level and off cooldown.
    pub fn available_abilities(&self) -> Vec<&Ability> {
        self.abilities
            .iter()
            .filter(|a| a.is_unlocked(self.level) && a.is_ready())
            .collect()
    }

    /// Index into [`Player::abilities`] of the `n`th available ability.
    pub(crate) fn available_ability_slot(&self, n: usize) -> Option<usize> {
        self.abilities
            .iter()
            .enumerate()
            .filter(|(_, a)| a.is_unlocked(self.level) && a.is_ready())
            .map(|(i, _)| i)
            .nth(n)
    }

    pub(crate) fn ability_mut(&mut self, slot: usize) -> Option<&mut Ability> {
        self.abilities.get_mut(slot)
    }

    /// One turn passes for every ability except `skip` (the one just used).
    pub(crate) fn tick_cooldowns(&mut self, skip: Option<usize>) {
        for (i, ability) in self.abilities.iter_mut().enumerate() {
            if Some(i) != skip {
                ability.tick_cooldown();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::abilities::AbilityKind;
    use crate::items::COMMON_ITEMS;

    #[test]
    fn test_new_player_defaults() {
        let player = Player::new();
        assert_eq!(player.health(), 100);
        assert_eq!(player.max_health(), 100);
        assert_eq!(player.level(), 1);
        assert_eq!(player.experience(), 0);
        assert_eq!(player.experience_to_next_level(), 100);
        assert_eq!(player.base_defense(), 8);
        assert_eq!(player.money(), 100);
        assert_eq!(player.weapon().name, "Basic Antivirus");
        assert_eq!(player.abilities().len(), 2);
        assert!(player.inventory().is_empty());
        assert!(player.relics().is_empty());
    }

    #[test]
    fn test_health_clamps_both_ways() {
        let mut player = Player::new();
        assert_eq!(player.heal(50), 0);
        assert_eq!(player.health(), 100);
        assert_eq!(player.take_damage(130), 100);
        assert_eq!(player.health(), 0);
        assert!(player.is_defeated());
    }

    #[test]
    fn test_spend_money_rejects_overdraft() {
        let mut player = Player::new();
        let err = player.spend_money(101).unwrap_err();
        assert_eq!(
            err,
            GameError::InsufficientFunds {
                price: 101,
                available: 100
            }
        );
        assert_eq!(player.money(), 100);
        player.spend_money(100).unwrap();
        assert_eq!(player.money(), 0);
    }

    #[test]
    fn test_use_item_removes_consumable() {
        let mut player = Player::new();
        player.take_damage(30);
        player.add_item(COMMON_ITEMS[0].to_item());
        player.add_item(COMMON_ITEMS[3].to_item());

        let effect = player.use_item(0).unwrap();
        assert_eq!(effect, ItemEffect::Restored(20));
        assert_eq!(player.inventory().len(), 1);
        assert_eq!(player.inventory()[0].name, "Virus Scanner");
    }

    #[test]
    fn test_use_item_empty_inventory_is_noop() {
        let mut player = Player::new();
        assert_eq!(player.use_item(3).unwrap(), ItemEffect::Nothing);
    }

    #[test]
    fn test_use_item_out_of_range_rejected() {
        let mut player = Player::new();
        player.add_item(COMMON_ITEMS[0].to_item());
        let before = player.clone();
        assert_eq!(
            player.use_item(1).unwrap_err(),
            GameError::invalid_selection(1, 1)
        );
        assert_eq!(player, before);
    }

    #[test]
    fn test_learn_ability_unique_by_kind() {
        let mut player = Player::new();
        assert!(!player.learn_ability(Ability::new(AbilityKind::Scan, 99, 1, 1)));
        assert!(player.learn_ability(Ability::new(AbilityKind::Firewall, 0, 4, 2)));
        assert_eq!(player.abilities().len(), 3);
    }

    #[test]
    fn test_available_abilities_filters_gate_and_cooldown() {
        let mut player = Player::new();
        player.learn_ability(Ability::new(AbilityKind::Antivirus, 15, 5, 3));
        let names: Vec<&str> = player.available_abilities().iter().map(|a| a.name()).collect();
        assert_eq!(names, vec!["Scan", "Patch"]);

        let slot = player.available_ability_slot(0).unwrap();
        player.ability_mut(slot).unwrap().trigger();
        let names: Vec<&str> = player.available_abilities().iter().map(|a| a.name()).collect();
        assert_eq!(names, vec!["Patch"]);
        assert_eq!(player.available_ability_slot(0), Some(1));
        assert_eq!(player.available_ability_slot(1), None);
    }

    #[test]
    fn test_tick_cooldowns_skips_used_slot() {
        let mut player = Player::new();
        player.ability_mut(0).unwrap().trigger();
        player.tick_cooldowns(Some(0));
        assert_eq!(player.abilities()[0].current_cooldown(), 2);
        player.tick_cooldowns(None);
        assert_eq!(player.abilities()[0].current_cooldown(), 1);
    }
}
