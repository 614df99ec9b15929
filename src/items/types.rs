use serde::{Deserialize, Serialize};

use crate::character::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemCategory {
    Health,
    Defense,
    Attack,
    Utility,
}

impl ItemCategory {
    pub fn name(&self) -> &'static str {
        match self {
            ItemCategory::Health => "Health",
            ItemCategory::Defense => "Defense",
            ItemCategory::Attack => "Attack",
            ItemCategory::Utility => "Utility",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ItemCategory::Health => "Restores health points",
            ItemCategory::Defense => "Temporarily increases defense",
            ItemCategory::Attack => "Temporarily increases attack power",
            ItemCategory::Utility => "Special effects",
        }
    }
}

/// What using an item did. Only `Restored` changes player state; the boost
/// variants are reported for display and carry no mechanical effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemEffect {
    /// Health actually restored after clamping to max health.
    Restored(u32),
    DefenseBoost(u32),
    AttackBoost(u32),
    Utility,
    /// No usable item: empty inventory or no uses left.
    Nothing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub description: String,
    pub category: ItemCategory,
    pub power: u32,
    pub uses: u32,
    pub price: u32,
    pub consumable: bool,
}

impl Item {
    pub fn is_spent(&self) -> bool {
        self.uses == 0
    }

    /// Applies the item to `player`. A spent item does nothing. Consumables
    /// lose one use; removing them from an inventory is the owner's job.
    pub fn use_on(&mut self, player: &mut Player) -> ItemEffect {
        if self.is_spent() {
            return ItemEffect::Nothing;
        }

        let effect = match self.category {
            ItemCategory::Health => ItemEffect::Restored(player.heal(self.power)),
            ItemCategory::Defense => ItemEffect::DefenseBoost(self.power),
            ItemCategory::Attack => ItemEffect::AttackBoost(self.power),
            ItemCategory::Utility => ItemEffect::Utility,
        };

        if self.consumable {
            self.uses -= 1;
        }
        effect
    }
}
