//! Merchant stock and purchases.
//!
//! Stock is generated per visit. Buying clones the listed definition, so the
//! shop's own lists never shrink.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::character::Player;
use crate::error::{GameError, Result};
use crate::items::{generate_shop_items, Item};
use crate::weapons::{shop_weapons, Weapon};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopStock {
    pub items: Vec<Item>,
    pub weapons: Vec<Weapon>,
}

/// One entry of the flat list shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShopSelection {
    Item(usize),
    Weapon(usize),
}

/// What a successful purchase handed over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Purchase {
    Item(Item),
    /// The new weapon and its price.
    Weapon(Weapon, u32),
}

pub fn generate_stock(player_level: u32, rng: &mut impl Rng) -> ShopStock {
    ShopStock {
        items: generate_shop_items(player_level, rng),
        weapons: shop_weapons(),
    }
}

impl ShopStock {
    pub fn len(&self) -> usize {
        self.items.len() + self.weapons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maps a flat index (items first, then weapons) onto a selection.
    pub fn selection(&self, index: usize) -> Result<ShopSelection> {
        if index < self.items.len() {
            Ok(ShopSelection::Item(index))
        } else if index < self.len() {
            Ok(ShopSelection::Weapon(index - self.items.len()))
        } else {
            Err(GameError::invalid_selection(index, self.len()))
        }
    }
}

/// True if the player may buy this weapon at their level.
pub fn weapon_requirement_met(player: &Player, weapon: &Weapon) -> bool {
    player.level() >= weapon.tier
}

pub fn purchase_item(player: &mut Player, item: &Item) -> Result<()> {
    player.spend_money(item.price)?;
    player.add_item(item.clone());
    tracing::info!(item = %item.name, price = item.price, "item purchased");
    Ok(())
}

/// Level is checked before funds, so an underleveled player always sees
/// [`GameError::LevelTooLow`].
pub fn purchase_weapon(player: &mut Player, weapon: &Weapon) -> Result<u32> {
    if !weapon_requirement_met(player, weapon) {
        return Err(GameError::LevelTooLow {
            required: weapon.tier,
            current: player.level(),
        });
    }
    let price = weapon.price();
    player.spend_money(price)?;
    player.equip_weapon(weapon.clone());
    tracing::info!(weapon = %weapon.name, price, "weapon purchased");
    Ok(price)
}

pub fn purchase(player: &mut Player, stock: &ShopStock, selection: ShopSelection) -> Result<Purchase> {
    match selection {
        ShopSelection::Item(index) => {
            let item = stock
                .items
                .get(index)
                .ok_or_else(|| GameError::invalid_selection(index, stock.items.len()))?;
            purchase_item(player, item)?;
            Ok(Purchase::Item(item.clone()))
        }
        ShopSelection::Weapon(index) => {
            let weapon = stock
                .weapons
                .get(index)
                .ok_or_else(|| GameError::invalid_selection(index, stock.weapons.len()))?;
            let price = purchase_weapon(player, weapon)?;
            Ok(Purchase::Weapon(weapon.clone(), price))
        }
    }
}
