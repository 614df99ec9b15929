use rand::Rng;

use super::catalog::{starter_item, ItemTemplate, COMMON_ITEMS, RARE_ITEMS};
use super::types::Item;
use crate::core::constants::{
    RARE_ITEM_CHANCE_PER_LEVEL, SHOP_EXTRA_ITEMS_MAX, SHOP_EXTRA_ITEMS_MIN,
};

/// Chance that a draw comes from the rare catalog: `0.1 * level`, clamped to [0, 1].
pub fn rare_item_chance(player_level: u32) -> f64 {
    (player_level as f64 * RARE_ITEM_CHANCE_PER_LEVEL).clamp(0.0, 1.0)
}

fn pick(catalog: &[ItemTemplate], rng: &mut impl Rng) -> Item {
    catalog[rng.gen_range(0..catalog.len())].to_item()
}

/// Draws one item for the given level: rarity roll first, then a uniform pick.
pub fn generate_random_item(player_level: u32, rng: &mut impl Rng) -> Item {
    let is_rare = rng.gen_bool(rare_item_chance(player_level));
    let item = if is_rare {
        pick(&RARE_ITEMS, rng)
    } else {
        pick(&COMMON_ITEMS, rng)
    };
    tracing::debug!(level = player_level, rare = is_rare, item = %item.name, "generated item");
    item
}

/// Merchant item list: the starter item followed by 2-4 random items.
pub fn generate_shop_items(player_level: u32, rng: &mut impl Rng) -> Vec<Item> {
    let extra = rng.gen_range(SHOP_EXTRA_ITEMS_MIN..=SHOP_EXTRA_ITEMS_MAX);
    let mut items = Vec::with_capacity(extra + 1);
    items.push(starter_item());
    for _ in 0..extra {
        items.push(generate_random_item(player_level, rng));
    }
    items
}
