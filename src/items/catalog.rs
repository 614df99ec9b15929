use super::types::{Item, ItemCategory};

/// Immutable item definition. Every draw clones a fresh [`Item`] from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub category: ItemCategory,
    pub power: u32,
    pub uses: u32,
    pub price: u32,
    pub consumable: bool,
}

impl ItemTemplate {
    pub fn to_item(&self) -> Item {
        Item {
            name: self.name.to_string(),
            description: self.description.to_string(),
            category: self.category,
            power: self.power,
            uses: self.uses,
            price: self.price,
            consumable: self.consumable,
        }
    }
}

pub const COMMON_ITEMS: [ItemTemplate; 4] = [
    ItemTemplate {
        name: "Small Health Pack",
        description: "Restores 20 HP",
        category: ItemCategory::Health,
        power: 20,
        uses: 1,
        price: 50,
        consumable: true,
    },
    ItemTemplate {
        name: "Medium Health Pack",
        description: "Restores 50 HP",
        category: ItemCategory::Health,
        power: 50,
        uses: 1,
        price: 100,
        consumable: true,
    },
    ItemTemplate {
        name: "Firewall Boost",
        description: "Temporarily increases defense",
        category: ItemCategory::Defense,
        power: 5,
        uses: 1,
        price: 75,
        consumable: true,
    },
    ItemTemplate {
        name: "Virus Scanner",
        description: "Increases attack power",
        category: ItemCategory::Attack,
        power: 10,
        uses: 1,
        price: 100,
        consumable: true,
    },
];

pub const RARE_ITEMS: [ItemTemplate; 3] = [
    ItemTemplate {
        name: "Large Health Pack",
        description: "Restores 100 HP",
        category: ItemCategory::Health,
        power: 100,
        uses: 1,
        price: 200,
        consumable: true,
    },
    ItemTemplate {
        name: "Advanced Firewall",
        description: "Greatly increases defense",
        category: ItemCategory::Defense,
        power: 15,
        uses: 1,
        price: 250,
        consumable: true,
    },
    ItemTemplate {
        name: "Premium Antivirus",
        description: "Greatly increases attack",
        category: ItemCategory::Attack,
        power: 25,
        uses: 1,
        price: 300,
        consumable: true,
    },
];

/// Always stocked by the merchant.
pub fn starter_item() -> Item {
    COMMON_ITEMS[0].to_item()
}
