// Starting player
pub const STARTING_HEALTH: u32 = 100;
pub const STARTING_LEVEL: u32 = 1;
pub const STARTING_EXPERIENCE_TO_NEXT_LEVEL: u32 = 100;
pub const STARTING_BASE_DEFENSE: u32 = 8;
pub const STARTING_MONEY: u32 = 100;

// Leveling
// Threshold growth is x1.2, kept as an integer ratio so 100 -> 120 -> 144 is exact.
pub const XP_THRESHOLD_GROWTH_NUM: u32 = 6;
pub const XP_THRESHOLD_GROWTH_DEN: u32 = 5;
pub const LEVEL_UP_DAMAGE_BASE: u32 = 3;
pub const LEVEL_UP_DAMAGE_LEVEL_DIVISOR: u32 = 3;
pub const LEVEL_UP_HEALTH_BASE: u32 = 20;
pub const LEVEL_UP_HEALTH_PER_LEVEL: u32 = 2;
pub const LEVEL_UP_DEFENSE: u32 = 2;

// Normal threat scaling: stat * (1 + 0.1 * level)
pub const THREAT_SCALING_PER_LEVEL: f64 = 0.1;
pub const THREAT_XP_BASE: u32 = 20;
pub const THREAT_XP_PER_LEVEL: u32 = 5;
pub const THREAT_XP_PER_BASE_DAMAGE: u32 = 3;

// Boss scaling: health * 2 * (1 + 0.2 * level), damage * 1.5 * (1 + 0.15 * level)
pub const BOSS_HEALTH_MULTIPLIER: u32 = 2;
pub const BOSS_HEALTH_SCALING_PER_LEVEL: f64 = 0.2;
pub const BOSS_DAMAGE_MULTIPLIER: f64 = 1.5;
pub const BOSS_DAMAGE_SCALING_PER_LEVEL: f64 = 0.15;
pub const BOSS_XP_PER_BASE_DAMAGE: u32 = 10;
pub const BOSS_XP_PER_LEVEL: u32 = 20;
pub const BOSS_NAME_PREFIX: &str = "BOSS: ";

// Loot
pub const RARE_ITEM_CHANCE_PER_LEVEL: f64 = 0.1;
pub const SHOP_EXTRA_ITEMS_MIN: usize = 2;
pub const SHOP_EXTRA_ITEMS_MAX: usize = 4;
pub const WEAPON_PRICE_PER_POWER: u32 = 15;

// Rewards (inclusive ranges)
pub const VICTORY_CREDITS_MIN: u32 = 10;
pub const VICTORY_CREDITS_MAX: u32 = 69;
pub const VICTORY_ITEM_DROP_PERCENT: u32 = 25;
pub const BOSS_CREDITS_MIN: u32 = 50;
pub const BOSS_CREDITS_MAX: u32 = 149;
pub const BOSS_UPGRADE_CHOICES: usize = 3;
pub const POST_COMBAT_HEAL_MIN: u32 = 5;
pub const POST_COMBAT_HEAL_MAX: u32 = 39;

// Session pacing defaults
pub const DEFAULT_BOSS_INTERVAL: u32 = 10;
pub const DEFAULT_SHOP_INTERVAL: u32 = 5;
pub const DEFAULT_RANDOM_SHOP_CHANCE_PERCENT: u32 = 20;
