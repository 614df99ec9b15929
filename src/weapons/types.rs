use serde::{Deserialize, Serialize};

use crate::core::constants::WEAPON_PRICE_PER_POWER;
use crate::error::{GameError, Result};

/// Defensive discipline a weapon belongs to. A tag only: damage math ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DefenseType {
    Firewall,
    Antivirus,
    Ids,
    Encryption,
    Backup,
    AccessControl,
    PatchManagement,
    Monitoring,
    Authentication,
    Training,
}

impl DefenseType {
    pub const ALL: [DefenseType; 10] = [
        DefenseType::Firewall,
        DefenseType::Antivirus,
        DefenseType::Ids,
        DefenseType::Encryption,
        DefenseType::Backup,
        DefenseType::AccessControl,
        DefenseType::PatchManagement,
        DefenseType::Monitoring,
        DefenseType::Authentication,
        DefenseType::Training,
    ];

    pub fn name(&self) -> &'static str {
        self.record().0
    }

    pub fn description(&self) -> &'static str {
        self.record().1
    }

    pub fn power_level(&self) -> u32 {
        self.record().2
    }

    fn record(&self) -> (&'static str, &'static str, u32) {
        match self {
            DefenseType::Firewall => ("Firewall", "Reduces incoming damage", 3),
            DefenseType::Antivirus => ("Antivirus", "Deals additional damage to threats", 5),
            DefenseType::Ids => (
                "Intrusion Detection",
                "Chance to prevent enemy special abilities",
                4,
            ),
            DefenseType::Encryption => ("Encryption", "Protects against data theft attacks", 5),
            DefenseType::Backup => ("Backup System", "Recovers some HP after battle", 4),
            DefenseType::AccessControl => {
                ("Access Control", "Reduces enemy critical hit chance", 3)
            }
            DefenseType::PatchManagement => (
                "Patch Management",
                "Increases defense against zero-day attacks",
                5,
            ),
            DefenseType::Monitoring => ("System Monitoring", "Reveals enemy weaknesses", 4),
            DefenseType::Authentication => ("Authentication", "Blocks certain enemy abilities", 4),
            DefenseType::Training => ("Security Training", "Increases experience gain", 3),
        }
    }
}

/// Permanent weapon modifier handed out after boss fights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponUpgrade {
    EncryptionCore,
    IsolationChamber,
    AdvancedDetection,
    QuarantineSystem,
    HeuristicAnalysis,
}

impl WeaponUpgrade {
    pub const ALL: [WeaponUpgrade; 5] = [
        WeaponUpgrade::EncryptionCore,
        WeaponUpgrade::IsolationChamber,
        WeaponUpgrade::AdvancedDetection,
        WeaponUpgrade::QuarantineSystem,
        WeaponUpgrade::HeuristicAnalysis,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            WeaponUpgrade::EncryptionCore => "Encryption Core",
            WeaponUpgrade::IsolationChamber => "Isolation Chamber",
            WeaponUpgrade::AdvancedDetection => "Advanced Detection",
            WeaponUpgrade::QuarantineSystem => "Quarantine System",
            WeaponUpgrade::HeuristicAnalysis => "Heuristic Analysis",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            WeaponUpgrade::EncryptionCore => "Adds encryption damage over time",
            WeaponUpgrade::IsolationChamber => "Isolates threats, reducing their damage",
            WeaponUpgrade::AdvancedDetection => "Higher chance to detect threat weaknesses",
            WeaponUpgrade::QuarantineSystem => "Can quarantine threats temporarily",
            WeaponUpgrade::HeuristicAnalysis => "Adapts to threat patterns",
        }
    }

    pub fn bonus_damage(&self) -> u32 {
        match self {
            WeaponUpgrade::EncryptionCore => 15,
            WeaponUpgrade::IsolationChamber => 12,
            WeaponUpgrade::AdvancedDetection => 18,
            WeaponUpgrade::QuarantineSystem => 14,
            WeaponUpgrade::HeuristicAnalysis => 16,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    pub base_power: u32,
    pub defense_type: DefenseType,
    /// Advisory only; no combat path consumes it.
    pub durability: u32,
    /// Minimum player level required to equip.
    pub tier: u32,
    upgrade: Option<WeaponUpgrade>,
    pub special_moves: Vec<String>,
}

impl Weapon {
    pub fn new(
        name: impl Into<String>,
        base_power: u32,
        defense_type: DefenseType,
        durability: u32,
        tier: u32,
    ) -> Self {
        let name = name.into();
        let special_moves = super::catalog::special_moves(&name)
            .iter()
            .map(|m| m.to_string())
            .collect();
        Self {
            name,
            base_power,
            defense_type,
            durability,
            tier,
            upgrade: None,
            special_moves,
        }
    }

    /// Damage dealt by a plain attack.
    pub fn effective_power(&self) -> u32 {
        self.base_power + self.upgrade.map_or(0, |u| u.bonus_damage())
    }

    pub fn upgrade(&self) -> Option<WeaponUpgrade> {
        self.upgrade
    }

    /// Shop price, derived from base power rather than stored.
    pub fn price(&self) -> u32 {
        self.base_power * WEAPON_PRICE_PER_POWER
    }

    /// Installs `upgrade`. A second upgrade is rejected and the weapon is left as is.
    pub fn apply_upgrade(&mut self, upgrade: WeaponUpgrade) -> Result<()> {
        if let Some(existing) = self.upgrade {
            return Err(GameError::AlreadyUpgraded {
                weapon: self.name.clone(),
                upgrade: existing.name().to_string(),
            });
        }
        self.upgrade = Some(upgrade);
        Ok(())
    }

    /// Copy of this weapon with more power. An installed upgrade's bonus is
    /// folded into base power and the upgrade slot is freed.
    pub fn with_added_power(&self, amount: u32) -> Self {
        Self {
            base_power: self.effective_power() + amount,
            upgrade: None,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basic() -> Weapon {
        Weapon::new("Basic Antivirus", 10, DefenseType::Firewall, 100, 1)
    }

    #[test]
    fn test_effective_power_without_upgrade() {
        assert_eq!(basic().effective_power(), 10);
    }

    #[test]
    fn test_upgrade_adds_bonus_once() {
        let mut weapon = basic();
        weapon.apply_upgrade(WeaponUpgrade::AdvancedDetection).unwrap();
        assert_eq!(weapon.base_power, 10);
        assert_eq!(weapon.effective_power(), 28);
    }

    #[test]
    fn test_second_upgrade_rejected() {
        let mut weapon = basic();
        weapon.apply_upgrade(WeaponUpgrade::EncryptionCore).unwrap();
        let err = weapon
            .apply_upgrade(WeaponUpgrade::HeuristicAnalysis)
            .unwrap_err();
        assert!(matches!(err, GameError::AlreadyUpgraded { .. }));
        assert_eq!(weapon.upgrade(), Some(WeaponUpgrade::EncryptionCore));
        assert_eq!(weapon.effective_power(), 25);
    }

    #[test]
    fn test_price_is_fifteen_per_power() {
        assert_eq!(basic().price(), 150);
        let upgraded = {
            let mut w = basic();
            w.apply_upgrade(WeaponUpgrade::EncryptionCore).unwrap();
            w
        };
        assert_eq!(upgraded.price(), 150, "upgrade bonus does not affect price");
    }

    #[test]
    fn test_with_added_power_keeps_identity() {
        let mut weapon = basic();
        weapon.apply_upgrade(WeaponUpgrade::IsolationChamber).unwrap();
        let stronger = weapon.with_added_power(4);
        assert_eq!(stronger.name, "Basic Antivirus");
        assert_eq!(stronger.durability, 100);
        assert_eq!(stronger.tier, 1);
        assert_eq!(stronger.defense_type, DefenseType::Firewall);
        assert_eq!(stronger.effective_power(), 26);
    }

    #[test]
    fn test_with_added_power_frees_upgrade_slot() {
        let mut weapon = basic();
        weapon.apply_upgrade(WeaponUpgrade::IsolationChamber).unwrap();
        let mut stronger = weapon.with_added_power(4);
        assert_eq!(stronger.base_power, 26);
        assert!(stronger.upgrade().is_none());

        stronger.apply_upgrade(WeaponUpgrade::EncryptionCore).unwrap();
        assert_eq!(stronger.effective_power(), 26 + WeaponUpgrade::EncryptionCore.bonus_damage());
    }

    #[test]
    fn test_special_moves_populated_from_name() {
        assert_eq!(basic().special_moves.len(), 2);
        let unknown = Weapon::new("Homebrew Script", 5, DefenseType::Training, 10, 1);
        assert!(unknown.special_moves.is_empty());
    }

    #[test]
    fn test_catalog_tables_complete() {
        assert_eq!(DefenseType::ALL.len(), 10);
        assert_eq!(DefenseType::Ids.name(), "Intrusion Detection");
        assert_eq!(DefenseType::Antivirus.power_level(), 5);
        assert_eq!(WeaponUpgrade::ALL.len(), 5);
        assert_eq!(WeaponUpgrade::QuarantineSystem.bonus_damage(), 14);
    }
}
