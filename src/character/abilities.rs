//! Level-gated combat abilities and their cooldown state machine.
//!
//! An ability is Locked while the player's level is below `level_required`,
//! Available once unlocked with no cooldown pending, and OnCooldown for
//! `cooldown_turns` turn ticks after it is used.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilityKind {
    Scan,
    Patch,
    Firewall,
    Antivirus,
    Encryption,
    Backdoor,
    Ddos,
}

/// How an ability resolves when used as a combat action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AbilityEffect {
    /// Weapon hit plus the ability's power, then normal retaliation.
    Strike,
    /// A block with the ability's power added to defense.
    Guard,
    /// No damage dealt, no damage taken.
    Shield,
}

impl AbilityKind {
    pub fn name(&self) -> &'static str {
        match self {
            AbilityKind::Scan => "Scan",
            AbilityKind::Patch => "Patch",
            AbilityKind::Firewall => "Firewall",
            AbilityKind::Antivirus => "Antivirus",
            AbilityKind::Encryption => "Encryption",
            AbilityKind::Backdoor => "Backdoor",
            AbilityKind::Ddos => "DDoS",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AbilityKind::Scan => "Basic scanning attack",
            AbilityKind::Patch => "Defensive move that reduces incoming damage",
            AbilityKind::Firewall => "Increases defense temporarily",
            AbilityKind::Antivirus => "Strong attack with chance to remove enemy buffs",
            AbilityKind::Encryption => "Defensive move that prevents damage",
            AbilityKind::Backdoor => "Bypass enemy defenses",
            AbilityKind::Ddos => "Multiple small attacks",
        }
    }

    pub fn effect(&self) -> AbilityEffect {
        match self {
            AbilityKind::Scan | AbilityKind::Antivirus | AbilityKind::Backdoor | AbilityKind::Ddos => {
                AbilityEffect::Strike
            }
            AbilityKind::Patch | AbilityKind::Firewall => AbilityEffect::Guard,
            AbilityKind::Encryption => AbilityEffect::Shield,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    pub kind: AbilityKind,
    pub power: u32,
    pub cooldown_turns: u32,
    pub level_required: u32,
    current_cooldown: u32,
}

impl Ability {
    pub fn new(kind: AbilityKind, power: u32, cooldown_turns: u32, level_required: u32) -> Self {
        Self {
            kind,
            power,
            cooldown_turns,
            level_required,
            current_cooldown: 0,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn current_cooldown(&self) -> u32 {
        self.current_cooldown
    }

    pub fn is_ready(&self) -> bool {
        self.current_cooldown == 0
    }

    pub fn is_unlocked(&self, level: u32) -> bool {
        level >= self.level_required
    }

    /// Puts the ability on its full cooldown.
    pub fn trigger(&mut self) {
        self.current_cooldown = self.cooldown_turns;
    }

    pub fn tick_cooldown(&mut self) {
        self.current_cooldown = self.current_cooldown.saturating_sub(1);
    }
}

pub fn starting_abilities() -> Vec<Ability> {
    vec![
        Ability::new(AbilityKind::Scan, 5, 2, 1),
        Ability::new(AbilityKind::Patch, 3, 3, 1),
    ]
}

/// (level, kind, power, cooldown) granted on reaching exactly that level.
pub const ABILITY_UNLOCKS: [(u32, AbilityKind, u32, u32); 3] = [
    (2, AbilityKind::Firewall, 0, 4),
    (3, AbilityKind::Antivirus, 15, 5),
    (5, AbilityKind::Encryption, 0, 6),
];

pub fn ability_unlocked_at(level: u32) -> Option<Ability> {
    ABILITY_UNLOCKS
        .iter()
        .find(|(at, ..)| *at == level)
        .map(|&(at, kind, power, cooldown)| Ability::new(kind, power, cooldown, at))
}
