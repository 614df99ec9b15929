use rand::Rng;

use super::types::{Threat, ThreatKind};
use crate::core::constants::*;

fn scale(value: f64, factor: f64) -> u32 {
    (value * factor) as u32
}

pub fn threat_experience(player_level: u32, kind: ThreatKind) -> u32 {
    THREAT_XP_BASE + THREAT_XP_PER_LEVEL * player_level + THREAT_XP_PER_BASE_DAMAGE * kind.profile().base_damage
}

pub fn boss_experience(player_level: u32, kind: ThreatKind) -> u32 {
    BOSS_XP_PER_BASE_DAMAGE * kind.profile().base_damage + BOSS_XP_PER_LEVEL * player_level
}

/// Builds a normal threat of `kind` scaled by `1 + 0.1 * level`.
pub fn build_threat(kind: ThreatKind, player_level: u32) -> Threat {
    let profile = kind.profile();
    let factor = 1.0 + THREAT_SCALING_PER_LEVEL * player_level as f64;
    Threat::new(
        profile.name,
        scale(profile.base_health as f64, factor),
        scale(profile.base_damage as f64, factor),
        threat_experience(player_level, kind),
        kind,
    )
}

/// Builds a boss of `kind`: health x2 x(1 + 0.2 * level), damage x1.5 x(1 + 0.15 * level).
pub fn build_boss(kind: ThreatKind, player_level: u32) -> Threat {
    let profile = kind.profile();
    let level = player_level as f64;
    let health = scale(
        (profile.base_health * BOSS_HEALTH_MULTIPLIER) as f64,
        1.0 + BOSS_HEALTH_SCALING_PER_LEVEL * level,
    );
    let damage = scale(
        profile.base_damage as f64 * BOSS_DAMAGE_MULTIPLIER,
        1.0 + BOSS_DAMAGE_SCALING_PER_LEVEL * level,
    );
    let mut boss = Threat::new(
        format!("{}{}", BOSS_NAME_PREFIX, profile.name),
        health,
        damage,
        boss_experience(player_level, kind),
        kind,
    );
    boss.boss = true;
    boss
}

pub fn generate_threat(player_level: u32, rng: &mut impl Rng) -> Threat {
    let kind = ThreatKind::ALL[rng.gen_range(0..ThreatKind::ALL.len())];
    let threat = build_threat(kind, player_level);
    tracing::debug!(level = player_level, threat = %threat.name, health = threat.health, damage = threat.damage, "generated threat");
    threat
}

pub fn generate_boss_threat(player_level: u32, rng: &mut impl Rng) -> Threat {
    let kind = ThreatKind::BOSSES[rng.gen_range(0..ThreatKind::BOSSES.len())];
    let boss = build_boss(kind, player_level);
    tracing::debug!(level = player_level, threat = %boss.name, health = boss.health, damage = boss.damage, "generated boss");
    boss
}

pub fn generate_encounter(player_level: u32, is_boss: bool, rng: &mut impl Rng) -> Threat {
    if is_boss {
        generate_boss_threat(player_level, rng)
    } else {
        generate_threat(player_level, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_normal_scaling_level_one() {
        let threat = build_threat(ThreatKind::Phishing, 1);
        assert_eq!(threat.name, "Phishing Email");
        assert_eq!(threat.health, 66);
        assert_eq!(threat.damage, 13);
        assert_eq!(threat.experience_value, 20 + 5 + 36);
        assert!(!threat.boss);
    }

    #[test]
    fn test_normal_scaling_level_five() {
        let threat = build_threat(ThreatKind::Dos, 5);
        assert_eq!(threat.health, 150);
        assert_eq!(threat.damage, 22);
        assert_eq!(threat.experience_value, 20 + 25 + 45);
    }

    #[test]
    fn test_boss_scaling_level_one() {
        let boss = build_boss(ThreatKind::ZeroDay, 1);
        assert_eq!(boss.name, "BOSS: Zero Day Exploit");
        assert_eq!(boss.health, 240);
        // 12 * 1.5 * 1.15 = 20.7
        assert_eq!(boss.damage, 20);
        assert_eq!(boss.experience_value, 140);
        assert!(boss.boss);
    }

    #[test]
    fn test_boss_scaling_level_five() {
        let boss = build_boss(ThreatKind::Rootkit, 5);
        // 160 * 2.0
        assert_eq!(boss.health, 320);
        // 22.5 * 1.75 = 39.375
        assert_eq!(boss.damage, 39);
        assert_eq!(boss.experience_value, 150 + 100);
    }

    #[test]
    fn test_generated_bosses_come_from_boss_subset() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        for _ in 0..100 {
            let boss = generate_encounter(3, true, &mut rng);
            assert!(ThreatKind::BOSSES.contains(&boss.kind));
            assert!(boss.name.starts_with(BOSS_NAME_PREFIX));
        }
    }

    #[test]
    fn test_generated_threats_cover_catalog() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            let threat = generate_encounter(2, false, &mut rng);
            assert!(!threat.boss);
            seen.insert(threat.kind);
        }
        assert_eq!(seen.len(), ThreatKind::ALL.len());
    }

    #[test]
    fn test_threats_grow_with_level() {
        for kind in ThreatKind::ALL {
            let low = build_threat(kind, 1);
            let high = build_threat(kind, 10);
            assert!(high.health > low.health);
            assert!(high.damage >= low.damage);
            assert!(high.experience_value > low.experience_value);
        }
    }
}
