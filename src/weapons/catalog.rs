//! Fixed weapon tables: the starting weapon, the merchant's weapon rack and
//! flavor moves keyed by weapon name.

use super::types::{DefenseType, Weapon};

pub fn starting_weapon() -> Weapon {
    Weapon::new("Basic Antivirus", 10, DefenseType::Firewall, 100, 1)
}

/// Weapons the merchant always carries. Level gating happens at purchase time.
pub fn shop_weapons() -> Vec<Weapon> {
    vec![
        Weapon::new("Advanced Firewall", 18, DefenseType::Firewall, 150, 2),
        Weapon::new("Premium Antivirus", 22, DefenseType::Antivirus, 120, 2),
        Weapon::new("Enterprise Firewall", 30, DefenseType::Firewall, 200, 4),
    ]
}

/// Non-mechanical move descriptions shown when a weapon is acquired.
pub fn special_moves(weapon_name: &str) -> &'static [&'static str] {
    match weapon_name {
        "Basic Antivirus" => &[
            "Virus Scan - Deals extra damage to malware",
            "Quick Patch - Heals 10 HP",
        ],
        "Advanced Firewall" => &[
            "Barrier Shield - Blocks next attack completely",
            "Traffic Filter - Reduces enemy damage for 3 turns",
        ],
        "Premium Antivirus" => &[
            "Deep Scan - Reveals enemy weaknesses",
            "Real-time Protection - Automatic counter-attacks",
        ],
        "Network Scanner" => &[
            "Port Scan - Finds enemy vulnerabilities",
            "Packet Analysis - Predicts enemy attacks",
        ],
        "Intrusion Detection" => &[
            "Honeypot - Traps enemy for one turn",
            "Alert System - Warns of incoming attacks",
        ],
        "Enterprise Firewall" => &[
            "Deep Packet Inspection - Analyzes and counters attacks",
            "Load Balancer - Distributes damage across multiple systems",
        ],
        "AI Threat Hunter" => &[
            "Behavioral Analysis - Predicts enemy patterns",
            "Adaptive Response - Evolves defenses in real-time",
        ],
        _ => &[],
    }
}
