//! Relics granted for defeating bosses.
//!
//! Relics are recorded on the player and described to them, but no formula
//! reads them back yet.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::character::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relic {
    DataEncryption,
    SystemBackup,
    NetworkShield,
    ProcessingCore,
    SecurityProtocol,
}

impl Relic {
    pub const ALL: [Relic; 5] = [
        Relic::DataEncryption,
        Relic::SystemBackup,
        Relic::NetworkShield,
        Relic::ProcessingCore,
        Relic::SecurityProtocol,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Relic::DataEncryption => "Data Encryption Relic",
            Relic::SystemBackup => "System Backup Relic",
            Relic::NetworkShield => "Network Shield Relic",
            Relic::ProcessingCore => "Processing Core Relic",
            Relic::SecurityProtocol => "Security Protocol Relic",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Relic::DataEncryption => "All attacks deal +10 damage",
            Relic::SystemBackup => "Restore 20 HP after each fight",
            Relic::NetworkShield => "Take 25% less damage",
            Relic::ProcessingCore => "+50% experience gain",
            Relic::SecurityProtocol => "Start fights with temporary shield",
        }
    }
}

/// Picks a relic uniformly and appends it to the player's collection.
pub fn award_relic(player: &mut Player, rng: &mut impl Rng) -> Relic {
    let relic = Relic::ALL[rng.gen_range(0..Relic::ALL.len())];
    player.add_relic(relic);
    tracing::info!(relic = relic.name(), "relic acquired");
    relic
}
