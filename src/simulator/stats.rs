//! Per-run statistics.

use serde::Serialize;

use crate::combat::CombatStatus;
use crate::core::EncounterSummary;
use crate::economy::Purchase;

/// Outcome of one simulated playthrough.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunStats {
    pub encounters: u32,
    pub victories: u32,
    pub boss_victories: u32,
    pub died: bool,
    /// Encounter number of the defeat, if any
    pub death_encounter: Option<u32>,
    pub killed_by: Option<String>,

    pub final_level: u32,
    pub final_money: u32,
    pub final_weapon_power: u32,
    pub relics: u32,
    pub upgrades_installed: u32,

    pub turns: u64,
    pub damage_dealt: u64,
    pub damage_taken: u64,
    pub items_used: u64,
    pub abilities_used: u64,

    pub credits_earned: u64,
    pub credits_spent: u64,
    pub item_drops: u32,
    pub shop_visits: u32,
    pub weapons_bought: u32,
    pub items_bought: u32,
    pub total_healed: u64,

    /// `level_up_encounters[n]` is the encounter on which level `n` was reached
    /// (0 when never reached; index 0 and 1 unused)
    pub level_up_encounters: Vec<u32>,
}

impl RunStats {
    pub fn record_encounter(&mut self, summary: &EncounterSummary) {
        self.encounters = summary.encounter;
        if summary.status == CombatStatus::PlayerDefeated {
            self.died = true;
            self.death_encounter = Some(summary.encounter);
            self.killed_by = Some(summary.threat_name.clone());
            return;
        }

        self.victories += 1;
        if let Some(reward) = &summary.victory_reward {
            self.credits_earned += reward.credits as u64;
            if reward.item.is_some() {
                self.item_drops += 1;
            }
        }
        if let Some(reward) = &summary.boss_reward {
            self.boss_victories += 1;
            self.relics += 1;
            self.credits_earned += reward.credits as u64;
        }
        for event in &summary.level_ups {
            let level = event.new_level as usize;
            if self.level_up_encounters.len() <= level {
                self.level_up_encounters.resize(level + 1, 0);
            }
            self.level_up_encounters[level] = summary.encounter;
        }
        self.total_healed += summary.healed as u64;
        if summary.shop_visit {
            self.shop_visits += 1;
        }
    }

    pub fn record_purchase(&mut self, purchase: &Purchase) {
        match purchase {
            Purchase::Item(item) => {
                self.items_bought += 1;
                self.credits_spent += item.price as u64;
            }
            Purchase::Weapon(_, price) => {
                self.weapons_bought += 1;
                self.credits_spent += *price as u64;
            }
        }
    }
}
