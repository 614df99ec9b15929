//! Simulation report generation.

use std::collections::BTreeMap;

use serde::Serialize;

use super::stats::RunStats;

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub runs_survived: u32,
    pub runs_died: u32,

    // Aggregated stats
    pub avg_final_level: f64,
    pub avg_encounters: f64,
    pub avg_victories: f64,
    pub avg_boss_victories: f64,
    pub avg_turns_per_encounter: f64,
    pub avg_damage_taken_per_turn: f64,

    // Economy
    pub avg_credits_earned: f64,
    pub avg_credits_spent: f64,
    pub avg_final_money: f64,
    pub avg_item_drops: f64,
    pub actual_drop_rate: f64,
    pub avg_weapons_bought: f64,
    pub avg_final_weapon_power: f64,
    pub avg_relics: f64,

    // Distribution data
    pub level_distribution: BTreeMap<u32, u32>,
    /// Encounter number of each defeat
    pub death_encounters: Vec<u32>,
    /// Threat name -> defeats caused
    pub killers: BTreeMap<String, u32>,
    /// `avg_encounters_to_level[n]`: mean encounter on which level `n` was
    /// reached, over the runs that reached it
    pub avg_encounters_to_level: Vec<f64>,

    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

fn mean(runs: &[RunStats], f: impl Fn(&RunStats) -> f64) -> f64 {
    if runs.is_empty() {
        return 0.0;
    }
    runs.iter().map(f).sum::<f64>() / runs.len() as f64
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let runs_died = runs.iter().filter(|r| r.died).count() as u32;

        let total_turns: u64 = runs.iter().map(|r| r.turns).sum();
        let total_encounters: u64 = runs.iter().map(|r| r.encounters as u64).sum();
        let total_taken: u64 = runs.iter().map(|r| r.damage_taken).sum();
        let total_victories: u64 = runs.iter().map(|r| r.victories as u64).sum();
        let total_boss_victories: u64 = runs.iter().map(|r| r.boss_victories as u64).sum();
        let total_drops: u64 = runs.iter().map(|r| r.item_drops as u64).sum();

        let mut level_distribution = BTreeMap::new();
        for run in &runs {
            *level_distribution.entry(run.final_level).or_insert(0) += 1;
        }

        let mut killers = BTreeMap::new();
        for name in runs.iter().filter_map(|r| r.killed_by.as_ref()) {
            *killers.entry(name.clone()).or_insert(0) += 1;
        }

        let death_encounters = runs.iter().filter_map(|r| r.death_encounter).collect();

        let max_level = runs.iter().map(|r| r.final_level as usize).max().unwrap_or(1);
        let mut avg_encounters_to_level = vec![0.0; max_level + 1];
        for (level, slot) in avg_encounters_to_level.iter_mut().enumerate().skip(2) {
            let reached: Vec<u32> = runs
                .iter()
                .filter_map(|r| r.level_up_encounters.get(level).copied())
                .filter(|&encounter| encounter > 0)
                .collect();
            if !reached.is_empty() {
                *slot = reached.iter().map(|&e| e as f64).sum::<f64>() / reached.len() as f64;
            }
        }

        Self {
            num_runs,
            runs_survived: num_runs - runs_died,
            runs_died,
            avg_final_level: mean(&runs, |r| r.final_level as f64),
            avg_encounters: mean(&runs, |r| r.encounters as f64),
            avg_victories: mean(&runs, |r| r.victories as f64),
            avg_boss_victories: mean(&runs, |r| r.boss_victories as f64),
            avg_turns_per_encounter: total_turns as f64 / total_encounters.max(1) as f64,
            avg_damage_taken_per_turn: total_taken as f64 / total_turns.max(1) as f64,
            avg_credits_earned: mean(&runs, |r| r.credits_earned as f64),
            avg_credits_spent: mean(&runs, |r| r.credits_spent as f64),
            avg_final_money: mean(&runs, |r| r.final_money as f64),
            avg_item_drops: mean(&runs, |r| r.item_drops as f64),
            actual_drop_rate: total_drops as f64
                / total_victories.saturating_sub(total_boss_victories).max(1) as f64,
            avg_weapons_bought: mean(&runs, |r| r.weapons_bought as f64),
            avg_final_weapon_power: mean(&runs, |r| r.final_weapon_power as f64),
            avg_relics: mean(&runs, |r| r.relics as f64),
            level_distribution,
            death_encounters,
            killers,
            avg_encounters_to_level,
            run_stats: runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} survived the cap, {} defeated\n\n",
            self.num_runs, self.runs_survived, self.runs_died
        ));

        report.push_str("── PROGRESSION ──────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Final Level:       {:.1}\n", self.avg_final_level));
        report.push_str(&format!("  Avg Encounters:        {:.1}\n", self.avg_encounters));
        report.push_str(&format!("  Avg Victories:         {:.1}\n", self.avg_victories));
        report.push_str(&format!("  Avg Boss Victories:    {:.2}\n", self.avg_boss_victories));
        report.push_str(&format!("  Turns per Encounter:   {:.1}\n", self.avg_turns_per_encounter));
        report.push_str(&format!("  Damage Taken per Turn: {:.1}\n\n", self.avg_damage_taken_per_turn));

        report.push_str("── ECONOMY ──────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Credits Earned:    {:.0}\n", self.avg_credits_earned));
        report.push_str(&format!("  Avg Credits Spent:     {:.0}\n", self.avg_credits_spent));
        report.push_str(&format!("  Avg Final Credits:     {:.0}\n", self.avg_final_money));
        report.push_str(&format!(
            "  Item Drop Rate:        {:.1}%\n",
            self.actual_drop_rate * 100.0
        ));
        report.push_str(&format!("  Avg Weapons Bought:    {:.2}\n", self.avg_weapons_bought));
        report.push_str(&format!("  Avg Final Weapon Power:{:>6.1}\n", self.avg_final_weapon_power));
        report.push_str(&format!("  Avg Relics:            {:.2}\n\n", self.avg_relics));

        report.push_str("── FINAL LEVELS ─────────────────────────────────────────────────\n");
        for (level, count) in &self.level_distribution {
            let pct = (*count as f64 / self.num_runs.max(1) as f64) * 100.0;
            let bar: String = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!("  Level {:2}: {:>5.1}% {}\n", level, pct, bar));
        }
        report.push('\n');

        report.push_str("── LEVEL PACING ─────────────────────────────────────────────────\n");
        for (level, avg) in self.avg_encounters_to_level.iter().enumerate().skip(2) {
            if *avg > 0.0 {
                report.push_str(&format!("  Level {:2} at encounter {:.1}\n", level, avg));
            }
        }
        report.push('\n');

        report.push_str("── DEATH ANALYSIS ───────────────────────────────────────────────\n");
        if self.death_encounters.is_empty() {
            report.push_str("  No defeats\n");
        } else {
            let mut sorted = self.death_encounters.clone();
            sorted.sort_unstable();
            report.push_str(&format!("  Earliest Defeat: encounter {}\n", sorted[0]));
            report.push_str(&format!(
                "  Median Defeat:   encounter {}\n",
                sorted[sorted.len() / 2]
            ));
            for (name, count) in &self.killers {
                report.push_str(&format!("  {:<28} {}\n", name, count));
            }
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
