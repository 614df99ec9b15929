//! Main simulation runner.
//!
//! Every run is a real [`GameSession`] played by the [`AutoPilot`], so the
//! numbers reflect actual engine behavior rather than a parallel model.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::autopilot::{choose_best_upgrade, go_shopping, AutoPilot};
use super::config::SimConfig;
use super::report::SimReport;
use super::stats::RunStats;
use crate::core::GameSession;

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let run_stats = simulate_single_run(config, rng);

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - Level {}, Encounters {}, Wins {}, Bosses {}, {}",
                run_idx + 1,
                config.num_runs,
                run_stats.final_level,
                run_stats.encounters,
                run_stats.victories,
                run_stats.boss_victories,
                match &run_stats.killed_by {
                    Some(name) => format!("defeated by {}", name),
                    None => "survived".to_string(),
                }
            );
        }
        all_runs.push(run_stats);
    }

    SimReport::from_runs(all_runs)
}

/// Plays one session until the player falls or the encounter cap is hit.
fn simulate_single_run<R: Rng>(config: &SimConfig, rng: R) -> RunStats {
    let mut session = GameSession::with_rng(config.game.clone(), rng);
    let mut pilot = AutoPilot::new();
    let mut stats = RunStats::default();

    while session.encounter_count() < config.max_encounters_per_run {
        let summary = match session.play_encounter(&mut pilot) {
            Ok(summary) => summary,
            Err(err) => {
                tracing::warn!(%err, "simulated encounter aborted");
                break;
            }
        };
        stats.record_encounter(&summary);
        if stats.died {
            break;
        }

        if choose_best_upgrade(&mut session) {
            stats.upgrades_installed += 1;
        }
        if config.use_shop {
            for purchase in go_shopping(&mut session) {
                stats.record_purchase(&purchase);
            }
        }
    }

    let player = session.player();
    stats.final_level = player.level();
    stats.final_money = player.money();
    stats.final_weapon_power = player.weapon().effective_power();
    stats.turns = pilot.turns;
    stats.damage_dealt = pilot.damage_dealt;
    stats.damage_taken = pilot.damage_taken;
    stats.items_used = pilot.items_used;
    stats.abilities_used = pilot.abilities_used;
    stats
}
