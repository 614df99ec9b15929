//! Simulation configuration.

use crate::core::GameConfig;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulation runs to perform
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random). Run `i` uses `seed + i`.
    pub seed: Option<u64>,

    /// Encounters per run before the run is cut off
    pub max_encounters_per_run: u32,

    /// Session pacing handed to every run (its seed is ignored)
    pub game: GameConfig,

    /// Whether the autopilot shops when a merchant appears
    pub use_shop: bool,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            max_encounters_per_run: 200,
            game: GameConfig::default(),
            use_shop: true,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Small batch for a fast sanity check
    pub fn quick() -> Self {
        Self {
            num_runs: 100,
            max_encounters_per_run: 50,
            ..Default::default()
        }
    }

    /// Every encounter is a boss
    pub fn boss_rush(num_runs: u32) -> Self {
        Self {
            num_runs,
            max_encounters_per_run: 30,
            game: GameConfig {
                boss_interval: 1,
                ..GameConfig::default()
            },
            ..Default::default()
        }
    }
}
