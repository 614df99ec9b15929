//! Headless balance simulator.
//!
//! Plays many seeded sessions with a scripted autopilot and aggregates:
//! - Levels reached and level-up pacing
//! - Credits earned, spent and dropped loot
//! - Where and to what runs are lost

mod autopilot;
mod config;
mod report;
mod runner;
mod stats;

pub use autopilot::{choose_best_upgrade, go_shopping, AutoPilot};
pub use config::SimConfig;
pub use report::SimReport;
pub use runner::run_simulation;
pub use stats::RunStats;
