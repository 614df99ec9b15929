//! Cyber Defense - turn-based combat and progression engine.
//!
//! The player defends a system against procedurally generated cyber threats,
//! levels up, collects loot and relics and spends credits at a merchant.
//! Presentation is left to the caller; [`core::GameSession`] is the entry
//! point and [`simulator`] drives it headlessly.

pub mod character;
pub mod combat;
pub mod core;
pub mod economy;
pub mod error;
pub mod items;
pub mod relics;
pub mod simulator;
pub mod threats;
pub mod weapons;

pub use crate::core::{EncounterSummary, GameConfig, GameSession};
pub use error::{ConfigError, GameError, Result};
