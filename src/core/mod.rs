//! Balance constants, session configuration and the session facade.

pub mod config;
pub mod constants;
pub mod session;

pub use config::GameConfig;
pub use constants::*;
pub use session::{EncounterSummary, GameSession};
