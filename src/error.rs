//! Error types for engine operations.
//!
//! Every variant here is recoverable: the engine rejects the request, leaves
//! all state untouched, and the caller re-prompts. Player defeat is not an
//! error, it is a normal terminal state of an encounter.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A shop, inventory, ability or upgrade index outside the offered list.
    #[error("invalid selection {index} (choices: {len})")]
    InvalidSelection { index: usize, len: usize },

    #[error("not enough credits: costs {price}, have {available}")]
    InsufficientFunds { price: u32, available: u32 },

    #[error("requires level {required} (current level {current})")]
    LevelTooLow { required: u32, current: u32 },

    /// A weapon holds one upgrade until a level-up folds it into base power.
    #[error("{weapon} is already upgraded with {upgrade}")]
    AlreadyUpgraded { weapon: String, upgrade: String },

    #[error("no encounter in progress")]
    NoActiveEncounter,

    #[error("the current encounter has not finished")]
    EncounterInProgress,

    #[error("the player has been defeated")]
    GameOver,
}

impl GameError {
    pub fn invalid_selection(index: usize, len: usize) -> Self {
        GameError::InvalidSelection { index, len }
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, GameError>;

/// Errors raised while loading a [`crate::core::config::GameConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
