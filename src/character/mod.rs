//! The player aggregate, its abilities and leveling rules.

pub mod abilities;
pub mod player;
pub mod progression;

pub use abilities::*;
pub use player::*;
pub use progression::*;
