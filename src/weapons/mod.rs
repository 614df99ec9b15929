//! Weapons, defense disciplines and the upgrade catalog.

pub mod catalog;
pub mod types;

pub use catalog::*;
pub use types::*;
