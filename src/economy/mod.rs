//! Shop purchases and encounter rewards.

pub mod rewards;
pub mod shop;

pub use rewards::*;
pub use shop::*;
