//! Item system: types, catalogs and procedural draws.

pub mod catalog;
pub mod generation;
pub mod types;

pub use catalog::*;
pub use generation::*;
pub use types::*;
