//! # Spell Rules
//!
//! The rules crate for Endless - the bound familiar, the spells a master can
//! speak, and the rooms of the first binding test. This crate owns world
//! state and spell effects; it knows nothing about what Tomar thinks or says.

pub mod entities;
pub mod error;
pub mod mechanics;
pub mod world_state;

pub use entities::*;
pub use error::*;
pub use mechanics::*;
pub use world_state::*;
