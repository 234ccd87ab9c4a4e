//! Error types for the `spell_rules` crate.

use crate::world_state::LocationId;

/// Errors raised while applying rules to the world.
#[derive(Debug, thiserror::Error)]
pub enum RulesError {
    /// A location id was not registered with the world.
    #[error("location not found: {0}")]
    LocationNotFound(LocationId),

    /// No location carries the requested name.
    #[error("unknown location: {0}")]
    UnknownLocation(String),
}
