//! Error types for the `antioch_sim` crate.

/// Errors raised while stepping or planning in the simulation.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// No body with this name exists in the world.
    #[error("unknown body: {0}")]
    UnknownBody(String),

    /// No place with this name exists in the world.
    #[error("unknown place: {0}")]
    UnknownPlace(String),

    /// The agent has nothing it could possibly do.
    #[error("{0} has no possible actions")]
    NoActions(String),
}
