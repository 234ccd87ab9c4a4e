//! Error types for the `dialogue_core` crate.

use spell_rules::RulesError;

use crate::strategy::NodeId;

/// Errors raised while running a conversation.
#[derive(Debug, thiserror::Error)]
pub enum DialogueError {
    /// The rules refused something the session asked of them.
    #[error(transparent)]
    Rules(#[from] RulesError),

    /// The mind pointed at a node the strategy tree does not have.
    #[error("strategy node {0:?} does not exist")]
    UnknownNode(NodeId),
}
