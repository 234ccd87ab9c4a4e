//! The bound familiar.

use serde::{Deserialize, Serialize};

use super::{Aura, EntityId};

/// A familiar bound to the player's will.
///
/// The familiar's body lives here; what it believes and says is owned by
/// `dialogue_core`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Familiar {
    pub id: EntityId,
    pub name: String,
    /// While seized the familiar's own mind is silent.
    pub seized_by_player: bool,
    pub aura: Aura,
}

impl Familiar {
    /// Create a new, free familiar with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: EntityId::new(),
            name: name.into(),
            seized_by_player: false,
            aura: Aura::empty(),
        }
    }

    /// The familiar bound at the start of the game.
    pub fn tomar() -> Self {
        Self::new("Tomar")
    }

    /// Flip between seized and free. Returns the new seized state.
    pub fn toggle_seized(&mut self) -> bool {
        self.seized_by_player = !self.seized_by_player;
        self.seized_by_player
    }
}
