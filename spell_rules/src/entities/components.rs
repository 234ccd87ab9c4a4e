//! Component definitions for entities.

use serde::{Deserialize, Serialize};

use crate::mechanics::Spell;

/// The charge a seized familiar carries for its master.
///
/// Only one spell can be held at a time. Releasing it empties the aura.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Aura {
    charge: Option<Spell>,
}

impl Aura {
    /// An aura with nothing in it.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.charge.is_none()
    }

    /// The spell currently held, if any.
    pub fn charge(&self) -> Option<Spell> {
        self.charge
    }

    /// Fill the aura. Returns false if it was already holding something.
    pub fn charge_with(&mut self, spell: Spell) -> bool {
        if self.charge.is_some() {
            return false;
        }
        self.charge = Some(spell);
        true
    }

    /// Empty the aura, returning what it held.
    pub fn discharge(&mut self) -> Option<Spell> {
        self.charge.take()
    }
}
