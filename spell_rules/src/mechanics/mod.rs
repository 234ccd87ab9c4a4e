//! Game mechanics: the spell words and what they do.

mod casting;

pub use casting::*;

use serde::{Deserialize, Serialize};

/// The words of power a master may speak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Spell {
    /// Perception: describes the surroundings.
    Shta,
    /// Seize or release the familiar's mind.
    Shak,
    /// Gather flame into the familiar's aura.
    Chai,
    /// Release the aura's charge at a focus.
    Reho,
}

impl Spell {
    pub const ALL: [Spell; 4] = [Spell::Shta, Spell::Shak, Spell::Chai, Spell::Reho];

    /// Match a line of speech against the spell words.
    ///
    /// Matching is exact: no trimming and no case folding.
    pub fn parse(speech: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|spell| spell.word() == speech)
    }

    /// The bare word, as spoken.
    pub fn word(&self) -> &'static str {
        match self {
            Spell::Shta => "shta",
            Spell::Shak => "shak",
            Spell::Chai => "chai",
            Spell::Reho => "reho",
        }
    }

    /// Battle magic needs a seized familiar to channel it.
    pub fn is_battle_magic(&self) -> bool {
        matches!(self, Spell::Chai | Spell::Reho)
    }
}

impl std::fmt::Display for Spell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "_{}_", self.word())
    }
}
