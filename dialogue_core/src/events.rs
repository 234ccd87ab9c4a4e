//! What a line of the master's speech means to the familiar.

use serde::{Deserialize, Serialize};
use spell_rules::Spell;

/// The familiar's reading of a line of speech.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerIntent {
    /// Not a word the familiar recognises.
    Unknown,
    Shta,
    Shak,
    /// _chai_ or _reho_.
    BattleMagic,
}

impl PlayerIntent {
    pub fn from_speech(speech: &str) -> Self {
        match Spell::parse(speech) {
            Some(spell) if spell.is_battle_magic() => PlayerIntent::BattleMagic,
            Some(Spell::Shta) => PlayerIntent::Shta,
            Some(_) => PlayerIntent::Shak,
            None => PlayerIntent::Unknown,
        }
    }

    /// Whether the speech made sense at all.
    pub fn is_known(&self) -> bool {
        !matches!(self, PlayerIntent::Unknown)
    }

    /// Speaking _shta_ or _shak_ shows the master can still cast.
    pub fn proves_spellcasting(&self) -> bool {
        matches!(self, PlayerIntent::Shta | PlayerIntent::Shak)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_from_speech() {
        assert_eq!(PlayerIntent::from_speech("shta"), PlayerIntent::Shta);
        assert_eq!(PlayerIntent::from_speech("shak"), PlayerIntent::Shak);
        assert_eq!(PlayerIntent::from_speech("chai"), PlayerIntent::BattleMagic);
        assert_eq!(PlayerIntent::from_speech("reho"), PlayerIntent::BattleMagic);
        assert_eq!(PlayerIntent::from_speech("hello"), PlayerIntent::Unknown);
        assert_eq!(PlayerIntent::from_speech("SHTA"), PlayerIntent::Unknown);
    }

    #[test]
    fn test_battle_magic_is_known_but_proves_nothing() {
        let intent = PlayerIntent::BattleMagic;
        assert!(intent.is_known());
        assert!(!intent.proves_spellcasting());
        assert!(!PlayerIntent::Unknown.is_known());
    }
}
