//! The familiar's mind: what it believes, how confused and impatient it is,
//! and where it stands in its strategy.

mod voice;

pub use voice::*;

use serde::{Deserialize, Serialize};
use spell_rules::WorldState;
use std::collections::BTreeSet;
use tracing::debug;

use crate::strategy::{NodeId, StrategyTree};

/// Things the familiar has come to believe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Belief {
    MasterCanCastSpells,
    BindingHasProblems,
    CanBeSeized,
    TargetDestroyed,
}

impl std::fmt::Display for Belief {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Belief::MasterCanCastSpells => "Master can cast spells",
            Belief::BindingHasProblems => "the binding appears to have problems",
            Belief::CanBeSeized => "I can be seized",
            Belief::TargetDestroyed => "the target has been destroyed",
        };
        f.write_str(text)
    }
}

/// A familiar's mind.
#[derive(Debug, Clone)]
pub struct Mind {
    /// Nonsense heard since the master last made sense.
    pub confusion: usize,

    /// Sensible but unhelpful lines heard in the current stage.
    pub impatience: usize,

    pub beliefs: BTreeSet<Belief>,

    /// Position in the strategy tree. `None` once the strategy is finished.
    pub cursor: Option<NodeId>,

    /// The stage the familiar is attending to. Cleared whenever its mind is
    /// seized or released, and rebuilt from the cursor on its next turn.
    pub active: Option<NodeId>,

    pub voice: Voice,
}

impl Mind {
    /// A freshly bound mind, attending to the root of `tree`.
    pub fn new(tree: &StrategyTree) -> Self {
        Self {
            confusion: 0,
            impatience: 0,
            beliefs: BTreeSet::new(),
            cursor: Some(tree.root()),
            active: Some(tree.root()),
            voice: Voice::tomar(),
        }
    }

    pub fn believes(&self, belief: Belief) -> bool {
        self.beliefs.contains(&belief)
    }

    pub fn believe(&mut self, belief: Belief) {
        if self.beliefs.insert(belief) {
            debug!(%belief, "new belief");
        }
    }

    /// Whether every stage of the strategy has been completed.
    pub fn is_complete(&self) -> bool {
        self.cursor.is_none()
    }

    /// Having its mind seized or released wipes the familiar's train of thought.
    pub fn on_seized_or_released(&mut self) {
        self.active = None;
        self.confusion = 0;
        self.impatience = 0;
    }

    /// Take in what can be seen of the world.
    pub fn perceive(&mut self, world: &WorldState) {
        if world.target_destroyed_here() {
            self.believe(Belief::TargetDestroyed);
        }
    }

    /// Respond to speech that made no sense.
    pub fn react_to_nonsense(&mut self, details: Option<&ConfusionDetails>) -> Option<String> {
        let response = self.voice.confusion_line(self.confusion).render(details);
        self.confusion += 1;
        self.believe(Belief::BindingHasProblems);
        response
    }

    /// Respond to speech that made sense but did not move things along.
    pub fn react_to_lack_of_progress(&mut self) -> Option<String> {
        let response = self.voice.impatience_line(self.impatience).render(None);
        self.impatience += 1;
        response
    }
}
