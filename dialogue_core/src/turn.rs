//! One reaction of the familiar to one line of the master's speech.

use spell_rules::{WorldAction, WorldState};
use tracing::{debug, info};

use crate::error::DialogueError;
use crate::events::PlayerIntent;
use crate::mind::{Belief, Mind};
use crate::strategy::{NodeId, StrategyTree};

/// Said when the familiar comes back to itself after being seized.
const RECOVERY: &str =
    "Thank you for using me, Master.\nPlease give me a moment to collect myself.\n...\n";

/// What the familiar says and does in response to a line of speech.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TurnReply {
    pub says: Option<String>,
    pub does: Option<WorldAction>,
}

impl Mind {
    /// React to `speech`.
    ///
    /// A seized familiar says and does nothing. Otherwise the active stage is
    /// checked: achieving it produces its progress line and moves the
    /// strategy along, failing it produces confusion or impatience.
    pub fn take_turn(
        &mut self,
        tree: &StrategyTree,
        world: &WorldState,
        speech: &str,
    ) -> Result<TurnReply, DialogueError> {
        if world.familiar.seized_by_player {
            return Ok(TurnReply::default());
        }

        let previous = self.active;
        self.perceive(world);

        let intent = PlayerIntent::from_speech(speech);
        if intent.proves_spellcasting() {
            self.believe(Belief::MasterCanCastSpells);
        }

        let mut reply = match self.active {
            Some(active) => self.attend(tree, active, intent)?,
            None => self.recover(tree, intent)?,
        };

        if intent.is_known() {
            self.confusion = 0;
        }
        if previous != self.active || reply.does.is_some() {
            self.impatience = 0;
        }

        if reply.says.as_deref() == Some("") {
            reply.says = None;
        }
        Ok(reply)
    }

    fn attend(
        &mut self,
        tree: &StrategyTree,
        active: NodeId,
        intent: PlayerIntent,
    ) -> Result<TurnReply, DialogueError> {
        let stage = tree.stage(active).ok_or(DialogueError::UnknownNode(active))?;

        if stage.is_satisfied(self) {
            let says = stage.progress(intent, self);
            let does = self.advance(tree)?;
            Ok(TurnReply {
                says: Some(says),
                does,
            })
        } else if intent.is_known() {
            Ok(TurnReply {
                says: self.react_to_lack_of_progress(),
                does: None,
            })
        } else {
            Ok(TurnReply {
                says: self.react_to_nonsense(stage.confusion.as_ref()),
                does: None,
            })
        }
    }

    /// First turn after being released: pick the strategy back up.
    fn recover(
        &mut self,
        tree: &StrategyTree,
        intent: PlayerIntent,
    ) -> Result<TurnReply, DialogueError> {
        let Some(cursor) = self.cursor else {
            return Ok(TurnReply::default());
        };

        self.believe(Belief::CanBeSeized);
        let stage = tree.stage(cursor).ok_or(DialogueError::UnknownNode(cursor))?;
        self.active = Some(cursor);

        let mut says = String::from(RECOVERY);
        says.push_str(&format!(
            "I seem to remember something about {}...\n",
            stage.name
        ));

        let mut does = None;
        if stage.is_satisfied(self) {
            says.push_str(&stage.progress(intent, self));
            does = self.advance(tree)?;
        } else {
            says.push_str(&stage.return_without_progress(self));
        }

        Ok(TurnReply {
            says: Some(says),
            does,
        })
    }

    /// Move the cursor past the current stage, returning the next stage's
    /// opening action.
    fn advance(&mut self, tree: &StrategyTree) -> Result<Option<WorldAction>, DialogueError> {
        let next = match self.cursor {
            Some(cursor) => tree.next_after(cursor, self),
            None => None,
        };
        self.cursor = next;
        self.active = next;

        match next {
            Some(id) => {
                let stage = tree.stage(id).ok_or(DialogueError::UnknownNode(id))?;
                debug!(stage = stage.name, "advanced strategy");
                Ok(stage.init_action)
            }
            None => {
                info!("strategy complete");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::binding_tests;
    use spell_rules::{cast, Spell};

    struct Fixture {
        tree: StrategyTree,
        mind: Mind,
        world: WorldState,
    }

    impl Fixture {
        fn new() -> Self {
            let tree = binding_tests::tree();
            let mind = Mind::new(&tree);
            Self {
                tree,
                mind,
                world: WorldState::starting(),
            }
        }

        fn say(&mut self, speech: &str) -> TurnReply {
            if let Some(spell) = Spell::parse(speech) {
                cast(spell, &mut self.world).unwrap();
                if spell == Spell::Shak {
                    self.mind.on_seized_or_released();
                }
            }
            let reply = self.mind.take_turn(&self.tree, &self.world, speech).unwrap();
            if let Some(action) = reply.does {
                self.world.apply(action).unwrap();
            }
            reply
        }

        fn stage_name(&self) -> Option<&'static str> {
            self.mind
                .active
                .and_then(|id| self.tree.stage(id))
                .map(|stage| stage.name)
        }
    }

    #[test]
    fn test_shta_first_is_a_clean_binding() {
        let mut game = Fixture::new();

        let reply = game.say("shta");
        assert_eq!(
            reply.says.as_deref(),
            Some("The binding appears to be a success. Shall we continue with the tests?")
        );
        assert_eq!(game.stage_name(), Some("asking you whether I can start the tests"));
        assert!(game.mind.believes(Belief::MasterCanCastSpells));
    }

    #[test]
    fn test_sensible_silence_then_agreement() {
        let mut game = Fixture::new();
        game.say("shta");

        // Sense without progress: the first impatient line is silent
        let reply = game.say("shta");
        assert_eq!(reply.says, None);
        assert_eq!(game.mind.impatience, 1);

        let reply = game.say("shta");
        assert_eq!(
            reply.says.as_deref(),
            Some("Hrm. Yes, I think we should continue with the testing...")
        );
        assert_eq!(reply.does, Some(WorldAction::GoDownstairs));
        assert_eq!(game.mind.impatience, 0);
        assert_eq!(game.world.current_location().unwrap().name, "Training Hall");
    }

    #[test]
    fn test_nonsense_before_shta_forks_to_objection_check() {
        let mut game = Fixture::new();

        assert_eq!(
            game.say("hello").says.as_deref(),
            Some("I don't understand, Master.")
        );
        game.say("what");
        game.say("where");
        game.say("why");
        assert_eq!(game.mind.confusion, 4);

        let reply = game.say("shta");
        assert!(reply.says.unwrap().starts_with("Ah, finally...\n"));
        assert_eq!(game.mind.confusion, 0);
        assert_eq!(game.stage_name(), Some("checking whether I can start the tests"));

        let reply = game.say("blah");
        assert_eq!(
            reply.says.as_deref(),
            Some("Yes, I think continuing with the tests is a good idea. You're not making any sense.")
        );
        assert_eq!(reply.does, Some(WorldAction::GoDownstairs));
    }

    #[test]
    fn test_seized_familiar_is_silent() {
        let mut game = Fixture::new();
        let reply = game.say("shak");
        assert_eq!(reply, TurnReply::default());
        assert!(game.world.familiar.seized_by_player);

        assert_eq!(game.say("nonsense"), TurnReply::default());
        assert_eq!(game.mind.confusion, 0);
    }

    #[test]
    fn test_release_recovers_strategy() {
        let mut game = Fixture::new();
        game.say("shak");

        let says = game.say("shak").says.unwrap();
        assert!(says.starts_with(RECOVERY));
        assert!(says.contains(
            "I seem to remember something about waiting for you to demonstrate that the binding was a success by invoking _shta_...\n"
        ));
        assert!(says.ends_with("Shall we continue with the tests?"));
        assert!(game.mind.believes(Belief::CanBeSeized));
    }

    #[test]
    fn test_full_first_test() {
        let mut game = Fixture::new();
        game.say("shta");
        game.say("shta");
        game.say("shta");
        assert_eq!(
            game.stage_name(),
            Some("starting the tests for your binding")
        );

        let says = game.say("shta").says.unwrap();
        assert!(says.starts_with("Yes, here we are, Master."));
        assert_eq!(
            game.stage_name(),
            Some("testing whether you can invoke _chai_ _reho_")
        );

        // Known speech that does not destroy the target only tries patience
        assert_eq!(game.say("shta").says, None);
        assert_eq!(game.say("shta").says.as_deref(), Some("Any time now..."));

        game.say("shak");
        game.say("chai");
        game.say("reho");
        assert!(game.world.target_destroyed_here());
        assert!(!game.mind.is_complete());

        let says = game.say("shak").says.unwrap();
        assert!(says.contains("I seem to remember something about testing whether you can invoke _chai_ _reho_...\n"));
        assert!(says.ends_with("The first test is complete."));
        assert!(game.mind.is_complete());

        // A finished strategy leaves nothing more to say
        assert_eq!(game.say("shta"), TurnReply::default());
    }

    #[test]
    fn test_return_without_progress_hints() {
        let mut game = Fixture::new();
        for speech in ["shta", "shta", "shta", "shta"] {
            game.say(speech);
        }

        game.say("shak");
        let says = game.say("shak").says.unwrap();
        assert!(says.ends_with(
            "Did something go wrong? The target appears undamaged.\nYou'll need to _chai_ then _reho_ the target to complete the test."
        ));
    }

    #[test]
    fn test_stage_hints_shape_confusion() {
        let mut game = Fixture::new();
        for speech in ["shta", "shta", "shta", "shta"] {
            game.say(speech);
        }

        game.say("eh");
        let says = game.say("eh").says.unwrap();
        assert_eq!(
            says,
            "I still don't understand what you're trying to say.\nI think you should _shak_, then _chai_ _reho_."
        );
    }
}
