//! The play loop: the master speaks, spells take effect, the familiar answers.

use serde::Serialize;
use spell_rules::{cast, Spell, SpellOutcome, WorldState};
use tracing::{debug, info};

use crate::error::DialogueError;
use crate::mind::Mind;
use crate::strategy::{binding_tests, StrategyTree};

/// The familiar's first words after the binding.
pub const OPENING_LINE: &str = "What say you, Master?";

/// Where the master's speech comes from and where the game's text goes.
pub trait Console {
    /// The next line of speech, or `None` when there is no more input.
    fn read_line(&mut self) -> Option<String>;

    fn write_line(&mut self, text: &str);
}

/// How a session came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionOutcome {
    /// The familiar finished its strategy.
    Completed,
    InputExhausted,
    TurnLimitReached,
}

/// Everything that happened in one turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnRecord {
    pub turn: u32,
    pub speech: String,
    /// The spell's boxed report, if the speech was a spell.
    pub spell: Option<String>,
    pub reply: Option<String>,
    /// Where the party stood at the end of the turn.
    pub location: String,
}

/// The record of a whole session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Transcript {
    pub turns: Vec<TurnRecord>,
    pub outcome: Option<SessionOutcome>,
}

/// A single game of Endless.
#[derive(Debug)]
pub struct Session {
    world: WorldState,
    tree: StrategyTree,
    mind: Mind,
    max_turns: Option<u32>,
    transcript: Transcript,
}

impl Session {
    /// A fresh game in the starting world with the binding-test strategy.
    pub fn new() -> Self {
        Self::with_parts(WorldState::starting(), binding_tests::tree())
    }

    pub fn with_parts(world: WorldState, tree: StrategyTree) -> Self {
        let mind = Mind::new(&tree);
        Self {
            world,
            tree,
            mind,
            max_turns: None,
            transcript: Transcript::default(),
        }
    }

    /// Stop after this many lines of speech.
    pub fn with_max_turns(mut self, max_turns: Option<u32>) -> Self {
        self.max_turns = max_turns;
        self
    }

    pub fn world(&self) -> &WorldState {
        &self.world
    }

    pub fn mind(&self) -> &Mind {
        &self.mind
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn into_transcript(self) -> Transcript {
        self.transcript
    }

    /// Handle one line of speech.
    pub fn step(&mut self, speech: &str) -> Result<TurnRecord, DialogueError> {
        self.world.turn += 1;

        let mut spell_text = None;
        if let Some(spell) = Spell::parse(speech) {
            let effect = cast(spell, &mut self.world)?;
            if matches!(effect.outcome, SpellOutcome::Seized | SpellOutcome::Released) {
                self.mind.on_seized_or_released();
            }
            spell_text = Some(effect.description);
        }

        let reply = self.mind.take_turn(&self.tree, &self.world, speech)?;
        if let Some(action) = reply.does {
            self.world.apply(action)?;
        }

        let record = TurnRecord {
            turn: self.world.turn,
            speech: speech.to_string(),
            spell: spell_text,
            reply: reply.says,
            location: self.world.current_location()?.name.clone(),
        };
        debug!(turn = record.turn, speech, location = %record.location, "turn played");
        self.transcript.turns.push(record.clone());
        Ok(record)
    }

    /// Run the game against a console until it ends.
    pub fn play(&mut self, console: &mut impl Console) -> Result<SessionOutcome, DialogueError> {
        info!(familiar = %self.world.familiar.name, "session started");
        console.write_line("");
        console.write_line(OPENING_LINE);

        let outcome = loop {
            if self.mind.is_complete() {
                break SessionOutcome::Completed;
            }
            if self
                .max_turns
                .is_some_and(|limit| self.world.turn >= limit)
            {
                break SessionOutcome::TurnLimitReached;
            }
            let Some(speech) = console.read_line() else {
                break SessionOutcome::InputExhausted;
            };

            let record = self.step(&speech)?;
            if let Some(text) = &record.spell {
                console.write_line(text);
            }
            if let Some(text) = &record.reply {
                console.write_line(text);
            }
        };

        info!(?outcome, turns = self.world.turn, "session ended");
        self.transcript.outcome = Some(outcome);
        Ok(outcome)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedConsole;

    #[test]
    fn test_opening_and_exhaustion() {
        let mut session = Session::new();
        let mut console = ScriptedConsole::new(Vec::<String>::new());

        let outcome = session.play(&mut console).unwrap();

        assert_eq!(outcome, SessionOutcome::InputExhausted);
        assert_eq!(console.output(), ["", OPENING_LINE]);
    }

    #[test]
    fn test_step_records_spell_and_reply() {
        let mut session = Session::new();
        let record = session.step("shta").unwrap();

        assert_eq!(record.turn, 1);
        assert!(record.spell.unwrap().starts_with("+--\n|Perception:"));
        assert!(record.reply.unwrap().starts_with("The binding appears"));
        assert_eq!(record.location, "Starting Laboratory");
        assert_eq!(session.transcript().turns.len(), 1);
    }

    #[test]
    fn test_turn_limit() {
        let mut session = Session::new().with_max_turns(Some(2));
        let mut console = ScriptedConsole::new(["a", "b", "c", "d"]);

        let outcome = session.play(&mut console).unwrap();

        assert_eq!(outcome, SessionOutcome::TurnLimitReached);
        assert_eq!(session.world().turn, 2);
        assert_eq!(console.remaining(), 2);
    }

    #[test]
    fn test_completed_session() {
        let mut session = Session::new();
        let mut console = ScriptedConsole::new([
            "shta", "shta", "shta", "shta", "shak", "chai", "reho", "shak", "never read",
        ]);

        let outcome = session.play(&mut console).unwrap();

        assert_eq!(outcome, SessionOutcome::Completed);
        assert_eq!(console.remaining(), 1);
        assert!(session.mind().is_complete());
        assert_eq!(session.transcript().outcome, Some(SessionOutcome::Completed));
        assert!(console.contains("The first test is complete."));
    }
}
