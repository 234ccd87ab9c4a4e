//! The Alice in Antioch scenario.

use std::fmt;

use tracing::debug;

use crate::config::SearchConfig;
use crate::error::SimError;
use crate::goal::Goal;
use crate::mind::Mind;
use crate::world::{Action, Body, Direction, World};

pub const ANTIOCH: &str = "in Antioch";
pub const SOUTH_OF_ANTIOCH: &str = "in the desert, south of Antioch";

/// A line of the simulation's running commentary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Narration {
    PolicySelected { policy: String },
    Acted {
        actor: String,
        place: String,
        action: String,
    },
}

impl fmt::Display for Narration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Narration::PolicySelected { policy } => write!(f, "Selecting: {}", policy),
            Narration::Acted {
                actor,
                place,
                action,
            } => write!(f, "{} ({}) {}", actor, place, action),
        }
    }
}

/// One actor living in a world, planning with its own copy of it.
#[derive(Debug, Clone)]
pub struct Simulation {
    world: World,
    mind: Mind,
}

impl Simulation {
    /// The actor's body must already be in `world`.
    pub fn new(world: World, mind: Mind) -> Result<Self, SimError> {
        world.body(&mind.name)?;
        Ok(Self { world, mind })
    }

    /// Alice, tired of the desert, with Antioch a step to the north.
    pub fn alice_in_antioch(config: SearchConfig) -> Result<Self, SimError> {
        let mut world = World::new();
        let antioch = world.add_place(ANTIOCH);
        let south_of_antioch = world.add_place(SOUTH_OF_ANTIOCH);
        world.connect(south_of_antioch, Direction::North, antioch);
        world.insert_body(Body::new("Alice"), south_of_antioch);

        // Alice starts out knowing everything about her world.
        let mind = Mind::new("Alice", world.clone(), config)
            .with_goal(Goal::is_in("Alice", ANTIOCH))
            .with_goal(Goal::has_low_fatigue("Alice"))
            .with_actions([
                Action::Wait,
                Action::Go(Direction::North),
                Action::Go(Direction::East),
                Action::Go(Direction::West),
                Action::Go(Direction::South),
            ]);

        Self::new(world, mind)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn mind(&self) -> &Mind {
        &self.mind
    }

    /// One tick of the world: the actor senses, decides and acts.
    pub fn tick(&mut self) -> Result<Vec<Narration>, SimError> {
        let actor = self.mind.name.clone();
        let sensation = self.world.sense(&actor)?;
        let decision = self.mind.act(&sensation)?;

        let mut narration = Vec::new();
        if let Some(policy) = &decision.selected {
            narration.push(Narration::PolicySelected {
                policy: policy.to_string(),
            });
        }
        narration.push(Narration::Acted {
            actor: actor.clone(),
            place: sensation.place,
            action: decision.action.present_tense(),
        });

        self.world = self.world.step_one(&actor, decision.action)?;
        debug!(clock = self.mind.internal_clock, action = %decision.action, "tick");
        Ok(narration)
    }

    /// Run `steps` ticks, collecting the commentary.
    pub fn run(&mut self, steps: usize) -> Result<Vec<Narration>, SimError> {
        let mut narration = Vec::new();
        for _ in 0..steps {
            narration.extend(self.tick()?);
        }
        Ok(narration)
    }
}
