//! The rooms of the first binding test.

use super::{Focus, Location, Nature, WorldState};
use crate::entities::Familiar;

pub const STARTING_LABORATORY: &str = "Starting Laboratory";
pub const TRAINING_HALL: &str = "Training Hall";

fn starting_laboratory() -> Location {
    Location::new(
        STARTING_LABORATORY,
        "I'm in Master's laboratory. Everything is as it should be.",
    )
    .with_position("36 degrees and 4101 meters from the _guhi_ nexus, 12 meters above the weave")
    .with_nature([Nature::Stone, Nature::Artifice, Nature::Arcana])
}

fn training_hall() -> Location {
    Location::new(
        TRAINING_HALL,
        "I'm in the training hall below Master's lab. The test aparatus is ready.",
    )
    .with_position("36 degrees and 4101 meters from the _guhi_ nexus, 9.5 meters above the weave")
    .with_nature([Nature::Stone, Nature::Artifice, Nature::Metal])
    .with_focus(Focus::new("Target"))
}

impl WorldState {
    /// The world as it stands the moment Tomar is bound: master and familiar
    /// in the laboratory, the training hall waiting below.
    pub fn starting() -> Self {
        let mut world = WorldState::new(starting_laboratory(), Familiar::tomar());
        world.add_location(training_hall());
        world
    }
}
