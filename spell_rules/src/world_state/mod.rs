//! World state management - the rooms of the test and where the party stands.

mod starting_world;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

use crate::entities::Familiar;
use crate::error::RulesError;

/// Unique identifier for locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationId(pub Uuid);

impl LocationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for LocationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for LocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The material and magical makeup of a place, as _shta_ reveals it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nature {
    Stone,
    Artifice,
    Arcana,
    Metal,
}

impl std::fmt::Display for Nature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Nature::Stone => "Stone",
            Nature::Artifice => "Artifice",
            Nature::Arcana => "Arcana",
            Nature::Metal => "Metal",
        };
        f.write_str(name)
    }
}

/// Something in a location that a spell can be aimed at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Focus {
    pub name: String,
    pub destroyed: bool,
}

impl Focus {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            destroyed: false,
        }
    }
}

impl std::fmt::Display for Focus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.destroyed {
            write!(f, "{} (destroyed)", self.name)
        } else {
            f.write_str(&self.name)
        }
    }
}

/// A location in the game world.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    /// How the familiar describes the place when asked to perceive it.
    pub perception: String,
    /// Position relative to the weave. Not yet revealed by any spell.
    pub position: String,
    pub nature: Vec<Nature>,
    pub foci: Vec<Focus>,
}

impl Location {
    pub fn new(name: impl Into<String>, perception: impl Into<String>) -> Self {
        Self {
            id: LocationId::new(),
            name: name.into(),
            perception: perception.into(),
            position: String::new(),
            nature: Vec::new(),
            foci: Vec::new(),
        }
    }

    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = position.into();
        self
    }

    pub fn with_nature(mut self, nature: impl IntoIterator<Item = Nature>) -> Self {
        self.nature.extend(nature);
        self
    }

    pub fn with_focus(mut self, focus: Focus) -> Self {
        self.foci.push(focus);
        self
    }
}

/// Things the familiar can do to the world on its own initiative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorldAction {
    /// Lead the master from the laboratory down to the training hall.
    GoDownstairs,
}

impl WorldAction {
    /// Name of the location this action ends in.
    pub fn destination(&self) -> &'static str {
        match self {
            WorldAction::GoDownstairs => starting_world::TRAINING_HALL,
        }
    }
}

/// The complete state of the game world at any point in time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldState {
    /// All locations, by ID.
    pub locations: HashMap<LocationId, Location>,

    /// Where the master and the familiar currently stand.
    pub here: LocationId,

    pub familiar: Familiar,

    /// Number of lines the master has spoken.
    pub turn: u32,
}

impl WorldState {
    /// Create a world with a single location.
    pub fn new(start: Location, familiar: Familiar) -> Self {
        let here = start.id;
        let mut locations = HashMap::new();
        locations.insert(here, start);
        Self {
            locations,
            here,
            familiar,
            turn: 0,
        }
    }

    /// Add a location to the world.
    pub fn add_location(&mut self, location: Location) -> LocationId {
        let id = location.id;
        self.locations.insert(id, location);
        id
    }

    pub fn current_location(&self) -> Result<&Location, RulesError> {
        self.locations
            .get(&self.here)
            .ok_or(RulesError::LocationNotFound(self.here))
    }

    pub fn current_location_mut(&mut self) -> Result<&mut Location, RulesError> {
        self.locations
            .get_mut(&self.here)
            .ok_or(RulesError::LocationNotFound(self.here))
    }

    /// Find a location by its display name.
    pub fn location_named(&self, name: &str) -> Result<&Location, RulesError> {
        self.locations
            .values()
            .find(|l| l.name == name)
            .ok_or_else(|| RulesError::UnknownLocation(name.to_string()))
    }

    /// Move the party to another location.
    pub fn move_to(&mut self, id: LocationId) -> Result<(), RulesError> {
        if !self.locations.contains_key(&id) {
            return Err(RulesError::LocationNotFound(id));
        }
        self.here = id;
        Ok(())
    }

    /// Carry out an action the familiar has decided on.
    pub fn apply(&mut self, action: WorldAction) -> Result<(), RulesError> {
        let destination = self.location_named(action.destination())?.id;
        debug!(?action, %destination, "applying world action");
        self.move_to(destination)
    }

    /// Whether a focus in the current location has been destroyed.
    pub fn target_destroyed_here(&self) -> bool {
        self.current_location()
            .map(|l| l.foci.iter().any(|f| f.destroyed))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_world() {
        let world = WorldState::starting();
        let here = world.current_location().unwrap();

        assert_eq!(here.name, "Starting Laboratory");
        assert!(here.foci.is_empty());
        assert_eq!(world.locations.len(), 2);
        assert_eq!(world.turn, 0);
    }

    #[test]
    fn test_go_downstairs() {
        let mut world = WorldState::starting();
        world.apply(WorldAction::GoDownstairs).unwrap();

        let here = world.current_location().unwrap();
        assert_eq!(here.name, "Training Hall");
        assert_eq!(here.foci, vec![Focus::new("Target")]);
        assert!(here.position.contains("9.5 meters above the weave"));
    }

    #[test]
    fn test_move_to_unknown_location() {
        let mut world = WorldState::starting();
        let before = world.here;

        let missing = LocationId::new();
        assert!(matches!(
            world.move_to(missing),
            Err(RulesError::LocationNotFound(id)) if id == missing
        ));
        assert_eq!(world.here, before);
    }

    #[test]
    fn test_unknown_location_name() {
        let world = WorldState::starting();
        assert!(matches!(
            world.location_named("Observatory"),
            Err(RulesError::UnknownLocation(name)) if name == "Observatory"
        ));
    }

    #[test]
    fn test_focus_display() {
        let mut focus = Focus::new("Target");
        assert_eq!(focus.to_string(), "Target");
        focus.destroyed = true;
        assert_eq!(focus.to_string(), "Target (destroyed)");
    }
}
