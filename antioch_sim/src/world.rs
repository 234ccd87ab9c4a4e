//! The simulated world: places, bodies, and how actions change them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::SimError;

/// Fatigue added by any action other than waiting.
pub const FATIGUE_PER_ACTION: f64 = 0.1;

/// Index of a place in a [`World`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlaceId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        };
        f.write_str(name)
    }
}

/// Something a body can do in one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Wait,
    Go(Direction),
}

impl Action {
    /// Imperative form, e.g. "go north".
    pub fn summary(&self) -> String {
        match self {
            Action::Wait => "wait".to_string(),
            Action::Go(direction) => format!("go {}", direction),
        }
    }

    /// Third-person present tense, e.g. "goes north".
    pub fn present_tense(&self) -> String {
        match self {
            Action::Wait => "waits".to_string(),
            Action::Go(direction) => format!("goes {}", direction),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.summary())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    exits: BTreeMap<Direction, PlaceId>,
}

impl Place {
    pub fn exit(&self, direction: Direction) -> Option<PlaceId> {
        self.exits.get(&direction).copied()
    }
}

impl std::fmt::Display for Place {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// A physical body in the world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub name: String,
    pub fatigue: f64,
}

impl Body {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fatigue: 0.0,
        }
    }
}

/// What a body can sense of the world around it.
#[derive(Debug, Clone, PartialEq)]
pub struct Sensation {
    pub place: String,
    pub fatigue: f64,
}

/// A complete world. Stepping produces a new world and leaves this one alone,
/// so agents can imagine futures from a copy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct World {
    places: Vec<Place>,
    bodies: BTreeMap<String, Body>,
    locations: BTreeMap<String, PlaceId>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_place(&mut self, name: impl Into<String>) -> PlaceId {
        let id = PlaceId(self.places.len());
        self.places.push(Place {
            name: name.into(),
            exits: BTreeMap::new(),
        });
        id
    }

    /// Add a one-way exit from `from` to `to`.
    pub fn connect(&mut self, from: PlaceId, direction: Direction, to: PlaceId) {
        if let Some(place) = self.places.get_mut(from.0) {
            place.exits.insert(direction, to);
        }
    }

    pub fn place(&self, id: PlaceId) -> Option<&Place> {
        self.places.get(id.0)
    }

    pub fn place_named(&self, name: &str) -> Result<PlaceId, SimError> {
        self.places
            .iter()
            .position(|place| place.name == name)
            .map(PlaceId)
            .ok_or_else(|| SimError::UnknownPlace(name.to_string()))
    }

    /// Put a body somewhere, replacing any body with the same name.
    pub fn insert_body(&mut self, body: Body, place: PlaceId) {
        self.locations.insert(body.name.clone(), place);
        self.bodies.insert(body.name.clone(), body);
    }

    pub fn body(&self, name: &str) -> Result<&Body, SimError> {
        self.bodies
            .get(name)
            .ok_or_else(|| SimError::UnknownBody(name.to_string()))
    }

    fn body_mut(&mut self, name: &str) -> Result<&mut Body, SimError> {
        self.bodies
            .get_mut(name)
            .ok_or_else(|| SimError::UnknownBody(name.to_string()))
    }

    pub fn location_of(&self, name: &str) -> Result<&Place, SimError> {
        let id = self
            .locations
            .get(name)
            .ok_or_else(|| SimError::UnknownBody(name.to_string()))?;
        self.place(*id)
            .ok_or_else(|| SimError::UnknownPlace(format!("{:?}", id)))
    }

    /// Move a body to a place by name.
    pub fn relocate(&mut self, name: &str, place: &str) -> Result<(), SimError> {
        let id = self.place_named(place)?;
        self.body(name)?;
        self.locations.insert(name.to_string(), id);
        Ok(())
    }

    pub fn set_fatigue(&mut self, name: &str, fatigue: f64) -> Result<(), SimError> {
        self.body_mut(name)?.fatigue = fatigue;
        Ok(())
    }

    /// What `name` senses of its surroundings.
    pub fn sense(&self, name: &str) -> Result<Sensation, SimError> {
        Ok(Sensation {
            place: self.location_of(name)?.name.clone(),
            fatigue: self.body(name)?.fatigue,
        })
    }

    /// The world one tick later, after every body has taken its action.
    ///
    /// Any action but waiting tires the body. Moving only succeeds when the
    /// current place has an exit in that direction.
    pub fn step(&self, actions: &BTreeMap<String, Action>) -> Result<World, SimError> {
        let mut next = self.clone();
        for (name, action) in actions {
            let body = next.body_mut(name)?;
            if *action != Action::Wait {
                body.fatigue += FATIGUE_PER_ACTION;
            }
            if let Action::Go(direction) = action {
                let here = self
                    .locations
                    .get(name)
                    .ok_or_else(|| SimError::UnknownBody(name.clone()))?;
                if let Some(there) = self.place(*here).and_then(|p| p.exit(*direction)) {
                    next.locations.insert(name.clone(), there);
                }
            }
        }
        Ok(next)
    }

    /// Step a single body.
    pub fn step_one(&self, name: &str, action: Action) -> Result<World, SimError> {
        let mut actions = BTreeMap::new();
        actions.insert(name.to_string(), action);
        self.step(&actions)
    }
}
