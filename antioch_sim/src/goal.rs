//! Goals, scored against a world.

use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::world::World;

/// Something an agent wants to be true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Goal {
    /// `subject` is at the place named `place`.
    IsIn { subject: String, place: String },
    /// `subject` is well rested.
    HasLowFatigue { subject: String },
}

impl Goal {
    pub fn is_in(subject: impl Into<String>, place: impl Into<String>) -> Self {
        Goal::IsIn {
            subject: subject.into(),
            place: place.into(),
        }
    }

    pub fn has_low_fatigue(subject: impl Into<String>) -> Self {
        Goal::HasLowFatigue {
            subject: subject.into(),
        }
    }

    /// How satisfied the goal is in `world`, from 0.0 upward.
    pub fn satisfaction(&self, world: &World) -> Result<f64, SimError> {
        match self {
            Goal::IsIn { subject, place } => {
                let here = world.location_of(subject)?;
                Ok(if here.name == *place { 1.0 } else { 0.0 })
            }
            Goal::HasLowFatigue { subject } => {
                let fatigue = world.body(subject)?.fatigue;
                Ok((1.0 - fatigue).max(0.0))
            }
        }
    }
}
