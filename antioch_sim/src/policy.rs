//! Policies: short fixed sequences of actions.

use serde::{Deserialize, Serialize};

use crate::world::Action;

/// A plan started at `start_time`. Past its end, the last action repeats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    pub sequence: Vec<Action>,
    pub start_time: u64,
}

impl Policy {
    pub fn new(sequence: Vec<Action>, start_time: u64) -> Self {
        Self {
            sequence,
            start_time,
        }
    }

    /// The action for `time`. Times before the start use the first action.
    pub fn act(&self, time: u64) -> Option<Action> {
        let index = time.saturating_sub(self.start_time) as usize;
        let index = index.min(self.sequence.len().saturating_sub(1));
        self.sequence.get(index).copied()
    }
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = self
            .sequence
            .iter()
            .map(Action::summary)
            .collect::<Vec<_>>()
            .join(" then ");
        let mut chars = text.chars();
        match chars.next() {
            Some(first) => write!(f, "{}{}", first.to_uppercase(), chars.as_str()),
            None => Ok(()),
        }
    }
}
