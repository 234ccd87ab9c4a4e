//! An agent's mind: goals, a world model, and Monte-Carlo policy search.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use tracing::{debug, info};

use crate::config::SearchConfig;
use crate::error::SimError;
use crate::goal::Goal;
use crate::policy::Policy;
use crate::world::{Action, Sensation, World};

/// What the mind decided this tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    pub action: Action,
    /// Set when a new policy was chosen this tick.
    pub selected: Option<Policy>,
    pub surprise: f64,
}

/// A planning mind attached to the body named `name`.
#[derive(Debug, Clone)]
pub struct Mind {
    pub name: String,
    pub goals: Vec<Goal>,
    pub possible_actions: Vec<Action>,
    pub internal_clock: u64,
    pub policy: Option<Policy>,
    pub recent_policies: VecDeque<Policy>,
    /// The mind's belief about the world, itself included.
    pub world_model: World,
    config: SearchConfig,
    rng: StdRng,
}

impl Mind {
    pub fn new(name: impl Into<String>, world_model: World, config: SearchConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self {
            name: name.into(),
            goals: Vec::new(),
            possible_actions: Vec::new(),
            internal_clock: 0,
            policy: None,
            recent_policies: VecDeque::with_capacity(config.recent_policies),
            world_model,
            config,
            rng,
        }
    }

    pub fn with_goal(mut self, goal: Goal) -> Self {
        self.goals.push(goal);
        self
    }

    pub fn with_actions(mut self, actions: impl IntoIterator<Item = Action>) -> Self {
        self.possible_actions.extend(actions);
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Recent policies, then every ordered pair of possible actions.
    pub fn generate_possible_policies(&self) -> Vec<Policy> {
        let mut policies: Vec<Policy> = self.recent_policies.iter().cloned().collect();
        for first in &self.possible_actions {
            for second in &self.possible_actions {
                policies.push(Policy::new(vec![*first, *second], self.internal_clock));
            }
        }
        policies
    }

    /// Total satisfaction of every goal in `world`.
    pub fn satisfaction(&self, world: &World) -> Result<f64, SimError> {
        self.goals.iter().map(|goal| goal.satisfaction(world)).sum()
    }

    /// Roll `policy` forward `depth` steps from the world model and score it.
    ///
    /// Step `t` is weighted by `discount^(2^t)`.
    pub fn imagine(&self, policy: &Policy, depth: usize) -> Result<f64, SimError> {
        let mut world = self.world_model.clone();
        let mut reward = 0.0;
        let mut discount = self.config.discount;

        for t in 0..depth as u64 {
            let Some(action) = policy.act(self.internal_clock + t) else {
                break;
            };
            world = world.step_one(&self.name, action)?;
            reward += self.satisfaction(&world)? * discount;
            discount *= discount;
        }
        Ok(reward)
    }

    /// Bring the world model in line with what the body senses.
    ///
    /// Returns how surprising the sensation was: being somewhere unexpected
    /// always exceeds the threshold, fatigue drift counts at face value.
    pub fn update_from(&mut self, sensation: &Sensation) -> Result<f64, SimError> {
        let expected_place = self.world_model.location_of(&self.name)?.name.clone();
        let expected_fatigue = self.world_model.body(&self.name)?.fatigue;

        let mut surprise = (sensation.fatigue - expected_fatigue).abs();
        if expected_place != sensation.place {
            surprise += self.config.surprise_threshold + 1.0;
            self.world_model.relocate(&self.name, &sensation.place)?;
        }
        self.world_model.set_fatigue(&self.name, sensation.fatigue)?;
        Ok(surprise)
    }

    /// Sample policies at random, imagine each sample, and return the
    /// candidate with the best mean return. Ties go to the earlier candidate.
    fn search(&mut self) -> Result<Policy, SimError> {
        let candidates = self.generate_possible_policies();
        if candidates.is_empty() {
            return Err(SimError::NoActions(self.name.clone()));
        }

        let mut estimates: Vec<(u32, f64)> = vec![(0, 0.0); candidates.len()];
        for _ in 0..self.config.search_breadth {
            let index = self.rng.random_range(0..candidates.len());
            let score = self.imagine(&candidates[index], self.config.search_depth)?;
            let (samples, mean) = &mut estimates[index];
            *samples += 1;
            *mean += (score - *mean) / f64::from(*samples);
        }

        let mut best = 0;
        let mut best_mean = f64::NEG_INFINITY;
        for (index, (samples, mean)) in estimates.iter().enumerate() {
            if *samples > 0 && *mean > best_mean {
                best = index;
                best_mean = *mean;
            }
        }
        debug!(candidates = candidates.len(), best_mean, "policy search finished");
        Ok(candidates[best].clone())
    }

    /// Decide what to do this tick.
    pub fn act(&mut self, sensation: &Sensation) -> Result<Decision, SimError> {
        self.internal_clock += 1;

        let surprise = self.update_from(sensation)?;
        if self.policy.is_some() && surprise > self.config.surprise_threshold {
            debug!(surprise, "surprised, dropping policy");
            self.policy = None;
        }

        let mut selected = None;
        let policy = match self.policy.take() {
            Some(policy) => policy,
            None => {
                let policy = self.search()?;
                info!(agent = %self.name, policy = %policy, "selecting policy");
                if self.config.recent_policies > 0 {
                    if self.recent_policies.len() == self.config.recent_policies {
                        self.recent_policies.pop_front();
                    }
                    self.recent_policies.push_back(policy.clone());
                }
                selected = Some(policy.clone());
                policy
            }
        };

        let action = policy
            .act(self.internal_clock)
            .ok_or_else(|| SimError::NoActions(self.name.clone()))?;
        self.policy = Some(policy);

        // Expect the world to follow from our own action.
        self.world_model = self.world_model.step_one(&self.name, action)?;

        Ok(Decision {
            action,
            selected,
            surprise,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{Body, Direction};

    fn mind() -> Mind {
        let mut world = World::new();
        let antioch = world.add_place("in Antioch");
        let desert = world.add_place("in the desert, south of Antioch");
        world.connect(desert, Direction::North, antioch);
        world.insert_body(Body::new("Alice"), desert);

        Mind::new("Alice", world, SearchConfig::default())
            .with_goal(Goal::is_in("Alice", "in Antioch"))
            .with_goal(Goal::has_low_fatigue("Alice"))
            .with_actions([Action::Wait, Action::Go(Direction::North)])
    }

    #[test]
    fn test_generate_possible_policies() {
        let mut mind = mind();
        assert_eq!(mind.generate_possible_policies().len(), 4);

        mind.recent_policies
            .push_back(Policy::new(vec![Action::Wait], 0));
        let policies = mind.generate_possible_policies();
        assert_eq!(policies.len(), 5);
        assert_eq!(policies[0].sequence, vec![Action::Wait]);
    }

    #[test]
    fn test_imagine_prefers_heading_north() {
        let mind = mind();
        let north_then_wait = Policy::new(vec![Action::Go(Direction::North), Action::Wait], 0);
        let wait = Policy::new(vec![Action::Wait, Action::Wait], 0);

        let north_score = mind.imagine(&north_then_wait, 10).unwrap();
        let wait_score = mind.imagine(&wait, 10).unwrap();
        assert!(north_score > wait_score);

        // First step: in Antioch (1.0) and slightly tired (0.9), weighted 0.9
        let one_step = mind.imagine(&north_then_wait, 1).unwrap();
        assert!((one_step - 1.9 * 0.9).abs() < 1e-9);

        // The weight squares: 0.9, then 0.81, then 0.6561
        let two_steps = mind.imagine(&north_then_wait, 2).unwrap();
        assert!((two_steps - (1.9 * 0.9 + 1.9 * 0.81)).abs() < 1e-9);
        let three_steps = mind.imagine(&north_then_wait, 3).unwrap();
        assert!((three_steps - (1.9 * 0.9 + 1.9 * 0.81 + 1.9 * 0.6561)).abs() < 1e-9);
    }

    #[test]
    fn test_search_breaks_ties_by_order() {
        let east = Action::Go(Direction::East);
        let west = Action::Go(Direction::West);

        // Both directions are walls, so every candidate scores the same
        let mut east_first = mind();
        east_first.possible_actions = vec![east, west];
        assert_eq!(east_first.search().unwrap().sequence, vec![east, east]);

        let mut west_first = mind();
        west_first.possible_actions = vec![west, east];
        assert_eq!(west_first.search().unwrap().sequence, vec![west, west]);
    }

    #[test]
    fn test_act_selects_and_keeps_policy() {
        let mut mind = mind();
        let start = mind.world_model.sense("Alice").unwrap();

        let first = mind.act(&start).unwrap();
        assert_eq!(first.action, Action::Go(Direction::North));
        assert_eq!(
            first.selected.as_ref().map(|p| p.to_string()).as_deref(),
            Some("Go north then wait")
        );
        assert_eq!(mind.recent_policies.len(), 1);

        // The world went as expected, so the policy is kept
        let expected = mind.world_model.sense("Alice").unwrap();
        let second = mind.act(&expected).unwrap();
        assert_eq!(second.action, Action::Wait);
        assert!(second.selected.is_none());
        assert!(second.surprise < 1e-9);
    }

    #[test]
    fn test_surprise_forces_replanning() {
        let mut mind = mind();
        let start = mind.world_model.sense("Alice").unwrap();
        mind.act(&start).unwrap();

        // Teleported back to the desert
        let decision = mind.act(&start).unwrap();
        assert!(decision.surprise > mind.config().surprise_threshold);
        assert!(decision.selected.is_some());
        assert_eq!(decision.action, Action::Go(Direction::North));
    }

    #[test]
    fn test_no_actions() {
        let mut world = World::new();
        let nowhere = world.add_place("nowhere");
        world.insert_body(Body::new("Nobody"), nowhere);
        let sensation = world.sense("Nobody").unwrap();

        let mut mind = Mind::new("Nobody", world, SearchConfig::default());
        assert!(matches!(
            mind.act(&sensation),
            Err(SimError::NoActions(name)) if name == "Nobody"
        ));
    }

    #[test]
    fn test_same_seed_same_choice() {
        let mut a = mind();
        let mut b = mind();
        let start = a.world_model.sense("Alice").unwrap();

        assert_eq!(a.act(&start).unwrap(), b.act(&start).unwrap());
    }
}
