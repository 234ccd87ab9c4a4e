//! # Antioch Sim
//!
//! Alice in Antioch: a single agent that plans by imagining. The agent keeps
//! its own model of the world, samples candidate policies, rolls each one
//! forward in its imagination, and follows whichever scored best.
//!
//! - **world**: places, bodies, and the pure step function
//! - **goal**: what the agent wants, scored against a world
//! - **policy**: short fixed action sequences
//! - **mind**: Monte-Carlo policy search over the world model
//! - **simulation**: the Alice scenario and its narration

pub mod config;
pub mod error;
pub mod goal;
pub mod mind;
pub mod policy;
pub mod simulation;
pub mod world;

pub use config::*;
pub use error::*;
pub use goal::*;
pub use mind::*;
pub use policy::*;
pub use simulation::*;
pub use world::*;
