//! # Dialogue Core
//!
//! Tomar's side of the conversation. This crate interfaces with
//! `spell_rules`, keeps the familiar's beliefs and moods, and walks a
//! declarative strategy tree to decide what Tomar says next.
//!
//! ## Core Components
//!
//! - **mind**: beliefs, confusion and impatience, and the lines Tomar falls back on
//! - **strategy**: the chain/fork of conversation stages and the binding-test script
//! - **turn**: one reaction of the familiar to one line of speech
//! - **session**: the play loop tying spells, the world and the mind together
//! - **events**: what a line of speech means to the familiar
//!
//! ## Design Philosophy
//!
//! - **Declarative**: stages are data with plain-function predicates and responders
//! - **Rules-Agnostic**: the mind reads the world but only changes it through actions
//! - **Scriptable**: every session runs against a `Console`, so tests replay canned speech

pub mod error;
pub mod events;
pub mod mind;
pub mod session;
pub mod strategy;
pub mod testing;
pub mod turn;

pub use error::*;
pub use events::*;
pub use mind::*;
pub use session::*;
pub use strategy::*;
pub use turn::*;
