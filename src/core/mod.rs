//! Core engine types: ids, zones, resources, errors, RNG, configuration, state.
//!
//! Everything here is shared by the zone store, the effect compiler and the
//! resolution engine. None of it knows about abilities beyond the error type.

pub mod entity;
pub mod config;
pub mod error;
pub mod resources;
pub mod rng;
pub mod state;

pub use entity::InstanceId;
pub use config::{EngineConfig, TriggerOrder, Zone};
pub use error::{EngineError, Result};
pub use resources::{Element, ResourceCost, ResourcePool};
pub use rng::{shuffle, GameRng, GameRngState, RandomSource, ScriptedSource};
pub use state::GameState;
