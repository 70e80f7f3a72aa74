//! Core engine types: entities, players, actors, state, RNG, configuration.
//!
//! Everything above this module (decisions, heuristics, deciders, sessions)
//! reads and mutates a `GameState` through the primitives defined here.

pub mod actor;
pub mod config;
pub mod entity;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use actor::{Actor, ActorKind, Standing};
pub use config::{GameConfig, HAND_SIZE, KINGDOM_SIZE, MAX_TURNS, STARTING_COPPER, STARTING_ESTATE};
pub use entity::{EntityAllocator, EntityId};
pub use error::{ConfigError, EngineError};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use state::{GameState, Phase, EMPTY_PILES_TO_END};
