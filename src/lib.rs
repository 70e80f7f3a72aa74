//! # deck-engine
//!
//! Rules engine for a Dominion-style deck-building game.
//!
//! At every decision point the engine enumerates every legal move for a
//! player, hands the list to that seat's decider, and applies the move it
//! picked. Card rules (multi-step interactions, attacks and their defense,
//! optional and conditional effects) are expressed as pure choice
//! generators over the game state.
//!
//! ## Design Principles
//!
//! 1. **Generate, then apply**: Choices are built from the state without
//!    touching it; exactly one is applied. Nothing is ever rolled back.
//!
//! 2. **Never stuck**: Every decision offers at least one choice, so the turn
//!    loop and every process always have a legal move.
//!
//! 3. **Deciders are interchangeable**: Random, scripted, look-ahead and
//!    human seats share one trait; logging wraps a decider and never changes
//!    what it picks.
//!
//! 4. **Explicit randomness**: All shuffles draw from the seeded `GameRng`
//!    in the state, so a seed and a set of deciders replay a game exactly.
//!
//! ## Modules
//!
//! - `core`: Entity IDs, players, actors, state, RNG, configuration, errors
//! - `zones`: Ordered piece containers and zone names
//! - `cards`: The card catalogue, card IDs, pieces, registry
//! - `combinatorics`: Partition, classify, subset enumeration
//! - `effects`: Effects, processes, consequences, and the resolution loop
//! - `decisions`: Choice generators for phases and cards
//! - `rules`: Ranking, look-ahead heuristics, game results
//! - `policy`: The `Decider` trait and its implementations
//! - `session`: Turn scheduler and final placements

pub mod cards;
pub mod combinatorics;
pub mod core;
pub mod decisions;
pub mod effects;
pub mod policy;
pub mod rules;
pub mod session;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    Actor, ActorKind, ConfigError, EngineError, EntityId, GameConfig, GameRng, GameState, Phase, PlayerId,
    PlayerMap, Standing,
};

pub use crate::zones::{Zone, ZoneKind};

pub use crate::cards::{CardId, CardKind, CardRegistry, Piece};

pub use crate::effects::{
    enact, expand_choices, request_input, resolve, resolve_effects, Consequence, ConsequenceClass,
    ConsequenceKind, Effect, Process, StopCondition,
};

pub use crate::decisions::Decision;

pub use crate::rules::GameResult;

pub use crate::policy::{Decider, Echo, FirstChoice, Lookahead, RandomDecider, Scripted, Seats};

pub use crate::session::{Placement, Session, SessionBuilder};
