//! Turn scheduling around the engine.
//!
//! A `Session` owns one `GameState` and one decider per seat, and drives
//! the fixed turn order: Action, Treasure and Buy phases, then cleanup.

mod game;

pub use game::{Placement, Session, SessionBuilder};
