//! Deciders: who picks among the offered consequences.
//!
//! The engine never knows whether a seat is a person, a scripted test, or a
//! search policy. It generates the choices, asks the seat's `Decider` for an
//! index, and bounds-checks the answer.
//!
//! - `RandomDecider`: Uniform over the choices, from its own RNG stream
//! - `FirstChoice`: Always index 0 (the pass or null option)
//! - `Scripted`: Replays a queue of indices
//! - `Echo`: Decorator that logs what was offered and chosen
//! - `Lookahead`: Decorator that takes game-ending wins and dodges losses,
//!   for gains and for the actions that lead to them

mod echo;
mod lookahead;
mod simple;

pub use echo::Echo;
pub use lookahead::Lookahead;
pub use simple::{FirstChoice, RandomDecider, Scripted};

use crate::core::{GameState, PlayerId, PlayerMap};
use crate::decisions::Decision;
use crate::effects::Consequence;

/// Picks one of the offered consequences.
pub trait Decider: Send {
    /// Index into `choices` of the consequence to apply.
    ///
    /// `choices` is never empty. An index out of range fails the resolution
    /// with `EngineError::InvalidSelection`.
    fn select(&mut self, state: &GameState, choices: &[Consequence], decision: &Decision) -> usize;

    /// Called once when the decider is seated as `seat`.
    fn take_seat(&mut self, _seat: PlayerId) {}
}

impl<D: Decider + ?Sized> Decider for Box<D> {
    fn select(&mut self, state: &GameState, choices: &[Consequence], decision: &Decision) -> usize {
        (**self).select(state, choices, decision)
    }

    fn take_seat(&mut self, seat: PlayerId) {
        (**self).take_seat(seat);
    }
}

/// One decider per seat.
pub type Seats = PlayerMap<Box<dyn Decider>>;

/// Seats from deciders listed in seat order. Each decider is told its seat.
#[must_use]
pub fn seats(mut deciders: Vec<Box<dyn Decider>>) -> Seats {
    for (seat, decider) in PlayerId::all(deciders.len()).zip(deciders.iter_mut()) {
        decider.take_seat(seat);
    }
    PlayerMap::from_vec(deciders)
}
