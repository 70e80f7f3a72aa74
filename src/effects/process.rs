//! Repeating effects.
//!
//! A `Process` runs an optional setup effect once, then its main effects for
//! as long as its stop condition holds, then an optional teardown. Attacks
//! are processes with a `DefenseCheck`: setup lets the victim reveal a
//! reaction, and a revealed reaction stops the main loop before it starts.
//!
//! ## Termination
//!
//! Each `StopCondition` reads only the game state and the process's own
//! counters, and each one is driven towards false by the main effects it is
//! paired with: `Once` by the iteration counter, `HandAbove` by the victim
//! discarding, `DrawUntilHandSize` by pieces leaving deck and discard, and
//! `DiscardPerEmptyPile` by the iteration counter and a shrinking hand.

use tracing::trace;

use crate::cards::CardKind;
use crate::core::{EngineError, GameState, PlayerId};
use crate::decisions::Decision;
use crate::policy::Seats;

use super::effect::{Effect, ProcessUpdate};
use super::resolver::{apply, Feedback};

/// When a process keeps iterating.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopCondition {
    /// Exactly one iteration.
    Once,
    /// While the actor holds more than this many cards.
    HandAbove(usize),
    /// While the hand is below this size and deck or discard has cards.
    DrawUntilHandSize(usize),
    /// One iteration per empty supply pile, re-read every iteration, while
    /// the hand is not empty.
    DiscardPerEmptyPile,
}

impl StopCondition {
    fn holds(&self, state: &GameState, actor: PlayerId, iterations: usize) -> bool {
        let a = state.actor(actor);
        match *self {
            StopCondition::Once => iterations == 0,
            StopCondition::HandAbove(limit) => a.hand.len() > limit,
            StopCondition::DrawUntilHandSize(size) => {
                a.hand.len() < size && a.deck.len() + a.discard.len() > 0
            }
            StopCondition::DiscardPerEmptyPile => {
                iterations < state.n_empty_piles && !a.hand.is_empty()
            }
        }
    }
}

/// A reaction the victim may reveal to be unaffected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DefenseCheck {
    pub reaction: CardKind,
}

impl Default for DefenseCheck {
    fn default() -> Self {
        Self { reaction: CardKind::Moat }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Counters {
    immunity: bool,
    iterations: usize,
}

/// Setup, repeated main effects, teardown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Process {
    pub actor: PlayerId,
    pub setup: Option<Effect>,
    pub main: Vec<Effect>,
    pub teardown: Option<Effect>,
    pub stop: StopCondition,
    pub defense: Option<DefenseCheck>,
    counters: Counters,
}

impl Process {
    #[must_use]
    pub fn new(actor: PlayerId, main: Vec<Effect>, stop: StopCondition) -> Self {
        Self {
            actor,
            setup: None,
            main,
            teardown: None,
            stop,
            defense: None,
            counters: Counters::default(),
        }
    }

    /// A process against `victim` that a revealed Moat stops.
    #[must_use]
    pub fn attack(victim: PlayerId, main: Vec<Effect>, stop: StopCondition) -> Self {
        Self::new(victim, main, stop).with_defense(DefenseCheck::default())
    }

    #[must_use]
    pub fn with_setup(mut self, setup: Effect) -> Self {
        self.setup = Some(setup);
        self
    }

    #[must_use]
    pub fn with_teardown(mut self, teardown: Effect) -> Self {
        self.teardown = Some(teardown);
        self
    }

    #[must_use]
    pub fn with_defense(mut self, defense: DefenseCheck) -> Self {
        self.defense = Some(defense);
        self
    }

    /// Whether the main loop should run again.
    #[must_use]
    pub fn antecedent(&self, state: &GameState) -> bool {
        !self.counters.immunity && self.stop.holds(state, self.actor, self.counters.iterations)
    }

    /// Number of completed main iterations since the last run began.
    #[must_use]
    pub fn iterations(&self) -> usize {
        self.counters.iterations
    }

    fn absorb(&mut self, feedback: Feedback) {
        for update in feedback.updates {
            match update {
                ProcessUpdate::MarkImmunity => self.counters.immunity = true,
            }
        }
    }

    /// Run setup, the main loop, and teardown, then reset the counters.
    pub fn run(&mut self, state: &mut GameState, seats: &mut Seats) -> Result<(), EngineError> {
        self.counters = Counters::default();

        if let Some(defense) = self.defense {
            let check = Effect::initiate(self.actor, Decision::Immunity { reaction: defense.reaction });
            let feedback = apply(state, seats, &check)?;
            self.absorb(feedback);
        }
        if let Some(setup) = self.setup.clone() {
            let feedback = apply(state, seats, &setup)?;
            self.absorb(feedback);
        }

        while self.antecedent(state) {
            for effect in self.main.clone() {
                let feedback = apply(state, seats, &effect)?;
                self.absorb(feedback);
            }
            self.counters.iterations += 1;
        }
        trace!(
            actor = %self.actor,
            iterations = self.counters.iterations,
            immune = self.counters.immunity,
            "Process finished"
        );

        if let Some(teardown) = self.teardown.clone() {
            apply(state, seats, &teardown)?;
        }
        self.counters = Counters::default();
        Ok(())
    }
}
