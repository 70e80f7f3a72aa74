//! Deciders that ignore the game state.

use std::collections::VecDeque;

use crate::core::{GameRng, GameState};
use crate::decisions::Decision;
use crate::effects::Consequence;

use super::Decider;

/// Uniformly random choice.
#[derive(Clone, Debug)]
pub struct RandomDecider {
    rng: GameRng,
}

impl RandomDecider {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { rng: GameRng::new(seed) }
    }

    /// A decider drawing from its own stream of `rng`.
    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl Decider for RandomDecider {
    fn select(&mut self, _state: &GameState, choices: &[Consequence], _decision: &Decision) -> usize {
        self.rng.gen_index(choices.len())
    }
}

/// Always the first choice: end the phase, or do nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstChoice;

impl Decider for FirstChoice {
    fn select(&mut self, _state: &GameState, _choices: &[Consequence], _decision: &Decision) -> usize {
        0
    }
}

/// Replays a fixed queue of indices, then falls back to the first choice.
#[derive(Clone, Debug, Default)]
pub struct Scripted {
    queue: VecDeque<usize>,
}

impl Scripted {
    #[must_use]
    pub fn new(indices: impl IntoIterator<Item = usize>) -> Self {
        Self { queue: indices.into_iter().collect() }
    }

    /// Indices not yet used.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl Decider for Scripted {
    fn select(&mut self, _state: &GameState, _choices: &[Consequence], _decision: &Decision) -> usize {
        self.queue.pop_front().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, Phase};

    fn choices() -> Vec<Consequence> {
        vec![Consequence::pass(Phase::Buy), Consequence::null(), Consequence::null()]
    }

    #[test]
    fn test_random_is_seeded() {
        let state = GameState::new(&GameConfig::new(2)).unwrap();
        let mut a = RandomDecider::new(9);
        let mut b = RandomDecider::new(9);
        for _ in 0..20 {
            let i = a.select(&state, &choices(), &Decision::BuyPhase);
            assert!(i < 3);
            assert_eq!(i, b.select(&state, &choices(), &Decision::BuyPhase));
        }
    }

    #[test]
    fn test_scripted_falls_back_to_first() {
        let state = GameState::new(&GameConfig::new(2)).unwrap();
        let mut scripted = Scripted::new([2, 1]);
        assert_eq!(scripted.select(&state, &choices(), &Decision::BuyPhase), 2);
        assert_eq!(scripted.remaining(), 1);
        assert_eq!(scripted.select(&state, &choices(), &Decision::BuyPhase), 1);
        assert_eq!(scripted.select(&state, &choices(), &Decision::BuyPhase), 0);
        assert_eq!(FirstChoice.select(&state, &choices(), &Decision::BuyPhase), 0);
    }
}
