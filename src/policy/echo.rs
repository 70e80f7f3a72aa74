//! Logging decorator.

use tracing::info;

use crate::core::{GameState, PlayerId};
use crate::decisions::Decision;
use crate::effects::Consequence;

use super::Decider;

/// Logs every offered and selected consequence, then defers to `inner`.
///
/// Wrapping a seat in `Echo` never changes what it selects.
#[derive(Clone, Debug)]
pub struct Echo<D> {
    label: String,
    inner: D,
}

impl<D: Decider> Echo<D> {
    #[must_use]
    pub fn new(label: impl Into<String>, inner: D) -> Self {
        Self { label: label.into(), inner }
    }

    #[must_use]
    pub fn inner(&self) -> &D {
        &self.inner
    }
}

impl<D: Decider> Decider for Echo<D> {
    fn select(&mut self, state: &GameState, choices: &[Consequence], decision: &Decision) -> usize {
        info!(seat = %self.label, ?decision, "Choices offered");
        for (index, choice) in choices.iter().enumerate() {
            info!(seat = %self.label, "  [{index}] {choice}");
        }

        let index = self.inner.select(state, choices, decision);
        if let Some(choice) = choices.get(index) {
            info!(seat = %self.label, index, "Chose to {choice}");
        }
        index
    }

    fn take_seat(&mut self, seat: PlayerId) {
        self.inner.take_seat(seat);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, Phase};
    use crate::policy::Scripted;

    #[test]
    fn test_echo_preserves_selection() {
        let state = GameState::new(&GameConfig::new(2)).unwrap();
        let choices = vec![Consequence::pass(Phase::Action), Consequence::null()];
        let mut echo = Echo::new("Player 0", Scripted::new([1, 5]));

        assert_eq!(echo.select(&state, &choices, &Decision::ActionPhase), 1);
        assert_eq!(echo.select(&state, &choices, &Decision::ActionPhase), 5);
        assert_eq!(echo.inner().remaining(), 0);
    }
}
