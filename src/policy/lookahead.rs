//! Game-ending awareness on top of any decider.

use tracing::debug;

use crate::core::{GameState, PlayerId};
use crate::decisions::Decision;
use crate::effects::{Consequence, ConsequenceKind};
use crate::rules::{classify_acts, evaluate_act, evaluate_acquisitions, ActOutlook};

use super::Decider;

/// Takes a game-ending win or tie when one is offered, and refuses a
/// game-ending loss while anything else is available. Otherwise defers to
/// `inner`.
///
/// In the action phase the same applies one step early: an action whose
/// own choices include a winning gain is played, then one that can tie,
/// and an action whose every choice loses is avoided.
///
/// Outcomes are judged for the seat the decider was given by
/// [`seats`](super::seats). An unseated decider judges for the current
/// player.
#[derive(Clone, Debug)]
pub struct Lookahead<D> {
    seat: Option<PlayerId>,
    inner: D,
}

impl<D: Decider> Lookahead<D> {
    #[must_use]
    pub fn new(inner: D) -> Self {
        Self { seat: None, inner }
    }

    #[must_use]
    pub fn seat(&self) -> Option<PlayerId> {
        self.seat
    }
}

/// Outlooks of the action plays among `choices` that could gain a card,
/// keyed by index.
fn outlooks(state: &GameState, seat: PlayerId, choices: &[Consequence]) -> Vec<(usize, ActOutlook)> {
    let (terminators, _) = classify_acts(choices);
    terminators
        .into_iter()
        .filter_map(|choice| {
            let ConsequenceKind::Act { action } = choice.kind else { return None };
            let index = choices.iter().position(|other| std::ptr::eq(other, choice))?;
            Some((index, evaluate_act(state, seat, &action)))
        })
        .collect()
}

impl<D: Decider> Decider for Lookahead<D> {
    fn select(&mut self, state: &GameState, choices: &[Consequence], decision: &Decision) -> usize {
        let seat = self.seat.unwrap_or(state.current_player);
        let outcomes = evaluate_acquisitions(state, seat, choices);
        if let Some(&index) = outcomes.wins.first().or(outcomes.ties.first()) {
            debug!(%seat, index, "Taking a game-ending gain");
            return index;
        }

        let mut losses = outcomes.losses;
        if matches!(decision, Decision::ActionPhase) {
            let acts = outlooks(state, seat, choices);
            let best = acts
                .iter()
                .find(|(_, outlook)| outlook.can_win())
                .or_else(|| acts.iter().find(|(_, outlook)| outlook.can_tie()));
            if let Some(&(index, _)) = best {
                debug!(%seat, index, "Playing an action that can end the game");
                return index;
            }
            losses.extend(acts.iter().filter(|(_, outlook)| outlook.forces_loss()).map(|&(index, _)| index));
        }

        let index = self.inner.select(state, choices, decision);
        if !losses.contains(&index) {
            return index;
        }
        match (0..choices.len()).find(|i| !losses.contains(i)) {
            Some(safe) => {
                debug!(%seat, avoided = index, index = safe, "Avoiding a game-ending loss");
                safe
            }
            None => index,
        }
    }

    fn take_seat(&mut self, seat: PlayerId) {
        self.seat = Some(seat);
        self.inner.take_seat(seat);
    }
}
