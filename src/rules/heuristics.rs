//! Look-ahead heuristics over the ranking rule.
//!
//! ## Hypothetical gains
//!
//! `would_win` and `would_win_outright` rank an actor as if a gain (and,
//! for a dependent acquisition, a loss) had already happened. The
//! adjustment lives only in the actor's scratch lists, held by a
//! `Hypothesis` guard that clears them when dropped. Zones and piles are
//! never touched, and an unwinding panic still clears the lists.
//!
//! ## Classification
//!
//! `classify_consequences` and `extract_acquisitions` bucket a choice list
//! by outcome category in a fixed priority order, with a final catch-all so
//! no choice is lost.
//!
//! ## Acts
//!
//! `evaluate_act` plays an action on a clone of the state and sorts the
//! choices of the card's own decision the way `evaluate_acquisitions` does,
//! so an action phase can be judged by what the card could gain next.

use crate::cards::Piece;
use crate::combinatorics::{classify, partition};
use crate::core::{Actor, GameState, PlayerId};
use crate::effects::{Consequence, ConsequenceClass, ConsequenceKind};
use crate::zones::ZoneKind;

/// Whether `a` ranks strictly above `b`.
#[must_use]
pub fn would_defeat(a: &Actor, b: &Actor) -> bool {
    a.standing() > b.standing()
}

/// Whether `a` ranks at least level with `b`.
#[must_use]
pub fn would_defeat_or_tie(a: &Actor, b: &Actor) -> bool {
    a.standing() >= b.standing()
}

/// Scoped hypothetical adjustment of one actor's collection.
pub struct Hypothesis<'a> {
    actor: &'a Actor,
}

impl<'a> Hypothesis<'a> {
    #[must_use]
    pub fn new(actor: &'a Actor, gained: Piece, lost: Option<Piece>) -> Self {
        actor.hypothesise(gained, lost);
        Self { actor }
    }
}

impl Drop for Hypothesis<'_> {
    fn drop(&mut self) {
        self.actor.clear_hypothesis();
    }
}

fn would_rank(
    state: &GameState,
    actor: PlayerId,
    gained: Piece,
    lost: Option<Piece>,
    beats: fn(&Actor, &Actor) -> bool,
) -> bool {
    let me = state.actor(actor);
    let _hypothesis = Hypothesis::new(me, gained, lost);
    state.opponents(actor).into_iter().all(|other| beats(me, state.actor(other)))
}

/// Whether `actor` would rank strictly above every opponent after gaining
/// `gained` (and losing `lost`).
#[must_use]
pub fn would_win_outright(state: &GameState, actor: PlayerId, gained: Piece, lost: Option<Piece>) -> bool {
    would_rank(state, actor, gained, lost, would_defeat)
}

/// Whether `actor` would rank at least level with every opponent after the
/// hypothetical gain.
#[must_use]
pub fn would_win(state: &GameState, actor: PlayerId, gained: Piece, lost: Option<Piece>) -> bool {
    would_rank(state, actor, gained, lost, would_defeat_or_tie)
}

/// Whether applying `consequence` would end the game by emptying a pile.
#[must_use]
pub fn acquisition_ends_game(state: &GameState, consequence: &Consequence) -> bool {
    consequence.gained().is_some_and(|gained| state.gain_ends_game(&gained))
}

/// Choices bucketed by category.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConsequenceBuckets<'a> {
    pub passes: Vec<&'a Consequence>,
    pub nulls: Vec<&'a Consequence>,
    pub purchases: Vec<&'a Consequence>,
    pub dependent_acquisitions: Vec<&'a Consequence>,
    pub acquisitions: Vec<&'a Consequence>,
    pub other: Vec<&'a Consequence>,
}

/// Bucket choices into pass, null, purchase, dependent acquisition, other
/// acquisition, and everything else, in that priority.
#[must_use]
pub fn classify_consequences(choices: &[Consequence]) -> ConsequenceBuckets<'_> {
    const ORDER: [ConsequenceClass; 5] = [
        ConsequenceClass::Pass,
        ConsequenceClass::Null,
        ConsequenceClass::Purchase,
        ConsequenceClass::DependentAcquisition,
        ConsequenceClass::Acquisition,
    ];
    let mut buckets = classify(&ORDER, choices, |class, choice| choice.satisfies(*class)).into_iter();
    let mut next = || buckets.next().unwrap_or_default();
    ConsequenceBuckets {
        passes: next(),
        nulls: next(),
        purchases: next(),
        dependent_acquisitions: next(),
        acquisitions: next(),
        other: next(),
    }
}

/// Choices bucketed by whether they acquire anything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AcquisitionBuckets<'a> {
    pub passes: Vec<&'a Consequence>,
    pub nulls: Vec<&'a Consequence>,
    /// Every kind of acquisition, purchases included.
    pub acquisitions: Vec<&'a Consequence>,
    pub other: Vec<&'a Consequence>,
}

#[must_use]
pub fn extract_acquisitions(choices: &[Consequence]) -> AcquisitionBuckets<'_> {
    const ORDER: [ConsequenceClass; 3] =
        [ConsequenceClass::Pass, ConsequenceClass::Null, ConsequenceClass::Acquisition];
    let mut buckets = classify(&ORDER, choices, |class, choice| choice.satisfies(*class)).into_iter();
    let mut next = || buckets.next().unwrap_or_default();
    AcquisitionBuckets { passes: next(), nulls: next(), acquisitions: next(), other: next() }
}

/// Split the action plays among `choices` into those that may gain a card
/// (and so end the game) and those that cannot.
#[must_use]
pub fn classify_acts(choices: &[Consequence]) -> (Vec<&Consequence>, Vec<&Consequence>) {
    let acts = choices.iter().filter(|choice| choice.satisfies(ConsequenceClass::Act));
    partition(acts, |choice| match choice.kind {
        ConsequenceKind::Act { action } => action.is_potential_terminator(),
        _ => false,
    })
}

/// Indices of acquisitions sorted by how they would leave the game.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AcquisitionOutcomes {
    /// Ends the game with the actor strictly ahead.
    pub wins: Vec<usize>,
    /// Ends the game with the actor tied for first.
    pub ties: Vec<usize>,
    /// Ends the game with the actor behind.
    pub losses: Vec<usize>,
    /// Does not end the game.
    pub neutrals: Vec<usize>,
}

/// Sort the acquisitions among `choices` by game-ending outcome.
///
/// Non-acquisitions are left out. Indices refer to `choices`.
#[must_use]
pub fn evaluate_acquisitions(state: &GameState, actor: PlayerId, choices: &[Consequence]) -> AcquisitionOutcomes {
    let mut outcomes = AcquisitionOutcomes::default();
    for (index, choice) in choices.iter().enumerate() {
        let Some(gained) = choice.gained() else { continue };
        let bucket = if !state.gain_ends_game(&gained) {
            &mut outcomes.neutrals
        } else if would_win_outright(state, actor, gained, choice.lost()) {
            &mut outcomes.wins
        } else if would_win(state, actor, gained, choice.lost()) {
            &mut outcomes.ties
        } else {
            &mut outcomes.losses
        };
        bucket.push(index);
    }
    outcomes
}

/// How the choices behind one action would leave the game.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActOutlook {
    /// Follow-up acquisitions by game-ending outcome.
    pub outcomes: AcquisitionOutcomes,
    /// Number of follow-up choices, acquisitions or not.
    pub n_choices: usize,
}

impl ActOutlook {
    #[must_use]
    pub fn can_win(&self) -> bool {
        !self.outcomes.wins.is_empty()
    }

    #[must_use]
    pub fn can_tie(&self) -> bool {
        !self.outcomes.ties.is_empty()
    }

    /// Every follow-up ends the game with the actor behind.
    #[must_use]
    pub fn forces_loss(&self) -> bool {
        self.n_choices > 0 && self.outcomes.losses.len() == self.n_choices
    }
}

/// Evaluate the decision `action` opens as if `actor` had just played it
/// from hand.
///
/// Only the card's own decision is looked at; its other effects are not
/// applied. Actions without a decision, or not in hand, have an empty
/// outlook.
#[must_use]
pub fn evaluate_act(state: &GameState, actor: PlayerId, action: &Piece) -> ActOutlook {
    let Some(decision) = action.kind.decision() else {
        return ActOutlook::default();
    };
    let mut scratch = state.clone();
    if scratch.play(actor, action, ZoneKind::Hand, true).is_err() {
        return ActOutlook::default();
    }
    if let Some(n) = decision.deck_requirement() {
        scratch.prepare_deck(actor, n);
    }
    let choices = decision.generate_choices(&scratch, actor);
    ActOutlook { outcomes: evaluate_acquisitions(&scratch, actor, &choices), n_choices: choices.len() }
}
