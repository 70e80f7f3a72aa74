//! Resolution loop: turning decisions into applied state changes.
//!
//! ```text
//! resolve ──► expand_choices ──► request_input ──► enact ──► apply (per effect)
//!                                                              │
//!                                   Initiate ◄─────────────────┘ (nested resolve)
//! ```
//!
//! Choices are generated from the state but never applied to it until one
//! has been selected, so there is nothing to roll back. Nested choice points
//! (an attack asking its victim what to discard) are ordinary recursive
//! calls; recursion depth is the nesting depth of card interactions.

use smallvec::SmallVec;
use tracing::{debug, instrument, trace};

use crate::cards::Piece;
use crate::core::{EngineError, GameState, Phase, PlayerId};
use crate::decisions::Decision;
use crate::policy::Seats;
use crate::zones::ZoneKind;

use super::consequence::{Consequence, Step};
use super::effect::{Effect, ProcessUpdate};

/// Updates raised while applying effects, for the enclosing process.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Feedback {
    pub updates: SmallVec<[ProcessUpdate; 2]>,
}

impl Feedback {
    fn merge(&mut self, other: Feedback) {
        self.updates.extend(other.updates);
    }
}

/// Every legal outcome of `decision` for `actor`.
#[must_use]
pub fn expand_choices(state: &GameState, actor: PlayerId, decision: Decision) -> Vec<Consequence> {
    decision.generate_choices(state, actor)
}

/// Generate the choices and have `decider`'s seat pick one.
pub fn request_input(
    state: &GameState,
    seats: &mut Seats,
    actor: PlayerId,
    decision: Decision,
    decider: PlayerId,
) -> Result<Consequence, EngineError> {
    let mut choices = expand_choices(state, actor, decision);
    if choices.is_empty() {
        return Err(EngineError::NoLegalChoices(decision));
    }

    let index = seats[decider].select(state, &choices, &decision);
    if index >= choices.len() {
        return Err(EngineError::InvalidSelection { index, available: choices.len() });
    }
    debug!(%actor, ?decision, choices = choices.len(), index, "Selected");
    Ok(choices.swap_remove(index))
}

/// Resolve `decision` for `actor` and apply the selected consequence.
///
/// Decisions that look at the top of the deck get a reshuffle first if the
/// deck is short, so their generators can stay pure.
#[instrument(level = "trace", skip(state, seats), fields(%actor))]
pub fn resolve(
    state: &mut GameState,
    seats: &mut Seats,
    actor: PlayerId,
    decision: Decision,
    decider: Option<PlayerId>,
) -> Result<Feedback, EngineError> {
    if let Some(n) = decision.deck_requirement() {
        state.prepare_deck(actor, n);
    }
    let consequence = request_input(state, seats, actor, decision, decider.unwrap_or(actor))?;
    enact(state, seats, consequence)
}

/// Apply every step of a consequence, in order.
pub fn enact(state: &mut GameState, seats: &mut Seats, consequence: Consequence) -> Result<Feedback, EngineError> {
    let mut feedback = Feedback::default();
    for step in consequence.steps {
        match step {
            Step::Effect(effect) => feedback.merge(apply(state, seats, &effect)?),
            Step::Process(mut process) => process.run(state, seats)?,
        }
    }
    Ok(feedback)
}

/// Apply a played card's simple effects, then resolve its decision.
pub fn resolve_effects(
    state: &mut GameState,
    seats: &mut Seats,
    actor: PlayerId,
    piece: &Piece,
) -> Result<(), EngineError> {
    for effect in piece.kind.simple_effects() {
        apply(state, seats, &effect)?;
    }
    if let Some(decision) = piece.kind.decision() {
        resolve(state, seats, actor, decision, None)?;
    }
    Ok(())
}

/// Apply one effect.
pub fn apply(state: &mut GameState, seats: &mut Seats, effect: &Effect) -> Result<Feedback, EngineError> {
    trace!(%effect, "Applying");
    match effect {
        Effect::AddCards { n } => state.draw(state.current_player, *n),
        Effect::AddActions { n } => state.add_actions(*n),
        Effect::AddBuys { n } => state.add_buys(*n),
        Effect::AddCoins { n } => state.add_coins(*n),
        Effect::AddMerchantBonus => state.add_merchant_silver_bonus(),
        Effect::PlaySilver => state.add_silver(),
        Effect::EndPhase { phase } => state.end_phase(*phase),

        Effect::Draw { actor, n } => state.draw(*actor, *n),
        Effect::PrepareDeck { actor, n } => state.prepare_deck(*actor, *n),
        Effect::SwapTopCards { actor } => state.swap_top_cards(*actor),

        Effect::Gain { actor, piece, destination } => state.gain(*actor, piece, *destination)?,
        Effect::Buy { actor, piece } => state.buy(*actor, piece)?,

        Effect::Trash { actor, piece, source } => state.trash(*actor, piece, *source)?,
        Effect::TrashPieces { actor, pieces, source } => {
            for piece in pieces {
                state.trash(*actor, piece, *source)?;
            }
        }
        Effect::Discard { actor, piece, source } => state.discard(*actor, piece, *source)?,
        Effect::DiscardPieces { actor, pieces, source } => {
            for piece in pieces {
                state.discard(*actor, piece, *source)?;
            }
        }
        Effect::DiscardZone { actor, source } => state.discard_zone(*actor, *source),
        Effect::Topdeck { actor, piece, source } => state.topdeck(*actor, piece, *source)?,
        Effect::Put { actor, piece, destination, source } => {
            state.transfer(*actor, piece, *destination, *source)?;
        }
        Effect::SetAside { actor, piece, source } => state.set_aside(*actor, piece, *source)?,

        Effect::Play { actor, piece, source, free } => {
            state.play(*actor, piece, *source, *free)?;
            resolve_effects(state, seats, *actor, piece)?;
        }
        Effect::PlayTreasures { actor, pieces } => {
            for piece in pieces {
                state.transfer(*actor, piece, ZoneKind::Play, ZoneKind::Hand)?;
                resolve_effects(state, seats, *actor, piece)?;
            }
            state.end_phase(Phase::Treasure);
        }
        Effect::ResolveEffects { actor, piece } => resolve_effects(state, seats, *actor, piece)?,

        Effect::Reveal { .. } | Effect::DoNothing => {}

        Effect::Initiate { actor, decision, decider } => {
            return resolve(state, seats, *actor, *decision, *decider);
        }
        Effect::Update(update) => {
            let mut feedback = Feedback::default();
            feedback.updates.push(*update);
            return Ok(feedback);
        }
    }
    Ok(Feedback::default())
}
