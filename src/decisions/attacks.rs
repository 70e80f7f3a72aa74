//! Attack cards and the sub-decisions they force on their victims.
//!
//! Every attack yields exactly one consequence holding one attack process
//! per opponent, visited in turn order starting after the attacker. Each
//! process first offers the victim a chance to reveal Moat.

use crate::cards::{CardKind, Piece};
use crate::combinatorics::get_pieces;
use crate::core::{GameState, PlayerId};
use crate::decisions::Decision;
use crate::effects::{Consequence, ConsequenceKind, Effect, Process, ProcessUpdate, Step, StopCondition};
use crate::zones::ZoneKind;

/// One attack process per opponent, each running `decision` for its victim.
fn attack_steps(state: &GameState, attacker: PlayerId, decision: Decision, stop: StopCondition) -> Vec<Step> {
    state
        .opponents(attacker)
        .into_iter()
        .map(|victim| Process::attack(victim, vec![Effect::initiate(victim, decision)], stop).into())
        .collect()
}

/// Gain `kind` to `destination` if any remain, then attack.
fn gain_and_attack(
    state: &GameState,
    actor: PlayerId,
    kind: CardKind,
    destination: ZoneKind,
    decision: Decision,
) -> Consequence {
    let (kind, mut steps) = match state.supply_top(kind) {
        Some(gained) => (
            ConsequenceKind::Acquisition { gained },
            vec![Effect::gain_to(actor, gained, destination).into()],
        ),
        None => (ConsequenceKind::Generic, vec![Effect::DoNothing.into()]),
    };
    steps.extend(attack_steps(state, actor, decision, StopCondition::Once));
    Consequence::new(kind, steps)
}

/// Gain a Silver onto the deck; each opponent topdecks a victory card.
pub(super) fn bureaucrat(state: &GameState, actor: PlayerId) -> Vec<Consequence> {
    vec![gain_and_attack(state, actor, CardKind::Silver, ZoneKind::Deck, Decision::BureaucratReveal)
        .with_message("gain a Silver onto the deck and attack with Bureaucrat")]
}

/// Reveal and topdeck a victory card, or reveal the whole hand without one.
pub(super) fn bureaucrat_reveal(state: &GameState, actor: PlayerId) -> Vec<Consequence> {
    let hand = &state.actor(actor).hand;
    if hand.is_empty() {
        return vec![Consequence::null()];
    }

    let victory = get_pieces(hand, true, |piece| piece.is_victory());
    if victory.is_empty() {
        let reveal = hand.iter().map(|&piece| Effect::reveal(actor, piece));
        return vec![Consequence::generic(reveal).with_message("reveal a hand with no victory cards")];
    }
    victory
        .into_iter()
        .map(|piece| {
            Consequence::generic([Effect::reveal(actor, piece), Effect::topdeck(actor, piece, ZoneKind::Hand)])
        })
        .collect()
}

/// Each opponent discards down to three cards.
pub(super) fn militia(state: &GameState, actor: PlayerId) -> Vec<Consequence> {
    let steps = attack_steps(state, actor, Decision::MilitiaDiscard, StopCondition::HandAbove(3));
    vec![Consequence::new(ConsequenceKind::Generic, steps).with_message("attack with Militia")]
}

pub(super) fn militia_discard(state: &GameState, actor: PlayerId) -> Vec<Consequence> {
    super::kingdom::discard_one(state, actor)
}

/// Gain a Gold; each opponent reveals two cards and loses a treasure.
pub(super) fn bandit(state: &GameState, actor: PlayerId) -> Vec<Consequence> {
    vec![gain_and_attack(state, actor, CardKind::Gold, ZoneKind::Discard, Decision::BanditReveal)
        .with_message("gain a Gold and attack with Bandit")]
}

fn bandit_can_trash(piece: &Piece) -> bool {
    piece.is_treasure() && piece.kind != CardKind::Copper
}

/// Trash a revealed non-Copper treasure and discard the rest.
pub(super) fn bandit_reveal(state: &GameState, actor: PlayerId) -> Vec<Consequence> {
    let top = state.actor(actor).deck.top_n(2);
    let reveal = |effects: Vec<Effect>| {
        Consequence::generic(top.iter().map(|&piece| Effect::reveal(actor, piece)).chain(effects))
    };

    match top.as_slice() {
        [] => vec![Consequence::null()],
        [only] => {
            let piece = *only;
            let effect = if bandit_can_trash(&piece) {
                Effect::Trash { actor, piece, source: ZoneKind::Deck }
            } else {
                Effect::Discard { actor, piece, source: ZoneKind::Deck }
            };
            vec![reveal(vec![effect])]
        }
        [first, second, ..] => {
            let trashable = get_pieces(top.iter(), true, bandit_can_trash);
            if trashable.is_empty() {
                let pieces = [*first, *second].into_iter().collect();
                return vec![reveal(vec![Effect::DiscardPieces { actor, pieces, source: ZoneKind::Deck }])];
            }
            trashable
                .into_iter()
                .map(|lost| {
                    let other = if lost == *first { *second } else { *first };
                    reveal(vec![
                        Effect::Trash { actor, piece: lost, source: ZoneKind::Deck },
                        Effect::Discard { actor, piece: other, source: ZoneKind::Deck },
                    ])
                })
                .collect()
        }
    }
}

/// Each opponent gains a Curse.
pub(super) fn witch(state: &GameState, actor: PlayerId) -> Vec<Consequence> {
    let steps = attack_steps(state, actor, Decision::WitchCurse, StopCondition::Once);
    vec![Consequence::new(ConsequenceKind::Generic, steps).with_message("attack with Witch")]
}

pub(super) fn witch_curse(state: &GameState, actor: PlayerId) -> Vec<Consequence> {
    match state.supply_top(CardKind::Curse) {
        Some(curse) => vec![Consequence::acquisition(curse, [Effect::gain(actor, curse)])],
        None => vec![Consequence::null()],
    }
}

/// Reveal `reaction` to become immune; without one the only option is to
/// take the attack.
pub(super) fn immunity(state: &GameState, actor: PlayerId, reaction: CardKind) -> Vec<Consequence> {
    let defense = get_pieces(&state.actor(actor).hand, true, |piece| piece.kind == reaction);
    match defense.first() {
        Some(&piece) => vec![Consequence::generic([
            Effect::reveal(actor, piece),
            Effect::Update(ProcessUpdate::MarkImmunity),
        ])],
        None => vec![Consequence::null().with_message("fail to defend")],
    }
}
