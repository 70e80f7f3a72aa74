//! Cards that look at the top of the deck.
//!
//! The resolver reshuffles before these run (see `Decision::deck_requirement`),
//! so an empty deck here means deck and discard are both exhausted.

use crate::core::{GameState, PlayerId};
use crate::decisions::Decision;
use crate::effects::{Consequence, ConsequenceKind, Effect, PieceList, Process, StopCondition};
use crate::zones::ZoneKind;

/// Hand size Library draws up to.
const LIBRARY_HAND_SIZE: usize = 7;

/// Discard the top card, or play it for free if it is an action.
pub(super) fn vassal(state: &GameState, actor: PlayerId) -> Vec<Consequence> {
    let Some(&top) = state.actor(actor).deck.top() else {
        return vec![Consequence::null()];
    };

    let mut choices = vec![Consequence::generic([
        Effect::reveal(actor, top),
        Effect::Discard { actor, piece: top, source: ZoneKind::Deck },
    ])];
    if top.is_action() {
        choices.push(Consequence::new(
            ConsequenceKind::Act { action: top },
            vec![
                Effect::reveal(actor, top).into(),
                Effect::Play { actor, piece: top, source: ZoneKind::Deck, free: true }.into(),
            ],
        ));
    }
    choices
}

/// Look at the top two cards; trash, discard, or put back each in any
/// order.
///
/// Copies of the same card are interchangeable, so a matching pair gets
/// neither the swap nor a second ordering.
pub(super) fn sentry(state: &GameState, actor: PlayerId) -> Vec<Consequence> {
    let top = state.actor(actor).deck.top_n(2);
    if top.is_empty() {
        return vec![Consequence::null()];
    }

    let all: PieceList = top.iter().copied().collect();
    let trash = |i: usize| Effect::Trash { actor, piece: top[i], source: ZoneKind::Deck };
    let discard = |i: usize| Effect::Discard { actor, piece: top[i], source: ZoneKind::Deck };

    let mut choices = vec![
        Consequence::null().with_message("put them back"),
        Consequence::generic([Effect::TrashPieces { actor, pieces: all.clone(), source: ZoneKind::Deck }]),
        Consequence::generic([Effect::DiscardPieces { actor, pieces: all, source: ZoneKind::Deck }]),
    ];
    if top.len() < 2 {
        return choices;
    }

    let orders: &[(usize, usize)] = if top[0].same_type(&top[1]) {
        &[(0, 1)]
    } else {
        choices.push(Consequence::generic([Effect::SwapTopCards { actor }]));
        &[(0, 1), (1, 0)]
    };
    for &(i, j) in orders {
        choices.push(Consequence::generic([trash(i), discard(j)]));
        choices.push(Consequence::generic([trash(i)]));
        choices.push(Consequence::generic([discard(j)]));
    }
    choices
}

/// Draw until seven cards in hand, optionally setting aside drawn actions.
pub(super) fn library(state: &GameState, actor: PlayerId) -> Vec<Consequence> {
    let a = state.actor(actor);
    if a.hand.len() >= LIBRARY_HAND_SIZE || a.deck.len() + a.discard.len() == 0 {
        return vec![Consequence::null()];
    }
    let process = Process::new(
        actor,
        vec![Effect::initiate(actor, Decision::LibraryDraw)],
        StopCondition::DrawUntilHandSize(LIBRARY_HAND_SIZE),
    )
    .with_teardown(Effect::initiate(actor, Decision::LibraryTeardown));
    vec![Consequence::new(ConsequenceKind::Generic, vec![process.into()])]
}

/// Take the top card into hand, or set it aside if it is an action.
pub(super) fn library_draw(state: &GameState, actor: PlayerId) -> Vec<Consequence> {
    let Some(&top) = state.actor(actor).deck.top() else {
        return vec![Consequence::null()];
    };

    let mut choices = vec![Consequence::generic([Effect::Put {
        actor,
        piece: top,
        destination: ZoneKind::Hand,
        source: ZoneKind::Deck,
    }])];
    if top.is_action() {
        choices.push(Consequence::generic([Effect::SetAside { actor, piece: top, source: ZoneKind::Deck }]));
    }
    choices
}

/// Discard whatever Library set aside.
pub(super) fn library_teardown(state: &GameState, actor: PlayerId) -> Vec<Consequence> {
    if state.actor(actor).aside.is_empty() {
        return vec![Consequence::null()];
    }
    vec![Consequence::generic([Effect::DiscardZone { actor, source: ZoneKind::Aside }])]
}
