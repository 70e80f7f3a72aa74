//! Kingdom cards that do not attack or reveal from the deck.

use crate::cards::{CardKind, Piece};
use crate::combinatorics::{any_piece, canonical_combinations, get_pieces};
use crate::core::{GameState, PlayerId};
use crate::decisions::Decision;
use crate::effects::{Consequence, ConsequenceKind, Effect, Process, StopCondition};
use crate::zones::ZoneKind;

fn discard_and_draw(actor: PlayerId, pieces: Vec<Piece>) -> Consequence {
    let n = pieces.len();
    Consequence::generic([
        Effect::DiscardPieces { actor, pieces: pieces.into_iter().collect(), source: ZoneKind::Hand },
        Effect::draw(actor, n),
    ])
}

/// Null, then discard-and-redraw options.
///
/// Automated actors get a single option cycling every victory card; human
/// actors choose any combination of their hand.
pub(super) fn cellar(state: &GameState, actor: PlayerId) -> Vec<Consequence> {
    let a = state.actor(actor);
    let mut choices = vec![Consequence::null()];
    if a.is_human() {
        choices.extend(
            canonical_combinations(a.hand.as_slice(), 1, None)
                .into_iter()
                .map(|pieces| discard_and_draw(actor, pieces)),
        );
    } else {
        let victory = get_pieces(&a.hand, false, |piece| piece.is_victory());
        if !victory.is_empty() {
            choices.push(discard_and_draw(actor, victory));
        }
    }
    choices
}

/// Null, then trash up to four cards.
pub(super) fn chapel(state: &GameState, actor: PlayerId) -> Vec<Consequence> {
    let hand = state.actor(actor).hand.as_slice();
    let mut choices = vec![Consequence::null()];
    choices.extend(canonical_combinations(hand, 1, Some(4)).into_iter().map(|pieces| {
        Consequence::generic([Effect::TrashPieces {
            actor,
            pieces: pieces.into_iter().collect(),
            source: ZoneKind::Hand,
        }])
    }));
    choices
}

/// Null, then put a card from the discard pile onto the deck.
pub(super) fn harbinger(state: &GameState, actor: PlayerId) -> Vec<Consequence> {
    let mut choices = vec![Consequence::null()];
    choices.extend(
        get_pieces(&state.actor(actor).discard, true, any_piece)
            .into_iter()
            .map(|piece| Consequence::generic([Effect::topdeck(actor, piece, ZoneKind::Discard)])),
    );
    choices
}

/// Gain a card costing up to 4.
pub(super) fn workshop(state: &GameState, actor: PlayerId) -> Vec<Consequence> {
    let choices: Vec<Consequence> = state
        .filter_supply(|piece| piece.cost() <= 4)
        .into_iter()
        .map(|piece| Consequence::acquisition(piece, [Effect::gain(actor, piece)]))
        .collect();
    or_null(choices)
}

/// Null, then trash a Copper for +3 coins.
pub(super) fn moneylender(state: &GameState, actor: PlayerId) -> Vec<Consequence> {
    let mut choices = vec![Consequence::null()];
    let copper = get_pieces(&state.actor(actor).hand, true, |piece| piece.kind == CardKind::Copper);
    choices.extend(
        copper
            .into_iter()
            .map(|piece| Consequence::generic([Effect::trash(actor, piece), Effect::AddCoins { n: 3 }])),
    );
    choices
}

/// Discard one card per empty supply pile.
///
/// The count is re-read before every discard, so a pile emptied mid-way is
/// honoured.
pub(super) fn poacher(state: &GameState, actor: PlayerId) -> Vec<Consequence> {
    let bound = state.n_empty_piles.min(state.actor(actor).hand.len());
    if bound == 0 {
        return vec![Consequence::null()];
    }
    let process = Process::new(
        actor,
        vec![Effect::initiate(actor, Decision::PoacherDiscard)],
        StopCondition::DiscardPerEmptyPile,
    );
    vec![Consequence::new(ConsequenceKind::Generic, vec![process.into()])]
}

/// One forced discard from hand.
pub(super) fn poacher_discard(state: &GameState, actor: PlayerId) -> Vec<Consequence> {
    discard_one(state, actor)
}

/// Discard one distinct card from hand, or Null with an empty hand.
pub(super) fn discard_one(state: &GameState, actor: PlayerId) -> Vec<Consequence> {
    let choices = get_pieces(&state.actor(actor).hand, true, any_piece)
        .into_iter()
        .map(|piece| Consequence::generic([Effect::discard(actor, piece)]))
        .collect();
    or_null(choices)
}

/// Trash a card from hand and gain one costing up to 2 more.
pub(super) fn remodel(state: &GameState, actor: PlayerId) -> Vec<Consequence> {
    let choices = get_pieces(&state.actor(actor).hand, true, any_piece)
        .into_iter()
        .flat_map(|lost| {
            trash_then_gain(state, actor, lost, ZoneKind::Discard, |piece| piece.cost() <= lost.cost() + 2)
        })
        .collect();
    or_null(choices)
}

/// Null, then trash a treasure and gain a treasure costing up to 3 more into
/// hand.
pub(super) fn mine(state: &GameState, actor: PlayerId) -> Vec<Consequence> {
    let mut choices = vec![Consequence::null()];
    for lost in get_pieces(&state.actor(actor).hand, true, |piece| piece.is_treasure()) {
        choices.extend(trash_then_gain(state, actor, lost, ZoneKind::Hand, |piece| {
            piece.is_treasure() && piece.cost() <= lost.cost() + 3
        }));
    }
    choices
}

/// Every gain of a matching supply card paid for by trashing `lost`, or the
/// trash alone when nothing matches.
fn trash_then_gain(
    state: &GameState,
    actor: PlayerId,
    lost: Piece,
    destination: ZoneKind,
    gainable: impl Fn(&Piece) -> bool,
) -> Vec<Consequence> {
    let targets = state.filter_supply(gainable);
    if targets.is_empty() {
        return vec![Consequence::generic([Effect::trash(actor, lost)])];
    }
    targets
        .into_iter()
        .map(|gained| {
            Consequence::dependent_acquisition(
                gained,
                lost,
                [Effect::trash(actor, lost), Effect::gain_to(actor, gained, destination)],
            )
        })
        .collect()
}

/// Null, then play an action from hand and resolve it a second time.
pub(super) fn throne_room(state: &GameState, actor: PlayerId) -> Vec<Consequence> {
    let mut choices = vec![Consequence::null()];
    choices.extend(get_pieces(&state.actor(actor).hand, true, |piece| piece.is_action()).into_iter().map(
        |action| {
            Consequence::new(
                ConsequenceKind::Act { action },
                vec![
                    Effect::Play { actor, piece: action, source: ZoneKind::Hand, free: true }.into(),
                    Effect::ResolveEffects { actor, piece: action }.into(),
                ],
            )
        },
    ));
    choices
}

/// Every other player draws a card.
pub(super) fn council_room(state: &GameState, actor: PlayerId) -> Vec<Consequence> {
    vec![Consequence::generic(
        state
            .opponents(actor)
            .into_iter()
            .map(|opponent| Effect::initiate(opponent, Decision::CouncilRoomDraw)),
    )
    .with_message("each other player draws a card")]
}

pub(super) fn council_room_draw(actor: PlayerId) -> Vec<Consequence> {
    vec![Consequence::generic([Effect::draw(actor, 1)])]
}

/// Gain a card costing up to 5 into hand, then put a card from hand onto the
/// deck.
///
/// Topdecking the gained card is offered once per gain, and only when the
/// hand holds no other copy of it.
pub(super) fn artisan(state: &GameState, actor: PlayerId) -> Vec<Consequence> {
    let hand = get_pieces(&state.actor(actor).hand, true, any_piece);
    let targets = state.filter_supply(|piece| piece.cost() <= 5);

    if targets.is_empty() {
        let choices = hand
            .into_iter()
            .map(|piece| Consequence::generic([Effect::topdeck(actor, piece, ZoneKind::Hand)]))
            .collect();
        return or_null(choices);
    }

    let mut choices = Vec::new();
    for gained in targets {
        let gain = Effect::gain_to(actor, gained, ZoneKind::Hand);
        for &kept in &hand {
            choices.push(Consequence::acquisition(
                gained,
                [gain.clone(), Effect::topdeck(actor, kept, ZoneKind::Hand)],
            ));
        }
        if !hand.iter().any(|piece| piece.same_type(&gained)) {
            choices.push(Consequence::acquisition(
                gained,
                [gain, Effect::topdeck(actor, gained, ZoneKind::Hand)],
            ));
        }
    }
    choices
}

fn or_null(choices: Vec<Consequence>) -> Vec<Consequence> {
    if choices.is_empty() {
        vec![Consequence::null()]
    } else {
        choices
    }
}
