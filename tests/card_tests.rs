//! Card choice generator tests.
//!
//! These tests check the choice lists cards offer through `expand_choices`:
//! - Option counts where copies of a card collapse into one choice
//! - Null options on optional effects
//! - Human and automated variants
//! - Catalogue lookups of simple effects and decisions

mod common;

use common::{fill, state, KINGDOM, P0};
use deck_engine::cards::CardKind;
use deck_engine::core::{GameConfig, GameState};
use deck_engine::decisions::Decision;
use deck_engine::effects::{expand_choices, ConsequenceClass, ConsequenceKind, Effect, Step};
use deck_engine::zones::ZoneKind;

fn human_state() -> GameState {
    GameState::new(&GameConfig::new(2).with_seed(1234).with_kingdom(KINGDOM).with_human(P0)).unwrap()
}

/// Test Chapel offering every distinct set of up to four cards.
#[test]
fn test_chapel_distinct_hand() {
    let mut state = state(2);
    fill(
        &mut state,
        P0,
        ZoneKind::Hand,
        &[CardKind::Copper, CardKind::Silver, CardKind::Gold, CardKind::Estate],
    );

    let choices = expand_choices(&state, P0, Decision::Chapel);
    // Null plus the 15 non-empty subsets of four distinct cards.
    assert_eq!(choices.len(), 16);
    assert!(choices[0].satisfies(ConsequenceClass::Null));
}

/// Test Cellar for an automated seat: one option discarding every victory
/// card.
#[test]
fn test_cellar_automated() {
    let mut state = state(2);
    fill(
        &mut state,
        P0,
        ZoneKind::Hand,
        &[CardKind::Estate, CardKind::Copper, CardKind::Duchy, CardKind::Copper],
    );

    let choices = expand_choices(&state, P0, Decision::Cellar);
    assert_eq!(choices.len(), 2);
    let Some(Step::Effect(Effect::DiscardPieces { pieces, .. })) = choices[1].steps.first()
    else {
        panic!("expected a discard, got {:?}", choices[1]);
    };
    assert_eq!(pieces.len(), 2);
    assert!(pieces.iter().all(|piece| piece.is_victory()));
}

/// Test Cellar for a human seat: any combination of the hand.
#[test]
fn test_cellar_human() {
    let mut state = human_state();
    fill(&mut state, P0, ZoneKind::Hand, &[CardKind::Copper, CardKind::Estate]);

    let choices = expand_choices(&state, P0, Decision::Cellar);
    assert_eq!(choices.len(), 4);
}

/// Test Cellar with nothing worth discarding.
#[test]
fn test_cellar_without_victory_cards() {
    let mut state = state(2);
    fill(&mut state, P0, ZoneKind::Hand, &[CardKind::Copper, CardKind::Silver]);

    let choices = expand_choices(&state, P0, Decision::Cellar);
    assert_eq!(choices.len(), 1);
    assert_eq!(choices[0].kind, ConsequenceKind::Null);
}

/// Test Harbinger offering one option per distinct card in the discard
/// pile.
#[test]
fn test_harbinger_distinct_discard() {
    let mut state = state(2);
    fill(
        &mut state,
        P0,
        ZoneKind::Discard,
        &[CardKind::Copper, CardKind::Copper, CardKind::Estate],
    );

    let choices = expand_choices(&state, P0, Decision::Harbinger);
    assert_eq!(choices.len(), 3);
}

/// Test Workshop offering every affordable supply card.
#[test]
fn test_workshop_costs() {
    let state = state(2);

    let choices = expand_choices(&state, P0, Decision::Workshop);
    let affordable = state.filter_supply(|piece| piece.cost() <= 4);
    assert_eq!(choices.len(), affordable.len());
    for choice in &choices {
        let gained = choice.gained().unwrap();
        assert!(gained.cost() <= 4, "{gained} costs too much");
        assert!(choice.satisfies(ConsequenceClass::Acquisition));
    }
}

/// Test Moneylender with no Copper in hand.
#[test]
fn test_moneylender_without_copper() {
    let mut state = state(2);
    fill(&mut state, P0, ZoneKind::Hand, &[CardKind::Silver, CardKind::Estate]);

    let choices = expand_choices(&state, P0, Decision::Moneylender);
    assert_eq!(choices.len(), 1);
    assert_eq!(choices[0].kind, ConsequenceKind::Null);
}

/// Test Remodel, Mine and Throne Room with nothing to work on.
#[test]
fn test_empty_hand_falls_back_to_null() {
    let mut state = state(2);
    fill(&mut state, P0, ZoneKind::Hand, &[]);

    for decision in [Decision::Remodel, Decision::Mine, Decision::ThroneRoom, Decision::Chapel] {
        let choices = expand_choices(&state, P0, decision);
        assert_eq!(choices.len(), 1, "{decision:?}");
        assert_eq!(choices[0].kind, ConsequenceKind::Null, "{decision:?}");
    }
}

/// Test Remodel pairing each trashed card with each affordable gain.
#[test]
fn test_remodel_dependent_acquisitions() {
    let mut state = state(2);
    fill(&mut state, P0, ZoneKind::Hand, &[CardKind::Estate, CardKind::Estate]);

    let choices = expand_choices(&state, P0, Decision::Remodel);
    let affordable = state.filter_supply(|piece| piece.cost() <= 4);
    assert_eq!(choices.len(), affordable.len());
    for choice in &choices {
        assert!(choice.satisfies(ConsequenceClass::DependentAcquisition));
        assert_eq!(choice.lost().map(|piece| piece.kind), Some(CardKind::Estate));
    }
}

/// Test Throne Room offering each distinct action once.
#[test]
fn test_throne_room_distinct_actions() {
    let mut state = state(2);
    fill(
        &mut state,
        P0,
        ZoneKind::Hand,
        &[CardKind::Village, CardKind::Village, CardKind::Smithy, CardKind::Copper],
    );

    let choices = expand_choices(&state, P0, Decision::ThroneRoom);
    assert_eq!(choices.len(), 3);
    assert_eq!(choices.iter().filter(|c| c.satisfies(ConsequenceClass::Act)).count(), 2);
}

/// Test Vassal on a non-action top card.
#[test]
fn test_vassal_non_action() {
    let mut state = state(2);
    fill(&mut state, P0, ZoneKind::Deck, &[CardKind::Estate]);

    let choices = expand_choices(&state, P0, Decision::Vassal);
    assert_eq!(choices.len(), 1);
}

/// Test Sentry with a matching pair and with a single card.
#[test]
fn test_sentry_option_counts() {
    let mut state = state(2);
    fill(&mut state, P0, ZoneKind::Deck, &[CardKind::Copper, CardKind::Copper]);
    assert_eq!(expand_choices(&state, P0, Decision::Sentry).len(), 6);

    fill(&mut state, P0, ZoneKind::Deck, &[CardKind::Copper, CardKind::Estate]);
    assert_eq!(expand_choices(&state, P0, Decision::Sentry).len(), 10);

    fill(&mut state, P0, ZoneKind::Deck, &[CardKind::Gold]);
    assert_eq!(expand_choices(&state, P0, Decision::Sentry).len(), 3);
}

/// Test the catalogue's split between simple effects and decisions.
#[test]
fn test_card_catalogue() {
    assert_eq!(CardKind::Smithy.simple_effects(), vec![Effect::AddCards { n: 3 }]);
    assert_eq!(CardKind::Smithy.decision(), None);
    assert_eq!(CardKind::Chapel.simple_effects(), Vec::new());
    assert_eq!(CardKind::Chapel.decision(), Some(Decision::Chapel));
    assert_eq!(CardKind::Militia.decision(), Some(Decision::Militia));
    assert!(CardKind::Militia.is_attack());
    assert!(CardKind::Moat.is_reaction());

    for kind in CardKind::KINGDOM {
        assert!(kind.is_kingdom(), "{kind}");
    }
    for kind in CardKind::BASIC {
        assert!(!kind.is_kingdom(), "{kind}");
        assert_eq!(kind.decision(), None, "{kind}");
    }
}

/// Test Gardens counting one point per ten cards.
#[test]
fn test_gardens_value() {
    assert_eq!(CardKind::Gardens.victory_points(9), 0);
    assert_eq!(CardKind::Gardens.victory_points(10), 1);
    assert_eq!(CardKind::Gardens.victory_points(39), 3);
    assert_eq!(CardKind::Curse.victory_points(40), -1);
}
