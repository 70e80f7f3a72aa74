//! Whole-game tests.
//!
//! These tests run complete games through `Session`:
//! - Random, logging and look-ahead seats play to the end
//! - A seed and a set of deciders replay a game exactly
//! - Property tests over seeded random games check that pieces are never
//!   created or lost, that every decision offers a choice, that
//!   classification loses nothing, and that look-ahead leaves no trace

mod common;

use common::{census, P0, P1};
use deck_engine::cards::CardKind;
use deck_engine::core::{EngineError, GameConfig, GameState, PlayerId};
use deck_engine::decisions::Decision;
use deck_engine::effects::{expand_choices, Consequence};
use deck_engine::policy::{Decider, Echo, FirstChoice, Lookahead, RandomDecider};
use deck_engine::rules::{classify_consequences, evaluate_acquisitions, extract_acquisitions};
use deck_engine::session::{Session, SessionBuilder};
use proptest::prelude::*;
use proptest::sample::subsequence;
use tracing_subscriber::EnvFilter;

/// Every decision, with Moat as the reaction.
const DECISIONS: [Decision; 30] = [
    Decision::ActionPhase,
    Decision::TreasurePhase,
    Decision::BuyPhase,
    Decision::Cellar,
    Decision::Chapel,
    Decision::Harbinger,
    Decision::Vassal,
    Decision::Workshop,
    Decision::Bureaucrat,
    Decision::Militia,
    Decision::Moneylender,
    Decision::Poacher,
    Decision::Remodel,
    Decision::ThroneRoom,
    Decision::Bandit,
    Decision::CouncilRoom,
    Decision::Library,
    Decision::Mine,
    Decision::Sentry,
    Decision::Witch,
    Decision::Artisan,
    Decision::Immunity { reaction: CardKind::Moat },
    Decision::MilitiaDiscard,
    Decision::BureaucratReveal,
    Decision::BanditReveal,
    Decision::WitchCurse,
    Decision::CouncilRoomDraw,
    Decision::LibraryDraw,
    Decision::LibraryTeardown,
    Decision::PoacherDiscard,
];

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_test_writer()
        .try_init();
}

/// Random decider that checks the heuristics on every choice list it sees.
struct Auditor {
    seat: PlayerId,
    inner: RandomDecider,
}

impl Auditor {
    fn new(seat: PlayerId, seed: u64) -> Self {
        Self { seat, inner: RandomDecider::new(seed) }
    }
}

impl Decider for Auditor {
    fn select(&mut self, state: &GameState, choices: &[Consequence], decision: &Decision) -> usize {
        assert!(!choices.is_empty(), "{decision:?} offered nothing");

        let buckets = classify_consequences(choices);
        let classified = buckets.passes.len()
            + buckets.nulls.len()
            + buckets.purchases.len()
            + buckets.dependent_acquisitions.len()
            + buckets.acquisitions.len()
            + buckets.other.len();
        assert_eq!(classified, choices.len(), "{decision:?}");

        let extracted = extract_acquisitions(choices);
        let extracted_total =
            extracted.passes.len() + extracted.nulls.len() + extracted.acquisitions.len() + extracted.other.len();
        assert_eq!(extracted_total, choices.len(), "{decision:?}");

        let before = census(state);
        let piles: Vec<usize> = state.piles.iter().map(|pile| pile.len()).collect();
        let outcomes = evaluate_acquisitions(state, self.seat, choices);
        let evaluated =
            outcomes.wins.len() + outcomes.ties.len() + outcomes.losses.len() + outcomes.neutrals.len();
        assert_eq!(evaluated, choices.iter().filter(|choice| choice.gained().is_some()).count());
        assert_eq!(census(state), before);
        assert_eq!(state.piles.iter().map(|pile| pile.len()).collect::<Vec<_>>(), piles);
        assert!(state.players.values().all(|actor| actor.hypothesis_is_clear()));

        self.inner.select(state, choices, decision)
    }
}

/// Test a game between random seats running to the end.
#[test]
fn test_random_game() {
    init_tracing();
    let mut session = SessionBuilder::new()
        .seed(2024)
        .seat(RandomDecider::new(1))
        .seat(RandomDecider::new(2))
        .seat(RandomDecider::new(3))
        .build()
        .unwrap();

    let placements = session.run().unwrap();

    assert!(session.is_over());
    assert_eq!(placements.len(), 3);
    assert_eq!(placements[0].rank, 1);
    for pair in placements.windows(2) {
        assert!(pair[0].standing >= pair[1].standing);
        assert!(pair[0].rank <= pair[1].rank);
    }
    assert!(session.result().is_winner(placements[0].player));
    assert_eq!(session.take_turn(), Err(EngineError::GameOver));
}

/// Test that the same seeds replay the same game.
#[test]
fn test_games_are_reproducible() {
    let play = || {
        let mut session = SessionBuilder::new()
            .seed(99)
            .kingdom(CardKind::FIRST_GAME)
            .seat(RandomDecider::new(5))
            .seat(RandomDecider::new(6))
            .build()
            .unwrap();
        let placements = session.run().unwrap();
        let trash: Vec<CardKind> = session.state().trash.iter().map(|piece| piece.kind).collect();
        (placements, session.state().n_total_turns_played, trash)
    };

    assert_eq!(play(), play());
}

/// Test logging seats playing a full game.
#[test]
fn test_echo_game() {
    init_tracing();
    let mut session = SessionBuilder::new()
        .seed(3)
        .seat(Echo::new("alice", RandomDecider::new(1)))
        .seat(Echo::new("bob", RandomDecider::new(2)))
        .build()
        .unwrap();

    assert_eq!(session.run().unwrap().len(), 2);
}

/// Test look-ahead seats playing a full game.
#[test]
fn test_lookahead_game() {
    let mut session = SessionBuilder::new()
        .seed(8)
        .seat(Lookahead::new(RandomDecider::new(1)))
        .seat(Lookahead::new(RandomDecider::new(2)))
        .build()
        .unwrap();

    session.run().unwrap();
    assert!(session.is_over());
}

/// Test the turn cap ending a passive game.
#[test]
fn test_turn_cap() {
    let mut session = SessionBuilder::new().max_turns(4).seat(FirstChoice).seat(FirstChoice).build().unwrap();

    let placements = session.run().unwrap();

    assert_eq!(session.state().n_total_turns_played, 5);
    // The first seat played one more turn, so the second ranks higher.
    assert_eq!(placements[0].player, P1);
    assert_eq!(placements[1].rank, 2);
}

/// Test marking a seat as played by a person.
#[test]
fn test_human_seat() {
    let session = SessionBuilder::new().human_seat(FirstChoice).seat(FirstChoice).build().unwrap();

    assert!(session.state().actor(P0).is_human());
    assert!(!session.state().actor(P1).is_human());
}

/// Test resolving a card outside the turn loop.
#[test]
fn test_session_resolve() {
    let deciders: Vec<Box<dyn Decider>> = vec![Box::new(FirstChoice), Box::new(FirstChoice)];
    let mut session = Session::new(GameConfig::new(2).with_kingdom(CardKind::FIRST_GAME), deciders).unwrap();
    let before = session.state().actor(P1).hand.len();

    session.resolve(P1, Decision::CouncilRoomDraw).unwrap();
    assert_eq!(session.state().actor(P1).hand.len(), before + 1);
}

fn kingdoms() -> impl Strategy<Value = Vec<CardKind>> {
    subsequence(CardKind::KINGDOM.to_vec(), 10)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Property: pieces are only ever moved, and every decision has a
    /// choice at every turn boundary.
    #[test]
    fn prop_random_games_keep_invariants(
        seed in any::<u64>(),
        kingdom in kingdoms(),
        players in 2usize..=4,
    ) {
        let config = GameConfig::new(players).with_seed(seed).with_kingdom(kingdom).with_max_turns(60);
        let deciders: Vec<Box<dyn Decider>> = (0..players)
            .map(|seat| Box::new(RandomDecider::new(seed ^ seat as u64)) as Box<dyn Decider>)
            .collect();
        let mut session = Session::new(config, deciders).unwrap();
        let initial = census(session.state());

        while !session.is_over() {
            session.take_turn().unwrap();
            let state = session.state();
            prop_assert_eq!(census(state), initial.clone());
            for player in PlayerId::all(players) {
                for decision in DECISIONS {
                    prop_assert!(
                        !expand_choices(state, player, decision).is_empty(),
                        "{:?} offered nothing to {}",
                        decision,
                        player
                    );
                }
            }
        }
    }

    /// Property: classification covers every choice list, and evaluating
    /// acquisitions never leaves a mark on the state.
    #[test]
    fn prop_heuristics_are_side_effect_free(seed in any::<u64>(), kingdom in kingdoms()) {
        let config = GameConfig::new(2).with_seed(seed).with_kingdom(kingdom).with_max_turns(40);
        let deciders: Vec<Box<dyn Decider>> = vec![
            Box::new(Auditor::new(P0, seed)),
            Box::new(Auditor::new(P1, seed.wrapping_add(1))),
        ];
        let mut session = Session::new(config, deciders).unwrap();
        let placements = session.run().unwrap();
        prop_assert_eq!(placements.len(), 2);
    }
}
