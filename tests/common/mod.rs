//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use deck_engine::cards::{CardKind, Piece};
use deck_engine::core::{GameConfig, GameState, PlayerId};
use deck_engine::decisions::Decision;
use deck_engine::effects::Consequence;
use deck_engine::policy::{seats, Decider, Scripted, Seats};
use deck_engine::zones::ZoneKind;

pub const P0: PlayerId = PlayerId::new(0);
pub const P1: PlayerId = PlayerId::new(1);
pub const P2: PlayerId = PlayerId::new(2);

/// Kingdom holding every card the integration tests place by hand.
pub const KINGDOM: [CardKind; 10] = [
    CardKind::Moat,
    CardKind::Merchant,
    CardKind::Village,
    CardKind::Militia,
    CardKind::Smithy,
    CardKind::ThroneRoom,
    CardKind::Library,
    CardKind::Mine,
    CardKind::Sentry,
    CardKind::Witch,
];

pub fn state(players: usize) -> GameState {
    GameState::new(&GameConfig::new(players).with_seed(1234).with_kingdom(KINGDOM)).unwrap()
}

/// Replace a zone's contents with fresh pieces, listed bottom to top.
pub fn fill(state: &mut GameState, actor: PlayerId, zone: ZoneKind, kinds: &[CardKind]) -> Vec<Piece> {
    let pieces: Vec<Piece> = kinds.iter().map(|&kind| state.mint(kind).unwrap()).collect();
    let target = state.actor_mut(actor).zone_mut(zone);
    target.drain();
    target.extend(pieces.iter().copied());
    pieces
}

/// One scripted decider per seat.
pub fn scripted(scripts: Vec<Vec<usize>>) -> Seats {
    seats(
        scripts
            .into_iter()
            .map(|script| Box::new(Scripted::new(script)) as Box<dyn Decider>)
            .collect(),
    )
}

/// Every decision a seat was asked, shared with the test.
pub type DecisionLog = Arc<Mutex<Vec<Decision>>>;

/// Scripted decider that records the decisions it is asked.
pub struct Recorder {
    script: Scripted,
    log: DecisionLog,
}

impl Recorder {
    pub fn new(script: Vec<usize>) -> (Self, DecisionLog) {
        let log = DecisionLog::default();
        (Self { script: Scripted::new(script), log: Arc::clone(&log) }, log)
    }
}

impl Decider for Recorder {
    fn select(&mut self, state: &GameState, choices: &[Consequence], decision: &Decision) -> usize {
        self.log.lock().unwrap().push(*decision);
        self.script.select(state, choices, decision)
    }
}

/// Sorted identities of every piece in the game.
pub fn census(state: &GameState) -> Vec<u32> {
    let mut ids: Vec<u32> = state.all_pieces().map(|piece| piece.id.raw()).collect();
    ids.sort_unstable();
    ids
}

pub fn kinds(pieces: impl IntoIterator<Item = Piece>) -> Vec<CardKind> {
    pieces.into_iter().map(|piece| piece.kind).collect()
}
