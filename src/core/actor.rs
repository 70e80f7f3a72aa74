//! Actors: a seat's zones and ranking.
//!
//! An `Actor` owns the five zones holding that player's pieces. Its
//! collection (everything it owns) determines victory points, and
//! `Standing` orders actors by the game's win condition.
//!
//! ## Hypothetical collections
//!
//! Look-ahead heuristics ask "what if I gained this piece?" without moving
//! anything. The actor's `include`/`exclude` scratch lists adjust the
//! collection seen by `victory_points` only. They are filled and cleared by
//! `rules::Hypothesis`, which clears them on drop.

use std::cell::RefCell;
use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::Piece;
use crate::zones::{Zone, ZoneKind};

use super::PlayerId;

/// Who sits in a seat.
///
/// Decision generators branch on this where humans get a fuller choice list
/// than automated strategies (Cellar).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActorKind {
    Human,
    #[default]
    Automated,
}

/// One player's zones and bookkeeping.
#[derive(Clone, Debug)]
pub struct Actor {
    pub id: PlayerId,
    pub kind: ActorKind,

    pub hand: Zone,
    pub deck: Zone,
    pub discard: Zone,
    pub play: Zone,
    pub aside: Zone,

    /// Turns this actor has completed.
    pub n_turns_played: u32,

    include: RefCell<Vec<Piece>>,
    exclude: RefCell<Vec<Piece>>,
}

impl Actor {
    #[must_use]
    pub fn new(id: PlayerId, kind: ActorKind) -> Self {
        Self {
            id,
            kind,
            hand: Zone::new(),
            deck: Zone::new(),
            discard: Zone::new(),
            play: Zone::new(),
            aside: Zone::new(),
            n_turns_played: 0,
            include: RefCell::new(Vec::new()),
            exclude: RefCell::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn is_human(&self) -> bool {
        self.kind == ActorKind::Human
    }

    #[must_use]
    pub fn zone(&self, kind: ZoneKind) -> &Zone {
        match kind {
            ZoneKind::Hand => &self.hand,
            ZoneKind::Deck => &self.deck,
            ZoneKind::Discard => &self.discard,
            ZoneKind::Play => &self.play,
            ZoneKind::Aside => &self.aside,
        }
    }

    pub fn zone_mut(&mut self, kind: ZoneKind) -> &mut Zone {
        match kind {
            ZoneKind::Hand => &mut self.hand,
            ZoneKind::Deck => &mut self.deck,
            ZoneKind::Discard => &mut self.discard,
            ZoneKind::Play => &mut self.play,
            ZoneKind::Aside => &mut self.aside,
        }
    }

    /// Every piece this actor owns, across all five zones.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        ZoneKind::ALL.into_iter().flat_map(move |kind| self.zone(kind).iter())
    }

    /// The collection as currently hypothesised: owned pieces, minus
    /// `exclude`, plus `include`.
    #[must_use]
    pub fn collection(&self) -> Vec<Piece> {
        let exclude = self.exclude.borrow();
        let mut collection: Vec<Piece> = self
            .pieces()
            .filter(|piece| !exclude.contains(piece))
            .copied()
            .collect();
        collection.extend(self.include.borrow().iter().copied());
        collection
    }

    #[must_use]
    pub fn victory_points(&self) -> i32 {
        let collection = self.collection();
        let size = collection.len();
        collection.iter().map(|piece| piece.kind.victory_points(size)).sum()
    }

    #[must_use]
    pub fn standing(&self) -> Standing {
        Standing {
            victory_points: self.victory_points(),
            n_turns_played: self.n_turns_played,
        }
    }

    pub(crate) fn hypothesise(&self, gained: Piece, lost: Option<Piece>) {
        self.include.borrow_mut().push(gained);
        if let Some(lost) = lost {
            self.exclude.borrow_mut().push(lost);
        }
    }

    pub(crate) fn clear_hypothesis(&self) {
        self.include.borrow_mut().clear();
        self.exclude.borrow_mut().clear();
    }

    /// Whether the scratch lists are empty.
    #[must_use]
    pub fn hypothesis_is_clear(&self) -> bool {
        self.include.borrow().is_empty() && self.exclude.borrow().is_empty()
    }
}

/// Rank key for the win condition.
///
/// More victory points rank higher; on equal points, fewer turns played
/// ranks higher. Equal standings are a tie.
///
/// ```
/// use deck_engine::core::Standing;
///
/// let leader = Standing { victory_points: 10, n_turns_played: 12 };
/// let trailer = Standing { victory_points: 8, n_turns_played: 11 };
/// let quicker = Standing { victory_points: 10, n_turns_played: 11 };
///
/// assert!(trailer < leader);
/// assert!(leader < quicker);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Standing {
    pub victory_points: i32,
    pub n_turns_played: u32,
}

impl Ord for Standing {
    fn cmp(&self, other: &Self) -> Ordering {
        self.victory_points
            .cmp(&other.victory_points)
            .then_with(|| other.n_turns_played.cmp(&self.n_turns_played))
    }
}

impl PartialOrd for Standing {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
