//! Game configuration.
//!
//! A `GameConfig` fixes everything that varies between games: the number of
//! seats, the ten kingdom cards, the seed, the turn cap, and which seats are
//! human. Supply sizes follow the physical game and are derived from the
//! player count.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::cards::CardKind;

use super::error::ConfigError;
use super::PlayerId;

/// Cards drawn into each hand.
pub const HAND_SIZE: usize = 5;

/// Starting Coppers per player.
pub const STARTING_COPPER: usize = 7;

/// Starting Estates per player.
pub const STARTING_ESTATE: usize = 3;

/// Default cap on total turns across all players.
pub const MAX_TURNS: u32 = 180;

/// Number of kingdom piles in a game.
pub const KINGDOM_SIZE: usize = 10;

/// Complete game configuration.
///
/// ```
/// use deck_engine::cards::CardKind;
/// use deck_engine::core::GameConfig;
///
/// let config = GameConfig::new(3).with_seed(7);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.pile_size(CardKind::Copper), 60 - 21);
/// assert_eq!(config.supply_order().len(), 17);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub player_count: usize,

    /// Kingdom piles, in supply order.
    pub kingdom: Vec<CardKind>,

    pub seed: u64,

    /// The game ends once more than this many turns have been played.
    pub max_turns: u32,

    /// Seats played by people; every other seat is automated.
    pub human_seats: Vec<PlayerId>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 4,
            kingdom: CardKind::FIRST_GAME.to_vec(),
            seed: 0,
            max_turns: MAX_TURNS,
            human_seats: Vec::new(),
        }
    }
}

impl GameConfig {
    /// Default configuration for `player_count` seats.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_kingdom(mut self, kingdom: impl Into<Vec<CardKind>>) -> Self {
        self.kingdom = kingdom.into();
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Mark a seat as human-controlled.
    #[must_use]
    pub fn with_human(mut self, seat: PlayerId) -> Self {
        if !self.human_seats.contains(&seat) {
            self.human_seats.push(seat);
        }
        self
    }

    /// Check seat count, human seats, and kingdom composition.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(2..=6).contains(&self.player_count) {
            return Err(ConfigError::PlayerCount(self.player_count));
        }
        if let Some(&seat) = self.human_seats.iter().find(|seat| seat.index() >= self.player_count) {
            return Err(ConfigError::HumanSeat(seat, self.player_count));
        }
        if self.kingdom.len() != KINGDOM_SIZE {
            return Err(ConfigError::KingdomSize(self.kingdom.len()));
        }
        let mut seen = FxHashSet::default();
        for &kind in &self.kingdom {
            if !kind.is_kingdom() {
                return Err(ConfigError::NotKingdomCard(kind));
            }
            if !seen.insert(kind) {
                return Err(ConfigError::DuplicateKingdomCard(kind));
            }
        }
        Ok(())
    }

    /// Card types in supply-pile order: the basic piles, then the kingdom.
    #[must_use]
    pub fn supply_order(&self) -> Vec<CardKind> {
        CardKind::BASIC.iter().chain(&self.kingdom).copied().collect()
    }

    /// Number of pieces in a supply pile at the start of the game, after
    /// starting decks have been dealt.
    #[must_use]
    pub fn pile_size(&self, kind: CardKind) -> usize {
        let players = self.player_count;
        match kind {
            CardKind::Curse => 30,
            CardKind::Estate => 24 - STARTING_ESTATE * players,
            CardKind::Duchy | CardKind::Province => 12,
            CardKind::Copper => 60 - STARTING_COPPER * players,
            CardKind::Silver => 40,
            CardKind::Gold => 30,
            _ => 10,
        }
    }
}
