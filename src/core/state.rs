//! Game state and zone-mutation primitives.
//!
//! ## GameState
//!
//! The single mutable context of one game:
//! - Actors (one per seat) with their zones
//! - Supply piles, indexed by `CardId`, and the trash
//! - Per-turn counters (actions, buys, coins, Merchant bookkeeping)
//! - Phase flags, empty-pile tracking, turn counters
//! - The RNG used for reshuffles
//!
//! ## Primitives
//!
//! Every zone transfer goes through a method here. Each removes the piece
//! from exactly one place and puts it in exactly one other place, so the
//! multiset of pieces in the game never changes after setup. A transfer
//! naming a piece that is not where the caller said fails with
//! `EngineError::PieceNotFound` and leaves the state untouched.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::cards::{CardId, CardKind, CardRegistry, Piece};
use crate::zones::{Zone, ZoneKind};

use super::actor::{Actor, ActorKind, Standing};
use super::config::{GameConfig, HAND_SIZE, STARTING_COPPER, STARTING_ESTATE};
use super::entity::EntityAllocator;
use super::error::{ConfigError, EngineError};
use super::player::{PlayerId, PlayerMap};
use super::rng::GameRng;

/// Number of empty supply piles that ends the game.
pub const EMPTY_PILES_TO_END: usize = 3;

/// Turn phases, in the order they are played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Action,
    Treasure,
    Buy,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Action => "Action Phase",
            Phase::Treasure => "Treasure Phase",
            Phase::Buy => "Buy Phase",
        };
        f.write_str(name)
    }
}

/// Complete game state.
#[derive(Clone, Debug)]
pub struct GameState {
    pub players: PlayerMap<Actor>,

    /// Supply piles, indexed by `CardId`. The top of each pile is its last
    /// element.
    pub piles: Vec<Zone>,

    pub trash: Zone,

    pub registry: CardRegistry,

    // === Turn resources ===
    pub n_action: i32,
    pub n_buy: i32,
    pub n_coin: i32,
    pub n_silver_played_this_turn: u32,
    /// Coins added by the first Silver played this turn.
    pub merchant_silver_bonus: i32,

    // === Phase flags ===
    pub need_action_phase: bool,
    pub need_treasure_phase: bool,
    pub need_buy_phase: bool,

    // === Game progression ===
    pub n_empty_piles: usize,
    pub province_pile_empty: bool,
    pub current_player: PlayerId,
    pub n_total_turns_played: u32,
    pub max_turns: u32,

    pub rng: GameRng,

    entities: EntityAllocator,
}

impl GameState {
    /// Build the supply and the starting decks, and deal opening hands.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let order = config.supply_order();
        let players = PlayerMap::new(config.player_count, |id| {
            let kind = if config.human_seats.contains(&id) {
                ActorKind::Human
            } else {
                ActorKind::Automated
            };
            Actor::new(id, kind)
        });

        let mut state = Self {
            players,
            piles: vec![Zone::new(); order.len()],
            trash: Zone::new(),
            registry: CardRegistry::from_kinds(&order),
            n_action: 0,
            n_buy: 0,
            n_coin: 0,
            n_silver_played_this_turn: 0,
            merchant_silver_bonus: 0,
            need_action_phase: false,
            need_treasure_phase: false,
            need_buy_phase: false,
            n_empty_piles: 0,
            province_pile_empty: false,
            current_player: PlayerId::new(0),
            n_total_turns_played: 0,
            max_turns: config.max_turns,
            rng: GameRng::new(config.seed),
            entities: EntityAllocator::default(),
        };

        for &kind in &order {
            for _ in 0..config.pile_size(kind) {
                let piece = state.mint_unchecked(kind);
                state.piles[piece.card.pile_index()].push(piece);
            }
        }

        for seat in PlayerId::all(config.player_count) {
            let mut deck: Vec<Piece> = Vec::with_capacity(STARTING_COPPER + STARTING_ESTATE);
            for _ in 0..STARTING_COPPER {
                deck.push(state.mint_unchecked(CardKind::Copper));
            }
            for _ in 0..STARTING_ESTATE {
                deck.push(state.mint_unchecked(CardKind::Estate));
            }
            state.rng.shuffle(&mut deck);
            state.players[seat].deck.extend(deck);
            state.draw(seat, HAND_SIZE);
        }

        Ok(state)
    }

    fn mint_unchecked(&mut self, kind: CardKind) -> Piece {
        let card = self.registry.register(kind);
        Piece::new(self.entities.next_id(), card, kind)
    }

    /// Create a new piece of a type in this game's supply.
    ///
    /// The piece belongs to no zone; the caller places it. Used during setup
    /// and to build specific positions in tests.
    pub fn mint(&mut self, kind: CardKind) -> Result<Piece, EngineError> {
        if !self.registry.contains(kind) {
            return Err(EngineError::UnknownCard(kind));
        }
        Ok(self.mint_unchecked(kind))
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn actor(&self, player: PlayerId) -> &Actor {
        &self.players[player]
    }

    pub fn actor_mut(&mut self, player: PlayerId) -> &mut Actor {
        &mut self.players[player]
    }

    /// Other seats in turn order, starting with the next player.
    #[must_use]
    pub fn opponents(&self, player: PlayerId) -> Vec<PlayerId> {
        player.others(self.player_count()).collect()
    }

    #[must_use]
    pub fn standing(&self, player: PlayerId) -> Standing {
        self.players[player].standing()
    }

    /// Every piece in the game: actor zones, supply, and trash.
    pub fn all_pieces(&self) -> impl Iterator<Item = &Piece> {
        self.players
            .values()
            .flat_map(Actor::pieces)
            .chain(self.piles.iter().flat_map(Zone::iter))
            .chain(self.trash.iter())
    }

    // === Supply ===

    #[must_use]
    pub fn pile(&self, card: CardId) -> &Zone {
        &self.piles[card.pile_index()]
    }

    /// Top piece of the pile holding `kind`, if any remain.
    #[must_use]
    pub fn supply_top(&self, kind: CardKind) -> Option<Piece> {
        let card = self.registry.id_of(kind)?;
        self.pile(card).top().copied()
    }

    /// Top piece of each non-empty pile that matches `predicate`, in pile
    /// order.
    pub fn filter_supply(&self, predicate: impl Fn(&Piece) -> bool) -> Vec<Piece> {
        self.piles
            .iter()
            .filter_map(Zone::top)
            .filter(|piece| predicate(piece))
            .copied()
            .collect()
    }

    // === Termination ===

    /// Three empty piles, an empty Province pile, or the turn cap passed.
    #[must_use]
    pub fn game_over(&self) -> bool {
        self.n_empty_piles >= EMPTY_PILES_TO_END
            || self.province_pile_empty
            || self.n_total_turns_played > self.max_turns
    }

    /// One more gain could end the game.
    #[must_use]
    pub fn almost_over(&self) -> bool {
        let provinces_left = self
            .registry
            .id_of(CardKind::Province)
            .map(|card| self.pile(card).len());
        self.n_empty_piles + 1 >= EMPTY_PILES_TO_END || provinces_left == Some(1)
    }

    /// Whether gaining `piece` from its pile would end the game through the
    /// supply: the last Province, or the last piece of a third pile.
    ///
    /// The turn cap is not considered. It ends the game at a turn boundary
    /// whatever is gained, so no single gain decides it.
    #[must_use]
    pub fn gain_ends_game(&self, piece: &Piece) -> bool {
        let pile = self.pile(piece.card);
        pile.len() == 1
            && (piece.kind == CardKind::Province || self.n_empty_piles + 1 >= EMPTY_PILES_TO_END)
    }

    // === Resources ===

    pub fn add_actions(&mut self, n: i32) {
        self.n_action += n;
    }

    pub fn add_buys(&mut self, n: i32) {
        self.n_buy += n;
    }

    pub fn add_coins(&mut self, n: i32) {
        self.n_coin += n;
    }

    pub fn add_merchant_silver_bonus(&mut self) {
        self.merchant_silver_bonus += 1;
    }

    /// Silver's coin, plus the Merchant bonus on the first Silver of a turn.
    pub fn add_silver(&mut self) {
        self.add_coins(2);
        self.n_silver_played_this_turn += 1;
        if self.n_silver_played_this_turn == 1 {
            self.add_coins(self.merchant_silver_bonus);
        }
    }

    /// Close a phase. Ending the action or buy phase forfeits what is left.
    pub fn end_phase(&mut self, phase: Phase) {
        match phase {
            Phase::Action => {
                self.need_action_phase = false;
                self.n_action = 0;
            }
            Phase::Treasure => self.need_treasure_phase = false,
            Phase::Buy => {
                self.need_buy_phase = false;
                self.n_buy = 0;
            }
        }
    }

    /// Reset counters and phase flags for the current player's turn.
    pub fn start_turn(&mut self) {
        self.n_action = 1;
        self.n_buy = 1;
        self.n_coin = 0;
        self.n_silver_played_this_turn = 0;
        self.merchant_silver_bonus = 0;
        self.need_action_phase = true;
        self.need_treasure_phase = true;
        self.need_buy_phase = true;
    }

    /// Discard hand and play area, draw a new hand, and pass the turn.
    pub fn end_turn(&mut self) {
        let player = self.current_player;
        let actor = &mut self.players[player];
        for zone in [ZoneKind::Hand, ZoneKind::Play, ZoneKind::Aside] {
            let pieces = actor.zone_mut(zone).drain();
            actor.discard.extend(pieces);
        }
        self.draw(player, HAND_SIZE);

        self.players[player].n_turns_played += 1;
        self.n_total_turns_played += 1;
        self.current_player = player.next(self.player_count());
    }

    // === Zone transfers ===

    fn take(&mut self, player: PlayerId, piece: &Piece, zone: ZoneKind) -> Result<Piece, EngineError> {
        self.players[player]
            .zone_mut(zone)
            .take(piece)
            .ok_or(EngineError::PieceNotFound { piece: *piece, zone })
    }

    /// Move a piece between two of one actor's zones, onto the top of the
    /// destination.
    pub fn transfer(
        &mut self,
        player: PlayerId,
        piece: &Piece,
        destination: ZoneKind,
        source: ZoneKind,
    ) -> Result<(), EngineError> {
        let piece = self.take(player, piece, source)?;
        self.players[player].zone_mut(destination).push(piece);
        Ok(())
    }

    /// Shuffle the discard pile under the deck.
    pub fn replenish_deck(&mut self, player: PlayerId) {
        let mut pieces = self.players[player].discard.drain();
        self.rng.shuffle(&mut pieces);
        debug!(%player, reshuffled = pieces.len(), "Replenishing deck");
        self.players[player].deck.insert_under(pieces);
    }

    /// Reshuffle if the deck holds fewer than `n` pieces and the discard
    /// pile has any.
    pub fn prepare_deck(&mut self, player: PlayerId, n: usize) {
        let actor = &self.players[player];
        if actor.deck.len() < n && !actor.discard.is_empty() {
            self.replenish_deck(player);
        }
    }

    /// Draw up to `n` pieces. Fewer are drawn if deck and discard run out.
    pub fn draw(&mut self, player: PlayerId, n: usize) {
        self.prepare_deck(player, n);
        let actor = &mut self.players[player];
        for _ in 0..n {
            let Some(piece) = actor.deck.pop() else { break };
            actor.hand.push(piece);
        }
        trace!(%player, n, hand = actor.hand.len(), "Drew");
    }

    /// Move the top piece of `piece`'s pile into a zone, tracking empty
    /// piles.
    pub fn gain(&mut self, player: PlayerId, piece: &Piece, destination: ZoneKind) -> Result<(), EngineError> {
        let pile = &mut self.piles[piece.card.pile_index()];
        let piece = pile.take(piece).ok_or(EngineError::NotInSupply(piece.kind, *piece))?;
        if pile.is_empty() {
            self.n_empty_piles += 1;
            if piece.kind == CardKind::Province {
                self.province_pile_empty = true;
            }
            debug!(card = %piece, empty_piles = self.n_empty_piles, "Supply pile emptied");
        }
        self.players[player].zone_mut(destination).push(piece);
        Ok(())
    }

    /// Pay a buy and the piece's cost, then gain it to the discard pile.
    pub fn buy(&mut self, player: PlayerId, piece: &Piece) -> Result<(), EngineError> {
        self.gain(player, piece, ZoneKind::Discard)?;
        self.n_buy -= 1;
        self.n_coin -= piece.cost();
        Ok(())
    }

    /// Move a piece into play, spending an action unless `free`.
    pub fn play(&mut self, player: PlayerId, piece: &Piece, source: ZoneKind, free: bool) -> Result<(), EngineError> {
        self.transfer(player, piece, ZoneKind::Play, source)?;
        if !free {
            self.n_action -= 1;
        }
        Ok(())
    }

    pub fn trash(&mut self, player: PlayerId, piece: &Piece, source: ZoneKind) -> Result<(), EngineError> {
        let piece = self.take(player, piece, source)?;
        self.trash.push(piece);
        Ok(())
    }

    pub fn discard(&mut self, player: PlayerId, piece: &Piece, source: ZoneKind) -> Result<(), EngineError> {
        self.transfer(player, piece, ZoneKind::Discard, source)
    }

    /// Discard everything in a zone.
    pub fn discard_zone(&mut self, player: PlayerId, source: ZoneKind) {
        let actor = &mut self.players[player];
        let pieces = actor.zone_mut(source).drain();
        actor.discard.extend(pieces);
    }

    /// Put a piece on top of the deck.
    pub fn topdeck(&mut self, player: PlayerId, piece: &Piece, source: ZoneKind) -> Result<(), EngineError> {
        self.transfer(player, piece, ZoneKind::Deck, source)
    }

    pub fn set_aside(&mut self, player: PlayerId, piece: &Piece, source: ZoneKind) -> Result<(), EngineError> {
        self.transfer(player, piece, ZoneKind::Aside, source)
    }

    pub fn swap_top_cards(&mut self, player: PlayerId) {
        self.players[player].deck.swap_top_two();
    }
}
