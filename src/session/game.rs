//! Game setup, the turn loop, and final placements.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::cards::CardKind;
use crate::core::{ConfigError, EngineError, GameConfig, GameRng, GameState, PlayerId, Standing};
use crate::decisions::Decision;
use crate::effects::resolve;
use crate::policy::{seats, Decider, RandomDecider, Seats};
use crate::rules::GameResult;

/// A player's final position. Tied players share a rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub player: PlayerId,
    /// 1 for the winner(s).
    pub rank: usize,
    pub standing: Standing,
}

/// One game: its state and the decider at each seat.
pub struct Session {
    state: GameState,
    seats: Seats,
}

impl Session {
    /// Validate `config`, deal the opening hands, and seat `deciders` in
    /// order.
    pub fn new(config: GameConfig, deciders: Vec<Box<dyn Decider>>) -> Result<Self, ConfigError> {
        config.validate()?;
        if deciders.len() != config.player_count {
            return Err(ConfigError::DeciderCount(deciders.len(), config.player_count));
        }
        let state = GameState::new(&config)?;
        info!(
            players = config.player_count,
            seed = config.seed,
            kingdom = ?config.kingdom,
            "Game created"
        );
        Ok(Self { state, seats: seats(deciders) })
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access, for arranging positions in tests and tools.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.game_over()
    }

    /// Resolve one decision for `actor` outside the turn structure.
    pub fn resolve(&mut self, actor: PlayerId, decision: Decision) -> Result<(), EngineError> {
        resolve(&mut self.state, &mut self.seats, actor, decision, None).map(|_| ())
    }

    /// Play the current player's turn: action, treasure and buy phases,
    /// then cleanup.
    #[instrument(
        level = "debug",
        skip(self),
        fields(player = %self.state.current_player, turn = self.state.n_total_turns_played)
    )]
    pub fn take_turn(&mut self) -> Result<(), EngineError> {
        if self.state.game_over() {
            return Err(EngineError::GameOver);
        }
        let player = self.state.current_player;
        info!("Turn started");

        self.state.start_turn();
        while self.state.need_action_phase {
            resolve(&mut self.state, &mut self.seats, player, Decision::ActionPhase, None)?;
        }
        while self.state.need_treasure_phase {
            resolve(&mut self.state, &mut self.seats, player, Decision::TreasurePhase, None)?;
        }
        while self.state.need_buy_phase {
            resolve(&mut self.state, &mut self.seats, player, Decision::BuyPhase, None)?;
        }
        self.state.end_turn();
        Ok(())
    }

    /// Play turns until the game ends.
    pub fn run(&mut self) -> Result<Vec<Placement>, EngineError> {
        info!("Game started");
        while !self.state.game_over() {
            self.take_turn()?;
        }

        let placements = self.placements();
        for placement in &placements {
            info!(
                player = %placement.player,
                rank = placement.rank,
                victory_points = placement.standing.victory_points,
                turns = placement.standing.n_turns_played,
                "Final standing"
            );
        }
        info!(
            turns = self.state.n_total_turns_played,
            empty_piles = self.state.n_empty_piles,
            provinces_gone = self.state.province_pile_empty,
            "Game over"
        );
        Ok(placements)
    }

    /// Players from best to worst standing; seat order breaks display ties.
    #[must_use]
    pub fn placements(&self) -> Vec<Placement> {
        let mut standings: Vec<(PlayerId, Standing)> =
            self.state.players.iter().map(|(id, actor)| (id, actor.standing())).collect();
        standings.sort_by(|a, b| b.1.cmp(&a.1));

        standings
            .iter()
            .map(|&(player, standing)| Placement {
                player,
                rank: 1 + standings.iter().filter(|(_, other)| *other > standing).count(),
                standing,
            })
            .collect()
    }

    #[must_use]
    pub fn result(&self) -> GameResult {
        GameResult::from_state(&self.state)
    }
}

/// Builder for a `Session`.
#[derive(Default)]
pub struct SessionBuilder {
    config: GameConfig,
    deciders: Vec<Box<dyn Decider>>,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn kingdom(mut self, kingdom: impl Into<Vec<CardKind>>) -> Self {
        self.config = self.config.with_kingdom(kingdom);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config = self.config.with_seed(seed);
        self
    }

    pub fn max_turns(mut self, max_turns: u32) -> Self {
        self.config = self.config.with_max_turns(max_turns);
        self
    }

    /// Add the next seat. The player count follows the number of seats.
    pub fn seat(mut self, decider: impl Decider + 'static) -> Self {
        self.deciders.push(Box::new(decider));
        self
    }

    /// Add a random seat whose stream is derived from the game seed set so
    /// far and the seat number.
    pub fn random_seat(self) -> Self {
        let context = format!("seat-{}", self.deciders.len());
        let rng = GameRng::new(self.config.seed).for_context(&context);
        self.seat(RandomDecider::from_rng(rng))
    }

    /// Add the next seat, played by a person.
    pub fn human_seat(mut self, decider: impl Decider + 'static) -> Self {
        let seat = PlayerId::new(self.deciders.len() as u8);
        self.config = self.config.with_human(seat);
        self.seat(decider)
    }

    pub fn build(mut self) -> Result<Session, ConfigError> {
        self.config.player_count = self.deciders.len();
        Session::new(self.config, self.deciders)
    }
}
