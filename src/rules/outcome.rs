//! Final result of a game.

use crate::core::{GameState, PlayerId, Standing};

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Several players share the best standing.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Winners by standing: most victory points, then fewest turns.
    #[must_use]
    pub fn from_state(state: &GameState) -> Self {
        let standings: Vec<(PlayerId, Standing)> =
            state.players.iter().map(|(id, actor)| (id, actor.standing())).collect();
        let best = standings.iter().map(|(_, standing)| *standing).max();
        let mut winners: Vec<PlayerId> = standings
            .into_iter()
            .filter(|(_, standing)| Some(*standing) == best)
            .map(|(id, _)| id)
            .collect();

        if winners.len() == 1 {
            GameResult::Winner(winners.remove(0))
        } else {
            GameResult::Winners(winners)
        }
    }

    /// Check if a player won or shared the win.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
        }
    }
}
