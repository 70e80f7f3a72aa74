//! Error types.
//!
//! The engine generates only legal choices, so an `EngineError` always points
//! at a defect in a caller: a decider returning an out-of-range index, a
//! scheduler driving a finished game, or an effect naming a piece that has
//! already moved. They are reported, never recovered from.

use derive_more::{Display, Error};

use crate::cards::{CardKind, Piece};
use crate::decisions::Decision;
use crate::zones::ZoneKind;

use super::PlayerId;

/// Failure while generating or applying a consequence.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// An effect referred to a piece that is not where it expected.
    #[display("{piece} ({}) is not in the {zone}", piece.id)]
    PieceNotFound {
        #[error(not(source))]
        piece: Piece,
        #[error(not(source))]
        zone: ZoneKind,
    },

    /// A gain referred to a supply pile that has no piece of that type on top.
    #[display("supply pile for {_0} cannot provide {}", _1.id)]
    NotInSupply(#[error(not(source))] CardKind, #[error(not(source))] Piece),

    /// The card type is not part of this game's supply.
    #[display("{_0} is not in this game's supply")]
    UnknownCard(#[error(not(source))] CardKind),

    /// A decision produced no choices.
    #[display("{_0:?} produced no choices")]
    NoLegalChoices(#[error(not(source))] Decision),

    /// A decider picked an index outside the offered choices.
    #[display("selected choice {index} of {available}")]
    InvalidSelection { index: usize, available: usize },

    /// A turn was requested after the game ended.
    #[display("the game is already over")]
    GameOver,
}

/// Invalid game setup.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    #[display("{_0} players requested; between 2 and 6 are supported")]
    PlayerCount(#[error(not(source))] usize),

    #[display("kingdom has {_0} cards; exactly 10 are required")]
    KingdomSize(#[error(not(source))] usize),

    #[display("{_0} appears more than once in the kingdom")]
    DuplicateKingdomCard(#[error(not(source))] CardKind),

    #[display("{_0} is a basic supply card, not a kingdom card")]
    NotKingdomCard(#[error(not(source))] CardKind),

    #[display("{_0} is not a seat in a {_1}-player game")]
    HumanSeat(#[error(not(source))] PlayerId, #[error(not(source))] usize),

    #[display("{_0} deciders supplied for {_1} players")]
    DeciderCount(#[error(not(source))] usize, #[error(not(source))] usize),
}
