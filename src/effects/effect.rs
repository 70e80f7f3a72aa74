//! Effect definitions.
//!
//! An `Effect` is one atomic operation with its arguments bound. Most move
//! pieces between zones or adjust turn resources; two are special:
//!
//! - `Initiate` opens a nested choice point, resolved by a decider.
//! - `Update` mutates the enclosing `Process` instead of the game state,
//!   letting a sub-decision report back (a revealed Moat).
//!
//! Effects are plain data. Applying them is the resolver's job.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Piece;
use crate::core::{Phase, PlayerId};
use crate::decisions::Decision;
use crate::zones::ZoneKind;

/// Pieces carried by a multi-piece effect.
pub type PieceList = SmallVec<[Piece; 4]>;

/// Message from a sub-decision to its enclosing process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcessUpdate {
    /// The victim revealed a defense; the attack stops.
    MarkImmunity,
}

/// An atomic game effect.
///
/// ## Turn resources
///
/// `AddCards` draws for the current player; the other `Add*` variants adjust
/// the turn counters. These make up cards' simple effects.
///
/// ## Zone transfers
///
/// Every transfer names its actor, the piece (by identity) and, where it
/// matters, the source zone. A transfer whose piece is elsewhere fails.
///
/// ## Control
///
/// `Play`, `PlayTreasures` and `ResolveEffects` resolve card effects;
/// `Initiate` opens a sub-decision; `Update` signals the enclosing process.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    // === Turn resources ===
    AddCards { n: usize },
    AddActions { n: i32 },
    AddBuys { n: i32 },
    AddCoins { n: i32 },
    AddMerchantBonus,
    /// Silver's +2, plus the Merchant bonus on the first Silver.
    PlaySilver,
    EndPhase { phase: Phase },

    // === Drawing ===
    Draw { actor: PlayerId, n: usize },
    /// Reshuffle ahead of an interaction that needs `n` cards.
    PrepareDeck { actor: PlayerId, n: usize },
    SwapTopCards { actor: PlayerId },

    // === Supply ===
    Gain { actor: PlayerId, piece: Piece, destination: ZoneKind },
    Buy { actor: PlayerId, piece: Piece },

    // === Transfers ===
    Trash { actor: PlayerId, piece: Piece, source: ZoneKind },
    TrashPieces { actor: PlayerId, pieces: PieceList, source: ZoneKind },
    Discard { actor: PlayerId, piece: Piece, source: ZoneKind },
    DiscardPieces { actor: PlayerId, pieces: PieceList, source: ZoneKind },
    DiscardZone { actor: PlayerId, source: ZoneKind },
    Topdeck { actor: PlayerId, piece: Piece, source: ZoneKind },
    Put { actor: PlayerId, piece: Piece, destination: ZoneKind, source: ZoneKind },
    SetAside { actor: PlayerId, piece: Piece, source: ZoneKind },

    // === Playing ===
    /// Move a card into play and resolve it.
    Play { actor: PlayerId, piece: Piece, source: ZoneKind, free: bool },
    /// Play each treasure from hand, then end the treasure phase.
    PlayTreasures { actor: PlayerId, pieces: PieceList },
    /// Resolve a card's effects again without moving it.
    ResolveEffects { actor: PlayerId, piece: Piece },

    // === Information ===
    Reveal { actor: PlayerId, piece: Piece },
    DoNothing,

    // === Control ===
    /// Open a sub-decision for `actor`, chosen by `decider` (the actor when
    /// `None`).
    Initiate { actor: PlayerId, decision: Decision, decider: Option<PlayerId> },
    Update(ProcessUpdate),
}

impl Effect {
    pub fn draw(actor: PlayerId, n: usize) -> Self {
        Self::Draw { actor, n }
    }

    pub fn gain(actor: PlayerId, piece: Piece) -> Self {
        Self::Gain { actor, piece, destination: ZoneKind::Discard }
    }

    pub fn gain_to(actor: PlayerId, piece: Piece, destination: ZoneKind) -> Self {
        Self::Gain { actor, piece, destination }
    }

    /// Trash a piece from hand.
    pub fn trash(actor: PlayerId, piece: Piece) -> Self {
        Self::Trash { actor, piece, source: ZoneKind::Hand }
    }

    /// Discard a piece from hand.
    pub fn discard(actor: PlayerId, piece: Piece) -> Self {
        Self::Discard { actor, piece, source: ZoneKind::Hand }
    }

    pub fn topdeck(actor: PlayerId, piece: Piece, source: ZoneKind) -> Self {
        Self::Topdeck { actor, piece, source }
    }

    pub fn reveal(actor: PlayerId, piece: Piece) -> Self {
        Self::Reveal { actor, piece }
    }

    /// Sub-decision for `actor`, chosen by `actor`.
    pub fn initiate(actor: PlayerId, decision: Decision) -> Self {
        Self::Initiate { actor, decision, decider: None }
    }

    /// The piece this effect gains from the supply, if any.
    #[must_use]
    pub fn gained(&self) -> Option<Piece> {
        match self {
            Effect::Gain { piece, .. } | Effect::Buy { piece, .. } => Some(*piece),
            _ => None,
        }
    }
}

impl std::fmt::Display for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let list = |pieces: &PieceList| {
            pieces.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
        };
        match self {
            Effect::AddCards { n } => write!(f, "+{n} cards"),
            Effect::AddActions { n } => write!(f, "+{n} actions"),
            Effect::AddBuys { n } => write!(f, "+{n} buys"),
            Effect::AddCoins { n } => write!(f, "+{n} coins"),
            Effect::AddMerchantBonus => f.write_str("boost the first Silver"),
            Effect::PlaySilver => f.write_str("+2 coins"),
            Effect::EndPhase { phase } => write!(f, "end the {phase}"),
            Effect::Draw { actor, n } => write!(f, "{actor} draws {n}"),
            Effect::PrepareDeck { .. } => f.write_str("check the deck"),
            Effect::SwapTopCards { .. } => f.write_str("swap the top two cards"),
            Effect::Gain { piece, destination, .. } => match destination {
                ZoneKind::Discard => write!(f, "gain {piece}"),
                _ => write!(f, "gain {piece} to {destination}"),
            },
            Effect::Buy { piece, .. } => write!(f, "buy {piece}"),
            Effect::Trash { piece, .. } => write!(f, "trash {piece}"),
            Effect::TrashPieces { pieces, .. } => write!(f, "trash {}", list(pieces)),
            Effect::Discard { piece, .. } => write!(f, "discard {piece}"),
            Effect::DiscardPieces { pieces, .. } => write!(f, "discard {}", list(pieces)),
            Effect::DiscardZone { source, .. } => write!(f, "discard the {source}"),
            Effect::Topdeck { piece, .. } => write!(f, "put {piece} on the deck"),
            Effect::Put { piece, destination, .. } => write!(f, "put {piece} into the {destination}"),
            Effect::SetAside { piece, .. } => write!(f, "set aside {piece}"),
            Effect::Play { piece, .. } => write!(f, "play {piece}"),
            Effect::PlayTreasures { pieces, .. } => write!(f, "play {}", list(pieces)),
            Effect::ResolveEffects { piece, .. } => write!(f, "resolve {piece} again"),
            Effect::Reveal { piece, .. } => write!(f, "reveal {piece}"),
            Effect::DoNothing => f.write_str("do nothing"),
            Effect::Initiate { actor, decision, .. } => write!(f, "{actor}: {decision:?}"),
            Effect::Update(_) => f.write_str("become immune"),
        }
    }
}
