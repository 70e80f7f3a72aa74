//! Card IDs and pieces.
//!
//! A `CardId` is the position of a card type's supply pile in one game,
//! which doubles as the canonical sort key between card types.
//!
//! A `Piece` is one physical copy. Pieces are `Copy` handles; identity is the
//! `EntityId`, so two Coppers compare unequal even though every property
//! they expose is the same.

use serde::{Deserialize, Serialize};

use crate::core::EntityId;

use super::kind::CardKind;

/// Supply-pile index of a card type in the current game.
///
/// Stable for the duration of a game and totally ordered, so it is also the
/// tie-break key whenever choices need a deterministic order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The supply pile this card type is stored in.
    #[must_use]
    pub const fn pile_index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// One physical card.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Piece {
    pub id: EntityId,
    pub card: CardId,
    pub kind: CardKind,
}

impl Piece {
    #[must_use]
    pub const fn new(id: EntityId, card: CardId, kind: CardKind) -> Self {
        Self { id, card, kind }
    }

    #[must_use]
    pub const fn cost(&self) -> i32 {
        self.kind.cost()
    }

    #[must_use]
    pub const fn is_action(&self) -> bool {
        self.kind.is_action()
    }

    #[must_use]
    pub const fn is_treasure(&self) -> bool {
        self.kind.is_treasure()
    }

    #[must_use]
    pub const fn is_victory(&self) -> bool {
        self.kind.is_victory()
    }

    #[must_use]
    pub const fn is_potential_terminator(&self) -> bool {
        self.kind.is_potential_terminator()
    }

    /// Whether `other` is a copy of the same card type.
    #[must_use]
    pub fn same_type(&self, other: &Piece) -> bool {
        self.card == other.card
    }
}

impl PartialEq for Piece {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Piece {}

impl std::hash::Hash for Piece {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.kind.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(4);
        assert_eq!(id.raw(), 4);
        assert_eq!(id.pile_index(), 4);
        assert_eq!(format!("{}", id), "Card(4)");
    }

    #[test]
    fn test_piece_identity_is_entity() {
        let a = Piece::new(EntityId(1), CardId(4), CardKind::Copper);
        let b = Piece::new(EntityId(2), CardId(4), CardKind::Copper);

        assert_ne!(a, b);
        assert!(a.same_type(&b));
        assert_eq!(a, a);
    }

    #[test]
    fn test_piece_reads_its_kind() {
        let workshop = Piece::new(EntityId(3), CardId(9), CardKind::Workshop);
        assert_eq!(workshop.cost(), 3);
        assert!(workshop.is_action());
        assert!(workshop.is_potential_terminator());
        assert!(!workshop.is_treasure());
    }
}
