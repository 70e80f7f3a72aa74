//! Ordered piece containers.
//!
//! A `Zone` is an ordered sequence of pieces. For decks the end of the
//! sequence is the top, so drawing pops from the back and topdecking pushes
//! onto it. Every other zone just appends in arrival order.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Piece;

/// Which of an actor's zones a piece lives in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneKind {
    Hand,
    Deck,
    Discard,
    Play,
    Aside,
}

impl ZoneKind {
    /// All actor zones.
    pub const ALL: [ZoneKind; 5] = [
        ZoneKind::Hand,
        ZoneKind::Deck,
        ZoneKind::Discard,
        ZoneKind::Play,
        ZoneKind::Aside,
    ];
}

impl std::fmt::Display for ZoneKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ZoneKind::Hand => "hand",
            ZoneKind::Deck => "deck",
            ZoneKind::Discard => "discard pile",
            ZoneKind::Play => "play area",
            ZoneKind::Aside => "set-aside zone",
        };
        f.write_str(name)
    }
}

/// Ordered sequence of pieces; the last element is the top.
///
/// ```
/// use deck_engine::zones::Zone;
/// # use deck_engine::cards::{CardId, CardKind, Piece};
/// # use deck_engine::core::EntityId;
/// # let copper = Piece::new(EntityId(0), CardId(4), CardKind::Copper);
/// # let estate = Piece::new(EntityId(1), CardId(1), CardKind::Estate);
///
/// let mut deck = Zone::new();
/// deck.push(copper);
/// deck.push(estate);
///
/// assert_eq!(deck.top(), Some(&estate));
/// assert_eq!(deck.pop(), Some(estate));
/// assert_eq!(deck.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    pieces: Vec<Piece>,
}

impl Zone {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Piece> {
        self.pieces.iter()
    }

    #[must_use]
    pub fn contains(&self, piece: &Piece) -> bool {
        self.pieces.contains(piece)
    }

    /// Put a piece on top.
    pub fn push(&mut self, piece: Piece) {
        self.pieces.push(piece);
    }

    pub fn extend(&mut self, pieces: impl IntoIterator<Item = Piece>) {
        self.pieces.extend(pieces);
    }

    #[must_use]
    pub fn top(&self) -> Option<&Piece> {
        self.pieces.last()
    }

    /// Up to `n` pieces from the top, topmost first.
    #[must_use]
    pub fn top_n(&self, n: usize) -> SmallVec<[Piece; 2]> {
        self.pieces.iter().rev().take(n).copied().collect()
    }

    /// Take the top piece.
    pub fn pop(&mut self) -> Option<Piece> {
        self.pieces.pop()
    }

    /// Remove a specific piece, wherever it sits.
    pub fn take(&mut self, piece: &Piece) -> Option<Piece> {
        let index = self.pieces.iter().position(|p| p == piece)?;
        Some(self.pieces.remove(index))
    }

    /// Empty the zone, returning its contents bottom to top.
    pub fn drain(&mut self) -> Vec<Piece> {
        std::mem::take(&mut self.pieces)
    }

    /// Slide pieces underneath the current contents.
    pub fn insert_under(&mut self, pieces: Vec<Piece>) {
        let above = std::mem::replace(&mut self.pieces, pieces);
        self.pieces.extend(above);
    }

    /// Swap the top two pieces. No-op with fewer than two.
    pub fn swap_top_two(&mut self) {
        let len = self.pieces.len();
        if len >= 2 {
            self.pieces.swap(len - 1, len - 2);
        }
    }
}

impl<'a> IntoIterator for &'a Zone {
    type Item = &'a Piece;
    type IntoIter = std::slice::Iter<'a, Piece>;

    fn into_iter(self) -> Self::IntoIter {
        self.pieces.iter()
    }
}

impl FromIterator<Piece> for Zone {
    fn from_iter<I: IntoIterator<Item = Piece>>(iter: I) -> Self {
        Self {
            pieces: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, CardKind};
    use crate::core::EntityId;

    fn piece(id: u32, kind: CardKind) -> Piece {
        Piece::new(EntityId(id), CardId(kind as u32), kind)
    }

    #[test]
    fn test_take_by_identity() {
        let a = piece(1, CardKind::Copper);
        let b = piece(2, CardKind::Copper);
        let mut zone: Zone = [a, b].into_iter().collect();

        assert_eq!(zone.take(&b), Some(b));
        assert_eq!(zone.as_slice(), &[a]);
        assert_eq!(zone.take(&b), None);
    }

    #[test]
    fn test_top_n_is_topmost_first() {
        let zone: Zone = (0..4).map(|i| piece(i, CardKind::Estate)).collect();

        let top = zone.top_n(2);
        assert_eq!(top.as_slice(), &[piece(3, CardKind::Estate), piece(2, CardKind::Estate)]);
        assert_eq!(zone.top_n(10).len(), 4);
    }

    #[test]
    fn test_insert_under_keeps_top() {
        let mut deck: Zone = [piece(1, CardKind::Gold)].into_iter().collect();
        deck.insert_under(vec![piece(2, CardKind::Copper), piece(3, CardKind::Copper)]);

        assert_eq!(deck.len(), 3);
        assert_eq!(deck.top(), Some(&piece(1, CardKind::Gold)));
    }

    #[test]
    fn test_swap_top_two() {
        let a = piece(1, CardKind::Gold);
        let b = piece(2, CardKind::Silver);
        let mut deck: Zone = [a, b].into_iter().collect();

        deck.swap_top_two();
        assert_eq!(deck.top(), Some(&a));

        let mut single: Zone = [a].into_iter().collect();
        single.swap_top_two();
        assert_eq!(single.top(), Some(&a));
    }
}
