//! Card registry for pile lookup.
//!
//! The `CardRegistry` records which card types are in play for one game and
//! the supply pile each one lives in.

use rustc_hash::FxHashMap;

use super::definition::CardId;
use super::kind::CardKind;

/// Registry of the card types in one game.
///
/// ```
/// use deck_engine::cards::{CardId, CardKind, CardRegistry};
///
/// let registry = CardRegistry::from_kinds(&[CardKind::Copper, CardKind::Smithy]);
///
/// assert_eq!(registry.id_of(CardKind::Smithy), Some(CardId::new(1)));
/// assert!(!registry.contains(CardKind::Gold));
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    kinds: Vec<CardKind>,
    by_kind: FxHashMap<CardKind, CardId>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry whose pile order is the order of `kinds`.
    #[must_use]
    pub fn from_kinds(kinds: &[CardKind]) -> Self {
        let mut registry = Self::new();
        for &kind in kinds {
            registry.register(kind);
        }
        registry
    }

    /// Register a card type at the next pile index and return its ID.
    ///
    /// Registering a kind twice returns the existing ID.
    pub fn register(&mut self, kind: CardKind) -> CardId {
        if let Some(&id) = self.by_kind.get(&kind) {
            return id;
        }
        let id = CardId::new(self.kinds.len() as u32);
        self.kinds.push(kind);
        self.by_kind.insert(kind, id);
        id
    }

    /// Look up the pile index of a card type.
    #[must_use]
    pub fn id_of(&self, kind: CardKind) -> Option<CardId> {
        self.by_kind.get(&kind).copied()
    }

    #[must_use]
    pub fn contains(&self, kind: CardKind) -> bool {
        self.by_kind.contains_key(&kind)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}
