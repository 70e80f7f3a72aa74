//! Piece identity.
//!
//! Every physical card in a game carries a unique `EntityId`. Two Coppers
//! share a `CardId` but never an `EntityId`; zone membership and the
//! conservation checks in the test suite compare entities, not card types.
//!
//! ## Allocation
//!
//! IDs are handed out once, during game setup, by an `EntityAllocator`.
//! Pieces are never destroyed (trashing only moves them), so an ID is
//! never reused within a game.
//!
//! ```
//! use deck_engine::core::{EntityAllocator, EntityId};
//!
//! let mut alloc = EntityAllocator::default();
//! let a = alloc.next_id();
//! let b = alloc.next_id();
//!
//! assert_eq!(a, EntityId(0));
//! assert_ne!(a, b);
//! assert_eq!(alloc.allocated(), 2);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for one physical piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Create an entity ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic source of fresh `EntityId`s for one game.
#[derive(Clone, Debug, Default)]
pub struct EntityAllocator {
    next: u32,
}

impl EntityAllocator {
    /// Allocate the next unused ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next);
        self.next += 1;
        id
    }

    /// Number of IDs handed out so far.
    #[must_use]
    pub fn allocated(&self) -> usize {
        self.next as usize
    }
}
