//! Card system: catalogue, card IDs, pieces, and registry.
//!
//! ## Key Types
//!
//! - `CardKind`: Every card type the engine knows, with its static profile
//! - `CardId`: Supply-pile index of a card type in one game
//! - `Piece`: One physical card, identified by its `EntityId`
//! - `CardRegistry`: Pile index of each card type in play

pub mod definition;
pub mod kind;
pub mod registry;

pub use definition::{CardId, Piece};
pub use kind::CardKind;
pub use registry::CardRegistry;
