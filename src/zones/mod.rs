//! Zone system for piece locations.
//!
//! Every piece in a game sits in exactly one zone at any time: one of an
//! actor's five zones, a supply pile, or the trash.
//!
//! ## Key Types
//!
//! - `Zone`: Ordered piece container, top at the end
//! - `ZoneKind`: Names an actor's hand, deck, discard, play area, or aside zone

pub mod zone;

pub use zone::{Zone, ZoneKind};
