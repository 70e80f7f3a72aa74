//! Effect system: what happens when a choice is made.
//!
//! - `Effect`: Atomic operations with bound arguments
//! - `Process`: Setup, repeated main effects, teardown; attacks add a
//!   defense check
//! - `Consequence`: One selectable outcome, a tagged list of steps
//! - resolver: `resolve`, `enact`, `expand_choices`, `request_input`,
//!   `resolve_effects`
//!
//! ## Design Philosophy
//!
//! Effects and consequences are plain data: generating choices never
//! touches the state, and applying one consequence is the only way the
//! state changes.

mod consequence;
mod effect;
mod process;
mod resolver;

pub use consequence::{Consequence, ConsequenceClass, ConsequenceKind, Step};
pub use effect::{Effect, PieceList, ProcessUpdate};
pub use process::{DefenseCheck, Process, StopCondition};
pub use resolver::{apply, enact, expand_choices, request_input, resolve, resolve_effects, Feedback};
