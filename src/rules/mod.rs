//! Ranking, look-ahead heuristics, and game results.
//!
//! Players rank by `Standing`: more victory points first, then fewer turns
//! played. Heuristics evaluate that ranking as if a candidate gain had
//! happened, so deciders can spot game-ending wins, ties and losses before
//! committing to them.

pub mod heuristics;
pub mod outcome;

pub use crate::core::Standing;
pub use heuristics::{
    acquisition_ends_game, classify_acts, classify_consequences, evaluate_acquisitions, evaluate_act,
    extract_acquisitions, would_defeat, would_defeat_or_tie, would_win, would_win_outright, AcquisitionBuckets,
    AcquisitionOutcomes, ActOutlook, ConsequenceBuckets, Hypothesis,
};
pub use outcome::GameResult;
