//! Consequences: the selectable outcomes of a decision.
//!
//! A `Consequence` is an ordered list of steps (effects or processes)
//! applied together once chosen. Its `ConsequenceKind` tags what sort of
//! outcome it is, so deciders and heuristics can tell a phase-ending pass
//! from a purchase without inspecting the steps. The tag never changes how
//! the steps are applied.

use crate::cards::Piece;
use crate::core::{Phase, PlayerId};

use super::effect::Effect;
use super::process::Process;

/// What a consequence amounts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsequenceKind {
    /// Ends the named phase.
    Pass { phase: Phase },
    /// Changes nothing.
    Null,
    /// Plays an action card.
    Act { action: Piece },
    /// Gains a piece from the supply.
    Acquisition { gained: Piece },
    /// Gains a piece by paying a buy and its cost.
    Purchase { gained: Piece },
    /// Gains a piece by trashing another.
    DependentAcquisition { gained: Piece, lost: Piece },
    /// Anything else.
    Generic,
}

/// Category used to bucket consequences. Purchases and dependent
/// acquisitions are also acquisitions; every consequence is `Any`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsequenceClass {
    Pass,
    Null,
    Act,
    Purchase,
    DependentAcquisition,
    Acquisition,
    Any,
}

/// One step of a consequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    Effect(Effect),
    Process(Box<Process>),
}

impl From<Effect> for Step {
    fn from(effect: Effect) -> Self {
        Step::Effect(effect)
    }
}

impl From<Process> for Step {
    fn from(process: Process) -> Self {
        Step::Process(Box::new(process))
    }
}

/// A selectable outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Consequence {
    pub kind: ConsequenceKind,
    pub steps: Vec<Step>,
    /// Overrides the generated description.
    pub message: Option<&'static str>,
}

impl Consequence {
    #[must_use]
    pub fn new(kind: ConsequenceKind, steps: Vec<Step>) -> Self {
        Self { kind, steps, message: None }
    }

    /// Untagged consequence from effects.
    #[must_use]
    pub fn generic(effects: impl IntoIterator<Item = Effect>) -> Self {
        Self::new(ConsequenceKind::Generic, effects.into_iter().map(Step::from).collect())
    }

    /// End `phase`.
    #[must_use]
    pub fn pass(phase: Phase) -> Self {
        Self::new(ConsequenceKind::Pass { phase }, vec![Effect::EndPhase { phase }.into()])
    }

    /// Do nothing.
    #[must_use]
    pub fn null() -> Self {
        Self::new(ConsequenceKind::Null, vec![Effect::DoNothing.into()])
    }

    /// Play `action` from hand, spending an action.
    #[must_use]
    pub fn act(actor: PlayerId, action: Piece) -> Self {
        let play = Effect::Play { actor, piece: action, source: crate::zones::ZoneKind::Hand, free: false };
        Self::new(ConsequenceKind::Act { action }, vec![play.into()])
    }

    /// Gain `gained` through the given effects.
    #[must_use]
    pub fn acquisition(gained: Piece, effects: impl IntoIterator<Item = Effect>) -> Self {
        Self::new(
            ConsequenceKind::Acquisition { gained },
            effects.into_iter().map(Step::from).collect(),
        )
    }

    /// Buy `piece`.
    #[must_use]
    pub fn purchase(actor: PlayerId, piece: Piece) -> Self {
        Self::new(ConsequenceKind::Purchase { gained: piece }, vec![Effect::Buy { actor, piece }.into()])
    }

    /// Trash `lost`, then gain `gained`.
    #[must_use]
    pub fn dependent_acquisition(gained: Piece, lost: Piece, effects: impl IntoIterator<Item = Effect>) -> Self {
        Self::new(
            ConsequenceKind::DependentAcquisition { gained, lost },
            effects.into_iter().map(Step::from).collect(),
        )
    }

    #[must_use]
    pub fn with_message(mut self, message: &'static str) -> Self {
        self.message = Some(message);
        self
    }

    pub fn push(&mut self, step: impl Into<Step>) {
        self.steps.push(step.into());
    }

    /// The piece this consequence gains, if it is an acquisition.
    #[must_use]
    pub fn gained(&self) -> Option<Piece> {
        match self.kind {
            ConsequenceKind::Acquisition { gained }
            | ConsequenceKind::Purchase { gained }
            | ConsequenceKind::DependentAcquisition { gained, .. } => Some(gained),
            _ => None,
        }
    }

    /// The piece given up for a dependent acquisition.
    #[must_use]
    pub fn lost(&self) -> Option<Piece> {
        match self.kind {
            ConsequenceKind::DependentAcquisition { lost, .. } => Some(lost),
            _ => None,
        }
    }

    /// Whether this consequence belongs to `class`.
    #[must_use]
    pub fn satisfies(&self, class: ConsequenceClass) -> bool {
        use ConsequenceKind as K;
        match class {
            ConsequenceClass::Any => true,
            ConsequenceClass::Pass => matches!(self.kind, K::Pass { .. }),
            ConsequenceClass::Null => matches!(self.kind, K::Null),
            ConsequenceClass::Act => matches!(self.kind, K::Act { .. }),
            ConsequenceClass::Purchase => matches!(self.kind, K::Purchase { .. }),
            ConsequenceClass::DependentAcquisition => matches!(self.kind, K::DependentAcquisition { .. }),
            ConsequenceClass::Acquisition => self.gained().is_some(),
        }
    }
}

impl std::fmt::Display for Consequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(message) = self.message {
            return f.write_str(message);
        }
        match self.kind {
            ConsequenceKind::Pass { phase } => return write!(f, "end the {phase}"),
            ConsequenceKind::Null => return f.write_str("do nothing"),
            _ => {}
        }
        let mut first = true;
        for step in &self.steps {
            let text = match step {
                Step::Effect(Effect::Reveal { .. } | Effect::PrepareDeck { .. } | Effect::DoNothing) => continue,
                Step::Effect(effect) => effect.to_string(),
                Step::Process(process) => format!("affect {}", process.actor),
            };
            if !first {
                f.write_str(", then ")?;
            }
            f.write_str(&text)?;
            first = false;
        }
        if first {
            f.write_str("do nothing")?;
        }
        Ok(())
    }
}
