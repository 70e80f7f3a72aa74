//! Decision catalogue.
//!
//! A `Decision` names a choice point. `generate_choices` turns it into the
//! list of legal `Consequence`s for one actor, reading the state and never
//! changing it. The list is never empty: every generator offers at least a
//! pass, a null option, or a forced move.
//!
//! ## Layout
//!
//! - `phases`: Action, Treasure and Buy phases
//! - `kingdom`: non-attack kingdom cards
//! - `attacks`: attack cards and the victims' sub-decisions
//! - `reveal`: cards that look at the top of the deck (Vassal, Sentry,
//!   Library)
//!
//! ## Deck requirements
//!
//! Decisions that inspect the deck declare how many cards they need through
//! `deck_requirement`; the resolver reshuffles before generating so the
//! generators themselves can stay pure.

mod attacks;
mod kingdom;
mod phases;
mod reveal;

use crate::cards::CardKind;
use crate::core::{GameState, PlayerId};
use crate::effects::Consequence;

/// A choice point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Decision {
    // === Turn phases ===
    ActionPhase,
    TreasurePhase,
    BuyPhase,

    // === Played cards ===
    Cellar,
    Chapel,
    Harbinger,
    Vassal,
    Workshop,
    Bureaucrat,
    Militia,
    Moneylender,
    Poacher,
    Remodel,
    ThroneRoom,
    Bandit,
    CouncilRoom,
    Library,
    Mine,
    Sentry,
    Witch,
    Artisan,

    // === Sub-decisions ===
    /// Reveal `reaction` from hand to be unaffected by an attack.
    Immunity { reaction: CardKind },
    MilitiaDiscard,
    BureaucratReveal,
    BanditReveal,
    WitchCurse,
    CouncilRoomDraw,
    LibraryDraw,
    LibraryTeardown,
    PoacherDiscard,
}

impl Decision {
    /// Every legal outcome for `actor`. Never empty.
    #[must_use]
    pub fn generate_choices(&self, state: &GameState, actor: PlayerId) -> Vec<Consequence> {
        use Decision::*;
        match *self {
            ActionPhase => phases::action_phase(state, actor),
            TreasurePhase => phases::treasure_phase(state, actor),
            BuyPhase => phases::buy_phase(state, actor),

            Cellar => kingdom::cellar(state, actor),
            Chapel => kingdom::chapel(state, actor),
            Harbinger => kingdom::harbinger(state, actor),
            Workshop => kingdom::workshop(state, actor),
            Moneylender => kingdom::moneylender(state, actor),
            Poacher => kingdom::poacher(state, actor),
            PoacherDiscard => kingdom::poacher_discard(state, actor),
            Remodel => kingdom::remodel(state, actor),
            ThroneRoom => kingdom::throne_room(state, actor),
            CouncilRoom => kingdom::council_room(state, actor),
            CouncilRoomDraw => kingdom::council_room_draw(actor),
            Mine => kingdom::mine(state, actor),
            Artisan => kingdom::artisan(state, actor),

            Bureaucrat => attacks::bureaucrat(state, actor),
            BureaucratReveal => attacks::bureaucrat_reveal(state, actor),
            Militia => attacks::militia(state, actor),
            MilitiaDiscard => attacks::militia_discard(state, actor),
            Bandit => attacks::bandit(state, actor),
            BanditReveal => attacks::bandit_reveal(state, actor),
            Witch => attacks::witch(state, actor),
            WitchCurse => attacks::witch_curse(state, actor),
            Immunity { reaction } => attacks::immunity(state, actor, reaction),

            Vassal => reveal::vassal(state, actor),
            Sentry => reveal::sentry(state, actor),
            Library => reveal::library(state, actor),
            LibraryDraw => reveal::library_draw(state, actor),
            LibraryTeardown => reveal::library_teardown(state, actor),
        }
    }

    /// Number of deck cards this decision looks at, if any.
    #[must_use]
    pub const fn deck_requirement(&self) -> Option<usize> {
        match self {
            Decision::Vassal | Decision::LibraryDraw => Some(1),
            Decision::Sentry | Decision::BanditReveal => Some(2),
            _ => None,
        }
    }
}
