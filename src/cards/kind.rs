//! The card catalogue.
//!
//! `CardKind` names every card type the engine knows. Its static profile
//! (name, cost, type flags, victory value) lives here; what a card *does*
//! when played is split into unconditional simple effects and an optional
//! `Decision`, both supplied by `CardKind::simple_effects` and
//! `CardKind::decision`.

use serde::{Deserialize, Serialize};

use crate::decisions::Decision;
use crate::effects::Effect;

/// Every card type in the base set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CardKind {
    // Basic supply
    Curse,
    Estate,
    Duchy,
    Province,
    Copper,
    Silver,
    Gold,
    // Kingdom
    Cellar,
    Chapel,
    Moat,
    Harbinger,
    Merchant,
    Vassal,
    Village,
    Workshop,
    Bureaucrat,
    Gardens,
    Militia,
    Moneylender,
    Poacher,
    Remodel,
    Smithy,
    ThroneRoom,
    Bandit,
    CouncilRoom,
    Festival,
    Laboratory,
    Library,
    Market,
    Mine,
    Sentry,
    Witch,
    Artisan,
}

/// Type line of a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct TypeLine {
    action: bool,
    treasure: bool,
    victory: bool,
    curse: bool,
    attack: bool,
    reaction: bool,
}

const ACTION: TypeLine = TypeLine { action: true, treasure: false, victory: false, curse: false, attack: false, reaction: false };
const ATTACK: TypeLine = TypeLine { attack: true, ..ACTION };
const REACTION: TypeLine = TypeLine { reaction: true, ..ACTION };
const TREASURE: TypeLine = TypeLine { action: false, treasure: true, ..ACTION };
const VICTORY: TypeLine = TypeLine { action: false, victory: true, ..ACTION };
const CURSE: TypeLine = TypeLine { action: false, curse: true, ..ACTION };

impl CardKind {
    /// The seven piles present in every game, in supply order.
    pub const BASIC: [CardKind; 7] = [
        CardKind::Curse,
        CardKind::Estate,
        CardKind::Duchy,
        CardKind::Province,
        CardKind::Copper,
        CardKind::Silver,
        CardKind::Gold,
    ];

    /// Every kingdom card, in cost order.
    pub const KINGDOM: [CardKind; 26] = [
        CardKind::Cellar,
        CardKind::Chapel,
        CardKind::Moat,
        CardKind::Harbinger,
        CardKind::Merchant,
        CardKind::Vassal,
        CardKind::Village,
        CardKind::Workshop,
        CardKind::Bureaucrat,
        CardKind::Gardens,
        CardKind::Militia,
        CardKind::Moneylender,
        CardKind::Poacher,
        CardKind::Remodel,
        CardKind::Smithy,
        CardKind::ThroneRoom,
        CardKind::Bandit,
        CardKind::CouncilRoom,
        CardKind::Festival,
        CardKind::Laboratory,
        CardKind::Library,
        CardKind::Market,
        CardKind::Mine,
        CardKind::Sentry,
        CardKind::Witch,
        CardKind::Artisan,
    ];

    /// The recommended first-game kingdom.
    pub const FIRST_GAME: [CardKind; 10] = [
        CardKind::Cellar,
        CardKind::Moat,
        CardKind::Merchant,
        CardKind::Workshop,
        CardKind::Village,
        CardKind::Smithy,
        CardKind::Remodel,
        CardKind::Militia,
        CardKind::Market,
        CardKind::Mine,
    ];

    const fn profile(self) -> (&'static str, i32, TypeLine) {
        use CardKind::*;
        match self {
            Curse => ("Curse", 0, CURSE),
            Estate => ("Estate", 2, VICTORY),
            Duchy => ("Duchy", 5, VICTORY),
            Province => ("Province", 8, VICTORY),
            Copper => ("Copper", 0, TREASURE),
            Silver => ("Silver", 3, TREASURE),
            Gold => ("Gold", 6, TREASURE),
            Cellar => ("Cellar", 2, ACTION),
            Chapel => ("Chapel", 2, ACTION),
            Moat => ("Moat", 2, REACTION),
            Harbinger => ("Harbinger", 3, ACTION),
            Merchant => ("Merchant", 3, ACTION),
            Vassal => ("Vassal", 3, ACTION),
            Village => ("Village", 3, ACTION),
            Workshop => ("Workshop", 3, ACTION),
            Bureaucrat => ("Bureaucrat", 4, ATTACK),
            Gardens => ("Gardens", 4, VICTORY),
            Militia => ("Militia", 4, ATTACK),
            Moneylender => ("Moneylender", 4, ACTION),
            Poacher => ("Poacher", 4, ACTION),
            Remodel => ("Remodel", 4, ACTION),
            Smithy => ("Smithy", 4, ACTION),
            ThroneRoom => ("Throne Room", 4, ACTION),
            Bandit => ("Bandit", 5, ATTACK),
            CouncilRoom => ("Council Room", 5, ACTION),
            Festival => ("Festival", 5, ACTION),
            Laboratory => ("Laboratory", 5, ACTION),
            Library => ("Library", 5, ACTION),
            Market => ("Market", 5, ACTION),
            Mine => ("Mine", 5, ACTION),
            Sentry => ("Sentry", 5, ACTION),
            Witch => ("Witch", 5, ATTACK),
            Artisan => ("Artisan", 6, ACTION),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        self.profile().0
    }

    #[must_use]
    pub const fn cost(self) -> i32 {
        self.profile().1
    }

    #[must_use]
    pub const fn is_action(self) -> bool {
        self.profile().2.action
    }

    #[must_use]
    pub const fn is_treasure(self) -> bool {
        self.profile().2.treasure
    }

    #[must_use]
    pub const fn is_victory(self) -> bool {
        self.profile().2.victory
    }

    #[must_use]
    pub const fn is_curse(self) -> bool {
        self.profile().2.curse
    }

    #[must_use]
    pub const fn is_attack(self) -> bool {
        self.profile().2.attack
    }

    #[must_use]
    pub const fn is_reaction(self) -> bool {
        self.profile().2.reaction
    }

    /// Whether resolving this card can gain a piece from the supply, and so
    /// possibly end the game.
    #[must_use]
    pub const fn is_potential_terminator(self) -> bool {
        use CardKind::*;
        matches!(
            self,
            Vassal | Workshop | Bureaucrat | Remodel | ThroneRoom | Bandit | Mine | Witch | Artisan
        )
    }

    #[must_use]
    pub const fn is_kingdom(self) -> bool {
        !matches!(
            self,
            CardKind::Curse
                | CardKind::Estate
                | CardKind::Duchy
                | CardKind::Province
                | CardKind::Copper
                | CardKind::Silver
                | CardKind::Gold
        )
    }

    /// Victory points this card is worth in a collection of `collection_size`
    /// pieces.
    #[must_use]
    pub const fn victory_points(self, collection_size: usize) -> i32 {
        match self {
            CardKind::Curse => -1,
            CardKind::Estate => 1,
            CardKind::Duchy => 3,
            CardKind::Province => 6,
            CardKind::Gardens => (collection_size / 10) as i32,
            _ => 0,
        }
    }

    /// Effects applied unconditionally when the card is played.
    #[must_use]
    pub fn simple_effects(self) -> Vec<Effect> {
        use CardKind::*;
        match self {
            Copper => vec![Effect::AddCoins { n: 1 }],
            Silver => vec![Effect::PlaySilver],
            Gold => vec![Effect::AddCoins { n: 3 }],
            Cellar => vec![Effect::AddActions { n: 1 }],
            Moat => vec![Effect::AddCards { n: 2 }],
            Harbinger => vec![Effect::AddCards { n: 1 }, Effect::AddActions { n: 1 }],
            Merchant => vec![
                Effect::AddCards { n: 1 },
                Effect::AddActions { n: 1 },
                Effect::AddMerchantBonus,
            ],
            Vassal => vec![Effect::AddCoins { n: 2 }],
            Village => vec![Effect::AddCards { n: 1 }, Effect::AddActions { n: 2 }],
            Militia => vec![Effect::AddCoins { n: 2 }],
            Poacher => vec![
                Effect::AddCards { n: 1 },
                Effect::AddActions { n: 1 },
                Effect::AddCoins { n: 1 },
            ],
            Smithy => vec![Effect::AddCards { n: 3 }],
            CouncilRoom => vec![Effect::AddCards { n: 4 }, Effect::AddBuys { n: 1 }],
            Festival => vec![
                Effect::AddActions { n: 2 },
                Effect::AddBuys { n: 1 },
                Effect::AddCoins { n: 2 },
            ],
            Laboratory => vec![Effect::AddCards { n: 2 }, Effect::AddActions { n: 1 }],
            Market => vec![
                Effect::AddCards { n: 1 },
                Effect::AddActions { n: 1 },
                Effect::AddBuys { n: 1 },
                Effect::AddCoins { n: 1 },
            ],
            Sentry => vec![Effect::AddCards { n: 1 }, Effect::AddActions { n: 1 }],
            Witch => vec![Effect::AddCards { n: 2 }],
            _ => Vec::new(),
        }
    }

    /// The choice the card presents once its simple effects are applied.
    #[must_use]
    pub const fn decision(self) -> Option<Decision> {
        use CardKind::*;
        let decision = match self {
            Cellar => Decision::Cellar,
            Chapel => Decision::Chapel,
            Harbinger => Decision::Harbinger,
            Vassal => Decision::Vassal,
            Workshop => Decision::Workshop,
            Bureaucrat => Decision::Bureaucrat,
            Militia => Decision::Militia,
            Moneylender => Decision::Moneylender,
            Poacher => Decision::Poacher,
            Remodel => Decision::Remodel,
            ThroneRoom => Decision::ThroneRoom,
            Bandit => Decision::Bandit,
            CouncilRoom => Decision::CouncilRoom,
            Library => Decision::Library,
            Mine => Decision::Mine,
            Sentry => Decision::Sentry,
            Witch => Decision::Witch,
            Artisan => Decision::Artisan,
            _ => return None,
        };
        Some(decision)
    }
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_partition() {
        assert_eq!(CardKind::BASIC.len() + CardKind::KINGDOM.len(), 33);
        assert!(CardKind::BASIC.iter().all(|k| !k.is_kingdom()));
        assert!(CardKind::KINGDOM.iter().all(|k| k.is_kingdom()));
        assert!(CardKind::FIRST_GAME.iter().all(|k| k.is_kingdom()));
    }

    #[test]
    fn test_kingdom_sorted_by_cost() {
        let costs: Vec<_> = CardKind::KINGDOM.iter().map(|k| k.cost()).collect();
        let mut sorted = costs.clone();
        sorted.sort_unstable();
        assert_eq!(costs, sorted);
    }

    #[test]
    fn test_type_flags() {
        assert!(CardKind::Militia.is_action());
        assert!(CardKind::Militia.is_attack());
        assert!(CardKind::Moat.is_reaction());
        assert!(CardKind::Silver.is_treasure());
        assert!(!CardKind::Silver.is_action());
        assert!(CardKind::Gardens.is_victory());
        assert!(!CardKind::Curse.is_victory());
        assert!(CardKind::Curse.is_curse());
    }

    #[test]
    fn test_victory_points() {
        assert_eq!(CardKind::Province.victory_points(0), 6);
        assert_eq!(CardKind::Curse.victory_points(0), -1);
        assert_eq!(CardKind::Gardens.victory_points(9), 0);
        assert_eq!(CardKind::Gardens.victory_points(29), 2);
        assert_eq!(CardKind::Gold.victory_points(50), 0);
    }

    #[test]
    fn test_every_action_does_something() {
        for kind in CardKind::KINGDOM {
            if kind.is_action() {
                assert!(
                    !kind.simple_effects().is_empty() || kind.decision().is_some(),
                    "{kind} has no effect"
                );
            }
        }
    }

    #[test]
    fn test_display_uses_card_name() {
        assert_eq!(CardKind::ThroneRoom.to_string(), "Throne Room");
    }
}
