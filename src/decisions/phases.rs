//! Turn phase decisions.

use crate::combinatorics::get_pieces;
use crate::core::{GameState, Phase, PlayerId};
use crate::effects::{Consequence, Effect};

/// Pass, then one play per distinct action in hand while actions remain.
pub(super) fn action_phase(state: &GameState, actor: PlayerId) -> Vec<Consequence> {
    let mut choices = vec![Consequence::pass(Phase::Action)];
    if state.n_action > 0 {
        let hand = &state.actor(actor).hand;
        choices.extend(
            get_pieces(hand, true, |piece| piece.is_action())
                .into_iter()
                .map(|action| Consequence::act(actor, action)),
        );
    }
    choices
}

/// Pass, then play every treasure in hand at once.
pub(super) fn treasure_phase(state: &GameState, actor: PlayerId) -> Vec<Consequence> {
    let mut choices = vec![Consequence::pass(Phase::Treasure)];
    let treasures = get_pieces(&state.actor(actor).hand, false, |piece| piece.is_treasure());
    if !treasures.is_empty() {
        let pieces = treasures.into_iter().collect();
        choices.push(Consequence::generic([Effect::PlayTreasures { actor, pieces }]));
    }
    choices
}

/// Pass, then one purchase per affordable pile while buys remain.
pub(super) fn buy_phase(state: &GameState, actor: PlayerId) -> Vec<Consequence> {
    let mut choices = vec![Consequence::pass(Phase::Buy)];
    if state.n_buy > 0 {
        choices.extend(
            state
                .filter_supply(|piece| piece.cost() <= state.n_coin)
                .into_iter()
                .map(|piece| Consequence::purchase(actor, piece)),
        );
    }
    choices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardKind;
    use crate::decisions::testing::{fill_zone, state};
    use crate::effects::ConsequenceKind;
    use crate::zones::ZoneKind;

    #[test]
    fn test_action_phase_one_act_per_type() {
        let mut state = state();
        let p0 = PlayerId::new(0);
        fill_zone(
            &mut state,
            p0,
            ZoneKind::Hand,
            &[CardKind::Village, CardKind::Village, CardKind::Smithy, CardKind::Copper],
        );
        state.start_turn();

        let choices = action_phase(&state, p0);
        assert_eq!(choices.len(), 3);
        assert_eq!(choices[0].kind, ConsequenceKind::Pass { phase: Phase::Action });

        state.n_action = 0;
        assert_eq!(action_phase(&state, p0).len(), 1);
    }

    #[test]
    fn test_treasure_phase_plays_all() {
        let mut state = state();
        let p0 = PlayerId::new(0);
        fill_zone(&mut state, p0, ZoneKind::Hand, &[CardKind::Copper, CardKind::Silver, CardKind::Estate]);

        let choices = treasure_phase(&state, p0);
        assert_eq!(choices.len(), 2);
        assert_eq!(choices[1].to_string(), "play Copper, Silver");

        fill_zone(&mut state, p0, ZoneKind::Hand, &[CardKind::Estate]);
        assert_eq!(treasure_phase(&state, p0).len(), 1);
    }

    #[test]
    fn test_buy_phase_filters_by_coin() {
        let mut state = state();
        let p0 = PlayerId::new(0);
        state.start_turn();
        state.n_coin = 2;

        let choices = buy_phase(&state, p0);
        let bought: Vec<CardKind> = choices.iter().filter_map(|c| c.gained()).map(|p| p.kind).collect();
        assert!(bought.contains(&CardKind::Estate));
        assert!(bought.contains(&CardKind::Cellar));
        assert!(bought.iter().all(|kind| kind.cost() <= 2));

        state.n_buy = 0;
        assert_eq!(buy_phase(&state, p0).len(), 1);
    }
}
