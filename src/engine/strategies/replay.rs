use std::collections::VecDeque;

use rand::RngCore;

use crate::engine::action::Action;
use crate::engine::strategy::Strategy;
use crate::engine::view::TableView;

/// Plays back a scripted sequence of actions, then repeats a default
/// action once the script is exhausted. This is the main tool for
/// driving the engine through exact betting sequences in tests.
#[derive(Debug, Clone)]
pub struct ReplayStrategy {
    actions: VecDeque<Action>,
    default_action: Action,
}

impl ReplayStrategy {
    /// Script with a trailing default of `Check`.
    pub fn new(actions: Vec<Action>) -> Self {
        Self::with_default(actions, Action::Check)
    }

    pub fn with_default(actions: Vec<Action>, default_action: Action) -> Self {
        Self {
            actions: actions.into(),
            default_action,
        }
    }
}

impl Strategy for ReplayStrategy {
    fn act(&mut self, _view: &TableView, _rng: &mut dyn RngCore) -> Action {
        self.actions.pop_front().unwrap_or(self.default_action)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::engine::HeadsUpTable;
    use crate::engine::table::HandEnding;

    use super::*;

    #[test_log::test]
    fn test_scripted_raise_and_fold() {
        // Hand 1: seat 1 opens for 50, seat 0 raises to 150, seat 1
        // gives up.
        let mut table = HeadsUpTable::new(
            [
                Box::new(ReplayStrategy::new(vec![Action::Raise(150)])),
                Box::new(ReplayStrategy::with_default(
                    vec![Action::Bet(50), Action::Fold],
                    Action::Check,
                )),
            ],
            1000,
            10,
        );
        let mut rng = StdRng::seed_from_u64(0);
        let outcome = table.play_hand(&mut rng).unwrap();

        assert_eq!(HandEnding::Fold { winner: 0 }, outcome.ending);
        // Antes 20, the opened 50, and the raise to 150.
        assert_eq!(220, outcome.pot);
        assert_eq!([1060, 940], table.stacks());
    }
}
