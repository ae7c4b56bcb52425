use rand::RngCore;

use crate::engine::action::Action;
use crate::engine::strategy::Strategy;
use crate::engine::view::TableView;

/// Folds every single decision. The cheapest possible opponent, and a
/// handy way to end hands immediately in tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct FoldingStrategy;

impl Strategy for FoldingStrategy {
    fn act(&mut self, _view: &TableView, _rng: &mut dyn RngCore) -> Action {
        Action::Fold
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
    fn test_folder_loses_the_antes() {
        let mut table = HeadsUpTable::new(
            [Box::new(FoldingStrategy), Box::new(FoldingStrategy)],
            100,
            10,
        );
        let mut rng = StdRng::seed_from_u64(420);
        let outcome = table.play_hand(&mut rng).unwrap();

        // Seat 1 opens the first hand, so it is the one that folds.
        assert_eq!(HandEnding::Fold { winner: 0 }, outcome.ending);
        assert_eq!([110, 90], table.stacks());
    }
}
