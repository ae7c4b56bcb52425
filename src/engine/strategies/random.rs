use rand::{Rng, RngCore};

use crate::engine::action::Action;
use crate::engine::strategy::Strategy;
use crate::engine::view::TableView;

/// Plays a random mix of actions: sometimes folds to a bet, mostly
/// calls or checks, occasionally raises a random amount. The raise
/// sizing is deliberately sloppy; the table normalizes whatever comes
/// out.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    /// Chance of folding when facing a bet.
    pub percent_fold: f64,
    /// Chance of flat calling (or checking) instead of raising.
    pub percent_call: f64,
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self {
            percent_fold: 0.15,
            percent_call: 0.60,
        }
    }
}

impl Strategy for RandomStrategy {
    fn act(&mut self, view: &TableView, rng: &mut dyn RngCore) -> Action {
        let roll: f64 = rng.random();

        if view.can_check() {
            if roll < self.percent_call {
                Action::Check
            } else {
                Action::Bet(self.random_raise(view, rng))
            }
        } else if roll < self.percent_fold {
            Action::Fold
        } else if roll < self.percent_fold + self.percent_call {
            Action::Call
        } else {
            Action::Raise(self.random_raise(view, rng))
        }
    }
}

impl RandomStrategy {
    /// A raise to somewhere between the minimum and a pot-sized
    /// overbet. Clamping to stacks is the table's job.
    fn random_raise(&self, view: &TableView, rng: &mut dyn RngCore) -> u32 {
        let min = view.current_bet + view.min_raise;
        let max = min + view.pot;
        rng.random_range(min..=max)
    }
}
