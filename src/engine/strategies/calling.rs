use rand::RngCore;

use crate::engine::action::Action;
use crate::engine::strategy::Strategy;
use crate::engine::view::TableView;

/// Checks when it can, calls when it can't. Never folds, never bets.
/// Useful as a baseline and for checking hands down in tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct CallingStrategy;

impl Strategy for CallingStrategy {
    fn act(&mut self, view: &TableView, _rng: &mut dyn RngCore) -> Action {
        if view.can_check() {
            Action::Check
        } else {
            Action::Call
        }
    }
}
