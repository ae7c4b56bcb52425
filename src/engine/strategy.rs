use rand::RngCore;

use super::action::Action;
use super::view::TableView;

/// The decision-making capability the engine consumes.
///
/// Implementations receive an immutable [`TableView`] snapshot and the
/// table's random generator, and return one [`Action`]. The engine
/// calls this synchronously, exactly one pending decision at a time;
/// implementations are free to keep whatever state they like between
/// calls.
///
/// Returned actions are never rejected: the betting round normalizes
/// anything out of range (see [`Action`]), so a buggy strategy punishes
/// itself rather than poisoning the table.
pub trait Strategy {
    /// Decide on an action for the current spot.
    fn act(&mut self, view: &TableView, rng: &mut dyn RngCore) -> Action;
}
