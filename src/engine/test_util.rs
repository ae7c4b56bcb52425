//! Helpers for asserting engine invariants in tests.

use super::table::{HandEnding, HandOutcome};

/// Chips never appear or vanish: every outcome's stacks must sum to
/// the chips the match started with.
pub fn assert_chips_conserved(expected_total: u32, outcome: &HandOutcome) {
    assert_eq!(
        expected_total,
        outcome.stacks.iter().sum::<u32>(),
        "chips leaked in hand {}: {:?}",
        outcome.hand_no,
        outcome.ending,
    );
}

/// A settled pot must have gone somewhere: fold and showdown wins pay
/// the full pot to one seat, ties split it with the remainder at seat 0.
pub fn assert_pot_distributed(outcome: &HandOutcome) {
    let awarded: u32 = outcome
        .events
        .iter()
        .filter_map(|e| match e {
            super::TableEvent::PotAwarded { amount, .. } => Some(*amount),
            _ => None,
        })
        .sum();
    match outcome.ending {
        // Ante busts transfer the short stack instead of a pot.
        HandEnding::AnteBusted { .. } => (),
        _ => assert_eq!(outcome.pot, awarded, "pot not fully distributed"),
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::engine::HeadsUpTable;
    use crate::engine::strategies::RandomStrategy;

    use super::*;

    #[test_log::test]
    fn test_helpers_hold_over_a_random_match() {
        let mut table = HeadsUpTable::new(
            [
                Box::new(RandomStrategy::default()),
                Box::new(RandomStrategy::default()),
            ],
            300,
            10,
        );
        let mut rng = StdRng::seed_from_u64(1234);
        for outcome in table.play_hands(40, &mut rng).unwrap() {
            assert_chips_conserved(600, &outcome);
            assert_pot_distributed(&outcome);
        }
    }
}
