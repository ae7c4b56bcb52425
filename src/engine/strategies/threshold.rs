use rand::RngCore;

use crate::engine::action::Action;
use crate::engine::strategy::Strategy;
use crate::engine::view::TableView;
use crate::holdem::{DEFAULT_BOARDS_PER_OPPONENT, estimate_strength};

/// Per-street decision cutoffs. A hand below `fold` is given up when
/// chips are owed, a hand at or above `raise` bets for value, and
/// everything in between calls when the price is right.
#[derive(Debug, Clone, Copy)]
pub struct StreetThresholds {
    pub fold: f64,
    pub call: f64,
    pub raise: f64,
}

/// A rule-based strategy driven by Monte Carlo hand strength.
///
/// Each decision estimates equity against a random opponent hand
/// (preflop this is the starting-hand percentile), then compares it to
/// the street's thresholds and to the pot odds being offered. Tight,
/// predictable, and a reasonable baseline opponent.
#[derive(Debug, Clone)]
pub struct ThresholdStrategy {
    thresholds: [StreetThresholds; 4],
    opponent_samples: usize,
    boards_per_opponent: usize,
}

impl ThresholdStrategy {
    pub fn new(thresholds: [StreetThresholds; 4]) -> Self {
        Self {
            thresholds,
            // Enough samples to rank made hands reliably without
            // making a simulated hand crawl.
            opponent_samples: 40,
            boards_per_opponent: DEFAULT_BOARDS_PER_OPPONENT,
        }
    }

    /// Which street we are on, by board size.
    fn street_index(view: &TableView) -> usize {
        match view.community.len() {
            0 => 0,
            3 => 1,
            4 => 2,
            _ => 3,
        }
    }
}

impl Default for ThresholdStrategy {
    fn default() -> Self {
        Self::new([
            StreetThresholds {
                fold: 0.2,
                call: 0.4,
                raise: 0.7,
            },
            StreetThresholds {
                fold: 0.3,
                call: 0.5,
                raise: 0.7,
            },
            StreetThresholds {
                fold: 0.4,
                call: 0.6,
                raise: 0.8,
            },
            StreetThresholds {
                fold: 0.5,
                call: 0.7,
                raise: 0.85,
            },
        ])
    }
}

impl Strategy for ThresholdStrategy {
    fn act(&mut self, view: &TableView, rng: &mut dyn RngCore) -> Action {
        let strength = estimate_strength(
            view.hole,
            &view.community,
            self.opponent_samples,
            self.boards_per_opponent,
            rng,
        )
        .unwrap_or(0.5);

        let t = self.thresholds[Self::street_index(view)];
        let to_call = view.amount_to_call();

        if view.can_check() {
            return if strength >= t.raise {
                // Value bet, capped at the pot.
                Action::Bet(view.pot.min(view.stack).max(view.min_raise))
            } else {
                Action::Check
            };
        }

        let pot_odds = to_call as f64 / (view.pot + to_call) as f64;
        if strength > pot_odds && strength >= t.call {
            if strength >= t.raise {
                Action::Raise(view.current_bet + view.min_raise.saturating_mul(2))
            } else {
                Action::Call
            }
        } else if strength >= t.fold && to_call <= view.stack / 10 {
            // Borderline hand, but the call is cheap.
            Action::Call
        } else {
            Action::Fold
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::core::Card;
    use crate::engine::HeadsUpTable;
    use crate::engine::strategies::CallingStrategy;

    use super::*;

    fn view(hole: [&str; 2], current_bet: u32, street_bet: u32) -> TableView {
        let hole: [Card; 2] = [hole[0].parse().unwrap(), hole[1].parse().unwrap()];
        TableView {
            hole,
            community: vec![],
            pot: 20,
            current_bet,
            stack: 990,
            opponent_stack: 990,
            street_bet,
            opponent_street_bet: current_bet,
            min_raise: 20,
            ante: 10,
        }
    }

    #[test]
    fn test_premium_hand_opens() {
        let mut strategy = ThresholdStrategy::default();
        let mut rng = StdRng::seed_from_u64(0);
        // Aces preflop use the percentile short circuit, so this is
        // deterministic.
        let action = strategy.act(&view(["Ah", "Ad"], 0, 0), &mut rng);
        assert_eq!(Action::Bet(20), action);
    }

    #[test]
    fn test_trash_folds_to_a_bet() {
        let mut strategy = ThresholdStrategy::default();
        let mut rng = StdRng::seed_from_u64(0);
        let action = strategy.act(&view(["7h", "2d"], 200, 0), &mut rng);
        assert_eq!(Action::Fold, action);
    }

    #[test]
    fn test_premium_hand_raises_a_bet() {
        let mut strategy = ThresholdStrategy::default();
        let mut rng = StdRng::seed_from_u64(0);
        let action = strategy.act(&view(["Ah", "Ad"], 50, 0), &mut rng);
        assert_eq!(Action::Raise(90), action);
    }

    #[test]
    fn test_middling_hand_checks_behind() {
        let mut strategy = ThresholdStrategy::default();
        let mut rng = StdRng::seed_from_u64(0);
        // T8s sits comfortably between the open and fold cutoffs.
        let action = strategy.act(&view(["Th", "8h"], 0, 0), &mut rng);
        assert_eq!(Action::Check, action);
    }

    #[test_log::test]
    fn test_threshold_plays_full_hands() {
        let mut table = HeadsUpTable::new(
            [
                Box::new(ThresholdStrategy::default()),
                Box::new(CallingStrategy),
            ],
            300,
            10,
        );
        let mut rng = StdRng::seed_from_u64(21);
        for outcome in table.play_hands(10, &mut rng).unwrap() {
            assert_eq!(600, outcome.stacks.iter().sum::<u32>());
        }
    }
}
