use rand::Rng;
use rand::seq::IndexedRandom;

use crate::core::{Card, Deck, HoldemError, evaluate};

use super::StartingHand;

/// Default number of opponent hands sampled by [`estimate_strength`].
pub const DEFAULT_OPPONENT_SAMPLES: usize = 100;
/// Default number of board completions per sampled opponent hand.
pub const DEFAULT_BOARDS_PER_OPPONENT: usize = 5;
/// Default number of board completions for [`estimate_head_to_head`].
pub const DEFAULT_HEAD_TO_HEAD_SIMULATIONS: usize = 100;

/// Estimate the probability that `hole` wins against one unknown
/// opponent hand, as a value in `[0, 1]`.
///
/// With an empty board this short-circuits to the preflop percentile of
/// the starting hand class, which is a cheap and exact enough proxy.
/// Otherwise it samples `opponent_samples` opponent hands from the
/// remaining deck and, for each, `boards_per_opponent` completions of
/// the community cards, scoring a win as 1 and a tie as 0.5. Zero total
/// trials yield the neutral 0.5.
///
/// Sampling is always without replacement within a trial, so no trial
/// ever sees a duplicated card.
pub fn estimate_strength<R: Rng + ?Sized>(
    hole: [Card; 2],
    community: &[Card],
    opponent_samples: usize,
    boards_per_opponent: usize,
    rng: &mut R,
) -> Result<f64, HoldemError> {
    validate_known(&hole, community)?;

    if community.is_empty() {
        return Ok(StartingHand::new(hole[0], hole[1]).percentile());
    }

    let known: Vec<Card> = hole.iter().chain(community).copied().collect();
    let deck = Deck::without(&known);
    let needed = 5 - community.len();

    let mut score = 0.0;
    let mut trials = 0u64;

    for _ in 0..opponent_samples {
        let opponent: Vec<Card> = deck.cards().choose_multiple(rng, 2).copied().collect();
        let pool: Vec<Card> = deck
            .cards()
            .iter()
            .filter(|c| !opponent.contains(c))
            .copied()
            .collect();

        for _ in 0..boards_per_opponent {
            let board: Vec<Card> = community
                .iter()
                .copied()
                .chain(pool.choose_multiple(rng, needed).copied())
                .collect();

            let mine = [hole.as_slice(), board.as_slice()].concat();
            let theirs = [opponent.as_slice(), board.as_slice()].concat();

            let my_eval = evaluate(&mine)?;
            let their_eval = evaluate(&theirs)?;

            match my_eval.cmp(&their_eval) {
                std::cmp::Ordering::Greater => score += 1.0,
                std::cmp::Ordering::Equal => score += 0.5,
                std::cmp::Ordering::Less => (),
            }
            trials += 1;
        }
    }

    if trials == 0 {
        return Ok(0.5);
    }
    Ok(score / trials as f64)
}

/// Estimate both players' equity when both hole hands are known.
///
/// Cheaper than two [`estimate_strength`] calls: each trial draws one
/// board completion and scores both hands against it, so the samples
/// are perfectly paired. Ties count 0.5 to each side. Zero simulations
/// yield `(0.5, 0.5)`.
pub fn estimate_head_to_head<R: Rng + ?Sized>(
    hole_a: [Card; 2],
    hole_b: [Card; 2],
    community: &[Card],
    simulations: usize,
    rng: &mut R,
) -> Result<(f64, f64), HoldemError> {
    let holes: Vec<Card> = hole_a.iter().chain(&hole_b).copied().collect();
    validate_known(&holes, community)?;

    let known: Vec<Card> = holes.iter().chain(community).copied().collect();
    let deck = Deck::without(&known);
    let needed = 5 - community.len();

    let mut score_a = 0.0;
    let mut score_b = 0.0;
    let mut trials = 0u64;

    for _ in 0..simulations {
        let board: Vec<Card> = community
            .iter()
            .copied()
            .chain(deck.cards().choose_multiple(rng, needed).copied())
            .collect();

        let eval_a = evaluate(&[hole_a.as_slice(), board.as_slice()].concat())?;
        let eval_b = evaluate(&[hole_b.as_slice(), board.as_slice()].concat())?;

        match eval_a.cmp(&eval_b) {
            std::cmp::Ordering::Greater => score_a += 1.0,
            std::cmp::Ordering::Less => score_b += 1.0,
            std::cmp::Ordering::Equal => {
                score_a += 0.5;
                score_b += 0.5;
            }
        }
        trials += 1;
    }

    if trials == 0 {
        return Ok((0.5, 0.5));
    }
    Ok((score_a / trials as f64, score_b / trials as f64))
}

/// The known cards must be distinct and the board must not be past the
/// river; anything else is a caller bug, not a sampling outcome.
fn validate_known(holes: &[Card], community: &[Card]) -> Result<(), HoldemError> {
    if community.len() > 5 {
        return Err(HoldemError::InvalidCardCount(community.len()));
    }
    let mut seen = 0u64;
    for c in holes.iter().chain(community) {
        let bit = 1u64 << c.index();
        if seen & bit != 0 {
            return Err(HoldemError::DuplicateCard(*c));
        }
        seen |= bit;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn cards(strs: &[&str]) -> Vec<Card> {
        strs.iter().map(|s| s.parse().unwrap()).collect()
    }

    fn hole(a: &str, b: &str) -> [Card; 2] {
        [a.parse().unwrap(), b.parse().unwrap()]
    }

    #[test]
    fn test_preflop_short_circuit() {
        let mut rng = StdRng::seed_from_u64(1);
        let strength =
            estimate_strength(hole("Ah", "Ad"), &[], 100, 5, &mut rng).unwrap();
        assert_relative_eq!(1.0, strength);
    }

    #[test]
    fn test_zero_trials_is_neutral() {
        let mut rng = StdRng::seed_from_u64(1);
        let board = cards(&["2c", "7d", "Js"]);
        let strength =
            estimate_strength(hole("Ah", "Ad"), &board, 0, 5, &mut rng).unwrap();
        assert_relative_eq!(0.5, strength);

        let (a, b) =
            estimate_head_to_head(hole("Ah", "Ad"), hole("2h", "7d"), &[], 0, &mut rng)
                .unwrap();
        assert_relative_eq!(0.5, a);
        assert_relative_eq!(0.5, b);
    }

    #[test]
    fn test_aces_dominate_seven_deuce() {
        let mut rng = StdRng::seed_from_u64(42);
        let (a, b) =
            estimate_head_to_head(hole("Ah", "Ad"), hole("2h", "7d"), &[], 500, &mut rng)
                .unwrap();
        assert!(a > 0.8, "aces equity was {a}");
        assert_relative_eq!(1.0, a + b);
    }

    #[test]
    fn test_equities_sum_to_one() {
        let mut rng = StdRng::seed_from_u64(9);
        let board = cards(&["2c", "7d", "Js"]);
        let (a, b) = estimate_head_to_head(
            hole("Kh", "Qh"),
            hole("9s", "9d"),
            &board,
            400,
            &mut rng,
        )
        .unwrap();
        assert_relative_eq!(1.0, a + b);
    }

    #[test]
    fn test_made_nuts_is_near_certain() {
        let mut rng = StdRng::seed_from_u64(7);
        // Board already gives the hole cards a royal flush.
        let board = cards(&["Qh", "Jh", "Th"]);
        let strength =
            estimate_strength(hole("Ah", "Kh"), &board, 50, 4, &mut rng).unwrap();
        assert!(strength > 0.99, "royal flush strength was {strength}");
    }

    #[test]
    fn test_strength_orders_made_hands() {
        let mut rng = StdRng::seed_from_u64(11);
        let board = cards(&["Ks", "8d", "3c"]);
        let top_pair =
            estimate_strength(hole("Kh", "Qh"), &board, 60, 5, &mut rng).unwrap();
        let undercards =
            estimate_strength(hole("4h", "5h"), &board, 60, 5, &mut rng).unwrap();
        assert!(top_pair > undercards);
    }

    #[test]
    fn test_river_board_samples_nothing() {
        let mut rng = StdRng::seed_from_u64(3);
        // Full board: every trial evaluates the same seven cards.
        let board = cards(&["Qh", "Jh", "Th", "2c", "3d"]);
        let (a, b) = estimate_head_to_head(
            hole("Ah", "Kh"),
            hole("As", "Ad"),
            &board,
            10,
            &mut rng,
        )
        .unwrap();
        assert_relative_eq!(1.0, a);
        assert_relative_eq!(0.0, b);
    }

    #[test]
    fn test_duplicate_known_cards_are_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let board = cards(&["Ah", "7d", "Js"]);
        assert_eq!(
            Err(HoldemError::DuplicateCard("Ah".parse().unwrap())),
            estimate_strength(hole("Ah", "Ad"), &board, 10, 2, &mut rng)
        );
    }

    #[test]
    fn test_oversized_board_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let board = cards(&["2c", "3c", "4c", "5c", "6c", "7c"]);
        assert_eq!(
            Err(HoldemError::InvalidCardCount(6)),
            estimate_strength(hole("Ah", "Ad"), &board, 10, 2, &mut rng)
        );
    }
}
