use std::fmt;

use super::{Card, HoldemError};

/// All the hand categories, weakest first. The derived ordering is the
/// poker ordering.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum HandCategory {
    /// No matches.
    HighCard,
    /// One card matches another.
    Pair,
    /// Two different pairs of matching cards.
    TwoPair,
    /// Three of the same value.
    ThreeOfAKind,
    /// Five cards in a sequence.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of one value and two of another.
    FullHouse,
    /// Four of the same value.
    FourOfAKind,
    /// Five cards in a sequence, all of the same suit.
    StraightFlush,
}

/// The result of evaluating a hand: a category plus the tiebreak ranks
/// that order hands within the category, most significant first.
///
/// The layout of `ranks` depends on the category:
///
/// - quads: `[quad, kicker]`
/// - full house: `[trips, pair]`
/// - trips: `[trips, kicker, kicker]`
/// - two pair: `[high pair, low pair, kicker]`
/// - pair: `[pair, kicker, kicker, kicker]`
/// - straights, flushes, high card: all five ranks descending, with the
///   wheel (A-2-3-4-5) normalized to `[5, 4, 3, 2, 1]`
///
/// The derived `Ord` compares category first and then the ranks
/// lexicographically, which is exactly the poker total order.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash)]
pub struct HandEval {
    pub category: HandCategory,
    pub ranks: Vec<u8>,
}

impl HandEval {
    /// Human readable category name. The ace-high straight flush gets
    /// its traditional name.
    pub fn description(&self) -> &'static str {
        match self.category {
            HandCategory::StraightFlush if self.ranks.first() == Some(&14) => "Royal Flush",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::FullHouse => "Full House",
            HandCategory::Flush => "Flush",
            HandCategory::Straight => "Straight",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::Pair => "Pair",
            HandCategory::HighCard => "High Card",
        }
    }
}

impl fmt::Display for HandEval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Evaluate the best 5-card hand from 5 to 7 cards.
///
/// Exactly 5 cards classify directly; 6 or 7 cards evaluate every
/// 5-card subset and keep the best. Anything else, or any duplicate
/// card, is a contract violation.
///
/// # Examples
///
/// ```
/// use headsup_holdem::core::{Card, HandCategory, evaluate};
///
/// let cards: Vec<Card> = ["Ah", "Kh", "Qh", "Jh", "Th"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
/// let eval = evaluate(&cards).unwrap();
/// assert_eq!(HandCategory::StraightFlush, eval.category);
/// assert_eq!("Royal Flush", eval.description());
/// ```
pub fn evaluate(cards: &[Card]) -> Result<HandEval, HoldemError> {
    if !(5..=7).contains(&cards.len()) {
        return Err(HoldemError::InvalidCardCount(cards.len()));
    }
    let mut seen = 0u64;
    for c in cards {
        let bit = 1u64 << c.index();
        if seen & bit != 0 {
            return Err(HoldemError::DuplicateCard(*c));
        }
        seen |= bit;
    }
    if cards.len() == 5 {
        Ok(eval_five(cards))
    } else {
        Ok(best_five(cards))
    }
}

/// Evaluate every 5-card subset and keep the maximum.
fn best_five(cards: &[Card]) -> HandEval {
    let n = cards.len();
    let mut best: Option<HandEval> = None;
    for a in 0..n - 4 {
        for b in a + 1..n - 3 {
            for c in b + 1..n - 2 {
                for d in c + 1..n - 1 {
                    for e in d + 1..n {
                        let eval =
                            eval_five(&[cards[a], cards[b], cards[c], cards[d], cards[e]]);
                        if best.as_ref().is_none_or(|cur| eval > *cur) {
                            best = Some(eval);
                        }
                    }
                }
            }
        }
    }
    best.expect("at least five cards")
}

/// Classify exactly 5 cards.
fn eval_five(cards: &[Card]) -> HandEval {
    let mut ranks: Vec<u8> = cards.iter().map(|c| c.value.rank()).collect();
    ranks.sort_unstable_by(|a, b| b.cmp(a));

    let is_flush = cards.iter().all(|c| c.suit == cards[0].suit);

    let mut counts = [0u8; 15];
    for &r in &ranks {
        counts[r as usize] += 1;
    }
    let unique = counts.iter().filter(|&&c| c > 0).count();

    // A-2-3-4-5 plays as a five high straight.
    let is_wheel = ranks == [14, 5, 4, 3, 2];
    let is_straight = unique == 5 && (is_wheel || ranks[0] - ranks[4] == 4);
    let straight_ranks = if is_wheel {
        vec![5, 4, 3, 2, 1]
    } else {
        ranks.clone()
    };

    if is_straight && is_flush {
        return HandEval {
            category: HandCategory::StraightFlush,
            ranks: straight_ranks,
        };
    }

    if let Some(quad) = ranks_with_count(&counts, 4).first().copied() {
        let kicker = ranks_with_count(&counts, 1);
        return HandEval {
            category: HandCategory::FourOfAKind,
            ranks: vec![quad, kicker[0]],
        };
    }

    let trips = ranks_with_count(&counts, 3);
    let pairs = ranks_with_count(&counts, 2);

    if let (Some(&t), Some(&p)) = (trips.first(), pairs.first()) {
        return HandEval {
            category: HandCategory::FullHouse,
            ranks: vec![t, p],
        };
    }

    if is_flush {
        return HandEval {
            category: HandCategory::Flush,
            ranks,
        };
    }

    if is_straight {
        return HandEval {
            category: HandCategory::Straight,
            ranks: straight_ranks,
        };
    }

    let kickers = ranks_with_count(&counts, 1);

    if let Some(&t) = trips.first() {
        let mut tiebreak = vec![t];
        tiebreak.extend(kickers);
        return HandEval {
            category: HandCategory::ThreeOfAKind,
            ranks: tiebreak,
        };
    }

    match pairs.len() {
        2 => {
            let mut tiebreak = pairs;
            tiebreak.extend(kickers);
            HandEval {
                category: HandCategory::TwoPair,
                ranks: tiebreak,
            }
        }
        1 => {
            let mut tiebreak = pairs;
            tiebreak.extend(kickers);
            HandEval {
                category: HandCategory::Pair,
                ranks: tiebreak,
            }
        }
        _ => HandEval {
            category: HandCategory::HighCard,
            ranks,
        },
    }
}

/// The ranks appearing exactly `n` times, highest first.
fn ranks_with_count(counts: &[u8; 15], n: u8) -> Vec<u8> {
    (2..=14u8).rev().filter(|&r| counts[r as usize] == n).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(strs: &[&str]) -> Vec<Card> {
        strs.iter().map(|s| s.parse().unwrap()).collect()
    }

    fn eval(strs: &[&str]) -> HandEval {
        evaluate(&cards(strs)).unwrap()
    }

    #[test]
    fn test_royal_flush() {
        let e = eval(&["Ah", "Kh", "Qh", "Jh", "Th"]);
        assert_eq!(HandCategory::StraightFlush, e.category);
        assert_eq!(vec![14, 13, 12, 11, 10], e.ranks);
        assert_eq!("Royal Flush", e.description());
    }

    #[test]
    fn test_royal_flush_from_seven() {
        let e = eval(&["Ah", "Kh", "Qh", "Jh", "Th", "2d", "3c"]);
        assert_eq!(HandCategory::StraightFlush, e.category);
        assert_eq!(vec![14, 13, 12, 11, 10], e.ranks);
    }

    #[test]
    fn test_steel_wheel_is_not_royal() {
        let e = eval(&["Ah", "2h", "3h", "4h", "5h"]);
        assert_eq!(HandCategory::StraightFlush, e.category);
        assert_eq!(vec![5, 4, 3, 2, 1], e.ranks);
        assert_eq!("Straight Flush", e.description());
    }

    #[test]
    fn test_four_of_a_kind() {
        let e = eval(&["Ah", "Ad", "As", "Ac", "Th"]);
        assert_eq!(HandCategory::FourOfAKind, e.category);
        assert_eq!(vec![14, 10], e.ranks);
    }

    #[test]
    fn test_full_house() {
        let e = eval(&["Ah", "Ad", "As", "Kh", "Kd"]);
        assert_eq!(HandCategory::FullHouse, e.category);
        assert_eq!(vec![14, 13], e.ranks);
    }

    #[test]
    fn test_flush() {
        let e = eval(&["Ad", "8d", "9d", "Td", "5d"]);
        assert_eq!(HandCategory::Flush, e.category);
        assert_eq!(vec![14, 10, 9, 8, 5], e.ranks);
    }

    #[test]
    fn test_straight() {
        let e = eval(&["2c", "3s", "4h", "5s", "6d"]);
        assert_eq!(HandCategory::Straight, e.category);
        assert_eq!(vec![6, 5, 4, 3, 2], e.ranks);
    }

    #[test]
    fn test_wheel_loses_to_six_high() {
        let wheel = eval(&["Ad", "2c", "3s", "4h", "5s"]);
        let six_high = eval(&["2c", "3s", "4h", "5s", "6d"]);
        assert_eq!(HandCategory::Straight, wheel.category);
        assert_eq!(vec![5, 4, 3, 2, 1], wheel.ranks);
        assert!(wheel < six_high);
    }

    #[test]
    fn test_three_of_a_kind() {
        let e = eval(&["2c", "2s", "2h", "5s", "6d"]);
        assert_eq!(HandCategory::ThreeOfAKind, e.category);
        assert_eq!(vec![2, 6, 5], e.ranks);
    }

    #[test]
    fn test_two_pair() {
        let e = eval(&["Ah", "Ad", "9c", "9d", "Ts"]);
        assert_eq!(HandCategory::TwoPair, e.category);
        assert_eq!(vec![14, 9, 10], e.ranks);
    }

    #[test]
    fn test_one_pair() {
        let e = eval(&["Ah", "Ad", "9c", "8d", "Ts"]);
        assert_eq!(HandCategory::Pair, e.category);
        assert_eq!(vec![14, 10, 9, 8], e.ranks);
    }

    #[test]
    fn test_high_card() {
        let e = eval(&["Ad", "8h", "9c", "Tc", "5c"]);
        assert_eq!(HandCategory::HighCard, e.category);
        assert_eq!(vec![14, 10, 9, 8, 5], e.ranks);
    }

    #[test]
    fn test_seven_card_prefers_better_category() {
        // Pair on board plus a flush in hearts; the flush must win out.
        let e = eval(&["Ah", "Kh", "2h", "7h", "9h", "2d", "2c"]);
        assert_eq!(HandCategory::Flush, e.category);
        assert_eq!(vec![14, 13, 9, 7, 2], e.ranks);
    }

    #[test]
    fn test_six_card_kicker_selection() {
        // Best five from six must take the top kickers.
        let e = eval(&["Ah", "Ad", "9c", "8d", "Ts", "Jc"]);
        assert_eq!(HandCategory::Pair, e.category);
        assert_eq!(vec![14, 11, 10, 9], e.ranks);
    }

    #[test]
    fn test_category_order_is_total() {
        let ladder = [
            eval(&["Ad", "8h", "9c", "Tc", "5c"]),
            eval(&["Ah", "Ad", "9c", "8d", "Ts"]),
            eval(&["Ah", "Ad", "9c", "9d", "Ts"]),
            eval(&["2c", "2s", "2h", "5s", "6d"]),
            eval(&["2c", "3s", "4h", "5s", "6d"]),
            eval(&["Ad", "8d", "9d", "Td", "5d"]),
            eval(&["Ah", "Ad", "As", "Kh", "Kd"]),
            eval(&["Ah", "Ad", "As", "Ac", "Th"]),
            eval(&["Ah", "Kh", "Qh", "Jh", "Th"]),
        ];
        for pair in ladder.windows(2) {
            assert!(pair[0] < pair[1], "{:?} !< {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_compare_is_antisymmetric() {
        let a = eval(&["Ah", "Ad", "9c", "9d", "Ts"]);
        let b = eval(&["Kh", "Kd", "9c", "9d", "Ts"]);
        assert_eq!(std::cmp::Ordering::Greater, a.cmp(&b));
        assert_eq!(std::cmp::Ordering::Less, b.cmp(&a));
        assert_eq!(std::cmp::Ordering::Equal, a.cmp(&a));
    }

    #[test]
    fn test_equal_hands_across_suits() {
        let a = eval(&["Ah", "Kd", "Qc", "Js", "9h"]);
        let b = eval(&["As", "Kc", "Qd", "Jh", "9s"]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_card_counts() {
        assert_eq!(
            Err(HoldemError::InvalidCardCount(4)),
            evaluate(&cards(&["Ah", "Kh", "Qh", "Jh"]))
        );
        assert_eq!(
            Err(HoldemError::InvalidCardCount(8)),
            evaluate(&cards(&["Ah", "Kh", "Qh", "Jh", "Th", "2d", "3c", "4c"]))
        );
    }

    #[test]
    fn test_duplicate_card() {
        let dup: Card = "Ah".parse().unwrap();
        assert_eq!(
            Err(HoldemError::DuplicateCard(dup)),
            evaluate(&cards(&["Ah", "Kh", "Qh", "Jh", "Ah"]))
        );
    }
}
