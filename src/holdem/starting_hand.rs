use std::fmt;

use crate::core::{Card, Value};

/// Canonical form of a two card starting hand: the two values ordered
/// high to low, plus whether the cards share a suit. Pairs are never
/// suited. This collapses the 1326 concrete deals into the 169 classes
/// that preflop strength is defined over.
///
/// # Examples
///
/// ```
/// use headsup_holdem::holdem::StartingHand;
///
/// let hand = StartingHand::new("Ah".parse().unwrap(), "Kd".parse().unwrap());
/// assert_eq!("AKo", hand.notation());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StartingHand {
    /// Higher or equal value card.
    high: Value,
    /// Lower or equal value card.
    low: Value,
    /// true = suited; pairs are always false.
    suited: bool,
}

/// The fixed ordering of all 169 starting hand classes, strongest
/// first. This is hand-authored domain knowledge carried over verbatim;
/// it is part of the contract and is not derived from anything.
pub const PREFLOP_RANKING: [&str; 169] = [
    "AA", "KK", "QQ", "JJ", "AKs", "TT", "AQs", "AKo", "AJs", "KQs",
    "ATs", "AQo", "99", "KJs", "AJo", "KTs", "88", "QJs", "A9s", "KQo",
    "ATo", "KJo", "77", "QTs", "A8s", "K9s", "QJo", "A7s", "A5s", "KTo",
    "A6s", "66", "A4s", "QTo", "A3s", "K8s", "Q9s", "A2s", "K7s", "55",
    "JTs", "A9o", "K6s", "K5s", "Q8s", "J9s", "K4s", "A8o", "K3s", "44",
    "K2s", "A7o", "Q7s", "J8s", "T9s", "K9o", "A6o", "Q6s", "Q5s", "A5o",
    "T8s", "A4o", "JTo", "J9o", "Q4s", "J7s", "Q3s", "A3o", "33", "K8o", "Q2s",
    "Q9o", "T7s", "A2o", "J6s", "98s", "J5s", "K7o", "J4s", "T9o", "J3s",
    "J2s", "K6o", "T6s", "97s", "Q8o", "K5o", "T5s", "87s", "K4o", "T4s",
    "96s", "K3o", "T3s", "J8o", "T2s", "K2o", "86s", "76s", "Q7o", "22",
    "95s", "Q6o", "J7o", "85s", "65s", "T8o", "Q5o", "75s", "94s", "Q4o",
    "54s", "Q3o", "84s", "J6o", "T7o", "Q2o", "64s", "74s", "J5o", "98o",
    "93s", "53s", "J4o", "43s", "92s", "63s", "97o", "J3o", "83s", "J2o",
    "73s", "82s", "T6o", "52s", "87o", "T5o", "62s", "42s", "72s", "96o", "T4o",
    "32s", "76o", "T3o", "86o", "T2o", "95o", "65o", "85o", "75o", "94o",
    "54o", "84o", "74o", "64o", "93o", "53o", "43o", "92o", "63o", "73o",
    "83o", "52o", "82o", "62o", "42o", "32o", "72o",
];

/// Percentile breakpoints and labels for describing a starting hand.
const BUCKETS: [(f64, &str); 7] = [
    (0.95, "Top 5%"),
    (0.85, "Top 15%"),
    (0.70, "Top 30%"),
    (0.50, "Top 50%"),
    (0.30, "Top 70%"),
    (0.15, "Bottom 30%"),
    (0.05, "Bottom 15%"),
];

impl StartingHand {
    /// Canonicalize two hole cards. Order of the arguments does not
    /// matter.
    pub fn new(a: Card, b: Card) -> Self {
        let (hi, lo) = if a.value >= b.value { (a, b) } else { (b, a) };
        Self {
            high: hi.value,
            low: lo.value,
            suited: hi.value != lo.value && hi.suit == lo.suit,
        }
    }

    pub fn is_pair(&self) -> bool {
        self.high == self.low
    }

    pub fn suited(&self) -> bool {
        self.suited
    }

    /// The canonical notation: `"AA"` for pairs, `"AKs"` / `"AKo"` for
    /// suited and offsuit non-pairs.
    pub fn notation(&self) -> String {
        if self.is_pair() {
            format!("{}{}", self.high.to_char(), self.low.to_char())
        } else {
            let suffix = if self.suited { 's' } else { 'o' };
            format!("{}{}{}", self.high.to_char(), self.low.to_char(), suffix)
        }
    }

    /// Percentile of this class over the fixed ranking, from 0.0
    /// (worst, 72o) to 1.0 (best, AA).
    pub fn percentile(&self) -> f64 {
        let notation = self.notation();
        PREFLOP_RANKING
            .iter()
            .position(|label| *label == notation)
            .map(|pos| 1.0 - pos as f64 / (PREFLOP_RANKING.len() - 1) as f64)
            .unwrap_or(0.0)
    }

    /// Human readable strength bucket for this class.
    pub fn description(&self) -> &'static str {
        let percentile = self.percentile();
        for (cutoff, label) in BUCKETS {
            if percentile >= cutoff {
                return label;
            }
        }
        "Bottom 5%"
    }
}

impl fmt::Display for StartingHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation())
    }
}
