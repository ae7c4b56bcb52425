//! Hold'em specific knowledge built on top of [`crate::core`]: the
//! canonical 169-class preflop starting hand table and Monte Carlo
//! equity estimation.

/// Canonical starting hand classes and the fixed preflop ranking.
mod starting_hand;
pub use self::starting_hand::{PREFLOP_RANKING, StartingHand};

/// Monte Carlo equity estimation.
mod equity;
pub use self::equity::{
    DEFAULT_BOARDS_PER_OPPONENT, DEFAULT_HEAD_TO_HEAD_SIMULATIONS, DEFAULT_OPPONENT_SAMPLES,
    estimate_head_to_head, estimate_strength,
};
