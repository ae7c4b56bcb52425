use thiserror::Error;

use crate::core::HoldemError;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum EngineError {
    /// The deck ran out mid-deal. Unreachable with a 52 card deck and
    /// the fixed heads-up deal sizes; hitting it means an invariant
    /// broke upstream.
    #[error("the deck ran out of cards while dealing")]
    DeckExhausted,
    #[error(transparent)]
    Holdem(#[from] HoldemError),
}
