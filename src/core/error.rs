use thiserror::Error;

use super::Card;

/// The core error type for the library. Everything here is a contract
/// violation on the caller's side; none of these are recoverable game
/// outcomes.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum HoldemError {
    #[error("unable to parse value character '{0}'")]
    UnexpectedValueChar(char),
    #[error("unable to parse suit character '{0}'")]
    UnexpectedSuitChar(char),
    #[error("card strings are two characters, got {0:?}")]
    InvalidCardString(String),
    #[error("hand evaluation takes 5 to 7 cards, got {0}")]
    InvalidCardCount(usize),
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
}
