//! The core module: card machinery that is agnostic to how the game
//! around it is played.

/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, and Suit.
pub use self::card::{Card, Suit, Value};

/// The 52 card deck.
mod deck;
/// Export `Deck`.
pub use self::deck::Deck;

/// 5 to 7 card hand evaluation.
mod eval;
/// Export the evaluator and its result types.
pub use self::eval::{HandCategory, HandEval, evaluate};

/// Core error type.
mod error;
pub use self::error::HoldemError;
