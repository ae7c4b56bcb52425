//! The heads-up table engine: betting rounds, hand orchestration, and
//! the strategy interface.
//!
//! A [`HeadsUpTable`] owns two stacks and two boxed [`Strategy`]
//! implementations. Each [`HeadsUpTable::play_hand`] call collects the
//! antes, deals, runs the four betting streets, and settles the pot at
//! a fold or showdown. Strategies only ever see an immutable
//! [`TableView`]; everything they return is normalized by the betting
//! rules rather than rejected, so the engine cannot be wedged by a
//! misbehaving strategy.
//!
//! # Example
//!
//! ```
//! use rand::{SeedableRng, rngs::StdRng};
//! use headsup_holdem::engine::{HeadsUpTable, strategies::{CallingStrategy, RandomStrategy}};
//!
//! let mut table = HeadsUpTable::new(
//!     [
//!         Box::new(CallingStrategy),
//!         Box::new(RandomStrategy::default()),
//!     ],
//!     1000,
//!     10,
//! );
//! let mut rng = StdRng::seed_from_u64(420);
//! let outcomes = table.play_hands(100, &mut rng).unwrap();
//! assert!(!outcomes.is_empty());
//! ```
//!
//! Hands can also be dealt from a [`PredefinedDeal`] to replay exact
//! scenarios; see [`HeadsUpTable::play_predefined_hand`].

pub mod action;
pub mod deal;
pub mod errors;
pub mod strategies;
pub mod strategy;
pub mod table;
pub mod view;

mod state;

#[cfg(any(test, feature = "engine-test-util"))]
pub mod test_util;

pub use action::{Action, AppliedAction, Street, TableEvent};
pub use deal::{DealRecord, PredefinedDeal};
pub use errors::EngineError;
pub use strategy::Strategy;
pub use table::{HandEnding, HandOutcome, HeadsUpTable};
pub use view::TableView;
