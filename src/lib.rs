//! A heads-up Texas Hold'em simulation library.
//!
//! Three layers, leaves first:
//!
//! - [`core`] holds the card model and the 5-to-7 card hand evaluator.
//! - [`holdem`] holds hold'em knowledge: the 169-class preflop
//!   starting-hand table and Monte Carlo equity estimation.
//! - [`engine`] runs heads-up hands between pluggable [`engine::Strategy`]
//!   implementations: antes, four betting streets, all-in handling,
//!   showdown, and pot distribution, with every random draw going through
//!   an explicit, injectable generator.
//!
//! ```
//! use rand::{SeedableRng, rngs::StdRng};
//! use headsup_holdem::engine::{HeadsUpTable, strategies::CallingStrategy};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut table = HeadsUpTable::new(
//!     [
//!         Box::new(CallingStrategy),
//!         Box::new(CallingStrategy),
//!     ],
//!     1000,
//!     10,
//! );
//! let outcome = table.play_hand(&mut rng).unwrap();
//! assert_eq!(2000, table.stacks().iter().sum::<u32>());
//! # let _ = outcome;
//! ```

/// Core card functionality, agnostic to the game on top.
pub mod core;
/// Hold'em specific knowledge: starting hands and equity.
pub mod holdem;
/// The heads-up table engine and strategy interface.
pub mod engine;
