//! Baseline [`crate::engine::Strategy`] implementations: simple
//! opponents for simulations and exact scripts for tests. Anything
//! smarter lives outside the engine; these exist so a table is useful
//! out of the box.

mod calling;
mod folding;
mod random;
mod replay;
mod threshold;

pub use calling::CallingStrategy;
pub use folding::FoldingStrategy;
pub use random::RandomStrategy;
pub use replay::ReplayStrategy;
pub use threshold::{StreetThresholds, ThresholdStrategy};
