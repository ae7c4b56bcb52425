use crate::core::{Card, HoldemError};

/// A fully predetermined deal: both hole hands and the complete board,
/// supplied up front. Handed to
/// [`super::HeadsUpTable::play_predefined_hand`] to replay an exact
/// scenario instead of dealing from a shuffled deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PredefinedDeal {
    pub player1_hole: [Card; 2],
    pub player2_hole: [Card; 2],
    pub community: [Card; 5],
}

impl PredefinedDeal {
    /// All nine cards of the deal, holes first then board.
    pub fn cards(&self) -> [Card; 9] {
        let mut cards = [self.player1_hole[0]; 9];
        for (slot, card) in cards.iter_mut().zip(
            self.player1_hole
                .iter()
                .chain(&self.player2_hole)
                .chain(&self.community),
        ) {
            *slot = *card;
        }
        cards
    }

    /// The nine cards must be distinct; anything else would deal the
    /// same card twice.
    pub fn validate(&self) -> Result<(), HoldemError> {
        let mut seen = 0u64;
        for c in self.cards() {
            let bit = 1u64 << c.index();
            if seen & bit != 0 {
                return Err(HoldemError::DuplicateCard(c));
            }
            seen |= bit;
        }
        Ok(())
    }
}

/// The persisted form of a pregenerated deal, keyed by hand number.
/// External debug tooling stores these as JSON with every card in its
/// two-character text form; the engine itself never touches a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DealRecord {
    pub hand_no: u64,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub deal: PredefinedDeal,
}
