use rand::Rng;
use rand::seq::SliceRandom;

use super::card::{Card, Suit, Value};

/// An ordered deck of cards, dealt from the top of the stack.
///
/// The deck never invents cards: once dealt, a card is gone until a new
/// deck is built. All shuffling goes through an explicit generator so
/// hands can be reproduced from a seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Create the full 52 card deck in canonical order.
    ///
    /// ```
    /// use headsup_holdem::core::Deck;
    ///
    /// assert_eq!(52, Deck::new().len());
    /// ```
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(52);
        for s in Suit::suits() {
            for v in Value::values() {
                cards.push(Card::new(v, s));
            }
        }
        Self { cards }
    }

    /// The 52 card deck minus the given cards. Used to build the
    /// remaining deck for equity sampling and for predefined-deal
    /// bookkeeping.
    pub fn without(known: &[Card]) -> Self {
        let mut deck = Deck::new();
        deck.cards.retain(|c| !known.contains(c));
        deck
    }

    /// Shuffle the deck in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deal the top card. `None` once the deck is exhausted.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub fn contains(&self, c: &Card) -> bool {
        self.cards.contains(c)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The remaining cards, top of the stack last.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
