use rand::Rng;
use tracing::debug;

use crate::core::{Card, Deck, HandEval, evaluate};

use super::Strategy;
use super::action::{Action, AppliedAction, Street, TableEvent};
use super::deal::PredefinedDeal;
use super::errors::EngineError;
use super::state::HandState;

/// How one hand ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandEnding {
    /// A seat could not cover the ante; its whole remaining stack went
    /// to the opponent and no cards were dealt.
    AnteBusted { loser: usize },
    /// Somebody folded (or checked out of turn); the other seat took
    /// the pot.
    Fold { winner: usize },
    /// Both hands went to showdown. `winner` is `None` on an exact
    /// tie, in which case the pot was split with the odd chip going to
    /// seat 0.
    Showdown {
        winner: Option<usize>,
        evals: [HandEval; 2],
    },
}

/// The result of one hand, with the full event log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandOutcome {
    pub hand_no: u64,
    pub ending: HandEnding,
    /// The pot that was distributed. Zero for an ante bust, where the
    /// forfeit moves stack to stack.
    pub pot: u32,
    /// Both stacks after settlement.
    pub stacks: [u32; 2],
    pub events: Vec<TableEvent>,
}

enum StreetOutcome {
    Folded { winner: usize },
    Settled,
}

/// A heads-up table: two strategies, two persistent stacks, and a
/// fixed ante. Each call to [`HeadsUpTable::play_hand`] runs one
/// complete hand; stacks carry over and the seat that opens the
/// betting alternates from hand to hand.
///
/// The table owns all hand state for the duration of a hand. Strategies
/// only ever receive a [`super::TableView`] snapshot, so nothing they
/// do can corrupt the table.
pub struct HeadsUpTable {
    strategies: [Box<dyn Strategy>; 2],
    stacks: [u32; 2],
    ante: u32,
    hands_played: u64,
}

impl HeadsUpTable {
    /// A fresh table with both seats at `starting_stack`.
    pub fn new(strategies: [Box<dyn Strategy>; 2], starting_stack: u32, ante: u32) -> Self {
        Self::with_stacks(strategies, [starting_stack, starting_stack], ante)
    }

    /// A table with explicit per-seat stacks.
    pub fn with_stacks(strategies: [Box<dyn Strategy>; 2], stacks: [u32; 2], ante: u32) -> Self {
        Self {
            strategies,
            stacks,
            ante,
            hands_played: 0,
        }
    }

    pub fn stacks(&self) -> [u32; 2] {
        self.stacks
    }

    pub fn ante(&self) -> u32 {
        self.ante
    }

    pub fn hands_played(&self) -> u64 {
        self.hands_played
    }

    /// The match is over once a seat is felted.
    pub fn is_over(&self) -> bool {
        self.stacks.iter().any(|&s| s == 0)
    }

    /// Play one hand with a randomly dealt deck.
    pub fn play_hand<R: Rng>(&mut self, rng: &mut R) -> Result<HandOutcome, EngineError> {
        let total = self.stacks.iter().sum::<u32>();
        let outcome = self.run_hand(rng, None)?;
        debug_assert_eq!(total, self.stacks.iter().sum::<u32>());
        Ok(outcome)
    }

    /// Play one hand with hole cards and the full board supplied up
    /// front instead of dealt from a shuffled deck. The generator is
    /// still needed for the strategies.
    pub fn play_predefined_hand<R: Rng>(
        &mut self,
        rng: &mut R,
        deal: &PredefinedDeal,
    ) -> Result<HandOutcome, EngineError> {
        deal.validate()?;
        let total = self.stacks.iter().sum::<u32>();
        let outcome = self.run_hand(rng, Some(deal))?;
        debug_assert_eq!(total, self.stacks.iter().sum::<u32>());
        Ok(outcome)
    }

    /// Play up to `n` hands, stopping early once the match is over.
    pub fn play_hands<R: Rng>(
        &mut self,
        n: u64,
        rng: &mut R,
    ) -> Result<Vec<HandOutcome>, EngineError> {
        let mut outcomes = Vec::new();
        for _ in 0..n {
            if self.is_over() {
                break;
            }
            outcomes.push(self.play_hand(rng)?);
        }
        Ok(outcomes)
    }

    fn run_hand<R: Rng>(
        &mut self,
        rng: &mut R,
        deal: Option<&PredefinedDeal>,
    ) -> Result<HandOutcome, EngineError> {
        self.hands_played += 1;
        let hand_no = self.hands_played;
        // The opener alternates by hand parity; seat 1 opens hand 1.
        let first_to_act = (hand_no % 2) as usize;
        let mut events = Vec::new();

        // A seat that cannot cover the ante loses on the spot.
        for seat in 0..2 {
            if self.stacks[seat] < self.ante {
                let winner = 1 - seat;
                let forfeited = self.stacks[seat];
                self.stacks[winner] += forfeited;
                self.stacks[seat] = 0;
                events.push(TableEvent::PotAwarded {
                    seat: winner,
                    amount: forfeited,
                });
                debug!(hand_no, loser = seat, forfeited, "seat cannot cover the ante");
                return Ok(HandOutcome {
                    hand_no,
                    ending: HandEnding::AnteBusted { loser: seat },
                    pot: 0,
                    stacks: self.stacks,
                    events,
                });
            }
        }

        let (holes, mut deck, board) = match deal {
            Some(d) => {
                // The deck is rebuilt from the 43 unused cards purely
                // to keep the dealing bookkeeping consistent; the
                // predefined board never comes from it.
                (
                    [d.player1_hole, d.player2_hole],
                    Deck::without(&d.cards()),
                    Some(d.community),
                )
            }
            None => {
                let mut deck = Deck::new();
                deck.shuffle(rng);
                let holes = [
                    [draw(&mut deck)?, draw(&mut deck)?],
                    [draw(&mut deck)?, draw(&mut deck)?],
                ];
                (holes, deck, None)
            }
        };

        let mut hand = HandState::new(self.stacks, holes, self.ante, first_to_act);
        for seat in 0..2 {
            events.push(TableEvent::AntePosted {
                seat,
                amount: self.ante,
            });
        }
        for seat in 0..2 {
            events.push(TableEvent::HoleDealt {
                seat,
                cards: holes[seat],
            });
        }
        debug!(hand_no, first_to_act, pot = hand.pot, "hand started");
        debug_assert_eq!(self.stacks[0] + self.stacks[1], hand.chips_in_play());

        for street in [Street::Preflop, Street::Flop, Street::Turn, Street::River] {
            self.deal_street(street, &mut hand, &mut deck, board.as_ref(), &mut events)?;
            match self.run_street(street, &mut hand, rng, &mut events) {
                StreetOutcome::Folded { winner } => {
                    return Ok(self.finish_fold(&hand, winner, hand_no, events));
                }
                StreetOutcome::Settled => events.push(TableEvent::StreetComplete { street }),
            }
        }

        self.finish_showdown(&hand, hand_no, events)
    }

    fn deal_street(
        &self,
        street: Street,
        hand: &mut HandState,
        deck: &mut Deck,
        board: Option<&[Card; 5]>,
        events: &mut Vec<TableEvent>,
    ) -> Result<(), EngineError> {
        let count = street.cards_dealt();
        if count == 0 {
            return Ok(());
        }
        let cards: Vec<Card> = match board {
            // Predefined boards are revealed in place, no burns.
            Some(board) => {
                let dealt = hand.community.len();
                board[dealt..dealt + count].to_vec()
            }
            None => {
                draw(deck)?; // burn
                let mut cards = Vec::with_capacity(count);
                for _ in 0..count {
                    cards.push(draw(deck)?);
                }
                cards
            }
        };
        hand.community.extend(&cards);
        debug!(?street, board = ?hand.community, "community dealt");
        events.push(TableEvent::CommunityDealt { street, cards });
        Ok(())
    }

    fn run_street<R: Rng>(
        &mut self,
        street: Street,
        hand: &mut HandState,
        rng: &mut R,
        events: &mut Vec<TableEvent>,
    ) -> StreetOutcome {
        hand.begin_street();
        let mut acted = [false, false];
        while !hand.street_settled(acted) {
            let seat = hand.to_act;
            if hand.seats[seat].is_all_in() {
                hand.to_act = 1 - seat;
                continue;
            }
            let view = hand.view(seat);
            let action = self.strategies[seat].act(&view, rng);
            let applied = hand.apply(seat, action);
            debug!(?street, seat, ?action, ?applied, pot = hand.pot, "action");
            events.push(TableEvent::ActionTaken {
                seat,
                action,
                applied,
            });
            if applied == AppliedAction::Folded {
                return StreetOutcome::Folded { winner: 1 - seat };
            }
            acted[seat] = true;
            hand.to_act = 1 - seat;
        }
        StreetOutcome::Settled
    }

    fn finish_fold(
        &mut self,
        hand: &HandState,
        winner: usize,
        hand_no: u64,
        mut events: Vec<TableEvent>,
    ) -> HandOutcome {
        debug_assert!(hand.seats[1 - winner].folded);
        let pot = hand.pot;
        let mut stacks = [hand.seats[0].stack, hand.seats[1].stack];
        stacks[winner] += pot;
        events.push(TableEvent::PotAwarded {
            seat: winner,
            amount: pot,
        });
        debug!(hand_no, winner, pot, "won by fold");
        self.stacks = stacks;
        HandOutcome {
            hand_no,
            ending: HandEnding::Fold { winner },
            pot,
            stacks,
            events,
        }
    }

    fn finish_showdown(
        &mut self,
        hand: &HandState,
        hand_no: u64,
        mut events: Vec<TableEvent>,
    ) -> Result<HandOutcome, EngineError> {
        let pot = hand.pot;
        let board = hand.community.as_slice();
        let evals = [
            evaluate(&[hand.seats[0].hole.as_slice(), board].concat())?,
            evaluate(&[hand.seats[1].hole.as_slice(), board].concat())?,
        ];
        let winner = match evals[0].cmp(&evals[1]) {
            std::cmp::Ordering::Greater => Some(0),
            std::cmp::Ordering::Less => Some(1),
            std::cmp::Ordering::Equal => None,
        };

        let mut stacks = [hand.seats[0].stack, hand.seats[1].stack];
        match winner {
            Some(w) => {
                stacks[w] += pot;
                events.push(TableEvent::PotAwarded {
                    seat: w,
                    amount: pot,
                });
            }
            None => {
                // Even split; the odd chip goes to the reference seat.
                let share = pot / 2;
                stacks[0] += share + pot % 2;
                stacks[1] += share;
                events.push(TableEvent::PotAwarded {
                    seat: 0,
                    amount: share + pot % 2,
                });
                events.push(TableEvent::PotAwarded {
                    seat: 1,
                    amount: share,
                });
            }
        }
        debug!(hand_no, ?winner, pot, "showdown");
        self.stacks = stacks;
        Ok(HandOutcome {
            hand_no,
            ending: HandEnding::Showdown { winner, evals },
            pot,
            stacks,
            events,
        })
    }
}

impl std::fmt::Debug for HeadsUpTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeadsUpTable")
            .field("stacks", &self.stacks)
            .field("ante", &self.ante)
            .field("hands_played", &self.hands_played)
            .finish()
    }
}

fn draw(deck: &mut Deck) -> Result<Card, EngineError> {
    deck.deal().ok_or(EngineError::DeckExhausted)
}
