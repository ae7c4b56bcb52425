use crate::core::Card;

use super::action::{Action, AppliedAction};
use super::view::TableView;

/// Per-seat state for one hand. The two seats live in a fixed size
/// array; seat 0 is the reference position for odd-chip tie breaks.
#[derive(Debug, Clone)]
pub(crate) struct SeatState {
    pub stack: u32,
    pub hole: [Card; 2],
    /// Total wagered this street. Reset when a street begins.
    pub street_bet: u32,
    pub folded: bool,
}

impl SeatState {
    /// A seat with no chips behind is all-in; it is exempt from acting
    /// and from matching the current bet.
    pub fn is_all_in(&self) -> bool {
        self.stack == 0
    }
}

/// All the mutable state of one hand: seats, pot, board, and the
/// betting parameters of the street in progress. Owned exclusively by
/// the table while the hand runs; strategies only ever see a
/// [`TableView`] built from it.
#[derive(Debug, Clone)]
pub(crate) struct HandState {
    pub seats: [SeatState; 2],
    pub community: Vec<Card>,
    pub pot: u32,
    /// Highest total street wager; what a caller must match.
    pub current_bet: u32,
    /// Minimum raise increment. Starts at twice the ante and is
    /// recomputed after every committed raise; it carries across
    /// streets within the hand.
    pub min_raise: u32,
    pub ante: u32,
    /// The seat that opens every street of this hand.
    pub first_to_act: usize,
    pub to_act: usize,
}

impl HandState {
    /// Build the state for a fresh hand and post both antes. Callers
    /// have already verified both stacks cover the ante.
    pub fn new(stacks: [u32; 2], holes: [[Card; 2]; 2], ante: u32, first_to_act: usize) -> Self {
        let seats = [0, 1].map(|idx| SeatState {
            stack: stacks[idx] - ante,
            hole: holes[idx],
            street_bet: 0,
            folded: false,
        });
        Self {
            seats,
            community: Vec::with_capacity(5),
            pot: ante * 2,
            current_bet: 0,
            min_raise: ante * 2,
            ante,
            first_to_act,
            to_act: first_to_act,
        }
    }

    /// Start a street: nothing is owed, nobody has wagered, and the
    /// hand's opener is up. min_raise deliberately carries over.
    pub fn begin_street(&mut self) {
        self.current_bet = 0;
        for seat in &mut self.seats {
            seat.street_bet = 0;
        }
        self.to_act = self.first_to_act;
    }

    /// The betting on a street is settled once every seat that still
    /// has chips behind has acted and matched the current bet. All-in
    /// seats are exempt; they are never asked to act.
    pub fn street_settled(&self, acted: [bool; 2]) -> bool {
        self.seats.iter().enumerate().all(|(idx, seat)| {
            seat.is_all_in() || (acted[idx] && seat.street_bet == self.current_bet)
        })
    }

    /// Apply one action for `seat`, normalizing it per the table rules.
    /// Never fails; the returned [`AppliedAction`] is what actually
    /// happened.
    pub fn apply(&mut self, seat: usize, action: Action) -> AppliedAction {
        match action {
            Action::Fold => self.apply_fold(seat),
            Action::Check => self.apply_check(seat),
            Action::Call => self.apply_call(seat),
            Action::Bet(amount) | Action::Raise(amount) => self.apply_raise(seat, amount),
        }
    }

    fn apply_fold(&mut self, seat: usize) -> AppliedAction {
        self.seats[seat].folded = true;
        AppliedAction::Folded
    }

    fn apply_check(&mut self, seat: usize) -> AppliedAction {
        if self.seats[seat].street_bet != self.current_bet {
            // Checking while chips are owed forfeits the hand.
            self.apply_fold(seat)
        } else {
            AppliedAction::Checked
        }
    }

    fn apply_call(&mut self, seat: usize) -> AppliedAction {
        let owed = self.current_bet - self.seats[seat].street_bet;
        // A short stack calls all-in for whatever it has.
        let amount = owed.min(self.seats[seat].stack);
        self.seats[seat].stack -= amount;
        self.seats[seat].street_bet += amount;
        self.pot += amount;
        AppliedAction::Called { amount }
    }

    /// Bet and raise amounts are total street wagers. Normalization
    /// order: an amount under min_raise degrades to a check or call;
    /// the total is clamped to what the opponent could conceivably
    /// cover, then to the actor's own stack (all-in); a total that no
    /// longer clears the minimum raise over the current bet degrades to
    /// a call (or check when nothing has been bet); what remains is
    /// committed.
    fn apply_raise(&mut self, seat: usize, requested: u32) -> AppliedAction {
        if requested < self.min_raise {
            return if self.current_bet == 0 {
                self.apply_check(seat)
            } else {
                self.apply_call(seat)
            };
        }

        let opponent = 1 - seat;
        let street_bet = self.seats[seat].street_bet;

        // The opponent can never be asked to cover more than its stack.
        let mut amount = requested.min(street_bet + self.seats[opponent].stack);
        // Wagering more than the actor holds commits the whole stack.
        if amount > self.seats[seat].stack {
            amount = self.seats[seat].stack;
        }

        if amount < self.current_bet + self.min_raise {
            return if self.current_bet > 0 {
                self.apply_call(seat)
            } else {
                self.apply_check(seat)
            };
        }

        let added = amount - street_bet;
        self.seats[seat].stack -= added;
        self.pot += added;
        self.seats[seat].street_bet = amount;
        // Recomputed against the bet being raised over. Can degenerate
        // to zero when the table was opened with no ante.
        self.min_raise = amount.saturating_sub(self.current_bet);
        self.current_bet = amount;
        AppliedAction::Raised { to: amount }
    }

    /// The snapshot `seat` is allowed to decide from.
    pub fn view(&self, seat: usize) -> TableView {
        let opponent = 1 - seat;
        TableView {
            hole: self.seats[seat].hole,
            community: self.community.clone(),
            pot: self.pot,
            current_bet: self.current_bet,
            stack: self.seats[seat].stack,
            opponent_stack: self.seats[opponent].stack,
            street_bet: self.seats[seat].street_bet,
            opponent_street_bet: self.seats[opponent].street_bet,
            min_raise: self.min_raise,
            ante: self.ante,
        }
    }

    /// Stacks plus pot; constant for the whole life of a hand.
    pub fn chips_in_play(&self) -> u32 {
        self.seats[0].stack + self.seats[1].stack + self.pot
    }
}
