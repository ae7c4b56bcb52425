use std::fmt;
use std::str::FromStr;

use super::HoldemError;

/// Card face value.
/// The discriminant is the face value - 2.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub enum Value {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// T
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

/// Constant of all the values, lowest first.
/// This is what `Value::values()` returns.
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Get all of the `Value`'s that are possible.
    /// Used to iterate through all possible values when
    /// creating a deck or enumerating starting hands.
    pub fn values() -> [Value; 13] {
        VALUES
    }

    /// The poker rank of this value, from 2 (deuce) to 14 (ace).
    pub fn rank(self) -> u8 {
        self as u8 + 2
    }

    pub fn from_char(c: char) -> Option<Value> {
        match c {
            'A' => Some(Value::Ace),
            'K' => Some(Value::King),
            'Q' => Some(Value::Queen),
            'J' => Some(Value::Jack),
            'T' => Some(Value::Ten),
            '9' => Some(Value::Nine),
            '8' => Some(Value::Eight),
            '7' => Some(Value::Seven),
            '6' => Some(Value::Six),
            '5' => Some(Value::Five),
            '4' => Some(Value::Four),
            '3' => Some(Value::Three),
            '2' => Some(Value::Two),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Value::Ace => 'A',
            Value::King => 'K',
            Value::Queen => 'Q',
            Value::Jack => 'J',
            Value::Ten => 'T',
            Value::Nine => '9',
            Value::Eight => '8',
            Value::Seven => '7',
            Value::Six => '6',
            Value::Five => '5',
            Value::Four => '4',
            Value::Three => '3',
            Value::Two => '2',
        }
    }
}

/// Enum for the four suits. Ordering exists only so cards can be
/// sorted; it carries no poker meaning.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub enum Suit {
    /// Hearts
    Heart = 0,
    /// Diamonds
    Diamond = 1,
    /// Clubs
    Club = 2,
    /// Spades
    Spade = 3,
}

/// All of the `Suit`'s. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Heart, Suit::Diamond, Suit::Club, Suit::Spade];

impl Suit {
    /// Provide all the Suit's that there are.
    pub fn suits() -> [Suit; 4] {
        SUITS
    }

    pub fn from_char(c: char) -> Option<Suit> {
        match c {
            'h' => Some(Suit::Heart),
            'd' => Some(Suit::Diamond),
            'c' => Some(Suit::Club),
            's' => Some(Suit::Spade),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Suit::Heart => 'h',
            Suit::Diamond => 'd',
            Suit::Club => 'c',
            Suit::Spade => 's',
        }
    }
}

/// One of the 52 distinct cards: a value and a suit.
///
/// The canonical textual form is the value character followed by the
/// suit character, e.g. `"Ah"` for the ace of hearts.
///
/// # Examples
///
/// ```
/// use headsup_holdem::core::{Card, Suit, Value};
///
/// let card: Card = "Ah".parse().unwrap();
/// assert_eq!(Card::new(Value::Ace, Suit::Heart), card);
/// assert_eq!("Ah", card.to_string());
/// ```
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    pub fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// A dense index in `0..52`, used for duplicate bookkeeping.
    pub(crate) fn index(self) -> usize {
        self.value as usize * 4 + self.suit as usize
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.to_char(), self.suit.to_char())
    }
}

impl FromStr for Card {
    type Err = HoldemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (vc, sc) = match (chars.next(), chars.next(), chars.next()) {
            (Some(v), Some(s), None) => (v, s),
            _ => return Err(HoldemError::InvalidCardString(s.to_owned())),
        };
        let value = Value::from_char(vc).ok_or(HoldemError::UnexpectedValueChar(vc))?;
        let suit = Suit::from_char(sc).ok_or(HoldemError::UnexpectedSuitChar(sc))?;
        Ok(Card { value, suit })
    }
}

impl TryFrom<&str> for Card {
    type Error = HoldemError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s: String = serde::Deserialize::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
