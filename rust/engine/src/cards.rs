use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::GameError;

/// Lowest card value in the deck.
pub const MIN_VALUE: u8 = 1;
/// Highest card value in the deck.
pub const MAX_VALUE: u8 = 13;
/// Number of copies of each value in a fresh deck.
pub const COPIES_PER_VALUE: usize = 4;
/// Size of a freshly built deck.
pub const DECK_SIZE: usize = MAX_VALUE as usize * COPIES_PER_VALUE;

/// A single numbered card. The value is also the number of points the card
/// scores when played.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Card {
    value: u8,
}

impl Card {
    pub fn new(value: u8) -> Result<Self, GameError> {
        if (MIN_VALUE..=MAX_VALUE).contains(&value) {
            Ok(Self { value })
        } else {
            Err(GameError::InvalidCardValue { value })
        }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    /// Points awarded for playing this card.
    pub fn points(&self) -> u32 {
        u32::from(self.value)
    }
}

impl TryFrom<u8> for Card {
    type Error = GameError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Card::new(value)
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        card.value
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

pub fn all_values() -> impl Iterator<Item = u8> {
    MIN_VALUE..=MAX_VALUE
}

/// Unshuffled deck: every value 1..=13, four times over.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(DECK_SIZE);
    for _ in 0..COPIES_PER_VALUE {
        for value in all_values() {
            v.push(Card { value });
        }
    }
    v
}
