use crate::cards::Card;
use crate::errors::GameError;
use serde::{Deserialize, Serialize};

/// How a player's card choices are made.
/// The game routes each turn to the chooser matching this tag.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// Choices are entered interactively
    Human,
    /// Choices come from the scripted opponent
    Scripted,
}

/// Points needed to win a game.
pub const WINNING_SCORE: u32 = 100;

/// Number of cards dealt to each player at setup.
pub const STARTING_HAND: usize = 10;

/// A player with a hand of cards and a running score.
/// The hand keeps display order: new cards are appended at the tail.
#[derive(Debug, Clone)]
pub struct Player {
    /// Display name ("Player", "Computer")
    name: String,
    /// Cards in hand, in display order
    hand: Vec<Card>,
    /// Sum of the values of every card played so far
    score: u32,
    policy: Policy,
}

impl Player {
    pub fn new(name: impl Into<String>, policy: Policy) -> Self {
        Self {
            name: name.into(),
            hand: Vec::new(),
            score: 0,
            policy,
        }
    }

    /// Builder for mid-game scenarios.
    pub fn with_score(mut self, score: u32) -> Self {
        self.score = score;
        self
    }

    /// Builder for mid-game scenarios.
    pub fn with_hand(mut self, hand: Vec<Card>) -> Self {
        self.hand = hand;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }
    pub fn score(&self) -> u32 {
        self.score
    }
    pub fn policy(&self) -> Policy {
        self.policy
    }
    pub fn is_human(&self) -> bool {
        self.policy == Policy::Human
    }
    pub fn has_won(&self) -> bool {
        self.score >= WINNING_SCORE
    }

    pub fn add_card(&mut self, c: Card) {
        self.hand.push(c);
    }

    /// Removes the card at `index`, scores it and returns it.
    /// Leaves the player untouched when the index is out of range.
    pub fn play_card(&mut self, index: usize) -> Result<Card, GameError> {
        if index >= self.hand.len() {
            return Err(GameError::InvalidIndex {
                index,
                len: self.hand.len(),
            });
        }
        let card = self.hand.remove(index);
        self.score = self.score.saturating_add(card.points());
        Ok(card)
    }
}
