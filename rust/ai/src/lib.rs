//! # battler-ai: Computer Opponents for Battler
//!
//! Provides the computer side of a Battler game. Opponents only ever see
//! their own hand and score, and pick the card to play next.
//!
//! ## Core Components
//!
//! - [`AIOpponent`] - Trait defining the interface for card choices
//! - [`scripted`] - The scripted opponent (highest card near the finish, random otherwise)
//! - [`create_ai`] - Factory function for creating opponents by name
//! - [`AiChooser`] - Adapter seating an opponent in a [`Game`](battler_engine::game::Game)
//!
//! ## Quick Start
//!
//! ```rust
//! use battler_ai::{create_ai, AiChooser};
//! use battler_engine::game::Game;
//!
//! let mut game = Game::new(42);
//! let mut human_stand_in = AiChooser::new(create_ai("scripted").unwrap());
//! let mut computer = AiChooser::new(create_ai("scripted").unwrap());
//! let outcome = game.play(&mut human_stand_in, &mut computer).unwrap();
//! println!("Game ended: {:?}", outcome);
//! ```

use battler_engine::cards::Card;
use battler_engine::errors::GameError;
use battler_engine::game::{Chooser, TurnView};
use rand_chacha::ChaCha20Rng;
use tracing::trace;

pub mod scripted;

/// Names accepted by [`create_ai`].
pub const AI_TYPES: &[&str] = &["scripted"];

/// Trait defining the interface for computer opponents.
///
/// # Example Implementation
///
/// ```rust
/// use battler_ai::AIOpponent;
/// use battler_engine::cards::Card;
/// use rand_chacha::ChaCha20Rng;
///
/// struct Leftmost;
///
/// impl AIOpponent for Leftmost {
///     fn choose_card(&self, hand: &[Card], _score: u32, _rng: &mut ChaCha20Rng) -> Option<usize> {
///         if hand.is_empty() { None } else { Some(0) }
///     }
///
///     fn name(&self) -> &str {
///         "Leftmost"
///     }
/// }
/// ```
pub trait AIOpponent: Send + Sync {
    /// Pick a zero-based index into `hand`, given the opponent's current score.
    ///
    /// Must return an in-range index for any non-empty hand and `None` for
    /// an empty one.
    fn choose_card(&self, hand: &[Card], score: u32, rng: &mut ChaCha20Rng) -> Option<usize>;

    /// Return the name/identifier of this AI implementation.
    fn name(&self) -> &str;
}

/// Factory function to create opponents by type string.
///
/// Returns `None` for names not listed in [`AI_TYPES`].
///
/// # Example
///
/// ```rust
/// use battler_ai::create_ai;
///
/// let ai = create_ai("scripted").unwrap();
/// assert_eq!(ai.name(), "ScriptedAI");
/// assert!(create_ai("oracle").is_none());
/// ```
pub fn create_ai(ai_type: &str) -> Option<Box<dyn AIOpponent>> {
    match ai_type {
        "scripted" => Some(Box::new(scripted::ScriptedAI::new())),
        _ => None,
    }
}

/// Seats an [`AIOpponent`] at the table by answering the game's card requests.
pub struct AiChooser {
    ai: Box<dyn AIOpponent>,
}

impl AiChooser {
    pub fn new(ai: Box<dyn AIOpponent>) -> Self {
        Self { ai }
    }

    pub fn name(&self) -> &str {
        self.ai.name()
    }
}

impl Chooser for AiChooser {
    fn choose(&mut self, turn: &TurnView<'_>, rng: &mut ChaCha20Rng) -> Result<usize, GameError> {
        let player = turn.player;
        let choice = self
            .ai
            .choose_card(player.hand(), player.score(), rng)
            .ok_or_else(|| GameError::EmptyHand {
                player: player.name().to_string(),
            })?;
        trace!(ai = self.ai.name(), choice, "ai chose card");
        Ok(choice)
    }
}
