//! # battler-engine: Card Game Engine Core
//!
//! Rules and turn sequencing for Battler, a two-player game where a human
//! and a scripted opponent draw and play numbered cards until one of them
//! reaches 100 points.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card values (1 to 13) and unshuffled deck construction
//! - [`deck`] - Shuffled draw pile driven by an injected ChaCha20 RNG
//! - [`player`] - Hand, score and choice policy of a single player
//! - [`game`] - Setup, the turn state machine and win detection
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use battler_engine::game::{Chooser, Game, Outcome, TurnView};
//! use battler_engine::errors::GameError;
//! use rand_chacha::ChaCha20Rng;
//!
//! // Plays whatever card sits first in hand
//! struct FirstCard;
//!
//! impl Chooser for FirstCard {
//!     fn choose(
//!         &mut self,
//!         _turn: &TurnView<'_>,
//!         _rng: &mut ChaCha20Rng,
//!     ) -> Result<usize, GameError> {
//!         Ok(0)
//!     }
//! }
//!
//! let mut game = Game::new(42);
//! let outcome = game.play(&mut FirstCard, &mut FirstCard).unwrap();
//! assert!(matches!(outcome, Outcome::Winner(_) | Outcome::Exhausted));
//! ```
//!
//! ## Deterministic Gameplay
//!
//! Shuffles and scripted choices draw from a seeded RNG owned by the game:
//!
//! ```rust
//! use battler_engine::deck::Deck;
//!
//! let mut a = Deck::new_with_seed(7);
//! let mut b = Deck::new_with_seed(7);
//! assert_eq!(a.draw(), b.draw());
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod game;
pub mod player;
