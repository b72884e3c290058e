//! Scripted opponent for Battler.
//!
//! A two-branch heuristic with no lookahead: once the opponent is close to
//! the winning score it plays its strongest card, otherwise it plays a
//! random one.

use crate::AIOpponent;
use battler_engine::cards::Card;
use rand::Rng;
use rand_chacha::ChaCha20Rng;

/// Score from which the scripted opponent stops playing randomly.
pub const CLOSING_SCORE: u32 = 85;

/// Index of the highest-value card, preferring the earliest on ties.
///
/// Returns `None` for an empty hand.
///
/// # Example
///
/// ```rust
/// use battler_ai::scripted::highest_card_index;
/// use battler_engine::cards::Card;
///
/// let hand: Vec<Card> = [4, 13, 2, 13].iter().map(|&v| Card::new(v).unwrap()).collect();
/// assert_eq!(highest_card_index(&hand), Some(1));
/// ```
pub fn highest_card_index(hand: &[Card]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, card) in hand.iter().enumerate() {
        match best {
            Some(b) if hand[b].value() >= card.value() => {}
            _ => best = Some(i),
        }
    }
    best
}

/// The scripted card choice for a hand and the score it was reached with.
///
/// - `score >= 85`: the highest card (first one on ties)
/// - otherwise: a uniformly random card
///
/// Returns `None` only for an empty hand.
pub fn scripted_choice<R: Rng + ?Sized>(hand: &[Card], score: u32, rng: &mut R) -> Option<usize> {
    if hand.is_empty() {
        return None;
    }
    if score >= CLOSING_SCORE {
        highest_card_index(hand)
    } else {
        Some(rng.random_range(0..hand.len()))
    }
}

/// Opponent that plays by [`scripted_choice`].
///
/// # Example
///
/// ```rust
/// use battler_ai::scripted::ScriptedAI;
/// use battler_ai::AIOpponent;
/// use battler_engine::cards::Card;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
///
/// let ai = ScriptedAI::new();
/// let hand: Vec<Card> = [3, 9, 5].iter().map(|&v| Card::new(v).unwrap()).collect();
/// let mut rng = ChaCha20Rng::seed_from_u64(1);
/// assert_eq!(ai.choose_card(&hand, 90, &mut rng), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedAI;

impl ScriptedAI {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ScriptedAI {
    fn default() -> Self {
        Self::new()
    }
}

impl AIOpponent for ScriptedAI {
    fn choose_card(&self, hand: &[Card], score: u32, rng: &mut ChaCha20Rng) -> Option<usize> {
        scripted_choice(hand, score, rng)
    }

    fn name(&self) -> &str {
        "ScriptedAI"
    }
}
