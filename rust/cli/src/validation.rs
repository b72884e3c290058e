//! Input parsing and validation for interactive commands.
//!
//! This module turns raw lines typed at the prompts into decisions:
//! - Card choices (1-based on screen, zero-based in the engine)
//! - Answers to the "play again" question
//!
//! Parsing never fails hard. Bad input maps to a variant that the caller
//! answers with a re-prompt.

/// Error line shown when the card choice is not a number.
pub const NOT_A_NUMBER: &str = "Please enter a valid number.";
/// Error line shown when the card number is outside the hand.
pub const OUT_OF_RANGE: &str = "Invalid choice. Please choose a valid card number.";
/// Error line shown for anything but y/yes/n/no at the replay prompt.
pub const YES_OR_NO: &str = "Please enter 'y' or 'n'";

/// Result of parsing a card choice typed by the player.
#[derive(Debug, PartialEq, Eq)]
pub enum CardChoice {
    /// Zero-based index into the hand
    Index(usize),
    /// Input is not an integer
    NotANumber,
    /// Input is an integer that does not name a card in hand
    OutOfRange,
}

/// Parse a 1-based card number for a hand of `hand_len` cards.
///
/// # Example
///
/// ```rust
/// # use battler_cli::validation::{parse_card_choice, CardChoice};
/// assert_eq!(parse_card_choice("3", 10), CardChoice::Index(2));
/// assert_eq!(parse_card_choice("0", 10), CardChoice::OutOfRange);
/// assert_eq!(parse_card_choice("11", 10), CardChoice::OutOfRange);
/// assert_eq!(parse_card_choice("three", 10), CardChoice::NotANumber);
/// ```
pub fn parse_card_choice(input: &str, hand_len: usize) -> CardChoice {
    let number: i64 = match input.trim().parse() {
        Ok(n) => n,
        Err(_) => return CardChoice::NotANumber,
    };
    let index = number
        .checked_sub(1)
        .and_then(|n| usize::try_from(n).ok());
    match index {
        Some(index) if index < hand_len => CardChoice::Index(index),
        _ => CardChoice::OutOfRange,
    }
}

/// Answer to the "play again" prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayAnswer {
    Yes,
    No,
}

/// Parse a y/yes/n/no answer, case-insensitively. Anything else is `None`.
///
/// # Example
///
/// ```rust
/// # use battler_cli::validation::{parse_replay_answer, ReplayAnswer};
/// assert_eq!(parse_replay_answer("YES"), Some(ReplayAnswer::Yes));
/// assert_eq!(parse_replay_answer(" n "), Some(ReplayAnswer::No));
/// assert_eq!(parse_replay_answer("maybe"), None);
/// ```
pub fn parse_replay_answer(input: &str) -> Option<ReplayAnswer> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(ReplayAnswer::Yes),
        "n" | "no" => Some(ReplayAnswer::No),
        _ => None,
    }
}
