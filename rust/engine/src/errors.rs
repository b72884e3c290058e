use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid card index {index} (hand holds {len} cards)")]
    InvalidIndex { index: usize, len: usize },
    #[error("Invalid card value {value}, expected 1..=13")]
    InvalidCardValue { value: u8 },
    #[error("{player} has no cards to play")]
    EmptyHand { player: String },
    #[error("Game already finished")]
    GameOver,
    #[error("Input closed before a card was chosen")]
    InputClosed,
    #[error("Input error: {0}")]
    Input(String),
}
