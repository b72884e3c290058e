//! Text formatters for the Battler table.
//!
//! Pure functions producing the fixed-format lines of the game screen. The
//! play command writes them out; keeping them here lets the exact wording be
//! tested without driving a whole game.

use battler_engine::cards::Card;
use battler_engine::game::{Game, Outcome, Seat};
use battler_engine::player::{Player, STARTING_HAND, WINNING_SCORE};

/// Heavy rule used around the banner and the end-of-game summary.
pub fn wide_rule() -> String {
    "=".repeat(50)
}

/// Light rule used around the per-turn scoreboard.
pub fn narrow_rule() -> String {
    "=".repeat(30)
}

/// Startup banner including the rules text.
pub fn format_banner() -> Vec<String> {
    vec![
        wide_rule(),
        "Welcome to BATTLER!".to_string(),
        wide_rule(),
        "Rules:".to_string(),
        format!("- Each player starts with {} cards", STARTING_HAND),
        "- Draw 1 card at the start of each turn".to_string(),
        "- Play 1 card each turn".to_string(),
        format!("- First player to reach {} points wins!", WINNING_SCORE),
        wide_rule(),
    ]
}

/// Hand listing with 1-based numbers.
///
/// # Example
///
/// ```rust
/// use battler_engine::cards::Card;
/// use battler_cli::formatters::format_hand;
///
/// let hand: Vec<Card> = [5, 13, 1].iter().map(|&v| Card::new(v).unwrap()).collect();
/// assert_eq!(format_hand(&hand), "1: 5, 2: 13, 3: 1");
/// ```
pub fn format_hand(hand: &[Card]) -> String {
    hand.iter()
        .enumerate()
        .map(|(i, c)| format!("{}: {}", i + 1, c))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `SCORES: Player: 12 | Computer: 30`
pub fn format_scores(game: &Game) -> String {
    let human = game.player(Seat::Human);
    let computer = game.player(Seat::Computer);
    format!(
        "SCORES: {}: {} | {}: {}",
        human.name(),
        human.score(),
        computer.name(),
        computer.score()
    )
}

pub fn format_deck_remaining(game: &Game) -> String {
    format!("Cards remaining in deck: {}", game.deck_remaining())
}

/// Draw notice. The human sees the card, the opponent's stays hidden.
pub fn format_draw(player: &Player, card: Card) -> String {
    if player.is_human() {
        format!("You drew: {}", card)
    } else {
        format!("{} drew a card", player.name())
    }
}

pub fn format_play(player: &Player, card: Card) -> Vec<String> {
    vec![
        format!(
            "{} played: {} (worth {} points)",
            player.name(),
            card,
            card.points()
        ),
        format!("{}'s new score: {}", player.name(), player.score()),
    ]
}

/// Headline of the end-of-game summary.
pub fn format_outcome(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Winner(Seat::Human) => "🎉 CONGRATULATIONS! YOU WON! 🎉",
        Outcome::Winner(Seat::Computer) => "💻 Computer wins! Better luck next time!",
        Outcome::Exhausted => "Game ended - no more cards!",
    }
}

pub fn format_final_scores(game: &Game) -> String {
    let human = game.player(Seat::Human);
    let computer = game.player(Seat::Computer);
    format!(
        "Final Score - {}: {}, {}: {}",
        human.name(),
        human.score(),
        computer.name(),
        computer.score()
    )
}
