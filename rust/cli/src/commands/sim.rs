//! Simulation command handler for headless games.
//!
//! Plays whole games with the computer opponent choosing for both seats and
//! reports how they ended. Nothing is read from stdin.
//!
//! # Examples
//!
//! ```ignore
//! use battler_cli::commands::handle_sim_command;
//! use std::io;
//!
//! let mut out = io::stdout();
//!
//! // Run 1000 games with seed 42
//! handle_sim_command(1000, Some(42), "scripted", &mut out).unwrap();
//! ```

use crate::error::CliError;
use battler_ai::{AiChooser, create_ai};
use battler_engine::game::{Game, Outcome, Seat};
use std::io::Write;
use tracing::debug;

/// Totals over a batch of simulated games.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SimSummary {
    pub games: u32,
    pub human_wins: u32,
    pub computer_wins: u32,
    pub exhausted: u32,
    pub total_turns: u64,
    pub total_human_score: u64,
    pub total_computer_score: u64,
}

impl SimSummary {
    fn record(&mut self, outcome: Outcome, game: &Game) {
        self.games += 1;
        match outcome {
            Outcome::Winner(Seat::Human) => self.human_wins += 1,
            Outcome::Winner(Seat::Computer) => self.computer_wins += 1,
            Outcome::Exhausted => self.exhausted += 1,
        }
        self.total_turns += u64::from(game.turns_played());
        self.total_human_score += u64::from(game.player(Seat::Human).score());
        self.total_computer_score += u64::from(game.player(Seat::Computer).score());
    }

    fn average(total: u64, games: u32) -> f64 {
        if games == 0 {
            0.0
        } else {
            total as f64 / f64::from(games)
        }
    }
}

/// Handle the sim command: play `games` headless games.
///
/// # Arguments
///
/// * `games` - Number of games to play (must be >= 1)
/// * `seed` - Base RNG seed (game `i` uses `seed + i`); random when `None`
/// * `ai` - Opponent kind used for both seats
/// * `out` - Output stream for the summary
pub fn handle_sim_command(
    games: u32,
    seed: Option<u64>,
    ai: &str,
    out: &mut dyn Write,
) -> Result<SimSummary, CliError> {
    if games == 0 {
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }
    let (Some(first), Some(second)) = (create_ai(ai), create_ai(ai)) else {
        return Err(CliError::InvalidInput(format!("Unknown AI type: {}", ai)));
    };
    let mut human_seat = AiChooser::new(first);
    let mut computer_seat = AiChooser::new(second);

    let base_seed = seed.unwrap_or_else(rand::random);
    writeln!(out, "sim: games={} seed={} ai={}", games, base_seed, ai)?;

    let mut summary = SimSummary::default();
    for i in 0..games {
        let mut game = Game::new(base_seed.wrapping_add(u64::from(i)));
        let outcome = game.play(&mut human_seat, &mut computer_seat)?;
        debug!(game = i, ?outcome, turns = game.turns_played(), "simulated game");
        summary.record(outcome, &game);
    }

    writeln!(out, "Player wins: {}", summary.human_wins)?;
    writeln!(out, "Computer wins: {}", summary.computer_wins)?;
    writeln!(out, "Exhausted: {}", summary.exhausted)?;
    writeln!(
        out,
        "Average turns: {:.1}",
        SimSummary::average(summary.total_turns, summary.games)
    )?;
    writeln!(
        out,
        "Average final score: Player {:.1}, Computer {:.1}",
        SimSummary::average(summary.total_human_score, summary.games),
        SimSummary::average(summary.total_computer_score, summary.games)
    )?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sim_counts_every_game() {
        let mut out = Vec::new();
        let summary = handle_sim_command(25, Some(3), "scripted", &mut out).unwrap();
        assert_eq!(summary.games, 25);
        assert_eq!(
            summary.human_wins + summary.computer_wins + summary.exhausted,
            25
        );
        let output = String::from_utf8(out).unwrap();
        assert!(output.starts_with("sim: games=25 seed=3 ai=scripted"));
        assert!(output.contains("Player wins:"));
        assert!(output.contains("Average turns:"));
    }

    #[test]
    fn test_sim_is_reproducible_with_seed() {
        let a = handle_sim_command(10, Some(99), "scripted", &mut Vec::new()).unwrap();
        let b = handle_sim_command(10, Some(99), "scripted", &mut Vec::new()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_sim_zero_games_error() {
        let mut out = Vec::new();
        let result = handle_sim_command(0, None, "scripted", &mut out);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
        assert!(out.is_empty());
    }

    #[test]
    fn test_sim_unknown_ai_error() {
        let mut out = Vec::new();
        let result = handle_sim_command(1, None, "oracle", &mut out);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
