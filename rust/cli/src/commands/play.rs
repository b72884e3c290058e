//! # Play Command
//!
//! Interactive Battler session: the human plays against a computer opponent
//! in a loop of games until they decline to play again.
//!
//! ## Features
//!
//! - Validated card input (non-numeric and out-of-range answers re-prompt)
//! - Hidden computer draws, visible computer plays
//! - Optional pause after each computer turn
//! - Replay prompt starting a completely fresh game
//! - Reproducible sessions with `--seed` (game `k` uses `seed + k`)

use crate::error::CliError;
use crate::formatters::{
    format_banner, format_deck_remaining, format_draw, format_final_scores, format_hand,
    format_outcome, format_play, format_scores, narrow_rule, wide_rule,
};
use crate::io_utils::prompt_line;
use crate::ui;
use crate::validation::{
    CardChoice, NOT_A_NUMBER, OUT_OF_RANGE, ReplayAnswer, YES_OR_NO, parse_card_choice,
    parse_replay_answer,
};
use battler_ai::{AiChooser, create_ai};
use battler_engine::errors::GameError;
use battler_engine::game::{Chooser, Game, Outcome, Seat, TurnView};
use rand_chacha::ChaCha20Rng;
use std::io::{BufRead, Write};
use tracing::info;

pub const CARD_PROMPT: &str = "Choose a card to play (enter the number): ";
pub const PAUSE_PROMPT: &str = "Press Enter to continue...";
pub const REPLAY_PROMPT: &str = "\nWould you like to play again? (y/n): ";
pub const FAREWELL: &str = "Thanks for playing Battler!";

/// Resolved settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOptions {
    /// Base seed; drawn at random when `None`
    pub seed: Option<u64>,
    /// Opponent kind passed to `create_ai`
    pub ai: String,
    /// Wait for Enter after each computer turn
    pub pause: bool,
}

impl Default for PlayOptions {
    fn default() -> Self {
        Self {
            seed: None,
            ai: "scripted".to_string(),
            pause: true,
        }
    }
}

/// Handle the play command: run games until the player declines a rematch.
///
/// # Arguments
///
/// * `options` - Seed, opponent kind and pause setting
/// * `out` - Output stream for the game screen and prompts
/// * `err` - Error stream for warnings
/// * `stdin` - Input stream for card choices and answers
///
/// # Returns
///
/// * `Ok(())` once the player answers `n`/`no` (or input ends at the replay prompt)
/// * `Err(CliError::Interrupted)` if input ends in the middle of a game
/// * `Err(CliError)` for unknown opponents or I/O failures
///
/// # Examples
///
/// ```ignore
/// use battler_cli::commands::{handle_play_command, PlayOptions};
/// use std::io::{stdin, stdout, stderr};
///
/// let mut out = stdout();
/// let mut err = stderr();
/// let mut input = stdin().lock();
///
/// handle_play_command(&PlayOptions::default(), &mut out, &mut err, &mut input).unwrap();
/// ```
pub fn handle_play_command(
    options: &PlayOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    if create_ai(&options.ai).is_none() {
        return Err(CliError::InvalidInput(format!(
            "Unknown AI type: {}",
            options.ai
        )));
    }

    let base_seed = options.seed.unwrap_or_else(rand::random);
    info!(seed = base_seed, ai = %options.ai, "play session started");

    let mut games = 0u64;
    loop {
        let mut game = Game::new(base_seed.wrapping_add(games));
        games += 1;

        let mut console = Console {
            out: &mut *out,
            input: &mut *stdin,
        };
        match play_game(&mut game, &mut console, options) {
            Ok(outcome) => {
                info!(game = games, ?outcome, turns = game.turns_played(), "game finished");
            }
            Err(CliError::Interrupted(msg)) => {
                ui::display_warning(err, "input closed, ending session")?;
                return Err(CliError::Interrupted(msg));
            }
            Err(e) => return Err(e),
        }

        match ask_replay(out, stdin)? {
            ReplayAnswer::Yes => continue,
            ReplayAnswer::No => {
                writeln!(out, "{}", FAREWELL)?;
                info!(games, "play session ended");
                return Ok(());
            }
        }
    }
}

/// Terminal side of the table: prompts the human for cards and shows the
/// rest of the game screen.
struct Console<'a> {
    out: &'a mut dyn Write,
    input: &'a mut dyn BufRead,
}

impl Console<'_> {
    /// Prompts until the answer names a card in hand. `Ok(None)` on EOF.
    fn read_card_index(&mut self, turn: &TurnView<'_>) -> std::io::Result<Option<usize>> {
        if let Some(card) = turn.drawn {
            writeln!(self.out, "{}", format_draw(turn.player, card))?;
        }
        let hand = turn.player.hand();
        loop {
            writeln!(
                self.out,
                "\n{}'s hand: {}",
                turn.player.name(),
                format_hand(hand)
            )?;
            let Some(line) = prompt_line(self.out, self.input, CARD_PROMPT)? else {
                return Ok(None);
            };
            match parse_card_choice(&line, hand.len()) {
                CardChoice::Index(index) => return Ok(Some(index)),
                CardChoice::NotANumber => writeln!(self.out, "{}", NOT_A_NUMBER)?,
                CardChoice::OutOfRange => writeln!(self.out, "{}", OUT_OF_RANGE)?,
            }
        }
    }

    fn show_turn_start(&mut self, game: &Game) -> std::io::Result<()> {
        writeln!(self.out, "\n{}", narrow_rule())?;
        writeln!(self.out, "{}", format_scores(game))?;
        writeln!(self.out, "{}", format_deck_remaining(game))?;
        writeln!(self.out, "{}", narrow_rule())?;
        writeln!(self.out, "\n{}'s turn!", game.current_player().name())
    }

    fn pause(&mut self) -> Result<(), CliError> {
        match prompt_line(self.out, self.input, PAUSE_PROMPT)? {
            Some(_) => Ok(()),
            None => Err(GameError::InputClosed.into()),
        }
    }
}

impl Chooser for Console<'_> {
    fn choose(&mut self, turn: &TurnView<'_>, _rng: &mut ChaCha20Rng) -> Result<usize, GameError> {
        self.read_card_index(turn)
            .map_err(|e| GameError::Input(e.to_string()))?
            .ok_or(GameError::InputClosed)
    }
}

/// Runs one game from banner to final scores.
fn play_game(
    game: &mut Game,
    console: &mut Console<'_>,
    options: &PlayOptions,
) -> Result<Outcome, CliError> {
    let ai = create_ai(&options.ai)
        .ok_or_else(|| CliError::InvalidInput(format!("Unknown AI type: {}", options.ai)))?;
    let mut computer = AiChooser::new(ai);

    ui::write_lines(console.out, format_banner())?;

    let outcome = loop {
        if let Some(outcome) = game.outcome() {
            break outcome;
        }
        console.show_turn_start(game)?;
        let report = game.run_turn(console, &mut computer)?;
        let player = game.player(report.seat);

        if !player.is_human() {
            if let Some(card) = report.drawn {
                writeln!(console.out, "{}", format_draw(player, card))?;
            }
        }
        if let Some(card) = report.played {
            ui::write_lines(console.out, format_play(player, card))?;
        }

        if report.seat == Seat::Computer && report.outcome.is_none() && options.pause {
            console.pause()?;
        }
    };

    writeln!(console.out, "\n{}", wide_rule())?;
    writeln!(console.out, "{}", format_outcome(outcome))?;
    writeln!(console.out, "{}", format_final_scores(game))?;
    writeln!(console.out, "{}", wide_rule())?;
    Ok(outcome)
}

/// Asks until the answer is y/yes/n/no. End of input counts as "no".
fn ask_replay(out: &mut dyn Write, stdin: &mut dyn BufRead) -> Result<ReplayAnswer, CliError> {
    loop {
        let Some(line) = prompt_line(out, stdin, REPLAY_PROMPT)? else {
            writeln!(out)?;
            return Ok(ReplayAnswer::No);
        };
        match parse_replay_answer(&line) {
            Some(answer) => return Ok(answer),
            None => writeln!(out, "{}", YES_OR_NO)?,
        }
    }
}
