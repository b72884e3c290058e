//! # Battler CLI Library
//!
//! This library provides the command-line interface for the Battler card
//! game: a human races a computer opponent to 100 points by playing one card
//! per turn from a shuffled 52-card deck.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line
//! arguments and executes the appropriate subcommand. [`run_with_input`] does
//! the same with an explicit input stream.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["battler", "sim", "--games", "10", "--seed", "42"];
//! let code = battler_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play interactive games against the computer (default)
//! - `sim`: Play computer-vs-computer games and print a summary
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::{BufRead, Write};
use tracing::debug;

#[macro_use]
mod macros;

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{BattlerCli, Commands};
use commands::{PlayOptions, handle_cfg_command, handle_play_command, handle_sim_command};
pub use error::CliError;

const COMMANDS: &[&str] = &["play", "sim", "cfg"];

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand
/// handler, reading interactive input from the process stdin.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `130` when input ends mid-game
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, out, err, &mut stdin_lock)
}

/// Same as [`run`] with `stdin` supplying every line the game reads.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// // Input ends before the first card is chosen.
/// let code = battler_cli::run_with_input(
///     ["battler", "play", "--seed", "1"],
///     &mut out,
///     &mut err,
///     &mut Cursor::new(Vec::new()),
/// );
/// assert_eq!(code, 130);
/// ```
pub fn run_with_input<I, S>(
    args: I,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match BattlerCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "Battler CLI");
                    write_or_exit!(err, "Usage: battler [command] [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: battler --help");
                    exit_code::ERROR
                }
            };
        }
    };

    let command = cli.cmd.unwrap_or_else(Commands::default_command);
    debug!(command = command.as_str(), "dispatching");

    let result = match command {
        Commands::Cfg => handle_cfg_command(out),
        Commands::Play { seed, no_pause, ai } => {
            match config::load().map(|cfg| play_options(cfg, seed, no_pause, ai)) {
                Ok(options) => handle_play_command(&options, out, err, stdin),
                Err(e) => Err(e.into()),
            }
        }
        Commands::Sim { games, seed, ai } => match config::load() {
            Ok(cfg) => {
                let ai = ai.unwrap_or(cfg.ai);
                handle_sim_command(games, seed.or(cfg.seed), &ai, out).map(|_| ())
            }
            Err(e) => Err(e.into()),
        },
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(_)) => exit_code::INTERRUPTED,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

/// Command-line flags take precedence over the loaded configuration.
fn play_options(
    cfg: config::Config,
    seed: Option<u64>,
    no_pause: bool,
    ai: Option<String>,
) -> PlayOptions {
    PlayOptions {
        seed: seed.or(cfg.seed),
        ai: ai.unwrap_or(cfg.ai),
        pause: cfg.pause && !no_pause,
    }
}
