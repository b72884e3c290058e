//! Command-line argument definitions for the `battler` binary.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "battler",
    version,
    about = "Battler: race the computer to 100 points, one card at a time"
)]
pub struct BattlerCli {
    #[command(subcommand)]
    pub cmd: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Play interactive games against the computer (the default command)
    Play {
        /// Base seed for reproducible games
        #[arg(long)]
        seed: Option<u64>,
        /// Skip the "Press Enter" pause after computer turns
        #[arg(long)]
        no_pause: bool,
        /// Opponent kind
        #[arg(long)]
        ai: Option<String>,
    },
    /// Play computer-vs-computer games and print a summary
    Sim {
        /// Number of games to play
        #[arg(long, default_value_t = 100)]
        games: u32,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        ai: Option<String>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

impl Commands {
    /// The command run when none is given on the command line.
    pub fn default_command() -> Self {
        Commands::Play {
            seed: None,
            no_pause: false,
            ai: None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Commands::Play { .. } => "play",
            Commands::Sim { .. } => "sim",
            Commands::Cfg => "cfg",
        }
    }
}
