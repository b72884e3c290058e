use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::player::{Player, Policy, STARTING_HAND};

pub const HUMAN_NAME: &str = "Player";
pub const COMPUTER_NAME: &str = "Computer";

/// One of the two seats at the table. The human seat always acts first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seat {
    Human,
    Computer,
}

impl Seat {
    pub const ALL: [Seat; 2] = [Seat::Human, Seat::Computer];

    pub fn index(self) -> usize {
        match self {
            Seat::Human => 0,
            Seat::Computer => 1,
        }
    }

    pub fn other(self) -> Seat {
        match self {
            Seat::Human => Seat::Computer,
            Seat::Computer => Seat::Human,
        }
    }
}

/// How a finished game ended.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// First seat to reach the winning score
    Winner(Seat),
    /// Both hands ran dry before anyone reached the winning score
    Exhausted,
}

/// What a chooser gets to see when asked for a card.
#[derive(Debug, Clone, Copy)]
pub struct TurnView<'a> {
    pub seat: Seat,
    pub player: &'a Player,
    /// Card drawn at the start of this turn, already in the hand
    pub drawn: Option<Card>,
    pub deck_remaining: usize,
}

/// Source of card choices for one seat.
///
/// Implementations must return a zero-based index into `turn.player.hand()`.
/// Interactive implementations keep asking until they have a valid one;
/// an out-of-range answer is rejected by the game with `InvalidIndex`.
pub trait Chooser {
    fn choose(&mut self, turn: &TurnView<'_>, rng: &mut ChaCha20Rng) -> Result<usize, GameError>;
}

/// Summary of a single completed turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub seat: Seat,
    pub drawn: Option<Card>,
    /// `None` only when the acting player had nothing to play
    pub played: Option<Card>,
    /// Score of the acting player after the turn
    pub score: u32,
    /// Set when this turn ended the game
    pub outcome: Option<Outcome>,
}

/// Turn state machine for one game: deck, both players, whose turn it is and
/// the winner once there is one.
///
/// # Examples
///
/// ```
/// use battler_engine::game::{Game, Seat};
///
/// let game = Game::new(42);
/// assert_eq!(game.current_seat(), Seat::Human);
/// assert_eq!(game.player(Seat::Human).hand().len(), 10);
/// assert_eq!(game.deck_remaining(), 32);
/// assert!(game.outcome().is_none());
/// ```
#[derive(Debug)]
pub struct Game {
    deck: Deck,
    /// Indexed by `Seat::index`
    players: [Player; 2],
    turn: Seat,
    winner: Option<Seat>,
    rng: ChaCha20Rng,
    turns_played: u32,
    /// Draw already made for the turn in progress. Set between the draw and
    /// the play so a turn retried after an error does not draw twice.
    pending_draw: Option<Option<Card>>,
}

impl Game {
    /// Sets up a fresh game whose shuffle and scripted choices derive from `seed`.
    pub fn new(seed: u64) -> Self {
        Self::with_rng(ChaCha20Rng::seed_from_u64(seed))
    }

    pub fn with_rng(mut rng: ChaCha20Rng) -> Self {
        let mut deck = Deck::shuffled(&mut rng);
        let mut players = [
            Player::new(HUMAN_NAME, Policy::Human),
            Player::new(COMPUTER_NAME, Policy::Scripted),
        ];
        // alternate the deal, human first
        for _ in 0..STARTING_HAND {
            for p in &mut players {
                if let Some(c) = deck.draw() {
                    p.add_card(c);
                }
            }
        }
        debug!(deck_remaining = deck.remaining(), "dealt starting hands");
        Self::assemble(deck, players, rng)
    }

    /// Game resumed from an arbitrary position, human to act.
    pub fn from_parts(deck: Deck, human: Player, computer: Player, rng: ChaCha20Rng) -> Self {
        Self::assemble(deck, [human, computer], rng)
    }

    fn assemble(deck: Deck, players: [Player; 2], rng: ChaCha20Rng) -> Self {
        let winner = Seat::ALL
            .into_iter()
            .find(|s| players[s.index()].has_won());
        Self {
            deck,
            players,
            turn: Seat::Human,
            winner,
            rng,
            turns_played: 0,
            pending_draw: None,
        }
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }
    pub fn current_seat(&self) -> Seat {
        self.turn
    }
    pub fn current_player(&self) -> &Player {
        self.player(self.turn)
    }
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }
    pub fn winner(&self) -> Option<Seat> {
        self.winner
    }
    pub fn turns_played(&self) -> u32 {
        self.turns_played
    }

    /// `None` while the game is still running.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.winner {
            Some(seat) => Some(Outcome::Winner(seat)),
            None if self.players.iter().all(|p| p.hand().is_empty()) => Some(Outcome::Exhausted),
            None => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.outcome().is_some()
    }

    /// Plays one turn for the seat to act: draw if the deck allows, ask the
    /// chooser matching the player's policy for a card, play and score it.
    ///
    /// If the chooser or the play fails, the error is returned and the turn
    /// stays with the same seat. Calling `run_turn` again retries that turn
    /// without drawing another card.
    pub fn run_turn(
        &mut self,
        human: &mut dyn Chooser,
        computer: &mut dyn Chooser,
    ) -> Result<TurnReport, GameError> {
        if self.is_finished() {
            return Err(GameError::GameOver);
        }
        let seat = self.turn;
        let idx = seat.index();

        let drawn = match self.pending_draw {
            Some(drawn) => drawn,
            None => {
                let drawn = self.deck.draw();
                if let Some(c) = drawn {
                    self.players[idx].add_card(c);
                }
                self.pending_draw = Some(drawn);
                debug!(?seat, drawn = ?drawn.map(|c| c.value()), "turn started");
                drawn
            }
        };

        if self.players[idx].hand().is_empty() {
            // only reachable from hand-built positions
            debug!(?seat, "nothing to play, turn passes");
            self.pending_draw = None;
            self.turn = seat.other();
            self.turns_played += 1;
            return Ok(TurnReport {
                seat,
                drawn,
                played: None,
                score: self.players[idx].score(),
                outcome: self.outcome(),
            });
        }

        let view = TurnView {
            seat,
            player: &self.players[idx],
            drawn,
            deck_remaining: self.deck.remaining(),
        };
        let choice = match view.player.policy() {
            Policy::Human => human.choose(&view, &mut self.rng)?,
            Policy::Scripted => computer.choose(&view, &mut self.rng)?,
        };

        let player = &mut self.players[idx];
        let card = player.play_card(choice)?;
        let score = player.score();
        debug!(?seat, card = card.value(), score, "card played");
        self.pending_draw = None;
        self.turns_played += 1;

        if player.has_won() {
            info!(?seat, score, turns = self.turns_played, "game won");
            self.winner = Some(seat);
        } else {
            self.turn = seat.other();
        }

        let outcome = self.outcome();
        if outcome == Some(Outcome::Exhausted) {
            info!(turns = self.turns_played, "hands exhausted without a winner");
        }
        Ok(TurnReport {
            seat,
            drawn,
            played: Some(card),
            score,
            outcome,
        })
    }

    /// Runs turns until the game finishes and returns how it ended.
    pub fn play(
        &mut self,
        human: &mut dyn Chooser,
        computer: &mut dyn Chooser,
    ) -> Result<Outcome, GameError> {
        loop {
            if let Some(outcome) = self.outcome() {
                return Ok(outcome);
            }
            self.run_turn(human, computer)?;
        }
    }
}
