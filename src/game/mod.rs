//! Round engine and session state management.

use core::fmt;

use alloc::string::String;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{DrawError, UpCardError};
use crate::hand::Hand;
use crate::result::{RoundOutcome, Score};

mod actions;
mod dealer;
pub mod state;

pub use state::RoundState;

/// A fresh shuffled deck replaces the old one when fewer cards than this
/// remain at the start of a round.
pub const RESHUFFLE_THRESHOLD: usize = 20;

/// A single-player blackjack session.
///
/// The game owns the deck, the player's and dealer's hands, and the
/// cumulative session score. An external driver calls [`Game::start_round`],
/// the player actions, and [`Game::dealer_play`] in sequence; the round
/// outcome is settled exactly once, when the round ends.
pub struct Game {
    /// Cards to be dealt. Public so tests and tools can script the deck.
    pub deck: Deck,
    player_name: String,
    player: Hand,
    dealer: Hand,
    state: RoundState,
    score: Score,
    outcome: Option<RoundOutcome>,
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game session with a freshly shuffled deck.
    ///
    /// The seed makes the deal order deterministic for a given session.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::Game;
    ///
    /// let game = Game::new("Alice", 42);
    /// assert_eq!(game.cards_remaining(), 52);
    /// ```
    #[must_use]
    pub fn new(player_name: impl Into<String>, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);

        Self {
            deck,
            player_name: player_name.into(),
            player: Hand::new(),
            dealer: Hand::new(),
            state: RoundState::WaitingToStart,
            score: Score::default(),
            outcome: None,
            rng,
        }
    }

    /// Begins a new round: clears both hands, renews the deck if it has run
    /// low, and deals two cards each, alternating player first.
    ///
    /// If the player's opening two cards are a natural blackjack the player
    /// is stood automatically and the round moves straight to the dealer's
    /// turn; otherwise it is the player's turn.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyDeck`] if a deal draw fails. Unreachable in
    /// practice given the renewal threshold, but propagated rather than
    /// ignored.
    pub fn start_round(&mut self) -> Result<(), DrawError> {
        self.player.clear();
        self.dealer.clear();
        self.outcome = None;

        if self.deck.remaining() < RESHUFFLE_THRESHOLD {
            self.deck = Deck::new();
            self.deck.shuffle(&mut self.rng);
        }

        for _ in 0..2 {
            self.player.add_card(self.deck.draw()?);
            self.dealer.add_card(self.deck.draw()?);
        }

        if self.player.is_blackjack() {
            self.player.stand();
            self.state = RoundState::DealerTurn;
        } else {
            self.state = RoundState::PlayerTurn;
        }

        Ok(())
    }

    /// Returns the dealer's face-up card (the first card dealt to the
    /// dealer).
    ///
    /// # Errors
    ///
    /// Returns [`UpCardError::NoCards`] if the dealer has not been dealt any
    /// cards. Cannot occur after a successful [`Game::start_round`].
    pub fn dealer_up_card(&self) -> Result<Card, UpCardError> {
        self.dealer
            .cards()
            .first()
            .copied()
            .ok_or(UpCardError::NoCards)
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the cumulative session score.
    #[must_use]
    pub const fn score(&self) -> Score {
        self.score
    }

    /// Returns the outcome of the current round.
    ///
    /// `None` until the round is over. The outcome is settled once, when the
    /// round ends; querying it repeatedly never changes the score.
    #[must_use]
    pub const fn result(&self) -> Option<RoundOutcome> {
        self.outcome
    }

    /// Returns the player's name.
    #[must_use]
    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    ///
    /// The engine always holds the full hand; whether the hole card is shown
    /// is a presentation decision based on [`Game::state`].
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }
}

impl fmt::Display for Game {
    /// Renders the game for a terminal: round state, the dealer's visible
    /// cards (the hole card is withheld until the round is over), the
    /// player's hand, and the session score.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Game State: {}", self.state)?;

        if self.state == RoundState::RoundOver {
            writeln!(
                f,
                "Dealer: {} (Value: {}, State: {})",
                self.dealer,
                self.dealer.value(),
                self.dealer.status()
            )?;
        } else if let Ok(up_card) = self.dealer_up_card() {
            writeln!(f, "Dealer: Shows {up_card} (Hidden card)")?;
        } else {
            writeln!(f, "Dealer: (no cards)")?;
        }

        writeln!(f, "Player: {}", self.player_name)?;
        writeln!(f, "Hand: {}", self.player)?;
        writeln!(f, "Value: {}", self.player.value())?;
        writeln!(f, "State: {}", self.player.status())?;
        write!(f, "Session Score - {}", self.score)
    }
}
