//! Round outcome and session score types.

use core::fmt;

/// Outcome of a finished round, from the player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Player busted; dealer wins.
    PlayerBust,
    /// Dealer busted; player wins.
    DealerBust,
    /// Player has a natural blackjack and the dealer does not.
    PlayerBlackjack,
    /// Dealer has a natural blackjack and the player does not.
    DealerBlackjack,
    /// Player's hand value is higher.
    PlayerWin,
    /// Dealer's hand value is higher.
    DealerWin,
    /// Equal hand values; nothing is won or lost.
    Push,
}

impl RoundOutcome {
    /// Returns whether the round counts as a player win.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(
            self,
            Self::DealerBust | Self::PlayerBlackjack | Self::PlayerWin
        )
    }

    /// Returns whether the round counts as a player loss.
    #[must_use]
    pub const fn is_loss(self) -> bool {
        matches!(
            self,
            Self::PlayerBust | Self::DealerBlackjack | Self::DealerWin
        )
    }
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PlayerBust => "Player busted! Dealer wins!",
            Self::DealerBust => "Dealer busted! Player wins!",
            Self::PlayerBlackjack => "BlackJack! Player wins!",
            Self::DealerBlackjack => "Dealer has BlackJack! Dealer wins!",
            Self::PlayerWin => "Player wins!",
            Self::DealerWin => "Dealer wins!",
            Self::Push => "Push! It's a tie!",
        })
    }
}

/// Cumulative session score. Persists across rounds within one game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    /// Rounds won by the player.
    pub wins: u32,
    /// Rounds lost by the player.
    pub losses: u32,
    /// Tied rounds.
    pub pushes: u32,
}

impl Score {
    /// Records one finished round.
    pub const fn record(&mut self, outcome: RoundOutcome) {
        if outcome.is_win() {
            self.wins += 1;
        } else if outcome.is_loss() {
            self.losses += 1;
        } else {
            self.pushes += 1;
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wins: {}, Losses: {}, Pushes: {}",
            self.wins, self.losses, self.pushes
        )
    }
}
