//! Round state types.

use core::fmt;

/// Round state: whose action is legal next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// No round has been dealt yet.
    WaitingToStart,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and the outcome is available.
    RoundOver,
}

impl RoundState {
    /// Returns the state name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::WaitingToStart => "WaitingToStart",
            Self::PlayerTurn => "PlayerTurn",
            Self::DealerTurn => "DealerTurn",
            Self::RoundOver => "RoundOver",
        }
    }
}

impl fmt::Display for RoundState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
