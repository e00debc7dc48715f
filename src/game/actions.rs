use crate::card::Card;
use crate::error::ActionError;
use crate::hand::HandStatus;

use super::{Game, RoundState};

impl Game {
    /// Player action: hit (draw a card).
    ///
    /// Ends the round immediately if the player busts. Returns the drawn
    /// card.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::IllegalAction`] outside the player's turn, or
    /// [`ActionError::EmptyDeck`] if the deck is exhausted.
    pub fn player_hit(&mut self) -> Result<Card, ActionError> {
        if self.state != RoundState::PlayerTurn {
            return Err(ActionError::IllegalAction);
        }

        let card = self.deck.draw()?;
        self.player.add_card(card);

        if self.player.status() == HandStatus::Busted {
            self.state = RoundState::RoundOver;
            self.settle();
        }

        Ok(card)
    }

    /// Player action: stand (keep the current hand).
    ///
    /// Moves the round to the dealer's turn.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::IllegalAction`] outside the player's turn.
    pub fn player_stand(&mut self) -> Result<(), ActionError> {
        if self.state != RoundState::PlayerTurn {
            return Err(ActionError::IllegalAction);
        }

        self.player.stand();
        self.state = RoundState::DealerTurn;

        Ok(())
    }
}
