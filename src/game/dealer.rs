use alloc::vec::Vec;

use crate::card::Card;
use crate::error::ActionError;
use crate::hand::{Hand, HandStatus};
use crate::result::RoundOutcome;

use super::{Game, RoundState};

/// Dealer draws while below this value, stands at or above it.
const DEALER_STAND_VALUE: u8 = 17;

fn determine_outcome(player: &Hand, dealer: &Hand) -> RoundOutcome {
    let player_value = player.value();
    let dealer_value = dealer.value();

    if player.status() == HandStatus::Busted {
        RoundOutcome::PlayerBust
    } else if dealer.status() == HandStatus::Busted {
        RoundOutcome::DealerBust
    } else if player.is_blackjack() && !dealer.is_blackjack() {
        RoundOutcome::PlayerBlackjack
    } else if dealer.is_blackjack() && !player.is_blackjack() {
        RoundOutcome::DealerBlackjack
    } else if player_value > dealer_value {
        RoundOutcome::PlayerWin
    } else if dealer_value > player_value {
        RoundOutcome::DealerWin
    } else {
        RoundOutcome::Push
    }
}

impl Game {
    /// Plays out the dealer's hand: draws while the dealer's value is below
    /// 17, stands at 17 or above (no soft-17 distinction).
    ///
    /// Ends the round unconditionally, even if the dealer busts. Returns the
    /// cards drawn.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::IllegalAction`] outside the dealer's turn, or
    /// [`ActionError::EmptyDeck`] if the deck is exhausted while the dealer
    /// must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ActionError> {
        if self.state != RoundState::DealerTurn {
            return Err(ActionError::IllegalAction);
        }

        let mut drawn = Vec::new();
        while self.dealer.value() < DEALER_STAND_VALUE {
            let card = self.deck.draw()?;
            self.dealer.add_card(card);
            drawn.push(card);
        }

        if self.dealer.status() == HandStatus::Playing {
            self.dealer.stand();
        }

        self.state = RoundState::RoundOver;
        self.settle();

        Ok(drawn)
    }

    /// Settles the round: determines the outcome and records it in the
    /// session score. Called exactly once, on the transition into
    /// `RoundOver`; the guard makes a stray second call a no-op.
    pub(super) fn settle(&mut self) {
        if self.outcome.is_some() {
            return;
        }

        let outcome = determine_outcome(&self.player, &self.dealer);
        self.score.record(outcome);
        self.outcome = Some(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::card::{Rank, Suit};

    fn hand_of(ranks: &[Rank]) -> Hand {
        let mut hand = Hand::new();
        for &rank in ranks {
            hand.add_card(Card::new(Suit::Clubs, rank));
        }
        hand
    }

    #[test]
    fn player_bust_takes_precedence() {
        // Both busted: the player's bust decides the round
        let player = hand_of(&[Rank::King, Rank::Queen, Rank::Jack]);
        let dealer = hand_of(&[Rank::Ten, Rank::Nine, Rank::Five]);
        assert_eq!(
            determine_outcome(&player, &dealer),
            RoundOutcome::PlayerBust
        );
    }

    #[test]
    fn dealer_bust_beats_value_comparison() {
        let player = hand_of(&[Rank::Ten, Rank::Five]);
        let dealer = hand_of(&[Rank::Ten, Rank::Nine, Rank::Five]);
        assert_eq!(
            determine_outcome(&player, &dealer),
            RoundOutcome::DealerBust
        );
    }

    #[test]
    fn natural_blackjack_beats_a_three_card_21() {
        let player = hand_of(&[Rank::Ace, Rank::King]);
        let dealer = hand_of(&[Rank::Seven, Rank::Seven, Rank::Seven]);
        assert_eq!(
            determine_outcome(&player, &dealer),
            RoundOutcome::PlayerBlackjack
        );

        assert_eq!(
            determine_outcome(&dealer, &player),
            RoundOutcome::DealerBlackjack
        );
    }

    #[test]
    fn both_naturals_push() {
        let player = hand_of(&[Rank::Ace, Rank::King]);
        let dealer = hand_of(&[Rank::Ace, Rank::Queen]);
        assert_eq!(determine_outcome(&player, &dealer), RoundOutcome::Push);
    }

    #[test]
    fn higher_value_wins() {
        let player = hand_of(&[Rank::Ten, Rank::Nine]);
        let dealer = hand_of(&[Rank::Ten, Rank::Eight]);
        assert_eq!(
            determine_outcome(&player, &dealer),
            RoundOutcome::PlayerWin
        );
        assert_eq!(
            determine_outcome(&dealer, &player),
            RoundOutcome::DealerWin
        );
    }

    #[test]
    fn equal_values_push() {
        let player = hand_of(&[Rank::Ten, Rank::Eight]);
        let dealer = hand_of(&[Rank::Nine, Rank::Nine]);
        assert_eq!(determine_outcome(&player, &dealer), RoundOutcome::Push);
    }
}
