//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when parsing a card from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The suit is not one of the four valid suits.
    #[error("unrecognized suit")]
    InvalidSuit,
    /// The rank is not one of the thirteen valid ranks.
    #[error("unrecognized rank")]
    InvalidRank,
    /// The text is not of the form `"<Rank> of <Suit>"`.
    #[error("malformed card description")]
    InvalidCard,
}

/// Errors that can occur when drawing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// No cards remain in the deck.
    #[error("cannot draw from an empty deck")]
    EmptyDeck,
}

/// Errors that can occur during player or dealer actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The action is not legal in the current round state.
    #[error("action is not legal in the current round state")]
    IllegalAction,
    /// No cards remain in the deck.
    #[error("cannot draw from an empty deck")]
    EmptyDeck,
}

impl From<DrawError> for ActionError {
    fn from(err: DrawError) -> Self {
        match err {
            DrawError::EmptyDeck => Self::EmptyDeck,
        }
    }
}

/// Errors that can occur when querying the dealer's up card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UpCardError {
    /// The dealer has not been dealt any cards.
    #[error("dealer has no cards")]
    NoCards,
}
