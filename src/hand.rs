//! Hand representation with ace re-valuation and status tracking.

use core::fmt;

use alloc::vec::Vec;

use crate::card::Card;

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card.value());
    }

    // Downgrade aces from 11 to 1 while over 21
    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= 21;
    (value, is_soft)
}

/// Hand status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandStatus {
    /// Hand is active and can take cards.
    Playing,
    /// The participant has stood.
    Standing,
    /// Hand has busted (over 21).
    Busted,
    /// Hand is a natural blackjack (21 with two cards).
    Blackjack,
}

impl HandStatus {
    /// Returns the status name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Playing => "Playing",
            Self::Standing => "Standing",
            Self::Busted => "Busted",
            Self::Blackjack => "BlackJack",
        }
    }
}

impl fmt::Display for HandStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A participant's hand.
///
/// The status is derived from the card set: it changes only through
/// [`Hand::add_card`] and [`Hand::stand`].
#[derive(Debug, Clone)]
pub struct Hand {
    cards: Vec<Card>,
    status: HandStatus,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            status: HandStatus::Playing,
        }
    }

    /// Adds a card to the hand and recomputes the status.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);

        let (value, _) = evaluate_cards(&self.cards);
        if value > 21 {
            self.status = HandStatus::Busted;
        } else if self.cards.len() == 2 && value == 21 {
            self.status = HandStatus::Blackjack;
        }
    }

    /// Marks the hand as standing.
    pub const fn stand(&mut self) {
        self.status = HandStatus::Standing;
    }

    /// Empties the hand and resets the status for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.status = HandStatus::Playing;
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the current status of the hand.
    #[must_use]
    pub const fn status(&self) -> HandStatus {
        self.status
    }

    /// Calculates the value of the hand.
    ///
    /// Aces are counted as 11 if possible without busting, otherwise as 1.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is a natural blackjack.
    ///
    /// Independent of [`Hand::status`]; in a correctly driven round the two
    /// never disagree.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == 21
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
