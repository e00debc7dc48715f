//! A standard 52-card deck with shuffling and sequential draw.

use core::fmt;

use alloc::collections::VecDeque;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DrawError;

/// An ordered deck of cards. Cards are drawn from the front.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Creates a full 52-card deck in canonical order (suits, then ranks).
    #[must_use]
    pub fn new() -> Self {
        let mut cards = VecDeque::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push_back(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    /// Creates a deck from an explicit card sequence.
    ///
    /// The first card given is the first drawn. Composition is not
    /// validated; this is intended for scripted decks in tests and demos.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Shuffles the deck in place.
    ///
    /// Works on decks of any size, including empty and single-card decks.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }

    /// Removes and returns the front card.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyDeck`] if no cards remain.
    pub fn draw(&mut self) -> Result<Card, DrawError> {
        self.cards.pop_front().ok_or(DrawError::EmptyDeck)
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns an iterator over the cards in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Deck with {} cards:", self.cards.len())?;
        for (i, card) in self.cards.iter().enumerate() {
            writeln!(f, "{}: {card}", i + 1)?;
        }
        Ok(())
    }
}
