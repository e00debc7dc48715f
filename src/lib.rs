//! A single-player blackjack (21) game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that manages the full round flow:
//! dealing, player hit/stand decisions, dealer automation, and outcome
//! scoring across repeated rounds within one session. Presentation is left
//! to the caller; [`Game`] implements [`core::fmt::Display`] with a
//! terminal-ready summary that withholds the dealer's hole card until the
//! round is over.
//!
//! # Example
//!
//! ```
//! use twentyone::{Game, RoundState};
//!
//! let mut game = Game::new("Alice", 42);
//! game.start_round()?;
//!
//! while game.state() == RoundState::PlayerTurn && game.player_hand().value() < 17 {
//!     game.player_hit()?;
//! }
//! if game.state() == RoundState::PlayerTurn {
//!     game.player_stand()?;
//! }
//! if game.state() == RoundState::DealerTurn {
//!     game.dealer_play()?;
//! }
//!
//! let outcome = game.result().expect("round is over");
//! println!("{outcome}");
//! println!("{}", game.score());
//! # Ok::<(), Box<dyn core::error::Error>>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, DrawError, ParseCardError, UpCardError};
pub use game::{Game, RESHUFFLE_THRESHOLD, RoundState};
pub use hand::{Hand, HandStatus};
pub use result::{RoundOutcome, Score};
