//! A French card deck and a 2D vector that behave like built-in sequences
//! and numbers, with optional `no_std` support.
//!
//! [`FrenchDeck`] exposes indexing, slicing, iteration, membership and
//! sorting through the [`Sequence`] trait without ever mutating its cards.
//! [`Vector`] implements the arithmetic operators for a pair of coordinates.
//!
//! # Example
//!
//! ```
//! use datamodel::{Card, FrenchDeck, Rank, Sequence, Suit, Vector};
//!
//! let deck = FrenchDeck::new(42);
//! assert_eq!(deck.len(), 52);
//! assert_eq!(deck.get(-1), Ok(&Card::new(Rank::Ace, Suit::Hearts)));
//!
//! let v = Vector::new(2.0, 4.0) + Vector::new(2.0, 1.0);
//! assert_eq!(v.to_string(), "Vector(4,5)");
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
pub mod ranking;
pub mod seq;
mod sync;
pub mod vector;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::FrenchDeck;
pub use error::{ParseCardError, SequenceError, VectorError};
pub use ranking::{SuitPriority, spades_high};
pub use seq::{Cards, Sequence, Slice};
pub use vector::Vector;
