//! The 52-card French deck.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;
use core::slice::Iter;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::SequenceError;
use crate::seq::{Cards, Sequence};
use crate::sync::Locked;

/// Seed used by [`FrenchDeck::default`] when no system entropy is available.
#[cfg(not(feature = "std"))]
const DEFAULT_SEED: u64 = 0;

/// A fixed deck of 52 cards that reads like a built-in sequence.
///
/// The cards are generated once, suit by suit in [`Suit::ALL`] order and
/// rank by rank within each suit, and never change afterwards. Random
/// selection and shuffling draw from a seeded generator owned by the deck;
/// shuffling returns a new [`Cards`] instead of reordering the deck.
///
/// # Example
///
/// ```
/// use datamodel::{Card, FrenchDeck, Rank, Sequence, Suit};
///
/// let deck = FrenchDeck::new(7);
/// assert_eq!(deck.len(), 52);
/// assert_eq!(deck[0], Card::new(Rank::Two, Suit::Spades));
/// assert!(deck.contains(&Card::new(Rank::Queen, Suit::Hearts)));
/// assert!(deck.contains(&deck.random_card()));
/// ```
pub struct FrenchDeck {
    /// Cards in construction order.
    cards: Vec<Card>,
    /// Random number generator.
    rng: Locked<ChaCha8Rng>,
}

impl FrenchDeck {
    /// Creates a deck whose random operations are driven by `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let cards = Self::create_cards();
        tracing::debug!(seed, cards = cards.len(), "built french deck");

        Self {
            cards,
            rng: Locked::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    fn create_cards() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        cards
    }

    /// Picks one card uniformly at random using the deck's generator.
    ///
    /// The deck always holds 52 cards, so this cannot fail; use
    /// [`Sequence::choose`] on a slice of the deck for the fallible form.
    #[must_use]
    pub fn random_card(&self) -> Card {
        let index = self.rng.with(|rng| rng.random_range(0..self.cards.len()));
        let card = self.cards[index];
        tracing::trace!(index, %card, "random card");
        card
    }

    /// Picks one card uniformly at random, reporting an empty deck as an error.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptyCollection`] if there are no cards.
    pub fn try_random_card(&self) -> Result<Card, SequenceError> {
        self.rng.with(|rng| self.choose(rng))
    }

    /// Returns a shuffled copy of the deck, leaving the deck itself untouched.
    #[must_use]
    pub fn shuffled_copy(&self) -> Cards {
        tracing::trace!("shuffling a copy of the deck");
        self.rng.with(|rng| self.shuffled(rng))
    }
}

/// With `std`, the deck is seeded from the thread-local generator, so each
/// default deck makes different random choices. Without `std` there is no
/// entropy source and every default deck uses the same fixed seed; call
/// [`FrenchDeck::new`] to choose one.
impl Default for FrenchDeck {
    #[cfg(feature = "std")]
    fn default() -> Self {
        Self::new(rand::rng().random())
    }

    #[cfg(not(feature = "std"))]
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl Clone for FrenchDeck {
    fn clone(&self) -> Self {
        Self {
            cards: self.cards.clone(),
            rng: Locked::new(self.rng.with(|rng| rng.clone())),
        }
    }
}

impl fmt::Debug for FrenchDeck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrenchDeck")
            .field("cards", &self.cards)
            .finish_non_exhaustive()
    }
}

impl PartialEq for FrenchDeck {
    /// Decks compare by their cards only.
    fn eq(&self, other: &Self) -> bool {
        self.cards == other.cards
    }
}

impl Eq for FrenchDeck {}

impl Sequence for FrenchDeck {
    fn as_cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Index<usize> for FrenchDeck {
    type Output = Card;

    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}

impl<'a> IntoIterator for &'a FrenchDeck {
    type Item = &'a Card;
    type IntoIter = Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
