//! Read-only sequence capabilities shared by the deck and its views.

extern crate alloc;

use alloc::vec::Vec;
use core::iter::Rev;
use core::ops::{Index, Range, RangeFrom, RangeFull, RangeTo};
use core::slice::Iter;

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

use crate::card::Card;
use crate::error::SequenceError;

/// Extended slice bounds: optional start, stop and step, each of which may
/// be negative.
///
/// Bounds are clamped to the sequence rather than rejected, so any slice of
/// any sequence succeeds unless the step is zero.
///
/// ```
/// use datamodel::{FrenchDeck, Rank, Sequence, Slice};
///
/// let deck = FrenchDeck::default();
/// let aces = deck.slice(Slice::new().start(12).step(13)).unwrap();
/// assert_eq!(aces.len(), 4);
/// assert!(aces.iter().all(|card| card.rank == Rank::Ace));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Slice {
    /// First position, counted from the end when negative.
    pub start: Option<isize>,
    /// Position to stop before, counted from the end when negative.
    pub stop: Option<isize>,
    /// Distance between taken positions. `None` means 1.
    pub step: Option<isize>,
}

impl Slice {
    /// A slice covering the whole sequence.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            start: None,
            stop: None,
            step: None,
        }
    }

    /// Sets the start bound.
    #[must_use]
    pub const fn start(mut self, start: isize) -> Self {
        self.start = Some(start);
        self
    }

    /// Sets the stop bound.
    #[must_use]
    pub const fn stop(mut self, stop: isize) -> Self {
        self.stop = Some(stop);
        self
    }

    /// Sets the step.
    #[must_use]
    pub const fn step(mut self, step: isize) -> Self {
        self.step = Some(step);
        self
    }

    /// Resolves the slice against a sequence of `len` elements, returning
    /// the positions it selects in order.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::ZeroStep`] if the step is zero.
    pub fn indices(&self, len: usize) -> Result<Vec<usize>, SequenceError> {
        let step = self.step.unwrap_or(1);
        if step == 0 {
            return Err(SequenceError::ZeroStep);
        }

        let len = len as isize;
        // Forward slices clamp into [0, len]; backward ones into [-1, len - 1].
        let (lower, upper) = if step > 0 { (0, len) } else { (-1, len - 1) };
        let clamp = |bound: Option<isize>, default: isize| {
            bound.map_or(default, |mut b| {
                if b < 0 {
                    b += len;
                }
                b.clamp(lower, upper)
            })
        };
        let (start, stop) = if step > 0 {
            (clamp(self.start, lower), clamp(self.stop, upper))
        } else {
            (clamp(self.start, upper), clamp(self.stop, lower))
        };

        let mut positions = Vec::new();
        let mut next = Some(start);
        while let Some(i) = next.filter(|&i| (step > 0 && i < stop) || (step < 0 && i > stop)) {
            positions.push(i as usize);
            next = i.checked_add(step);
        }
        Ok(positions)
    }
}

impl From<RangeFull> for Slice {
    fn from(_: RangeFull) -> Self {
        Self::new()
    }
}

impl From<Range<isize>> for Slice {
    fn from(range: Range<isize>) -> Self {
        Self::new().start(range.start).stop(range.end)
    }
}

impl From<RangeFrom<isize>> for Slice {
    fn from(range: RangeFrom<isize>) -> Self {
        Self::new().start(range.start)
    }
}

impl From<RangeTo<isize>> for Slice {
    fn from(range: RangeTo<isize>) -> Self {
        Self::new().stop(range.end)
    }
}

/// The read-only sequence capability set: length, positional and sliced
/// access, forward and reverse iteration, membership, random choice and
/// sorted or shuffled copies.
///
/// Implementors only supply [`Sequence::as_cards`]. No method mutates the
/// underlying cards; reordering operations return a new [`Cards`].
pub trait Sequence {
    /// The backing cards in sequence order.
    fn as_cards(&self) -> &[Card];

    /// Returns the number of cards.
    fn len(&self) -> usize {
        self.as_cards().len()
    }

    /// Returns whether the sequence has no cards.
    fn is_empty(&self) -> bool {
        self.as_cards().is_empty()
    }

    /// Returns the card at `index`, counting from the end when negative.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::IndexOutOfRange`] if the index falls outside
    /// the sequence.
    fn get(&self, index: isize) -> Result<&Card, SequenceError> {
        let cards = self.as_cards();
        let len = cards.len();
        let resolved = if index < 0 {
            index.checked_add(len as isize)
        } else {
            Some(index)
        };
        resolved
            .and_then(|i| usize::try_from(i).ok())
            .and_then(|i| cards.get(i))
            .ok_or(SequenceError::IndexOutOfRange { index, len })
    }

    /// Returns the cards selected by `slice` as a new sequence.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::ZeroStep`] if the slice step is zero.
    /// Out-of-range bounds are clamped and never fail.
    fn slice(&self, slice: impl Into<Slice>) -> Result<Cards, SequenceError> {
        let cards = self.as_cards();
        let positions = slice.into().indices(cards.len())?;
        Ok(positions.into_iter().map(|i| cards[i]).collect())
    }

    /// Iterates over the cards in order. Each call starts a fresh traversal.
    fn iter(&self) -> Iter<'_, Card> {
        self.as_cards().iter()
    }

    /// Iterates over the cards from last to first.
    fn iter_rev(&self) -> Rev<Iter<'_, Card>> {
        self.as_cards().iter().rev()
    }

    /// Returns whether `card` appears in the sequence, by linear scan.
    fn contains(&self, card: &Card) -> bool {
        self.iter().any(|c| c == card)
    }

    /// Picks one card uniformly at random.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptyCollection`] if the sequence is empty.
    fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Card, SequenceError> {
        self.as_cards()
            .choose(rng)
            .copied()
            .ok_or(SequenceError::EmptyCollection)
    }

    /// Returns the cards ordered by ascending `key`. The sort is stable.
    fn sorted_by_key<K, F>(&self, key: F) -> Cards
    where
        K: Ord,
        F: FnMut(&Card) -> K,
    {
        let mut cards = self.as_cards().to_vec();
        cards.sort_by_key(key);
        Cards(cards)
    }

    /// Returns the cards in a random order.
    fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Cards {
        let mut cards = self.as_cards().to_vec();
        cards.shuffle(rng);
        Cards(cards)
    }
}

/// An owned, ordered run of cards produced by slicing, sorting or shuffling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Cards(Vec<Card>);

impl Cards {
    /// Wraps a list of cards.
    #[must_use]
    pub const fn new(cards: Vec<Card>) -> Self {
        Self(cards)
    }

    /// Returns the underlying list.
    #[must_use]
    pub fn into_vec(self) -> Vec<Card> {
        self.0
    }

    /// Returns the first card, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Card> {
        self.0.first()
    }

    /// Returns the last card, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Card> {
        self.0.last()
    }
}

impl Sequence for Cards {
    fn as_cards(&self) -> &[Card] {
        &self.0
    }
}

impl Index<usize> for Cards {
    type Output = Card;

    fn index(&self, index: usize) -> &Card {
        &self.0[index]
    }
}

impl From<Vec<Card>> for Cards {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}

impl FromIterator<Card> for Cards {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Cards {
    type Item = Card;
    type IntoIter = alloc::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Cards {
    type Item = &'a Card;
    type IntoIter = Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl PartialEq<[Card]> for Cards {
    fn eq(&self, other: &[Card]) -> bool {
        self.0 == other
    }
}
