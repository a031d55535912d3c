//! Card ranking for sorting.

use crate::card::{Card, Suit};

/// Priority of each suit when breaking ties between cards of equal rank.
///
/// The default is the spades-high order used by most trick-taking games:
/// spades 3, hearts 2, diamonds 1, clubs 0. Use the builder to customize:
///
/// ```
/// use datamodel::{Card, Rank, Suit, SuitPriority};
///
/// let hearts_high = SuitPriority::default()
///     .with_priority(Suit::Hearts, 3)
///     .with_priority(Suit::Spades, 2);
/// let ace = Card::new(Rank::Ace, Suit::Hearts);
/// assert_eq!(hearts_high.rank_of(&ace), 51);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SuitPriority {
    /// Priority of spades.
    pub spades: u32,
    /// Priority of hearts.
    pub hearts: u32,
    /// Priority of diamonds.
    pub diamonds: u32,
    /// Priority of clubs.
    pub clubs: u32,
}

impl Default for SuitPriority {
    fn default() -> Self {
        Self::SPADES_HIGH
    }
}

impl SuitPriority {
    /// Spades 3, hearts 2, diamonds 1, clubs 0.
    pub const SPADES_HIGH: Self = Self {
        spades: 3,
        hearts: 2,
        diamonds: 1,
        clubs: 0,
    };

    /// Sets the priority of one suit.
    #[must_use]
    pub const fn with_priority(mut self, suit: Suit, priority: u32) -> Self {
        match suit {
            Suit::Spades => self.spades = priority,
            Suit::Hearts => self.hearts = priority,
            Suit::Diamonds => self.diamonds = priority,
            Suit::Clubs => self.clubs = priority,
        }
        self
    }

    /// Returns the priority of `suit`.
    #[must_use]
    pub const fn priority(&self, suit: Suit) -> u32 {
        match suit {
            Suit::Spades => self.spades,
            Suit::Hearts => self.hearts,
            Suit::Diamonds => self.diamonds,
            Suit::Clubs => self.clubs,
        }
    }

    /// Numeric rank of `card`: the rank position times the number of suits,
    /// plus the suit priority. Rank dominates; suit breaks ties.
    ///
    /// The result is injective over the deck only when the four priorities
    /// are a permutation of `0..4`.
    #[must_use]
    pub const fn rank_of(&self, card: &Card) -> u64 {
        card.rank.index() as u64 * Suit::ALL.len() as u64 + self.priority(card.suit) as u64
    }
}

/// Spades-high numeric rank of a card, from 0 (`2` of clubs) to 51 (`A` of spades).
///
/// ```
/// use datamodel::{FrenchDeck, Sequence, spades_high};
///
/// let deck = FrenchDeck::default();
/// let sorted = deck.sorted_by_key(spades_high);
/// assert_eq!(sorted[0].to_string(), "Card(rank='2', suit='clubs')");
/// assert_eq!(sorted[51].to_string(), "Card(rank='A', suit='spades')");
/// ```
#[must_use]
pub const fn spades_high(card: &Card) -> u64 {
    SuitPriority::SPADES_HIGH.rank_of(card)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Rank;

    #[test]
    fn spades_high_bounds() {
        assert_eq!(spades_high(&Card::new(Rank::Two, Suit::Clubs)), 0);
        assert_eq!(spades_high(&Card::new(Rank::Two, Suit::Spades)), 3);
        assert_eq!(spades_high(&Card::new(Rank::Three, Suit::Clubs)), 4);
        assert_eq!(spades_high(&Card::new(Rank::Ace, Suit::Spades)), 51);
    }

    #[test]
    fn builder_overrides_one_suit() {
        let priority = SuitPriority::default().with_priority(Suit::Clubs, 7);
        assert_eq!(priority.priority(Suit::Clubs), 7);
        assert_eq!(priority.priority(Suit::Spades), 3);
    }

    #[test]
    fn largest_priority_does_not_overflow() {
        let priority = SuitPriority::default().with_priority(Suit::Spades, u32::MAX);
        let ace = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!(priority.rank_of(&ace), 48 + u64::from(u32::MAX));
        assert!(priority.rank_of(&ace) > priority.rank_of(&Card::new(Rank::Ace, Suit::Hearts)));
    }
}
