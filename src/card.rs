//! Card types for the 52-card French deck.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// Card rank, ordered from lowest (`Two`) to highest (`Ace`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// 2.
    Two,
    /// 3.
    Three,
    /// 4.
    Four,
    /// 5.
    Five,
    /// 6.
    Six,
    /// 7.
    Seven,
    /// 8.
    Eight,
    /// 9.
    Nine,
    /// 10.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// Every rank in deck order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Position of this rank in [`Rank::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The printed name of the rank: `"2"` through `"10"`, then `"J"`, `"Q"`, `"K"`, `"A"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|rank| rank.as_str() == s)
            .ok_or(ParseCardError::UnknownRank)
    }
}

/// Card suit, declared in deck construction order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Hearts.
    Hearts,
}

impl Suit {
    /// Every suit in deck order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Diamonds, Self::Clubs, Self::Hearts];

    /// Lowercase name of the suit.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Spades => "spades",
            Self::Diamonds => "diamonds",
            Self::Clubs => "clubs",
            Self::Hearts => "hearts",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Suit {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|suit| suit.as_str() == s)
            .ok_or(ParseCardError::UnknownSuit)
    }
}

/// A playing card.
///
/// Equality and ordering are structural: rank first, then suit. Use
/// [`spades_high`](crate::spades_high) for the usual game ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Builds a card from its printed rank and suit names.
    ///
    /// # Example
    ///
    /// ```
    /// use datamodel::{Card, Rank, Suit};
    ///
    /// let beer_card = Card::parse("7", "diamonds").unwrap();
    /// assert_eq!(beer_card, Card::new(Rank::Seven, Suit::Diamonds));
    /// assert!(Card::parse("Z", "hearts").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if either name is not part of the deck.
    pub fn parse(rank: &str, suit: &str) -> Result<Self, ParseCardError> {
        Ok(Self::new(rank.parse()?, suit.parse()?))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card(rank='{}', suit='{}')", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses the [`Display`](fmt::Display) form back into a card.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s
            .strip_prefix("Card(rank='")
            .and_then(|rest| rest.strip_suffix("')"))
            .ok_or(ParseCardError::Malformed)?;
        let (rank, suit) = body
            .split_once("', suit='")
            .ok_or(ParseCardError::Malformed)?;
        Self::parse(rank, suit)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = Rank::ALL.len() * Suit::ALL.len();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_names_round_trip() {
        for rank in Rank::ALL {
            assert_eq!(rank.as_str().parse::<Rank>(), Ok(rank));
        }
        assert_eq!("1".parse::<Rank>(), Err(ParseCardError::UnknownRank));
        assert_eq!("Spades".parse::<Suit>(), Err(ParseCardError::UnknownSuit));
    }

    #[test]
    fn card_display_parses_back() {
        let card = Card::new(Rank::Ten, Suit::Clubs);
        let text = alloc::format!("{card}");
        assert_eq!(text, "Card(rank='10', suit='clubs')");
        assert_eq!(text.parse::<Card>(), Ok(card));
        assert_eq!("Card(10, clubs)".parse::<Card>(), Err(ParseCardError::Malformed));
    }
}
