//! Error types for sequence access, vector operands and card parsing.

use thiserror::Error;

/// Errors that can occur when reading from a card sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// Single-element access outside the sequence bounds.
    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange {
        /// The requested index, possibly negative.
        index: isize,
        /// Length of the sequence.
        len: usize,
    },
    /// Random selection from a sequence with no elements.
    #[error("cannot choose from an empty sequence")]
    EmptyCollection,
    /// Slice with a step of zero.
    #[error("slice step cannot be zero")]
    ZeroStep,
}

/// Errors that can occur when building or parsing a vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VectorError {
    /// Operand has the wrong number of components.
    #[error("invalid operand: expected {expected} components, found {found}")]
    InvalidOperand {
        /// Number of components required.
        expected: usize,
        /// Number of components supplied.
        found: usize,
    },
    /// Text is not of the form `Vector(x,y)`.
    #[error("malformed vector representation")]
    Parse,
}

/// Errors that can occur when parsing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Rank name is not one of `2`..`10`, `J`, `Q`, `K`, `A`.
    #[error("unknown rank")]
    UnknownRank,
    /// Suit name is not one of `spades`, `diamonds`, `clubs`, `hearts`.
    #[error("unknown suit")]
    UnknownSuit,
    /// Text is not of the form `Card(rank='7', suit='diamonds')`.
    #[error("malformed card representation")]
    Malformed,
}
