//! Error types for tree construction.

use thiserror::Error;

/// Reasons a [`Tree`](crate::Tree) cannot be built from a frequency map.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The frequency map has no entries, so there is nothing to root a tree at.
    #[error("empty input: no symbols to build a tree from")]
    EmptyInput,

    /// An entry carries a count that is not positive.
    #[error("invalid frequency: count must be at least 1, got {count}")]
    InvalidFrequency { count: usize },

    /// The counts add up to more than a `usize` can hold.
    #[error("weight overflow: total frequency exceeds usize::MAX")]
    WeightOverflow,
}

/// A specialized Result type for tree construction.
pub type Result<T> = std::result::Result<T, Error>;
