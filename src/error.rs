//! Error types for checking partitions produced outside this crate.
//!
//! The subsequence algorithms themselves cannot fail; these errors only come
//! out of [`IndexPartition::validate_by`](crate::IndexPartition::validate_by).

use thiserror::Error;

/// Ways an index partition can disagree with the input it claims to describe.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("partition covers {kept} + {removed} positions but the input has {expected}")]
    LengthMismatch {
        expected: usize,
        kept: usize,
        removed: usize,
    },

    #[error("position {index} is out of bounds for an input of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("positions are not strictly ascending at entry {at} of the {side} side")]
    NotAscending { side: Side, at: usize },

    #[error("position {index} appears on both sides of the partition")]
    Overlap { index: usize },

    #[error("kept elements at positions {before} and {after} are out of order")]
    OutOfOrder { before: usize, after: usize },
}

/// Which half of a partition an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Kept,
    Removed,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Kept => f.write_str("kept"),
            Side::Removed => f.write_str("removed"),
        }
    }
}

/// Result type for partition validation
pub type Result<T> = std::result::Result<T, Error>;
