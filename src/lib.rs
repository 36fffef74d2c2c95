pub mod cs;
pub mod error;

pub use cs::{dynamic, search};
pub use cs::dynamic::longest_nondecreasing_subsequence::{
    longest_nondecreasing_subsequence, longest_nondecreasing_subsequence_length,
    partition_indices_by, partition_unsorted, partition_unsorted_by, partition_unsorted_by_key,
    partition_unsorted_with, IndexPartition, Partition, Patience, Strictness, SubsequenceConfig,
};
pub use error::{Error, Result, Side};
