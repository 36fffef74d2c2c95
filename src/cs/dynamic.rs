#[cfg(feature = "parallel")]
pub mod batch;
pub mod longest_common_subsequence;
pub mod longest_increasing_subsequence;
pub mod longest_nondecreasing_subsequence;

// Re-export subsequence algorithms with descriptive names
#[cfg(feature = "parallel")]
pub use batch::par_partition_unsorted_by;
pub use longest_common_subsequence::{lcs_length, lcs_sequence};
pub use longest_increasing_subsequence::{
    longest_increasing_subsequence, longest_increasing_subsequence_length,
};
pub use longest_nondecreasing_subsequence::{
    longest_nondecreasing_subsequence, longest_nondecreasing_subsequence_length,
    partition_indices_by, partition_unsorted, partition_unsorted_by, partition_unsorted_by_key,
    partition_unsorted_with, IndexPartition, Partition, Patience, Strictness, SubsequenceConfig,
};
