//! Longest strictly increasing subsequence, on top of the patience pass in
//! [`longest_nondecreasing_subsequence`](super::longest_nondecreasing_subsequence).

use super::longest_nondecreasing_subsequence::{
    partition_unsorted_with, Patience, Strictness, SubsequenceConfig,
};

/// Returns the length of the Longest Increasing Subsequence (LIS) in `numbers`.
///
/// # Examples
///
/// ```
/// use lnds::dynamic::longest_increasing_subsequence::longest_increasing_subsequence_length;
///
/// let arr = vec![10, 9, 2, 5, 3, 7, 101, 18];
/// assert_eq!(longest_increasing_subsequence_length(&arr), 4);
/// // One possible LIS is [2, 5, 7, 101]
/// ```
pub fn longest_increasing_subsequence_length<T: Ord>(numbers: &[T]) -> usize {
    Patience::build_by(numbers, T::cmp, Strictness::Increasing).len()
}

/// Returns one actual Longest Increasing Subsequence (LIS) in `numbers`.
///
/// Equal elements never both appear in the result. If there are multiple LIS
/// with the same length, this returns just one of them.
///
/// # Examples
///
/// ```
/// use lnds::dynamic::longest_increasing_subsequence::longest_increasing_subsequence;
///
/// let arr = vec![10, 9, 2, 5, 3, 7, 101, 18];
/// let lis = longest_increasing_subsequence(&arr);
/// assert_eq!(lis.len(), 4);
/// ```
pub fn longest_increasing_subsequence<T: Ord + Clone>(numbers: &[T]) -> Vec<T> {
    let config = SubsequenceConfig {
        strictness: Strictness::Increasing,
        ..Default::default()
    };
    partition_unsorted_with(numbers, T::cmp, &config).kept
}
