//! Partitioning many independent inputs at once.

use std::cmp::Ordering;

use rayon::prelude::*;

use super::longest_nondecreasing_subsequence::{partition_unsorted_by, Partition};

/// Runs [`partition_unsorted_by`] over every input on the rayon thread pool.
///
/// Results come back in the order of `inputs`, and each one equals what the
/// sequential call would have produced.
///
/// # Examples
///
/// ```
/// use lnds::dynamic::batch::par_partition_unsorted_by;
///
/// let inputs = vec![vec![3, 1, 2], vec![1, 2, 3]];
/// let parts = par_partition_unsorted_by(&inputs, i32::cmp);
/// assert_eq!(parts[0].kept, vec![1, 2]);
/// assert!(parts[1].removed.is_empty());
/// ```
pub fn par_partition_unsorted_by<T, S, F>(inputs: &[S], cmp: F) -> Vec<Partition<T>>
where
    T: Clone + Send,
    S: AsRef<[T]> + Sync,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    log::debug!("partitioning {} inputs in parallel", inputs.len());
    inputs
        .par_iter()
        .map(|input| partition_unsorted_by(input.as_ref(), &cmp))
        .collect()
}
