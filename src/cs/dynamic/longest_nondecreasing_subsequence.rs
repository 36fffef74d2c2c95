//! Longest non-decreasing subsequence (LNDS).
//!
//! Given a sequence, find which elements have to be taken out so that the
//! rest is already sorted. The elements that stay form a longest
//! non-decreasing subsequence; the ones that go are everything else. Both
//! halves keep the relative order they had in the input.
//!
//! The builder is the patience / Schensted insertion pass described by
//! Fredman and by Knuth (TAOCP vol. 3, 5.1.4, Algorithm I), extended to chain
//! equal elements together and to remember one predecessor per position so a
//! concrete subsequence can be read back out. It costs O(n log n) comparisons
//! in the worst case and Θ(n) on input that is already sorted.
//!
//! # Comparator contract
//!
//! Every function here takes its ordering from the caller. The comparator
//! **must** be a total order: consistent between calls, transitive, and
//! returning `Equal` for an element compared with itself. This is not checked.
//! A comparator that breaks the contract never causes a panic, but the
//! returned partition is then unspecified.

use std::cmp::Ordering;

use crate::cs::search::{bisect_left_by, bisect_right_by};
use crate::error::{Error, Result, Side};

/// Whether equal elements may sit next to each other in the subsequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// Each element compares not-less-than the one before it.
    #[default]
    NonDecreasing,
    /// Each element compares strictly greater than the one before it.
    Increasing,
}

impl Strictness {
    /// `order` is `cmp(next, prev)`.
    fn admits(self, order: Ordering) -> bool {
        match self {
            Strictness::NonDecreasing => order != Ordering::Less,
            Strictness::Increasing => order == Ordering::Greater,
        }
    }
}

/// Options for [`partition_unsorted_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubsequenceConfig {
    /// Which kind of subsequence to look for.
    pub strictness: Strictness,
    /// Copy the input straight through when all of it is kept, skipping the
    /// backward walk. The result is the same either way.
    pub short_circuit_sorted: bool,
}

impl Default for SubsequenceConfig {
    fn default() -> Self {
        Self {
            strictness: Strictness::NonDecreasing,
            short_circuit_sorted: true,
        }
    }
}

/// State left behind by one patience pass over an input.
///
/// `tails[k]` is the input position ending the best (smallest-ending)
/// subsequence of length `k + 1` found so far. `prev[i]` is the position
/// before `i` in the subsequence `i` was placed into, or `None` when `i`
/// starts it. Each `prev[i]` is written at most once, when position `i` is
/// visited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patience {
    tails: Vec<usize>,
    prev: Vec<Option<usize>>,
}

impl Patience {
    /// Runs the builder pass over `input`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lnds::{Patience, Strictness};
    ///
    /// let input = [3, 1, 2, 2, 0];
    /// let patience = Patience::build_by(&input, i32::cmp, Strictness::NonDecreasing);
    /// assert_eq!(patience.len(), 3);
    /// assert_eq!(patience.chain().collect::<Vec<_>>(), vec![3, 2, 1]);
    /// ```
    pub fn build_by<T, F>(input: &[T], mut cmp: F, strictness: Strictness) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut tails: Vec<usize> = Vec::with_capacity(input.len());
        let mut prev = vec![None; input.len()];

        for (i, elt) in input.iter().enumerate() {
            if i == 0 {
                tails.push(0);
                continue;
            }

            // Fast path: extends the longest subsequence known so far.
            let best = tails[tails.len() - 1];
            if strictness.admits(cmp(elt, &input[best])) {
                prev[i] = Some(best);
                tails.push(i);
                continue;
            }

            // Otherwise it can only improve a shorter length. The final tail
            // is already known to be too large.
            let slot = match strictness {
                Strictness::NonDecreasing => {
                    // Skip past any run of equal tails so ties extend each other.
                    bisect_right_by(&tails[..tails.len() - 1], |&t| cmp(&input[t], elt))
                }
                Strictness::Increasing => {
                    let slot = bisect_left_by(&tails, |&t| cmp(&input[t], elt));
                    if slot == tails.len() || cmp(&input[tails[slot]], elt) == Ordering::Equal {
                        log::trace!("position {i} is not an improvement on any tail, dropped");
                        continue;
                    }
                    slot
                }
            };

            prev[i] = slot.checked_sub(1).map(|p| tails[p]);
            tails[slot] = i;
        }

        log::debug!(
            "patience pass over {} elements: longest {:?} subsequence has {} elements",
            input.len(),
            strictness,
            tails.len()
        );

        Self { tails, prev }
    }

    /// Length of the longest subsequence found.
    pub fn len(&self) -> usize {
        self.tails.len()
    }

    /// True only for an empty input.
    pub fn is_empty(&self) -> bool {
        self.tails.is_empty()
    }

    /// Length of the input the pass ran over.
    pub fn input_len(&self) -> usize {
        self.prev.len()
    }

    /// Position of the last element of the longest subsequence.
    pub fn terminus(&self) -> Option<usize> {
        self.tails.last().copied()
    }

    /// Positions of the longest subsequence, walked from last to first.
    pub fn chain(&self) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(self.terminus(), move |&i| self.prev[i])
    }

    /// Splits every input position into kept (on the chain) and removed.
    ///
    /// Walks the input and the chain backward together, filling both
    /// pre-sized buffers from the back, so each side comes out ascending.
    pub fn split(&self) -> IndexPartition {
        let n = self.input_len();
        let mut kept = vec![0; self.len()];
        let mut removed = vec![0; n - self.len()];
        let (mut kept_at, mut removed_at) = (kept.len(), removed.len());

        let mut on_chain = self.terminus();
        for pos in (0..n).rev() {
            if on_chain == Some(pos) {
                kept_at -= 1;
                kept[kept_at] = pos;
                on_chain = self.prev[pos];
            } else {
                // The chain has jumped further back; `pos` is off it.
                removed_at -= 1;
                removed[removed_at] = pos;
            }
        }
        debug_assert_eq!((kept_at, removed_at), (0, 0));

        IndexPartition { kept, removed }
    }
}

/// A partition of input positions into a longest subsequence and the rest.
///
/// Both vectors are ascending and together hold every position exactly once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexPartition {
    pub kept: Vec<usize>,
    pub removed: Vec<usize>,
}

impl IndexPartition {
    /// Clones the referenced elements of `input` into a [`Partition`].
    pub fn gather<T: Clone>(&self, input: &[T]) -> Partition<T> {
        Partition {
            kept: self.kept.iter().map(|&i| input[i].clone()).collect(),
            removed: self.removed.iter().map(|&i| input[i].clone()).collect(),
        }
    }

    /// Checks that `self` is a well-formed partition of `input` whose kept
    /// side is ordered under `cmp` and `strictness`.
    ///
    /// This runs in O(n) and does not check that the kept side is as long as
    /// possible, nor that `cmp` is a total order.
    ///
    /// # Examples
    ///
    /// ```
    /// use lnds::{Error, IndexPartition, Strictness};
    ///
    /// let input = [4, 1, 2];
    /// let bogus = IndexPartition { kept: vec![0, 1], removed: vec![2] };
    /// assert_eq!(
    ///     bogus.validate_by(&input, i32::cmp, Strictness::NonDecreasing),
    ///     Err(Error::OutOfOrder { before: 0, after: 1 })
    /// );
    /// ```
    pub fn validate_by<T, F>(
        &self,
        input: &[T],
        mut cmp: F,
        strictness: Strictness,
    ) -> Result<()>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let len = input.len();
        if self.kept.len() + self.removed.len() != len {
            return Err(Error::LengthMismatch {
                expected: len,
                kept: self.kept.len(),
                removed: self.removed.len(),
            });
        }

        for (side, positions) in [(Side::Kept, &self.kept), (Side::Removed, &self.removed)] {
            if let Some(at) = positions.windows(2).position(|w| w[0] >= w[1]) {
                return Err(Error::NotAscending { side, at: at + 1 });
            }
            if let Some(&index) = positions.last().filter(|&&index| index >= len) {
                return Err(Error::IndexOutOfBounds { index, len });
            }
        }

        // With the lengths adding up, a missing position implies a duplicate.
        let (mut k, mut r) = (0, 0);
        while k < self.kept.len() && r < self.removed.len() {
            match self.kept[k].cmp(&self.removed[r]) {
                Ordering::Less => k += 1,
                Ordering::Greater => r += 1,
                Ordering::Equal => return Err(Error::Overlap { index: self.kept[k] }),
            }
        }

        for w in self.kept.windows(2) {
            if !strictness.admits(cmp(&input[w[1]], &input[w[0]])) {
                return Err(Error::OutOfOrder {
                    before: w[0],
                    after: w[1],
                });
            }
        }
        Ok(())
    }
}

/// An input split into a longest subsequence and everything else, both in
/// their original relative order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition<T> {
    pub kept: Vec<T>,
    pub removed: Vec<T>,
}

impl<T> Partition<T> {
    pub fn into_parts(self) -> (Vec<T>, Vec<T>) {
        (self.kept, self.removed)
    }
}

/// Splits `input` into a longest non-decreasing subsequence and the elements
/// that would have to move for the whole sequence to be sorted.
///
/// `cmp` must be a total order (see the [module docs](self)). When several
/// longest subsequences exist, which one is returned is unspecified.
///
/// # Examples
///
/// ```
/// use lnds::partition_unsorted_by;
///
/// let input = [2, 1, 3, 4, 3, 6, 3, 5, 8, 3, 7];
/// let parts = partition_unsorted_by(&input, |a, b| a.cmp(b));
/// assert_eq!(parts.kept, vec![1, 3, 3, 3, 3, 7]);
/// assert_eq!(parts.removed, vec![2, 4, 6, 5, 8]);
/// ```
pub fn partition_unsorted_by<T, F>(input: &[T], cmp: F) -> Partition<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    partition_unsorted_with(input, cmp, &SubsequenceConfig::default())
}

/// [`partition_unsorted_by`] using the natural order of `T`.
///
/// # Examples
///
/// ```
/// use lnds::partition_unsorted;
///
/// let (kept, removed) = partition_unsorted(&[1, 2, 3, 4, 3, 2, 1]).into_parts();
/// assert_eq!(kept, vec![1, 2, 3, 3]);
/// assert_eq!(removed, vec![4, 2, 1]);
/// ```
pub fn partition_unsorted<T: Ord + Clone>(input: &[T]) -> Partition<T> {
    partition_unsorted_by(input, T::cmp)
}

/// [`partition_unsorted_by`] ordering elements by an extracted key.
pub fn partition_unsorted_by_key<T, K, F>(input: &[T], mut key: F) -> Partition<T>
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    partition_unsorted_by(input, |a, b| key(a).cmp(&key(b)))
}

/// [`partition_unsorted_by`] with explicit options.
///
/// # Examples
///
/// ```
/// use lnds::{partition_unsorted_with, Strictness, SubsequenceConfig};
///
/// let config = SubsequenceConfig {
///     strictness: Strictness::Increasing,
///     ..Default::default()
/// };
/// let parts = partition_unsorted_with(&[1, 1, 2, 2, 3], i32::cmp, &config);
/// assert_eq!(parts.kept, vec![1, 2, 3]);
/// assert_eq!(parts.removed, vec![1, 2]);
/// ```
pub fn partition_unsorted_with<T, F>(
    input: &[T],
    cmp: F,
    config: &SubsequenceConfig,
) -> Partition<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let patience = Patience::build_by(input, cmp, config.strictness);
    if config.short_circuit_sorted && patience.len() == input.len() {
        return Partition {
            kept: input.to_vec(),
            removed: Vec::new(),
        };
    }
    patience.split().gather(input)
}

/// Like [`partition_unsorted_by`], but reports input positions instead of
/// cloning elements.
///
/// # Examples
///
/// ```
/// use lnds::partition_indices_by;
///
/// let parts = partition_indices_by(&["b", "a", "c"], |a, b| a.cmp(b));
/// assert_eq!(parts.kept, vec![1, 2]);
/// assert_eq!(parts.removed, vec![0]);
/// ```
pub fn partition_indices_by<T, F>(input: &[T], cmp: F) -> IndexPartition
where
    F: FnMut(&T, &T) -> Ordering,
{
    Patience::build_by(input, cmp, Strictness::NonDecreasing).split()
}

/// Returns one longest non-decreasing subsequence of `input`.
pub fn longest_nondecreasing_subsequence<T: Ord + Clone>(input: &[T]) -> Vec<T> {
    partition_unsorted(input).kept
}

/// Returns the length of the longest non-decreasing subsequence of `input`,
/// without reconstructing it.
///
/// # Examples
///
/// ```
/// use lnds::longest_nondecreasing_subsequence_length;
///
/// assert_eq!(longest_nondecreasing_subsequence_length(&[0, 1, 0, 3, 2, 3]), 4);
/// ```
pub fn longest_nondecreasing_subsequence_length<T: Ord>(input: &[T]) -> usize {
    Patience::build_by(input, T::cmp, Strictness::NonDecreasing).len()
}
