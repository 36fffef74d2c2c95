use std::cmp::Ordering;

/// Returns the first position in `sorted` whose entry does not compare `Less`
/// than the target.
///
/// `f` reports how an entry orders relative to the target, in the same way as
/// [`slice::binary_search_by`]. The slice must be sorted with respect to `f`.
/// If several entries compare `Equal`, the position of the first of them is
/// returned; if none compare `Equal` or `Greater`, `sorted.len()` is returned.
///
/// # Examples
///
/// ```
/// use lnds::search::bisect_left_by;
///
/// let v = [1, 3, 3, 3, 5];
/// assert_eq!(bisect_left_by(&v, |x| x.cmp(&3)), 1);
/// assert_eq!(bisect_left_by(&v, |x| x.cmp(&6)), 5);
/// ```
pub fn bisect_left_by<T, F>(sorted: &[T], mut f: F) -> usize
where
    F: FnMut(&T) -> Ordering,
{
    let (mut low, mut high) = (0, sorted.len());
    while low < high {
        let mid = low + (high - low) / 2;
        if f(&sorted[mid]) == Ordering::Less {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    low
}

/// Returns the first position in `sorted` whose entry compares `Greater` than
/// the target.
///
/// This is the right-leaning counterpart of [`bisect_left_by`]: when the target
/// is already present, the result lands one past the final equal entry, so a
/// whole run of equal entries is skipped.
///
/// # Examples
///
/// ```
/// use lnds::search::bisect_right_by;
///
/// let v = [1, 3, 3, 3, 5];
/// assert_eq!(bisect_right_by(&v, |x| x.cmp(&3)), 4);
/// assert_eq!(bisect_right_by(&v, |x| x.cmp(&0)), 0);
/// ```
pub fn bisect_right_by<T, F>(sorted: &[T], mut f: F) -> usize
where
    F: FnMut(&T) -> Ordering,
{
    let (mut low, mut high) = (0, sorted.len());
    while low < high {
        let mid = low + (high - low) / 2;
        if f(&sorted[mid]) == Ordering::Greater {
            high = mid;
        } else {
            low = mid + 1;
        }
    }
    low
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bisect_empty() {
        let v: [i32; 0] = [];
        assert_eq!(bisect_left_by(&v, |x| x.cmp(&1)), 0);
        assert_eq!(bisect_right_by(&v, |x| x.cmp(&1)), 0);
    }

    #[test]
    fn test_bisect_equal_run() {
        let v = [0, 2, 2, 2, 2, 7];
        assert_eq!(bisect_left_by(&v, |x| x.cmp(&2)), 1);
        assert_eq!(bisect_right_by(&v, |x| x.cmp(&2)), 5);
    }

    #[test]
    fn test_bisect_absent_target() {
        let v = [1, 4, 9];
        for (target, expected) in [(0, 0), (2, 1), (5, 2), (10, 3)] {
            assert_eq!(bisect_left_by(&v, |x| x.cmp(&target)), expected);
            assert_eq!(bisect_right_by(&v, |x| x.cmp(&target)), expected);
        }
    }

    #[test]
    fn test_bisect_matches_partition_point() {
        let v = [1, 1, 2, 3, 3, 3, 4, 8, 8, 9];
        for target in 0..11 {
            assert_eq!(
                bisect_left_by(&v, |x| x.cmp(&target)),
                v.partition_point(|&x| x < target)
            );
            assert_eq!(
                bisect_right_by(&v, |x| x.cmp(&target)),
                v.partition_point(|&x| x <= target)
            );
        }
    }
}
