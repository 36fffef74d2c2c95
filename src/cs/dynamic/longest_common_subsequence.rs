/// Returns the length of the longest common subsequence (LCS) between `a` and `b`.
///
/// Keeps only two rows of the DP table, so memory is O(`b.len()`).
///
/// # Examples
///
/// ```
/// use lnds::dynamic::longest_common_subsequence::lcs_length;
///
/// assert_eq!(lcs_length(b"ABCDGH", b"AEDFHR"), 3); // "ADH" is one possible LCS
/// ```
pub fn lcs_length<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let mut above = vec![0_usize; b.len() + 1];
    let mut row = vec![0_usize; b.len() + 1];

    for x in a {
        for (j, y) in b.iter().enumerate() {
            row[j + 1] = if x == y {
                above[j] + 1
            } else {
                above[j + 1].max(row[j])
            };
        }
        std::mem::swap(&mut above, &mut row);
    }

    above[b.len()]
}

/// Reconstructs and returns one actual LCS (Longest Common Subsequence)
/// between `a` and `b`.
///
/// If there are multiple subsequences with the same length, this returns
/// just one of them.
///
/// # Examples
///
/// ```
/// use lnds::dynamic::longest_common_subsequence::lcs_sequence;
///
/// let lcs = lcs_sequence(&[1, 5, 2, 4, 3], &[1, 2, 3, 4, 5]);
/// assert_eq!(lcs.len(), 3);
/// ```
pub fn lcs_sequence<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let m = a.len();
    let n = b.len();

    let mut dp = vec![vec![0_usize; n + 1]; m + 1];
    for i in 1..=m {
        for j in 1..=n {
            dp[i][j] = if a[i - 1] == b[j - 1] {
                dp[i - 1][j - 1] + 1
            } else {
                dp[i - 1][j].max(dp[i][j - 1])
            };
        }
    }

    let (mut i, mut j) = (m, n);
    let mut subsequence = Vec::with_capacity(dp[m][n]);
    while i > 0 && j > 0 {
        if a[i - 1] == b[j - 1] {
            subsequence.push(a[i - 1].clone());
            i -= 1;
            j -= 1;
        } else if dp[i - 1][j] > dp[i][j - 1] {
            i -= 1;
        } else {
            j -= 1;
        }
    }

    subsequence.reverse();
    subsequence
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lcs_length() {
        assert_eq!(lcs_length(b"", b""), 0);
        assert_eq!(lcs_length(b"ABC", b""), 0);
        assert_eq!(lcs_length(b"", b"ABC"), 0);

        assert_eq!(lcs_length(b"ABCBDAB", b"BDCABA"), 4);
        assert_eq!(lcs_length(b"XMJYAUZ", b"MZJAWXU"), 4);
        assert_eq!(lcs_length(b"BANANA", b"ATANA"), 4);
    }

    #[test]
    fn test_lcs_sequence() {
        assert!(lcs_sequence(b"", b"").is_empty());
        assert!(lcs_sequence(b"ABC", b"").is_empty());

        let seq1 = lcs_sequence(b"ABCBDAB", b"BDCABA");
        assert_eq!(seq1.len(), 4);

        let seq2 = lcs_sequence(b"XMJYAUZ", b"MZJAWXU");
        assert_eq!(seq2.len(), 4);
        assert!(is_subsequence(&seq2, b"XMJYAUZ"));
        assert!(is_subsequence(&seq2, b"MZJAWXU"));
    }

    #[test]
    fn test_lcs_against_sorted_copy() {
        let input = [2, 1, 3, 4, 3, 6, 3, 5, 8, 3, 7];
        let mut sorted = input.to_vec();
        sorted.sort();
        assert_eq!(lcs_length(&input, &sorted), 6);
    }

    fn is_subsequence<T: PartialEq>(subseq: &[T], s: &[T]) -> bool {
        let mut it = s.iter();
        subseq.iter().all(|c| it.any(|x| x == c))
    }
}
