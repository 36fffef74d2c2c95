use lnds::{partition_indices_by, partition_unsorted, partition_unsorted_with, SubsequenceConfig};
use proptest::prelude::*;

fn brute_force_length(input: &[u8]) -> usize {
    // Every subset, for inputs small enough to enumerate.
    (0_u32..1_u32 << input.len())
        .filter(|mask| {
            let picked: Vec<u8> = (0..input.len())
                .filter(|&i| *mask & (1_u32 << i) != 0)
                .map(|i| input[i])
                .collect();
            picked.windows(2).all(|w| w[0] <= w[1])
        })
        .map(|mask| mask.count_ones() as usize)
        .max()
        .unwrap_or(0)
}

proptest! {
    #[test]
    fn partition_is_complete(input in prop::collection::vec(any::<i16>(), 0..200)) {
        let parts = partition_unsorted(&input);
        prop_assert_eq!(parts.kept.len() + parts.removed.len(), input.len());

        let mut merged: Vec<i16> = parts.kept.iter().chain(&parts.removed).copied().collect();
        let mut expected = input.clone();
        merged.sort();
        expected.sort();
        prop_assert_eq!(merged, expected);
    }

    #[test]
    fn both_sides_are_subsequences(input in prop::collection::vec(0_u8..16, 0..200)) {
        let idx = partition_indices_by(&input, u8::cmp);
        prop_assert!(idx.kept.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(idx.removed.windows(2).all(|w| w[0] < w[1]));

        let parts = idx.gather(&input);
        prop_assert_eq!(parts, partition_unsorted(&input));
    }

    #[test]
    fn kept_is_non_decreasing(input in prop::collection::vec(0_u8..8, 0..200)) {
        let parts = partition_unsorted(&input);
        prop_assert!(parts.kept.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn kept_is_maximal(input in prop::collection::vec(0_u8..6, 0..12)) {
        prop_assert_eq!(partition_unsorted(&input).kept.len(), brute_force_length(&input));
    }

    #[test]
    fn sorted_input_is_kept_whole(mut input in prop::collection::vec(any::<i32>(), 0..200)) {
        input.sort();
        let parts = partition_unsorted(&input);
        prop_assert_eq!(&parts.kept, &input);
        prop_assert!(parts.removed.is_empty());
    }

    #[test]
    fn strictly_decreasing_keeps_one(len in 1_usize..200) {
        let input: Vec<usize> = (0..len).rev().collect();
        let parts = partition_unsorted(&input);
        prop_assert_eq!(parts.kept.len(), 1);
        prop_assert_eq!(parts.removed.len(), len - 1);
    }

    #[test]
    fn short_circuit_is_transparent(input in prop::collection::vec(0_u8..4, 0..64)) {
        let general = SubsequenceConfig { short_circuit_sorted: false, ..Default::default() };
        prop_assert_eq!(
            partition_unsorted_with(&input, u8::cmp, &general),
            partition_unsorted(&input)
        );
    }
}
