//! Pure sequence utilities.
//!
//! Splitting helpers and a duplicate-free shuffle. None of these carry
//! engine state; the genetic engine uses [`halve`] to split mating pools
//! and genomes, and [`dedup_shuffle`] to randomize the ranking pool before
//! each stochastic selection draw.
//!
//! Elements only need [`Clone`] (and [`PartialEq`] for the shuffle).
//! Ordering and hashing are never required.

use rand::seq::SliceRandom;
use rand::Rng;

/// Splits a sequence into two ordered halves.
///
/// The split point is `len / 2`, so for odd lengths the extra element
/// lands in the second half. Concatenating the two halves always yields
/// the input.
///
/// ```
/// use u_genetic::seq::halve;
///
/// let (left, right) = halve(&[1, 2, 3, 4, 5]);
/// assert_eq!(left, vec![1, 2]);
/// assert_eq!(right, vec![3, 4, 5]);
/// ```
pub fn halve<T: Clone>(items: &[T]) -> (Vec<T>, Vec<T>) {
    let (left, right) = items.split_at(items.len() / 2);
    (left.to_vec(), right.to_vec())
}

/// Splits a sequence into consecutive chunks of `size` elements.
///
/// The last chunk holds whatever is left and may be shorter.
/// A `size` of zero yields no chunks.
pub fn batched<T: Clone>(items: &[T], size: usize) -> Vec<Vec<T>> {
    if size == 0 {
        return Vec::new();
    }
    items.chunks(size).map(<[T]>::to_vec).collect()
}

/// Splits a sequence into `n` near-equal chunks.
///
/// Each chunk holds `len / n` elements; the remainder is folded into the
/// last chunk rather than forming an extra one. Returns an empty vector
/// when `n` is zero or exceeds the sequence length.
///
/// ```
/// use u_genetic::seq::slice_into;
///
/// let chunks = slice_into(&[1, 2, 3, 4, 5, 6, 7], 3);
/// assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5, 6, 7]]);
/// ```
pub fn slice_into<T: Clone>(items: &[T], n: usize) -> Vec<Vec<T>> {
    if n == 0 || n > items.len() {
        return Vec::new();
    }

    let stride = items.len() / n;
    let mut chunks: Vec<Vec<T>> = items
        .chunks(stride)
        .take(n)
        .map(<[T]>::to_vec)
        .collect();

    let folded = stride * n;
    if let Some(last) = chunks.last_mut() {
        last.extend_from_slice(&items[folded..]);
    }
    chunks
}

/// Returns the distinct elements of `items` in a random order.
///
/// Equal elements collapse to their first occurrence, so the result is a
/// permutation of the distinct values: no value appears more than once,
/// and every distinct value appears exactly once.
///
/// Runs in O(n²) because only equality is available.
pub fn dedup_shuffle<T, R>(items: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone + PartialEq,
    R: Rng + ?Sized,
{
    let mut distinct: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        if !distinct.contains(item) {
            distinct.push(item.clone());
        }
    }
    distinct.shuffle(rng);
    distinct
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;

    #[test]
    fn test_halve_even() {
        let (left, right) = halve(&[1, 2, 3, 4]);
        assert_eq!(left, vec![1, 2]);
        assert_eq!(right, vec![3, 4]);
    }

    #[test]
    fn test_halve_odd_remainder_goes_right() {
        let (left, right) = halve(&['a', 'b', 'c']);
        assert_eq!(left, vec!['a']);
        assert_eq!(right, vec!['b', 'c']);
    }

    #[test]
    fn test_halve_degenerate() {
        let (left, right) = halve::<u8>(&[]);
        assert!(left.is_empty() && right.is_empty());

        let (left, right) = halve(&[9]);
        assert!(left.is_empty());
        assert_eq!(right, vec![9]);
    }

    #[test]
    fn test_batched() {
        let chunks = batched(&[1, 2, 3, 4, 5], 2);
        assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5]]);
        assert!(batched(&[1, 2, 3], 0).is_empty());
        assert_eq!(batched(&[1, 2], 5), vec![vec![1, 2]]);
    }

    #[test]
    fn test_slice_into_exact() {
        let chunks = slice_into(&[1, 2, 3, 4, 5, 6], 3);
        assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
    }

    #[test]
    fn test_slice_into_folds_remainder() {
        let chunks = slice_into(&[1, 2, 3, 4, 5, 6, 7, 8], 3);
        assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5, 6, 7, 8]]);
    }

    #[test]
    fn test_slice_into_rejects_bad_counts() {
        assert!(slice_into(&[1, 2, 3], 0).is_empty());
        assert!(slice_into(&[1, 2, 3], 4).is_empty());
        assert_eq!(slice_into(&[1, 2, 3], 1), vec![vec![1, 2, 3]]);
    }

    #[test]
    fn test_dedup_shuffle_removes_duplicates() {
        let mut rng = create_rng(42);
        let items = [3, 1, 3, 2, 1, 3];
        for _ in 0..50 {
            let mut shuffled = dedup_shuffle(&items, &mut rng);
            assert_eq!(shuffled.len(), 3);
            shuffled.sort_unstable();
            assert_eq!(shuffled, vec![1, 2, 3]);
        }
    }

    #[test]
    fn test_dedup_shuffle_varies_order() {
        let mut rng = create_rng(42);
        let items: Vec<u32> = (0..8).collect();
        let first = dedup_shuffle(&items, &mut rng);
        let reordered = (0..20).any(|_| dedup_shuffle(&items, &mut rng) != first);
        assert!(reordered, "20 shuffles of 8 elements never changed order");
    }

    proptest! {
        #[test]
        fn prop_halve_concatenates(items in prop::collection::vec(any::<i16>(), 0..64)) {
            let (mut left, right) = halve(&items);
            prop_assert_eq!(left.len(), items.len() / 2);
            prop_assert!(right.len() - left.len() <= 1);
            left.extend(right);
            prop_assert_eq!(left, items);
        }

        #[test]
        fn prop_slice_into_preserves_elements(
            items in prop::collection::vec(any::<u8>(), 1..64),
            n in 1usize..16,
        ) {
            let chunks = slice_into(&items, n);
            if n > items.len() {
                prop_assert!(chunks.is_empty());
            } else {
                prop_assert_eq!(chunks.len(), n);
                let flat: Vec<u8> = chunks.concat();
                prop_assert_eq!(flat, items);
            }
        }

        #[test]
        fn prop_dedup_shuffle_is_distinct_permutation(
            items in prop::collection::vec(0u8..6, 0..32),
            seed in any::<u64>(),
        ) {
            let mut rng = create_rng(seed);
            let shuffled = dedup_shuffle(&items, &mut rng);
            for value in &shuffled {
                prop_assert_eq!(shuffled.iter().filter(|v| *v == value).count(), 1);
                prop_assert!(items.contains(value));
            }
            for value in &items {
                prop_assert!(shuffled.contains(value));
            }
        }
    }
}
