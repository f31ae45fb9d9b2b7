// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Iterative array-backed segment tree over sums.
//!
//! The tree lives in a single flat buffer of `2n` slots with the leaves at
//! `[n, 2n)` and each internal node `i` holding the sum of its children
//! `2i` and `2i + 1`. Both the point update and the range query walk the
//! buffer bottom-up, so there is no recursion and no pointer chasing.

use num_traits::PrimInt;
use std::ops::Range;

/// A segment tree answering half-open range sums with point updates,
/// both in `O(log n)`.
///
/// # Examples
///
/// ```rust
/// use keelson_trees::segment::SegmentTree;
///
/// let mut tree = SegmentTree::from_slice(&[1, 2, 3, 4, 5]);
/// assert_eq!(tree.sum(1..4), 9);
/// tree.update(2, 10);
/// assert_eq!(tree.sum(1..4), 16);
/// assert_eq!(tree.total(), 22);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SegmentTree<T>
where
    T: PrimInt,
{
    tree: Vec<T>,
    len: usize,
}

impl<T> SegmentTree<T>
where
    T: PrimInt,
{
    /// Builds the tree over `values` in `O(n)`.
    ///
    /// An empty slice yields an empty tree whose queries return zero.
    pub fn from_slice(values: &[T]) -> Self {
        let len = values.len();
        let mut tree = vec![T::zero(); 2 * len];
        tree[len..].copy_from_slice(values);
        for i in (1..len).rev() {
            tree[i] = tree[2 * i] + tree[2 * i + 1];
        }
        Self { tree, len }
    }

    /// Returns the number of leaves.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree covers no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current value of the leaf at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[inline]
    pub fn get(&self, index: usize) -> T {
        assert!(
            index < self.len,
            "segment tree index {} out of bounds for length {}",
            index,
            self.len
        );
        self.tree[self.len + index]
    }

    /// Overwrites the leaf at `index` with `value` and recomputes the sums
    /// on the path to the root.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn update(&mut self, index: usize, value: T) {
        assert!(
            index < self.len,
            "segment tree index {} out of bounds for length {}",
            index,
            self.len
        );
        let mut i = self.len + index;
        self.tree[i] = value;
        i /= 2;
        while i >= 1 {
            self.tree[i] = self.tree[2 * i] + self.tree[2 * i + 1];
            i /= 2;
        }
    }

    /// Returns the sum over the half-open range `range`.
    ///
    /// An empty range sums to zero.
    ///
    /// # Panics
    ///
    /// Panics if `range.start > range.end` or `range.end > len()`.
    pub fn sum(&self, range: Range<usize>) -> T {
        assert!(
            range.start <= range.end && range.end <= self.len,
            "segment tree range {}..{} out of bounds for length {}",
            range.start,
            range.end,
            self.len
        );
        let mut left = self.len + range.start;
        let mut right = self.len + range.end;
        let mut total = T::zero();
        while left < right {
            if left & 1 == 1 {
                total = total + self.tree[left];
                left += 1;
            }
            if right & 1 == 1 {
                right -= 1;
                total = total + self.tree[right];
            }
            left /= 2;
            right /= 2;
        }
        total
    }

    /// Returns the sum over all leaves.
    #[inline]
    pub fn total(&self) -> T {
        self.sum(0..self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn naive_sum(values: &[i64], range: Range<usize>) -> i64 {
        values[range].iter().sum()
    }

    #[test]
    fn test_empty_tree() {
        let tree: SegmentTree<i32> = SegmentTree::from_slice(&[]);
        assert!(tree.is_empty());
        assert_eq!(tree.sum(0..0), 0);
        assert_eq!(tree.total(), 0);
    }

    #[test]
    fn test_single_leaf() {
        let mut tree = SegmentTree::from_slice(&[5]);
        assert_eq!(tree.sum(0..1), 5);
        tree.update(0, -3);
        assert_eq!(tree.total(), -3);
    }

    #[test]
    fn test_all_prefixes_and_suffixes() {
        let values = [3i64, 1, 4, 1, 5, 9, 2, 6, 5];
        let tree = SegmentTree::from_slice(&values);
        for end in 0..=values.len() {
            assert_eq!(tree.sum(0..end), naive_sum(&values, 0..end));
            assert_eq!(
                tree.sum(end..values.len()),
                naive_sum(&values, end..values.len())
            );
        }
    }

    #[test]
    fn test_update_propagates_to_all_ranges() {
        let mut values = vec![2i64, 7, 1, 8, 2, 8];
        let mut tree = SegmentTree::from_slice(&values);
        tree.update(3, 100);
        values[3] = 100;
        for start in 0..values.len() {
            for end in start..=values.len() {
                assert_eq!(tree.sum(start..end), naive_sum(&values, start..end));
            }
        }
    }

    #[test]
    fn test_empty_range_is_zero() {
        let tree = SegmentTree::from_slice(&[1, 2, 3]);
        assert_eq!(tree.sum(2..2), 0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_range_past_end_panics() {
        let tree = SegmentTree::from_slice(&[1, 2, 3]);
        let _ = tree.sum(0..4);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_update_past_end_panics() {
        let mut tree = SegmentTree::from_slice(&[1, 2, 3]);
        tree.update(3, 0);
    }

    #[test]
    fn test_randomized_against_naive() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut values: Vec<i64> = (0..64).map(|_| rng.random_range(-100..100)).collect();
        let mut tree = SegmentTree::from_slice(&values);
        for _ in 0..500 {
            if rng.random_range(0..3) == 0 {
                let index = rng.random_range(0..values.len());
                let value = rng.random_range(-100..100);
                tree.update(index, value);
                values[index] = value;
            } else {
                let start = rng.random_range(0..=values.len());
                let end = rng.random_range(start..=values.len());
                assert_eq!(tree.sum(start..end), naive_sum(&values, start..end));
            }
        }
    }
}
