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

//! Binary indexed (Fenwick) tree.
//!
//! The buffer is 1-based internally: slot `i` covers the `i & -i` elements
//! ending at position `i`, so both the increment and the prefix walk move
//! by the lowest set bit. The public API stays 0-based like the rest of
//! the workspace.

use num_traits::PrimInt;
use std::ops::Range;

/// A Fenwick tree over primitive integers with point increments and
/// prefix sums, both in `O(log n)`.
///
/// # Examples
///
/// ```rust
/// use keelson_trees::fenwick::FenwickTree;
///
/// let mut tree = FenwickTree::from_slice(&[1, 2, 3, 4]);
/// assert_eq!(tree.prefix_sum(3), 6);
/// tree.add(1, 10);
/// assert_eq!(tree.sum(0..2), 13);
/// assert_eq!(tree.get(1), 12);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FenwickTree<T>
where
    T: PrimInt,
{
    tree: Vec<T>,
    len: usize,
}

impl<T> FenwickTree<T>
where
    T: PrimInt,
{
    /// Creates a tree of `len` zeroed elements.
    pub fn new(len: usize) -> Self {
        Self {
            tree: vec![T::zero(); len + 1],
            len,
        }
    }

    /// Builds a tree holding `values`.
    pub fn from_slice(values: &[T]) -> Self {
        let mut tree = Self::new(values.len());
        for (index, &value) in values.iter().enumerate() {
            tree.add(index, value);
        }
        tree
    }

    /// Returns the number of elements covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree covers no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adds `delta` to the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn add(&mut self, index: usize, delta: T) {
        assert!(
            index < self.len,
            "fenwick tree index {} out of bounds for length {}",
            index,
            self.len
        );
        let mut i = index + 1;
        while i <= self.len {
            self.tree[i] = self.tree[i] + delta;
            i += i & i.wrapping_neg();
        }
    }

    /// Overwrites the element at `index` with `value`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn set(&mut self, index: usize, value: T) {
        let delta = value - self.get(index);
        self.add(index, delta);
    }

    /// Returns the current value of the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[inline]
    pub fn get(&self, index: usize) -> T {
        assert!(
            index < self.len,
            "fenwick tree index {} out of bounds for length {}",
            index,
            self.len
        );
        self.sum(index..index + 1)
    }

    /// Returns the sum over `[0, end)`.
    ///
    /// # Panics
    ///
    /// Panics if `end > len()`.
    pub fn prefix_sum(&self, end: usize) -> T {
        assert!(
            end <= self.len,
            "fenwick tree prefix end {} out of bounds for length {}",
            end,
            self.len
        );
        let mut total = T::zero();
        let mut i = end;
        while i > 0 {
            total = total + self.tree[i];
            i -= i & i.wrapping_neg();
        }
        total
    }

    /// Returns the sum over the half-open range `range`.
    ///
    /// # Panics
    ///
    /// Panics if `range.start > range.end` or `range.end > len()`.
    pub fn sum(&self, range: Range<usize>) -> T {
        assert!(
            range.start <= range.end,
            "fenwick tree range start {} exceeds end {}",
            range.start,
            range.end
        );
        self.prefix_sum(range.end) - self.prefix_sum(range.start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_empty_tree() {
        let tree: FenwickTree<i32> = FenwickTree::new(0);
        assert!(tree.is_empty());
        assert_eq!(tree.prefix_sum(0), 0);
    }

    #[test]
    fn test_prefix_sums_after_build() {
        let values = [5i64, -2, 7, 0, 3];
        let tree = FenwickTree::from_slice(&values);
        let mut running = 0;
        for (index, &value) in values.iter().enumerate() {
            assert_eq!(tree.prefix_sum(index), running);
            running += value;
        }
        assert_eq!(tree.prefix_sum(values.len()), running);
    }

    #[test]
    fn test_add_accumulates() {
        let mut tree: FenwickTree<i32> = FenwickTree::new(4);
        tree.add(2, 5);
        tree.add(2, 3);
        assert_eq!(tree.get(2), 8);
        assert_eq!(tree.sum(0..4), 8);
    }

    #[test]
    fn test_set_overwrites() {
        let mut tree = FenwickTree::from_slice(&[1, 2, 3]);
        tree.set(1, -4);
        assert_eq!(tree.get(1), -4);
        assert_eq!(tree.sum(0..3), 0);
    }

    #[test]
    fn test_range_sums_match_naive() {
        let values = [4i64, 8, 15, 16, 23, 42];
        let tree = FenwickTree::from_slice(&values);
        for start in 0..values.len() {
            for end in start..=values.len() {
                let expected: i64 = values[start..end].iter().sum();
                assert_eq!(tree.sum(start..end), expected);
            }
        }
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_add_past_end_panics() {
        let mut tree: FenwickTree<i32> = FenwickTree::new(3);
        tree.add(3, 1);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_prefix_past_end_panics() {
        let tree: FenwickTree<i32> = FenwickTree::new(3);
        let _ = tree.prefix_sum(4);
    }

    #[test]
    fn test_randomized_against_naive() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut values = [0i64; 48];
        let mut tree: FenwickTree<i64> = FenwickTree::new(values.len());
        for _ in 0..500 {
            match rng.random_range(0..3) {
                0 => {
                    let index = rng.random_range(0..values.len());
                    let delta = rng.random_range(-50..50);
                    tree.add(index, delta);
                    values[index] += delta;
                }
                1 => {
                    let index = rng.random_range(0..values.len());
                    let value = rng.random_range(-50..50);
                    tree.set(index, value);
                    values[index] = value;
                }
                _ => {
                    let start = rng.random_range(0..=values.len());
                    let end = rng.random_range(start..=values.len());
                    let expected: i64 = values[start..end].iter().sum();
                    assert_eq!(tree.sum(start..end), expected);
                }
            }
        }
    }
}
