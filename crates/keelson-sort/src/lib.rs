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

//! # Keelson Sort
//!
//! In-place ascending comparison sorts over `&mut [T]`, one file per
//! algorithm family. All sorts take `T: Ord`; merge sort additionally
//! needs `T: Clone` for its scratch buffer.
//!
//! | Algorithm                | Time (worst)  | Space      | Stable |
//! |--------------------------|---------------|------------|--------|
//! | `selection_sort`         | `O(n²)`       | `O(1)`     | no     |
//! | `double_selection_sort`  | `O(n²)`       | `O(1)`     | no     |
//! | `bubble_sort`            | `O(n²)`       | `O(1)`     | yes    |
//! | `shaker_sort`            | `O(n²)`       | `O(1)`     | yes    |
//! | `insertion_sort`         | `O(n²)`       | `O(1)`     | yes    |
//! | `binary_insertion_sort`  | `O(n²)`¹      | `O(1)`     | yes    |
//! | `quick_sort`             | `O(n²)`²      | `O(log n)` | no     |
//! | `merge_sort`             | `O(n log n)`  | `O(n)`     | yes    |
//! | `heap_sort`              | `O(n log n)`  | `O(1)`     | no     |
//!
//! ¹ `O(n log n)` comparisons; the element shifts stay quadratic.
//! ² `O(n log n)` expected with the middle-element pivot.
//!
//! ## Modules
//!
//! - `selection`: selection sort and its bidirectional variant.
//! - `exchange`: bubble sort and cocktail-shaker sort.
//! - `insertion`: linear and binary-probe insertion sort.
//! - `quick`: in-place quick sort with a middle-element pivot.
//! - `merge`: top-down merge sort with a single scratch allocation.
//! - `heap`: heap sort with an iterative sift-down.
//!
//! The sortedness predicate the tests lean on is re-exported from
//! `keelson-core` as [`is_sorted`].

pub mod exchange;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;

pub use keelson_core::order::is_sorted;

#[cfg(test)]
mod tests {
    use super::*;

    /// Every sort in the crate, for oracle-style sweeps.
    const ALGORITHMS: &[(&str, fn(&mut [i32]))] = &[
        ("selection", selection::selection_sort::<i32>),
        ("double_selection", selection::double_selection_sort::<i32>),
        ("bubble", exchange::bubble_sort::<i32>),
        ("shaker", exchange::shaker_sort::<i32>),
        ("insertion", insertion::insertion_sort::<i32>),
        ("binary_insertion", insertion::binary_insertion_sort::<i32>),
        ("quick", quick::quick_sort::<i32>),
        ("merge", merge::merge_sort::<i32>),
        ("heap", heap::heap_sort::<i32>),
    ];

    /// A record ordered by key alone, for stability checks.
    #[derive(Clone, Debug)]
    struct Record {
        key: u32,
        tag: usize,
    }

    impl PartialEq for Record {
        fn eq(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }

    impl Eq for Record {}

    impl PartialOrd for Record {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Record {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.key.cmp(&other.key)
        }
    }

    const STABLE_ALGORITHMS: &[(&str, fn(&mut [Record]))] = &[
        ("bubble", exchange::bubble_sort::<Record>),
        ("shaker", exchange::shaker_sort::<Record>),
        ("insertion", insertion::insertion_sort::<Record>),
        (
            "binary_insertion",
            insertion::binary_insertion_sort::<Record>,
        ),
        ("merge", merge::merge_sort::<Record>),
    ];

    fn fixtures() -> Vec<Vec<i32>> {
        vec![
            vec![],
            vec![1],
            vec![2, 1],
            vec![1, 2, 3, 4, 5],
            vec![5, 4, 3, 2, 1],
            vec![3, 3, 3, 3],
            vec![7, -2, 0, 7, -2, 100, 1],
            (0..97).rev().collect(),
        ]
    }

    #[test]
    fn test_all_algorithms_agree_with_std_sort() {
        for (name, sort) in ALGORITHMS {
            for fixture in fixtures() {
                let mut expected = fixture.clone();
                expected.sort();
                let mut actual = fixture;
                sort(&mut actual);
                assert_eq!(actual, expected, "{} sort diverged", name);
            }
        }
    }

    #[test]
    fn test_all_algorithms_on_random_input() {
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        for (name, sort) in ALGORITHMS {
            let mut rng = ChaCha8Rng::seed_from_u64(2024);
            for len in [10usize, 100, 500] {
                let data: Vec<i32> = (0..len).map(|_| rng.random_range(-1000..1000)).collect();
                let mut expected = data.clone();
                expected.sort();
                let mut actual = data;
                sort(&mut actual);
                assert_eq!(actual, expected, "{} sort diverged on len {}", name, len);
            }
        }
    }

    #[test]
    fn test_stable_algorithms_preserve_equal_key_order() {
        for (name, sort) in STABLE_ALGORITHMS {
            let mut records: Vec<Record> = [3u32, 1, 3, 2, 1, 3, 2, 1]
                .iter()
                .enumerate()
                .map(|(tag, &key)| Record { key, tag })
                .collect();
            sort(&mut records);
            assert!(is_sorted(&records), "{} sort left keys unsorted", name);
            for pair in records.windows(2) {
                if pair[0].key == pair[1].key {
                    assert!(
                        pair[0].tag < pair[1].tag,
                        "{} sort reordered equal keys",
                        name
                    );
                }
            }
        }
    }
}
