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

//! Insertion sorts.
//!
//! Both variants grow a sorted prefix one element at a time. The binary
//! variant replaces the linear comparison walk with an upper-bound binary
//! search; the element shifts remain, so only the comparison count drops.

/// Sorts `data` ascending by sinking each element into the sorted prefix
/// before it.
///
/// `O(n²)` worst case, `O(n)` on nearly sorted input, in place, stable.
///
/// # Examples
///
/// ```rust
/// use keelson_sort::insertion::insertion_sort;
///
/// let mut data = [3, 1, 4, 1, 5];
/// insertion_sort(&mut data);
/// assert_eq!(data, [1, 1, 3, 4, 5]);
/// ```
pub fn insertion_sort<T: Ord>(data: &mut [T]) {
    for i in 1..data.len() {
        let mut j = i;
        while j > 0 && data[j] < data[j - 1] {
            data.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Sorts `data` ascending like [`insertion_sort`], but finds each
/// insertion point with an upper-bound binary search and rotates the
/// element into place.
///
/// `O(n log n)` comparisons, `O(n²)` element moves, in place, stable
/// (the upper-bound probe places equal elements after their twins).
///
/// # Examples
///
/// ```rust
/// use keelson_sort::insertion::binary_insertion_sort;
///
/// let mut data = [9, 7, 8, 1];
/// binary_insertion_sort(&mut data);
/// assert_eq!(data, [1, 7, 8, 9]);
/// ```
pub fn binary_insertion_sort<T: Ord>(data: &mut [T]) {
    for i in 1..data.len() {
        let position = upper_bound(&data[..i], &data[i]);
        data[position..=i].rotate_right(1);
    }
}

/// Returns the first index in the sorted slice at which `value` could be
/// inserted while keeping equal elements before it.
fn upper_bound<T: Ord>(sorted: &[T], value: &T) -> usize {
    let mut low = 0;
    let mut high = sorted.len();
    while low < high {
        let mid = low + (high - low) / 2;
        if sorted[mid] <= *value {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    low
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_sort_basic() {
        let mut data = [5, 2, 4, 6, 1, 3];
        insertion_sort(&mut data);
        assert_eq!(data, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_insertion_sort_nearly_sorted() {
        let mut data = [1, 2, 4, 3, 5];
        insertion_sort(&mut data);
        assert_eq!(data, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_binary_insertion_sort_basic() {
        let mut data = [8, 3, 5, 1, 9, 2];
        binary_insertion_sort(&mut data);
        assert_eq!(data, [1, 2, 3, 5, 8, 9]);
    }

    #[test]
    fn test_binary_insertion_sort_duplicates() {
        let mut data = [4, 2, 4, 2, 4, 2];
        binary_insertion_sort(&mut data);
        assert_eq!(data, [2, 2, 2, 4, 4, 4]);
    }

    #[test]
    fn test_upper_bound_positions() {
        let sorted = [1, 3, 3, 5];
        assert_eq!(upper_bound(&sorted, &0), 0);
        assert_eq!(upper_bound(&sorted, &1), 1);
        assert_eq!(upper_bound(&sorted, &3), 3);
        assert_eq!(upper_bound(&sorted, &4), 3);
        assert_eq!(upper_bound(&sorted, &6), 4);
    }

    #[test]
    fn test_empty_and_single() {
        let mut empty: [i32; 0] = [];
        insertion_sort(&mut empty);
        binary_insertion_sort(&mut empty);
        let mut single = [1];
        binary_insertion_sort(&mut single);
        assert_eq!(single, [1]);
    }
}
