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

//! Top-down merge sort.
//!
//! Splits at the midpoint, sorts each half, then merges through a scratch
//! buffer allocated once per merge. Ties take the left element, which is
//! what makes the sort stable.

/// Sorts `data` ascending with a top-down merge sort.
///
/// `O(n log n)` in all cases, `O(n)` scratch space, stable. Requires
/// `T: Clone` to move elements through the scratch buffer.
///
/// # Examples
///
/// ```rust
/// use keelson_sort::merge::merge_sort;
///
/// let mut data = [8, 3, 5, 1];
/// merge_sort(&mut data);
/// assert_eq!(data, [1, 3, 5, 8]);
/// ```
pub fn merge_sort<T: Ord + Clone>(data: &mut [T]) {
    if data.len() < 2 {
        return;
    }
    let mid = data.len() / 2;
    merge_sort(&mut data[..mid]);
    merge_sort(&mut data[mid..]);
    merge(data, mid);
}

/// Merges the two sorted halves `data[..mid]` and `data[mid..]`.
fn merge<T: Ord + Clone>(data: &mut [T], mid: usize) {
    let mut scratch = Vec::with_capacity(data.len());
    let mut left = 0;
    let mut right = mid;
    while left < mid && right < data.len() {
        if data[right] < data[left] {
            scratch.push(data[right].clone());
            right += 1;
        } else {
            scratch.push(data[left].clone());
            left += 1;
        }
    }
    scratch.extend_from_slice(&data[left..mid]);
    scratch.extend_from_slice(&data[right..]);
    for (slot, value) in data.iter_mut().zip(scratch.drain(..)) {
        *slot = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_sort_basic() {
        let mut data = [7, 2, 9, 4, 3, 8, 1];
        merge_sort(&mut data);
        assert_eq!(data, [1, 2, 3, 4, 7, 8, 9]);
    }

    #[test]
    fn test_merge_sort_empty_and_single() {
        let mut empty: [i32; 0] = [];
        merge_sort(&mut empty);
        let mut single = [5];
        merge_sort(&mut single);
        assert_eq!(single, [5]);
    }

    #[test]
    fn test_merge_sort_left_half_exhausts_first() {
        let mut data = [1, 2, 8, 9, 3, 4, 5];
        merge_sort(&mut data);
        assert_eq!(data, [1, 2, 3, 4, 5, 8, 9]);
    }

    #[test]
    fn test_merge_sort_strings() {
        let mut data = vec![
            String::from("pear"),
            String::from("apple"),
            String::from("fig"),
        ];
        merge_sort(&mut data);
        assert_eq!(data, ["apple", "fig", "pear"]);
    }

    /// A pair ordered by its numeric key only, so equal keys are
    /// observable through the payload character.
    #[derive(Clone, Copy, Debug)]
    struct Keyed(i32, char);

    impl PartialEq for Keyed {
        fn eq(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }

    impl Eq for Keyed {}

    impl PartialOrd for Keyed {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Keyed {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.0.cmp(&other.0)
        }
    }

    #[test]
    fn test_merge_keeps_left_on_tie() {
        let mut data = [Keyed(2, 'a'), Keyed(1, 'b'), Keyed(2, 'c'), Keyed(1, 'd')];
        merge_sort(&mut data);
        let tags: Vec<char> = data.iter().map(|k| k.1).collect();
        assert_eq!(tags, ['b', 'd', 'a', 'c']);
    }
}
