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

//! Selection sorts.
//!
//! Both variants repeatedly select extreme elements from the unsorted
//! region and park them at its edges. Neither is stable: the long-distance
//! swaps can carry an element past equals.

/// Sorts `data` ascending by repeatedly selecting the minimum of the
/// unsorted suffix and swapping it to the front.
///
/// `O(n²)` comparisons regardless of input, `O(n)` swaps, in place,
/// unstable.
///
/// # Examples
///
/// ```rust
/// use keelson_sort::selection::selection_sort;
///
/// let mut data = [4, 1, 3, 2];
/// selection_sort(&mut data);
/// assert_eq!(data, [1, 2, 3, 4]);
/// ```
pub fn selection_sort<T: Ord>(data: &mut [T]) {
    for i in 0..data.len() {
        let mut smallest = i;
        for j in i + 1..data.len() {
            if data[j] < data[smallest] {
                smallest = j;
            }
        }
        data.swap(i, smallest);
    }
}

/// Sorts `data` ascending by selecting both the minimum and the maximum
/// of the unsorted region in a single pass, placing them at its two ends.
///
/// Roughly half the passes of plain selection sort; still `O(n²)`,
/// in place, unstable.
///
/// # Examples
///
/// ```rust
/// use keelson_sort::selection::double_selection_sort;
///
/// let mut data = [9, 2, 8, 3, 7, 4];
/// double_selection_sort(&mut data);
/// assert_eq!(data, [2, 3, 4, 7, 8, 9]);
/// ```
pub fn double_selection_sort<T: Ord>(data: &mut [T]) {
    if data.is_empty() {
        return;
    }
    let mut low = 0;
    let mut high = data.len() - 1;
    while low < high {
        let mut smallest = low;
        let mut largest = low;
        for i in low..=high {
            if data[i] < data[smallest] {
                smallest = i;
            }
            if data[i] > data[largest] {
                largest = i;
            }
        }
        data.swap(low, smallest);
        // Placing the minimum may have displaced the maximum.
        let largest = if largest == low { smallest } else { largest };
        data.swap(high, largest);
        low += 1;
        high -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keelson_core::order::is_sorted;

    #[test]
    fn test_selection_sort_basic() {
        let mut data = [5, 3, 8, 1, 9, 2];
        selection_sort(&mut data);
        assert_eq!(data, [1, 2, 3, 5, 8, 9]);
    }

    #[test]
    fn test_selection_sort_handles_empty_and_single() {
        let mut empty: [i32; 0] = [];
        selection_sort(&mut empty);
        let mut single = [42];
        selection_sort(&mut single);
        assert_eq!(single, [42]);
    }

    #[test]
    fn test_double_selection_sort_basic() {
        let mut data = [5, 3, 8, 1, 9, 2, 7];
        double_selection_sort(&mut data);
        assert!(is_sorted(&data));
    }

    #[test]
    fn test_double_selection_displaced_maximum() {
        // Maximum sits at the front, where the minimum lands.
        let mut data = [9, 5, 1, 7, 3];
        double_selection_sort(&mut data);
        assert_eq!(data, [1, 3, 5, 7, 9]);
    }

    #[test]
    fn test_double_selection_minimum_at_back() {
        let mut data = [4, 7, 2, 8, 1];
        double_selection_sort(&mut data);
        assert_eq!(data, [1, 2, 4, 7, 8]);
    }

    #[test]
    fn test_double_selection_all_equal() {
        let mut data = [6, 6, 6, 6];
        double_selection_sort(&mut data);
        assert_eq!(data, [6, 6, 6, 6]);
    }
}
