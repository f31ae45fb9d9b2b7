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

//! Exchange sorts: bubble and cocktail shaker.
//!
//! Both walk the slice swapping adjacent out-of-order pairs and terminate
//! early on a swap-free pass. Only strictly smaller elements move left,
//! so equal elements never overtake each other and both sorts are stable.

/// Sorts `data` ascending by bubbling the largest remaining element to
/// the end of each pass.
///
/// `O(n²)` worst case, `O(n)` on already sorted input thanks to the
/// early exit, in place, stable.
///
/// # Examples
///
/// ```rust
/// use keelson_sort::exchange::bubble_sort;
///
/// let mut data = [3, 1, 2];
/// bubble_sort(&mut data);
/// assert_eq!(data, [1, 2, 3]);
/// ```
pub fn bubble_sort<T: Ord>(data: &mut [T]) {
    let len = data.len();
    for pass in 0..len {
        let mut swapped = false;
        for i in 0..len - pass - 1 {
            if data[i + 1] < data[i] {
                data.swap(i, i + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Sorts `data` ascending by alternating forward and backward bubble
/// passes, settling one element at each end per round.
///
/// Handles "turtles" (small elements near the end) better than plain
/// bubble sort; still `O(n²)` worst case, in place, stable.
///
/// # Examples
///
/// ```rust
/// use keelson_sort::exchange::shaker_sort;
///
/// let mut data = [2, 3, 4, 1];
/// shaker_sort(&mut data);
/// assert_eq!(data, [1, 2, 3, 4]);
/// ```
pub fn shaker_sort<T: Ord>(data: &mut [T]) {
    if data.len() < 2 {
        return;
    }
    let mut start = 0;
    let mut end = data.len() - 1;
    while start < end {
        let mut swapped = false;
        for i in start..end {
            if data[i + 1] < data[i] {
                data.swap(i, i + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
        swapped = false;
        for i in (start..end).rev() {
            if data[i + 1] < data[i] {
                data.swap(i, i + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
        start += 1;
        end -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bubble_sort_basic() {
        let mut data = [6, 2, 9, 1, 5];
        bubble_sort(&mut data);
        assert_eq!(data, [1, 2, 5, 6, 9]);
    }

    #[test]
    fn test_bubble_sort_sorted_input_exits_early() {
        let mut data = [1, 2, 3, 4, 5];
        bubble_sort(&mut data);
        assert_eq!(data, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_bubble_sort_empty() {
        let mut data: [i32; 0] = [];
        bubble_sort(&mut data);
    }

    #[test]
    fn test_shaker_sort_basic() {
        let mut data = [4, 8, 1, 9, 2, 7];
        shaker_sort(&mut data);
        assert_eq!(data, [1, 2, 4, 7, 8, 9]);
    }

    #[test]
    fn test_shaker_sort_turtle_at_end() {
        // The worst bubble-sort input: a small element at the very end.
        let mut data = [2, 3, 4, 5, 6, 1];
        shaker_sort(&mut data);
        assert_eq!(data, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_shaker_sort_reverse() {
        let mut data: Vec<i32> = (0..30).rev().collect();
        shaker_sort(&mut data);
        assert_eq!(data, (0..30).collect::<Vec<_>>());
    }
}
