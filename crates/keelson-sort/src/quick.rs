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

//! In-place quick sort.
//!
//! Recursive quick sort with a middle-element pivot and a single-pass
//! Lomuto partition. The middle pivot keeps sorted and reverse-sorted
//! input out of the quadratic worst case.

/// Sorts `data` ascending with an in-place quick sort.
///
/// `O(n log n)` expected, `O(n²)` worst case, `O(log n)` expected stack
/// depth, unstable. The pivot is the middle element, so already sorted
/// input stays on the expected path.
///
/// # Examples
///
/// ```rust
/// use keelson_sort::quick::quick_sort;
///
/// let mut data = [5, 1, 4, 2, 3];
/// quick_sort(&mut data);
/// assert_eq!(data, [1, 2, 3, 4, 5]);
/// ```
pub fn quick_sort<T: Ord>(data: &mut [T]) {
    if data.len() < 2 {
        return;
    }
    let pivot = partition(data);
    let (left, right) = data.split_at_mut(pivot);
    quick_sort(left);
    quick_sort(&mut right[1..]);
}

/// Partitions `data` around its middle element and returns the pivot's
/// final index. Everything left of it compares `<=` pivot, everything
/// right of it compares `>` pivot.
fn partition<T: Ord>(data: &mut [T]) -> usize {
    let last = data.len() - 1;
    data.swap(data.len() / 2, last);
    let mut store = 0;
    for i in 0..last {
        if data[i] <= data[last] {
            data.swap(i, store);
            store += 1;
        }
    }
    data.swap(store, last);
    store
}
