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

//! Heap sort.
//!
//! Builds a binary max-heap inside the slice, then repeatedly swaps the
//! root with the last unsorted element and sifts the new root down. No
//! allocation, no recursion.

/// Sorts `data` ascending with an in-place heap sort.
///
/// `O(n log n)` in all cases, `O(1)` space, unstable.
///
/// # Examples
///
/// ```rust
/// use keelson_sort::heap::heap_sort;
///
/// let mut data = [4, 10, 3, 5, 1];
/// heap_sort(&mut data);
/// assert_eq!(data, [1, 3, 4, 5, 10]);
/// ```
pub fn heap_sort<T: Ord>(data: &mut [T]) {
    let len = data.len();
    // Heapify bottom-up from the last parent.
    for i in (0..len / 2).rev() {
        sift_down(data, i);
    }
    for end in (1..len).rev() {
        data.swap(0, end);
        sift_down(&mut data[..end], 0);
    }
}

/// Restores the max-heap property for the subtree rooted at `root`,
/// assuming both child subtrees already satisfy it.
fn sift_down<T: Ord>(heap: &mut [T], mut root: usize) {
    loop {
        let left = 2 * root + 1;
        if left >= heap.len() {
            return;
        }
        let right = left + 1;
        let mut child = left;
        if right < heap.len() && heap[left] < heap[right] {
            child = right;
        }
        if heap[root] >= heap[child] {
            return;
        }
        heap.swap(root, child);
        root = child;
    }
}
