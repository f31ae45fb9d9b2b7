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

//! # Keelson
//!
//! Umbrella crate re-exporting the whole workspace: sequence containers
//! built on a hand-rolled growable buffer, query trees over integer data,
//! a disjoint-set forest, and a family of in-place comparison sorts.
//!
//! ## Crates
//!
//! - `keelson-core`: shared formatting and ordering helpers.
//! - `keelson-collections`: `DynArray`, `Stack`, and `Queue`.
//! - `keelson-trees`: `SegmentTree`, `FenwickTree`, `KdTree`, and
//!   `DisjointSet`.
//! - `keelson-sort`: nine in-place sorts from bubble to heap.
//!
//! ## Example
//!
//! ```rust
//! use keelson::collections::Stack;
//! use keelson::sort::quick_sort;
//!
//! let mut stack: Stack<i32> = [3, 1, 2].into_iter().collect();
//! assert_eq!(stack.pop(), Some(2));
//!
//! let mut data = [3, 1, 2];
//! quick_sort(&mut data);
//! assert_eq!(data, [1, 2, 3]);
//! ```

pub mod collections {
    //! Sequence containers backed by [`DynArray`].
    pub use keelson_collections::array::{DynArray, MIN_CAPACITY};
    pub use keelson_collections::queue::Queue;
    pub use keelson_collections::stack::Stack;
}

pub mod trees {
    //! Range-query trees, spatial search, and the disjoint-set forest.
    pub use keelson_trees::disjoint_set::DisjointSet;
    pub use keelson_trees::fenwick::FenwickTree;
    pub use keelson_trees::kd::{KdTree, Point};
    pub use keelson_trees::segment::SegmentTree;
}

pub mod sort {
    //! In-place ascending comparison sorts.
    pub use keelson_sort::exchange::{bubble_sort, shaker_sort};
    pub use keelson_sort::heap::heap_sort;
    pub use keelson_sort::insertion::{binary_insertion_sort, insertion_sort};
    pub use keelson_sort::merge::merge_sort;
    pub use keelson_sort::quick::quick_sort;
    pub use keelson_sort::selection::{double_selection_sort, selection_sort};
}

pub mod util {
    //! Shared helpers used across the workspace.
    pub use keelson_core::fmt::{write_labeled_sequence, write_sequence};
    pub use keelson_core::order::{is_sorted, is_sorted_by};
}
