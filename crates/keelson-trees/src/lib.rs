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

//! # Keelson Trees
//!
//! Tree-shaped index structures: two range-sum trees over primitive
//! integers, a two-dimensional k-d tree for nearest-neighbor queries, and
//! a disjoint-set forest.
//!
//! ## Modules
//!
//! - `segment`: flat, iterative segment tree with point updates and
//!   half-open range sums in `O(log n)`.
//! - `fenwick`: binary indexed tree with point increments and prefix sums
//!   in `O(log n)`, lighter than the segment tree when only sums and
//!   deltas are needed.
//! - `kd`: median-split k-d tree over integer points with plane-distance
//!   pruning during nearest-neighbor search.
//! - `disjoint_set`: union-find with full path compression and union by
//!   rank, near-constant amortized operations.
//!
//! The numeric trees are generic over `num_traits::PrimInt`, so they work
//! with any primitive integer width without conversion noise at the call
//! site.

pub mod disjoint_set;
pub mod fenwick;
pub mod kd;
pub mod segment;
