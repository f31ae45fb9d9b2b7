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

//! Disjoint-set forest (union-find).
//!
//! Elements are the indices `0..len`. `find` flattens every node on the
//! walked path directly onto the root (full path compression), and `union`
//! links the shallower tree under the deeper one (union by rank), giving
//! near-constant amortized cost per operation.

use std::cmp::Ordering;

/// A union-find structure over the indices `0..len`.
///
/// # Examples
///
/// ```rust
/// use keelson_trees::disjoint_set::DisjointSet;
///
/// let mut sets = DisjointSet::new(5);
/// assert!(sets.union(0, 1));
/// assert!(sets.union(1, 2));
/// assert!(sets.connected(0, 2));
/// assert!(!sets.connected(0, 3));
/// assert_eq!(sets.num_sets(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    sets: usize,
}

impl DisjointSet {
    /// Creates `len` singleton sets.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
            sets: len,
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if the structure holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint sets currently present.
    #[inline]
    pub fn num_sets(&self) -> usize {
        self.sets
    }

    /// Appends a fresh singleton set and returns its element index.
    pub fn grow(&mut self) -> usize {
        let index = self.parent.len();
        self.parent.push(index);
        self.rank.push(0);
        self.sets += 1;
        index
    }

    /// Returns the representative of the set containing `element`,
    /// compressing the walked path onto the root.
    ///
    /// # Panics
    ///
    /// Panics if `element >= len()`.
    pub fn find(&mut self, element: usize) -> usize {
        assert!(
            element < self.parent.len(),
            "disjoint set element {} out of bounds for length {}",
            element,
            self.parent.len()
        );
        let mut root = element;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut current = element;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// Merges the sets containing `a` and `b`. Returns `true` if two
    /// distinct sets were merged, `false` if they were already joined.
    ///
    /// # Panics
    ///
    /// Panics if `a >= len()` or `b >= len()`.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }
        let (child, parent) = match self.rank[root_a].cmp(&self.rank[root_b]) {
            Ordering::Less => (root_a, root_b),
            Ordering::Greater => (root_b, root_a),
            Ordering::Equal => {
                self.rank[root_b] += 1;
                (root_a, root_b)
            }
        };
        self.parent[child] = parent;
        self.sets -= 1;
        true
    }

    /// Returns `true` if `a` and `b` belong to the same set.
    ///
    /// # Panics
    ///
    /// Panics if `a >= len()` or `b >= len()`.
    #[inline]
    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }
}
