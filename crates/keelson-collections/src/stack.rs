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

//! LIFO stack with deferred physical removal.
//!
//! `Stack<T>` keeps its elements in a [`DynArray`] and tracks the logical
//! top with a cursor. A pop only moves the cursor; the popped slot stays
//! in the buffer as *slack* until enough of it accumulates, at which point
//! the whole dead suffix is reclaimed in a single truncation. Pushes reuse
//! dead slots before appending, so the buffer never holds gaps.
//!
//! Batching the cleanup keeps individual pops cheap and lets the backing
//! array's shrink policy fire once per burst instead of once per element.

use crate::array::DynArray;
use keelson_core::fmt::write_labeled_sequence;
use std::fmt;

/// Number of dead slots tolerated before the suffix is truncated.
const TRIM_SLACK: usize = 10;

/// A LIFO stack over [`DynArray`] with batched slot reclamation.
///
/// # Examples
///
/// ```rust
/// use keelson_collections::stack::Stack;
///
/// let mut stack: Stack<i32> = [1, 2, 3].into_iter().collect();
/// assert_eq!(stack.peek(), Some(&3));
/// assert_eq!(stack.pop(), Some(3));
/// assert_eq!(stack.len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Stack<T> {
    entries: DynArray<T>,
    top: usize,
}

impl<T: Clone> Stack<T> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self {
            entries: DynArray::new(),
            top: 0,
        }
    }

    /// Returns the number of elements on the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.top
    }

    /// Returns `true` if the stack holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.top == 0
    }

    /// Returns the number of popped slots that have not been physically
    /// reclaimed yet. Always below the trim threshold after a pop.
    #[inline]
    pub fn slack(&self) -> usize {
        self.entries.len() - self.top
    }

    /// Pushes `value` onto the stack, reusing a dead slot if one exists.
    pub fn push(&mut self, value: T) {
        if self.top < self.entries.len() {
            self.entries[self.top] = value;
        } else {
            self.entries.push_back(value);
        }
        self.top += 1;
    }

    /// Removes and returns the top element, or `None` if the stack is
    /// empty.
    ///
    /// The slot is only logically freed; once the dead suffix reaches the
    /// trim threshold it is reclaimed in one truncation.
    pub fn pop(&mut self) -> Option<T> {
        if self.top == 0 {
            return None;
        }
        self.top -= 1;
        let value = self.entries[self.top].clone();
        if self.entries.len() - self.top >= TRIM_SLACK {
            self.entries.truncate(self.top);
        }
        Some(value)
    }

    /// Returns a reference to the top element without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        if self.top == 0 {
            return None;
        }
        self.entries.get(self.top - 1)
    }

    /// Removes all elements and reclaims the buffer.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.top = 0;
    }

    /// Returns the live elements, bottom first.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.entries.as_slice()[..self.top]
    }
}

impl<T: Clone> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        for value in iter {
            stack.push(value);
        }
        stack
    }
}

impl<T: Clone + fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_labeled_sequence(f, "Stack", self.as_slice())
    }
}
