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

//! FIFO queue with batched front compaction.
//!
//! `Queue<T>` pushes at the tail of a [`DynArray`] and pops by advancing a
//! logical front cursor. Consumed elements stay in the buffer until the
//! cursor has advanced past a fixed threshold; they are then dropped in a
//! single `retain` pass and the cursor resets. This amortizes the shift
//! cost that a naive front removal would pay on every pop.

use crate::array::DynArray;
use keelson_core::fmt::write_labeled_sequence;
use std::fmt;

/// Number of consumed slots tolerated before the prefix is compacted.
const COMPACT_THRESHOLD: usize = 10;

/// A FIFO queue over [`DynArray`] with batched prefix compaction.
///
/// # Examples
///
/// ```rust
/// use keelson_collections::queue::Queue;
///
/// let mut queue: Queue<i32> = [1, 2, 3].into_iter().collect();
/// assert_eq!(queue.front(), Some(&1));
/// assert_eq!(queue.back(), Some(&3));
/// assert_eq!(queue.pop_front(), Some(1));
/// assert_eq!(queue.len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Queue<T> {
    entries: DynArray<T>,
    front: usize,
}

impl<T: Clone> Queue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            entries: DynArray::new(),
            front: 0,
        }
    }

    /// Returns the number of elements waiting in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len() - self.front
    }

    /// Returns `true` if the queue holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front == self.entries.len()
    }

    /// Returns the number of consumed slots that have not been compacted
    /// away yet. Always below the compaction threshold after a pop.
    #[inline]
    pub fn slack(&self) -> usize {
        self.front
    }

    /// Appends `value` at the back of the queue.
    pub fn push(&mut self, value: T) {
        self.entries.push_back(value);
    }

    /// Removes and returns the front element, or `None` if the queue is
    /// empty.
    ///
    /// The element's slot is only logically consumed; once the cursor
    /// reaches the compaction threshold, the whole consumed prefix is
    /// dropped in one pass and the cursor resets.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let value = self.entries[self.front].clone();
        self.front += 1;
        if self.front >= COMPACT_THRESHOLD {
            let cutoff = self.front;
            self.entries.retain(|index, _| index >= cutoff);
            self.front = 0;
        }
        Some(value)
    }

    /// Returns a reference to the front element without removing it.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.entries.get(self.front)
    }

    /// Returns a reference to the most recently pushed element.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.entries.get(self.entries.len() - 1)
    }

    /// Removes all elements and reclaims the buffer.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.front = 0;
    }

    /// Returns the live elements, front first.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.entries.as_slice()[self.front..]
    }
}

impl<T: Clone> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        for value in iter {
            queue.push(value);
        }
        queue
    }
}

impl<T: Clone + fmt::Display> fmt::Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_labeled_sequence(f, "Queue", self.as_slice())
    }
}
