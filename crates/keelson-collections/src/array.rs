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

//! A growable contiguous array with an explicit capacity policy.
//!
//! `DynArray<T>` owns its buffer directly and applies a fixed set of
//! capacity rules rather than deferring to `Vec`:
//!
//! - a fresh array allocates [`MIN_CAPACITY`] slots up front;
//! - building from `n` known elements allocates `n * 3 / 2` slots;
//! - a push into a full buffer grows it to `capacity + capacity / 2`;
//! - any removal that leaves `len * 4 <= capacity` halves the buffer.
//!
//! The capacity never drops below [`MIN_CAPACITY`], so the buffer is
//! allocated for the whole lifetime of the array and the pointer is never
//! dangling. Zero-sized element types are rejected at construction.
//!
//! Unsafe code is confined to buffer management (allocation, raw reads and
//! writes, element shifts) and every block states the bounds it relies on.

use keelson_core::fmt::write_sequence;
use std::alloc::{self, Layout};
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};
use std::ptr::{self, NonNull};

/// The smallest capacity a `DynArray` will ever hold.
pub const MIN_CAPACITY: usize = 6;

/// A growable contiguous array of `T` with eager minimum allocation,
/// 1.5x growth, and quarter-occupancy shrinking.
///
/// # Examples
///
/// ```rust
/// use keelson_collections::array::DynArray;
///
/// let mut arr = DynArray::new();
/// arr.push_back(1);
/// arr.push_back(2);
/// arr.push_front(0);
/// assert_eq!(arr.as_slice(), &[0, 1, 2]);
/// assert_eq!(arr.capacity(), 6);
/// ```
pub struct DynArray<T> {
    ptr: NonNull<T>,
    cap: usize,
    len: usize,
    _marker: PhantomData<T>,
}

impl<T> DynArray<T> {
    /// Creates an empty array with [`MIN_CAPACITY`] slots preallocated.
    ///
    /// # Panics
    ///
    /// Panics if `T` is a zero-sized type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keelson_collections::array::{DynArray, MIN_CAPACITY};
    ///
    /// let arr: DynArray<i32> = DynArray::new();
    /// assert!(arr.is_empty());
    /// assert_eq!(arr.capacity(), MIN_CAPACITY);
    /// ```
    pub fn new() -> Self {
        Self::with_capacity(MIN_CAPACITY)
    }

    /// Creates an empty array with at least `capacity` slots preallocated.
    ///
    /// The effective capacity is clamped to [`MIN_CAPACITY`] from below.
    ///
    /// # Panics
    ///
    /// Panics if `T` is a zero-sized type or if the requested allocation
    /// size overflows.
    pub fn with_capacity(capacity: usize) -> Self {
        let cap = capacity.max(MIN_CAPACITY);
        Self {
            ptr: Self::allocate(cap),
            cap,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns the number of elements in the array.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the array contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots the current buffer holds.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Returns a shared slice over the elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: the first `len` slots are always initialized.
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// Returns a mutable slice over the elements.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: the first `len` slots are always initialized.
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Returns a reference to the element at `index`, or `None` if it is
    /// out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Returns a mutable reference to the element at `index`, or `None` if
    /// it is out of bounds.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Returns an iterator over the elements.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns a mutable iterator over the elements.
    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Appends `value` to the end of the array, growing the buffer by half
    /// if it is full.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keelson_collections::array::DynArray;
    ///
    /// let mut arr: DynArray<i32> = (0..6).collect();
    /// assert_eq!(arr.capacity(), 9);
    /// arr.push_back(6);
    /// assert_eq!(arr.as_slice(), &[0, 1, 2, 3, 4, 5, 6]);
    /// ```
    pub fn push_back(&mut self, value: T) {
        if self.len == self.cap {
            self.reallocate(Self::grown_capacity(self.cap));
        }
        // SAFETY: len < cap after the growth check, so slot `len` is
        // within the buffer and currently uninitialized.
        unsafe {
            ptr::write(self.ptr.as_ptr().add(self.len), value);
        }
        self.len += 1;
    }

    /// Inserts `value` at the front of the array, shifting all elements
    /// one slot to the right.
    pub fn push_front(&mut self, value: T) {
        if self.len == self.cap {
            self.reallocate(Self::grown_capacity(self.cap));
        }
        // SAFETY: len < cap, so shifting `len` elements up by one stays
        // within the buffer and slot 0 is free afterwards.
        unsafe {
            ptr::copy(self.ptr.as_ptr(), self.ptr.as_ptr().add(1), self.len);
            ptr::write(self.ptr.as_ptr(), value);
        }
        self.len += 1;
    }

    /// Removes and returns the last element, or `None` if the array is
    /// empty. May shrink the buffer.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: slot `len` held the last element and is now outside the
        // initialized region, so reading it out transfers ownership.
        let value = unsafe { ptr::read(self.ptr.as_ptr().add(self.len)) };
        self.maybe_shrink();
        Some(value)
    }

    /// Removes and returns the first element, shifting the rest down, or
    /// `None` if the array is empty. May shrink the buffer.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        // SAFETY: slot 0 is initialized; after reading it out, the
        // remaining `len - 1` elements are shifted down over it.
        let value = unsafe {
            let value = ptr::read(self.ptr.as_ptr());
            ptr::copy(self.ptr.as_ptr().add(1), self.ptr.as_ptr(), self.len - 1);
            value
        };
        self.len -= 1;
        self.maybe_shrink();
        Some(value)
    }

    /// Shortens the array to `new_len` elements, dropping the tail. Does
    /// nothing if `new_len >= len()`. May shrink the buffer.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        let old_len = self.len;
        self.len = new_len;
        for index in new_len..old_len {
            // SAFETY: slots `new_len..old_len` are initialized and no
            // longer reachable now that `len` has been lowered.
            unsafe {
                ptr::drop_in_place(self.ptr.as_ptr().add(index));
            }
        }
        self.maybe_shrink();
    }

    /// Removes all elements. May shrink the buffer back to the minimum.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Retains only the elements for which `keep` returns `true`, passing
    /// each element's current index alongside it. May shrink the buffer.
    ///
    /// If `keep` panics, elements that were not yet visited leak instead
    /// of being dropped twice.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keelson_collections::array::DynArray;
    ///
    /// let mut arr: DynArray<i32> = (0..8).collect();
    /// arr.retain(|index, &value| index >= 2 && value % 2 == 0);
    /// assert_eq!(arr.as_slice(), &[2, 4, 6]);
    /// ```
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(usize, &T) -> bool,
    {
        let old_len = self.len;
        self.len = 0;
        let mut write = 0;
        for read in 0..old_len {
            // SAFETY: `read` is within the previously initialized region;
            // `write <= read`, so the destination slot has already been
            // read out or dropped.
            unsafe {
                let item = self.ptr.as_ptr().add(read);
                if keep(read, &*item) {
                    if write != read {
                        ptr::copy_nonoverlapping(item, self.ptr.as_ptr().add(write), 1);
                    }
                    write += 1;
                } else {
                    ptr::drop_in_place(item);
                }
            }
        }
        self.len = write;
        self.maybe_shrink();
    }

    /// Computes the capacity a full buffer grows to.
    #[inline]
    fn grown_capacity(cap: usize) -> usize {
        (cap + cap / 2).max(MIN_CAPACITY)
    }

    /// Halves the buffer when occupancy has dropped to a quarter or less.
    fn maybe_shrink(&mut self) {
        if self.cap > MIN_CAPACITY && self.len * 4 <= self.cap {
            let new_cap = (self.cap / 2).max(MIN_CAPACITY);
            self.reallocate(new_cap);
        }
    }

    /// Allocates a fresh buffer of `cap` slots.
    ///
    /// # Panics
    ///
    /// Panics if `T` is zero-sized or the layout computation overflows.
    fn allocate(cap: usize) -> NonNull<T> {
        assert!(
            std::mem::size_of::<T>() != 0,
            "DynArray does not support zero-sized element types"
        );
        debug_assert!(cap >= MIN_CAPACITY);
        let layout = Layout::array::<T>(cap).expect("DynArray capacity overflows the address space");
        // SAFETY: the layout has non-zero size because `T` is not
        // zero-sized and `cap >= MIN_CAPACITY`.
        let raw = unsafe { alloc::alloc(layout) };
        match NonNull::new(raw as *mut T) {
            Some(ptr) => ptr,
            None => alloc::handle_alloc_error(layout),
        }
    }

    /// Moves the elements into a fresh buffer of `new_cap` slots and
    /// releases the old one.
    fn reallocate(&mut self, new_cap: usize) {
        debug_assert!(
            new_cap >= self.len,
            "called `DynArray::reallocate` with a capacity below the current length"
        );
        let new_ptr = Self::allocate(new_cap);
        // SAFETY: both buffers hold at least `len` slots and do not
        // overlap; the old buffer was allocated with layout `cap`.
        unsafe {
            ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), self.len);
            alloc::dealloc(self.ptr.as_ptr() as *mut u8, Self::layout_of(self.cap));
        }
        self.ptr = new_ptr;
        self.cap = new_cap;
    }

    #[inline]
    fn layout_of(cap: usize) -> Layout {
        Layout::array::<T>(cap).expect("layout was validated at allocation time")
    }
}

impl<T> Drop for DynArray<T> {
    fn drop(&mut self) {
        // SAFETY: the first `len` slots are initialized; the buffer was
        // allocated with layout `cap` and is released exactly once.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.len));
            alloc::dealloc(self.ptr.as_ptr() as *mut u8, Self::layout_of(self.cap));
        }
    }
}

// SAFETY: DynArray owns its elements; sending or sharing it is exactly as
// safe as sending or sharing the elements themselves.
unsafe impl<T: Send> Send for DynArray<T> {}
unsafe impl<T: Sync> Sync for DynArray<T> {}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynArray<T> {
    fn clone(&self) -> Self {
        Self::from(self.as_slice())
    }
}

impl<T: Clone> From<&[T]> for DynArray<T> {
    /// Builds an array from known elements, allocating one and a half
    /// times their count up front.
    fn from(values: &[T]) -> Self {
        let mut array = Self::with_capacity(values.len() * 3 / 2);
        array.extend(values.iter().cloned());
        array
    }
}

impl<T> FromIterator<T> for DynArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let mut array = Self::with_capacity(lower * 3 / 2);
        array.extend(iter);
        array
    }
}

impl<T> Extend<T> for DynArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynArray<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> Index<usize> for DynArray<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= len()`.
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(value) => value,
            None => panic!(
                "index out of bounds: the len is {} but the index is {}",
                self.len, index
            ),
        }
    }
}

impl<T> IndexMut<usize> for DynArray<T> {
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        match self.get_mut(index) {
            Some(value) => value,
            None => panic!(
                "index out of bounds: the len is {} but the index is {}",
                len, index
            ),
        }
    }
}

impl<T: PartialEq> PartialEq for DynArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynArray<T> {}

impl<T: fmt::Debug> fmt::Debug for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_sequence(f, self.iter())
    }
}
