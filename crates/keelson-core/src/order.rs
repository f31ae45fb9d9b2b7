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

//! Sortedness predicates shared across the workspace.

use std::cmp::Ordering;

/// Checks whether `data` is sorted in ascending order.
///
/// Empty and single-element slices are trivially sorted. Equal neighbors
/// are allowed.
///
/// # Examples
///
/// ```rust
/// use keelson_core::order::is_sorted;
///
/// assert!(is_sorted(&[1, 2, 2, 3]));
/// assert!(!is_sorted(&[3, 1, 2]));
/// assert!(is_sorted::<i32>(&[]));
/// ```
#[inline]
pub fn is_sorted<T>(data: &[T]) -> bool
where
    T: Ord,
{
    data.windows(2).all(|w| w[0] <= w[1])
}

/// Checks whether `data` is sorted in ascending order under `compare`.
///
/// # Examples
///
/// ```rust
/// use keelson_core::order::is_sorted_by;
///
/// let descending = [3, 2, 1];
/// assert!(is_sorted_by(&descending, |a, b| b.cmp(a)));
/// ```
#[inline]
pub fn is_sorted_by<T, F>(data: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    data.windows(2)
        .all(|w| compare(&w[0], &w[1]) != Ordering::Greater)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_sorted_empty_and_single() {
        assert!(is_sorted::<i32>(&[]));
        assert!(is_sorted(&[42]));
    }

    #[test]
    fn test_is_sorted_with_duplicates() {
        assert!(is_sorted(&[1, 1, 2, 3, 3]));
    }

    #[test]
    fn test_is_sorted_rejects_descent() {
        assert!(!is_sorted(&[1, 3, 2]));
    }

    #[test]
    fn test_is_sorted_by_reverse_order() {
        assert!(is_sorted_by(&[9, 5, 1], |a, b| b.cmp(a)));
        assert!(!is_sorted_by(&[1, 5, 9], |a, b| b.cmp(a)));
    }
}
