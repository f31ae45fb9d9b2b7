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

//! Sequence rendering helpers.
//!
//! Every container in the workspace prints its elements the same way:
//! a comma-separated list between square brackets, optionally preceded by
//! a label naming the structure. Centralizing the rendering here keeps the
//! `Display` impls in the collection crates down to a single call and
//! guarantees that logs and diagnostics stay uniform.

use std::fmt::{self, Display, Formatter};

/// Writes the elements of `items` as `[a, b, c]`.
///
/// An empty iterator renders as `[]`.
///
/// # Examples
///
/// ```rust
/// use keelson_core::fmt::write_sequence;
/// use std::fmt::{self, Display, Formatter};
///
/// struct Triple;
///
/// impl Display for Triple {
///     fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
///         write_sequence(f, [1, 2, 3])
///     }
/// }
///
/// assert_eq!(format!("{}", Triple), "[1, 2, 3]");
/// ```
pub fn write_sequence<I>(f: &mut Formatter<'_>, items: I) -> fmt::Result
where
    I: IntoIterator,
    I::Item: Display,
{
    write!(f, "[")?;
    for (position, item) in items.into_iter().enumerate() {
        if position > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    write!(f, "]")
}

/// Writes `items` as a labeled sequence: `Label:` on its own line followed
/// by an indented `[a, b, c]`.
///
/// # Examples
///
/// ```rust
/// use keelson_core::fmt::write_labeled_sequence;
/// use std::fmt::{self, Display, Formatter};
///
/// struct Pair;
///
/// impl Display for Pair {
///     fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
///         write_labeled_sequence(f, "Pair", [4, 5])
///     }
/// }
///
/// assert_eq!(format!("{}", Pair), "Pair:\n\t[4, 5]");
/// ```
pub fn write_labeled_sequence<I>(f: &mut Formatter<'_>, label: &str, items: I) -> fmt::Result
where
    I: IntoIterator,
    I::Item: Display,
{
    write!(f, "{}:\n\t", label)?;
    write_sequence(f, items)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Rendered<'a>(&'a [i32]);

    impl Display for Rendered<'_> {
        fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
            write_sequence(f, self.0)
        }
    }

    struct Labeled<'a>(&'a str, &'a [i32]);

    impl Display for Labeled<'_> {
        fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
            write_labeled_sequence(f, self.0, self.1)
        }
    }

    #[test]
    fn test_write_sequence_empty() {
        assert_eq!(format!("{}", Rendered(&[])), "[]");
    }

    #[test]
    fn test_write_sequence_single() {
        assert_eq!(format!("{}", Rendered(&[7])), "[7]");
    }

    #[test]
    fn test_write_sequence_multiple() {
        assert_eq!(format!("{}", Rendered(&[1, 2, 3])), "[1, 2, 3]");
    }

    #[test]
    fn test_write_labeled_sequence() {
        assert_eq!(
            format!("{}", Labeled("Stack", &[1, 2, 3])),
            "Stack:\n\t[1, 2, 3]"
        );
    }
}
