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

//! # Keelson Core
//!
//! Shared building blocks for the Keelson data-structure and algorithm
//! collection. The crate is deliberately small: it holds the pieces that
//! more than one sibling crate needs, and nothing else.
//!
//! ## Modules
//!
//! - `fmt`: sequence rendering helpers that turn any `Display`-able
//!   iterator into the canonical `[a, b, c]` form, optionally prefixed
//!   with a structure label. Used by the container `Display` impls in
//!   `keelson-collections`.
//! - `order`: ascending sortedness predicates used by the sorting crate
//!   and by tests across the workspace.

pub mod fmt;
pub mod order;
