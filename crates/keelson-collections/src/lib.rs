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

//! # Keelson Collections
//!
//! Array-backed containers with an explicit, inspectable capacity policy.
//!
//! The centerpiece is `array::DynArray`, a growable contiguous array that
//! manages its own buffer: fresh arrays start at six slots, a full push
//! grows the buffer by half, and any removal that leaves the array at a
//! quarter of its capacity (or less) halves the buffer again. The stack
//! and queue are thin adapters over it that trade immediate reclamation
//! for batched cleanup.
//!
//! ## Modules
//!
//! - `array`: the growable array and its capacity policy.
//! - `stack`: LIFO adapter with deferred physical removal. Pops move a
//!   cursor and dead slots are reclaimed in one truncation once enough
//!   slack accumulates.
//! - `queue`: FIFO adapter with a logical front cursor. Consumed elements
//!   are dropped in a single compaction pass once the cursor has advanced
//!   far enough.

pub mod array;
pub mod queue;
pub mod stack;
