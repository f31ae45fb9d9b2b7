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

//! Two-dimensional k-d tree for nearest-neighbor queries.
//!
//! The tree is built once from a point set by splitting at the median of
//! the current axis (x at even depths, y at odd depths) and recursing into
//! both halves. A nearest-neighbor query descends into the half containing
//! the query point first, then crosses the splitting plane only when the
//! plane is closer than the best distance found so far.

use num_traits::{PrimInt, ToPrimitive};

/// A point in the plane with integer coordinates.
///
/// # Examples
///
/// ```rust
/// use keelson_trees::kd::Point;
///
/// let a = Point::new(0, 0);
/// let b = Point::new(3, 4);
/// assert_eq!(a.distance(&b), 5.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point<T>
where
    T: PrimInt,
{
    /// Creates a point from its coordinates.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Returns the Euclidean distance to `other`.
    ///
    /// Coordinates are widened to `f64` before subtracting, so unsigned
    /// coordinate types cannot underflow.
    pub fn distance(&self, other: &Point<T>) -> f64 {
        let dx = to_f64(self.x) - to_f64(other.x);
        let dy = to_f64(self.y) - to_f64(other.y);
        (dx * dx + dy * dy).sqrt()
    }
}

#[inline]
fn to_f64<T: ToPrimitive>(value: T) -> f64 {
    value
        .to_f64()
        .expect("point coordinate not representable as f64")
}

/// Returns the coordinate used for splitting at `depth`.
#[inline]
fn axis_value<T: PrimInt>(point: &Point<T>, depth: usize) -> T {
    if depth % 2 == 0 { point.x } else { point.y }
}

struct Node<T> {
    point: Point<T>,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

/// Tracks the closest point seen so far during a query.
struct Best<T> {
    point: Point<T>,
    distance: f64,
}

/// A static two-dimensional k-d tree over integer points.
///
/// # Examples
///
/// ```rust
/// use keelson_trees::kd::{KdTree, Point};
///
/// let tree = KdTree::from_points(vec![
///     Point::new(2, 3),
///     Point::new(5, 4),
///     Point::new(9, 6),
///     Point::new(4, 7),
///     Point::new(8, 1),
///     Point::new(7, 2),
/// ]);
/// assert_eq!(tree.nearest(Point::new(9, 2)), Some(Point::new(8, 1)));
/// ```
pub struct KdTree<T>
where
    T: PrimInt,
{
    root: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> KdTree<T>
where
    T: PrimInt,
{
    /// Builds a balanced tree from `points` by repeated median splits.
    pub fn from_points(mut points: Vec<Point<T>>) -> Self {
        let len = points.len();
        let root = Self::build(&mut points, 0);
        Self { root, len }
    }

    /// Returns the number of points stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the stored point closest to `query`, or `None` if the tree
    /// is empty.
    ///
    /// Ties are broken in favor of the first closest point encountered
    /// during traversal.
    pub fn nearest(&self, query: Point<T>) -> Option<Point<T>> {
        let root = self.root.as_deref()?;
        let mut best = Best {
            point: root.point,
            distance: query.distance(&root.point),
        };
        Self::nearest_in(Some(root), query, 0, &mut best);
        Some(best.point)
    }

    fn build(points: &mut [Point<T>], depth: usize) -> Option<Box<Node<T>>> {
        if points.is_empty() {
            return None;
        }
        let mid = points.len() / 2;
        points.select_nth_unstable_by_key(mid, |p| axis_value(p, depth));
        let point = points[mid];
        let (before, rest) = points.split_at_mut(mid);
        Some(Box::new(Node {
            point,
            left: Self::build(before, depth + 1),
            right: Self::build(&mut rest[1..], depth + 1),
        }))
    }

    fn nearest_in(node: Option<&Node<T>>, query: Point<T>, depth: usize, best: &mut Best<T>) {
        let Some(node) = node else {
            return;
        };
        let distance = query.distance(&node.point);
        if distance < best.distance {
            best.point = node.point;
            best.distance = distance;
        }

        let query_coord = axis_value(&query, depth);
        let split_coord = axis_value(&node.point, depth);
        let (near, far) = if query_coord < split_coord {
            (node.left.as_deref(), node.right.as_deref())
        } else {
            (node.right.as_deref(), node.left.as_deref())
        };

        Self::nearest_in(near, query, depth + 1, best);

        // The far half can only improve on the best candidate if the
        // splitting plane itself is closer than that candidate.
        let plane_distance = (to_f64(query_coord) - to_f64(split_coord)).abs();
        if plane_distance < best.distance {
            Self::nearest_in(far, query, depth + 1, best);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn brute_force_nearest(points: &[Point<i32>], query: Point<i32>) -> Option<f64> {
        points
            .iter()
            .map(|p| query.distance(p))
            .min_by(|a, b| a.partial_cmp(b).expect("distances are never NaN"))
    }

    #[test]
    fn test_empty_tree_has_no_nearest() {
        let tree: KdTree<i32> = KdTree::from_points(Vec::new());
        assert!(tree.is_empty());
        assert_eq!(tree.nearest(Point::new(0, 0)), None);
    }

    #[test]
    fn test_single_point() {
        let tree = KdTree::from_points(vec![Point::new(3, -2)]);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.nearest(Point::new(100, 100)), Some(Point::new(3, -2)));
    }

    #[test]
    fn test_query_point_in_set_is_its_own_nearest() {
        let points = vec![
            Point::new(1, 1),
            Point::new(4, 4),
            Point::new(-3, 2),
            Point::new(0, -7),
        ];
        let tree = KdTree::from_points(points.clone());
        for point in points {
            assert_eq!(tree.nearest(point), Some(point));
        }
    }

    #[test]
    fn test_duplicate_points() {
        let tree = KdTree::from_points(vec![
            Point::new(2, 2),
            Point::new(2, 2),
            Point::new(9, 9),
        ]);
        assert_eq!(tree.nearest(Point::new(1, 1)), Some(Point::new(2, 2)));
    }

    #[test]
    fn test_pruning_crosses_the_plane_when_needed() {
        // The nearest point sits on the far side of the first split.
        let tree = KdTree::from_points(vec![
            Point::new(0, 0),
            Point::new(10, 0),
            Point::new(11, 0),
            Point::new(20, 0),
        ]);
        assert_eq!(tree.nearest(Point::new(9, 0)), Some(Point::new(10, 0)));
    }

    #[test]
    fn test_randomized_against_brute_force() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let points: Vec<Point<i32>> = (0..200)
            .map(|_| Point::new(rng.random_range(-50..50), rng.random_range(-50..50)))
            .collect();
        let tree = KdTree::from_points(points.clone());
        for _ in 0..200 {
            let query = Point::new(rng.random_range(-60..60), rng.random_range(-60..60));
            let found = tree
                .nearest(query)
                .expect("tree is non-empty")
                .distance(&query);
            let expected = brute_force_nearest(&points, query).expect("points are non-empty");
            // Several points may be equidistant; only the distance is unique.
            assert_eq!(found, expected);
        }
    }

    #[test]
    fn test_unsigned_coordinates() {
        let tree: KdTree<u32> = KdTree::from_points(vec![
            Point::new(1u32, 1),
            Point::new(5, 5),
            Point::new(10, 10),
        ]);
        assert_eq!(tree.nearest(Point::new(0u32, 0)), Some(Point::new(1, 1)));
    }
}
